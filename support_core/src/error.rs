use thiserror::Error;

pub const CONFIG_MISSING_MESSAGE: &str = "EmailJS configuration is missing";
pub const DELIVERY_FAILED_MESSAGE: &str = "Failed to send message. Please try again.";

/// Anything that can go wrong between the relay being handed a payload and it reporting back.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RelayError {
	#[error("request couldn't be sent: {0}")]
	Network(String),
	#[error("relay rejected the message with status {status}: {body}")]
	Rejected { status: u16, body: String },
	#[error("request body couldn't be encoded: {0}")]
	Encode(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
	#[error("EmailJS configuration is missing {}", .0.join(", "))]
	ConfigurationMissing(Vec<&'static str>),
	#[error("message delivery failed: {0}")]
	DeliveryFailed(#[from] RelayError),
}

impl SubmitError {
	/// What we show the user. Every delivery failure gets the same message, the details only go
	/// to the log.
	#[must_use]
	pub fn user_message(&self) -> &'static str {
		match self {
			Self::ConfigurationMissing(_) => CONFIG_MISSING_MESSAGE,
			Self::DeliveryFailed(_) => DELIVERY_FAILED_MESSAGE,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn delivery_failures_share_one_user_message() {
		let errs = [
			RelayError::Network("offline".into()),
			RelayError::Rejected { status: 400, body: "The template ID is invalid".into() },
			RelayError::Encode("bad".into()),
		];

		for err in errs {
			assert_eq!(SubmitError::from(err).user_message(), DELIVERY_FAILED_MESSAGE);
		}
	}

	#[test]
	fn missing_config_lists_variables_in_log_text() {
		let err = SubmitError::ConfigurationMissing(vec!["EMAILJS_SERVICE_ID", "EMAILJS_PUBLIC_KEY"]);
		assert_eq!(err.user_message(), CONFIG_MISSING_MESSAGE);
		assert_eq!(
			err.to_string(),
			"EmailJS configuration is missing EMAILJS_SERVICE_ID, EMAILJS_PUBLIC_KEY"
		);
	}
}
