use crate::error::SubmitError;

pub const SERVICE_ID_VAR: &str = "EMAILJS_SERVICE_ID";
pub const TEMPLATE_ID_VAR: &str = "EMAILJS_TEMPLATE_ID";
pub const PUBLIC_KEY_VAR: &str = "EMAILJS_PUBLIC_KEY";

/// The three EmailJS credentials. Any of them may be missing at build time; that's only reported
/// once someone actually tries to send something.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmailJsConfig {
	pub service_id: Option<String>,
	pub template_id: Option<String>,
	pub public_key: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Credentials<'a> {
	pub service_id: &'a str,
	pub template_id: &'a str,
	pub public_key: &'a str,
}

impl EmailJsConfig {
	#[must_use]
	pub fn new(service_id: Option<&str>, template_id: Option<&str>, public_key: Option<&str>) -> Self {
		Self {
			service_id: service_id.map(str::to_owned),
			template_id: template_id.map(str::to_owned),
			public_key: public_key.map(str::to_owned),
		}
	}

	/// Names of the variables that are absent or empty, in declaration order
	#[must_use]
	pub fn missing(&self) -> Vec<&'static str> {
		[
			(SERVICE_ID_VAR, &self.service_id),
			(TEMPLATE_ID_VAR, &self.template_id),
			(PUBLIC_KEY_VAR, &self.public_key),
		].into_iter()
			.filter(|(_, val)| val.as_deref().is_none_or(str::is_empty))
			.map(|(name, _)| name)
			.collect()
	}

	/// # Errors
	///
	/// Returns [`SubmitError::ConfigurationMissing`] if any of the three values is absent or empty
	pub fn credentials(&self) -> Result<Credentials<'_>, SubmitError> {
		match (self.service_id.as_deref(), self.template_id.as_deref(), self.public_key.as_deref()) {
			(Some(service_id), Some(template_id), Some(public_key))
				if !service_id.is_empty() && !template_id.is_empty() && !public_key.is_empty() =>
				Ok(Credentials { service_id, template_id, public_key }),
			_ => Err(SubmitError::ConfigurationMissing(self.missing()))
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn complete_config_yields_credentials() {
		let config = EmailJsConfig::new(Some("service_x"), Some("template_y"), Some("key_z"));
		assert_eq!(config.credentials(), Ok(Credentials {
			service_id: "service_x",
			template_id: "template_y",
			public_key: "key_z",
		}));
		assert!(config.missing().is_empty());
	}

	#[test]
	fn empty_string_counts_as_missing() {
		let config = EmailJsConfig::new(Some(""), Some("X"), Some("Y"));
		assert_eq!(
			config.credentials(),
			Err(SubmitError::ConfigurationMissing(vec![SERVICE_ID_VAR]))
		);
	}

	#[test]
	fn default_config_is_missing_everything() {
		assert_eq!(
			EmailJsConfig::default().missing(),
			vec![SERVICE_ID_VAR, TEMPLATE_ID_VAR, PUBLIC_KEY_VAR]
		);
	}

	#[test]
	fn whitespace_is_not_treated_as_missing() {
		// only an empty value is rejected; a blank-looking key is left for the relay to refuse
		let config = EmailJsConfig::new(Some(" "), Some("X"), Some("Y"));
		assert!(config.credentials().is_ok());
	}
}
