use serde::Serialize;

use crate::{config::Credentials, error::RelayError, payload::ContactFormPayload};

pub const SEND_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Whatever actually gets the message out the door. We only care whether it worked or not; the
/// response body is never looked at.
// Everything here runs on the browser's single thread, so the returned futures don't need to be Send
#[allow(async_fn_in_trait)]
pub trait MailRelay {
	/// # Errors
	///
	/// Any failure to hand the message off to the relay service
	async fn send(&self, credentials: &Credentials<'_>, payload: &ContactFormPayload) -> Result<(), RelayError>;
}

/// The JSON body the EmailJS REST endpoint expects. `user_id` is what they call the public key.
#[derive(Serialize, Debug)]
pub struct SendRequest<'a> {
	pub service_id: &'a str,
	pub template_id: &'a str,
	pub user_id: &'a str,
	pub template_params: &'a ContactFormPayload,
}

impl<'a> SendRequest<'a> {
	#[must_use]
	pub fn new(credentials: &Credentials<'a>, payload: &'a ContactFormPayload) -> Self {
		Self {
			service_id: credentials.service_id,
			template_id: credentials.template_id,
			user_id: credentials.public_key,
			template_params: payload,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn request_body_uses_emailjs_field_names() {
		let creds = Credentials { service_id: "svc", template_id: "tpl", public_key: "pk" };
		let payload = ContactFormPayload {
			sender_name: "Alice".into(),
			sender_email: "a@x.com".into(),
			subject: "Help".into(),
			message: "Hi".into(),
		};

		let body = serde_json::to_value(SendRequest::new(&creds, &payload)).unwrap();
		assert_eq!(body, serde_json::json!({
			"service_id": "svc",
			"template_id": "tpl",
			"user_id": "pk",
			"template_params": {
				"user_name": "Alice",
				"user_email": "a@x.com",
				"subject": "Help",
				"message": "Hi"
			}
		}));
	}
}
