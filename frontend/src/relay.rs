use gloo_net::http::Request;
use support_core::{
	relay::SEND_ENDPOINT,
	ContactFormPayload,
	Credentials,
	MailRelay,
	RelayError,
	SendRequest
};

/// Talks to the EmailJS REST API directly, the same thing their browser sdk does under the hood
pub struct EmailJsRelay;

impl MailRelay for EmailJsRelay {
	async fn send(&self, credentials: &Credentials<'_>, payload: &ContactFormPayload) -> Result<(), RelayError> {
		let body = SendRequest::new(credentials, payload);

		let request = Request::post(SEND_ENDPOINT)
			.json(&body)
			.map_err(|e| RelayError::Encode(e.to_string()))?;

		let res = request.send()
			.await
			.map_err(|e| RelayError::Network(e.to_string()))?;

		// EmailJS just sends back 'OK' on success, so there's nothing worth reading there
		if res.ok() {
			return Ok(());
		}

		let body = res.text().await.unwrap_or_else(|e| format!("Couldn't get text: {e:?}"));
		Err(RelayError::Rejected { status: res.status(), body })
	}
}
