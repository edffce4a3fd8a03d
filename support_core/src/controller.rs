use std::cell::Cell;

use log::{debug, error, warn};

use crate::{
	config::EmailJsConfig,
	error::SubmitError,
	notice::Notifier,
	payload::{ContactFormPayload, SubmissionState},
	relay::MailRelay,
};

pub const SENT_MESSAGE: &str = "Message sent successfully!";

#[derive(Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
	/// The relay accepted the message and the payload has been cleared
	Sent,
	/// Another submission was already in flight, so nothing happened
	Ignored,
	/// The user has already been told; this is just so the caller knows
	Failed(SubmitError),
}

type StateListener = Box<dyn Fn(SubmissionState)>;

/// Drives one contact form: checks that we can actually reach the relay, sends the payload, and
/// tells the user how it went. Only one submission can be in flight at once.
pub struct ContactSubmissionController<R, N> {
	config: EmailJsConfig,
	relay: R,
	notifier: N,
	state: Cell<SubmissionState>,
	on_state_change: Option<StateListener>,
}

impl<R: MailRelay, N: Notifier> ContactSubmissionController<R, N> {
	pub fn new(config: EmailJsConfig, relay: R, notifier: N) -> Self {
		Self {
			config,
			relay,
			notifier,
			state: Cell::new(SubmissionState::Idle),
			on_state_change: None,
		}
	}

	/// Called with the new state every time it changes, so a view can disable its submit button
	#[must_use]
	pub fn on_state_change(mut self, listener: impl Fn(SubmissionState) + 'static) -> Self {
		self.on_state_change = Some(Box::new(listener));
		self
	}

	pub fn state(&self) -> SubmissionState {
		self.state.get()
	}

	fn transition(&self, to: SubmissionState) {
		debug!("contact submission: {:?} -> {to:?}", self.state.get());
		self.state.set(to);
		if let Some(listener) = &self.on_state_change {
			listener(to);
		}
	}

	/// Sends `payload` through the relay, clearing it if that worked. Every failure is turned into
	/// a notice for the user here, so the returned outcome never needs to be shown again.
	pub async fn submit(&self, payload: &mut ContactFormPayload) -> SubmitOutcome {
		if self.state.get().is_submitting() {
			debug!("Ignoring submit while another is still in flight");
			return SubmitOutcome::Ignored;
		}

		let credentials = match self.config.credentials() {
			Ok(creds) => creds,
			Err(err) => {
				warn!("{err}");
				self.notifier.error(err.user_message());
				return SubmitOutcome::Failed(err);
			}
		};

		self.transition(SubmissionState::Submitting);

		let outcome = match self.relay.send(&credentials, payload).await {
			Ok(()) => {
				self.notifier.success(SENT_MESSAGE);
				payload.clear();
				SubmitOutcome::Sent
			},
			Err(relay_err) => {
				error!("EmailJS error: {relay_err}");
				let err = SubmitError::from(relay_err);
				self.notifier.error(err.user_message());
				SubmitOutcome::Failed(err)
			}
		};

		self.transition(SubmissionState::Idle);
		outcome
	}
}
