use serde::Serialize;

// These renames are the template params the EmailJS template refers to, and the `name`s of the
// inputs on the form
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormPayload {
	#[serde(rename = "user_name")]
	pub sender_name: String,
	#[serde(rename = "user_email")]
	pub sender_email: String,
	pub subject: String,
	pub message: String,
}

impl ContactFormPayload {
	pub fn clear(&mut self) {
		*self = Self::default();
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.sender_name.is_empty()
			&& self.sender_email.is_empty()
			&& self.subject.is_empty()
			&& self.message.is_empty()
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
	#[default]
	Idle,
	Submitting,
}

impl SubmissionState {
	#[must_use]
	pub fn is_submitting(self) -> bool {
		self == Self::Submitting
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn clear_empties_every_field() {
		let mut payload = ContactFormPayload {
			sender_name: "Alice".into(),
			sender_email: "a@x.com".into(),
			subject: "Help".into(),
			message: "Hi".into(),
		};
		assert!(!payload.is_empty());

		payload.clear();
		assert!(payload.is_empty());
	}

	#[test]
	fn partially_filled_is_not_empty() {
		let payload = ContactFormPayload { message: "Hi".into(), ..ContactFormPayload::default() };
		assert!(!payload.is_empty());
	}
}
