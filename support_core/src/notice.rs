#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
	Success,
	Error,
}

impl NoticeKind {
	/// How long a toast of this kind stays on screen. Errors hang around longer so they can
	/// actually be read.
	#[must_use]
	pub fn display_ms(self) -> u32 {
		match self {
			Self::Success => 2000,
			Self::Error => 4000,
		}
	}

	#[must_use]
	pub fn css_class(self) -> &'static str {
		match self {
			Self::Success => "toast-success",
			Self::Error => "toast-error",
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
	pub kind: NoticeKind,
	pub message: String,
}

impl Notice {
	pub fn success(message: impl Into<String>) -> Self {
		Self { kind: NoticeKind::Success, message: message.into() }
	}

	pub fn error(message: impl Into<String>) -> Self {
		Self { kind: NoticeKind::Error, message: message.into() }
	}
}

/// A place to show the user a short, non-blocking message. Nothing is returned; once it's been
/// handed over, it's not our problem anymore.
pub trait Notifier {
	fn notify(&self, notice: Notice);

	fn success(&self, message: &str) {
		self.notify(Notice::success(message));
	}

	fn error(&self, message: &str) {
		self.notify(Notice::error(message));
	}
}

pub type NoticeId = u32;

/// The toasts currently on screen, oldest first
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeQueue {
	next_id: NoticeId,
	notices: Vec<(NoticeId, Notice)>,
}

impl NoticeQueue {
	pub fn push(&mut self, notice: Notice) -> NoticeId {
		let id = self.next_id;
		self.next_id = self.next_id.wrapping_add(1);
		self.notices.push((id, notice));
		id
	}

	/// Returns false if there was nothing with that id (e.g. it was already dismissed)
	pub fn dismiss(&mut self, id: NoticeId) -> bool {
		let before = self.notices.len();
		self.notices.retain(|(nid, _)| *nid != id);
		self.notices.len() != before
	}

	pub fn iter(&self) -> impl Iterator<Item = &(NoticeId, Notice)> {
		self.notices.iter()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.notices.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.notices.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::cell::RefCell;

	#[test]
	fn queue_keeps_insertion_order_and_unique_ids() {
		let mut queue = NoticeQueue::default();
		let first = queue.push(Notice::success("sent"));
		let second = queue.push(Notice::error("failed"));
		assert_ne!(first, second);

		let messages = queue.iter().map(|(_, n)| n.message.as_str()).collect::<Vec<_>>();
		assert_eq!(messages, ["sent", "failed"]);
	}

	#[test]
	fn dismiss_removes_only_the_matching_notice() {
		let mut queue = NoticeQueue::default();
		let first = queue.push(Notice::success("a"));
		let second = queue.push(Notice::success("b"));

		assert!(queue.dismiss(first));
		assert!(!queue.dismiss(first));
		assert_eq!(queue.len(), 1);
		assert_eq!(queue.iter().next().map(|(id, _)| *id), Some(second));

		assert!(queue.dismiss(second));
		assert!(queue.is_empty());
	}

	#[test]
	fn ids_are_not_reused_after_dismissal() {
		let mut queue = NoticeQueue::default();
		let first = queue.push(Notice::success("a"));
		queue.dismiss(first);
		assert_ne!(queue.push(Notice::success("b")), first);
	}

	#[test]
	fn provided_methods_tag_the_kind() {
		#[derive(Default)]
		struct Collect(RefCell<Vec<Notice>>);

		impl Notifier for Collect {
			fn notify(&self, notice: Notice) {
				self.0.borrow_mut().push(notice);
			}
		}

		let collect = Collect::default();
		collect.success("yay");
		collect.error("nay");

		assert_eq!(*collect.0.borrow(), [Notice::success("yay"), Notice::error("nay")]);
	}

	#[test]
	fn errors_stay_up_longer() {
		assert!(NoticeKind::Error.display_ms() > NoticeKind::Success.display_ms());
	}
}
