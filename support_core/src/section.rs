/// The three views on the page. Only one is ever shown, and people mostly land here to get in
/// touch, so that's the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
	About,
	Faq,
	#[default]
	Contact,
}

impl Section {
	/// In the order the tabs are laid out
	pub const ALL: [Self; 3] = [Self::About, Self::Faq, Self::Contact];

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::About => "About App",
			Self::Faq => "FAQ",
			Self::Contact => "Contact Support",
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_to_contact() {
		assert_eq!(Section::default(), Section::Contact);
	}

	#[test]
	fn tabs_are_in_display_order() {
		let labels = Section::ALL.map(Section::label);
		assert_eq!(labels, ["About App", "FAQ", "Contact Support"]);
	}
}
