// Copy for the static parts of the page. The FAQ answers and the about blurb are markdown so
// they can carry links and emphasis without having to touch the views.

pub const APP_NAME: &str = "GymMatrix";
pub const TAGLINE: &str = "Support Center";
pub const SUPPORT_EMAIL: &str = "support@gymmatrix.com";

pub const ABOUT_TITLE: &str = "About GymMatrix";
pub const ABOUT_BLURB: &str = "GymMatrix is your ultimate fitness companion, designed to transform your workout \
experience with advanced tracking, personalized routines, and professional guidance.";

/// A small titled card; used for both the app features and the contact details
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Card {
	pub title: &'static str,
	pub body: &'static str,
}

pub const FEATURES: [Card; 3] = [
	Card { title: "Workout Tracking", body: "Advanced progress monitoring and analytics" },
	Card { title: "Personal Training", body: "Connect with certified fitness experts" },
	Card { title: "Custom Plans", body: "Personalized workout schedules" },
];

pub const SUPPORT_CHANNELS: [Card; 3] = [
	Card { title: "Email Support", body: SUPPORT_EMAIL },
	Card { title: "Response Time", body: "Within 24 hours" },
	Card { title: "Support Hours", body: "Mon-Fri, 9AM-5PM EST" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqEntry {
	pub question: &'static str,
	pub answer: &'static str,
}

pub const FAQ_TITLE: &str = "Frequently Asked Questions";

pub const FAQ: [FaqEntry; 3] = [
	FaqEntry {
		question: "How do I get started with GymMatrix?",
		answer: "Download the app, create an account with your email, and verify your account \
			through the confirmation code sent to your email. Once verified, you can start \
			building your fitness profile.",
	},
	FaqEntry {
		question: "How can I track my progress?",
		answer: "GymMatrix offers comprehensive tracking features including workout logs, \
			body measurements, and performance metrics. Access your dashboard to view \
			detailed progress charts and analytics.",
	},
	FaqEntry {
		question: "What devices are supported?",
		answer: "GymMatrix is available on both **iOS** and **Android** devices. For the best \
			experience, ensure your device is running the latest operating system version.",
	},
];
