mod md_to_html;
pub use md_to_html::md_to_html;

pub mod config;
pub mod content;
pub mod controller;
pub mod error;
pub mod notice;
pub mod payload;
pub mod relay;
pub mod section;

pub use config::{Credentials, EmailJsConfig};
pub use controller::{ContactSubmissionController, SubmitOutcome};
pub use error::{RelayError, SubmitError};
pub use notice::{Notice, NoticeKind, NoticeQueue, Notifier};
pub use payload::{ContactFormPayload, SubmissionState};
pub use relay::{MailRelay, SendRequest};
pub use section::Section;

pub static BASE_STYLE: &str = r#"
* {
	--body-background: #18181b;
	--card-background: #27272a;
	--inset-background: #3f3f46;
	--border-color: #52525b;
	--accent: #dc2626;
	--accent-hover: #b91c1c;
	--main-text: #ffffff;
	--secondary-text: #d1d5db;
	--success: #16a34a;
	font-family: system-ui, -apple-system, "Segoe UI", Arial, sans-serif;
	color: var(--main-text);
	box-sizing: border-box;
}
body {
	background-color: var(--body-background);
	margin: 0;
	min-height: 100vh;
}
a {
	text-decoration: none;
}
input, textarea {
	width: 100%;
	padding: 8px 16px;
	background-color: var(--inset-background);
	border: 1px solid var(--border-color);
	border-radius: 6px;
	outline: none;
	transition: border-color 0.2s;
}
input:focus, textarea:focus {
	border-color: var(--accent);
	box-shadow: 0 0 0 1px var(--accent);
}
textarea {
	resize: none;
}
button {
	cursor: pointer;
	border: none;
}
button:disabled {
	opacity: 0.7;
	cursor: default;
}
"#;

pub static PAGE_STYLE: &str = r"
#page-header, #page-content {
	max-width: 56rem;
	margin: 0 auto;
	padding: 0 16px;
}
#page-header {
	padding-top: 48px;
	text-align: center;
}
#logo svg {
	width: 64px;
	height: 64px;
	color: var(--accent);
}
#app-name {
	font-size: 36px;
	color: var(--accent);
	margin-bottom: 8px;
}
#tagline {
	font-size: 20px;
	color: var(--secondary-text);
	margin-bottom: 32px;
}
#section-tabs {
	display: flex;
	flex-wrap: wrap;
	justify-content: center;
	gap: 16px;
	margin-bottom: 48px;
}
.section-tab {
	padding: 8px 24px;
	border-radius: 9999px;
	background-color: var(--card-background);
	transition: all 0.2s;
}
.section-tab:hover {
	background-color: var(--inset-background);
}
.section-tab.active {
	background-color: var(--accent);
}
#page-content {
	padding-bottom: 48px;
}
.panel {
	background-color: var(--card-background);
	padding: 32px;
	border-radius: 8px;
	margin-bottom: 32px;
	box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.3);
}
.panel h2 {
	font-size: 24px;
	color: var(--accent);
	margin: 0 0 24px 0;
}
.card-grid {
	display: grid;
	grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
	gap: 24px;
	margin-bottom: 32px;
}
.card {
	padding: 24px;
	border-radius: 8px;
	text-align: center;
	background-color: var(--card-background);
}
.card .icon svg {
	width: 32px;
	height: 32px;
	color: var(--accent);
	margin-bottom: 16px;
}
#send-button svg {
	width: 18px;
	height: 18px;
	vertical-align: middle;
}
.panel .card, .faq-entry {
	background-color: var(--inset-background);
}
.card h3, .faq-entry h3 {
	margin: 0 0 8px 0;
}
.card p, .faq-entry p, .panel > p {
	color: var(--secondary-text);
	margin: 0;
}
.faq-entry {
	padding: 24px;
	border-radius: 8px;
	margin-bottom: 24px;
}
";

pub static FORM_STYLE: &str = r"
#contact-form label {
	display: block;
	font-size: 14px;
	font-weight: 500;
	margin-bottom: 8px;
}
#contact-form .field {
	margin-bottom: 24px;
}
#send-button {
	width: 100%;
	padding: 12px 24px;
	border-radius: 6px;
	background-color: var(--accent);
	font-weight: 500;
	transition: background-color 0.2s;
}
#send-button:hover:enabled {
	background-color: var(--accent-hover);
}
";

pub static TOAST_STYLE: &str = r"
#toaster {
	position: fixed;
	top: 16px;
	left: 50%;
	transform: translateX(-50%);
	display: flex;
	flex-direction: column;
	align-items: center;
	gap: 8px;
	z-index: 9999;
	pointer-events: none;
}
.toast {
	pointer-events: auto;
	padding: 8px 14px;
	border-radius: 8px;
	background-color: #ffffff;
	box-shadow: 0 3px 10px rgba(0, 0, 0, 0.1), 0 3px 3px rgba(0, 0, 0, 0.05);
	max-width: 350px;
	cursor: pointer;
}
.toast * {
	color: #363636;
}
.toast-success {
	border-left: 4px solid var(--success);
}
.toast-error {
	border-left: 4px solid var(--accent);
}
";
