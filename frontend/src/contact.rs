use gloo_console::log;
use std::rc::Rc;
use support_core::{
	content::SUPPORT_CHANNELS,
	ContactFormPayload,
	ContactSubmissionController,
	SubmissionState,
	SubmitOutcome
};
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::{config, icon_card, relay::EmailJsRelay, toast::ToastNotifier};

const CHANNEL_ICONS: [&str; 3] = [
	include_str!("../../assets/mail.svg"),
	include_str!("../../assets/clock.svg"),
	include_str!("../../assets/message-square.svg"),
];

const SEND_ICON: &str = include_str!("../../assets/send.svg");

pub type Controller = ContactSubmissionController<EmailJsRelay, ToastNotifier>;

/// Compared by pointer, since there's only ever meant to be one of these per page
#[derive(Clone)]
pub struct SharedController(Rc<Controller>);

impl PartialEq for SharedController {
	fn eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.0, &other.0)
	}
}

/// Has to be called from something that stays mounted across tab switches. If the controller
/// lived in the contact view, leaving and coming back mid-send would hand out a fresh, idle one
/// and let a second send through.
#[hook]
pub fn use_contact_controller(notifier: ToastNotifier) -> (SharedController, SubmissionState) {
	let submission = use_state_eq(SubmissionState::default);

	let controller = {
		let set_state = submission.setter();
		use_memo((), move |_| {
			ContactSubmissionController::new(config::emailjs_config(), EmailJsRelay, notifier)
				.on_state_change(move |state| set_state.set(state))
		})
	};

	(SharedController(controller), *submission)
}

#[derive(Debug)]
pub enum FieldMsg {
	Name(String),
	Email(String),
	Subject(String),
	Message(String),
	Reset,
}

#[derive(Clone, Default, PartialEq)]
pub struct FormFields(ContactFormPayload);

impl Reducible for FormFields {
	type Action = FieldMsg;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		macro_rules! with_field{ ($field:ident, $val:expr) => {
			Self(ContactFormPayload { $field: $val, ..self.0.clone() }).into()
		}}

		match action {
			FieldMsg::Name(name) => with_field!(sender_name, name),
			FieldMsg::Email(email) => with_field!(sender_email, email),
			FieldMsg::Subject(subject) => with_field!(subject, subject),
			FieldMsg::Message(message) => with_field!(message, message),
			FieldMsg::Reset => Self::default().into(),
		}
	}
}

#[derive(Properties, PartialEq)]
pub struct ContactProps {
	pub controller: SharedController,
	pub submission: SubmissionState,
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactProps) -> Html {
	let fields = use_reducer_eq(FormFields::default);

	let onsubmit = {
		let fields = fields.clone();
		let SharedController(controller) = props.controller.clone();
		Callback::from(move |e: SubmitEvent| {
			e.prevent_default();

			let controller = controller.clone();
			let dispatcher = fields.dispatcher();
			let mut payload = fields.0.clone();

			wasm_bindgen_futures::spawn_local(async move {
				// if it failed, the user's already been told and we keep what they typed so they
				// can just hit send again
				if controller.submit(&mut payload).await == SubmitOutcome::Sent {
					dispatcher.dispatch(FieldMsg::Reset);
				}
			});
		})
	};

	macro_rules! field_callback{
		($msg:ident, $elem:ty) => {{
			let dispatcher = fields.dispatcher();
			Callback::from(move |e: InputEvent| match e.target()
				.and_then(|t| t.dyn_into::<$elem>().ok()) {
					Some(input) => dispatcher.dispatch(FieldMsg::$msg(input.value())),
					None => log!(concat!("Input for ", stringify!($msg), " didn't come from the element we expected"))
				}
			)
		}}
	}

	let name_input = field_callback!(Name, HtmlInputElement);
	let email_input = field_callback!(Email, HtmlInputElement);
	let subject_input = field_callback!(Subject, HtmlInputElement);
	let message_input = field_callback!(Message, HtmlTextAreaElement);

	let submitting = props.submission.is_submitting();

	html! {
		<>
			<style>{ support_core::FORM_STYLE }</style>
			<div class="card-grid">
			{
				SUPPORT_CHANNELS.iter()
					.zip(CHANNEL_ICONS)
					.map(|(card, icon)| icon_card(card, icon))
					.collect::<Html>()
			}
			</div>

			<form id="contact-form" class="panel" {onsubmit}>
				<h2>{ "Contact Support" }</h2>

				<div class="field">
					<label for="name">{ "Name" }</label>
					<input
						type="text"
						id="name"
						name="user_name"
						required={ true }
						value={ fields.0.sender_name.clone() }
						oninput={ name_input }
					/>
				</div>

				<div class="field">
					<label for="email">{ "Email" }</label>
					<input
						type="email"
						id="email"
						name="user_email"
						required={ true }
						value={ fields.0.sender_email.clone() }
						oninput={ email_input }
					/>
				</div>

				<div class="field">
					<label for="subject">{ "Subject" }</label>
					<input
						type="text"
						id="subject"
						name="subject"
						required={ true }
						value={ fields.0.subject.clone() }
						oninput={ subject_input }
					/>
				</div>

				<div class="field">
					<label for="message">{ "Message" }</label>
					<textarea
						id="message"
						name="message"
						rows="5"
						required={ true }
						value={ fields.0.message.clone() }
						oninput={ message_input }
					/>
				</div>

				<button id="send-button" type="submit" disabled={ submitting }>
				{
					if submitting {
						html! { "Sending..." }
					} else {
						html! {
							<>
								{ "Send Message " }
								{ Html::from_html_unchecked(SEND_ICON.into()) }
							</>
						}
					}
				}
				</button>
			</form>
		</>
	}
}
