use gloo_timers::callback::Timeout;
use std::rc::Rc;
use support_core::{notice::NoticeId, Notice, NoticeQueue, Notifier};
use yew::prelude::*;

pub enum ToastMsg {
	Show(Notice),
	Dismiss(NoticeId),
}

#[derive(Default, PartialEq)]
pub struct Toasts(NoticeQueue);

impl Toasts {
	pub fn queue(&self) -> &NoticeQueue {
		&self.0
	}
}

impl Reducible for Toasts {
	type Action = ToastMsg;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		let mut queue = self.0.clone();

		match action {
			ToastMsg::Show(notice) => {
				queue.push(notice);
			},
			// the timeout and a click can both try to dismiss the same toast
			ToastMsg::Dismiss(id) => if !queue.dismiss(id) {
				return self;
			}
		}

		Self(queue).into()
	}
}

/// What the contact form gets handed so it can pop up toasts without owning them
#[derive(Clone, PartialEq)]
pub struct ToastNotifier(UseReducerDispatcher<Toasts>);

impl ToastNotifier {
	pub fn new(dispatcher: UseReducerDispatcher<Toasts>) -> Self {
		Self(dispatcher)
	}
}

impl Notifier for ToastNotifier {
	fn notify(&self, notice: Notice) {
		self.0.dispatch(ToastMsg::Show(notice));
	}
}

#[derive(Properties, PartialEq)]
pub struct ToasterProps {
	pub queue: NoticeQueue,
	pub on_dismiss: Callback<NoticeId>,
}

#[function_component(Toaster)]
pub fn toaster(props: &ToasterProps) -> Html {
	html! {
		<div id="toaster">
		{
			props.queue.iter().map(|(id, notice)| html! {
				<ToastView
					key={ *id }
					id={ *id }
					notice={ notice.clone() }
					on_dismiss={ props.on_dismiss.clone() }
				/>
			}).collect::<Html>()
		}
		</div>
	}
}

#[derive(Properties, PartialEq)]
struct ToastProps {
	id: NoticeId,
	notice: Notice,
	on_dismiss: Callback<NoticeId>,
}

#[function_component(ToastView)]
fn toast_view(props: &ToastProps) -> Html {
	{
		let on_dismiss = props.on_dismiss.clone();
		let ms = props.notice.kind.display_ms();
		use_effect_with(props.id, move |&id| {
			let timeout = Timeout::new(ms, move || on_dismiss.emit(id));
			// dropping the timeout cancels it, which is what we want if the toast is already gone
			move || drop(timeout)
		});
	}

	let id = props.id;
	let on_click = props.on_dismiss.reform(move |_: MouseEvent| id);

	html! {
		<div class={ classes!("toast", props.notice.kind.css_class()) } role="status" onclick={ on_click }>
			<span>{ &props.notice.message }</span>
		</div>
	}
}
