use yew_router::prelude::*;
use yew::prelude::*;
use about::AboutSection;
use faq::FaqSection;
use contact::{use_contact_controller, ContactSection};
use style::SharedStyle;
use toast::{Toaster, Toasts, ToastMsg, ToastNotifier};
use support_core::{content::{self, Card}, Section};

mod about;
mod config;
mod contact;
mod faq;
mod relay;
mod style;
mod toast;

const LOGO: &str = include_str!("../../assets/logo.svg");

// Hash routes so this can be dropped onto any static host without needing a fallback rule
#[derive(Clone, Routable, PartialEq)]
enum Route {
	#[at("/about")]
	About,
	#[at("/faq")]
	Faq,
	#[not_found]
	#[at("/")]
	Contact,
}

impl Route {
	fn section(&self) -> Section {
		match self {
			Self::About => Section::About,
			Self::Faq => Section::Faq,
			Self::Contact => Section::Contact,
		}
	}

	fn for_section(section: Section) -> Self {
		match section {
			Section::About => Self::About,
			Section::Faq => Self::Faq,
			Section::Contact => Self::Contact,
		}
	}
}

pub fn icon_card(card: &Card, icon: &'static str) -> Html {
	html! {
		<div class="card">
			<span class="icon">{ Html::from_html_unchecked(icon.into()) }</span>
			<h3>{ card.title }</h3>
			<p>{ card.body }</p>
		</div>
	}
}

#[function_component(Page)]
fn page() -> Html {
	let section = use_route::<Route>().map_or_else(Section::default, |r| r.section());
	let toasts = use_reducer_eq(Toasts::default);

	let (controller, submission) = use_contact_controller(ToastNotifier::new(toasts.dispatcher()));
	let dismiss = toasts.dispatcher();
	let on_dismiss = Callback::from(move |id| dismiss.dispatch(ToastMsg::Dismiss(id)));

	let tabs = Section::ALL.into_iter().map(|tab| html! {
		<Link<Route>
			to={ Route::for_section(tab) }
			classes={ classes!("section-tab", (tab == section).then_some("active")) }
		>
			{ tab.label() }
		</Link<Route>>
	}).collect::<Html>();

	let content = match section {
		Section::About => html! { <AboutSection /> },
		Section::Faq => html! { <FaqSection /> },
		Section::Contact => html! { <ContactSection { controller } { submission } /> },
	};

	html! {
		<>
			<SharedStyle />
			<Toaster queue={ toasts.queue().clone() } { on_dismiss } />
			<header id="page-header">
				<span id="logo">{ Html::from_html_unchecked(LOGO.into()) }</span>
				<h1 id="app-name">{ content::APP_NAME }</h1>
				<p id="tagline">{ content::TAGLINE }</p>
				<nav id="section-tabs">{ tabs }</nav>
			</header>
			<main id="page-content">
				{ content }
			</main>
		</>
	}
}

#[function_component(Frontend)]
pub fn frontend() -> Html {
	html! {
		<HashRouter>
			<Page />
		</HashRouter>
	}
}

fn main() {
	console_error_panic_hook::set_once();
	// this only fails if a logger was already set, and then we're logging anyways
	_ = console_log::init_with_level(log::Level::Debug);

	let missing = config::emailjs_config().missing();
	if !missing.is_empty() {
		log::warn!("EmailJS isn't fully configured, sending will fail (missing {})", missing.join(", "));
	}

	yew::Renderer::<Frontend>::new().render();
}
