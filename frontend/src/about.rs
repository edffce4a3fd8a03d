use support_core::content::{ABOUT_BLURB, ABOUT_TITLE, FEATURES};
use yew::prelude::*;
use crate::icon_card;

const FEATURE_ICONS: [&str; 3] = [
	include_str!("../../assets/dumbbell.svg"),
	include_str!("../../assets/users.svg"),
	include_str!("../../assets/calendar.svg"),
];

#[function_component(AboutSection)]
pub fn about_section() -> Html {
	let blurb = use_memo((), |_| support_core::md_to_html(ABOUT_BLURB));

	html! {
		<div class="panel">
			<h2>{ ABOUT_TITLE }</h2>
			{ Html::from_html_unchecked(AttrValue::from((*blurb).clone())) }
			<div class="card-grid">
			{
				FEATURES.iter()
					.zip(FEATURE_ICONS)
					.map(|(card, icon)| icon_card(card, icon))
					.collect::<Html>()
			}
			</div>
		</div>
	}
}
