use support_core::content::{FAQ, FAQ_TITLE};
use yew::prelude::*;

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
	// the answers never change, so there's no need to re-render the markdown every time
	let entries = use_memo((), |_| FAQ.map(|entry| (entry.question, support_core::md_to_html(entry.answer))));

	html! {
		<div class="panel">
			<h2>{ FAQ_TITLE }</h2>
			{
				entries.iter().map(|(question, answer)| html! {
					<div class="faq-entry">
						<h3>{ *question }</h3>
						{ Html::from_html_unchecked(AttrValue::from(answer.clone())) }
					</div>
				}).collect::<Html>()
			}
		</div>
	}
}
