use yew::prelude::*;

#[function_component(SharedStyle)]
pub fn shared_style() -> Html {
	html! {
		<style>
			{ support_core::BASE_STYLE }
			{ support_core::PAGE_STYLE }
			{ support_core::TOAST_STYLE }
		</style>
	}
}
