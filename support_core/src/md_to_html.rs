use pulldown_cmark::{Event, Options, Parser};

// All the markdown we render is authored in this repo, so raw html passes through as-is
#[must_use]
pub fn md_to_html(input: &str) -> String {
	let options = Options::ENABLE_STRIKETHROUGH | Options::ENABLE_SMART_PUNCTUATION;

	// soft breaks inside a paragraph would otherwise come out as a literal newline, which looks
	// fine in a browser but makes the rendered answers awkward to compare
	let events = Parser::new_ext(input, options)
		.map(|ev| match ev {
			Event::SoftBreak => Event::Text(" ".into()),
			e => e
		});

	let mut html = String::new();
	pulldown_cmark::html::push_html(&mut html, events);

	html
}

#[cfg(test)]
mod tests {
	use super::md_to_html;

	#[test]
	fn wraps_plain_text_in_paragraph() {
		assert_eq!(md_to_html("Download the app."), "<p>Download the app.</p>\n");
	}

	#[test]
	fn joins_soft_breaks_with_spaces() {
		assert_eq!(md_to_html("one\ntwo"), "<p>one two</p>\n");
	}

	#[test]
	fn renders_emphasis_and_links() {
		let html = md_to_html("**iOS** and [Android](https://example.com)");
		assert!(html.contains("<strong>iOS</strong>"));
		assert!(html.contains(r#"<a href="https://example.com">Android</a>"#));
	}
}
