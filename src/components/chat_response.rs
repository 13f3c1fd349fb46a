use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ChatResponseProps {
    pub content: String,
}

/// Renders assistant markup. Code fences were already stripped when the
/// message entered the store; sanitization happens here, right before
/// the markup reaches the DOM.
#[function_component(ChatResponse)]
pub fn chat_response(props: &ChatResponseProps) -> Html {
    if props.content.is_empty() {
        return html! {};
    }

    let sanitized = ammonia::clean(&props.content);
    let markup = format!("<div class=\"chat-response\">{}</div>", sanitized);
    Html::from_html_unchecked(AttrValue::from(markup))
}
