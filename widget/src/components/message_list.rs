//! Scrolling transcript view.
//!
//! Bot text is rendered as markdown with raw HTML dropped; user text is
//! shown verbatim. The list scrolls to its newest entry whenever the
//! transcript grows or the loading row appears.

#[cfg(test)]
#[path = "message_list_test.rs"]
mod message_list_test;

use leptos::prelude::*;

use crate::state::conversation::{ConversationState, Message, Sender};
use crate::util::markdown::render_markdown_html;

/// Full class list of a transcript row.
pub fn message_class(sender: Sender) -> String {
    format!("chatbot-message {}", sender.css_class())
}

/// Rendered HTML for bot messages; `None` means "show as plain text".
pub fn message_html(message: &Message) -> Option<String> {
    match message.sender() {
        Sender::Bot => Some(render_markdown_html(message.text())),
        Sender::User => None,
    }
}

#[component]
pub fn MessageList() -> impl IntoView {
    let conversation = expect_context::<RwSignal<ConversationState>>();
    let list_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = conversation.with(|c| (c.messages().len(), c.is_busy()));

        #[cfg(feature = "csr")]
        {
            if let Some(el) = list_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    view! {
        <div class="chatbot-messages" node_ref=list_ref>
            {move || {
                conversation.with(|c| {
                    c.messages()
                        .iter()
                        .map(|msg| {
                            let class = message_class(msg.sender());
                            let label = format!("{}:", msg.sender().label());
                            let body = match message_html(msg) {
                                Some(rendered) => {
                                    view! { <div class="chatbot-message-body" inner_html=rendered></div> }
                                        .into_any()
                                }
                                None => {
                                    let text = msg.text().to_owned();
                                    view! { <span class="chatbot-message-body">{text}</span> }.into_any()
                                }
                            };
                            view! {
                                <div class=class>
                                    <strong>{label}</strong>
                                    " "
                                    {body}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                })
            }}

            {move || {
                conversation
                    .with(ConversationState::is_busy)
                    .then(|| view! { <div class="chatbot-message bot chatbot-loading">"Bot is typing..."</div> })
            }}
        </div>
    }
}
