//! Open chat panel: header, transcript and the input row.
//!
//! SYSTEM CONTEXT
//! ==============
//! The send action (button click or Enter outside IME composition) spawns
//! one submission cycle on the local executor. The cycle writes into the
//! shared conversation signal, so closing the panel mid-request does not
//! lose the reply.

use leptos::prelude::*;

use crate::components::message_list::MessageList;
use crate::config::WidgetConfig;
use crate::net::api::HttpBackend;
use crate::state::conversation::{ConversationState, submit};

#[component]
pub fn ChatPanel() -> impl IntoView {
    let conversation = expect_context::<RwSignal<ConversationState>>();
    let config = expect_context::<WidgetConfig>();
    let backend = StoredValue::new(expect_context::<HttpBackend>());

    let do_send = move || {
        if !conversation.with_untracked(ConversationState::can_submit) {
            return;
        }
        let backend = backend.get_value();
        leptos::task::spawn_local(async move {
            submit(&conversation, &backend).await;
        });
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.is_composing() {
            ev.prevent_default();
            do_send();
        }
    };

    let is_busy = move || conversation.with(ConversationState::is_busy);
    let can_send = move || conversation.with(ConversationState::can_submit);

    view! {
        <div class="chatbot-widget">
            <h1 class="chatbot-title">{config.title}</h1>
            <p class="chatbot-desc">{config.description}</p>

            <MessageList/>

            <div class="chatbot-input-row">
                <input
                    class="chatbot-input"
                    type="text"
                    placeholder=config.placeholder
                    disabled=is_busy
                    prop:value=move || conversation.with(|c| c.input().to_owned())
                    on:input=move |ev| conversation.update(|c| c.set_input(event_target_value(&ev)))
                    on:keydown=on_keydown
                />
                <button class="chatbot-send-btn" type="button" on:click=move |_| do_send() disabled=move || !can_send()>
                    "Send"
                </button>
            </div>
        </div>
    }
}
