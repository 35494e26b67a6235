//! Floating open/close button.

#[cfg(test)]
#[path = "toggle_button_test.rs"]
mod toggle_button_test;

use leptos::prelude::*;

use crate::state::conversation::ConversationState;

/// Vertical offset keeping the button clear of the open panel.
pub fn toggle_offset(open: bool) -> &'static str {
    if open { "510px" } else { "24px" }
}

/// Close glyph while open, launcher glyph while closed.
pub fn toggle_glyph(open: bool) -> &'static str {
    if open { "×" } else { "🍀" }
}

#[component]
pub fn ToggleButton() -> impl IntoView {
    let conversation = expect_context::<RwSignal<ConversationState>>();
    let is_open = move || conversation.with(ConversationState::is_open);

    view! {
        <button
            class="chatbot-toggle-btn"
            type="button"
            aria-label=move || if is_open() { "Close chat" } else { "Open chat" }
            style:bottom=move || toggle_offset(is_open())
            on:click=move |_| conversation.update(ConversationState::toggle_open)
        >
            {move || toggle_glyph(is_open())}
        </button>
    }
}
