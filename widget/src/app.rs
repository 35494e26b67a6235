//! Root widget component and context providers.

use leptos::prelude::*;

use crate::components::{chat_panel::ChatPanel, toggle_button::ToggleButton};
use crate::config::WidgetConfig;
use crate::net::api::HttpBackend;
use crate::state::conversation::ConversationState;

/// One widget instance: a collapsible chat panel plus its toggle button.
///
/// Every instance owns a fresh conversation; nothing is shared between
/// widgets mounted into different targets.
#[component]
pub fn WebchatApp(
    /// Resolved options for this instance.
    config: WidgetConfig,
) -> impl IntoView {
    let conversation = RwSignal::new(ConversationState::default());

    provide_context(conversation);
    provide_context(HttpBackend::from_config(&config));
    provide_context(config);

    view! {
        <div class="chatbot-widget-container">
            <Show when=move || conversation.with(ConversationState::is_open)>
                <ChatPanel/>
            </Show>
            <ToggleButton/>
        </div>
    }
}
