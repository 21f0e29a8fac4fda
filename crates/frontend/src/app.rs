use leptos::prelude::*;

use crate::chat::context::ChatContext;
use crate::chat::sidebar::Sidebar;
use crate::chat::view::ChatPanel;
use crate::shared::icons::icon;

#[component]
pub fn App() -> impl IntoView {
    // One context for the whole page: session id, conversation log, status.
    provide_context(ChatContext::new());

    view! {
        <div style="height: 100vh; display: flex; flex-direction: column;">
            <header style="display: flex; align-items: center; gap: 8px; padding: 12px 16px; border-bottom: 1px solid var(--colorNeutralStroke2);">
                {icon("bot")}
                <h1 style="font-size: 16px; font-weight: bold; margin: 0;">
                    "AI Knowledge Base Agent"
                </h1>
            </header>
            <main style="flex: 1; display: flex; min-height: 0;">
                <Sidebar />
                <ChatPanel />
            </main>
        </div>
    }
}
