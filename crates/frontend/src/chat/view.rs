//! Chat pane: message list plus the question input row.

use contracts::chat::QueryRequest;
use leptos::prelude::*;
use thaw::*;

use crate::chat::context::use_chat_context;
use crate::chat::model::{post_query, QueryFailure};
use crate::chat::store::{
    prepare_question, ChatMessage, Role, ANSWER_ERROR_TEXT, NETWORK_ERROR_TEXT,
};
use crate::shared::icons::icon;
use crate::shared::markup::{bold_segments, truncate_excerpt, Segment};

#[component]
#[allow(non_snake_case)]
pub fn ChatPanel() -> impl IntoView {
    let cx = use_chat_context();
    let log = cx.log;
    let input = cx.input;
    let session = cx.session.clone();
    let messages_container_ref = NodeRef::<leptos::html::Div>::new();

    // Scroll to bottom helper
    let scroll_to_bottom = move || {
        if let Some(container) = messages_container_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    };

    // Keep the newest message visible after every log change.
    Effect::new(move |_| {
        let _ = log.with(|l| l.len());
        scroll_to_bottom();
    });

    let handle_send = Callback::new(move |_| {
        let Some(question) = prepare_question(&input.get()) else {
            // Whitespace-only input: leave the field untouched.
            return;
        };
        input.set(String::new());

        let mut current = log.get();
        current.push_user(question.clone());
        let placeholder = current.push_placeholder();
        log.set(current);

        let session_id = session.as_str().to_string();
        wasm_bindgen_futures::spawn_local(async move {
            let request = QueryRequest {
                question,
                session_id,
            };
            let result = post_query(&request).await;

            let mut current = log.get();
            current.remove(placeholder);
            match result {
                Ok(resp) => {
                    current.push_answer(resp.answer, resp.sources, resp.confidence);
                }
                Err(QueryFailure::Backend(e)) => {
                    log::warn!("query rejected: {}", e);
                    current.push_bot(ANSWER_ERROR_TEXT);
                }
                Err(QueryFailure::Transport(e)) => {
                    log::error!("query transport failure: {}", e);
                    current.push_bot(NETWORK_ERROR_TEXT);
                }
            }
            log.set(current);
        });
    });

    view! {
        <div style="flex: 1; display: flex; flex-direction: column; min-width: 0;">
            // Messages area
            <div
                node_ref=messages_container_ref
                style="flex: 1; overflow-y: auto; display: flex; flex-direction: column; gap: 12px; padding: 16px;"
            >
                <For
                    each=move || log.with(|l| l.entries().to_vec())
                    key=|msg| msg.id.value()
                    let:msg
                >
                    <MessageBubble msg=msg />
                </For>
            </div>

            // Input row
            <Flex style="gap: 8px; padding: 12px 16px; border-top: 1px solid var(--colorNeutralStroke2);">
                <div style="flex: 1;">
                    <Input
                        value=input
                        placeholder="Ask a question about your document..."
                        attr:style="width: 100%;"
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                handle_send.run(());
                            }
                        }
                    />
                </div>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| handle_send.run(())
                >
                    {icon("send")}
                    " Send"
                </Button>
            </Flex>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn MessageBubble(msg: ChatMessage) -> impl IntoView {
    let is_user = msg.role == Role::User;
    let sources = msg.sources.clone();
    let confidence = msg.confidence.clone();

    view! {
        <div style=if is_user {
            "align-self: flex-end; max-width: 70%; display: flex; flex-direction: row-reverse; gap: 8px;"
        } else {
            "align-self: flex-start; max-width: 70%; display: flex; gap: 8px;"
        }>
            <div style="flex-shrink: 0; width: 32px; height: 32px; border-radius: 50%; display: flex; align-items: center; justify-content: center; background: var(--colorNeutralBackground3);">
                {icon(if is_user { "user" } else { "bot" })}
            </div>
            <div style=if is_user {
                "background: var(--colorBrandBackground2); padding: 10px 14px; border-radius: 12px;"
            } else {
                "background: var(--colorNeutralBackground2); padding: 10px 14px; border-radius: 12px;"
            }>
                <div style=if msg.pending {
                    "white-space: pre-wrap; font-style: italic; opacity: 0.7;"
                } else {
                    "white-space: pre-wrap;"
                }>{render_text(&msg.text)}</div>

                {confidence
                    .map(|c| {
                        view! {
                            <div style="font-size: 11px; opacity: 0.7; margin-top: 6px;">
                                {format!("Confidence: {}", c)}
                            </div>
                        }
                    })}

                {(!sources.is_empty())
                    .then(|| {
                        view! {
                            <details class="source-citation" style="margin-top: 8px; font-size: 13px;">
                                <summary>"View Sources"</summary>
                                <ul style="margin: 6px 0 0 0; padding-left: 18px;">
                                    {sources
                                        .iter()
                                        .map(|s| {
                                            view! {
                                                <li>
                                                    <strong>{s.source.clone()}</strong>
                                                    ": "
                                                    {truncate_excerpt(&s.text)}
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </details>
                        }
                    })}
            </div>
        </div>
    }
}

/// Project message text into the view, converting `**bold**` runs.
fn render_text(text: &str) -> Vec<AnyView> {
    bold_segments(text)
        .into_iter()
        .map(|seg| match seg {
            Segment::Plain(t) => view! { <span>{t}</span> }.into_any(),
            Segment::Bold(t) => view! { <strong>{t}</strong> }.into_any(),
        })
        .collect()
}
