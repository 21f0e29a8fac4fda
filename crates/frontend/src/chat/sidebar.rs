//! Sidebar: document drop zone, upload status line and the reset control.

use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

use crate::chat::context::use_chat_context;
use crate::chat::model::{reset_index, upload_document};
use crate::chat::status::UploadStatus;
use crate::shared::icons::icon;

const RESET_CONFIRM_TEXT: &str =
    "Are you sure you want to delete all indexed documents? This cannot be undone.";

#[component]
#[allow(non_snake_case)]
pub fn Sidebar() -> impl IntoView {
    let cx = use_chat_context();
    let log = cx.log;
    let status = cx.status;
    let drag_over = cx.drag_over;
    let file_input_ref = NodeRef::<leptos::html::Input>::new();

    let handle_upload = move |file: web_sys::File| {
        let name = file.name();
        status.set(UploadStatus::loading(format!("Uploading {}...", name)));

        wasm_bindgen_futures::spawn_local(async move {
            match upload_document(file).await {
                Ok(()) => {
                    status.set(UploadStatus::success("Document indexed successfully!"));
                    let mut current = log.get();
                    current.push_bot(format!(
                        "I've finished reading **{}**. You can now ask me questions about it!",
                        name
                    ));
                    log.set(current);
                }
                Err(e) => {
                    log::error!("upload failed: {}", e);
                    status.set(UploadStatus::error("Error uploading file."));
                }
            }
        });
    };

    let handle_reset = move || {
        let confirmed = web_sys::window()
            .map(|w| w.confirm_with_message(RESET_CONFIRM_TEXT).unwrap_or(false))
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        status.set(UploadStatus::loading("Resetting database..."));
        wasm_bindgen_futures::spawn_local(async move {
            match reset_index().await {
                Ok(()) => {
                    status.set(UploadStatus::success("Database reset successfully!"));
                    let mut current = log.get();
                    current.reset_to_greeting();
                    log.set(current);
                }
                Err(e) => {
                    log::error!("reset failed: {}", e);
                    status.set(UploadStatus::error("Error resetting database."));
                }
            }
        });
    };

    view! {
        <aside style="width: 280px; flex-shrink: 0; display: flex; flex-direction: column; gap: 12px; padding: 16px; border-right: 1px solid var(--colorNeutralStroke2);">
            <input
                type="file"
                style="display: none;"
                node_ref=file_input_ref
                on:change=move |ev| {
                    let input = ev
                        .target()
                        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
                    if let Some(input) = input {
                        if let Some(file) = input.files().and_then(|files| files.get(0)) {
                            handle_upload(file);
                        }
                        // Allow re-selecting the same file later
                        input.set_value("");
                    }
                }
            />

            <div
                class=move || {
                    if drag_over.get() { "drop-zone dragover" } else { "drop-zone" }
                }
                style=move || {
                    if drag_over.get() {
                        "padding: 32px 16px; text-align: center; cursor: pointer; border: 2px dashed var(--colorBrandStroke1); border-radius: 8px; background: var(--colorBrandBackground2);"
                    } else {
                        "padding: 32px 16px; text-align: center; cursor: pointer; border: 2px dashed var(--colorNeutralStroke2); border-radius: 8px;"
                    }
                }
                on:click=move |_| {
                    if let Some(input) = file_input_ref.get() {
                        input.click();
                    }
                }
                on:dragover=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    drag_over.set(true);
                }
                on:dragleave=move |_| {
                    drag_over.set(false);
                }
                on:drop=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    drag_over.set(false);
                    let file = ev
                        .data_transfer()
                        .and_then(|dt| dt.files())
                        .and_then(|files| files.get(0));
                    if let Some(file) = file {
                        handle_upload(file);
                    }
                }
            >
                {icon("upload")}
                <p style="margin: 8px 0 0 0;">"Drop a document here or click to browse"</p>
            </div>

            // Status line for upload/reset feedback
            <div class=move || status.with(|s| s.kind.css_class())>
                {move || status.with(|s| s.text.clone())}
            </div>

            <div style="margin-top: auto;">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| handle_reset()
                >
                    {icon("trash")}
                    " Reset knowledge base"
                </Button>
            </div>
        </aside>
    }
}
