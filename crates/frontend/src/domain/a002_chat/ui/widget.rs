//! Chat Widget - View Component

use super::attachment::PendingImageAttachment;
use super::model::request_completion;
use super::view_model::ChatWidgetVm;
use crate::shared::icons::icon;
use contracts::domain::a002_chat::api::CompletionRequest;
use contracts::domain::a002_chat::ChatRole;
use leptos::prelude::*;
use thaw::*;

/// Floating assistant chat: a launcher bubble that expands into a panel.
#[component]
#[allow(non_snake_case)]
pub fn ChatWidget() -> impl IntoView {
    let vm = ChatWidgetVm::new();
    let messages_container_ref = NodeRef::<leptos::html::Div>::new();

    // Scroll to bottom helper
    let scroll_to_bottom = {
        let messages_container_ref = messages_container_ref.clone();
        move || {
            if let Some(container) = messages_container_ref.get() {
                request_animation_frame(move || {
                    container.set_scroll_top(container.scroll_height());
                });
            }
        }
    };

    // Send handler - using Callback to avoid move issues
    let handle_send = Callback::new({
        let scroll_to_bottom = scroll_to_bottom.clone();
        move |_| {
            let text = vm.input.get();
            let has_image = vm.has_attachment();

            // The session decides: no-op on blank input or while a reply
            // is outstanding.
            let mut session = vm.session.get();
            if session.begin_user_send(&text, has_image).is_none() {
                return;
            }
            vm.input.set(String::new());
            let request = CompletionRequest::from_history(session.messages());
            vm.session.set(session);
            scroll_to_bottom();

            let scroll_to_bottom = scroll_to_bottom.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match request_completion(&request).await {
                    Ok(reply) => {
                        let mut session = vm.session.get();
                        session.complete_success(reply.content);
                        vm.session.set(session);
                    }
                    Err(e) => {
                        // Diagnostics only; the visible message is the
                        // fixed fallback.
                        log::warn!("completion call failed: {}", e);
                        let mut session = vm.session.get();
                        session.complete_failure();
                        vm.session.set(session);
                    }
                }
                // Either way the send is settled: release the preview.
                vm.clear_attachment();
                scroll_to_bottom();
            });
        }
    });

    view! {
        <Show
            when=move || vm.expanded.get()
            fallback=move || {
                view! {
                    <div class="chat-widget chat-widget--collapsed">
                        <button
                            class="chat-widget__launcher"
                            aria-label="Open chat"
                            on:click=move |_| vm.expanded.set(true)
                        >
                            {icon("chat")}
                        </button>
                    </div>
                }
            }
        >
            <div class="chat-widget chat-widget--expanded">
                <div class="chat-widget__header">
                    <h3 class="chat-widget__title">"Ayushmitra Assistant"</h3>
                    <button
                        class="chat-widget__close"
                        aria-label="Close chat"
                        on:click=move |_| vm.expanded.set(false)
                    >
                        {icon("close")}
                    </button>
                </div>

                <div node_ref=messages_container_ref class="chat-widget__messages">
                    <For
                        each=move || vm.session.get().messages().to_vec()
                        key=|msg| msg.id
                        let:msg
                    >
                        {{
                            let is_user = matches!(msg.role, ChatRole::User);
                            let has_image = msg.has_image;
                            view! {
                                <div class=if is_user {
                                    "chat-widget__row chat-widget__row--user"
                                } else {
                                    "chat-widget__row chat-widget__row--assistant"
                                }>
                                    <div class=if is_user {
                                        "chat-widget__bubble chat-widget__bubble--user"
                                    } else {
                                        "chat-widget__bubble chat-widget__bubble--assistant"
                                    }>
                                        {has_image
                                            .then(|| {
                                                view! {
                                                    <span class="chat-widget__attachment-chip">
                                                        {icon("paperclip")}
                                                        " image attached"
                                                    </span>
                                                }
                                            })}
                                        <span class="chat-widget__text">{msg.text.clone()}</span>
                                    </div>
                                </div>
                            }
                        }}
                    </For>
                    {move || {
                        vm.awaiting_reply()
                            .then(|| {
                                view! {
                                    <div class="chat-widget__thinking">
                                        "Ayushmitra is thinking..."
                                    </div>
                                }
                            })
                    }}
                </div>

                // Preview of the pending attachment
                {move || {
                    let preview = vm
                        .attachment
                        .with(|a| a.as_ref().and_then(|a| a.preview_url().map(String::from)));
                    preview
                        .map(|url| {
                            view! {
                                <div class="chat-widget__preview">
                                    <img class="chat-widget__preview-image" src=url alt="preview" />
                                    <button
                                        class="chat-widget__preview-remove"
                                        aria-label="Remove selected image"
                                        on:click=move |_| vm.clear_attachment()
                                    >
                                        {icon("trash")}
                                        " Remove"
                                    </button>
                                </div>
                            }
                        })
                }}

                <div class="chat-widget__composer">
                    <Flex style="gap: 8px; align-items: center;">
                        <input
                            type="file"
                            accept="image/*"
                            style="display: none;"
                            id="chat-image-input"
                            on:change=move |ev| {
                                use wasm_bindgen::JsCast;
                                vm.upload_error.set(None);
                                let input: web_sys::HtmlInputElement = ev
                                    .target()
                                    .unwrap()
                                    .dyn_into()
                                    .unwrap();
                                if let Some(files) = input.files() {
                                    if let Some(file) = files.get(0) {
                                        match PendingImageAttachment::from_file(&file) {
                                            Ok(attachment) => {
                                                // Replacing the previous
                                                // attachment drops it and
                                                // revokes its preview URL.
                                                vm.attachment.set(Some(attachment));
                                            }
                                            Err(e) => {
                                                vm.upload_error.set(Some(e.to_string()));
                                            }
                                        }
                                    }
                                }
                                input.set_value("");
                            }
                        />

                        <Button
                            appearance=ButtonAppearance::Secondary
                            disabled=Signal::derive(move || vm.awaiting_reply())
                            on_click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    if let Some(document) = window.document() {
                                        if let Some(input) = document
                                            .get_element_by_id("chat-image-input")
                                        {
                                            use wasm_bindgen::JsCast;
                                            if let Ok(input) = input
                                                .dyn_into::<web_sys::HtmlElement>()
                                            {
                                                input.click();
                                            }
                                        }
                                    }
                                }
                            }
                        >
                            {icon("image-plus")}
                        </Button>

                        <input
                            type="text"
                            class="chat-widget__input"
                            placeholder="Type your message..."
                            prop:value=move || vm.input.get()
                            disabled=move || vm.awaiting_reply()
                            on:input=move |ev| vm.input.set(event_target_value(&ev))
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    ev.prevent_default();
                                    handle_send.run(());
                                }
                            }
                        />

                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::derive(move || vm.awaiting_reply())
                            on_click=move |_| handle_send.run(())
                        >
                            {icon("send")}
                        </Button>
                    </Flex>
                    {move || {
                        vm.upload_error
                            .get()
                            .map(|e| view! { <div class="chat-widget__upload-error">{e}</div> })
                    }}
                </div>
            </div>
        </Show>
    }
}
