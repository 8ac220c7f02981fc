use crate::controller::Interaction;
use crate::markdown::reply_to_html;
use crate::platform;
use crate::types::{ChatMessage, UploadFile};
use crate::ui::{Controller, fire};
use dioxus::events::Key;
use dioxus::prelude::*;

const MESSAGES_ID: &str = "chat-messages";
const FILE_INPUT_ID: &str = "file-input";
const ACCEPTED_FILES: &str = ".pdf,.docx,.txt";

#[component]
pub fn ChatView() -> Element {
    let controller = use_context::<Controller>();
    let mut state = *controller.state();
    let snapshot = state();

    let message_count = use_memo(move || state.read().messages().len() + state.read().pending().len());
    use_effect(move || {
        let _ = message_count();
        let _ = document::eval(&platform::scroll_to_bottom_script(MESSAGES_ID));
    });

    let submit = {
        let controller = controller.clone();
        move || {
            let text = state.peek().draft.clone();
            fire(&controller, Interaction::Submit(text));
        }
    };
    let submit_on_enter = submit.clone();
    let submit_on_click = submit;

    let upload_controller = controller.clone();
    let on_file_change = move |ev: FormEvent| {
        let controller = upload_controller.clone();
        spawn(async move {
            let Some(engine) = ev.files() else {
                return;
            };
            let Some(path) = engine.files().into_iter().next() else {
                return;
            };
            let reset = || {
                let _ = document::eval(&platform::reset_input_script(FILE_INPUT_ID));
            };
            match platform::read_then_reset(engine.read_file(&path), reset).await {
                Some(bytes) => {
                    let file = UploadFile::from_picked(&path, bytes);
                    controller.dispatch(Interaction::UploadFile(file)).await;
                }
                None => tracing::warn!(file = %path, "could not read picked file"),
            }
        });
    };

    let context_controller = controller.clone();

    rsx! {
        div { id: MESSAGES_ID, class: "chat-messages",
            for msg in snapshot.messages().iter() {
                MessageBubble { message: msg.clone() }
            }
            for _pending in snapshot.pending().iter() {
                TypingIndicator {}
            }
        }

        div { class: "chat-input-area",
            div { class: "composer",
                label { class: "file-button", r#for: FILE_INPUT_ID, title: "Upload a PDF, DOCX or TXT file",
                    "📎"
                }
                input {
                    id: FILE_INPUT_ID,
                    r#type: "file",
                    accept: ACCEPTED_FILES,
                    hidden: true,
                    onchange: on_file_change,
                }
                input {
                    id: "user-input",
                    r#type: "text",
                    placeholder: "Ask Sova anything...",
                    autocomplete: "off",
                    value: "{snapshot.draft}",
                    oninput: move |ev| state.with_mut(|s| s.draft = ev.value()),
                    onkeydown: move |ev: KeyboardEvent| {
                        if ev.key() == Key::Enter {
                            ev.prevent_default();
                            submit_on_enter();
                        }
                    },
                }
                button {
                    id: "send-button",
                    class: "btn-primary",
                    r#type: "button",
                    onclick: move |_| submit_on_click(),
                    "Send"
                }
            }
            label { class: "doc-context",
                input {
                    id: "useDocContext",
                    r#type: "checkbox",
                    checked: snapshot.use_document_context,
                    onchange: move |ev: FormEvent| {
                        fire(&context_controller, Interaction::SetDocumentContext(ev.checked()));
                    },
                }
                span { "Use uploaded documents as context" }
            }
        }
    }
}

#[component]
fn MessageBubble(message: ChatMessage) -> Element {
    let side = if message.is_user() { "user-message" } else { "bot-message" };
    rsx! {
        div { class: "message {side}",
            if message.is_user() {
                div { class: "message-text", "{message.content}" }
            } else {
                div { class: "message-text md", dangerous_inner_html: reply_to_html(&message.content) }
            }
            div { class: "timestamp", "{message.timestamp}" }
        }
    }
}

#[component]
fn TypingIndicator() -> Element {
    rsx! {
        div { class: "typing-indicator", aria_label: "Sova is typing",
            div { class: "typing-dot" }
            div { class: "typing-dot" }
            div { class: "typing-dot" }
        }
    }
}
