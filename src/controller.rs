//! Widget controller
//!
//! Every user interaction becomes an [`Interaction`] and goes through
//! [`ChatController::dispatch`]. Each network call is its own round trip:
//! it raises a typing indicator, awaits the server, and always settles with
//! exactly one bot message, the reply or a fallback string.

use crate::api::ChatBackend;
use crate::config::WidgetConfig;
use crate::platform::{self, SendSound};
use crate::state::WidgetState;
use crate::storage::{PreferenceStore, THEME_KEY};
use crate::types::{ChatMessage, ThemeMode, UploadFile};
use std::cell::RefCell;
use std::rc::Rc;

pub const CHAT_FALLBACK: &str = "Sorry, I'm having trouble connecting. Please try again later.";
pub const UPLOAD_FALLBACK: &str = "Failed to upload file. Please try again.";
pub const UPLOAD_ACK_FALLBACK: &str = "File uploaded successfully!";
pub const CLEAR_FALLBACK: &str = "Sorry, I couldn't clear the conversation. Please try again.";

pub const GREETINGS: [&str; 3] = [
    "Blinggg! 🌟 I'm Sova, your wise AI assistant. Ask me anything!",
    "Perched and ready—how can I help you today?",
    "Greetings! I'm Sova, here to assist you. What's on your mind?",
];

pub fn pick_greeting(seed: u64) -> &'static str {
    GREETINGS[(seed % GREETINGS.len() as u64) as usize]
}

fn greeting_seed() -> u64 {
    u64::from(time::OffsetDateTime::now_utc().nanosecond())
}

/// Mutable access to the widget state, wherever it lives.
pub trait StateHandle: Clone {
    fn with_state<R>(&self, f: impl FnOnce(&mut WidgetState) -> R) -> R;

    fn inspect_state<R>(&self, f: impl FnOnce(&WidgetState) -> R) -> R {
        self.with_state(|state| f(state))
    }
}

impl StateHandle for Rc<RefCell<WidgetState>> {
    fn with_state<R>(&self, f: impl FnOnce(&mut WidgetState) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

/// User interactions, keyed by kind.
#[derive(Clone, Debug, PartialEq)]
pub enum Interaction {
    Submit(String),
    UploadFile(UploadFile),
    ToggleTheme,
    SetDocumentContext(bool),
    ClearConversation,
}

pub struct ChatController<H> {
    state: H,
    backend: Rc<dyn ChatBackend>,
    preferences: Rc<dyn PreferenceStore>,
    sound: Rc<dyn SendSound>,
    config: Rc<WidgetConfig>,
}

impl<H: Clone> Clone for ChatController<H> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            backend: Rc::clone(&self.backend),
            preferences: Rc::clone(&self.preferences),
            sound: Rc::clone(&self.sound),
            config: Rc::clone(&self.config),
        }
    }
}

impl<H: StateHandle> ChatController<H> {
    pub fn new(
        state: H,
        backend: Rc<dyn ChatBackend>,
        preferences: Rc<dyn PreferenceStore>,
        sound: Rc<dyn SendSound>,
        config: WidgetConfig,
    ) -> Self {
        Self {
            state,
            backend,
            preferences,
            sound,
            config: Rc::new(config),
        }
    }

    pub fn state(&self) -> &H {
        &self.state
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub async fn dispatch(&self, interaction: Interaction) {
        match interaction {
            Interaction::Submit(text) => self.submit_message(&text).await,
            Interaction::UploadFile(file) => self.submit_file(file).await,
            Interaction::ToggleTheme => {
                self.toggle_theme();
            }
            Interaction::SetDocumentContext(enabled) => self.set_document_context(enabled),
            Interaction::ClearConversation => self.clear_conversation().await,
        }
    }

    /// Reads the persisted theme into the state.
    pub fn restore_theme(&self) -> ThemeMode {
        let theme = ThemeMode::from_stored(self.preferences.get(THEME_KEY).as_deref());
        self.state.with_state(|state| state.theme = theme);
        theme
    }

    /// Page-ready work: theme restore, then the delayed greeting alongside a health check.
    pub async fn initialize(&self) {
        let theme = self.restore_theme();
        tracing::info!(theme = theme.as_str(), api_url = %self.config.api_url, "widget ready");
        futures::join!(self.greet(greeting_seed()), self.check_health());
    }

    pub async fn greet(&self, seed: u64) {
        platform::sleep(self.config.greeting_delay).await;
        let greeting = pick_greeting(seed);
        self.state
            .with_state(|state| state.push_message(ChatMessage::assistant(greeting)));
    }

    pub async fn check_health(&self) -> bool {
        let online = match self.backend.health().await {
            Ok(status) => status.is_ok(),
            Err(err) => {
                tracing::warn!("health check failed: {err}");
                false
            }
        };
        self.state.with_state(|state| state.server_online = Some(online));
        online
    }

    pub fn toggle_theme(&self) -> ThemeMode {
        let theme = self.state.with_state(WidgetState::toggle_theme);
        if let Err(err) = self.preferences.set(THEME_KEY, theme.as_str()) {
            tracing::warn!("failed to persist theme: {err}");
        }
        theme
    }

    pub fn set_document_context(&self, enabled: bool) {
        self.state
            .with_state(|state| state.use_document_context = enabled);
    }

    pub async fn submit_message(&self, text: &str) {
        let Some((message, use_document_context, pending)) = self.state.with_state(|state| {
            let message = state.accept_submission(text)?;
            Some((message, state.use_document_context, state.begin_round_trip()))
        }) else {
            return;
        };
        self.sound.play();

        let reply = match self
            .backend
            .send_chat(&message, use_document_context)
            .await
        {
            Ok(reply) => reply,
            Err(err) => {
                tracing::warn!("chat request failed: {err}");
                CHAT_FALLBACK.to_string()
            }
        };
        self.state.with_state(|state| state.settle(pending, reply));
    }

    pub async fn submit_file(&self, file: UploadFile) {
        let pending = self.state.with_state(|state| {
            state.push_message(ChatMessage::user(format!("Uploading {}...", file.name)));
            state.begin_round_trip()
        });

        let name = file.name.clone();
        let reply = match self.backend.upload(file).await {
            Ok(Some(ack)) => ack,
            Ok(None) => UPLOAD_ACK_FALLBACK.to_string(),
            Err(err) => {
                tracing::warn!(file = %name, "upload failed: {err}");
                UPLOAD_FALLBACK.to_string()
            }
        };
        self.state.with_state(|state| state.settle(pending, reply));
    }

    pub async fn clear_conversation(&self) {
        let pending = self.state.with_state(WidgetState::begin_round_trip);

        // the local transcript only goes once the server has forgotten it too
        match self.backend.clear().await {
            Ok(ack) => self.state.with_state(|state| {
                state.clear_transcript();
                state.settle(pending, ack);
            }),
            Err(err) => {
                tracing::warn!("clear request failed: {err}");
                self.state
                    .with_state(|state| state.settle(pending, CLEAR_FALLBACK));
            }
        }
    }
}
