use crate::api::SovaClient;
use crate::config::WidgetConfig;
use crate::controller::{ChatController, Interaction, StateHandle};
use crate::platform::{self, SendSound};
use crate::state::WidgetState;
use crate::storage::LocalPreferences;
use crate::theme::theme_definition;
use crate::types::ThemeMode;
use crate::views::ChatView;
use dioxus::prelude::*;
use std::rc::Rc;

const SOVA_CSS: Asset = asset!("/assets/sova.css");

/// The controller as the components see it.
pub type Controller = ChatController<Signal<WidgetState>>;

impl StateHandle for Signal<WidgetState> {
    fn with_state<R>(&self, f: impl FnOnce(&mut WidgetState) -> R) -> R {
        let mut signal = *self;
        signal.with_mut(f)
    }

    fn inspect_state<R>(&self, f: impl FnOnce(&WidgetState) -> R) -> R {
        self.with(f)
    }
}

/// Plays the send cue through the page's `Audio` element.
struct PageSound {
    script: String,
}

impl PageSound {
    fn new(config: &WidgetConfig) -> Self {
        Self {
            script: platform::send_sound_script(&config.send_sound_url, config.send_sound_volume),
        }
    }
}

impl SendSound for PageSound {
    fn play(&self) {
        let _ = document::eval(&self.script);
    }
}

fn build_controller(state: Signal<WidgetState>) -> Controller {
    let config = WidgetConfig::load();
    let backend = Rc::new(SovaClient::new(config.api_url.clone()));
    let sound = Rc::new(PageSound::new(&config));
    ChatController::new(
        state,
        backend,
        Rc::new(LocalPreferences::new()),
        sound,
        config,
    )
}

/// Hands an interaction to the controller on the UI executor.
pub fn fire(controller: &Controller, interaction: Interaction) {
    let controller = controller.clone();
    spawn(async move {
        controller.dispatch(interaction).await;
    });
}

#[component]
pub fn App() -> Element {
    let state = use_signal(WidgetState::default);
    let controller = use_context_provider(|| build_controller(state));
    use_hook(move || {
        spawn(async move {
            controller.initialize().await;
        })
    });

    let theme = use_memo(move || state.read().theme);
    use_body_theme(theme);

    rsx! {
        ThemeStyles { theme: theme() }
        div { class: "chat-container",
            ChatHeader {}
            ChatView {}
        }
    }
}

fn use_body_theme(theme: Memo<ThemeMode>) {
    use_effect(move || {
        let dark = theme().is_dark();
        let _ = document::eval(&platform::body_theme_script(dark));
    });
}

#[component]
fn ThemeStyles(theme: ThemeMode) -> Element {
    let definition = theme_definition(theme);
    rsx! {
        document::Link { rel: "stylesheet", href: SOVA_CSS }
        style { dangerous_inner_html: "{definition.css}" }
    }
}

#[component]
fn ChatHeader() -> Element {
    let controller = use_context::<Controller>();
    let state = *controller.state();
    let theme = theme_definition(state.read().theme);
    let status_class = match state.read().server_online {
        Some(true) => "status-dot online",
        Some(false) => "status-dot offline",
        None => "status-dot",
    };
    let clear_controller = controller.clone();

    rsx! {
        div { class: "chat-header",
            div { class: "chat-title",
                span { class: "{status_class}" }
                h1 { "Sova" }
            }
            div { class: "header-actions",
                button {
                    class: "btn-ghost",
                    r#type: "button",
                    title: "Clear conversation",
                    onclick: move |_| fire(&clear_controller, Interaction::ClearConversation),
                    "Clear"
                }
                button {
                    id: "theme-toggle",
                    class: "btn-ghost theme-toggle",
                    r#type: "button",
                    title: "{theme.toggle_label}",
                    aria_label: "{theme.toggle_label}",
                    onclick: move |_| fire(&controller, Interaction::ToggleTheme),
                    dangerous_inner_html: "{theme.toggle_icon}",
                }
            }
        }
    }
}
