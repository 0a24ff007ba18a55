use dioxus::prelude::*;

use crate::{
    ui::{pages::CalculatorPage, shell::Shell, theme::Theme},
    util::{assets, version::APP_NAME},
};

const PREFERS_DARK_PROBE: &str =
    "return window.matchMedia('(prefers-color-scheme: dark)').matches;";

#[component]
pub fn App() -> Element {
    let theme = use_signal(Theme::default);
    use_context_provider(|| theme);

    use_hook(move || spawn(apply_system_theme(theme)));

    rsx! {
        document::Title { "{APP_NAME}" }
        document::Style { "{assets::main_css()}" }
        Shell { CalculatorPage {} }
    }
}

/// Seeds the theme from the system colour-scheme preference. The choice is
/// not persisted; the header toggle overrides it for the session.
async fn apply_system_theme(mut theme: Signal<Theme>) {
    match document::eval(PREFERS_DARK_PROBE).await {
        Ok(value) => {
            let Some(prefers_dark) = value.as_bool() else {
                tracing::warn!(%value, "unexpected colour-scheme probe result");
                return;
            };
            let initial = Theme::from_prefers_dark(prefers_dark);
            tracing::info!(theme = initial.name(), "applied system theme preference");
            theme.set(initial);
        }
        Err(err) => {
            tracing::warn!(error = ?err, "colour-scheme probe failed; keeping default theme");
        }
    }
}
