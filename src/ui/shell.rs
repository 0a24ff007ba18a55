use dioxus::prelude::*;

use crate::ui::theme::{self, Theme};
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let mut theme_state = use_context::<Signal<Theme>>();
    let current = theme_state();

    rsx! {
        div { class: "{theme::root_class(current)}",
            header { class: "app-header",
                div {
                    h1 { class: "app-title", "{APP_NAME}" }
                    span { class: "app-version", "{version_label()}" }
                }
                button {
                    class: "btn-toggle",
                    r#type: "button",
                    onclick: move |_| {
                        let next = current.toggled();
                        tracing::info!(theme = next.name(), "theme switched");
                        theme_state.set(next);
                    },
                    "{theme::toggle_label(current)}"
                }
            }
            main { class: "app-main",
                {children}
            }
        }
    }
}
