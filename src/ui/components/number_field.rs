use dioxus::prelude::*;

use crate::domain::InputField;

/// Free-text numeric input. The raw text is handed back untouched; parsing
/// happens in the calculation.
#[component]
pub fn NumberField(field: InputField, value: String, on_input: EventHandler<String>) -> Element {
    rsx! {
        label { class: "field",
            span { class: "field-label", "{field.label()}" }
            div { class: "field-row",
                input {
                    class: "field-input",
                    r#type: "text",
                    placeholder: field.placeholder(),
                    value: "{value}",
                    oninput: move |evt| on_input.call(evt.value()),
                }
                span { class: "field-suffix", "{field.suffix()}" }
            }
        }
    }
}
