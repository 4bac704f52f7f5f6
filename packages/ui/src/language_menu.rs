use dioxus::prelude::*;

use crate::i18n::Lang;

/// Language control in the top-right of the header:
/// trigger button showing the short label → dropdown with one option per language.
#[component]
pub fn LanguageSelector() -> Element {
    let mut site = crate::use_site();
    let (label, open, active) = {
        let language = site.language.read();
        (language.trigger_label(), language.dropdown_open(), language.active())
    };

    rsx! {
        div {
            class: "language-selector",
            button {
                id: "language-trigger",
                class: "language_trigger",
                "aria-haspopup": "listbox",
                "aria-expanded": "{open}",
                onclick: move |_| site.toggle_dropdown(),
                "{label}"
            }
            div {
                id: "language-dropdown",
                class: if open { "language_dropdown open" } else { "language_dropdown" },
                role: "listbox",
                for lang in Lang::ALL {
                    button {
                        key: "{lang.code()}",
                        class: if lang == active { "language_option active" } else { "language_option" },
                        "data-lang": lang.code(),
                        role: "option",
                        onclick: move |_| site.select_language(lang.code()),
                        span { class: "language_option_label", {lang.label()} }
                        span { class: "language_option_name", {lang.native_name()} }
                    }
                }
            }
        }
    }
}
