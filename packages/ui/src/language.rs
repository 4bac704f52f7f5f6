use std::collections::BTreeMap;

use crate::i18n::{Catalog, Lang};
use crate::preferences::PreferenceStore;

/// Active language and everything on the page that depends on it.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageSwitcher {
    catalog: Catalog,
    active: Lang,
    trigger_label: &'static str,
    dropdown_open: bool,
    rendered: BTreeMap<&'static str, String>,
}

impl LanguageSwitcher {
    /// State before bootstrap: markup defaults rendered, nothing persisted.
    pub fn new(catalog: Catalog, initial: Lang) -> Self {
        let rendered = catalog
            .iter()
            .map(|e| (e.key(), e.markup_default().to_string()))
            .collect();
        Self {
            catalog,
            active: initial,
            trigger_label: initial.label(),
            dropdown_open: false,
            rendered,
        }
    }

    pub fn switch_language(&mut self, lang: Lang, store: &PreferenceStore) {
        self.active = lang;
        self.trigger_label = lang.label();

        for element in self.catalog.iter() {
            if let Some(payload) = element.payload(lang) {
                self.rendered.insert(element.key(), payload.to_string());
            }
        }

        self.dropdown_open = false;
        store.write(lang);
        tracing::debug!("language: switched to {}", lang.code());
    }

    pub fn toggle_dropdown(&mut self) {
        self.dropdown_open = !self.dropdown_open;
    }

    pub fn close_dropdown(&mut self) {
        self.dropdown_open = false;
    }

    pub fn active(&self) -> Lang {
        self.active
    }

    pub fn trigger_label(&self) -> &'static str {
        self.trigger_label
    }

    pub fn dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    /// Currently rendered markup of a translatable element.
    pub fn content(&self, key: &str) -> Option<&str> {
        self.rendered.get(key).map(String::as_str)
    }

    /// Bootstrap step: apply the stored language if it is valid, otherwise
    /// `default`. Returns the language applied.
    pub fn restore(&mut self, store: &PreferenceStore, default: Lang) -> Lang {
        let stored = store.read();
        let lang = stored.unwrap_or(default);
        tracing::info!(
            "bootstrap: language {} ({})",
            lang.code(),
            if stored.is_some() { "stored" } else { "default" }
        );
        self.switch_language(lang, store);
        lang
    }
}

/// CSS `display` value of a widget tagged with `tag`.
pub fn widget_display(tag: Lang, active: Lang) -> &'static str {
    if tag == active {
        "flex"
    } else {
        "none"
    }
}
