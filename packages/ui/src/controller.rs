use std::time::Duration;

use dioxus::prelude::*;

use crate::config::SiteConfig;
use crate::gallery::GalleryController;
use crate::i18n::{Catalog, Lang};
use crate::language::LanguageSwitcher;
use crate::navigation::{
    header_background, image_error_listener_script, HEADER_TRANSLUCENT,
    OUTSIDE_CLICK_LISTENER_SCRIPT, SCROLL_LISTENER_SCRIPT,
};
use crate::preferences::PreferenceStore;

/// Page state shared through context. Every handler goes through these
/// methods so the language and gallery invariants hold between events.
#[derive(Clone, Copy)]
pub struct SiteController {
    pub language: Signal<LanguageSwitcher>,
    pub gallery: Signal<GalleryController>,
    pub header_background: Signal<&'static str>,
    config: Signal<SiteConfig>,
    store: Signal<PreferenceStore>,
}

impl SiteController {
    pub fn new(config: SiteConfig, store: PreferenceStore) -> Self {
        let language = LanguageSwitcher::new(Catalog::page(), config.default_lang);
        let gallery = GalleryController::initialize(&config.screenshots, &config.screenshot_dir);
        Self {
            language: Signal::new(language),
            gallery: Signal::new(gallery),
            header_background: Signal::new(HEADER_TRANSLUCENT),
            config: Signal::new(config),
            store: Signal::new(store),
        }
    }

    pub fn config(&self) -> SiteConfig {
        SiteConfig::clone(&self.config.peek())
    }

    /// Language chosen from markup. Unknown codes are ignored.
    pub fn select_language(&mut self, code: &str) {
        match Lang::from_code(code) {
            Some(lang) => self.switch_language(lang),
            None => tracing::debug!("language: ignoring unknown code {code:?}"),
        }
    }

    pub fn switch_language(&mut self, lang: Lang) {
        let store = PreferenceStore::clone(&self.store.peek());
        self.language.write().switch_language(lang, &store);
    }

    pub fn toggle_dropdown(&mut self) {
        self.language.write().toggle_dropdown();
    }

    pub fn close_dropdown(&mut self) {
        if self.language.peek().dropdown_open() {
            self.language.write().close_dropdown();
        }
    }

    pub fn change_slide(&mut self, delta: i64) {
        self.gallery.write().change_slide(delta);
    }

    pub fn go_to_slide(&mut self, position: i64) {
        self.gallery.write().current_slide(position);
    }

    pub fn auto_slide(&mut self) {
        self.gallery.write().auto_slide();
    }

    /// Persisted language if valid, otherwise the configured default.
    pub fn restore_language(&mut self) {
        let store = PreferenceStore::clone(&self.store.peek());
        let default = self.config.peek().default_lang;
        self.language.write().restore(&store, default);
    }

    pub fn on_scroll(&mut self, scroll_y: f64) {
        let threshold = self.config.peek().header_scroll_threshold;
        let next = header_background(scroll_y, threshold);
        if *self.header_background.peek() != next {
            self.header_background.set(next);
        }
    }
}

pub fn use_site() -> SiteController {
    use_context::<SiteController>()
}

/// Owns the page state and runs bootstrap once the document is ready.
///
/// Any click in the document outside `.language-selector` closes the language
/// dropdown.
#[component]
pub fn SiteProvider(children: Element) -> Element {
    let mut site = use_context_provider(|| {
        SiteController::new(SiteConfig::bundled(), PreferenceStore::platform_default())
    });

    use_effect(move || {
        site.restore_language();

        let config = site.config();
        let image_guard = image_error_listener_script(&config.screenshot_dir);
        spawn(async move {
            let _ = document::eval(&image_guard).await;
        });
        spawn(watch_scroll(site));
        spawn(watch_outside_clicks(site));
        if let Some(secs) = config.auto_advance_secs.filter(|s| *s > 0) {
            tracing::info!("gallery: auto-advance every {secs}s");
            spawn(rotate_gallery(site, Duration::from_secs(secs)));
        }
    });

    rsx! {
        div { class: "site_root", {children} }
    }
}

async fn watch_scroll(mut site: SiteController) {
    let mut eval = document::eval(SCROLL_LISTENER_SCRIPT);
    while let Ok(scroll_y) = eval.recv::<f64>().await {
        site.on_scroll(scroll_y);
    }
    tracing::debug!("scroll listener closed");
}

async fn watch_outside_clicks(mut site: SiteController) {
    let mut eval = document::eval(OUTSIDE_CLICK_LISTENER_SCRIPT);
    while eval.recv::<bool>().await.is_ok() {
        site.close_dropdown();
    }
    tracing::debug!("outside-click listener closed");
}

async fn rotate_gallery(mut site: SiteController, period: Duration) {
    loop {
        gloo_timers::future::sleep(period).await;
        site.auto_slide();
    }
}
