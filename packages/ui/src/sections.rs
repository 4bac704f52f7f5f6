use dioxus::prelude::*;

use crate::i18n::Lang;
use crate::language::widget_display;

/// Element whose markup follows the active language.
///
/// Payloads come from the page catalog and are trusted; they are rendered
/// as HTML.
#[component]
pub fn Translated(
    entry: &'static str,
    #[props(default)] class: String,
    #[props(default)] inline: bool,
) -> Element {
    let site = crate::use_site();
    let html = site
        .language
        .read()
        .content(entry)
        .unwrap_or_default()
        .to_string();

    if inline {
        rsx! { span { class: "{class}", "data-i18n": entry, dangerous_inner_html: "{html}" } }
    } else {
        rsx! { div { class: "{class}", "data-i18n": entry, dangerous_inner_html: "{html}" } }
    }
}

#[component]
pub fn AboutSection() -> Element {
    rsx! {
        section { id: "about", class: "page_section",
            Translated { entry: "about.title", class: "section_title" }
            Translated { entry: "about.body", class: "section_body" }
        }
    }
}

#[component]
pub fn FeaturesSection() -> Element {
    rsx! {
        section { id: "features", class: "page_section",
            Translated { entry: "features.title", class: "section_title" }
            div { class: "feature_grid",
                Translated { entry: "features.combat", class: "feature_card" }
                Translated { entry: "features.party", class: "feature_card" }
                Translated { entry: "features.world", class: "feature_card" }
            }
        }
    }
}

/// One Steam store widget per language; only the active language's is shown.
#[component]
pub fn SteamWidgets() -> Element {
    let site = crate::use_site();
    let active = site.language.read().active();
    let Some(app_id) = site.config().steam_app_id else {
        return rsx! {};
    };
    let widgets: Vec<(Lang, String, &'static str)> = Lang::ALL
        .into_iter()
        .map(|lang| {
            let src = format!(
                "https://store.steampowered.com/widget/{app_id}/?l={}",
                lang.steam_code()
            );
            (lang, src, widget_display(lang, active))
        })
        .collect();

    rsx! {
        div { class: "steam_widgets",
            for (lang, src, display) in widgets {
                div {
                    key: "{lang.code()}",
                    class: "steam-widget",
                    "data-lang": lang.code(),
                    style: "display: {display};",
                    iframe {
                        src: "{src}",
                        width: "646",
                        height: "190",
                        "frameborder": "0",
                        title: "Steam",
                    }
                }
            }
        }
    }
}

#[component]
pub fn WishlistSection() -> Element {
    rsx! {
        section { id: "wishlist", class: "page_section",
            Translated { entry: "wishlist.title", class: "section_title" }
            Translated { entry: "wishlist.body", class: "section_body" }
            SteamWidgets {}
        }
    }
}

#[component]
pub fn SiteFooter() -> Element {
    let title = crate::use_site().config().game_title;
    rsx! {
        footer { class: "site_footer",
            Translated { entry: "footer.contact", class: "footer_line" }
            Translated { entry: "footer.rating", class: "footer_line hint" }
            p { class: "footer_line hint", "© {title}" }
        }
    }
}
