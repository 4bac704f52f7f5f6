use dioxus::prelude::*;

use crate::navigation::{smooth_scroll_script, AnchorClick};

/// Link that smooth-scrolls to same-page fragments instead of jumping.
#[component]
pub fn PageAnchor(
    href: String,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    let click = AnchorClick::for_href(&href);
    let intercept = click.prevents_default();

    rsx! {
        a {
            class: "{class}",
            href: "{href}",
            onclick: move |evt: MouseEvent| {
                if intercept {
                    evt.prevent_default();
                }
                if let AnchorClick::ScrollTo(id) = &click {
                    let js = smooth_scroll_script(id);
                    spawn(async move {
                        let _ = document::eval(&js).await;
                    });
                }
            },
            {children}
        }
    }
}

#[component]
pub fn SiteHeader() -> Element {
    let site = crate::use_site();
    let background = (site.header_background)();
    let title = site.config().game_title;

    rsx! {
        header {
            id: "site-header",
            class: "site_header",
            style: "background: {background};",
            div { class: "site_header_inner",
                PageAnchor { class: "brand", href: "#top",
                    span { class: "brand_mark" }
                    span { class: "brand_name", "{title}" }
                }
                nav { class: "nav_links",
                    PageAnchor { class: "nav_link", href: "#about", crate::Translated { entry: "nav.about", inline: true } }
                    PageAnchor { class: "nav_link", href: "#features", crate::Translated { entry: "nav.features", inline: true } }
                    PageAnchor { class: "nav_link", href: "#gallery", crate::Translated { entry: "nav.gallery", inline: true } }
                    PageAnchor { class: "nav_link", href: "#wishlist", crate::Translated { entry: "nav.wishlist", inline: true } }
                }
                crate::LanguageSelector {}
            }
        }
    }
}
