use dioxus::prelude::*;

use crate::gallery::{suppresses_load_error, GalleryController};

const GALLERY_CSS: Asset = asset!("/assets/styling/gallery.css");

/// Screenshot slider with previous/next controls and one dot per slide.
#[component]
pub fn ScreenshotGallery() -> Element {
    let mut site = crate::use_site();
    let screenshot_dir = site.config().screenshot_dir;
    let gallery = GalleryController::clone(&site.gallery.read());

    rsx! {
        document::Link { rel: "stylesheet", href: GALLERY_CSS }

        section { id: "gallery", class: "page_section",
            crate::Translated { entry: "gallery.title", class: "section_title" }
            div { class: "gallery",
                div { id: "gallery-slider", class: "gallery_slider",
                    for (i, slide) in gallery.slides().iter().enumerate() {
                        div {
                            key: "{i}",
                            class: if slide.active { "slide active" } else { "slide" },
                            img {
                                src: "{slide.src}",
                                alt: format!("screenshot {}", i + 1),
                                loading: "lazy",
                                onerror: {
                                    let swallow = suppresses_load_error(&slide.src, &screenshot_dir);
                                    move |evt: ImageEvent| {
                                        if swallow {
                                            evt.prevent_default();
                                            evt.stop_propagation();
                                        }
                                    }
                                },
                            }
                        }
                    }
                }
                if !gallery.is_empty() {
                    button {
                        class: "gallery_nav prev",
                        onclick: move |_| site.change_slide(-1),
                        crate::Translated { entry: "gallery.prev", inline: true }
                    }
                    button {
                        class: "gallery_nav next",
                        onclick: move |_| site.change_slide(1),
                        crate::Translated { entry: "gallery.next", inline: true }
                    }
                }
                div { id: "gallery-dots", class: "gallery_dots",
                    for (i, dot) in gallery.indicators().iter().enumerate() {
                        span {
                            key: "{i}",
                            class: if dot.active { "dot active" } else { "dot" },
                            onclick: move |_| site.go_to_slide(i as i64 + 1),
                        }
                    }
                }
            }
        }
    }
}
