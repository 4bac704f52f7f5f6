use dioxus::prelude::*;

use crate::playback::{MediaEvent, PlaybackCommand, BACKGROUND_VIDEO_ID};

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

#[component]
pub fn Hero() -> Element {
    let site = crate::use_site();
    let config = site.config();
    let title = config.game_title;
    let video = config.background_video;

    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }

        section {
            id: "hero",
            if let Some(src) = video {
                BackgroundVideo { src }
            }
            div { class: "hero_overlay" }
            div { class: "hero_content",
                h1 { class: "hero_title", "{title}" }
                crate::Translated { entry: "hero.tagline", class: "hero_tagline" }
                crate::Translated { entry: "hero.subtitle", class: "hero_subtitle" }
                div { class: "cta_row",
                    crate::PageAnchor { class: "btn primary", href: "#wishlist",
                        crate::Translated { entry: "hero.cta", inline: true }
                    }
                }
            }
        }
    }
}

/// Muted background loop that keeps itself playing: rewinds on end, starts on
/// first frame and resumes whenever something pauses it.
#[component]
pub fn BackgroundVideo(src: String) -> Element {
    rsx! {
        video {
            id: BACKGROUND_VIDEO_ID,
            class: "background_video",
            src: "{src}",
            autoplay: true,
            muted: true,
            playsinline: true,
            preload: "auto",
            onended: move |_| apply(MediaEvent::Ended),
            onloadeddata: move |_| apply(MediaEvent::LoadedData),
            onpause: move |_| apply(MediaEvent::Paused),
        }
    }
}

fn apply(event: MediaEvent) {
    let js = PlaybackCommand::for_event(event).script(BACKGROUND_VIDEO_ID);
    spawn(async move {
        let _ = document::eval(&js).await;
    });
}
