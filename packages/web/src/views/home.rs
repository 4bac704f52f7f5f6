use dioxus::prelude::*;
use ui::{AboutSection, FeaturesSection, Hero, ScreenshotGallery, SiteFooter, WishlistSection};

#[component]
pub fn Home() -> Element {
    rsx! {
        div { id: "top" }
        Hero {}
        AboutSection {}
        FeaturesSection {}
        ScreenshotGallery {}
        WishlistSection {}
        SiteFooter {}
    }
}
