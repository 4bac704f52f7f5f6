//! Shared UI for the game site: page state controllers and the components
//! that render them.

pub mod config;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod language;
pub mod navigation;
pub mod playback;
pub mod preferences;

mod controller;
pub use controller::{use_site, SiteController, SiteProvider};

mod hero;
pub use hero::{BackgroundVideo, Hero};

mod language_menu;
pub use language_menu::LanguageSelector;

mod screenshots;
pub use screenshots::ScreenshotGallery;

mod sections;
pub use sections::{
    AboutSection, FeaturesSection, SiteFooter, SteamWidgets, Translated, WishlistSection,
};

mod site_header;
pub use site_header::{PageAnchor, SiteHeader};

mod theme;
pub use theme::SiteTheme;

pub use config::SiteConfig;
pub use error::SiteError;
pub use i18n::Lang;
