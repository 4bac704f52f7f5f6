use dioxus::prelude::*;
use std::env;

use views::Home;

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebLayout)]
    #[route("/")]
    Home {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    install_panic_hook();

    #[cfg(feature = "server")]
    init_tracing();

    log_runtime_config();
    dioxus::launch(App);
}

#[cfg(feature = "server")]
fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {info}");
    }));
}

fn log_runtime_config() {
    // Nothing to report in the browser bundle.
    if cfg!(target_arch = "wasm32") {
        return;
    }

    let ip = env::var("IP").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    eprintln!("startup: IP={ip} PORT={port}");

    let config = ui::SiteConfig::bundled();
    eprintln!(
        "startup: {} screenshots under {}, default language {}",
        config.screenshots.len(),
        config.screenshot_dir,
        config.default_lang.code()
    );
    if config.background_video.is_none() {
        eprintln!("startup: no background video configured");
    }
    if config.steam_app_id.is_none() {
        eprintln!("startup: WARNING steam_app_id missing; store widgets are hidden");
    }
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::SiteTheme {}
        ui::SiteProvider {
            Router::<Route> {}
        }
    }
}

/// Page chrome around every route: fixed header, then the routed content.
#[component]
fn WebLayout() -> Element {
    rsx! {
        ui::SiteHeader {}
        div { class: "route_view", Outlet::<Route> {} }
    }
}
