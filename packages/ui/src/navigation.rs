//! Same-page anchors, the scroll-reactive header and the document-level
//! listeners installed once at bootstrap.

pub const HEADER_OPAQUE: &str = "rgba(10, 10, 20, 0.95)";
pub const HEADER_TRANSLUCENT: &str = "rgba(10, 10, 20, 0.6)";

/// What a click on an anchor with `href` should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnchorClick {
    /// Leave the browser alone.
    Follow,
    /// Suppress navigation and smooth-scroll to the element id, if it exists.
    ScrollTo(String),
    /// Suppress navigation, nothing to scroll to.
    Swallow,
}

impl AnchorClick {
    pub fn for_href(href: &str) -> Self {
        let Some(fragment) = href.strip_prefix('#') else {
            return AnchorClick::Follow;
        };
        if fragment.is_empty() {
            return AnchorClick::Swallow;
        }
        let id = urlencoding::decode(fragment)
            .map(|id| id.into_owned())
            .unwrap_or_else(|_| fragment.to_string());
        AnchorClick::ScrollTo(id)
    }

    pub fn prevents_default(&self) -> bool {
        !matches!(self, AnchorClick::Follow)
    }
}

/// Script that smooth-scrolls to the top edge of `#id`. Evaluates to `true`
/// when the element was found.
pub fn smooth_scroll_script(id: &str) -> String {
    format!(
        r#"(function(){{
            const el = document.getElementById({id});
            if(!el) return false;
            const top = el.getBoundingClientRect().top + window.pageYOffset;
            window.scrollTo({{ top: top, behavior: "smooth" }});
            return true;
        }})()"#,
        id = js_string(id),
    )
}

pub fn header_background(scroll_y: f64, threshold: f64) -> &'static str {
    if scroll_y > threshold {
        HEADER_OPAQUE
    } else {
        HEADER_TRANSLUCENT
    }
}

/// Forwards `window.scrollY` over the eval channel on every scroll event.
pub const SCROLL_LISTENER_SCRIPT: &str = r#"
    dioxus.send(window.scrollY || 0);
    window.addEventListener("scroll", function(){ dioxus.send(window.scrollY || 0); }, { passive: true });
"#;

/// Sends `true` for every click in the document that lands outside
/// `.language-selector`.
pub const OUTSIDE_CLICK_LISTENER_SCRIPT: &str = r#"
    document.addEventListener("click", function(e){
        const t = e.target;
        if(!(t && t.closest && t.closest(".language-selector"))) dioxus.send(true);
    }, true);
"#;

/// Capturing listener that swallows image load errors under `screenshot_dir`.
pub fn image_error_listener_script(screenshot_dir: &str) -> String {
    let dir = screenshot_dir.trim_matches('/');
    format!(
        r#"(function(){{
            const dir = {dir};
            if(!dir || window.__screenshotErrorGuard) return "";
            window.__screenshotErrorGuard = true;
            document.addEventListener("error", function(e){{
                const t = e.target;
                if(t && t.tagName === "IMG" && typeof t.src === "string" && t.src.indexOf("/" + dir + "/") !== -1) {{
                    e.preventDefault();
                    e.stopPropagation();
                }}
            }}, true);
            return "";
        }})()"#,
        dir = js_string(dir),
    )
}

/// JSON string literals are valid JS string literals.
pub(crate) fn js_string(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}
