use anyhow::Result;
use headless_chrome::{Browser as ChromeBrowser, LaunchOptions, Tab};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

pub struct Browser {
    browser: ChromeBrowser,
    profile_dir: PathBuf,
}

impl Browser {
    /// Headless Chrome with a throwaway profile, so localStorage starts empty.
    pub fn launch() -> Result<Self> {
        let profile_dir = std::env::temp_dir().join(format!("site-e2e-{}", Uuid::new_v4()));
        let options = LaunchOptions::default_builder()
            .headless(true)
            .user_data_dir(Some(profile_dir.clone()))
            .build()
            .map_err(|e| anyhow::anyhow!("launch options: {e}"))?;

        let browser = ChromeBrowser::new(options)?;

        Ok(Self {
            browser,
            profile_dir,
        })
    }

    pub fn new_page(&self) -> Result<Page> {
        let tab = self.browser.new_tab()?;
        Ok(Page { tab })
    }
}

impl Drop for Browser {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.profile_dir);
    }
}

pub struct Page {
    tab: Arc<Tab>,
}

impl Page {
    pub fn goto(&self, url: &str) -> Result<()> {
        self.tab.navigate_to(url)?;
        self.tab.wait_until_navigated()?;
        Ok(())
    }

    pub fn find_element(&self, selector: &str) -> Result<String> {
        let element = self.tab.wait_for_element(selector)?;
        let text = element.get_inner_text()?;
        Ok(text)
    }

    pub fn click(&self, selector: &str) -> Result<()> {
        let element = self.tab.wait_for_element(selector)?;
        element.click()?;
        // Give the UI a frame to re-render before the caller inspects the DOM.
        std::thread::sleep(Duration::from_millis(150));
        Ok(())
    }

    pub fn url(&self) -> Result<String> {
        Ok(self.tab.get_url())
    }

    /// Evaluate a JS expression and return its JSON value (`Null` if none).
    pub fn eval(&self, js: &str) -> Result<Value> {
        let result = self.tab.evaluate(js, false)?;
        Ok(result.value.unwrap_or(Value::Null))
    }

    /// Poll the inner text of `selector` until it equals `expected`.
    pub fn wait_for_text(&self, selector: &str, expected: &str) -> Result<()> {
        let mut last = String::new();
        for _ in 0..100 {
            if let Ok(text) = self.find_element(selector) {
                if text.trim() == expected {
                    return Ok(());
                }
                last = text;
            }
            std::thread::sleep(Duration::from_millis(100));
        }
        anyhow::bail!("{selector}: expected {expected:?}, last saw {last:?}")
    }

    pub fn count(&self, selector: &str) -> Result<u64> {
        let js = format!(
            "document.querySelectorAll({}).length",
            Value::from(selector)
        );
        Ok(self.eval(&js)?.as_u64().unwrap_or(0))
    }

    /// Position of the single element matching `selector` among its siblings
    /// matching `all`, `None` when not exactly one matches.
    pub fn active_index(&self, all: &str, selector: &str) -> Result<Option<u64>> {
        let js = format!(
            r#"(function(){{
                const all = Array.from(document.querySelectorAll({all}));
                const hits = all.filter(function(el){{ return el.matches({sel}); }});
                return hits.length === 1 ? all.indexOf(hits[0]) : -1;
            }})()"#,
            all = Value::from(all),
            sel = Value::from(selector),
        );
        let idx = self.eval(&js)?.as_i64().unwrap_or(-1);
        Ok(u64::try_from(idx).ok())
    }
}
