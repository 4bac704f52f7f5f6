use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::SiteError;
use crate::i18n::Lang;

pub const PREFERENCE_KEY: &str = "preferred_language";

/// Key-value storage the language preference lives in.
pub trait PreferenceBackend {
    fn get(&self, key: &str) -> Result<Option<String>, SiteError>;
    fn set(&self, key: &str, value: &str) -> Result<(), SiteError>;
}

/// In-process storage for SSR, native builds and tests. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl PreferenceBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, SiteError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SiteError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// `window.localStorage`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, SiteError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(SiteError::StorageUnavailable)
    }
}

#[cfg(target_arch = "wasm32")]
impl PreferenceBackend for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, SiteError> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| SiteError::StorageUnavailable)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SiteError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| SiteError::StorageWrite {
                key: key.to_string(),
            })
    }
}

/// The persisted language preference.
#[derive(Clone)]
pub struct PreferenceStore {
    backend: Rc<dyn PreferenceBackend>,
}

impl PreferenceStore {
    pub fn new(backend: impl PreferenceBackend + 'static) -> Self {
        Self {
            backend: Rc::new(backend),
        }
    }

    /// localStorage in the browser, memory everywhere else.
    pub fn platform_default() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::new(LocalStorage)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::new(MemoryBackend::default())
        }
    }

    /// Stored language, `None` when missing, unreadable or unrecognized.
    pub fn read(&self) -> Option<Lang> {
        match self.backend.get(PREFERENCE_KEY) {
            Ok(Some(code)) => {
                let lang = Lang::from_code(&code);
                if lang.is_none() {
                    tracing::debug!("preferences: ignoring unrecognized language {code:?}");
                }
                lang
            }
            Ok(None) => None,
            Err(e) => {
                tracing::warn!("preferences: read failed: {e}");
                None
            }
        }
    }

    pub fn write(&self, lang: Lang) {
        if let Err(e) = self.backend.set(PREFERENCE_KEY, lang.code()) {
            tracing::warn!("preferences: write failed: {e}");
        }
    }
}

impl std::fmt::Debug for PreferenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceStore").finish_non_exhaustive()
    }
}
