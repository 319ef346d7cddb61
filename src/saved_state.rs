use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Weak;

use crate::Bundle;

/// Every bundle held by a registry, keyed by provider key
pub type SavedState = BTreeMap<String, Bundle>;

pub trait SavedStateProvider {
    fn save_state(&self) -> Bundle;
}

#[derive(Default)]
struct Registry {
    providers: BTreeMap<String, Weak<dyn SavedStateProvider>>,
    // `None` until `restore` is called
    restored: Option<SavedState>,
}

/// Collects state from registered providers and hands restored state back to
/// consumers exactly once
#[derive(Default)]
pub struct SavedStateRegistry(RefCell<Registry>);

impl SavedStateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_provider(
        &self,
        key: &str,
        provider: Weak<dyn SavedStateProvider>,
    ) -> Result<(), String> {
        let mut registry = self.0.borrow_mut();
        if let Some(existing) = registry.providers.get(key) {
            if existing.strong_count() > 0 {
                return Err(format!(
                    "Saved state provider for '{}' is already registered",
                    key
                ));
            }
        }
        debug!("Registered saved state provider '{}'", key);
        registry.providers.insert(key.to_string(), provider);
        Ok(())
    }

    pub fn unregister_provider(&self, key: &str) {
        self.0.borrow_mut().providers.remove(key);
    }

    /// Supply state saved by a previous instance. Replaces any restored state
    /// that has not been consumed yet.
    pub fn restore(&self, state: SavedState) {
        info!("Restoring saved state for {} keys", state.len());
        self.0.borrow_mut().restored = Some(state);
    }

    pub fn is_restored(&self) -> bool {
        self.0.borrow().restored.is_some()
    }

    /// Take the restored bundle for `key`. Later calls for the same key
    /// return `None`.
    pub fn consume_restored_state_for_key(&self, key: &str) -> Option<Bundle> {
        let mut registry = self.0.borrow_mut();
        let restored = match registry.restored.as_mut() {
            Some(restored) => restored,
            None => {
                debug!("No restored state to consume for '{}'", key);
                return None;
            }
        };
        let bundle = restored.remove(key);
        debug!(
            "Consumed restored state for '{}': {}",
            key,
            if bundle.is_some() { "found" } else { "none" }
        );
        bundle
    }

    /// Capture the state of every live provider. Restored bundles nobody
    /// consumed are carried over.
    pub fn save(&self) -> SavedState {
        let providers: Vec<(String, Weak<dyn SavedStateProvider>)> = {
            let mut registry = self.0.borrow_mut();
            registry.providers.retain(|_, x| x.strong_count() > 0);
            registry
                .providers
                .iter()
                .map(|(key, provider)| (key.clone(), provider.clone()))
                .collect()
        };

        let mut state = self.0.borrow().restored.clone().unwrap_or_default();
        for (key, provider) in providers {
            if let Some(provider) = provider.upgrade() {
                state.insert(key, provider.save_state());
            }
        }
        debug!("Saved state for {} keys", state.len());
        state
    }
}
