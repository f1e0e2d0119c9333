//! Plugin manager: an ordered name → handle registry per behavior kind.
//!
//! The orchestrator declares its plugins in config ([`crate::config`]) and
//! supplies a load function that resolves each declared type to a handle;
//! dynamic discovery itself lives outside this crate. The manager keeps the
//! declaration order, which is the order the orchestrator tries plugins in
//! (e.g. recovery behaviors are attempted in sequence).

use std::collections::HashMap;

use tracing::{info, warn};

use crate::config::PluginEntry;
use crate::context::NavContext;
use crate::error::{Result, SetuError};
use crate::handle::BehaviorHandle;
use crate::types::BehaviorKind;

/// Ordered registry of plugin handles of one behavior kind
pub struct PluginManager<H: BehaviorHandle> {
    kind: BehaviorKind,
    order: Vec<String>,
    plugins: HashMap<String, H>,
}

impl<H: BehaviorHandle> PluginManager<H> {
    /// Empty manager for one behavior kind
    pub fn new(kind: BehaviorKind) -> Self {
        Self {
            kind,
            order: Vec::new(),
            plugins: HashMap::new(),
        }
    }

    /// Load all declared plugins, in declaration order.
    ///
    /// `load_fn` resolves one declared entry to a handle; it is the seam
    /// where the external plugin discovery mechanism plugs in. The first
    /// load failure aborts and is returned; plugins loaded before it stay
    /// registered.
    pub fn load_plugins<F>(&mut self, entries: &[PluginEntry], mut load_fn: F) -> Result<()>
    where
        F: FnMut(&PluginEntry) -> Result<H>,
    {
        for entry in entries {
            if self.plugins.contains_key(&entry.name) {
                return Err(SetuError::Config(format!(
                    "duplicate {} plugin name '{}'",
                    self.kind, entry.name
                )));
            }
            let handle = match load_fn(entry) {
                Ok(handle) => handle,
                Err(e) => {
                    warn!(plugin = %entry.name, type_id = %entry.type_id,
                          "failed to load {} plugin: {}", self.kind, e);
                    return Err(e);
                }
            };
            info!(plugin = %entry.name, type_id = %entry.type_id, legacy = entry.legacy,
                  "loaded {} plugin", self.kind);
            self.order.push(entry.name.clone());
            self.plugins.insert(entry.name.clone(), handle);
        }
        Ok(())
    }

    /// Look up a plugin handle by name
    pub fn get(&self, name: &str) -> Result<&H> {
        self.plugins
            .get(name)
            .ok_or_else(|| SetuError::UnknownPlugin(name.to_string()))
    }

    pub fn has(&self, name: &str) -> bool {
        self.plugins.contains_key(name)
    }

    /// Plugin names in declaration order
    pub fn names(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Initialize every loaded plugin with the shared context, in
    /// declaration order. Fails fast on the first initialization error.
    pub fn initialize_all(&self, context: &NavContext) -> Result<()> {
        for name in &self.order {
            self.plugins[name].initialize(context)?;
        }
        Ok(())
    }

    /// Drop all loaded plugins
    pub fn clear(&mut self) {
        self.order.clear();
        self.plugins.clear();
    }
}
