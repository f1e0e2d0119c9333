//! Recovery adapter over a legacy recovery plugin

use parking_lot::Mutex;

use crate::context::NavContext;
use crate::contract::Recovery;
use crate::error::Result;
use crate::legacy::LegacyRecovery;
use crate::outcome::{Outcome, RecoveryResult};

/// Implements [`Recovery`] on top of a [`LegacyRecovery`].
///
/// Owns the legacy plugin exclusively. A backing plugin is required at
/// construction; there is no deferred-failure path.
pub struct LegacyRecoveryAdapter {
    inner: Mutex<Box<dyn LegacyRecovery>>,
}

impl LegacyRecoveryAdapter {
    /// Wrap a legacy recovery plugin
    pub fn new(plugin: Box<dyn LegacyRecovery>) -> Self {
        Self {
            inner: Mutex::new(plugin),
        }
    }
}

impl Recovery for LegacyRecoveryAdapter {
    fn initialize(&self, name: &str, context: &NavContext) -> Result<()> {
        self.inner.lock().initialize(name, context);
        Ok(())
    }

    fn run_behavior(&self) -> RecoveryResult {
        if self.inner.lock().run_behavior() {
            RecoveryResult::success()
        } else {
            RecoveryResult::failure(Outcome::FAILURE, "")
        }
    }

    fn cancel(&self) -> bool {
        // Legacy plugins have no cancellation hook.
        false
    }
}
