//! Recovery behavior contract

use crate::context::NavContext;
use crate::error::Result;
use crate::outcome::RecoveryResult;

/// Recovery behavior contract
pub trait Recovery: Send + Sync {
    /// One-time setup with the shared navigation context.
    ///
    /// Called exactly once, before any other method.
    fn initialize(&self, name: &str, context: &NavContext) -> Result<()>;

    /// Run the recovery motion.
    ///
    /// Takes no request payload; recovery behaviors operate on the shared
    /// costmaps. Blocks until the motion finishes or a pending cancel request
    /// is observed.
    fn run_behavior(&self) -> RecoveryResult;

    /// Request cooperative termination of an in-flight `run_behavior` call.
    ///
    /// Returns `true` if the request was accepted for processing, `false` if
    /// cancellation is unsupported. Safe to call from another thread.
    fn cancel(&self) -> bool {
        false
    }
}
