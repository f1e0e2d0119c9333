//! Legacy plugin boundary.
//!
//! The narrow, single-outcome interfaces that predate the capability
//! contracts in [`crate::contract`]. Legacy plugins report only boolean
//! success, carry no diagnostic message and no outcome code, and have no
//! cancellation hook.
//!
//! Methods take `&mut self`: these interfaces were written without the
//! concurrent-cancel contract, so exclusive access is the honest signature.
//! The adapters in [`crate::adapter`] serialize access behind a mutex.

use crate::context::NavContext;
use crate::types::{Pose, Velocity};

/// Legacy global planner
pub trait LegacyPlanner: Send {
    /// Setup; same shape as the new contract, forwarded unchanged
    fn initialize(&mut self, name: &str, context: &NavContext);

    /// Compute a plan from `start` to `goal`.
    ///
    /// `Some((plan, cost))` on success, `None` on failure. No goal tolerance
    /// and no finer-grained failure classification exist at this boundary.
    fn make_plan(&mut self, start: &Pose, goal: &Pose) -> Option<(Vec<Pose>, f32)>;
}

/// Legacy local trajectory controller
pub trait LegacyController: Send {
    /// Setup; same shape as the new contract, forwarded unchanged
    fn initialize(&mut self, name: &str, context: &NavContext);

    /// Compute the next velocity command for the plan installed by
    /// [`set_plan`](LegacyController::set_plan).
    ///
    /// `Some(cmd)` on success, `None` on failure.
    fn compute_velocity(&mut self) -> Option<Velocity>;

    /// Replace the plan being followed; `true` if accepted
    fn set_plan(&mut self, plan: &[Pose]) -> bool;

    /// Whether the goal has been reached.
    ///
    /// No tolerance-parameterized variant exists at this boundary.
    fn is_goal_reached(&mut self) -> bool;
}

/// Legacy recovery behavior
pub trait LegacyRecovery: Send {
    /// Setup; same shape as the new contract, forwarded unchanged
    fn initialize(&mut self, name: &str, context: &NavContext);

    /// Run the recovery motion; `true` on success
    fn run_behavior(&mut self) -> bool;
}
