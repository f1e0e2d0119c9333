//! Local trajectory controller contract

use crate::context::NavContext;
use crate::error::Result;
use crate::outcome::VelocityResult;
use crate::types::Pose;

/// Local trajectory controller contract
pub trait Controller: Send + Sync {
    /// One-time setup with the shared navigation context.
    ///
    /// Called exactly once, before any other method.
    fn initialize(&self, name: &str, context: &NavContext) -> Result<()>;

    /// Compute the next velocity command.
    ///
    /// Operates on the path installed by [`set_path`](Controller::set_path)
    /// and live robot state from the navigation context. Behavioral failures
    /// are reported through the result's outcome code, never as errors.
    fn compute_velocity(&self) -> VelocityResult;

    /// Replace the path the controller is following.
    ///
    /// Returns `true` if the path was accepted.
    fn set_path(&self, plan: &[Pose]) -> bool;

    /// Whether the goal pose has been reached.
    ///
    /// Pure query, callable at any time after initialization.
    fn is_goal_reached(&self) -> bool;

    /// Whether the goal pose has been reached within explicit tolerances.
    ///
    /// `xy_tolerance` in meters, `yaw_tolerance` in radians. Implementations
    /// without per-call tolerance support may answer with their configured
    /// tolerances instead.
    fn is_goal_reached_within(&self, xy_tolerance: f32, yaw_tolerance: f32) -> bool;

    /// Request cooperative termination of an in-flight `compute_velocity`
    /// call.
    ///
    /// Returns `true` if the request was accepted for processing, `false` if
    /// cancellation is unsupported. Safe to call from another thread.
    fn cancel(&self) -> bool {
        false
    }
}
