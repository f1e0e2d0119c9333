//! Global planner contract

use crate::context::NavContext;
use crate::error::Result;
use crate::outcome::PlanResult;
use crate::types::Pose;

/// Global path planner contract
pub trait Planner: Send + Sync {
    /// One-time setup with the shared navigation context.
    ///
    /// Called exactly once, before any other method. May block on setup work
    /// (e.g. reading static map data) but must not start background work.
    fn initialize(&self, name: &str, context: &NavContext) -> Result<()>;

    /// Compute a plan from `start` to `goal`.
    ///
    /// `tolerance` is the acceptable distance to the goal in meters. Blocks
    /// until a result is available or a pending cancel request is observed.
    /// Behavioral failures (no path, canceled) are reported through the
    /// result's outcome code, never as errors.
    fn make_plan(&self, start: &Pose, goal: &Pose, tolerance: f32) -> PlanResult;

    /// Request cooperative termination of an in-flight `make_plan` call.
    ///
    /// Returns `true` if the request was accepted for processing (not
    /// necessarily acted on yet), `false` if cancellation is unsupported.
    /// Safe to call from another thread, and a no-op when nothing is in
    /// flight.
    fn cancel(&self) -> bool {
        false
    }
}
