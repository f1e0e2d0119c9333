//! Controller adapter over a legacy controller plugin

use parking_lot::Mutex;

use crate::context::NavContext;
use crate::contract::Controller;
use crate::error::Result;
use crate::legacy::LegacyController;
use crate::outcome::{Outcome, VelocityResult};
use crate::types::Pose;

/// Implements [`Controller`] on top of a [`LegacyController`].
///
/// Owns the legacy plugin exclusively. A backing plugin is required at
/// construction; there is no deferred-failure path.
pub struct LegacyControllerAdapter {
    inner: Mutex<Box<dyn LegacyController>>,
}

impl LegacyControllerAdapter {
    /// Wrap a legacy controller plugin
    pub fn new(plugin: Box<dyn LegacyController>) -> Self {
        Self {
            inner: Mutex::new(plugin),
        }
    }
}

impl Controller for LegacyControllerAdapter {
    fn initialize(&self, name: &str, context: &NavContext) -> Result<()> {
        self.inner.lock().initialize(name, context);
        Ok(())
    }

    fn compute_velocity(&self) -> VelocityResult {
        match self.inner.lock().compute_velocity() {
            Some(cmd) => VelocityResult::success(cmd),
            None => VelocityResult::failure(Outcome::FAILURE, ""),
        }
    }

    fn set_path(&self, plan: &[Pose]) -> bool {
        self.inner.lock().set_plan(plan)
    }

    fn is_goal_reached(&self) -> bool {
        self.inner.lock().is_goal_reached()
    }

    fn is_goal_reached_within(&self, _xy_tolerance: f32, _yaw_tolerance: f32) -> bool {
        // The legacy interface only has the no-tolerance check; the requested
        // tolerances are dropped.
        self.inner.lock().is_goal_reached()
    }

    fn cancel(&self) -> bool {
        // Legacy plugins have no cancellation hook.
        false
    }
}
