//! Plugin handles: the orchestrator-facing wrapper around a behavior plugin.
//!
//! A handle owns exactly one backing implementation, bound once at
//! construction and never rebound: either a native contract implementation or
//! a legacy plugin bridged through the matching adapter. Through the handle
//! the two are indistinguishable; callers only see the capability contract,
//! with outcome-code granularity as the sole observable difference.
//!
//! The handle forwards every operation verbatim. The one piece of logic it
//! carries is the lifecycle guard: `initialize` must be called exactly once
//! before any execute or query operation, and violations surface as
//! [`SetuError`] values on the spot instead of reaching the plugin. `cancel`
//! is exempt; it is callable at any time.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

use crate::adapter::{LegacyControllerAdapter, LegacyPlannerAdapter, LegacyRecoveryAdapter};
use crate::context::NavContext;
use crate::contract::{Controller, Planner, Recovery};
use crate::error::{Result, SetuError};
use crate::legacy::{LegacyController, LegacyPlanner, LegacyRecovery};
use crate::outcome::{PlanResult, RecoveryResult, VelocityResult};
use crate::types::{BehaviorKind, Pose};

/// Common surface the plugin manager needs from every handle kind
pub trait BehaviorHandle: Send + Sync {
    /// Plugin name, unique within its behavior kind's namespace
    fn name(&self) -> &str;

    /// Behavior kind of the backing plugin
    fn kind(&self) -> BehaviorKind;

    /// Initialize the backing plugin; must be called exactly once
    fn initialize(&self, context: &NavContext) -> Result<()>;

    /// Whether `initialize` has completed successfully
    fn is_initialized(&self) -> bool;
}

fn mark_initialized(flag: &AtomicBool, name: &str) -> Result<()> {
    if flag
        .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
        .is_err()
    {
        return Err(SetuError::AlreadyInitialized(name.to_string()));
    }
    Ok(())
}

fn check_initialized(flag: &AtomicBool, name: &str) -> Result<()> {
    if !flag.load(Ordering::Acquire) {
        return Err(SetuError::NotInitialized(name.to_string()));
    }
    Ok(())
}

/// Handle over a global planner plugin
pub struct PlannerHandle {
    name: String,
    initialized: AtomicBool,
    backing: Box<dyn Planner>,
}

impl PlannerHandle {
    /// Handle over a native contract implementation
    pub fn native(name: impl Into<String>, plugin: Box<dyn Planner>) -> Self {
        Self {
            name: name.into(),
            initialized: AtomicBool::new(false),
            backing: plugin,
        }
    }

    /// Handle over a legacy plugin, bridged through [`LegacyPlannerAdapter`]
    pub fn legacy(name: impl Into<String>, plugin: Box<dyn LegacyPlanner>) -> Self {
        Self::native(name, Box::new(LegacyPlannerAdapter::new(plugin)))
    }

    /// Compute a plan from `start` to `goal`.
    ///
    /// `Err` only on usage errors (not initialized); behavioral outcomes ride
    /// inside the result.
    pub fn make_plan(&self, start: &Pose, goal: &Pose, tolerance: f32) -> Result<PlanResult> {
        check_initialized(&self.initialized, &self.name)?;
        Ok(self.backing.make_plan(start, goal, tolerance))
    }

    /// Forward a cancel request; callable at any time
    pub fn cancel(&self) -> bool {
        self.backing.cancel()
    }
}

impl BehaviorHandle for PlannerHandle {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> BehaviorKind {
        BehaviorKind::Planner
    }

    fn initialize(&self, context: &NavContext) -> Result<()> {
        mark_initialized(&self.initialized, &self.name)?;
        debug!(plugin = %self.name, "initializing planner plugin");
        if let Err(e) = self.backing.initialize(&self.name, context) {
            self.initialized.store(false, Ordering::Release);
            return Err(e);
        }
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }
}

/// Handle over a local trajectory controller plugin
pub struct ControllerHandle {
    name: String,
    initialized: AtomicBool,
    backing: Box<dyn Controller>,
}

impl ControllerHandle {
    /// Handle over a native contract implementation
    pub fn native(name: impl Into<String>, plugin: Box<dyn Controller>) -> Self {
        Self {
            name: name.into(),
            initialized: AtomicBool::new(false),
            backing: plugin,
        }
    }

    /// Handle over a legacy plugin, bridged through [`LegacyControllerAdapter`]
    pub fn legacy(name: impl Into<String>, plugin: Box<dyn LegacyController>) -> Self {
        Self::native(name, Box::new(LegacyControllerAdapter::new(plugin)))
    }

    /// Compute the next velocity command for the installed path.
    ///
    /// `Err` only on usage errors (not initialized); behavioral outcomes ride
    /// inside the result.
    pub fn compute_velocity(&self) -> Result<VelocityResult> {
        check_initialized(&self.initialized, &self.name)?;
        Ok(self.backing.compute_velocity())
    }

    /// Replace the path the controller is following
    pub fn set_path(&self, plan: &[Pose]) -> Result<bool> {
        check_initialized(&self.initialized, &self.name)?;
        Ok(self.backing.set_path(plan))
    }

    /// Whether the goal pose has been reached
    pub fn is_goal_reached(&self) -> Result<bool> {
        check_initialized(&self.initialized, &self.name)?;
        Ok(self.backing.is_goal_reached())
    }

    /// Whether the goal pose has been reached within explicit tolerances
    pub fn is_goal_reached_within(&self, xy_tolerance: f32, yaw_tolerance: f32) -> Result<bool> {
        check_initialized(&self.initialized, &self.name)?;
        Ok(self
            .backing
            .is_goal_reached_within(xy_tolerance, yaw_tolerance))
    }

    /// Forward a cancel request; callable at any time
    pub fn cancel(&self) -> bool {
        self.backing.cancel()
    }
}

impl BehaviorHandle for ControllerHandle {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> BehaviorKind {
        BehaviorKind::Controller
    }

    fn initialize(&self, context: &NavContext) -> Result<()> {
        mark_initialized(&self.initialized, &self.name)?;
        debug!(plugin = %self.name, "initializing controller plugin");
        if let Err(e) = self.backing.initialize(&self.name, context) {
            self.initialized.store(false, Ordering::Release);
            return Err(e);
        }
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }
}

/// Handle over a recovery behavior plugin
pub struct RecoveryHandle {
    name: String,
    initialized: AtomicBool,
    backing: Box<dyn Recovery>,
}

impl RecoveryHandle {
    /// Handle over a native contract implementation
    pub fn native(name: impl Into<String>, plugin: Box<dyn Recovery>) -> Self {
        Self {
            name: name.into(),
            initialized: AtomicBool::new(false),
            backing: plugin,
        }
    }

    /// Handle over a legacy plugin, bridged through [`LegacyRecoveryAdapter`]
    pub fn legacy(name: impl Into<String>, plugin: Box<dyn LegacyRecovery>) -> Self {
        Self::native(name, Box::new(LegacyRecoveryAdapter::new(plugin)))
    }

    /// Run the recovery motion.
    ///
    /// `Err` only on usage errors (not initialized); behavioral outcomes ride
    /// inside the result.
    pub fn run_behavior(&self) -> Result<RecoveryResult> {
        check_initialized(&self.initialized, &self.name)?;
        Ok(self.backing.run_behavior())
    }

    /// Forward a cancel request; callable at any time
    pub fn cancel(&self) -> bool {
        self.backing.cancel()
    }
}

impl BehaviorHandle for RecoveryHandle {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> BehaviorKind {
        BehaviorKind::Recovery
    }

    fn initialize(&self, context: &NavContext) -> Result<()> {
        mark_initialized(&self.initialized, &self.name)?;
        debug!(plugin = %self.name, "initializing recovery plugin");
        if let Err(e) = self.backing.initialize(&self.name, context) {
            self.initialized.store(false, Ordering::Release);
            return Err(e);
        }
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::testing::test_context;
    use crate::outcome::Outcome;
    use crate::types::Velocity;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Arc;

    /// Native planner that counts calls and reports a fixed soft failure
    struct CountingPlanner {
        plans: Arc<AtomicUsize>,
    }

    impl Planner for CountingPlanner {
        fn initialize(&self, _name: &str, _context: &NavContext) -> Result<()> {
            Ok(())
        }

        fn make_plan(&self, _start: &Pose, _goal: &Pose, _tolerance: f32) -> PlanResult {
            self.plans.fetch_add(1, Ordering::SeqCst);
            // Native plugins may use behavior-specific codes.
            PlanResult::failure(Outcome(52), "no path around obstacle")
        }

        fn cancel(&self) -> bool {
            true
        }
    }

    /// Legacy controller that always succeeds with a fixed command
    struct FixedLegacyController;

    impl LegacyController for FixedLegacyController {
        fn initialize(&mut self, _name: &str, _context: &NavContext) {}

        fn compute_velocity(&mut self) -> Option<Velocity> {
            Some(Velocity::new(0.1, 0.0))
        }

        fn set_plan(&mut self, plan: &[Pose]) -> bool {
            !plan.is_empty()
        }

        fn is_goal_reached(&mut self) -> bool {
            false
        }
    }

    fn counting_handle() -> (PlannerHandle, Arc<AtomicUsize>) {
        let plans = Arc::new(AtomicUsize::new(0));
        let handle = PlannerHandle::native(
            "counting",
            Box::new(CountingPlanner {
                plans: plans.clone(),
            }),
        );
        (handle, plans)
    }

    fn start_goal() -> (Pose, Pose) {
        (
            Pose::new("map", 0.0, 0.0, 0.0),
            Pose::new("map", 1.0, 1.0, 0.0),
        )
    }

    #[test]
    fn test_execute_before_initialize_fails_fast() {
        let (handle, plans) = counting_handle();
        let (start, goal) = start_goal();

        let err = handle.make_plan(&start, &goal, 0.1).unwrap_err();
        assert!(matches!(err, SetuError::NotInitialized(_)));
        // The backing plugin was never reached.
        assert_eq!(plans.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_double_initialize_fails_fast() {
        let (handle, _) = counting_handle();
        let ctx = test_context();

        handle.initialize(&ctx).unwrap();
        let err = handle.initialize(&ctx).unwrap_err();
        assert!(matches!(err, SetuError::AlreadyInitialized(_)));
        // The handle stays initialized and usable.
        assert!(handle.is_initialized());
    }

    #[test]
    fn test_execute_after_initialize_forwards() {
        let (handle, plans) = counting_handle();
        let (start, goal) = start_goal();

        handle.initialize(&test_context()).unwrap();
        let result = handle.make_plan(&start, &goal, 0.1).unwrap();
        assert_eq!(result.outcome, Outcome(52));
        assert_eq!(plans.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_cancel_usable_before_initialize() {
        let (handle, _) = counting_handle();
        // Native backing reports cancel support regardless of lifecycle state.
        assert!(handle.cancel());
    }

    #[test]
    fn test_legacy_controller_handle_cancel_always_false() {
        let handle = ControllerHandle::legacy("legacy_dwa", Box::new(FixedLegacyController));
        assert!(!handle.cancel());
        handle.initialize(&test_context()).unwrap();
        assert!(!handle.cancel());
        handle.compute_velocity().unwrap();
        assert!(!handle.cancel());
    }

    #[test]
    fn test_controller_queries_require_initialize() {
        let handle = ControllerHandle::legacy("legacy_dwa", Box::new(FixedLegacyController));
        assert!(matches!(
            handle.is_goal_reached(),
            Err(SetuError::NotInitialized(_))
        ));
        assert!(matches!(
            handle.set_path(&[]),
            Err(SetuError::NotInitialized(_))
        ));

        handle.initialize(&test_context()).unwrap();
        assert!(!handle.is_goal_reached().unwrap());
        assert!(!handle.is_goal_reached_within(0.1, 0.1).unwrap());
    }

    #[test]
    fn test_handle_kinds() {
        let (planner, _) = counting_handle();
        let controller = ControllerHandle::legacy("c", Box::new(FixedLegacyController));
        assert_eq!(planner.kind(), BehaviorKind::Planner);
        assert_eq!(controller.kind(), BehaviorKind::Controller);
        assert_eq!(planner.name(), "counting");
    }
}
