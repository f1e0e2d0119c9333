//! Planner adapter over a legacy planner plugin

use parking_lot::Mutex;

use crate::context::NavContext;
use crate::contract::Planner;
use crate::error::Result;
use crate::legacy::LegacyPlanner;
use crate::outcome::{Outcome, PlanResult};
use crate::types::Pose;

/// Implements [`Planner`] on top of a [`LegacyPlanner`].
///
/// Owns the legacy plugin exclusively. A backing plugin is required at
/// construction; there is no deferred-failure path.
pub struct LegacyPlannerAdapter {
    inner: Mutex<Box<dyn LegacyPlanner>>,
}

impl LegacyPlannerAdapter {
    /// Wrap a legacy planner plugin
    pub fn new(plugin: Box<dyn LegacyPlanner>) -> Self {
        Self {
            inner: Mutex::new(plugin),
        }
    }
}

impl Planner for LegacyPlannerAdapter {
    fn initialize(&self, name: &str, context: &NavContext) -> Result<()> {
        self.inner.lock().initialize(name, context);
        Ok(())
    }

    fn make_plan(&self, start: &Pose, goal: &Pose, _tolerance: f32) -> PlanResult {
        // The legacy interface has no tolerance parameter; it is dropped here.
        match self.inner.lock().make_plan(start, goal) {
            Some((plan, cost)) => PlanResult::success(plan, cost),
            None => PlanResult::failure(Outcome::FAILURE, ""),
        }
    }

    fn cancel(&self) -> bool {
        // Legacy plugins have no cancellation hook.
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::testing::test_context;

    use std::sync::Arc;

    /// Legacy planner scripted to return a fixed outcome
    struct ScriptedPlanner {
        result: Option<(Vec<Pose>, f32)>,
        initialized_as: Arc<Mutex<Option<String>>>,
    }

    impl ScriptedPlanner {
        fn succeeding(plan: Vec<Pose>, cost: f32) -> Self {
            Self {
                result: Some((plan, cost)),
                initialized_as: Arc::new(Mutex::new(None)),
            }
        }

        fn failing() -> Self {
            Self {
                result: None,
                initialized_as: Arc::new(Mutex::new(None)),
            }
        }
    }

    impl LegacyPlanner for ScriptedPlanner {
        fn initialize(&mut self, name: &str, _context: &NavContext) {
            *self.initialized_as.lock() = Some(name.to_string());
        }

        fn make_plan(&mut self, _start: &Pose, _goal: &Pose) -> Option<(Vec<Pose>, f32)> {
            self.result.clone()
        }
    }

    fn start_goal() -> (Pose, Pose) {
        (
            Pose::new("map", 0.0, 0.0, 0.0),
            Pose::new("map", 2.0, 1.0, 0.0),
        )
    }

    #[test]
    fn test_success_maps_to_outcome_zero() {
        let plan = vec![
            Pose::new("map", 0.0, 0.0, 0.0),
            Pose::new("map", 1.0, 0.5, 0.0),
            Pose::new("map", 2.0, 1.0, 0.0),
        ];
        let adapter =
            LegacyPlannerAdapter::new(Box::new(ScriptedPlanner::succeeding(plan.clone(), 4.2)));

        let (start, goal) = start_goal();
        let result = adapter.make_plan(&start, &goal, 0.1);

        assert_eq!(result.outcome, Outcome::SUCCESS);
        assert_eq!(result.message, "");
        assert_eq!(result.plan, plan);
        assert_eq!(result.cost, 4.2);
    }

    #[test]
    fn test_failure_maps_to_generic_100() {
        let adapter = LegacyPlannerAdapter::new(Box::new(ScriptedPlanner::failing()));

        let (start, goal) = start_goal();
        let result = adapter.make_plan(&start, &goal, 0.1);

        assert_eq!(result.outcome, Outcome::FAILURE);
        assert_eq!(result.message, "");
        assert!(result.plan.is_empty());
        assert_eq!(result.cost, 0.0);
    }

    #[test]
    fn test_cancel_not_supported() {
        let adapter = LegacyPlannerAdapter::new(Box::new(ScriptedPlanner::failing()));
        assert!(!adapter.cancel());
        // Still answers false after initialization and execution.
        adapter
            .initialize("legacy_planner", &test_context())
            .unwrap();
        let (start, goal) = start_goal();
        adapter.make_plan(&start, &goal, 0.1);
        assert!(!adapter.cancel());
    }

    #[test]
    fn test_initialize_forwards_name() {
        let plugin = ScriptedPlanner::failing();
        let seen = plugin.initialized_as.clone();
        let adapter = LegacyPlannerAdapter::new(Box::new(plugin));

        adapter.initialize("navfn", &test_context()).unwrap();
        assert_eq!(seen.lock().as_deref(), Some("navfn"));
    }
}
