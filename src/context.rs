//! Navigation context handed to plugins at initialize time.
//!
//! The orchestrator owns the transform service and the costmaps; plugins only
//! receive read-only query handles to them, valid for as long as the plugin
//! handle is alive.

use crate::types::Pose;
use std::sync::Arc;

/// Read-only coordinate-transform lookup
pub trait TransformLookup: Send + Sync {
    /// Express `pose` in `target_frame`
    ///
    /// Returns `None` if no transform between the frames is known.
    fn transform(&self, pose: &Pose, target_frame: &str) -> Option<Pose>;
}

/// Read-only view of a costmap snapshot
pub trait CostmapView: Send + Sync {
    /// Cell cost at a world position, or `None` outside the map
    fn cost_at(&self, x: f32, y: f32) -> Option<u8>;

    /// Cell edge length in meters
    fn resolution(&self) -> f32;
}

/// Shared navigation context passed to every plugin's `initialize`.
///
/// Cheap to clone; all parts are externally owned and must be treated as
/// read-only by plugins.
#[derive(Clone)]
pub struct NavContext {
    pub transforms: Arc<dyn TransformLookup>,
    pub global_costmap: Arc<dyn CostmapView>,
    pub local_costmap: Arc<dyn CostmapView>,
}

impl NavContext {
    pub fn new(
        transforms: Arc<dyn TransformLookup>,
        global_costmap: Arc<dyn CostmapView>,
        local_costmap: Arc<dyn CostmapView>,
    ) -> Self {
        Self {
            transforms,
            global_costmap,
            local_costmap,
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Minimal context stubs for unit tests.

    use super::*;

    /// Transform lookup that returns every pose unchanged
    pub struct IdentityTransforms;

    impl TransformLookup for IdentityTransforms {
        fn transform(&self, pose: &Pose, _target_frame: &str) -> Option<Pose> {
            Some(pose.clone())
        }
    }

    /// Obstacle-free costmap
    pub struct FlatCostmap;

    impl CostmapView for FlatCostmap {
        fn cost_at(&self, _x: f32, _y: f32) -> Option<u8> {
            Some(0)
        }

        fn resolution(&self) -> f32 {
            0.05
        }
    }

    pub fn test_context() -> NavContext {
        NavContext::new(
            Arc::new(IdentityTransforms),
            Arc::new(FlatCostmap),
            Arc::new(FlatCostmap),
        )
    }
}
