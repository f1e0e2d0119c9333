//! Geometric and classification types shared by all behavior kinds.

use std::fmt;

/// 2D pose (position and orientation) in a named reference frame
#[derive(Debug, Clone, PartialEq)]
pub struct Pose {
    /// Reference frame the pose is expressed in (e.g. "map", "odom")
    pub frame_id: String,
    /// X position in meters
    pub x: f32,
    /// Y position in meters
    pub y: f32,
    /// Heading angle in radians
    pub theta: f32,
}

impl Pose {
    /// Create a new pose
    pub fn new(frame_id: impl Into<String>, x: f32, y: f32, theta: f32) -> Self {
        Self {
            frame_id: frame_id.into(),
            x,
            y,
            theta,
        }
    }

    /// Euclidean distance to another pose, ignoring orientation
    pub fn distance_to(&self, other: &Pose) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Robot velocity command (linear and angular)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Velocity {
    /// Linear velocity in m/s
    pub linear: f32,
    /// Angular velocity in rad/s
    pub angular: f32,
}

impl Velocity {
    /// Create new velocity
    pub fn new(linear: f32, angular: f32) -> Self {
        Self { linear, angular }
    }

    /// Zero velocity
    pub fn zero() -> Self {
        Self {
            linear: 0.0,
            angular: 0.0,
        }
    }
}

/// Category of navigation behavior plugin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BehaviorKind {
    /// Global path planner
    Planner,
    /// Local trajectory controller
    Controller,
    /// Recovery behavior
    Recovery,
}

impl fmt::Display for BehaviorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BehaviorKind::Planner => write!(f, "planner"),
            BehaviorKind::Controller => write!(f, "controller"),
            BehaviorKind::Recovery => write!(f, "recovery"),
        }
    }
}
