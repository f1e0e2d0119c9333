//! SetuNav - behavior-plugin contracts for mobile-robot navigation
//!
//! Defines the three capability contracts navigation plugins implement
//! (global path planning, local trajectory control, recovery behavior) and
//! the bridge that lets plugins written against the older single-outcome,
//! non-cancelable interface serve transparently wherever the new contracts
//! are expected.
//!
//! ## Architecture
//!
//! - [`outcome`]: shared outcome-code taxonomy and per-kind result types
//! - [`contract`]: the three capability traits ([`Planner`], [`Controller`],
//!   [`Recovery`])
//! - [`legacy`]: the narrow legacy plugin traits
//! - [`adapter`]: per-kind bridges implementing a contract over a legacy
//!   plugin
//! - [`handle`]: the orchestrator-facing wrapper erasing the native/legacy
//!   distinction
//! - [`registry`] / [`config`]: declarative plugin lists and the ordered
//!   name → handle registry built from them
//!
//! The crate implements no navigation behavior itself; planners, controllers
//! and recovery motions are plugins supplied from outside, and the costmaps
//! and transform service arrive through the read-only [`NavContext`].
//!
//! ## Example
//!
//! ```ignore
//! use setu_nav::{NavPluginsConfig, PlannerHandle, PluginManager, BehaviorKind};
//!
//! let config = NavPluginsConfig::load(Path::new("plugins.toml"))?;
//! let mut planners = PluginManager::new(BehaviorKind::Planner);
//! planners.load_plugins(&config.planners, |entry| {
//!     // resolve entry.type_id via the host's plugin loader
//!     Ok(PlannerHandle::legacy(entry.name.clone(), load_nav_core(entry)?))
//! })?;
//! planners.initialize_all(&context)?;
//! let result = planners.get("global")?.make_plan(&start, &goal, 0.2)?;
//! ```

pub mod adapter;
pub mod config;
pub mod context;
pub mod contract;
pub mod error;
pub mod handle;
pub mod legacy;
pub mod outcome;
pub mod registry;
pub mod types;

pub use adapter::{LegacyControllerAdapter, LegacyPlannerAdapter, LegacyRecoveryAdapter};
pub use config::{NavPluginsConfig, PluginEntry};
pub use context::{CostmapView, NavContext, TransformLookup};
pub use contract::{Controller, Planner, Recovery};
pub use error::{Result, SetuError};
pub use handle::{BehaviorHandle, ControllerHandle, PlannerHandle, RecoveryHandle};
pub use legacy::{LegacyController, LegacyPlanner, LegacyRecovery};
pub use outcome::{Outcome, OutcomeClass, PlanResult, RecoveryResult, VelocityResult};
pub use registry::PluginManager;
pub use types::{BehaviorKind, Pose, Velocity};
