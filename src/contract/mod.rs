//! Capability contracts for navigation behavior plugins.
//!
//! Three traits, one per behavior kind:
//! - [`Planner`] - global path planning
//! - [`Controller`] - local trajectory control
//! - [`Recovery`] - recovery behaviors
//!
//! Native plugins implement these directly and may use the full outcome
//! range, including behavior-specific codes and cancellation. Plugins written
//! against the older single-outcome interface ([`crate::legacy`]) are brought
//! onto these contracts by the adapters in [`crate::adapter`].
//!
//! All methods take `&self`: the orchestrator is allowed to call `cancel()`
//! from a different thread while an execute method is in flight, so
//! implementations keep mutable state behind interior mutability (a mutex for
//! working state, atomics for the cancel flag). `cancel()` must never take a
//! lock the execute path holds across its blocking section.

mod controller;
mod planner;
mod recovery;

pub use controller::Controller;
pub use planner::Planner;
pub use recovery::Recovery;
