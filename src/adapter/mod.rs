//! Bridges from legacy plugins onto the capability contracts.
//!
//! One adapter per behavior kind. Each adapter owns exactly one legacy plugin
//! for its entire lifetime and implements the matching contract on top of it:
//!
//! - `initialize` forwards unchanged; both contracts agree on its shape.
//! - Execute translates the legacy boolean: success becomes outcome `0` with
//!   the legacy outputs copied over, failure becomes the generic `100` with
//!   empty outputs. Both paths carry an empty message. The adapter never
//!   produces any other code; the legacy interface carries no finer
//!   classification and inventing one would overclaim precision.
//! - `cancel` always returns `false` (not supported) and takes no other
//!   action; there is no side channel for interrupting a legacy call.
//! - New-contract operations with no legacy equivalent fall back to the
//!   closest legacy method, ignoring the extra parameters.
//!
//! The legacy plugin's `&mut` methods run behind a mutex; `cancel` never
//! touches it, so a concurrent cancel call cannot block on an in-flight
//! execute.

mod controller;
mod planner;
mod recovery;

pub use controller::LegacyControllerAdapter;
pub use planner::LegacyPlannerAdapter;
pub use recovery::LegacyRecoveryAdapter;
