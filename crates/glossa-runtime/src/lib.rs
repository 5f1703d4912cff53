//! # glossa-runtime
//!
//! The resolution and loading engine: a synchronous [`Resolver`] over three
//! tiers (override table, active catalog, default catalog), an async
//! [`Loader`] that never fails, and the [`SwitchController`] that changes
//! language transactionally.
//!
//! The [`Resolver`] is the only reader of the resolution state and the
//! [`SwitchController`] its only writer. A resolver can be installed as the
//! process-wide [`translate`] target before the first catalog finishes
//! loading; until then it answers from the override and default tiers.

mod global;
mod languages;
mod loader;
mod resolver;
mod state;
mod switch;


pub use global::{install, installed, translate};
pub use languages::{language_choices, merge_language_choices};
pub use loader::Loader;
pub use resolver::Resolver;
pub use switch::{Phase, SwitchController, SwitchOutcome};
