//! Session orchestration for the corridor game.
//!
//! This crate wires the pure rules in `corridor-core` together with the
//! built-in content registries and exposes the API a frontend drives:
//! [`GameSession`] consumes [`Intent`] values, resolves turns through the
//! core engine, and fans resulting events out on a topic-routed [`EventBus`].
//!
//! Modules by responsibility:
//! - [`session`] hosts the intent router and flow state machine
//! - [`levelgen`] generates dungeon levels
//! - [`events`] provides the broadcast event bus
//! - [`oracle`] bundles content registries behind the core oracle traits
pub mod error;
pub mod events;
pub mod levelgen;
pub mod oracle;
pub mod session;

pub use error::{Result, RuntimeError};
pub use events::{EventBus, Topic};
pub use levelgen::{GeneratedLevel, generate_level};
pub use oracle::OracleBundle;
pub use session::{GameSession, Intent, SessionFlow, StepReport};
