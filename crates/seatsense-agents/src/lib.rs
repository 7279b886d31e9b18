//! Actor behavior and population management for the Seatsense simulation.
//!
//! # Modules
//!
//! - [`actor`] -- the per-actor behavior state machine
//! - [`pool`] -- [`ActorPool`]: randomized spawning, seat reservations,
//!   retirement
//! - [`profile`] -- per-actor parameters sampled at spawn
//! - [`path`] -- waypoint route builders
//! - [`config`] -- [`BehaviorConfig`]
//!
//! [`ActorPool`]: pool::ActorPool
//! [`BehaviorConfig`]: config::BehaviorConfig

pub mod actor;
pub mod config;
pub mod path;
pub mod pool;
pub mod profile;

pub use actor::{Actor, Belongings, ItemSpot};
pub use config::BehaviorConfig;
pub use pool::{ActorPool, PoolTickReport};
pub use profile::ActorProfile;
