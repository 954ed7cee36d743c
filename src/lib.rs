//! Tandem: agent contract and bimanual composite for robot learning pipelines.
//!
//! Defines the polymorphic [`Agent`](agent::Agent) behavior contract every
//! decision-making policy must satisfy, and
//! [`BimanualAgent`](agent::BimanualAgent), a composite adapter that drives
//! two independently-built single-limb agents as one two-limb controller by
//! partitioning observations, recombining actions and diagnostics, and
//! deriving per-limb weight paths.

pub mod agent;
pub mod error;
pub mod summary;

pub use agent::{ActResult, Agent, BimanualAgent, Device, Elements, MockAgent, Observation};
pub use error::AgentError;
pub use summary::Summary;
