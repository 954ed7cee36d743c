//! Agent abstractions and the bimanual composite.
//!
//! Every policy implements the [`Agent`] trait so that a training harness
//! can drive it uniformly:
//!
//! - **traits** ([`traits`]) -- the [`Agent`] contract and the data types
//!   that cross it ([`ActResult`], [`Observation`], [`Device`]).
//! - **bimanual** ([`bimanual`]) -- [`BimanualAgent`], which presents two
//!   single-limb agents as one two-limb controller.
//! - **mock** ([`mock`]) -- [`MockAgent`], a canned-result agent for
//!   exercising harness and composite plumbing without a real policy.

pub mod bimanual;
pub mod mock;
pub mod traits;

// Re-export the contract and its data types at the module level.
pub use bimanual::{partition_observation, BimanualAgent};
pub use mock::MockAgent;
pub use traits::{ActResult, Agent, Device, Elements, Observation};
