//! Core agent trait and the data types that cross its boundary.
//!
//! Every decision-making policy (a single-limb policy, the bimanual
//! composite, ...) implements the [`Agent`] trait so that a training harness
//! can drive it uniformly. The trait only fixes the shape of the data
//! crossing the boundary; what `build` allocates or `update` optimises is
//! owned by the concrete implementation.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::AgentError;
use crate::summary::Summary;

/// A string-keyed mapping of opaque values, as produced by the environment
/// and consumed by [`Agent::act`].
pub type Observation = HashMap<String, serde_json::Value>;

/// A string-keyed mapping of opaque named values (replay samples, update
/// results, diagnostic info, ...).
pub type Elements = HashMap<String, serde_json::Value>;

// ---------------------------------------------------------------------------
// Device
// ---------------------------------------------------------------------------

/// The compute device an agent should allocate its resources on.
///
/// Only the shape is defined here; backend selection and placement are owned
/// by the concrete agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Device {
    /// Host CPU.
    #[default]
    Cpu,
    /// CUDA device with the given ordinal.
    Cuda(u32),
}

// ---------------------------------------------------------------------------
// ActResult
// ---------------------------------------------------------------------------

/// The result of one decision step.
///
/// All three auxiliary mappings are always present (empty rather than
/// absent), so callers never branch on presence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActResult {
    /// The ordered action sequence (e.g. joint targets plus gripper state).
    /// A policy with a scalar action emits a length-1 vector.
    pub action: Vec<f64>,
    /// Values derived from the observation that should also be recorded for
    /// later replay.
    pub observation_elements: Elements,
    /// Data destined for training storage; opaque to this core.
    pub replay_elements: Elements,
    /// Diagnostic payload for the caller.
    pub info: Elements,
}

impl ActResult {
    /// Create a result for the given action with all auxiliary mappings
    /// empty.
    pub fn new(action: Vec<f64>) -> Self {
        Self {
            action,
            observation_elements: Elements::new(),
            replay_elements: Elements::new(),
            info: Elements::new(),
        }
    }

    /// Attach observation elements.
    pub fn with_observation_elements(mut self, elements: Elements) -> Self {
        self.observation_elements = elements;
        self
    }

    /// Attach replay elements.
    pub fn with_replay_elements(mut self, elements: Elements) -> Self {
        self.replay_elements = elements;
        self
    }

    /// Attach diagnostic info.
    pub fn with_info(mut self, info: Elements) -> Self {
        self.info = info;
        self
    }
}

// ---------------------------------------------------------------------------
// Agent
// ---------------------------------------------------------------------------

/// The capability contract every decision-making policy must satisfy.
///
/// All operations are plain blocking calls. Every operation except `reset`
/// must be implemented by a conforming variant; a type that omits one simply
/// does not compile as an `Agent`.
pub trait Agent {
    /// One-time initialisation; must be called before any other operation.
    /// What gets allocated (model parameters, optimiser state, ...) is
    /// implementation-defined.
    fn build(&mut self, training: bool, device: Option<Device>) -> Result<(), AgentError>;

    /// Consume one batch of training data for step `step` and return a
    /// mapping of named results (e.g. losses). No shape contract beyond
    /// "mapping of named results".
    fn update(&mut self, step: usize, replay_sample: &Elements) -> Result<Elements, AgentError>;

    /// The core decision operation: produce an [`ActResult`] for the given
    /// observation. `observation_elements` in the result is for values
    /// derived from the observation that should be recorded for replay.
    fn act(
        &mut self,
        step: usize,
        observation: &Observation,
        deterministic: bool,
    ) -> Result<ActResult, AgentError>;

    /// Clear any per-episode internal state. Defaults to a no-op.
    fn reset(&mut self) {}

    /// Diagnostics to report after an `update` call. Each batch is produced
    /// fresh and consumed once by the caller.
    fn update_summaries(&mut self) -> Vec<Summary>;

    /// Diagnostics to report after an `act` call. Same production contract
    /// as [`update_summaries`](Agent::update_summaries).
    fn act_summaries(&mut self) -> Vec<Summary>;

    /// Restore internal parameters from a caller-supplied location; the
    /// on-disk format is implementation-defined.
    fn load_weights(&mut self, savedir: &str) -> Result<(), AgentError>;

    /// Persist internal parameters to a caller-supplied location; the
    /// on-disk format is implementation-defined.
    fn save_weights(&mut self, savedir: &str) -> Result<(), AgentError>;
}
