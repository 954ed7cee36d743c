//! The bimanual composite: drives two independently-built single-limb agents
//! as one two-limb controller.
//!
//! The composite implements the same [`Agent`] contract as its parts by
//! fanning calls out to a `right` and a `left` sub-agent and recombining
//! their results. All the routing lives here:
//!
//! - incoming observations are partitioned per key (shared sensory streams
//!   go to both limbs, `right_`/`left_`-prefixed keys go to one limb with
//!   the prefix stripped, everything else is shared),
//! - the combined action is the right action followed by the left action,
//! - `observation_elements`/`info` are merged right-first with the left
//!   value winning on key collision,
//! - weight paths are derived per limb by substituting `%ROBOT_NAME%`.
//!
//! Joint training and joint checkpointing are deliberately unsupported:
//! `update` and `save_weights` always return
//! [`AgentError::Unsupported`]. Operate on the sub-agents directly for
//! per-limb training and checkpointing.

use tracing::{debug, info};

use crate::agent::traits::{ActResult, Agent, Device, Elements, Observation};
use crate::error::AgentError;
use crate::summary::Summary;

/// Keys containing any of these substrings carry sensory data shared by both
/// limbs and are routed to both observations unmodified.
const SHARED_KEY_MARKERS: [&str; 3] = ["rgb", "point_cloud", "camera"];

/// Prefix marking right-limb-specific observation keys.
const RIGHT_PREFIX: &str = "right_";

/// Prefix marking left-limb-specific observation keys.
const LEFT_PREFIX: &str = "left_";

/// Placeholder in weight path templates, replaced per limb with `"right"`
/// or `"left"`.
const ROBOT_NAME_TOKEN: &str = "%ROBOT_NAME%";

// ---------------------------------------------------------------------------
// Observation partitioning
// ---------------------------------------------------------------------------

/// Partition a combined observation into per-limb observations.
///
/// Each key is routed by exactly one rule, evaluated in this order:
/// 1. contains a shared marker (`rgb`, `point_cloud`, `camera`) -- copied to
///    both sides under the unmodified key;
/// 2. starts with `right_` -- copied to the right side with the prefix
///    stripped;
/// 3. starts with `left_` -- copied to the left side with the prefix
///    stripped;
/// 4. anything else (step counters, task descriptors, ...) -- copied to
///    both sides under the unmodified key.
///
/// Keys that merely resemble a limb prefix (`r_`, `right` without the
/// underscore, `right_` mid-key) fall through to the shared branch; callers
/// own the naming convention.
pub fn partition_observation(observation: &Observation) -> (Observation, Observation) {
    let mut right = Observation::new();
    let mut left = Observation::new();

    for (key, value) in observation {
        if SHARED_KEY_MARKERS.iter().any(|marker| key.contains(marker)) {
            right.insert(key.clone(), value.clone());
            left.insert(key.clone(), value.clone());
        } else if let Some(stripped) = key.strip_prefix(RIGHT_PREFIX) {
            right.insert(stripped.to_string(), value.clone());
        } else if let Some(stripped) = key.strip_prefix(LEFT_PREFIX) {
            left.insert(stripped.to_string(), value.clone());
        } else {
            right.insert(key.clone(), value.clone());
            left.insert(key.clone(), value.clone());
        }
    }

    (right, left)
}

// ---------------------------------------------------------------------------
// BimanualAgent
// ---------------------------------------------------------------------------

/// An [`Agent`] that delegates to two owned sub-agents, one per limb.
///
/// The sub-agents are set once at construction and never reassigned. Every
/// delegating operation runs the right sub-agent to completion before the
/// left one; errors propagate unmodified with no rollback of the right
/// side's effects.
pub struct BimanualAgent {
    right: Box<dyn Agent>,
    left: Box<dyn Agent>,
}

impl BimanualAgent {
    /// Create a composite from a right and a left sub-agent.
    pub fn new(right: Box<dyn Agent>, left: Box<dyn Agent>) -> Self {
        Self { right, left }
    }

    /// The right sub-agent, for per-limb operations the composite refuses
    /// to perform (training, checkpointing).
    pub fn right_agent(&mut self) -> &mut dyn Agent {
        self.right.as_mut()
    }

    /// The left sub-agent, same purpose as [`right_agent`](Self::right_agent).
    pub fn left_agent(&mut self) -> &mut dyn Agent {
        self.left.as_mut()
    }
}

impl Agent for BimanualAgent {
    fn build(&mut self, training: bool, device: Option<Device>) -> Result<(), AgentError> {
        self.right.build(training, device)?;
        self.left.build(training, device)
    }

    /// Joint training is not supported; update each limb directly.
    fn update(&mut self, _step: usize, _replay_sample: &Elements) -> Result<Elements, AgentError> {
        Err(AgentError::Unsupported("update"))
    }

    fn act(
        &mut self,
        step: usize,
        observation: &Observation,
        deterministic: bool,
    ) -> Result<ActResult, AgentError> {
        let (right_observation, left_observation) = partition_observation(observation);

        debug!(
            step,
            keys = observation.len(),
            right_keys = right_observation.len(),
            left_keys = left_observation.len(),
            "partitioned bimanual observation"
        );

        let right_result = self.right.act(step, &right_observation, deterministic)?;
        let left_result = self.left.act(step, &left_observation, deterministic)?;

        let mut action = right_result.action;
        action.extend(left_result.action);

        // Right first, then left overlaid: on collision the left value wins.
        let mut observation_elements = right_result.observation_elements;
        observation_elements.extend(left_result.observation_elements);

        let mut info = right_result.info;
        info.extend(left_result.info);

        // replay_elements is deliberately left empty; combining replay data
        // is the caller's responsibility.
        Ok(ActResult::new(action)
            .with_observation_elements(observation_elements)
            .with_info(info))
    }

    fn reset(&mut self) {
        self.right.reset();
        self.left.reset();
    }

    fn update_summaries(&mut self) -> Vec<Summary> {
        let mut summaries = self.right.update_summaries();
        summaries.extend(self.left.update_summaries());
        summaries
    }

    fn act_summaries(&mut self) -> Vec<Summary> {
        let mut summaries = self.right.act_summaries();
        summaries.extend(self.left.act_summaries());
        summaries
    }

    fn load_weights(&mut self, savedir: &str) -> Result<(), AgentError> {
        let right_dir = savedir.replace(ROBOT_NAME_TOKEN, "right");
        let left_dir = savedir.replace(ROBOT_NAME_TOKEN, "left");

        info!(right = %right_dir, left = %left_dir, "loading per-limb weights");

        self.right.load_weights(&right_dir)?;
        self.left.load_weights(&left_dir)
    }

    /// Joint checkpointing is not supported; save each limb directly.
    fn save_weights(&mut self, _savedir: &str) -> Result<(), AgentError> {
        Err(AgentError::Unsupported("save_weights"))
    }
}
