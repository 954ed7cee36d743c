//! A mock agent that replays canned results, making it possible to exercise
//! harness and composite plumbing without a real policy behind it.
//!
//! Every call is recorded into a [`Recorded`] handle that stays valid after
//! the agent is boxed behind `dyn Agent`, and an optional shared journal
//! captures call ordering across several agents.

use std::cell::RefCell;
use std::rc::Rc;

use crate::agent::traits::{ActResult, Agent, Device, Elements, Observation};
use crate::error::AgentError;
use crate::summary::Summary;

/// Everything a [`MockAgent`] has been asked to do, in call order per kind.
#[derive(Debug, Default)]
pub struct Recorded {
    /// Arguments of every `build` call.
    pub builds: Vec<(bool, Option<Device>)>,
    /// The observation passed to each `act` call.
    pub acts: Vec<Observation>,
    /// Number of `reset` calls.
    pub resets: usize,
    /// Paths passed to `load_weights`.
    pub loaded_paths: Vec<String>,
    /// Paths passed to `save_weights`.
    pub saved_paths: Vec<String>,
    /// Steps passed to `update`.
    pub update_steps: Vec<usize>,
}

/// A shared, ordered journal of `"<agent>.<operation>"` entries for
/// asserting call ordering across multiple agents.
pub type Journal = Rc<RefCell<Vec<String>>>;

/// An [`Agent`] that replays a canned [`ActResult`] and records every call.
pub struct MockAgent {
    name: String,
    result: ActResult,
    update_result: Elements,
    update_summaries: Vec<Summary>,
    act_summaries: Vec<Summary>,
    fail_act: bool,
    record: Rc<RefCell<Recorded>>,
    journal: Option<Journal>,
}

impl MockAgent {
    /// Create a mock that answers every `act` with the given action and
    /// empty auxiliary mappings.
    pub fn new(name: impl Into<String>, action: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            result: ActResult::new(action),
            update_result: Elements::new(),
            update_summaries: Vec::new(),
            act_summaries: Vec::new(),
            fail_act: false,
            record: Rc::new(RefCell::new(Recorded::default())),
            journal: None,
        }
    }

    /// Replace the canned [`ActResult`] wholesale.
    pub fn with_result(mut self, result: ActResult) -> Self {
        self.result = result;
        self
    }

    /// Set the canned summaries returned by the two reporting operations.
    pub fn with_summaries(mut self, update: Vec<Summary>, act: Vec<Summary>) -> Self {
        self.update_summaries = update;
        self.act_summaries = act;
        self
    }

    /// Make every `act` call fail, for error-propagation tests.
    pub fn failing_act(mut self) -> Self {
        self.fail_act = true;
        self
    }

    /// Attach a shared journal that receives `"<name>.<op>"` entries.
    pub fn with_journal(mut self, journal: Journal) -> Self {
        self.journal = Some(journal);
        self
    }

    /// A handle to the call record that outlives boxing this agent.
    pub fn record(&self) -> Rc<RefCell<Recorded>> {
        Rc::clone(&self.record)
    }

    fn journal_push(&self, op: &str) {
        if let Some(journal) = &self.journal {
            journal.borrow_mut().push(format!("{}.{op}", self.name));
        }
    }
}

impl Agent for MockAgent {
    fn build(&mut self, training: bool, device: Option<Device>) -> Result<(), AgentError> {
        self.journal_push("build");
        self.record.borrow_mut().builds.push((training, device));
        Ok(())
    }

    fn update(&mut self, step: usize, _replay_sample: &Elements) -> Result<Elements, AgentError> {
        self.journal_push("update");
        self.record.borrow_mut().update_steps.push(step);
        Ok(self.update_result.clone())
    }

    fn act(
        &mut self,
        _step: usize,
        observation: &Observation,
        _deterministic: bool,
    ) -> Result<ActResult, AgentError> {
        self.journal_push("act");
        self.record.borrow_mut().acts.push(observation.clone());
        if self.fail_act {
            return Err(AgentError::Other(anyhow::anyhow!(
                "{} refused to act",
                self.name
            )));
        }
        Ok(self.result.clone())
    }

    fn reset(&mut self) {
        self.journal_push("reset");
        self.record.borrow_mut().resets += 1;
    }

    fn update_summaries(&mut self) -> Vec<Summary> {
        self.journal_push("update_summaries");
        self.update_summaries.clone()
    }

    fn act_summaries(&mut self) -> Vec<Summary> {
        self.journal_push("act_summaries");
        self.act_summaries.clone()
    }

    fn load_weights(&mut self, savedir: &str) -> Result<(), AgentError> {
        self.journal_push("load_weights");
        self.record.borrow_mut().loaded_paths.push(savedir.into());
        Ok(())
    }

    fn save_weights(&mut self, savedir: &str) -> Result<(), AgentError> {
        self.journal_push("save_weights");
        self.record.borrow_mut().saved_paths.push(savedir.into());
        Ok(())
    }
}
