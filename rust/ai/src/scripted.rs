//! Agent that replays a fixed sequence of proposals.

use std::collections::VecDeque;

use roach_engine::agent::{Agent, AgentError, PlayerView, Proposal};

/// Answers each turn with the next queued proposal, ignoring the view.
/// Fails with [`AgentError::NoProposal`] once the queue is exhausted.
#[derive(Debug, Clone, Default)]
pub struct ScriptedAgent {
    script: VecDeque<Proposal>,
}

impl ScriptedAgent {
    pub fn new<I: IntoIterator<Item = Proposal>>(script: I) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    pub fn push(&mut self, proposal: Proposal) {
        self.script.push_back(proposal);
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Agent for ScriptedAgent {
    fn propose(&mut self, _view: &PlayerView) -> Result<Proposal, AgentError> {
        self.script
            .pop_front()
            .ok_or_else(|| AgentError::NoProposal("script exhausted".into()))
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
