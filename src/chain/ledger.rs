//! Step ledger and timing aggregation

use super::reply::StepReply;
use std::time::Duration;

/// Title of the terminal step
pub const FINAL_ANSWER_TITLE: &str = "Final Answer";

/// One completed step of a reasoning chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    title: String,
    content: String,
    thinking_time: Duration,
}

impl StepRecord {
    pub fn new(title: impl Into<String>, content: impl Into<String>, thinking_time: Duration) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            thinking_time,
        }
    }

    /// Intermediate step, numbered from 1
    pub fn step(number: u32, reply: &StepReply, thinking_time: Duration) -> Self {
        Self::new(
            format!("Step {number}: {}", reply.title),
            reply.content.clone(),
            thinking_time,
        )
    }

    pub fn final_answer(content: impl Into<String>, thinking_time: Duration) -> Self {
        Self::new(FINAL_ANSWER_TITLE, content, thinking_time)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn thinking_time(&self) -> Duration {
        self.thinking_time
    }

    pub fn thinking_time_secs(&self) -> f64 {
        self.thinking_time.as_secs_f64()
    }

    pub fn is_final_answer(&self) -> bool {
        self.title == FINAL_ANSWER_TITLE
    }
}

/// Ordered steps of a finished session with their summed thinking time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainOutcome {
    pub steps: Vec<StepRecord>,
    pub total_thinking_time: Duration,
}

impl ChainOutcome {
    pub fn total_thinking_time_secs(&self) -> f64 {
        self.total_thinking_time.as_secs_f64()
    }
}

/// Insertion-ordered accumulation of steps
#[derive(Debug, Clone, Default)]
pub struct StepLedger {
    steps: Vec<StepRecord>,
    total: Duration,
}

impl StepLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, step: StepRecord) {
        self.total += step.thinking_time();
        self.steps.push(step);
    }

    /// Sum of every appended step's thinking time
    pub fn total(&self) -> Duration {
        self.total
    }

    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }

    pub fn into_outcome(self) -> ChainOutcome {
        ChainOutcome {
            steps: self.steps,
            total_thinking_time: self.total,
        }
    }
}
