//! Canned port implementations.
//!
//! These stand in for fzf, the terminal, external programs and the clock so
//! the interactive flows can be driven from tests with fixed answers.

use anyhow::Result;
use chrono::{DateTime, Local, TimeZone};
use shellkit_core::ports::{Clock, CommandRunner, ProcessInfo, ProcessOutput, ProcessTable, Prompt, Selector};
use shellkit_core::Invocation;
use std::cell::RefCell;
use std::collections::VecDeque;

/// How a [`RecordingRunner`] was asked to run something
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    Capture,
    Interactive,
    Feed,
    Launch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub kind: CallKind,
    pub invocation: Invocation,
    pub input: Option<Vec<u8>>,
}

/// Records every invocation and answers from a script of outputs.
///
/// Once the script runs out every call succeeds with empty output.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    responses: RefCell<VecDeque<ProcessOutput>>,
    calls: RefCell<Vec<RecordedCall>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, output: ProcessOutput) -> Self {
        self.responses.borrow_mut().push_back(output);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, kind: CallKind, invocation: &Invocation, input: Option<&[u8]>) -> ProcessOutput {
        self.calls.borrow_mut().push(RecordedCall {
            kind,
            invocation: invocation.clone(),
            input: input.map(<[u8]>::to_vec),
        });
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| ProcessOutput::exited(0))
    }
}

impl CommandRunner for RecordingRunner {
    fn capture(&self, invocation: &Invocation) -> Result<ProcessOutput> {
        Ok(self.record(CallKind::Capture, invocation, None))
    }

    fn interactive(&self, invocation: &Invocation) -> Result<ProcessOutput> {
        Ok(self.record(CallKind::Interactive, invocation, None))
    }

    fn feed(&self, invocation: &Invocation, input: &[u8]) -> Result<ProcessOutput> {
        Ok(self.record(CallKind::Feed, invocation, Some(input)))
    }

    fn launch(&self, invocation: &Invocation) -> Result<()> {
        self.record(CallKind::Launch, invocation, None);
        Ok(())
    }
}

/// Selector that always answers the same way and remembers what it was shown
#[derive(Debug, Default)]
pub struct CannedSelector {
    choice: Option<String>,
    offered: RefCell<Vec<String>>,
}

impl CannedSelector {
    pub fn choosing(choice: impl Into<String>) -> Self {
        Self {
            choice: Some(choice.into()),
            offered: RefCell::default(),
        }
    }

    pub fn cancelling() -> Self {
        Self::default()
    }

    pub fn offered(&self) -> Vec<String> {
        self.offered.borrow().clone()
    }
}

impl Selector for CannedSelector {
    fn select(&self, candidates: &[String]) -> Result<Option<String>> {
        *self.offered.borrow_mut() = candidates.to_vec();
        Ok(self.choice.clone())
    }
}

/// Prompt answering from a fixed list, then end of input
#[derive(Debug, Default)]
pub struct CannedPrompt {
    answers: RefCell<VecDeque<String>>,
}

impl CannedPrompt {
    pub fn answering<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: RefCell::new(answers.into_iter().map(Into::into).collect()),
        }
    }
}

impl Prompt for CannedPrompt {
    fn read_line(&self, _message: &str) -> Result<Option<String>> {
        Ok(self.answers.borrow_mut().pop_front())
    }
}

/// Clock stuck at one instant
#[derive(Debug, Clone)]
pub struct FixedClock(pub DateTime<Local>);

impl FixedClock {
    /// Local time built from calendar fields; panics on an impossible date
    pub fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> Self {
        Self(
            Local
                .with_ymd_and_hms(year, month, day, hour, min, sec)
                .earliest()
                .expect("valid local time"),
        )
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// Process table with a fixed set of entries
#[derive(Debug, Default)]
pub struct StaticProcessTable(pub Vec<ProcessInfo>);

impl ProcessTable for StaticProcessTable {
    fn list(&self) -> Result<Vec<ProcessInfo>> {
        Ok(self.0.clone())
    }
}
