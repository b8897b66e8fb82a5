//! A scripted, in-memory stand-in for the GMT engine.
//!
//! [`FakeGmt`] implements [`SessionProvider`]. It records every module call,
//! returns canned output per module, and can be told to fail specific calls.
//! Common options are tracked with the same parser the real CLI session uses,
//! so `get_common` behaves like the engine for `-X`/`-Y` shifts.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};

use gmt_clib::{CommonOptions, CommonValue, LengthUnit, Session, SessionProvider};
use gmt_common::{GmtError, GmtResult};

/// One recorded module invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleCall {
    /// Sequence number of the session that issued the call (starting at 1).
    pub session: usize,
    pub module: String,
    pub args: String,
}

#[derive(Debug, Default)]
struct FakeState {
    calls: Vec<ModuleCall>,
    queued: HashMap<String, VecDeque<String>>,
    fixed: HashMap<String, String>,
    failures: HashMap<String, Vec<usize>>,
    attempts: HashMap<String, usize>,
    opened: usize,
    closed: usize,
    refuse_open: bool,
}

/// Scripted session provider for tests.
#[derive(Debug, Clone, Default)]
pub struct FakeGmt {
    state: Arc<Mutex<FakeState>>,
    length_unit: LengthUnit,
}

impl FakeGmt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve unit-less shifts with `unit` instead of centimeters.
    pub fn with_length_unit(mut self, unit: LengthUnit) -> Self {
        self.length_unit = unit;
        self
    }

    fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().expect("fake GMT state poisoned")
    }

    /// Queue output for the next call to `module`.
    pub fn respond(&self, module: &str, output: impl Into<String>) -> &Self {
        self.state()
            .queued
            .entry(module.to_string())
            .or_default()
            .push_back(output.into());
        self
    }

    /// Output for every call to `module` once the queue is empty.
    pub fn respond_always(&self, module: &str, output: impl Into<String>) -> &Self {
        self.state().fixed.insert(module.to_string(), output.into());
        self
    }

    /// Make the `occurrence`-th call (1-based) to `module` fail.
    pub fn fail_call(&self, module: &str, occurrence: usize) -> &Self {
        self.state()
            .failures
            .entry(module.to_string())
            .or_default()
            .push(occurrence);
        self
    }

    /// Make opening a session fail.
    pub fn refuse_sessions(&self) -> &Self {
        self.state().refuse_open = true;
        self
    }

    /// All recorded calls in order, including failed ones.
    pub fn calls(&self) -> Vec<ModuleCall> {
        self.state().calls.clone()
    }

    /// Argument strings of the calls to `module`, in order.
    pub fn calls_to(&self, module: &str) -> Vec<String> {
        self.state()
            .calls
            .iter()
            .filter(|c| c.module == module)
            .map(|c| c.args.clone())
            .collect()
    }

    /// Module names in call order.
    pub fn modules(&self) -> Vec<String> {
        self.state().calls.iter().map(|c| c.module.clone()).collect()
    }

    pub fn sessions_opened(&self) -> usize {
        self.state().opened
    }

    pub fn sessions_closed(&self) -> usize {
        self.state().closed
    }
}

impl SessionProvider for FakeGmt {
    type Session = FakeSession;

    fn open(&self) -> GmtResult<FakeSession> {
        let mut state = self.state();
        if state.refuse_open {
            return Err(GmtError::SessionState("fake session refused".to_string()));
        }
        state.opened += 1;
        Ok(FakeSession {
            id: state.opened,
            state: Arc::clone(&self.state),
            common: CommonOptions::default(),
            length_unit: self.length_unit,
        })
    }
}

/// Session handle issued by [`FakeGmt`].
#[derive(Debug)]
pub struct FakeSession {
    id: usize,
    state: Arc<Mutex<FakeState>>,
    common: CommonOptions,
    length_unit: LengthUnit,
}

impl Session for FakeSession {
    fn call_module(&mut self, module: &str, args: &str) -> GmtResult<String> {
        let mut state = self.state.lock().expect("fake GMT state poisoned");
        state.calls.push(ModuleCall {
            session: self.id,
            module: module.to_string(),
            args: args.to_string(),
        });

        let attempt = {
            let n = state.attempts.entry(module.to_string()).or_default();
            *n += 1;
            *n
        };
        let fails = state
            .failures
            .get(module)
            .map(|occ| occ.contains(&attempt))
            .unwrap_or(false);
        if fails {
            return Err(GmtError::ModuleFailed {
                module: module.to_string(),
                status: 1,
                stderr: format!("{} [ERROR]: injected failure", module),
            });
        }

        let output = match state.queued.get_mut(module).and_then(VecDeque::pop_front) {
            Some(out) => out,
            None => state.fixed.get(module).cloned().unwrap_or_default(),
        };
        drop(state);

        self.common = CommonOptions::from_args(args);
        Ok(output)
    }

    fn get_common(&mut self, option: char) -> GmtResult<CommonValue> {
        self.common.value(option, self.length_unit)
    }
}

impl Drop for FakeSession {
    fn drop(&mut self) {
        if let Ok(mut state) = self.state.lock() {
            state.closed += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_calls_and_sessions() {
        let gmt = FakeGmt::new();
        {
            let mut lib = gmt.open().unwrap();
            lib.call_module("plot", "-T -X1i").unwrap();
            assert_eq!(lib.get_common('X').unwrap(), CommonValue::Shift(1.0));
        }
        assert_eq!(gmt.sessions_opened(), 1);
        assert_eq!(gmt.sessions_closed(), 1);
        assert_eq!(gmt.calls_to("plot"), vec!["-T -X1i"]);
    }

    #[test]
    fn test_queued_then_fixed_responses() {
        let gmt = FakeGmt::new();
        gmt.respond("which", "first").respond_always("which", "fallback");
        let mut lib = gmt.open().unwrap();
        assert_eq!(lib.call_module("which", "").unwrap(), "first");
        assert_eq!(lib.call_module("which", "").unwrap(), "fallback");
        assert_eq!(lib.call_module("grdinfo", "").unwrap(), "");
    }

    #[test]
    fn test_injected_failure() {
        let gmt = FakeGmt::new();
        gmt.fail_call("plot", 2);
        let mut lib = gmt.open().unwrap();
        assert!(lib.call_module("plot", "-T").is_ok());
        assert!(lib.call_module("plot", "-T").is_err());
        assert!(lib.call_module("plot", "-T").is_ok());
        assert_eq!(gmt.calls().len(), 3);
    }
}
