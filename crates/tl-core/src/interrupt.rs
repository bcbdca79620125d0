//! Cooperative interrupt flag.
//!
//! The flag moves through Idle → Armed → Fired → Done. Installation arms
//! it and registers the process Ctrl-C handler, which does nothing but
//! the Armed → Fired store; the sampler loop polls [`InterruptFlag::is_fired`]
//! once per iteration, so the handler never interleaves with loop state
//! mutations. The normal flush-and-release sequence runs for an
//! interrupted session exactly as for a completed one.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use tl_common::{Error, Result};

const IDLE: u8 = 0;
const ARMED: u8 = 1;
const FIRED: u8 = 2;
const DONE: u8 = 3;

/// Lifecycle of the interrupt flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterruptState {
    /// No handler installed yet.
    Idle,
    /// Handler installed, session running.
    Armed,
    /// Interrupt received; the flush sequence will run.
    Fired,
    /// Flush-and-release completed (interrupted or not).
    Done,
}

/// Shared interrupt flag polled by the sampler loop.
#[derive(Debug, Clone, Default)]
pub struct InterruptFlag {
    state: Arc<AtomicU8>,
}

impl InterruptFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> InterruptState {
        match self.state.load(Ordering::SeqCst) {
            ARMED => InterruptState::Armed,
            FIRED => InterruptState::Fired,
            DONE => InterruptState::Done,
            _ => InterruptState::Idle,
        }
    }

    /// Idle → Armed. Happens once, immediately before the loop starts.
    pub fn arm(&self) {
        let _ = self
            .state
            .compare_exchange(IDLE, ARMED, Ordering::SeqCst, Ordering::SeqCst);
    }

    /// Armed → Fired. Called from the signal handler; a fire before the
    /// flag is armed is ignored.
    pub fn fire(&self) {
        let _ = self
            .state
            .compare_exchange(ARMED, FIRED, Ordering::SeqCst, Ordering::SeqCst);
    }

    pub fn is_fired(&self) -> bool {
        self.state.load(Ordering::SeqCst) == FIRED
    }

    /// Terminal transition once the flush-and-release sequence has run.
    pub fn complete(&self) {
        self.state.store(DONE, Ordering::SeqCst);
    }
}

/// Arm `flag` and register the process Ctrl-C handler for it.
pub fn install_handler(flag: &InterruptFlag) -> Result<()> {
    flag.arm();
    let handler_flag = flag.clone();
    ctrlc::set_handler(move || {
        handler_flag.fire();
    })
    .map_err(|e| Error::Interrupt(e.to_string()))
}
