//! External commands and the single-consumer queue that carries them.
//!
//! # Why a queue
//!
//! Commands may be issued from a different thread than the one calling
//! `advance()` (an input thread, a UI callback, a network handler).  They are
//! enqueued through a [`CommandSender`] and drained by the scheduler at the
//! very start of the next tick, so a command is never applied in the middle
//! of a phase.

use std::num::NonZeroU32;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Mutex, PoisonError};

use crate::{SimError, SimResult};

/// A request from outside the tick loop.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    /// READY → CYCLE.  Ignored in every other state.
    Start,
    /// Freeze a running (non-terminal) scheduler.
    Pause,
    /// Return a paused scheduler to the state it was paused in.
    Resume,
    /// Change MOVE pacing.  Takes effect at the next committed step.
    SetTicksPerStep(NonZeroU32),
    /// Change the collision policy for subsequent checks.
    SetErrorOnCollision(bool),
}

/// Cloneable, thread-safe handle for enqueuing [`Command`]s.
#[derive(Clone, Debug)]
pub struct CommandSender {
    tx: Sender<Command>,
}

impl CommandSender {
    pub fn send(&self, command: Command) -> SimResult<()> {
        self.tx.send(command).map_err(|_| SimError::Disconnected)
    }

    pub fn start(&self) -> SimResult<()> {
        self.send(Command::Start)
    }

    pub fn pause(&self) -> SimResult<()> {
        self.send(Command::Pause)
    }

    pub fn resume(&self) -> SimResult<()> {
        self.send(Command::Resume)
    }

    pub fn set_ticks_per_step(&self, ticks: NonZeroU32) -> SimResult<()> {
        self.send(Command::SetTicksPerStep(ticks))
    }
}

/// The scheduler's end of the channel.
///
/// The receiver sits behind a `Mutex` only so the scheduler stays `Sync`
/// for read-only observers; draining goes through `get_mut` and never locks.
pub(crate) struct CommandQueue {
    tx: Sender<Command>,
    rx: Mutex<Receiver<Command>>,
}

impl CommandQueue {
    pub(crate) fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx: Mutex::new(rx) }
    }

    pub(crate) fn sender(&self) -> CommandSender {
        CommandSender { tx: self.tx.clone() }
    }

    /// Take every command enqueued so far, in send order.
    pub(crate) fn drain(&mut self) -> Vec<Command> {
        let rx = self.rx.get_mut().unwrap_or_else(PoisonError::into_inner);
        rx.try_iter().collect()
    }
}
