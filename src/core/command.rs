use crate::core::params::Param;
use crate::error::{Error, Result};
use crossbeam_channel::{Receiver, Sender};

/// A parameter write queued by an external controller.
///
/// Commands are applied in arrival order at the next tick boundary, so the last write to a
/// parameter within one frame wins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Clamped write of one scalar parameter. `Set(Param::Count, n)` behaves like `Resize`.
    Set(Param, f64),
    /// Reallocate and reseed the ensemble at a new particle count.
    Resize(usize),
    /// Redraw the whole ensemble at the current count.
    Reseed,
}

/// Cloneable, thread-safe handle for queueing commands into a [`Simulation`](super::Simulation).
#[derive(Debug, Clone)]
pub struct Controller {
    tx: Sender<Command>,
}

impl Controller {
    /// Queue an arbitrary command.
    ///
    /// Errors:
    /// - `Error::Disconnected` if the simulation has been dropped.
    pub fn send(&self, cmd: Command) -> Result<()> {
        self.tx.send(cmd).map_err(|_| Error::Disconnected)
    }

    /// Queue a parameter write.
    pub fn set(&self, key: Param, value: f64) -> Result<()> {
        self.send(Command::Set(key, value))
    }

    /// Queue a particle-count change.
    pub fn resize(&self, count: usize) -> Result<()> {
        self.send(Command::Resize(count))
    }
}

/// Receiving side owned by the simulation.
#[derive(Debug)]
pub(crate) struct CommandQueue {
    tx: Sender<Command>,
    rx: Receiver<Command>,
}

impl CommandQueue {
    pub(crate) fn new() -> Self {
        let (tx, rx) = crossbeam_channel::unbounded();
        Self { tx, rx }
    }

    pub(crate) fn controller(&self) -> Controller {
        Controller {
            tx: self.tx.clone(),
        }
    }

    /// Take every command queued so far, in arrival order.
    ///
    /// Commands sent while the drain is in progress wait for the next tick.
    pub(crate) fn drain(&self) -> Vec<Command> {
        let pending = self.rx.len();
        self.rx.try_iter().take(pending).collect()
    }
}
