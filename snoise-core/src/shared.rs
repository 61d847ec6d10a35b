//! Engine handle for hosts that run control and audio on different threads.
//!
//! The audio thread loads the current snapshot once per block; the control
//! thread edits a private copy and publishes it with a single pointer swap.
//! A table rebuild is therefore never visible half-done.

use std::sync::Arc;

use arc_swap::{ArcSwap, Guard};

use crate::command::ControlCommand;
use crate::engine::NoiseEngine;

/// A lock-free, swappable [`NoiseEngine`].
#[derive(Debug)]
pub struct SharedEngine {
    current: ArcSwap<NoiseEngine>,
}

impl SharedEngine {
    /// Wraps `engine` as the first published snapshot.
    #[must_use]
    pub fn new(engine: NoiseEngine) -> Self {
        Self {
            current: ArcSwap::from_pointee(engine),
        }
    }

    /// Current snapshot for the audio thread. Does not allocate or block.
    #[inline]
    #[must_use]
    pub fn load(&self) -> Guard<Arc<NoiseEngine>> {
        self.current.load()
    }

    /// Current snapshot as an owned `Arc`.
    #[must_use]
    pub fn snapshot(&self) -> Arc<NoiseEngine> {
        self.current.load_full()
    }

    /// Applies `edit` to a copy of the engine and publishes the result.
    ///
    /// `edit` may run more than once if another control thread publishes
    /// concurrently, so it must not have side effects beyond the engine.
    pub fn update(&self, mut edit: impl FnMut(&mut NoiseEngine)) {
        self.current.rcu(|current| {
            let mut next = NoiseEngine::clone(current);
            edit(&mut next);
            next
        });
    }

    /// Applies a control command through [`SharedEngine::update`].
    pub fn apply(&self, command: &ControlCommand) {
        self.update(|engine| engine.apply(command));
    }
}
