//! Single-flight guard for the export button
//!
//! Two overlapping exports would fight over the chrome visibility toggle,
//! so a second trigger is refused while one is running.

use std::cell::Cell;
use std::rc::Rc;

/// Shared in-progress flag
#[derive(Debug, Clone, Default)]
pub struct ExportLock {
    busy: Rc<Cell<bool>>,
}

impl ExportLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    /// Take the lock, or `None` if an export is already running
    pub fn try_acquire(&self) -> Option<ExportTicket> {
        if self.busy.replace(true) {
            return None;
        }
        Some(ExportTicket {
            busy: Rc::clone(&self.busy),
        })
    }
}

/// Held for the duration of one export; releases the lock on drop
#[derive(Debug)]
pub struct ExportTicket {
    busy: Rc<Cell<bool>>,
}

impl Drop for ExportTicket {
    fn drop(&mut self) {
        self.busy.set(false);
    }
}
