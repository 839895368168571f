use std::cell::RefCell;

use common::subject_observer::{rc_addr_eq, Subject};
use log::{debug, trace};

use crate::{QuackError, QuackEvent, QuackObserver, QuackResult, Quackable, SharedQuackable};

const DEFAULT_FLOCK_NAME: &str = "Flock of Ducks";

/// Composite quacker.
///
/// Quacking and observer registration fan out to the members held at call
/// time, in insertion order. A flock keeps no observer of its own: members
/// added after a registration do not receive it.
pub struct Flock {
    name: String,
    quackers: RefCell<Vec<SharedQuackable>>,
}

impl Default for Flock {
    fn default() -> Self {
        Self::with_name(DEFAULT_FLOCK_NAME)
    }
}

impl Flock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        Flock {
            name: name.into(),
            quackers: RefCell::new(vec![]),
        }
    }

    pub fn len(&self) -> usize {
        self.quackers.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.quackers.borrow().is_empty()
    }

    /// Members at call time; members may add to or remove from this flock
    /// while the snapshot is walked.
    fn members(&self) -> Vec<SharedQuackable> {
        self.quackers.borrow().clone()
    }
}

impl Subject<str, QuackEvent> for Flock {
    fn register_observer(&self, observer: QuackObserver) {
        let quackers = self.members();
        debug!("{}: registering observer on {} members", self.name, quackers.len());
        for quacker in quackers.iter() {
            quacker.register_observer(observer.clone());
        }
    }

    // Notification is leaf driven; a flock never holds observers.
    fn unregister_observer(&self, _observer: &QuackObserver) {}

    fn notify_observers(&self, _event: QuackEvent) {}
}

impl Quackable for Flock {
    fn name(&self) -> &str {
        &self.name
    }

    fn quack(&self) -> QuackResult<()> {
        let quackers = self.members();
        trace!("{}: {} members quacking", self.name, quackers.len());
        quackers.iter().try_for_each(|quacker| quacker.quack())
    }

    fn add(&self, quacker: SharedQuackable) -> QuackResult<()> {
        debug!("{}: adding {}", self.name, quacker.name());
        self.quackers.borrow_mut().push(quacker);
        Ok(())
    }

    fn remove(&self, quacker: &SharedQuackable) -> QuackResult<bool> {
        let mut quackers = self.quackers.borrow_mut();
        let position = quackers.iter().position(|q| rc_addr_eq(q, quacker));
        Ok(position.map(|index| quackers.remove(index)).is_some())
    }

    fn child(&self, index: usize) -> QuackResult<SharedQuackable> {
        let quackers = self.quackers.borrow();
        quackers
            .get(index)
            .cloned()
            .ok_or(QuackError::ChildOutOfRange {
                index,
                len: quackers.len(),
            })
    }
}
