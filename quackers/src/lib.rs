use std::rc::Rc;

use common::subject_observer::{SharedObserver, Subject};

/// Implements `Subject` for a quacker owning `name` and `observers` fields.
macro_rules! delegate_subject {
    ($quacker:ty) => {
        impl common::subject_observer::Subject<str, $crate::QuackEvent> for $quacker {
            fn register_observer(&self, observer: $crate::QuackObserver) {
                if !self.observers.register(observer) {
                    log::debug!("{} already has this observer", self.name);
                }
            }

            fn unregister_observer(&self, observer: &$crate::QuackObserver) {
                self.observers.unregister(observer);
            }

            fn notify_observers(&self, event: $crate::QuackEvent) {
                self.observers.notify(self.name.as_str(), event);
            }
        }
    };
}

mod counter;
mod ducks;
mod error;
mod factory;
mod flock;
mod goose;
mod quackologist;

pub use counter::{QuackCount, QuackCounter};
pub use ducks::{DuckKind, MallardDuck, RedheadDuck, RubberDuck};
pub use error::{QuackError, QuackResult};
pub use factory::{CountingDuckFactory, DuckFactory, SimpleDuckFactory};
pub use flock::Flock;
pub use goose::{Goose, GooseAdapter};
pub use quackologist::Quackologist;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuackEvent {
    Quacked,
}

/// Observers receive the identity of the quacker that quacked.
pub type QuackObserver = SharedObserver<str, QuackEvent>;

pub type SharedQuackable = Rc<dyn Quackable>;

/// The capability shared by every node of a duck graph.
///
/// Structural operations only make sense on composites; leaves inherit the
/// default implementations which fail with [`QuackError::UnsupportedOperation`].
pub trait Quackable: Subject<str, QuackEvent> {
    fn name(&self) -> &str;

    fn quack(&self) -> QuackResult<()>;

    fn add(&self, _quacker: SharedQuackable) -> QuackResult<()> {
        Err(QuackError::unsupported("add", self.name()))
    }

    fn remove(&self, _quacker: &SharedQuackable) -> QuackResult<bool> {
        Err(QuackError::unsupported("remove", self.name()))
    }

    fn child(&self, _index: usize) -> QuackResult<SharedQuackable> {
        Err(QuackError::unsupported("child", self.name()))
    }
}
