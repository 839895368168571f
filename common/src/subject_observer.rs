use std::{cell::RefCell, ptr, rc::Rc};

pub trait Observer<S: ?Sized, E> {
    fn update(&self, source: &S, event: E);
}

pub type SharedObserver<S, E> = Rc<dyn Observer<S, E>>;

/// Identity of two `Rc` handles, by data address only (vtables are ignored).
pub fn rc_addr_eq<T: ?Sized>(a: &Rc<T>, b: &Rc<T>) -> bool {
    ptr::eq(Rc::as_ptr(a) as *const (), Rc::as_ptr(b) as *const ())
}

/// Anything observers can be attached to.
///
/// Methods take `&self` so that subjects can be shared through `Rc` handles
/// and still accept registrations.
pub trait Subject<S: ?Sized, E> {
    fn register_observer(&self, observer: SharedObserver<S, E>);
    fn unregister_observer(&self, observer: &SharedObserver<S, E>);
    fn notify_observers(&self, event: E);
}

/// Observer bookkeeping owned by a single subject.
///
/// Observers are kept in registration order and an observer is never held
/// twice (identity is `Rc` pointer identity).
pub struct Observable<S: ?Sized, E> {
    observers: RefCell<Vec<SharedObserver<S, E>>>,
}

impl<S: ?Sized, E> Default for Observable<S, E> {
    fn default() -> Self {
        Observable {
            observers: RefCell::new(vec![]),
        }
    }
}

impl<S: ?Sized, E: Clone> Observable<S, E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the observer was already registered.
    pub fn register(&self, observer: SharedObserver<S, E>) -> bool {
        let mut observers = self.observers.borrow_mut();
        if observers.iter().any(|obs| rc_addr_eq(obs, &observer)) {
            return false;
        }
        observers.push(observer);
        true
    }

    /// Returns `false` when the observer was not registered.
    pub fn unregister(&self, observer: &SharedObserver<S, E>) -> bool {
        let mut observers = self.observers.borrow_mut();
        let len = observers.len();
        observers.retain(|obs| !rc_addr_eq(obs, observer));
        observers.len() != len
    }

    pub fn notify(&self, source: &S, event: E) {
        // Snapshot: observers may touch the registry while being notified.
        let observers = self.observers.borrow().clone();
        for obs in &observers {
            obs.update(source, event.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.observers.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.borrow().is_empty()
    }
}
