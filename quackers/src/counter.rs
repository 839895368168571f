use std::{cell::Cell, rc::Rc};

use common::subject_observer::Subject;
use log::trace;

use crate::{QuackEvent, QuackObserver, QuackResult, Quackable, SharedQuackable};

/// Number of completed quacks that went through a [`QuackCounter`].
///
/// Cloning hands out another handle on the same count; it never decreases.
#[derive(Debug, Clone, Default)]
pub struct QuackCount(Rc<Cell<usize>>);

impl QuackCount {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> usize {
        self.0.get()
    }

    fn increment(&self) {
        self.0.set(self.0.get() + 1);
    }
}

/// Decorator counting the quacks of the quacker it owns.
pub struct QuackCounter {
    duck: Box<dyn Quackable>,
    count: QuackCount,
}

impl QuackCounter {
    pub fn new(duck: Box<dyn Quackable>, count: QuackCount) -> Self {
        QuackCounter { duck, count }
    }
}

impl Subject<str, QuackEvent> for QuackCounter {
    fn register_observer(&self, observer: QuackObserver) {
        self.duck.register_observer(observer);
    }

    fn unregister_observer(&self, observer: &QuackObserver) {
        self.duck.unregister_observer(observer);
    }

    fn notify_observers(&self, event: QuackEvent) {
        self.duck.notify_observers(event);
    }
}

impl Quackable for QuackCounter {
    fn name(&self) -> &str {
        self.duck.name()
    }

    fn quack(&self) -> QuackResult<()> {
        self.duck.quack()?;
        self.count.increment();
        trace!("{} counted, {} quacks so far", self.duck.name(), self.count.get());
        Ok(())
    }

    fn add(&self, quacker: SharedQuackable) -> QuackResult<()> {
        self.duck.add(quacker)
    }

    fn remove(&self, quacker: &SharedQuackable) -> QuackResult<bool> {
        self.duck.remove(quacker)
    }

    fn child(&self, index: usize) -> QuackResult<SharedQuackable> {
        self.duck.child(index)
    }
}

#[cfg(test)]
mod tests {
    use std::{io, rc::Rc};

    use common::subject_observer::Subject;
    use common_test::{MockSink, RecordingSink};

    use crate::{
        Flock, MallardDuck, QuackError, QuackEvent, QuackObserver, Quackable, Quackologist,
        RubberDuck,
    };

    use super::{QuackCount, QuackCounter};

    #[test]
    fn test_quack_count_handles_share_the_count() {
        // Given
        let count = QuackCount::new();
        let handle = count.clone();

        // When
        count.increment();
        handle.increment();

        // Then
        assert_eq!(2, count.get());
        assert_eq!(2, handle.get());
    }

    #[test]
    fn test_quack_should_count_after_the_wrapped_quack() {
        // Given
        let sink = Rc::new(RecordingSink::new());
        let count = QuackCount::new();
        let mallard = QuackCounter::new(
            Box::new(MallardDuck::with_name("M", sink.clone())),
            count.clone(),
        );
        let rubber = QuackCounter::new(
            Box::new(RubberDuck::with_name("S", sink.clone())),
            count.clone(),
        );

        // When
        mallard.quack().unwrap();
        rubber.quack().unwrap();
        mallard.quack().unwrap();

        // Then
        assert_eq!(3, count.get(), "Should count every quack of every decorator");
        assert_eq!(
            vec!["M: Quack", "S: Squeak", "M: Quack"],
            sink.lines(),
            "Should forward the quack unchanged"
        );
    }

    #[test]
    fn test_quack_should_not_count_failed_quacks() {
        // Given
        let mut sink = MockSink::new();
        sink.expect_emit()
            .times(1)
            .returning(|_| Err(io::Error::new(io::ErrorKind::Other, "muted")));
        let count = QuackCount::new();
        let counter = QuackCounter::new(
            Box::new(MallardDuck::new(Rc::new(sink))),
            count.clone(),
        );

        // When
        let result = counter.quack();

        // Then
        assert!(matches!(result, Err(QuackError::Sink(_))));
        assert_eq!(0, count.get(), "Should only count completed quacks");
    }

    #[test]
    fn test_stacked_counters_should_count_once_per_layer() {
        // Given
        let sink = Rc::new(RecordingSink::new());
        let count = QuackCount::new();
        let inner = QuackCounter::new(Box::new(MallardDuck::new(sink.clone())), count.clone());
        let outer = QuackCounter::new(Box::new(inner), count.clone());

        // When
        outer.quack().unwrap();

        // Then
        assert_eq!(2, count.get());
        assert_eq!(1, sink.lines().len(), "Should quack only once");
    }

    #[test]
    fn test_observers_should_be_forwarded_to_the_wrapped_duck() {
        // Given
        let sink = Rc::new(RecordingSink::new());
        let counter = QuackCounter::new(
            Box::new(MallardDuck::with_name("M", sink.clone())),
            QuackCount::new(),
        );
        let observer: QuackObserver = Rc::new(Quackologist::new(sink.clone()));

        // When
        counter.register_observer(observer.clone());
        counter.notify_observers(QuackEvent::Quacked);

        // Then
        assert_eq!("M", counter.name(), "Should expose the wrapped identity");
        assert_eq!(vec!["Quackologist: M just quacked."], sink.lines());

        // When
        counter.unregister_observer(&observer);
        counter.notify_observers(QuackEvent::Quacked);

        // Then
        assert_eq!(1, sink.lines().len(), "Should forward removal");
    }

    #[test]
    fn test_structural_operations_should_be_forwarded() {
        // Given
        let sink = Rc::new(RecordingSink::new());
        let count = QuackCount::new();
        let flock = QuackCounter::new(Box::new(Flock::new()), count.clone());
        let leaf = QuackCounter::new(Box::new(MallardDuck::new(sink.clone())), count.clone());

        // When
        flock
            .add(Rc::new(MallardDuck::with_name("M", sink.clone())))
            .unwrap();
        flock.quack().unwrap();

        // Then
        assert_eq!("M", flock.child(0).unwrap().name());
        assert_eq!(1, count.get(), "Only the decorated flock is counted");
        assert!(matches!(
            leaf.child(0),
            Err(QuackError::UnsupportedOperation { .. })
        ));
    }
}
