use std::rc::Rc;

use common::sink::Sink;
use log::debug;

use crate::{DuckKind, QuackCount, QuackCounter, SharedQuackable};

pub trait DuckFactory {
    fn create_duck(&self, kind: DuckKind, name: &str) -> SharedQuackable;

    fn create_mallard_duck(&self) -> SharedQuackable {
        self.create_duck(DuckKind::Mallard, &DuckKind::Mallard.to_string())
    }

    fn create_redhead_duck(&self) -> SharedQuackable {
        self.create_duck(DuckKind::Redhead, &DuckKind::Redhead.to_string())
    }

    fn create_rubber_duck(&self) -> SharedQuackable {
        self.create_duck(DuckKind::Rubber, &DuckKind::Rubber.to_string())
    }
}

/// Hatches plain, uncounted ducks.
pub struct SimpleDuckFactory {
    sink: Rc<dyn Sink>,
}

impl SimpleDuckFactory {
    pub fn new(sink: Rc<dyn Sink>) -> Self {
        SimpleDuckFactory { sink }
    }
}

impl DuckFactory for SimpleDuckFactory {
    fn create_duck(&self, kind: DuckKind, name: &str) -> SharedQuackable {
        Rc::from(kind.hatch(name, self.sink.clone()))
    }
}

/// Hatches ducks wrapped in a single [`QuackCounter`] sharing the factory count.
pub struct CountingDuckFactory {
    sink: Rc<dyn Sink>,
    count: QuackCount,
}

impl CountingDuckFactory {
    pub fn new(sink: Rc<dyn Sink>, count: QuackCount) -> Self {
        CountingDuckFactory { sink, count }
    }

    pub fn quack_count(&self) -> &QuackCount {
        &self.count
    }
}

impl DuckFactory for CountingDuckFactory {
    fn create_duck(&self, kind: DuckKind, name: &str) -> SharedQuackable {
        debug!("Hatching counted {kind} {name}");
        Rc::new(QuackCounter::new(
            kind.hatch(name, self.sink.clone()),
            self.count.clone(),
        ))
    }
}
