use std::rc::Rc;

use common::{sink::Sink, subject_observer::Observer};
use log::warn;

use crate::QuackEvent;

/// Reports every quack it hears about.
pub struct Quackologist {
    sink: Rc<dyn Sink>,
}

impl Quackologist {
    pub fn new(sink: Rc<dyn Sink>) -> Self {
        Quackologist { sink }
    }
}

impl Observer<str, QuackEvent> for Quackologist {
    fn update(&self, source: &str, event: QuackEvent) {
        if event == QuackEvent::Quacked {
            if let Err(err) = self.sink.emit(format!("Quackologist: {source} just quacked.")) {
                warn!("Quackologist lost track of {source}: {err}");
            }
        }
    }
}
