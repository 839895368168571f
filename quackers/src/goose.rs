use std::{io, rc::Rc};

use common::{
    sink::Sink,
    subject_observer::{Observable, Subject},
};

use crate::{QuackEvent, QuackResult, Quackable};

const GOOSE_ADAPTER_NAME: &str = "Goose pretending to be a Duck";

/// A bird with no notion of quacking nor of observers.
pub struct Goose {
    sink: Rc<dyn Sink>,
}

impl Goose {
    pub fn new(sink: Rc<dyn Sink>) -> Self {
        Goose { sink }
    }

    pub fn honk(&self) -> io::Result<()> {
        self.sink.emit("Goose: Honk".to_string())
    }
}

/// Lets a [`Goose`] join a flock: quacking honks, and observers are handled
/// by the adapter itself.
pub struct GooseAdapter {
    name: String,
    goose: Goose,
    observers: Observable<str, QuackEvent>,
}

impl GooseAdapter {
    pub fn new(goose: Goose) -> Self {
        GooseAdapter {
            name: GOOSE_ADAPTER_NAME.to_string(),
            goose,
            observers: Observable::new(),
        }
    }
}

delegate_subject!(GooseAdapter);

impl Quackable for GooseAdapter {
    fn name(&self) -> &str {
        &self.name
    }

    fn quack(&self) -> QuackResult<()> {
        self.goose.honk()?;
        self.notify_observers(QuackEvent::Quacked);
        Ok(())
    }
}
