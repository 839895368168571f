use std::rc::Rc;

use common::{
    sink::Sink,
    subject_observer::{Observable, Subject},
};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::{QuackEvent, QuackResult, Quackable};

/// Native duck variants. The display form is the default identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum DuckKind {
    #[strum(to_string = "Mallard Duck")]
    Mallard,
    #[strum(to_string = "Redhead Duck")]
    Redhead,
    #[strum(to_string = "Rubber Duck")]
    Rubber,
}

impl DuckKind {
    pub(crate) fn hatch(self, name: &str, sink: Rc<dyn Sink>) -> Box<dyn Quackable> {
        match self {
            DuckKind::Mallard => Box::new(MallardDuck::with_name(name, sink)),
            DuckKind::Redhead => Box::new(RedheadDuck::with_name(name, sink)),
            DuckKind::Rubber => Box::new(RubberDuck::with_name(name, sink)),
        }
    }
}

pub struct MallardDuck {
    name: String,
    sink: Rc<dyn Sink>,
    observers: Observable<str, QuackEvent>,
}

impl MallardDuck {
    pub fn new(sink: Rc<dyn Sink>) -> Self {
        Self::with_name(DuckKind::Mallard.to_string(), sink)
    }

    pub fn with_name(name: impl Into<String>, sink: Rc<dyn Sink>) -> Self {
        MallardDuck {
            name: name.into(),
            sink,
            observers: Observable::new(),
        }
    }
}

delegate_subject!(MallardDuck);

impl Quackable for MallardDuck {
    fn name(&self) -> &str {
        &self.name
    }

    fn quack(&self) -> QuackResult<()> {
        self.sink.emit(format!("{}: Quack", self.name))?;
        self.notify_observers(QuackEvent::Quacked);
        Ok(())
    }
}

pub struct RedheadDuck {
    name: String,
    sink: Rc<dyn Sink>,
    observers: Observable<str, QuackEvent>,
}

impl RedheadDuck {
    pub fn new(sink: Rc<dyn Sink>) -> Self {
        Self::with_name(DuckKind::Redhead.to_string(), sink)
    }

    pub fn with_name(name: impl Into<String>, sink: Rc<dyn Sink>) -> Self {
        RedheadDuck {
            name: name.into(),
            sink,
            observers: Observable::new(),
        }
    }
}

delegate_subject!(RedheadDuck);

impl Quackable for RedheadDuck {
    fn name(&self) -> &str {
        &self.name
    }

    fn quack(&self) -> QuackResult<()> {
        self.sink.emit(format!("{}: Quack", self.name))?;
        self.notify_observers(QuackEvent::Quacked);
        Ok(())
    }
}

pub struct RubberDuck {
    name: String,
    sink: Rc<dyn Sink>,
    observers: Observable<str, QuackEvent>,
}

impl RubberDuck {
    pub fn new(sink: Rc<dyn Sink>) -> Self {
        Self::with_name(DuckKind::Rubber.to_string(), sink)
    }

    pub fn with_name(name: impl Into<String>, sink: Rc<dyn Sink>) -> Self {
        RubberDuck {
            name: name.into(),
            sink,
            observers: Observable::new(),
        }
    }
}

delegate_subject!(RubberDuck);

impl Quackable for RubberDuck {
    fn name(&self) -> &str {
        &self.name
    }

    fn quack(&self) -> QuackResult<()> {
        self.sink.emit(format!("{}: Squeak", self.name))?;
        self.notify_observers(QuackEvent::Quacked);
        Ok(())
    }
}
