use std::rc::Rc;

use common::{sink::Sink, subject_observer::Subject};
use log::{debug, info};
use quackers::{
    CountingDuckFactory, DuckFactory, Flock, Goose, GooseAdapter, QuackCount, QuackResult,
    Quackable, Quackologist,
};
use quackers_ext::gateways::LogGateway;

use crate::config::app::AppConfig;

const MALLARD_FLOCK_NAME: &str = "Flock of Mallards";

pub struct DuckSimulator {
    config: AppConfig,
    sink: Rc<dyn Sink>,
}

impl DuckSimulator {
    pub fn new(config: AppConfig, sink: Rc<dyn Sink>) -> Self {
        DuckSimulator { config, sink }
    }

    /// Builds the flock, makes it quack once and returns the counted quacks.
    pub fn run(&self) -> QuackResult<usize> {
        let factory = CountingDuckFactory::new(self.sink.clone(), QuackCount::new());
        let flock = self.build_flock(&factory)?;

        if self.config.observe {
            flock.register_observer(Rc::new(Quackologist::new(self.sink.clone())));
        }
        if self.config.report_metrics {
            flock.register_observer(Rc::new(LogGateway::new(log::Level::Info)));
        }

        self.sink
            .emit("Duck Simulator: With Observer & Flocks".to_string())?;
        simulate(&flock)?;

        let quacks = factory.quack_count().get();
        info!("{} quacked {quacks} times", flock.name());
        self.sink
            .emit(format!("The ducks quacked {quacks} times."))?;
        Ok(quacks)
    }

    fn build_flock(&self, factory: &impl DuckFactory) -> QuackResult<Flock> {
        let flock = Flock::new();
        for kind in &self.config.flock {
            flock.add(factory.create_duck(*kind, &kind.to_string()))?;
        }
        if self.config.include_goose {
            flock.add(Rc::new(GooseAdapter::new(Goose::new(self.sink.clone()))))?;
        }

        if self.config.mallard_flock_size > 0 {
            let mallards = Flock::with_name(MALLARD_FLOCK_NAME);
            for _ in 0..self.config.mallard_flock_size {
                mallards.add(factory.create_mallard_duck())?;
            }
            flock.add(Rc::new(mallards))?;
        }
        debug!("Built {} with {} members", flock.name(), flock.len());
        Ok(flock)
    }
}

fn simulate(duck: &dyn Quackable) -> QuackResult<()> {
    duck.quack()
}
