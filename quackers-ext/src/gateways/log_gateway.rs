use common::subject_observer::Observer;
use dipstick::{Input, InputScope, Log, LogScope};
use log::trace;
use quackers::QuackEvent;

use super::metric_name;

/// Reports quacks as dipstick counters written to the log.
pub struct LogGateway {
    log_scope: LogScope,
}

impl LogGateway {
    pub fn new(level: log::Level) -> Self {
        LogGateway {
            log_scope: Log::to_log().level(level).metrics(),
        }
    }
}

impl Observer<str, QuackEvent> for LogGateway {
    fn update(&self, source: &str, event: QuackEvent) {
        if event == QuackEvent::Quacked {
            let name = metric_name(source);
            trace!("Counting quack of {source} as {name}");
            self.log_scope.counter(name.as_str()).count(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        rc::Rc,
        sync::{Mutex, Once},
    };

    use common::subject_observer::{Observer, Subject};
    use common_test::RecordingSink;
    use log::{LevelFilter, Metadata, Record};
    use quackers::{Goose, GooseAdapter, QuackEvent, QuackObserver, Quackable};

    use super::LogGateway;

    /// Keeps the records written by dipstick, leaving out this crate's own logs.
    struct MetricsLogger {
        lines: Mutex<Vec<String>>,
    }

    impl log::Log for MetricsLogger {
        fn enabled(&self, _metadata: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            if !record.target().starts_with("quackers_ext") {
                self.lines.lock().unwrap().push(record.args().to_string());
            }
        }

        fn flush(&self) {}
    }

    static LOGGER: MetricsLogger = MetricsLogger {
        lines: Mutex::new(vec![]),
    };
    static INIT: Once = Once::new();

    fn metric_lines(metric: &str) -> usize {
        INIT.call_once(|| {
            log::set_logger(&LOGGER).unwrap();
            log::set_max_level(LevelFilter::Trace);
        });
        LOGGER
            .lines
            .lock()
            .unwrap()
            .iter()
            .filter(|line| line.contains(metric))
            .count()
    }

    #[test]
    fn test_log_gateway_should_observe_quackers() {
        // Given
        let metric = "quacks.goose-pretending-to-be-a-duck";
        let before = metric_lines(metric);
        let sink = Rc::new(RecordingSink::new());
        let adapter = GooseAdapter::new(Goose::new(sink.clone()));
        let gateway: QuackObserver = Rc::new(LogGateway::new(log::Level::Trace));
        adapter.register_observer(gateway);

        // When
        let first = adapter.quack();
        let second = adapter.quack();

        // Then
        assert!(
            first.is_ok() && second.is_ok(),
            "Reporting metrics should not disturb quacking"
        );
        assert_eq!(vec!["Goose: Honk", "Goose: Honk"], sink.lines());
        assert_eq!(
            2,
            metric_lines(metric) - before,
            "Should count one quack per notification under the quacker metric"
        );
    }

    #[test]
    fn test_update_should_name_the_metric_after_the_source() {
        // Given
        let metric = "quacks.redhead-duck";
        let before = metric_lines(metric);
        let gateway = LogGateway::new(log::Level::Info);

        // When
        gateway.update("Redhead Duck", QuackEvent::Quacked);

        // Then
        assert_eq!(1, metric_lines(metric) - before);
        assert_eq!(0, metric_lines("quacks.redhead duck"));
    }
}
