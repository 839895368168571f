mod log_gateway;

pub use log_gateway::LogGateway;

const METRIC_PREFIX: &str = "quacks";

/// Metric name of a quacker: `quacks.<identity>` with the identity lower-cased
/// and whitespace runs replaced by `-`.
pub(crate) fn metric_name(quacker: &str) -> String {
    let identity = quacker
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-");
    format!("{METRIC_PREFIX}.{identity}")
}
