mod recording_sink;
mod rng;

pub use recording_sink::RecordingSink;
pub use rng::{get_seeded_rng, get_seeded_rng_from_scope, DEFAULT_TEST_SEED_ENV};

use std::io;

use mockall::mock;

mock! {
    pub Sink {}

    impl common::sink::Sink for Sink {
        fn emit(&self, line: String) -> io::Result<()>;
    }
}
