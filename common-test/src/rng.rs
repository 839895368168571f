use std::{
    collections::HashMap,
    env,
    error::Error,
    sync::{OnceLock, RwLock},
};

use rand::{random, rngs::StdRng, SeedableRng};

pub const DEFAULT_TEST_SEED_ENV: &str = "DEFAULT_TEST_SEED";

static SEEDS: OnceLock<RwLock<HashMap<&'static str, u64>>> = OnceLock::new();

fn seeds() -> &'static RwLock<HashMap<&'static str, u64>> {
    SEEDS.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Seed bound to `key`: read once from the env var of the same name, random
/// otherwise, then pinned for the rest of the test process.
fn seed_for(key: &'static str) -> Result<u64, Box<dyn Error>> {
    let mut seeds = seeds().write()?;
    Ok(*seeds.entry(key).or_insert_with(|| {
        let seed = env::var(key)
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or_else(random);
        println!("Using seed {seed} for {key}");
        seed
    }))
}

pub fn get_seeded_rng() -> Result<StdRng, Box<dyn Error>> {
    get_seeded_rng_from_scope(DEFAULT_TEST_SEED_ENV)
}

pub fn get_seeded_rng_from_scope(key: &'static str) -> Result<StdRng, Box<dyn Error>> {
    Ok(StdRng::seed_from_u64(seed_for(key)?))
}

#[cfg(test)]
mod tests {
    use std::env;

    use rand::Rng;

    use super::{get_seeded_rng_from_scope, seed_for, seeds};

    #[test]
    fn test_get_seeded_rng_from_scope() {
        // Given
        let key = "test_get_seeded_rng_from_scope";
        env::set_var(key, "1");

        // When
        let first = get_seeded_rng_from_scope(key).unwrap().gen::<u64>();
        let second = get_seeded_rng_from_scope(key).unwrap().gen::<u64>();

        // Then
        assert!(seeds().read().unwrap().contains_key(key));
        assert_eq!(1, seed_for(key).unwrap(), "Should use the env var seed");
        assert_eq!(first, second, "Should replay the same sequence");
    }
}
