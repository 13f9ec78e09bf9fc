use std::{
    cell::RefCell,
    collections::HashMap,
    env,
    error::Error,
    rc::Rc,
    sync::{OnceLock, RwLock},
};

use common::subject_observer::{Observer, StateReader};
use rand::{random, rngs::StdRng, SeedableRng};

pub const DEFAULT_TEST_SEED_ENV: &str = "OBSERVER_TEST_SEED";

static SEEDS: OnceLock<RwLock<HashMap<&'static str, u64>>> = OnceLock::new();

fn get_seeds_lock() -> &'static RwLock<HashMap<&'static str, u64>> {
    SEEDS.get_or_init(|| RwLock::new(HashMap::new()))
}

fn get_seed(key: &'static str) -> Result<u64, Box<dyn Error>> {
    let mut seeds = get_seeds_lock().write()?;
    Ok(*seeds.entry(key).or_insert_with(|| {
        let seed = env::var(key)
            .ok()
            .and_then(|seed_var| seed_var.parse::<u64>().ok())
            .unwrap_or_else(random);
        println!("Using seed {} for {}", seed, key);
        seed
    }))
}

/// Seeded RNG shared by all tests; set `OBSERVER_TEST_SEED` to replay a run.
pub fn get_seeded_rng() -> Result<StdRng, Box<dyn Error>> {
    get_seeded_rng_from_scope(DEFAULT_TEST_SEED_ENV)
}

pub fn get_seeded_rng_from_scope(key: &'static str) -> Result<StdRng, Box<dyn Error>> {
    Ok(StdRng::seed_from_u64(get_seed(key)?))
}

/// Names and states seen by a group of [`RecordingObserver`], in call order.
pub type CallLog = Rc<RefCell<Vec<(&'static str, i32)>>>;

pub fn new_call_log() -> CallLog {
    Rc::new(RefCell::new(vec![]))
}

pub struct RecordingObserver {
    name: &'static str,
    calls: CallLog,
}

impl RecordingObserver {
    pub fn new(name: &'static str, calls: &CallLog) -> Self {
        RecordingObserver {
            name,
            calls: calls.clone(),
        }
    }
}

impl Observer<i32> for RecordingObserver {
    fn update(&self, source: &dyn StateReader<i32>) {
        self.calls.borrow_mut().push((self.name, source.state()));
    }
}

/// Drains the log and returns the observer names only.
pub fn take_names(calls: &CallLog) -> Vec<&'static str> {
    calls.borrow_mut().drain(..).map(|(name, _)| name).collect()
}
