use std::{
    collections::HashMap,
    fmt,
    time::{Duration, Instant},
};

use collections::{ChainStats, ChainedHashTable, Count, Strategy, TableError};
use log::{debug, info};

use crate::{Config, Corpus, Error};

/// Wall time of each phase of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhaseTimes {
    /// Inserting every word of the corpus
    pub populate: Duration,
    /// Finding every distinct word and comparing its count
    pub verify: Duration,
    /// Removing every distinct word and checking it is gone
    pub remove: Duration,
}

#[derive(Debug, Clone)]
pub struct StrategyReport {
    pub strategy: Strategy,
    /// Number of words inserted
    pub words: usize,
    /// Statistics of the fully populated table
    pub stats: ChainStats,
    pub times: PhaseTimes,
    /// Bucket dump of the fully populated table, when asked for
    pub dump: Option<String>,
}

impl fmt::Display for StrategyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<9} words: {} {}", self.strategy, self.words, self.stats)?;
        write!(
            f,
            "{:<9} populate: {:?} verify: {:?} remove: {:?}",
            "", self.times.populate, self.times.verify, self.times.remove
        )
    }
}

/// Reads the configured input once and runs every configured strategy on it
pub fn run(config: &Config) -> Result<Vec<StrategyReport>, Error> {
    debug!(target: "run", "{config:?}");
    let corpus = Corpus::read(&config.input)?;
    let tally = corpus.tally();

    config
        .strategies
        .iter()
        .map(|&strategy| {
            run_strategy(strategy, config.capacity, &corpus, &tally, config.dump)
        })
        .collect()
}

/// Loads `corpus` into a fresh table hashed with `strategy`,
/// then checks it against `tally` and empties it again, timing each phase.
pub fn run_strategy(
    strategy: Strategy,
    capacity: usize,
    corpus: &Corpus,
    tally: &HashMap<&str, Count>,
    dump: bool,
) -> Result<StrategyReport, Error> {
    let mut table = ChainedHashTable::new(capacity, &strategy)?;
    let mut times = PhaseTimes::default();

    let start = Instant::now();
    let mut words = 0;
    for word in corpus.words() {
        table.insert(word);
        words += 1;
    }
    times.populate = start.elapsed();
    info!(
        target: "populate",
        "{strategy}: {words} words, {} distinct, in {:?}",
        table.len(),
        times.populate
    );

    let stats = table.stats();
    let dump = dump.then(|| table.dump());

    let start = Instant::now();
    for (&key, &expected) in tally {
        let got = table.find(key)?;
        if got != expected {
            return Err(Error::Verification {
                key: key.to_string(),
                expected,
                got,
            });
        }
    }
    times.verify = start.elapsed();
    info!(target: "verify", "{strategy}: {} keys in {:?}", tally.len(), times.verify);

    let start = Instant::now();
    for &key in tally.keys() {
        table.remove(key);
        match table.find(key) {
            Err(TableError::KeyNotFound { .. }) => {}
            Ok(got) => {
                return Err(Error::Verification {
                    key: key.to_string(),
                    expected: 0,
                    got,
                });
            }
            Err(e) => return Err(e.into()),
        }
    }
    times.remove = start.elapsed();
    info!(target: "remove", "{strategy}: {} keys in {:?}", tally.len(), times.remove);

    if !table.is_empty() {
        let (key, got) = table
            .iter()
            .next()
            .map(|(k, c)| (k.to_string(), c))
            .unwrap_or_default();
        return Err(Error::Verification {
            key,
            expected: 0,
            got,
        });
    }

    Ok(StrategyReport {
        strategy,
        words,
        stats,
        times,
        dump,
    })
}
