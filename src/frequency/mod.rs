pub mod cache;
pub mod loader;

pub use self::cache::FrequencyCache;
pub use self::loader::{load_frequency_table, load_frequency_table_from_reader};

use crate::candidates::{score_desc, Candidate, Pin};
use crate::consts::PIN_SPACE;
use crate::error::{PinsightError, PsResult};

/// Observed real-world occurrence count for every 4-digit PIN.
///
/// Dense: slot `i` holds the count for the PIN whose numeric value is `i`.
/// Every slot is >= 1 once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: Vec<u64>,
}

impl FrequencyTable {
    /// Builds a table from counts indexed by numeric PIN value.
    pub fn from_counts(counts: Vec<u64>) -> PsResult<Self> {
        if counts.len() != PIN_SPACE {
            return Err(PinsightError::IncompleteTable {
                expected: PIN_SPACE,
                actual: counts.len(),
            });
        }
        if let Some(idx) = counts.iter().position(|&c| c < 1) {
            let pin = Pin::from_index(idx).map(|p| p.to_string()).unwrap_or_default();
            return Err(PinsightError::InvalidCount {
                pin,
                count: counts[idx],
            });
        }
        Ok(Self { counts })
    }

    /// Builds a table by asking `count_of` for every PIN in ascending order.
    pub fn from_fn<F: FnMut(Pin) -> u64>(mut count_of: F) -> PsResult<Self> {
        Self::from_counts(Pin::all().map(&mut count_of).collect())
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn get(&self, pin: &Pin) -> u64 {
        self.counts.get(pin.index()).copied().unwrap_or(0)
    }

    pub fn max_count(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    pub fn min_count(&self) -> u64 {
        self.counts.iter().copied().min().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// The `n` most common PINs, most common first.
    pub fn most_common(&self, n: usize) -> Vec<Candidate> {
        let mut ranked = rank_by_frequency(Pin::all(), self);
        ranked.truncate(n);
        ranked
    }
}

/// Count for `pin`, 0 when the string is not a well-formed PIN.
pub fn get_frequency(pin: &str, table: &FrequencyTable) -> u64 {
    pin.parse::<Pin>().map(|p| table.get(&p)).unwrap_or(0)
}

/// `count / max_count`, or 0 when `max_count` is 0.
pub fn normalize_frequency(count: u64, max_count: u64) -> f64 {
    if max_count == 0 {
        return 0.0;
    }
    count as f64 / max_count as f64
}

/// Ranks arbitrary PINs by raw count. The candidate score is the count.
pub fn rank_by_frequency<I>(pins: I, table: &FrequencyTable) -> Vec<Candidate>
where
    I: IntoIterator<Item = Pin>,
{
    let mut ranked: Vec<Candidate> = pins
        .into_iter()
        .map(|pin| Candidate::new(pin, table.get(&pin) as f64))
        .collect();
    ranked.sort_by(score_desc);
    ranked
}
