use crate::consts::{DEFAULT_TOP_K, DIGIT_COUNT, PIN_LENGTH, PIN_SPACE};
use crate::error::PinsightError;
use crate::model::PositionAnalysis;
use itertools::iproduct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// A 4-digit PIN. Leading zeros are significant ("0042" != "42").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pin([u8; PIN_LENGTH]);

impl Pin {
    /// Returns `None` if any digit is above 9.
    pub fn from_digits(digits: [u8; PIN_LENGTH]) -> Option<Self> {
        if digits.iter().all(|&d| (d as usize) < DIGIT_COUNT) {
            Some(Pin(digits))
        } else {
            None
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        if index >= PIN_SPACE {
            return None;
        }
        Some(Pin([
            (index / 1000) as u8,
            (index / 100 % 10) as u8,
            (index / 10 % 10) as u8,
            (index % 10) as u8,
        ]))
    }

    pub fn digits(&self) -> [u8; PIN_LENGTH] {
        self.0
    }

    /// Numeric value, 0..=9999. Ordering by index is ordering by string.
    pub fn index(&self) -> usize {
        self.0.iter().fold(0usize, |acc, &d| acc * 10 + d as usize)
    }

    /// All 10,000 PINs in ascending order.
    pub fn all() -> impl Iterator<Item = Pin> {
        (0..PIN_SPACE).filter_map(Pin::from_index)
    }
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.0 {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

impl FromStr for Pin {
    type Err = PinsightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != PIN_LENGTH || !bytes.iter().all(u8::is_ascii_digit) {
            return Err(PinsightError::InvalidPin(s.to_string()));
        }
        let mut digits = [0u8; PIN_LENGTH];
        for (slot, b) in digits.iter_mut().zip(bytes) {
            *slot = b - b'0';
        }
        Ok(Pin(digits))
    }
}

impl PartialEq<&str> for Pin {
    fn eq(&self, other: &&str) -> bool {
        other.parse::<Pin>().map(|p| p == *self).unwrap_or(false)
    }
}

impl Serialize for Pin {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Pin {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A PIN hypothesis. What `score` means depends on the ranking that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub pin: Pin,
    pub score: f64,
}

impl Candidate {
    pub fn new(pin: Pin, score: f64) -> Self {
        Self { pin, score }
    }
}

/// Descending score; equal scores by ascending PIN.
#[inline(always)]
pub fn by_score_desc(a: &Candidate, b: &Candidate) -> Ordering {
    b.score.total_cmp(&a.score).then(a.pin.cmp(&b.pin))
}

/// Descending score only. Used with stable sorts so ties keep input order.
#[inline(always)]
pub fn score_desc(a: &Candidate, b: &Candidate) -> Ordering {
    b.score.total_cmp(&a.score)
}

/// Enumerates whole-PIN hypotheses from four per-tap distributions.
///
/// Each position contributes its `top_k` most likely digits; the score of a
/// PIN is the product of its four digit probabilities (taps are treated as
/// independent). Anything other than exactly four analyses yields an empty
/// list. `top_k` is capped at 10; zero yields no candidates.
pub fn generate_candidates(analyses: &[PositionAnalysis], top_k: usize) -> Vec<Candidate> {
    if analyses.len() != PIN_LENGTH {
        debug!(
            "Expected {} position analyses, got {}; no candidates",
            PIN_LENGTH,
            analyses.len()
        );
        return Vec::new();
    }

    let k = top_k.min(DIGIT_COUNT);
    let p0 = analyses[0].likelihood.top(k);
    let p1 = analyses[1].likelihood.top(k);
    let p2 = analyses[2].likelihood.top(k);
    let p3 = analyses[3].likelihood.top(k);

    let mut candidates: Vec<Candidate> = iproduct!(p0, p1, p2, p3)
        .map(|(a, b, c, d)| Candidate {
            pin: Pin([a.digit, b.digit, c.digit, d.digit]),
            score: a.p * b.p * c.p * d.p,
        })
        .collect();

    candidates.sort_by(by_score_desc);
    debug!("Generated {} candidates (top_k = {})", candidates.len(), k);
    candidates
}

/// Shorthand for `generate_candidates(analyses, DEFAULT_TOP_K)`.
pub fn generate_default_candidates(analyses: &[PositionAnalysis]) -> Vec<Candidate> {
    generate_candidates(analyses, DEFAULT_TOP_K)
}
