//! Deterministic random stream for pack generation.
//!
//! One [`PackRng`] is seeded per spawn request and every random decision of that
//! request (zone level, monster, tier, affixes, minions, unit ids) draws from it
//! in a fixed order.
//!
//! # Determinism
//!
//! The state is a single 32-bit word advanced by xorshift32. Every operation is
//! pure integer arithmetic followed by one division by 2^32, so a given seed
//! yields the same sequence on every platform.

use core::fmt;
use core::str::FromStr;

use crate::error::{ErrorSeverity, PackError};

const TWO_POW_32: f64 = 4_294_967_296.0;

/// Replacement state for seeds that normalize to zero.
///
/// xorshift32 maps zero to zero forever, so the zero seed is remapped to a
/// fixed odd constant instead.
const ZERO_SEED_STATE: u32 = 0x9E37_79B9;

/// Seed accepted by [`PackRng::new`].
///
/// Numeric seeds are floored and wrapped into the unsigned 32-bit range.
/// Text seeds are folded with `h = 31 * h + code_unit` over their UTF-16 code
/// units, wrapping at 32 bits.
///
/// A seed that normalizes to 0 (including `0`, `2^32` and the empty string)
/// starts from a fixed substitute state, so it does not reproduce the plain
/// xorshift32 stream for state 0.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Seed {
    Numeric(f64),
    Text(String),
}

impl Seed {
    /// Reduce the seed to the 32-bit value the generator starts from.
    pub fn to_u32(&self) -> u32 {
        match self {
            Seed::Numeric(value) => wrap_to_u32(*value),
            Seed::Text(text) => text
                .encode_utf16()
                .fold(0u32, |h, unit| h.wrapping_mul(31).wrapping_add(u32::from(unit))),
        }
    }
}

fn wrap_to_u32(value: f64) -> u32 {
    if !value.is_finite() {
        return 0;
    }
    value.floor().rem_euclid(TWO_POW_32) as u32
}

impl From<u32> for Seed {
    fn from(value: u32) -> Self {
        Seed::Numeric(f64::from(value))
    }
}

impl From<i32> for Seed {
    fn from(value: i32) -> Self {
        Seed::Numeric(f64::from(value))
    }
}

impl From<i64> for Seed {
    fn from(value: i64) -> Self {
        Seed::Numeric(value as f64)
    }
}

impl From<f64> for Seed {
    fn from(value: f64) -> Self {
        Seed::Numeric(value)
    }
}

impl From<&str> for Seed {
    fn from(value: &str) -> Self {
        Seed::Text(value.to_owned())
    }
}

impl From<String> for Seed {
    fn from(value: String) -> Self {
        Seed::Text(value)
    }
}

/// Parses finite numbers as numeric seeds and anything else as a text seed.
impl FromStr for Seed {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Seed::Numeric(value)),
            _ => Ok(Seed::Text(s.to_owned())),
        }
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seed::Numeric(value) => write!(f, "{value}"),
            Seed::Text(text) => f.write_str(text),
        }
    }
}

/// Anything that can take part in a weighted pick.
pub trait Weighted {
    fn weight(&self) -> f64;
}

/// Errors raised by invalid RNG usage.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum RngError {
    #[error("weighted pick over an empty list")]
    EmptyList,

    #[error("weighted pick requires a positive total weight, got {total}")]
    NonPositiveWeight { total: f64 },
}

impl PackError for RngError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            RngError::EmptyList => "RNG_EMPTY_LIST",
            RngError::NonPositiveWeight { .. } => "RNG_NON_POSITIVE_WEIGHT",
        }
    }
}

/// xorshift32 stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackRng {
    state: u32,
}

impl PackRng {
    /// Creates a stream from a numeric or text seed.
    pub fn new(seed: impl Into<Seed>) -> Self {
        Self::from_state(seed.into().to_u32())
    }

    /// Creates a stream from an already-normalized 32-bit state.
    pub const fn from_state(state: u32) -> Self {
        let state = if state == 0 { ZERO_SEED_STATE } else { state };
        Self { state }
    }

    /// Current internal state (the last value produced).
    pub const fn state(&self) -> u32 {
        self.state
    }

    #[inline]
    fn step(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Next value in `[0, 1)`. Advances the state once.
    pub fn next_float(&mut self) -> f64 {
        f64::from(self.step()) / TWO_POW_32
    }

    /// Integer in the half-open range `[min, max)`.
    ///
    /// Bounds given in the wrong order are swapped. When `min == max` the value
    /// is returned without drawing.
    pub fn next_int(&mut self, min: i64, max: i64) -> i64 {
        let (lo, hi) = if min > max { (max, min) } else { (min, max) };
        if lo == hi {
            return lo;
        }
        let span = (hi - lo) as f64;
        lo + (self.next_float() * span).floor() as i64
    }

    /// Picks one item with probability proportional to its weight.
    ///
    /// Draws exactly one float. Non-finite and negative weights count as zero.
    /// Falls back to the last item when rounding leaves the draw past the
    /// final cumulative sum.
    ///
    /// # Errors
    ///
    /// [`RngError::EmptyList`] for an empty slice and
    /// [`RngError::NonPositiveWeight`] when the weights sum to zero or less.
    pub fn pick_weighted<'a, T: Weighted>(&mut self, items: &'a [T]) -> Result<&'a T, RngError> {
        let last = items.last().ok_or(RngError::EmptyList)?;

        let total: f64 = items.iter().map(effective_weight).sum();
        if total <= 0.0 {
            return Err(RngError::NonPositiveWeight { total });
        }

        let target = self.next_float() * total;
        let mut cumulative = 0.0;
        for item in items {
            cumulative += effective_weight(item);
            if target < cumulative {
                return Ok(item);
            }
        }
        Ok(last)
    }
}

fn effective_weight<T: Weighted>(item: &T) -> f64 {
    let weight = item.weight();
    if weight.is_finite() && weight > 0.0 {
        weight
    } else {
        0.0
    }
}
