use std::fmt::Display;

use serde::{Deserialize, Serialize};
use thiserror::Error;

//--------------------------------------     MinorUnits       --------------------------------------------------------
/// An amount of money in the smallest denomination of its currency (e.g. cents).
///
/// Amounts are never negative, and arithmetic on them is checked: adding two amounts whose sum does not fit into 64
/// bits is an error rather than a silent wrap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MinorUnits(u64);

#[derive(Debug, Clone, Error)]
#[error("Amount overflow: {0} + {1} does not fit into 64 bits")]
pub struct AmountOverflowError(pub MinorUnits, pub MinorUnits);

impl From<u64> for MinorUnits {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl MinorUnits {
    pub const ZERO: MinorUnits = MinorUnits(0);

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn checked_add(self, rhs: Self) -> Result<Self, AmountOverflowError> {
        self.0.checked_add(rhs.0).map(Self).ok_or(AmountOverflowError(self, rhs))
    }

    /// Sums an iterator of amounts, failing on the first addition that would overflow.
    pub fn try_sum<I: IntoIterator<Item = Self>>(iter: I) -> Result<Self, AmountOverflowError> {
        iter.into_iter().try_fold(Self::ZERO, Self::checked_add)
    }
}

impl Display for MinorUnits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}
