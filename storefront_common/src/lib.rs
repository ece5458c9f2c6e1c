mod minor_units;
mod secret;

pub use minor_units::{AmountOverflowError, MinorUnits};
pub use secret::Secret;
