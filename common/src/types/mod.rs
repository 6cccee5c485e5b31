use std::fmt;
use std::fmt::Formatter;

pub mod input;
pub mod range;
pub mod record;

/// Identifier of a trip as given in the input table. It is carried through to the output
/// untouched, so it doesn't need to be continuous or unique.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct TripId(pub i64);

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
