//! This crate identifies the majority element of a sequence, i.e., the value
//! occupying strictly more than half of the positions, when elements can only
//! be compared for equality. Neither ordering nor hashing is required.
//!
//! The main entry point is [`MajorityFinder`], a linear-time finder that
//! instruments its work with [`OpCounts`]. [`MajorityFinderNaive`] is kept as a
//! quadratic baseline for comparison.

pub mod algorithms;
pub use algorithms::{MajorityFinder, MajorityFinderNaive, OpCounts, Outcome};

pub mod error;
pub use error::MajorityError;

pub mod gen_sequences;

pub mod utils;

/// A trait for the search of the majority element over an equality-only domain.
pub trait FindMajority {
    /// Returns the element occupying strictly more than half of `seq`, or
    /// [`None`] if there is no such element, together with the operations spent.
    ///
    /// # Errors
    /// Returns [`MajorityError::InvalidArgument`] if `seq` is empty.
    fn find<'a, T: PartialEq>(&self, seq: &'a [T]) -> Result<Outcome<'a, T>, MajorityError>;

    /// Returns a human readable name of the finder, used in logs and reports.
    fn name(&self) -> &'static str;
}
