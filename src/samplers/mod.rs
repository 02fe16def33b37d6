//! Sampling primitives for each supported column type.
//!
//! Every function draws independently per row using the caller's RNG, so a
//! seeded `StdRng` yields reproducible columns. Argument validation lives in
//! the builder; functions here document their preconditions instead of
//! re-checking them.

pub mod choice;
pub mod datetime;
pub mod numeric;
