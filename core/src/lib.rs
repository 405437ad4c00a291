//! Optional and success-or-failure containers with a chainable combinator API.
//!
//! [`Optional`] is either present with a value or absent; [`Outcome`] is either a success with a value or a failure
//! with an error value. Absence and failure are ordinary values that combinators propagate. Only asking a container
//! for a value it does not hold, through the `unwrap` family of accessors, signals an [`AccessError`].

pub mod optional;
pub mod outcome;
pub mod error;
pub mod convert;

mod trace;

pub use error::AccessError;
pub use optional::Optional;
pub use outcome::Outcome;
