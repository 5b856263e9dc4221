//! Optional values and success-or-failure outcomes, with combinators for
//! mapping, chaining, filtering, lifting multi-argument functions and
//! turning panicking calls into values.
//!
//! ```
//! use optionally::{maybe, outcome, Maybe, Outcome};
//!
//! let add = |a: i32, b: i32| a + b;
//! assert_eq!(maybe::apply2(add, Maybe::some(2), Maybe::some(4)), Maybe::some(6));
//! assert_eq!(maybe::apply2(add, Maybe::some(2), Maybe::none()), Maybe::none());
//!
//! let parsed: Outcome<i32, _> = outcome::attempt(|| "10".parse::<i32>());
//! assert_eq!(parsed.to_string(), "Success of '10'");
//! ```

mod caught;
pub mod dispatch;
mod error;
pub mod hkt;
pub mod maybe;
pub mod outcome;

pub use caught::Caught;
pub use dispatch::{MaybeArms, OutcomeArms};
pub use error::InvalidArgument;
pub use maybe::Maybe;
pub use outcome::Outcome;

pub mod prelude {
    pub use super::hkt::{Functor, FunctorResultExt};
    pub use super::Maybe;
    pub use super::Outcome;
}
