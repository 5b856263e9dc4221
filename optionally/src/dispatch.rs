//! Dispatch with arms supplied one at a time.
//!
//! [`Maybe::match_with`] and [`Outcome::match_with`] take both arms up front,
//! so a missing arm cannot compile. When arms are registered conditionally,
//! these builders check at [`run`](MaybeArms::run) time that both are
//! present, failing with [`InvalidArgument`] before anything is invoked.
//!
//! ```
//! use optionally::Maybe;
//!
//! let label = Maybe::some(3)
//!     .arms()
//!     .on_some(|n| format!("{} items", n))
//!     .on_none(|| "empty".to_owned())
//!     .run()
//!     .unwrap();
//! assert_eq!(label, "3 items");
//!
//! let err = Maybe::some(3).arms::<()>().on_some(drop).run().unwrap_err();
//! assert_eq!(err.to_string(), "callback required: on_none");
//! ```

use crate::{error::InvalidArgument, maybe::Maybe, outcome::Outcome};

type Arm<'a, A, U> = Box<dyn FnOnce(A) -> U + 'a>;
type EmptyArm<'a, U> = Box<dyn FnOnce() -> U + 'a>;

fn required<A>(arm: Option<A>, name: &'static str) -> Result<A, InvalidArgument> {
    arm.ok_or_else(|| InvalidArgument::missing(name))
}

pub struct MaybeArms<'a, T, U> {
    value: Maybe<T>,
    on_some: Option<Arm<'a, T, U>>,
    on_none: Option<EmptyArm<'a, U>>,
}

impl<'a, T, U> MaybeArms<'a, T, U> {
    pub(crate) fn new(value: Maybe<T>) -> Self {
        Self {
            value,
            on_some: None,
            on_none: None,
        }
    }

    pub fn on_some(mut self, f: impl FnOnce(T) -> U + 'a) -> Self {
        self.on_some = Some(Box::new(f));
        self
    }

    pub fn on_none(mut self, f: impl FnOnce() -> U + 'a) -> Self {
        self.on_none = Some(Box::new(f));
        self
    }

    /// Invokes the arm matching the value. Both arms must have been set.
    pub fn run(self) -> Result<U, InvalidArgument> {
        let on_some = required(self.on_some, "on_some")?;
        let on_none = required(self.on_none, "on_none")?;
        Ok(self.value.match_with(on_none, on_some))
    }
}

pub struct OutcomeArms<'a, S, F, U> {
    value: Outcome<S, F>,
    on_success: Option<Arm<'a, S, U>>,
    on_failure: Option<Arm<'a, F, U>>,
}

impl<'a, S, F, U> OutcomeArms<'a, S, F, U> {
    pub(crate) fn new(value: Outcome<S, F>) -> Self {
        Self {
            value,
            on_success: None,
            on_failure: None,
        }
    }

    pub fn on_success(mut self, f: impl FnOnce(S) -> U + 'a) -> Self {
        self.on_success = Some(Box::new(f));
        self
    }

    pub fn on_failure(mut self, f: impl FnOnce(F) -> U + 'a) -> Self {
        self.on_failure = Some(Box::new(f));
        self
    }

    /// Invokes the arm matching the value. Both arms must have been set.
    pub fn run(self) -> Result<U, InvalidArgument> {
        let on_failure = required(self.on_failure, "on_failure")?;
        let on_success = required(self.on_success, "on_success")?;
        Ok(self.value.match_with(on_failure, on_success))
    }
}

#[cfg(test)]
use std::cell::Cell;

#[test]
fn test_maybe_arms_run_one_branch() {
    let calls = Cell::new(0);
    let doubled = Maybe::some(4)
        .arms()
        .on_none(|| {
            calls.set(calls.get() + 1);
            0
        })
        .on_some(|v| v * 2)
        .run();
    assert_eq!(doubled, Ok(8));
    assert_eq!(calls.get(), 0);

    let fallback = Maybe::<i32>::none()
        .arms()
        .on_some(|v| v * 2)
        .on_none(|| -1)
        .run();
    assert_eq!(fallback, Ok(-1));
}

#[test]
fn test_maybe_arms_missing_callback() {
    let called = Cell::new(false);
    let result = Maybe::some(5)
        .arms()
        .on_some(|_| called.set(true))
        .run();
    assert_eq!(result, Err(InvalidArgument::missing("on_none")));
    assert!(!called.get());

    let result = Maybe::<i32>::none().arms::<()>().on_none(|| ()).run();
    assert_eq!(result, Err(InvalidArgument::missing("on_some")));
}

#[test]
fn test_outcome_arms() {
    let length = Outcome::<usize, &str>::failure("kumquats")
        .arms()
        .on_failure(str::len)
        .on_success(|i| i)
        .run();
    assert_eq!(length, Ok(8));

    let missing = Outcome::<usize, &str>::success(10)
        .arms()
        .on_success(|i| i)
        .run();
    assert_eq!(missing, Err(InvalidArgument::missing("on_failure")));

    let missing = Outcome::<usize, &str>::failure("kumquats")
        .arms()
        .on_failure(str::len)
        .run();
    assert_eq!(missing, Err(InvalidArgument::missing("on_success")));
}

#[test]
fn test_arms_registered_conditionally() {
    let verbose = false;
    let mut arms = Outcome::<i32, String>::success(1).arms();
    arms = arms.on_success(|v| v.to_string());
    if verbose {
        arms = arms.on_failure(|e| e);
    }
    assert!(arms.run().is_err());
}
