//! The success-or-failure type and its free-function combinators.
//!
//! [`apply2`]/[`apply3`] accumulate every failure instead of stopping at the
//! first one, which is what distinguishes them from chaining with
//! [`Outcome::and_then`]:
//!
//! ```
//! use optionally::outcome::{self, Outcome};
//!
//! let add3 = |a: i32, b: i32, c: i32| a + b + c;
//! let applied = outcome::apply3(
//!     add3,
//!     Outcome::failure("a"),
//!     Outcome::success(4),
//!     Outcome::failure("c"),
//! );
//! assert_eq!(applied, Outcome::failure(vec!["a", "c"]));
//! ```

use std::fmt::Display;

use crate::{
    caught::{self, Caught},
    dispatch::OutcomeArms,
    maybe::Maybe,
};

/// Either a success payload `S` or a failure payload `F`.
#[must_use = "an Outcome may be a Failure, which should be handled"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<S, F> {
    Success(S),
    Failure(F),
}

impl<S, F> Outcome<S, F> {
    #[inline]
    pub const fn success(value: S) -> Self {
        Self::Success(value)
    }

    #[inline]
    pub const fn failure(value: F) -> Self {
        Self::Failure(value)
    }

    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    #[inline]
    pub const fn as_ref(&self) -> Outcome<&S, &F> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// The success payload, discarding any failure.
    pub fn success_value(self) -> Maybe<S> {
        match self {
            Self::Success(value) => Maybe::Some(value),
            Self::Failure(_) => Maybe::None,
        }
    }

    /// The failure payload, discarding any success.
    pub fn failure_value(self) -> Maybe<F> {
        match self {
            Self::Success(_) => Maybe::None,
            Self::Failure(failure) => Maybe::Some(failure),
        }
    }

    /// Transforms the success payload. Failures pass through untouched.
    #[inline]
    pub fn map<U, M>(self, f: M) -> Outcome<U, F>
    where
        M: FnOnce(S) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }

    #[inline]
    pub fn map_failure<G, M>(self, f: M) -> Outcome<S, G>
    where
        M: FnOnce(F) -> G,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(failure) => Outcome::Failure(f(failure)),
        }
    }

    /// Transforms whichever payload is present, leaving the other mapper
    /// uncalled.
    pub fn bi_map<G, U, MF, MS>(self, map_failure: MF, map_success: MS) -> Outcome<U, G>
    where
        MF: FnOnce(F) -> G,
        MS: FnOnce(S) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(map_success(value)),
            Self::Failure(failure) => Outcome::Failure(map_failure(failure)),
        }
    }

    /// Chains on success; a failure short-circuits without calling `f`.
    #[inline]
    pub fn and_then<U, M>(self, f: M) -> Outcome<U, F>
    where
        M: FnOnce(S) -> Outcome<U, F>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Runs exactly one of the two callbacks for its side effects.
    pub fn perform<OS, OF>(self, on_success: OS, on_failure: OF)
    where
        OS: FnOnce(S),
        OF: FnOnce(F),
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(failure) => on_failure(failure),
        }
    }

    /// Collapses both states into a single value.
    pub fn match_with<U, OF, OS>(self, on_failure: OF, on_success: OS) -> U
    where
        OF: FnOnce(F) -> U,
        OS: FnOnce(S) -> U,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(failure) => on_failure(failure),
        }
    }

    /// Starts a dispatch whose arms are supplied one at a time.
    ///
    /// See [`OutcomeArms`].
    pub fn arms<'a, U>(self) -> OutcomeArms<'a, S, F, U> {
        OutcomeArms::new(self)
    }

    #[inline]
    pub fn unwrap_or(self, default: S) -> S {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    #[inline]
    pub fn unwrap_or_else<D>(self, default: D) -> S
    where
        D: FnOnce(F) -> S,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(failure) => default(failure),
        }
    }

    #[inline]
    pub fn into_result(self) -> Result<S, F> {
        self.into()
    }

    /// Converts into an [`anyhow::Result`] so the failure can be
    /// propagated with `?`.
    pub fn into_anyhow(self) -> anyhow::Result<S>
    where
        F: Into<anyhow::Error>,
    {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(failure) => Err(failure.into()),
        }
    }
}

impl<S, F> Outcome<Maybe<S>, F> {
    pub fn transpose(self) -> Maybe<Outcome<S, F>> {
        match self {
            Self::Success(Maybe::Some(value)) => Maybe::Some(Outcome::Success(value)),
            Self::Success(Maybe::None) => Maybe::None,
            Self::Failure(failure) => Maybe::Some(Outcome::Failure(failure)),
        }
    }
}

impl<S, F> From<Result<S, F>> for Outcome<S, F> {
    fn from(value: Result<S, F>) -> Self {
        match value {
            Ok(value) => Self::Success(value),
            Err(failure) => Self::Failure(failure),
        }
    }
}

impl<S, F> From<Outcome<S, F>> for Result<S, F> {
    fn from(value: Outcome<S, F>) -> Self {
        match value {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(failure) => Err(failure),
        }
    }
}

impl<S: Display, F: Display> Display for Outcome<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success(value) => write!(f, "Success of '{}'", value),
            Self::Failure(failure) => write!(f, "Failure of '{}'", failure),
        }
    }
}

fn collect_failure<S, F>(outcome: Outcome<S, F>, failures: &mut Vec<F>) {
    if let Outcome::Failure(failure) = outcome {
        failures.push(failure);
    }
}

/// Calls `f` if both inputs succeeded, otherwise fails with every failure
/// payload in argument order.
pub fn apply2<A, B, R, F, M>(f: M, first: Outcome<A, F>, second: Outcome<B, F>) -> Outcome<R, Vec<F>>
where
    M: FnOnce(A, B) -> R,
{
    match (first, second) {
        (Outcome::Success(a), Outcome::Success(b)) => Outcome::Success(f(a, b)),
        (first, second) => {
            let mut failures = Vec::with_capacity(2);
            collect_failure(first, &mut failures);
            collect_failure(second, &mut failures);
            Outcome::Failure(failures)
        }
    }
}

/// Three-argument form of [`apply2`].
pub fn apply3<A, B, C, R, F, M>(
    f: M,
    first: Outcome<A, F>,
    second: Outcome<B, F>,
    third: Outcome<C, F>,
) -> Outcome<R, Vec<F>>
where
    M: FnOnce(A, B, C) -> R,
{
    match (first, second, third) {
        (Outcome::Success(a), Outcome::Success(b), Outcome::Success(c)) => {
            Outcome::Success(f(a, b, c))
        }
        (first, second, third) => {
            let mut failures = Vec::with_capacity(3);
            collect_failure(first, &mut failures);
            collect_failure(second, &mut failures);
            collect_failure(third, &mut failures);
            Outcome::Failure(failures)
        }
    }
}

/// Runs `f`, capturing a panic as the failure payload.
pub fn wrap<T, M>(f: M) -> Outcome<T, Caught>
where
    M: FnOnce() -> T,
{
    caught::catch(f).into()
}

/// Runs a fallible `f`, keeping its error as the failure payload.
pub fn attempt<T, E, M>(f: M) -> Outcome<T, E>
where
    M: FnOnce() -> Result<T, E>,
{
    f().into()
}

#[cfg(test)]
use std::cell::Cell;

#[test]
fn test_map() {
    assert_eq!(
        Outcome::<i32, &str>::success(2).map(|x| x + 1),
        Outcome::success(3)
    );

    let called = Cell::new(false);
    let mapped = Outcome::<i32, &str>::failure("kumquats").map(|x| {
        called.set(true);
        x + 1
    });
    assert_eq!(mapped, Outcome::failure("kumquats"));
    assert!(!called.get());
}

#[test]
fn test_map_failure() {
    let failed = Outcome::<i32, &str>::failure("kumquats").map_failure(str::len);
    assert_eq!(failed, Outcome::failure(8));
    let passed = Outcome::<i32, &str>::success(1).map_failure(str::len);
    assert_eq!(passed, Outcome::success(1));
}

#[test]
fn test_bi_map() {
    let (failure_called, success_called) = (Cell::new(false), Cell::new(false));
    let mapped = Outcome::<i32, anyhow::Error>::failure(anyhow::anyhow!("Some message")).bi_map(
        |e| {
            failure_called.set(true);
            e.to_string()
        },
        |i| {
            success_called.set(true);
            i
        },
    );
    assert_eq!(mapped, Outcome::failure("Some message".to_owned()));
    assert!(failure_called.get() && !success_called.get());

    let (failure_called, success_called) = (Cell::new(false), Cell::new(false));
    let mapped = Outcome::<i32, anyhow::Error>::success(5).bi_map(
        |e| {
            failure_called.set(true);
            e.to_string()
        },
        |i| {
            success_called.set(true);
            f64::from(i)
        },
    );
    assert_eq!(mapped, Outcome::success(5.0));
    assert!(success_called.get() && !failure_called.get());
}

#[test]
fn test_and_then() {
    let checked = |x: i32| {
        if x > 0 {
            Outcome::success(x * 2)
        } else {
            Outcome::failure("not positive")
        }
    };
    assert_eq!(Outcome::success(2).and_then(checked), Outcome::success(4));
    assert_eq!(Outcome::success(-2).and_then(checked), Outcome::failure("not positive"));

    let called = Cell::new(false);
    let chained = Outcome::<i32, &str>::failure("first").and_then(|x| {
        called.set(true);
        checked(x)
    });
    assert_eq!(chained, Outcome::failure("first"));
    assert!(!called.get());
}

#[test]
fn test_perform_runs_one_callback() {
    let (success, failure) = (Cell::new(0), Cell::new(0));
    Outcome::<i32, i32>::success(5).perform(|v| success.set(v), |v| failure.set(v));
    assert_eq!((success.get(), failure.get()), (5, 0));

    let (success, failure) = (Cell::new(0), Cell::new(0));
    Outcome::<i32, i32>::failure(7).perform(|v| success.set(v), |v| failure.set(v));
    assert_eq!((success.get(), failure.get()), (0, 7));
}

#[test]
fn test_match_with() {
    let on_failure = |s: &str| s.len();
    let on_success = |i: usize| i;
    assert_eq!(Outcome::failure("kumquats").match_with(on_failure, on_success), 8);
    assert_eq!(Outcome::success(10).match_with(on_failure, on_success), 10);
}

#[test]
fn test_display() {
    assert_eq!(Outcome::<i32, &str>::failure("x").to_string(), "Failure of 'x'");
    assert_eq!(Outcome::<i32, &str>::success(10).to_string(), "Success of '10'");
}

#[test]
fn test_payload_accessors() {
    let ok = Outcome::<i32, &str>::success(1);
    let failed = Outcome::<i32, &str>::failure("bad");
    assert_eq!(ok.success_value(), Maybe::some(1));
    assert_eq!(ok.failure_value(), Maybe::none());
    assert_eq!(failed.success_value(), Maybe::none());
    assert_eq!(failed.failure_value(), Maybe::some("bad"));
    assert_eq!(failed.unwrap_or(0), 0);
    assert_eq!(failed.unwrap_or_else(|f| f.len() as i32), 3);
    assert_eq!(ok.into_result(), Ok(1));
    assert_eq!(Outcome::from(Err::<i32, _>("bad")), failed);
}

#[test]
fn test_transpose() {
    let present: Outcome<Maybe<i32>, &str> = Outcome::success(Maybe::some(1));
    assert_eq!(present.transpose(), Maybe::some(Outcome::success(1)));
    let absent: Outcome<Maybe<i32>, &str> = Outcome::success(Maybe::none());
    assert_eq!(absent.transpose(), Maybe::none());
    let failed: Outcome<Maybe<i32>, &str> = Outcome::failure("bad");
    assert_eq!(failed.transpose(), Maybe::some(Outcome::failure("bad")));
}

#[test]
fn test_into_anyhow() -> anyhow::Result<()> {
    let value = Outcome::<i32, std::num::ParseIntError>::from("12".parse::<i32>()).into_anyhow()?;
    assert_eq!(value, 12);

    let failed = Outcome::<i32, _>::failure(crate::InvalidArgument::missing("on_some")).into_anyhow();
    assert_eq!(failed.unwrap_err().to_string(), "callback required: on_some");
    Ok(())
}

#[test]
fn test_apply2() {
    let add = |a: i32, b: i32| a + b;
    assert_eq!(
        apply2(add, Outcome::<_, &str>::success(2), Outcome::success(4)),
        Outcome::success(6)
    );
    assert_eq!(
        apply2(add, Outcome::success(2), Outcome::failure("b")),
        Outcome::failure(vec!["b"])
    );
    assert_eq!(
        apply2(add, Outcome::failure("a"), Outcome::failure("b")),
        Outcome::failure(vec!["a", "b"])
    );
}

#[test]
fn test_apply3_accumulates_in_order() {
    let add3 = |a: i32, b: i32, c: i32| a + b + c;
    assert_eq!(
        apply3(add3, Outcome::failure("a"), Outcome::success(4), Outcome::failure("c")),
        Outcome::failure(vec!["a", "c"])
    );
    assert_eq!(
        apply3(add3, Outcome::<_, &str>::success(1), Outcome::success(2), Outcome::success(3)),
        Outcome::success(6)
    );

    let called = Cell::new(false);
    let applied = apply3(
        |a: i32, b: i32, c: i32| {
            called.set(true);
            a + b + c
        },
        Outcome::success(1),
        Outcome::success(2),
        Outcome::failure("c"),
    );
    assert_eq!(applied, Outcome::failure(vec!["c"]));
    assert!(!called.get());
}

#[test]
fn test_wrap() {
    #[derive(Debug, PartialEq)]
    struct Boom(&'static str);

    assert_eq!(wrap(|| 2).success_value(), Maybe::some(2));

    let failed = wrap(|| -> i32 { std::panic::panic_any(Boom("E")) });
    let caught = failed.failure_value().unwrap_or_else(|| panic!("expected failure"));
    assert_eq!(caught.downcast_ref::<Boom>(), Some(&Boom("E")));
}

#[test]
fn test_attempt() {
    #[derive(Debug, PartialEq)]
    struct Invalid(String);

    let parse = |s: &str| s.parse::<u8>().map_err(|_| Invalid(s.to_owned()));
    assert_eq!(attempt(|| parse("8")), Outcome::success(8));
    assert_eq!(
        attempt(|| parse("kumquats")),
        Outcome::failure(Invalid("kumquats".to_owned()))
    );
}
