//! The optional value type and its free-function combinators.

use std::fmt::Display;

use crate::{caught, dispatch::MaybeArms, outcome::Outcome};

/// Presence (`Some`) or absence (`None`) of a value.
#[must_use = "a Maybe may be None, which should be handled"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<T> {
    Some(T),
    None,
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::None
    }
}

impl<T> Maybe<T> {
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    #[inline]
    pub const fn none() -> Self {
        Self::None
    }

    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    /// Transforms the value, if present. `f` is not called on `None`.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Maybe::Some(f(value)),
            Self::None => Maybe::None,
        }
    }

    /// Chains a computation that may itself produce nothing.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Some(value) => f(value),
            Self::None => Maybe::None,
        }
    }

    /// Keeps the value only if `predicate` holds for it.
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => {
                if predicate(&value) {
                    Self::Some(value)
                } else {
                    Self::None
                }
            }
            Self::None => Self::None,
        }
    }

    /// Runs exactly one of the two callbacks for its side effects.
    pub fn perform<S, N>(self, on_some: S, on_none: N)
    where
        S: FnOnce(T),
        N: FnOnce(),
    {
        match self {
            Self::Some(value) => on_some(value),
            Self::None => on_none(),
        }
    }

    /// Collapses both states into a single value.
    pub fn match_with<U, N, S>(self, on_none: N, on_some: S) -> U
    where
        N: FnOnce() -> U,
        S: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => on_some(value),
            Self::None => on_none(),
        }
    }

    /// Starts a dispatch whose arms are supplied one at a time.
    ///
    /// See [`MaybeArms`].
    pub fn arms<'a, U>(self) -> MaybeArms<'a, T, U> {
        MaybeArms::new(self)
    }

    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    #[inline]
    pub fn unwrap_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => default(),
        }
    }

    pub fn ok_or<F>(self, failure: F) -> Outcome<T, F> {
        match self {
            Self::Some(value) => Outcome::Success(value),
            Self::None => Outcome::Failure(failure),
        }
    }

    pub fn ok_or_else<F, E>(self, failure: E) -> Outcome<T, F>
    where
        E: FnOnce() -> F,
    {
        match self {
            Self::Some(value) => Outcome::Success(value),
            Self::None => Outcome::Failure(failure()),
        }
    }

    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T, F> Maybe<Outcome<T, F>> {
    pub fn transpose(self) -> Outcome<Maybe<T>, F> {
        match self {
            Self::Some(Outcome::Success(value)) => Outcome::Success(Maybe::Some(value)),
            Self::Some(Outcome::Failure(failure)) => Outcome::Failure(failure),
            Self::None => Outcome::Success(Maybe::None),
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        match value {
            Maybe::Some(value) => Some(value),
            Maybe::None => None,
        }
    }
}

impl<T: Display> Display for Maybe<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Some(value) => write!(f, "Some of '{}'", value),
            Self::None => f.write_str("None"),
        }
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Maybe<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Some(value) => serializer.serialize_some(value),
            Self::None => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Maybe<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Option<T> as serde::Deserialize>::deserialize(deserializer).map(Maybe::from)
    }
}

/// Calls `f` with both values if both are present.
pub fn apply2<A, B, R, F>(f: F, first: Maybe<A>, second: Maybe<B>) -> Maybe<R>
where
    F: FnOnce(A, B) -> R,
{
    match (first, second) {
        (Maybe::Some(a), Maybe::Some(b)) => Maybe::Some(f(a, b)),
        _ => Maybe::None,
    }
}

/// Calls `f` with all three values if all are present.
pub fn apply3<A, B, C, R, F>(f: F, first: Maybe<A>, second: Maybe<B>, third: Maybe<C>) -> Maybe<R>
where
    F: FnOnce(A, B, C) -> R,
{
    match (first, second, third) {
        (Maybe::Some(a), Maybe::Some(b), Maybe::Some(c)) => Maybe::Some(f(a, b, c)),
        _ => Maybe::None,
    }
}

/// Runs `f`, mapping a panic to `None`. The panic itself is dropped.
pub fn wrap<T, F>(f: F) -> Maybe<T>
where
    F: FnOnce() -> T,
{
    caught::catch(f).ok().into()
}

/// Runs a fallible `f`, mapping `Err` to `None`.
pub fn attempt<T, E, F>(f: F) -> Maybe<T>
where
    F: FnOnce() -> Result<T, E>,
{
    f().ok().into()
}

#[cfg(test)]
use std::cell::Cell;

#[test]
fn test_map() {
    assert_eq!(Maybe::some(2).map(|x| x * 10), Maybe::some(20));
    assert_eq!(Maybe::some(2).map(|x| x.to_string()), Maybe::some("2".to_owned()));

    let called = Cell::new(false);
    let mapped = Maybe::<i32>::none().map(|x| {
        called.set(true);
        x + 1
    });
    assert_eq!(mapped, Maybe::none());
    assert!(!called.get());
}

#[test]
fn test_and_then() {
    let half = |x: i32| if x % 2 == 0 { Maybe::some(x / 2) } else { Maybe::none() };
    assert_eq!(Maybe::some(8).and_then(half), Maybe::some(4));
    assert_eq!(Maybe::some(3).and_then(half), Maybe::none());

    let called = Cell::new(false);
    let chained = Maybe::<i32>::none().and_then(|x| {
        called.set(true);
        Maybe::some(x)
    });
    assert_eq!(chained, Maybe::none());
    assert!(!called.get());
}

#[test]
fn test_filter() {
    let is_even = |x: &i32| x % 2 == 0;
    assert_eq!(Maybe::some(2).filter(is_even), Maybe::some(2));
    assert_eq!(Maybe::some(3).filter(is_even), Maybe::none());

    let called = Cell::new(false);
    let filtered = Maybe::<i32>::none().filter(|_| {
        called.set(true);
        true
    });
    assert_eq!(filtered, Maybe::none());
    assert!(!called.get());
}

#[test]
fn test_perform_runs_one_callback() {
    let (some, none) = (Cell::new(0), Cell::new(0));
    Maybe::some(5).perform(|v| some.set(some.get() + v), || none.set(none.get() + 1));
    assert_eq!((some.get(), none.get()), (5, 0));

    let (some, none) = (Cell::new(0), Cell::new(0));
    Maybe::<i32>::none().perform(|v| some.set(some.get() + v), || none.set(none.get() + 1));
    assert_eq!((some.get(), none.get()), (0, 1));
}

#[test]
fn test_match_with() {
    assert_eq!(Maybe::some(4).match_with(|| -1, |v| v * 2), 8);
    assert_eq!(Maybe::<i32>::none().match_with(|| -1, |v| v * 2), -1);
}

#[test]
fn test_display() {
    assert_eq!(Maybe::<i32>::none().to_string(), "None");
    assert_eq!(Maybe::some(5).to_string(), "Some of '5'");
    assert_eq!(Maybe::some("kumquats").to_string(), "Some of 'kumquats'");
}

#[test]
fn test_equality() {
    assert_eq!(Maybe::<i32>::none(), Maybe::none());
    assert_ne!(Maybe::some(1), Maybe::none());
    assert_ne!(Maybe::some(1), Maybe::some(2));
    assert_eq!(Maybe::<u8>::default(), Maybe::none());
}

#[test]
fn test_option_conversions() {
    assert_eq!(Maybe::from(Some(3)), Maybe::some(3));
    assert_eq!(Maybe::<i32>::from(None), Maybe::none());
    assert_eq!(Maybe::some(3).into_option(), Some(3));
    assert_eq!(Maybe::some(3).ok_or("missing"), Outcome::success(3));
    assert_eq!(Maybe::<i32>::none().ok_or("missing"), Outcome::failure("missing"));
    assert_eq!(Maybe::<i32>::none().ok_or_else(|| 0u8), Outcome::failure(0u8));
}

#[test]
fn test_transpose() {
    let ok: Maybe<Outcome<i32, &str>> = Maybe::some(Outcome::success(1));
    assert_eq!(ok.transpose(), Outcome::success(Maybe::some(1)));
    let failed: Maybe<Outcome<i32, &str>> = Maybe::some(Outcome::failure("bad"));
    assert_eq!(failed.transpose(), Outcome::failure("bad"));
    let empty: Maybe<Outcome<i32, &str>> = Maybe::none();
    assert_eq!(empty.transpose(), Outcome::success(Maybe::none()));
}

#[test]
fn test_apply() {
    let add = |a: i32, b: i32| a + b;
    assert_eq!(apply2(add, Maybe::some(2), Maybe::some(4)), Maybe::some(6));
    assert_eq!(apply2(add, Maybe::some(2), Maybe::none()), Maybe::none());
    assert_eq!(apply2(add, Maybe::none(), Maybe::some(4)), Maybe::none());

    let add3 = |a: i32, b: i32, c: i32| a + b + c;
    assert_eq!(
        apply3(add3, Maybe::some(1), Maybe::some(2), Maybe::some(3)),
        Maybe::some(6)
    );
    assert_eq!(
        apply3(add3, Maybe::some(1), Maybe::none(), Maybe::some(3)),
        Maybe::none()
    );

    let called = Cell::new(false);
    let applied = apply2(
        |a: i32, b: i32| {
            called.set(true);
            a * b
        },
        Maybe::none(),
        Maybe::some(1),
    );
    assert_eq!(applied, Maybe::none());
    assert!(!called.get());
}

#[test]
fn test_apply_mixed_types() {
    let label = |name: &str, count: usize| format!("{}x{}", name, count);
    assert_eq!(
        apply2(label, Maybe::some("apple"), Maybe::some(3)),
        Maybe::some("applex3".to_owned())
    );
}

#[test]
fn test_wrap() {
    assert_eq!(wrap(|| 2), Maybe::some(2));
    assert_eq!(wrap(|| -> i32 { panic!("boom") }), Maybe::none());

    let values: Vec<i32> = vec![];
    assert_eq!(wrap(|| values[3]), Maybe::none());
}

#[test]
fn test_attempt() {
    assert_eq!(attempt(|| "42".parse::<i32>()), Maybe::some(42));
    assert_eq!(attempt(|| "kumquats".parse::<i32>()), Maybe::none());
}
