//! Parse-or-nothing helpers and adapters producing [`Maybe`] values.
//!
//! None of these helpers panic: input that cannot be converted yields
//! [`Maybe::None`].

#[cfg(feature = "datetime")]
mod datetime;
mod first;
mod nullable;

use std::str::FromStr;

use optionally::Maybe;

#[cfg(feature = "datetime")]
pub use datetime::to_date_time;
pub use first::FirstExt;
pub use nullable::ToMaybe;

pub mod exts {
    pub use super::FirstExt;
    pub use super::ToMaybe;
}

/// Parses `input` with [`FromStr`], ignoring surrounding whitespace.
pub fn parse<T: FromStr>(input: &str) -> Maybe<T> {
    match input.trim().parse() {
        Ok(value) => Maybe::Some(value),
        Err(_) => {
            tracing::trace!(input, target_type = std::any::type_name::<T>(), "unparseable input");
            Maybe::None
        }
    }
}

pub fn to_int(input: &str) -> Maybe<i32> {
    parse(input)
}

pub fn to_double(input: &str) -> Maybe<f64> {
    parse(input)
}

/// Accepts `true`/`false` in any letter case. Numeric forms like `0` and `1`
/// are rejected.
pub fn to_bool(input: &str) -> Maybe<bool> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("true") {
        Maybe::Some(true)
    } else if input.eq_ignore_ascii_case("false") {
        Maybe::Some(false)
    } else {
        tracing::trace!(input, "not a boolean");
        Maybe::None
    }
}

#[test]
fn test_to_int() {
    assert_eq!(to_int("42"), Maybe::some(42));
    assert_eq!(to_int(" -7 "), Maybe::some(-7));
    assert_eq!(to_int("kumquats"), Maybe::none());
    assert_eq!(to_int("4.5"), Maybe::none());
    assert_eq!(to_int("99999999999"), Maybe::none());
    assert_eq!(to_int(""), Maybe::none());
}

#[test]
fn test_to_double() {
    assert_eq!(to_double("4.5"), Maybe::some(4.5));
    assert_eq!(to_double("12"), Maybe::some(12.0));
    assert_eq!(to_double("kumquats"), Maybe::none());
}

#[test]
fn test_to_bool() {
    assert_eq!(to_bool("true"), Maybe::some(true));
    assert_eq!(to_bool("False"), Maybe::some(false));
    assert_eq!(to_bool("0"), Maybe::none());
    assert_eq!(to_bool("word"), Maybe::none());
}

#[test]
fn test_parse_generic() {
    assert_eq!(parse::<u8>("255"), Maybe::some(255));
    assert_eq!(parse::<u8>("256"), Maybe::none());
    assert_eq!(parse::<char>("x"), Maybe::some('x'));
}
