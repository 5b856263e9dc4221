//! Type-level tags for writing code generic over the container kind.
//!
//! ```
//! use optionally::hkt::{Functor, MaybeTy, OutcomeTy, UnaryTy};
//! use optionally::{Maybe, Outcome};
//!
//! fn describe<M: Functor>(value: M::Out<u32>) -> M::Out<String> {
//!     M::map(value, |n| format!("#{}", n))
//! }
//!
//! assert_eq!(describe::<MaybeTy>(Maybe::some(7)), Maybe::some("#7".to_owned()));
//! assert_eq!(
//!     describe::<OutcomeTy<&str>>(Outcome::failure("bad")),
//!     Outcome::failure("bad")
//! );
//! ```

use std::marker::PhantomData;

use crate::{maybe::Maybe, outcome::Outcome};

pub trait UnaryTy {
    type Out<T>;
}

pub trait Functor: UnaryTy {
    fn wrap<T>(value: T) -> Self::Out<T>;
    fn map<T, U, F>(value: Self::Out<T>, f: F) -> Self::Out<U>
    where
        F: FnOnce(T) -> U;
    fn map_ref<'a, T: 'a, U, F>(value: &'a Self::Out<T>, f: F) -> Self::Out<U>
    where
        F: FnOnce(&'a T) -> U;
}

pub struct MaybeTy;

impl UnaryTy for MaybeTy {
    type Out<T> = Maybe<T>;
}

impl Functor for MaybeTy {
    fn wrap<T>(value: T) -> Self::Out<T> {
        Maybe::Some(value)
    }
    fn map<T, U, F>(value: Self::Out<T>, f: F) -> Self::Out<U>
    where
        F: FnOnce(T) -> U,
    {
        value.map(f)
    }
    fn map_ref<'a, T: 'a, U, F>(value: &'a Self::Out<T>, f: F) -> Self::Out<U>
    where
        F: FnOnce(&'a T) -> U,
    {
        value.as_ref().map(f)
    }
}

/// Tag for `Outcome<_, F>` with the failure type fixed.
pub struct OutcomeTy<F>(PhantomData<F>);

impl<E> UnaryTy for OutcomeTy<E> {
    type Out<T> = Outcome<T, E>;
}

impl<E: Clone> Functor for OutcomeTy<E> {
    fn wrap<T>(value: T) -> Self::Out<T> {
        Outcome::Success(value)
    }
    fn map<T, U, F>(value: Self::Out<T>, f: F) -> Self::Out<U>
    where
        F: FnOnce(T) -> U,
    {
        value.map(f)
    }
    fn map_ref<'a, T: 'a, U, F>(value: &'a Self::Out<T>, f: F) -> Self::Out<U>
    where
        F: FnOnce(&'a T) -> U,
    {
        value.as_ref().map(f).map_failure(E::clone)
    }
}

pub trait FunctorResultExt: UnaryTy {
    fn transpose<E, T>(v: Self::Out<Result<T, E>>) -> Result<Self::Out<T>, E>;
    fn map_transpose<E, T, F, U>(v: Self::Out<T>, f: F) -> Result<Self::Out<U>, E>
    where
        F: FnOnce(T) -> Result<U, E>;
}

impl FunctorResultExt for MaybeTy {
    fn transpose<E, T>(v: Maybe<Result<T, E>>) -> Result<Maybe<T>, E> {
        match v {
            Maybe::Some(Ok(value)) => Ok(Maybe::Some(value)),
            Maybe::Some(Err(err)) => Err(err),
            Maybe::None => Ok(Maybe::None),
        }
    }
    fn map_transpose<E, T, F, U>(v: Maybe<T>, f: F) -> Result<Maybe<U>, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        Self::transpose(v.map(f))
    }
}

impl<G> FunctorResultExt for OutcomeTy<G> {
    fn transpose<E, T>(v: Outcome<Result<T, E>, G>) -> Result<Outcome<T, G>, E> {
        match v {
            Outcome::Success(Ok(value)) => Ok(Outcome::Success(value)),
            Outcome::Success(Err(err)) => Err(err),
            Outcome::Failure(failure) => Ok(Outcome::Failure(failure)),
        }
    }
    fn map_transpose<E, T, F, U>(v: Outcome<T, G>, f: F) -> Result<Outcome<U, G>, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        Self::transpose(v.map(f))
    }
}

#[cfg(test)]
fn identity_holds<M>(value: M::Out<i32>) -> bool
where
    M: Functor,
    M::Out<i32>: PartialEq + Clone,
{
    M::map(value.clone(), |x| x) == value
}

#[test]
fn test_functor_identity() {
    assert!(identity_holds::<MaybeTy>(Maybe::some(1)));
    assert!(identity_holds::<MaybeTy>(Maybe::none()));
    assert!(identity_holds::<OutcomeTy<String>>(Outcome::success(1)));
    assert!(identity_holds::<OutcomeTy<String>>(Outcome::failure("x".into())));
}

#[test]
fn test_map_ref_keeps_source() {
    let source = Outcome::<String, String>::failure("bad".into());
    let lengths = OutcomeTy::<String>::map_ref(&source, String::len);
    assert_eq!(lengths, Outcome::failure("bad".to_owned()));
    assert_eq!(source, Outcome::failure("bad".to_owned()));

    let source = Maybe::some("abc".to_owned());
    assert_eq!(MaybeTy::map_ref(&source, String::len), Maybe::some(3));
}

#[test]
fn test_map_transpose() {
    let parsed = MaybeTy::map_transpose(Maybe::some("12"), str::parse::<u8>);
    assert_eq!(parsed, Ok(Maybe::some(12)));
    let parsed = MaybeTy::map_transpose(Maybe::some("kumquats"), str::parse::<u8>);
    assert!(parsed.is_err());
    let parsed = MaybeTy::map_transpose(Maybe::<&str>::none(), str::parse::<u8>);
    assert_eq!(parsed, Ok(Maybe::none()));

    let parsed = OutcomeTy::<&str>::map_transpose(Outcome::failure("missing"), str::parse::<u8>);
    assert_eq!(parsed, Ok(Outcome::failure("missing")));
    assert_eq!(
        OutcomeTy::<()>::transpose(Outcome::success(Err::<u8, _>("bad"))),
        Err("bad")
    );
}
