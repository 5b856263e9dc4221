use std::{
    any::Any,
    panic::{catch_unwind, AssertUnwindSafe},
};

/// A panic absorbed by [`outcome::wrap`](crate::outcome::wrap).
///
/// Holds the original panic payload, so whatever value was passed to
/// `panic!`/[`std::panic::panic_any`] can be recovered with
/// [`Caught::downcast_ref`] or [`Caught::downcast`].
pub struct Caught {
    payload: Box<dyn Any + Send + 'static>,
}

impl Caught {
    pub fn new(payload: Box<dyn Any + Send + 'static>) -> Self {
        Self { payload }
    }

    /// The panic message, if the payload is a string.
    pub fn message(&self) -> Option<&str> {
        if let Some(s) = self.payload.downcast_ref::<&'static str>() {
            return Some(s);
        }
        self.payload.downcast_ref::<String>().map(String::as_str)
    }

    pub fn is<E: Any>(&self) -> bool {
        self.payload.is::<E>()
    }

    pub fn downcast_ref<E: Any>(&self) -> Option<&E> {
        self.payload.downcast_ref()
    }

    pub fn downcast<E: Any>(self) -> Result<E, Self> {
        self.payload
            .downcast::<E>()
            .map(|e| *e)
            .map_err(Self::new)
    }

    pub fn into_payload(self) -> Box<dyn Any + Send + 'static> {
        self.payload
    }

    /// Re-raises the original panic.
    pub fn resume(self) -> ! {
        std::panic::resume_unwind(self.payload)
    }
}

impl std::fmt::Debug for Caught {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.message() {
            Some(message) => f.debug_tuple("Caught").field(&message).finish(),
            None => f.debug_tuple("Caught").field(&"<opaque payload>").finish(),
        }
    }
}

impl std::fmt::Display for Caught {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.message() {
            Some(message) => write!(f, "panicked: {}", message),
            None => write!(f, "panicked with a non-string payload"),
        }
    }
}

impl std::error::Error for Caught {}

/// Runs `f`, turning an unwinding panic into `Err`.
///
/// Only the single call is guarded; `f` is consumed, so no state it touched
/// is observed afterwards through this path.
pub(crate) fn catch<T, F>(f: F) -> Result<T, Caught>
where
    F: FnOnce() -> T,
{
    catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        let caught = Caught::new(payload);
        tracing::debug!(panic = ?caught, "absorbed panic from wrapped call");
        caught
    })
}

#[test]
fn test_catch_string_payloads() {
    let caught = catch(|| -> i32 { panic!("static message") }).unwrap_err();
    assert_eq!(caught.message(), Some("static message"));
    assert_eq!(caught.to_string(), "panicked: static message");

    let n = 7;
    let caught = catch(|| -> i32 { panic!("formatted {}", n) }).unwrap_err();
    assert_eq!(caught.message(), Some("formatted 7"));
    assert!(caught.is::<String>());
}

#[test]
fn test_catch_keeps_custom_payload() {
    #[derive(Debug, PartialEq)]
    struct Boom(u8);

    let caught = catch(|| -> () { std::panic::panic_any(Boom(3)) }).unwrap_err();
    assert_eq!(caught.message(), None);
    assert_eq!(caught.downcast_ref::<Boom>(), Some(&Boom(3)));
    let caught = caught.downcast::<String>().unwrap_err();
    assert_eq!(caught.downcast::<Boom>().unwrap(), Boom(3));
}

#[test]
fn test_catch_passes_values_through() {
    assert_eq!(catch(|| 2).unwrap(), 2);
}

#[test]
fn test_resume_reraises() {
    let caught = catch(|| -> () { panic!("again") }).unwrap_err();
    let reraised = catch(move || -> () { caught.resume() }).unwrap_err();
    assert_eq!(reraised.message(), Some("again"));
}
