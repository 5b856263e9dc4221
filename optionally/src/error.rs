use thiserror::Error;

/// Misuse of the library by the caller, reported before any callback runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum InvalidArgument {
    #[error("callback required: {name}")]
    MissingCallback { name: &'static str },
}

impl InvalidArgument {
    pub(crate) fn missing(name: &'static str) -> Self {
        Self::MissingCallback { name }
    }
}

#[test]
fn test_invalid_argument_message() {
    assert_eq!(
        InvalidArgument::missing("on_none").to_string(),
        "callback required: on_none"
    );
}
