#![cfg(feature = "serde")]

use optionally::{Maybe, Outcome};

#[test]
fn maybe_serializes_like_option() -> anyhow::Result<()> {
    assert_eq!(serde_json::to_string(&Maybe::some(5))?, "5");
    assert_eq!(serde_json::to_string(&Maybe::<i32>::none())?, "null");
    assert_eq!(serde_json::from_str::<Maybe<i32>>("7")?, Maybe::some(7));
    assert_eq!(serde_json::from_str::<Maybe<i32>>("null")?, Maybe::none());
    Ok(())
}

#[test]
fn outcome_is_externally_tagged() -> anyhow::Result<()> {
    let ok = Outcome::<i32, String>::success(1);
    assert_eq!(serde_json::to_string(&ok)?, r#"{"Success":1}"#);
    let failed: Outcome<i32, String> = serde_json::from_str(r#"{"Failure":"bad"}"#)?;
    assert_eq!(failed, Outcome::failure("bad".to_owned()));
    Ok(())
}
