use optionally::Maybe;

pub trait ToMaybe<T> {
    fn to_maybe(self) -> Maybe<T>;
}

impl<T> ToMaybe<T> for Option<T> {
    fn to_maybe(self) -> Maybe<T> {
        self.into()
    }
}

impl<'a, T> ToMaybe<&'a T> for &'a Option<T> {
    fn to_maybe(self) -> Maybe<&'a T> {
        self.as_ref().into()
    }
}

#[test]
fn test_to_maybe() {
    assert_eq!(Some(3).to_maybe(), Maybe::some(3));
    assert_eq!(None::<i32>.to_maybe(), Maybe::none());

    let stored = Some("kept".to_owned());
    assert_eq!((&stored).to_maybe().map(String::len), Maybe::some(4));
    assert!(stored.is_some());
}
