use optionally::Maybe;

pub trait FirstExt: Iterator + Sized {
    /// The first item, if any.
    fn try_first(mut self) -> Maybe<Self::Item> {
        self.next().into()
    }

    /// The first item satisfying `predicate`. Items after the match are not
    /// visited.
    fn try_first_where<P>(mut self, predicate: P) -> Maybe<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.find(predicate).into()
    }
}

impl<I: Iterator> FirstExt for I {}

#[test]
fn test_try_first() {
    assert_eq!([1, 2, 3].into_iter().try_first(), Maybe::some(1));
    assert_eq!(std::iter::empty::<i32>().try_first(), Maybe::none());
}

#[test]
fn test_try_first_where() {
    let evens = |x: &i32| x % 2 == 0;
    assert_eq!([1, 2, 3, 4].into_iter().try_first_where(evens), Maybe::some(2));
    assert_eq!([1, 3].into_iter().try_first_where(evens), Maybe::none());
    assert_eq!(std::iter::empty::<i32>().try_first_where(evens), Maybe::none());
}

#[test]
fn test_try_first_where_stops_at_match() {
    let mut visited = Vec::new();
    let found = (1..).try_first_where(|x| {
        visited.push(*x);
        *x == 3
    });
    assert_eq!(found, Maybe::some(3));
    assert_eq!(visited, vec![1, 2, 3]);
}
