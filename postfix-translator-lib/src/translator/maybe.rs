/// A value which may or may not be present.
///
/// Every combinator is built on top of [`Maybe::evaluate`], which is the only
/// place the two variants are told apart.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Maybe<T> {
    Empty,
    Present(T),
}

impl<T> Maybe<T> {
    pub fn present(value: T) -> Maybe<T> {
        Maybe::Present(value)
    }

    pub fn empty() -> Maybe<T> {
        Maybe::Empty
    }

    /// Monadic return, the same as [`Maybe::present`].
    pub fn unit(value: T) -> Maybe<T> {
        Self::present(value)
    }

    /// Creates a present value only if `flag` holds.
    ///
    /// # Arguments
    ///
    /// * `flag`: Whether the value should be present.
    /// * `produce_value`: Produces the value. Only called when `flag` is true,
    ///   so it may assume whatever `flag` guarantees.
    ///
    /// returns: `Present(produce_value())` if `flag`, otherwise `Empty`.
    ///
    /// # Examples
    ///
    /// ```
    /// use postfix_translator::translator::maybe::Maybe;
    ///
    /// let items: Vec<i32> = vec![];
    /// let last = Maybe::from_condition(!items.is_empty(), || items[items.len() - 1]);
    /// assert_eq!(last, Maybe::empty());
    /// ```
    pub fn from_condition(flag: bool, produce_value: impl FnOnce() -> T) -> Maybe<T> {
        if flag {
            Self::present(produce_value())
        } else {
            Self::empty()
        }
    }

    /// Calls exactly one of the given functions, depending on whether a value is present.
    pub fn evaluate<R>(self, on_empty: impl FnOnce() -> R, on_present: impl FnOnce(T) -> R) -> R {
        match self {
            Maybe::Empty => on_empty(),
            Maybe::Present(value) => on_present(value),
        }
    }

    /// Like [`Maybe::evaluate`], but the empty case is an already computed value.
    pub fn evaluate_strict<R>(self, empty_value: R, on_present: impl FnOnce(T) -> R) -> R {
        self.evaluate(|| empty_value, on_present)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Maybe<U> {
        self.evaluate(Maybe::empty, |value| Maybe::present(f(value)))
    }

    pub fn bind<U>(self, f: impl FnOnce(T) -> Maybe<U>) -> Maybe<U> {
        self.evaluate(Maybe::empty, f)
    }

    pub fn get_or_else(self, default: T) -> T {
        self.evaluate_strict(default, |value| value)
    }

    pub fn is_present(&self) -> bool {
        self.as_ref().evaluate_strict(false, |_| true)
    }

    pub fn is_empty(&self) -> bool {
        !self.is_present()
    }

    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Empty => Maybe::Empty,
            Maybe::Present(value) => Maybe::Present(value),
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::Empty
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            None => Maybe::Empty,
            Some(value) => Maybe::Present(value),
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        maybe.evaluate(|| None, Some)
    }
}
