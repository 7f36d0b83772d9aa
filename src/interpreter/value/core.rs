use std::{cell::OnceCell, rc::Rc};

use crate::{error::RuntimeError, interpreter::value::number::Number};

/// Represents a runtime value: a string which can also be treated as an
/// array, a boolean, and a number.
///
/// Every value in the language is fundamentally a string; the array
/// rendition is the string split on newlines, the boolean rendition is
/// non-emptiness, and the numeric rendition is parsed on demand. `Value`
/// couples the four renditions so each conversion happens at most once: the
/// string and boolean are fixed at construction, while the array and number
/// are derived lazily and cached. A failed numeric parse is cached too, so
/// repeated `number()` calls do not re-parse.
///
/// Cloning is cheap (the renditions sit behind an `Rc`), and the visible API
/// is immutable. The caches are not synchronized, so values are confined to
/// one thread.
#[derive(Debug, Clone)]
pub struct Value {
    inner: Rc<ValueInner>,
}

#[derive(Debug)]
struct ValueInner {
    string:  String,
    boolean: bool,
    array:   OnceCell<Vec<Value>>,
    number:  OnceCell<Result<Number, RuntimeError>>,
}

impl Value {
    /// Returns the empty-string value, the result of most statements.
    #[must_use]
    pub fn empty() -> Self {
        Self::from("")
    }

    /// Returns the string rendition of the value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.inner.string
    }

    /// Returns the pre-computed boolean rendition of the value.
    ///
    /// Strings are true when non-empty, arrays when non-empty, numbers and
    /// the literal `true` always.
    #[must_use]
    pub fn boolean(&self) -> bool {
        self.inner.boolean
    }

    /// Returns the array rendition of the value, deriving it on first
    /// access.
    ///
    /// The array is the string split on `'\n'`; the empty string yields the
    /// empty array. Joining the elements' strings with `'\n'` always
    /// reproduces the original string.
    #[must_use]
    pub fn array(&self) -> &[Value] {
        self.inner
            .array
            .get_or_init(|| {
                if self.inner.string.is_empty() {
                    Vec::new()
                } else {
                    self.inner.string.split('\n').map(Self::from).collect()
                }
            })
    }

    /// Returns the numeric rendition of the value, parsing it on first
    /// access.
    ///
    /// # Errors
    /// Returns the (cached) parse error if the string is not a number.
    pub fn number(&self) -> Result<Number, RuntimeError> {
        self.inner
            .number
            .get_or_init(|| Number::parse(&self.inner.string))
            .clone()
    }
}

impl From<String> for Value {
    fn from(string: String) -> Self {
        let boolean = !string.is_empty();
        Self { inner: Rc::new(ValueInner { string,
                                           boolean,
                                           array: OnceCell::new(),
                                           number: OnceCell::new() }) }
    }
}

impl From<&str> for Value {
    fn from(string: &str) -> Self {
        Self::from(string.to_string())
    }
}

impl From<bool> for Value {
    /// A true value renders as `"true"`; a false value renders as the empty
    /// string, so it is falsy in every rendition.
    fn from(boolean: bool) -> Self {
        let string = if boolean { "true".to_string() } else { String::new() };
        Self { inner: Rc::new(ValueInner { string,
                                           boolean,
                                           array: OnceCell::new(),
                                           number: OnceCell::new() }) }
    }
}

impl From<Number> for Value {
    /// Numbers are always truthy, and the numeric cache is seeded so the
    /// string never has to be re-parsed.
    fn from(number: Number) -> Self {
        let string = number.to_string();
        let cell = OnceCell::new();
        let _ = cell.set(Ok(number));
        Self { inner: Rc::new(ValueInner { string,
                                           boolean: true,
                                           array: OnceCell::new(),
                                           number: cell }) }
    }
}

impl From<Vec<Value>> for Value {
    /// Builds a value whose array rendition is `items`.
    ///
    /// A one-element array whose element is the empty string is
    /// indistinguishable from the empty array once rendered, so it is
    /// normalized to the empty array up front. This keeps the string and
    /// array renditions consistent with each other.
    fn from(mut items: Vec<Value>) -> Self {
        if items.len() == 1 && items[0].as_str().is_empty() {
            items.clear();
        }

        let string = items.iter()
                          .map(Self::as_str)
                          .collect::<Vec<_>>()
                          .join("\n");
        let boolean = !items.is_empty();
        let cell = OnceCell::new();
        let _ = cell.set(items);
        Self { inner: Rc::new(ValueInner { string,
                                           boolean,
                                           array: cell,
                                           number: OnceCell::new() }) }
    }
}

impl PartialEq for Value {
    /// Two values are equal when their string renditions are equal.
    fn eq(&self, other: &Self) -> bool {
        self.inner.string == other.inner.string
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.inner.string)
    }
}
