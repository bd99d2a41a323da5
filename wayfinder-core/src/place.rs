//! User-supplied place names.

use std::fmt;

use thiserror::Error;

/// A non-empty place name such as `"Paris"`.
///
/// Surrounding whitespace is trimmed; a label that is empty after trimming is
/// rejected. The label is otherwise passed to the geocoder verbatim.
///
/// # Examples
/// ```
/// use wayfinder_core::PlaceQuery;
///
/// let place = PlaceQuery::new("  Paris ")?;
/// assert_eq!(place.as_str(), "Paris");
/// assert!(PlaceQuery::new("   ").is_err());
/// # Ok::<(), wayfinder_core::PlaceQueryError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct PlaceQuery(String);

/// Errors returned by [`PlaceQuery::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaceQueryError {
    /// The label was empty or whitespace only.
    #[error("place name must not be empty")]
    Empty,
}

impl PlaceQuery {
    /// Validates and constructs a [`PlaceQuery`].
    pub fn new(label: impl AsRef<str>) -> Result<Self, PlaceQueryError> {
        let trimmed = label.as_ref().trim();
        if trimmed.is_empty() {
            return Err(PlaceQueryError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// The trimmed label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaceQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PlaceQuery {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PlaceQuery {
    type Error = PlaceQueryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PlaceQuery> for String {
    fn from(value: PlaceQuery) -> Self {
        value.0
    }
}
