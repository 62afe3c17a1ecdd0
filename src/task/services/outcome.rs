//! Explicit outcome of resolving a client-supplied task identifier.

/// Result of an operation addressed by a raw identifier.
///
/// Keeps "the identifier was malformed" visible to callers that care, while
/// [`IdLookup::found`] collapses both failure cases into absence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdLookup<T> {
    /// The identifier resolved to a live record.
    Found(T),
    /// The identifier is well formed but no record matches it.
    NotFound,
    /// The identifier is not a valid store identifier.
    MalformedId(String),
}

impl<T> IdLookup<T> {
    /// Collapses the outcome to an optional value.
    #[must_use]
    pub fn found(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            Self::NotFound | Self::MalformedId(_) => None,
        }
    }

    /// Returns `true` when the identifier resolved.
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

impl<T> From<Option<T>> for IdLookup<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::NotFound, Self::Found)
    }
}
