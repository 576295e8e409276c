//! Aggregation of several errors into one.

use crate::error::BoxError;
use std::fmt;

/// An ordered list of errors reported together.
///
/// Each entry is formatted on its own line. The detailed form (`{:#}`)
/// formats every entry in its detailed form as well.
#[derive(Debug, Default)]
pub struct List(Vec<BoxError>);

impl List {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an error.
    pub fn push(&mut self, err: impl Into<BoxError>) {
        self.0.push(err.into());
    }

    /// Number of errors in the list.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list holds no errors.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the contained errors.
    pub fn iter(&self) -> impl Iterator<Item = &(dyn std::error::Error + Send + Sync + 'static)> {
        self.0.iter().map(|err| &**err)
    }

    /// `Ok(())` when empty, otherwise the list itself as the error.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl FromIterator<BoxError> for List {
    fn from_iter<I: IntoIterator<Item = BoxError>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for List {
    type Item = BoxError;
    type IntoIter = std::vec::IntoIter<BoxError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            if f.alternate() {
                write!(f, "{err:#}")?;
            } else {
                write!(f, "{err}")?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for List {}
