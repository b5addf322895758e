//! Person value type and its operations.

use crate::error::RosterError;
use serde::{Deserialize, Serialize};

/// A person: two name parts and an age.
///
/// Fields are public and the record is a plain value — equality is
/// structural and `Clone` yields an independent copy. The `age >= 0`
/// invariant is enforced by [`Person::new`] only; deserialization and
/// direct field writes bypass it, and [`have_birthday`] only increments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub first: String,
    pub last: String,
    pub age: i32,
}

impl Person {
    /// Creates a validated person.
    ///
    /// # Errors
    /// Returns [`RosterError::InvalidAge`] when `age` is negative.
    pub fn new(
        first: impl Into<String>,
        last: impl Into<String>,
        age: i32,
    ) -> Result<Self, RosterError> {
        if age < 0 {
            return Err(RosterError::InvalidAge { age });
        }
        Ok(Self { first: first.into(), last: last.into(), age })
    }

    /// Joins the name parts with a single space, dropping empty parts.
    ///
    /// Returns the empty string when both parts are empty. Whitespace
    /// inside either part is preserved as-is.
    #[must_use]
    pub fn full_name(&self) -> String {
        match (self.first.is_empty(), self.last.is_empty()) {
            (true, true) => String::new(),
            (true, false) => self.last.clone(),
            (false, true) => self.first.clone(),
            (false, false) => format!("{} {}", self.first, self.last),
        }
    }
}

/// Adds one year to the person's age.
///
/// A guaranteed no-op when `person` is `None`; whether a record is present
/// stays the caller's decision. Not safe for concurrent calls on the same
/// record without external synchronization.
pub fn have_birthday(person: Option<&mut Person>) {
    let Some(person) = person else { return };
    person.age += 1;
}
