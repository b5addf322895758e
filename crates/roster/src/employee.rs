//! Employee records composed over [`Person`], with a JSON round-trip and
//! id deduplication.

use crate::error::RosterError;
use crate::person::Person;
use fxhash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// A postal address. No invariants; owned by exactly one employee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub city: String,
    pub zip: String,
}

/// An employee: a composed [`Person`] plus identity, department, and an
/// optional address.
///
/// Composition is explicit — the person is a named field held by value, so
/// modifying it inside one employee never affects another copy. In the
/// JSON form the person's fields flatten into the employee object and the
/// address is omitted entirely when absent:
///
/// ```json
/// {"first":"Aki","last":"Ito","age":28,"id":"E9","dept":"QA"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(flatten)]
    pub person: Person,
    pub id: String,
    pub dept: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addr: Option<Address>,
}

impl Employee {
    /// Forwards to the composed person's [`Person::full_name`].
    #[must_use]
    pub fn full_name(&self) -> String {
        self.person.full_name()
    }

    /// Display label in the form `name[id/dept]`, substituting `(no name)`
    /// for an empty full name.
    ///
    /// ```rust
    /// # use ckit_roster::prelude::*;
    /// let e = Employee {
    ///     person: Person { first: String::new(), last: String::new(), age: 0 },
    ///     id: "E1".to_owned(),
    ///     dept: "Ops".to_owned(),
    ///     addr: None,
    /// };
    /// assert_eq!(e.label(), "(no name)[E1/Ops]");
    /// ```
    #[must_use]
    pub fn label(&self) -> String {
        let name = self.full_name();
        let name = if name.is_empty() { "(no name)".to_owned() } else { name };
        format!("{name}[{}/{}]", self.id, self.dept)
    }
}

/// Moves the employee to a new address, creating one on first use.
///
/// Both city and zip are overwritten. A guaranteed no-op when `employee`
/// is `None`. Not safe for concurrent calls on the same record without
/// external synchronization.
pub fn move_to(
    employee: Option<&mut Employee>,
    city: impl Into<String>,
    zip: impl Into<String>,
) {
    let Some(employee) = employee else { return };
    let addr = employee.addr.get_or_insert_with(Address::default);
    addr.city = city.into();
    addr.zip = zip.into();
}

/// Overwrites the composed person's name parts in place.
///
/// A guaranteed no-op when `employee` is `None`.
pub fn rename(
    employee: Option<&mut Employee>,
    first: impl Into<String>,
    last: impl Into<String>,
) {
    let Some(employee) = employee else { return };
    employee.person.first = first.into();
    employee.person.last = last.into();
}

/// Encodes an employee as a JSON object.
///
/// # Errors
/// Returns [`RosterError::Format`] when encoding fails.
pub fn to_json(employee: &Employee) -> Result<String, RosterError> {
    Ok(serde_json::to_string(employee)?)
}

/// Decodes an employee from its JSON form.
///
/// # Errors
/// Returns [`RosterError::Format`] on malformed input.
pub fn from_json(data: &str) -> Result<Employee, RosterError> {
    Ok(serde_json::from_str(data)?)
}

/// Drops employees whose id was already seen in a single left-to-right
/// pass, keeping the first occurrence and the relative order of kept
/// records. The empty id is one valid key like any other.
///
/// The input is left untouched; the result is a fresh vector of clones.
#[must_use]
pub fn unique_by_id(employees: &[Employee]) -> Vec<Employee> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut out = Vec::with_capacity(employees.len());
    for employee in employees {
        if seen.insert(employee.id.as_str()) {
            out.push(employee.clone());
        }
    }
    if out.len() < employees.len() {
        trace!(
            kept = out.len(),
            dropped = employees.len() - out.len(),
            "Duplicate employee ids removed"
        );
    }
    out
}
