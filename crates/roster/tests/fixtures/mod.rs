use ckit_roster::prelude::*;

/// Builds an employee with the given id and first name, no address.
///
/// # Panics
/// * Never; the fixture age is always valid.
#[must_use]
pub fn employee(id: &str, first: &str) -> Employee {
    Employee {
        person: Person::new(first, "", 0).expect("fixture age is valid"),
        id: id.to_owned(),
        dept: "X".to_owned(),
        addr: None,
    }
}
