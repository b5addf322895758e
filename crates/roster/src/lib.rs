//! # Personnel Records
//!
//! Value-typed person and employee records: explicit composition with
//! forwarding accessors, a JSON round-trip with an optional address, and
//! first-occurrence deduplication by id.
//!
//! All types are plain values. In-place operations act only on the record
//! the caller hands in; sharing one record across threads requires
//! external synchronization by the caller.
//!
//! ## Examples
//! ```rust
//! use ckit_roster::prelude::*;
//!
//! # fn main() -> Result<(), RosterError> {
//! let person = Person::new("Aki", "Ito", 28)?;
//! let mut employee = Employee {
//!     person,
//!     id: "E9".to_owned(),
//!     dept: "QA".to_owned(),
//!     addr: None,
//! };
//!
//! move_to(Some(&mut employee), "Osaka", "540-0000");
//! assert_eq!(employee.label(), "Aki Ito[E9/QA]");
//!
//! let json = to_json(&employee)?;
//! assert_eq!(from_json(&json)?, employee);
//! # Ok(())
//! # }
//! ```

pub mod employee;
pub mod error;
pub mod person;

pub use employee::{Address, Employee, from_json, move_to, rename, to_json, unique_by_id};
pub use error::RosterError;
pub use person::{Person, have_birthday};

pub mod prelude {
    pub use crate::employee::{Address, Employee, from_json, move_to, rename, to_json, unique_by_id};
    pub use crate::error::RosterError;
    pub use crate::person::{Person, have_birthday};
}
