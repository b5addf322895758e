//! Facade crate for the `CrewKit` libraries.
//! Re-exports the primitive-operation helpers and the personnel-record
//! types under one roof. Keep this crate thin: it composes the member
//! crates and implements nothing itself.
//!
//! ## Usage
//! - Depend on `ckit` and pull items from [`ops`] and [`roster`], or
//! - `use ckit::prelude::*` for the common record types and operations.

pub use ckit_ops as ops;
pub use ckit_roster as roster;

pub mod prelude {
    pub use ckit_ops::OpsError;
    pub use ckit_roster::prelude::*;
}
