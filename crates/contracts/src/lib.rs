//! Types shared between the rule form page script and the rest of the
//! signal router: condition types, the stored conditions document, signal
//! field extraction and rule matching.

pub mod domain;
pub mod enums;
pub mod shared;
