//! Terminal front end for the veterinary patient tracker.
//!
//! The shell plays the page's role: it owns the patient store, draws the
//! header, form and patient list, and forwards user commands to the intake
//! form in `vet-tracker-core`.

pub mod command;
pub mod seed;
pub mod shell;

pub use command::*;
pub use seed::*;
pub use shell::*;
