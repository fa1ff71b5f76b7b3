//! Export of the patient list.

mod patients;

pub use patients::*;
