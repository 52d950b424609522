//! Helpers shared by the framework and rule implementations.

pub mod allowance;
pub mod naming;

#[doc(inline)]
pub use allowance::{check_allow, AllowCheck};
