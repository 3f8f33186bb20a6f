#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::struct_excessive_bools
)]
mod display;
mod remote;

pub use display::*;
pub use remote::*;
