#![deny(clippy::unwrap_used)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::cast_sign_loss,
    clippy::module_inception,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]

pub mod api;
pub mod image_utils;
pub mod photo_client;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod utils;
