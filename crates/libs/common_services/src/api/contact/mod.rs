pub mod error;
pub mod interfaces;
pub mod relay;
pub mod service;
