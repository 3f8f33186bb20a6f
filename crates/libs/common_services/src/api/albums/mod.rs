pub mod error;
pub mod gallery;
pub mod service;
