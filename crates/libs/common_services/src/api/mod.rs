pub mod albums;
pub mod contact;
pub mod image;
pub mod photos;
pub mod portrait;
