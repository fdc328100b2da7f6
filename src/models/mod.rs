pub mod document;
pub mod views;
