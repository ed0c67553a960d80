pub mod contents;
pub mod store;
