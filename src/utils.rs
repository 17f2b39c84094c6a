pub mod date;
pub mod store;
