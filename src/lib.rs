pub mod core;
pub mod utils;
pub mod books;
pub mod borrowers;
pub mod fines;
pub mod notify;
pub mod loans;
