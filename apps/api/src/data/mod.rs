pub mod careers;
pub mod question_banks;
pub mod questions;

pub use careers::career_catalog;
