pub mod scorer;
pub mod values;
pub mod weights;

pub use scorer::rank_careers;
