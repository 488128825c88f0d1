//! Admin surface: runtime LLM provider configuration and dataset
//! uploads. Uploads are validated and recorded for review only; the
//! served catalog and question bank stay compiled in.

pub mod handlers;
pub mod store;
pub mod validation;

pub use store::DatasetStore;
