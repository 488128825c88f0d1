//! The assessment wizard: session lifecycle, step validation, and the
//! career-match endpoint. Steps are gated in order (riasec, skills,
//! values); matches and insights unlock once all three are in.

pub mod builder;
pub mod handlers;
pub mod session;

pub use session::SessionStore;
