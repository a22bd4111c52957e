pub mod context;
pub mod error;
pub mod message;
pub mod models;
pub mod ports;
pub mod prompt;

pub use error::RagError;
pub use models::{Document, QueryVector, Question};
