pub mod error;
pub mod writer;

pub use error::WriteError;
pub use writer::{write_projection, write_table};
