pub mod detection;
pub mod error;
pub mod gallery;
pub mod media;
pub mod pipeline;
pub mod shared;

pub use error::{Error, Result};
