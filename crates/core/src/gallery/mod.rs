pub mod builder;
pub mod classifier;
pub mod gallery;
