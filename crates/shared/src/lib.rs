pub mod abstract_trait;
pub mod config;
pub mod domain;
pub mod errors;
pub mod media;
pub mod model;
pub mod repository;
pub mod service;
#[cfg(any(test, feature = "test-util"))]
pub mod testing;
pub mod utils;
