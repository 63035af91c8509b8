pub mod common;
pub mod config;
pub mod count;
pub mod error;
pub mod filter;
pub mod sample;
pub mod sampler;
