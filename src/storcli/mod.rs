pub mod client;
pub mod quirks;
pub mod types;

pub use client::{DetailSource, StorcliClient, StorcliDetailSource};
