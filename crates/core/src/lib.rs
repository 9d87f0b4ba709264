#![forbid(unsafe_code)]

pub mod answer;
pub mod choices;
pub mod model;
pub mod rng;

pub use rng::Entropy;
