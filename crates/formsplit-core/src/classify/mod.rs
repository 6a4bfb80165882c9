pub mod engine;

pub use engine::{classify, classify_segment};
