pub mod gestures;
pub mod types;
