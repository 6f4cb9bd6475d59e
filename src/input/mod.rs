//! Input processing module
//! Handles file detection, record decoding, and input management

pub mod file_detector;
pub mod manager;
pub mod record_reader;

pub use manager::InputManager;
