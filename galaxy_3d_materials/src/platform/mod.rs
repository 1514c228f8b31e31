/// Platform module - renderer collaborator interface

pub mod platform;
pub mod mock_platform;

pub use platform::*;
