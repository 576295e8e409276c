// Spinner demo
pub mod spin;

// Text commands
pub mod expand;
pub mod paint;
