// Adapters layer: concrete implementations of the domain ports backed by the
// operating system (PATH lookup, child processes).

pub mod locator;
pub mod process;

pub use locator::PathLocator;
pub use process::ProcessRunner;
