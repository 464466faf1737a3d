pub mod diff;
pub mod grid;
pub mod palette;
pub mod session;
pub mod snapshot;
