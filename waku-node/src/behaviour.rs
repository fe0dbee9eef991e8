pub use behaviour::*;
pub use event::*;

#[allow(clippy::module_inception)]
mod behaviour;
mod event;
