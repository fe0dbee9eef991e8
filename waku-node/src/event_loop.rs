pub use command::*;
pub use event::*;
pub use event_loop::*;

mod command;
mod event;
#[allow(clippy::module_inception)]
mod event_loop;
