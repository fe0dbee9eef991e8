pub use config::*;
pub use event_loop::Event;
pub use node::*;
pub use transport::*;

pub mod behaviour;
mod config;
mod event_loop;
mod node;
pub mod transport;
