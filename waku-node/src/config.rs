pub use builder::*;
pub use config::*;
pub use waku_store_config::*;

mod builder;
#[allow(clippy::module_inception)]
mod config;
mod waku_store_config;
