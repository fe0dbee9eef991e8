#![allow(dead_code)]

pub use store::*;
pub use transport::*;

pub mod store;
pub mod transport;

pub fn init_logger() {
    let _ = pretty_env_logger::formatted_builder()
        .is_test(true)
        .try_init();
}
