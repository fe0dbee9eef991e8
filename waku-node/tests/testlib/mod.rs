#![allow(dead_code)]

pub use responder::*;

pub mod responder;

pub fn init_logger() {
    let _ = pretty_env_logger::formatted_builder()
        .is_test(true)
        .try_init();
}
