//! Generated protobuf types. Regenerate with `buf generate` against the Waku protocol
//! definitions when the schema changes.

pub mod waku {
    pub mod message {
        pub mod v1 {
            include!("proto/gen/waku.message.v1.rs");
        }
    }
}
