use libp2p::core::upgrade::ProtocolName;

pub const PROTOCOL_ID: &str = "/vac/waku/store/2.0.0-beta4";

#[derive(Debug, Clone, Default)]
pub struct StoreProtocol;

impl ProtocolName for StoreProtocol {
    fn protocol_name(&self) -> &[u8] {
        PROTOCOL_ID.as_bytes()
    }
}
