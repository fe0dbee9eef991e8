use libp2p::identity::PublicKey;
use libp2p::request_response::ProtocolSupport;
use libp2p::swarm::behaviour::toggle;
use libp2p::swarm::{keep_alive, NetworkBehaviour};
use libp2p::{identify, ping};

use crate::WakuStoreConfig;

pub struct Config {
    pub local_public_key: PublicKey,
    pub keep_alive: bool,
    pub store: Option<WakuStoreConfig>,
}

#[derive(NetworkBehaviour)]
#[behaviour(out_event = "crate::behaviour::event::Event")]
pub struct Behaviour {
    pub ping: ping::Behaviour,
    pub identify: identify::Behaviour,
    pub keep_alive: toggle::Toggle<keep_alive::Behaviour>,
    pub waku_store: toggle::Toggle<waku_store::behaviour::Behaviour>,
}

impl Behaviour {
    pub fn new(config: Config) -> Self {
        let identify = identify::Behaviour::new(
            identify::Config::new("/ipfs/id/1.0.0".to_owned(), config.local_public_key)
                .with_agent_version(format!("rust-waku/{}", env!("CARGO_PKG_VERSION"))),
        );
        let keep_alive = toggle::Toggle::from(config.keep_alive.then_some(keep_alive::Behaviour));
        // The node only queries store nodes, it doesn't serve history itself
        let waku_store = toggle::Toggle::from(config.store.map(|store| {
            waku_store::behaviour::new_behaviour(ProtocolSupport::Outbound, store.request_timeout)
        }));

        Self {
            ping: Default::default(),
            identify,
            keep_alive,
            waku_store,
        }
    }
}
