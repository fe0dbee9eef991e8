use libp2p::{identify, ping};

#[derive(Debug)]
pub enum Event {
    Ping(ping::Event),
    Identify(Box<identify::Event>),
    WakuStore(waku_store::behaviour::Event),
}

impl From<ping::Event> for Event {
    fn from(event: ping::Event) -> Self {
        Event::Ping(event)
    }
}

impl From<identify::Event> for Event {
    fn from(event: identify::Event) -> Self {
        Event::Identify(Box::new(event))
    }
}

impl From<waku_store::behaviour::Event> for Event {
    fn from(event: waku_store::behaviour::Event) -> Self {
        Event::WakuStore(event)
    }
}

impl From<void::Void> for Event {
    fn from(event: void::Void) -> Self {
        void::unreachable(event)
    }
}
