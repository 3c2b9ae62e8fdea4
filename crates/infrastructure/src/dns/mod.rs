pub mod forwarding;
pub mod transport;

pub use forwarding::{DnsForwarder, MessageBuilder, RecordTypeMapper, ResponseParser};
pub use transport::udp::UdpTransport;
