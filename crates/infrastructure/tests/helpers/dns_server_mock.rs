#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::rdata::{A, CNAME, NS, SOA};
use hickory_proto::rr::{Name, RData, Record};
use std::net::{Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

use ferrous_resolve_infrastructure::dns::MessageBuilder;

type Handler = dyn Fn(&Message) -> Option<Message> + Send + Sync;

/// Loopback nameserver driven by a closure. Returning `None` drops the query.
pub struct MockDnsServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<Message>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start<F>(handler: F) -> Result<(Self, SocketAddr), std::io::Error>
    where
        F: Fn(&Message) -> Option<Message> + Send + Sync + 'static,
    {
        let socket = UdpSocket::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let local_addr = socket.local_addr()?;
        let handler: Arc<Handler> = Arc::new(handler);
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = requests.clone();

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        let Ok((len, peer)) = result else { continue };
                        let Ok(request) = Message::from_vec(&buf[..len]) else { continue };

                        seen.lock().unwrap().push(request.clone());

                        if let Some(reply) = handler(&request) {
                            let bytes = MessageBuilder::serialize_message(&reply).unwrap();
                            let _ = socket.send_to(&bytes, peer).await;
                        }
                    }
                }
            }
        });

        Ok((
            Self {
                addr: local_addr,
                requests,
                shutdown_tx: Some(shutdown_tx),
            },
            local_addr,
        ))
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn requests(&self) -> Vec<Message> {
        self.requests.lock().unwrap().clone()
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

pub fn name(s: &str) -> Name {
    Name::from_str(s).unwrap()
}

pub fn question_name(request: &Message) -> String {
    request
        .queries()
        .first()
        .map(|q| q.name().to_ascii())
        .unwrap_or_default()
}

/// Empty reply to `request`: same ID, question echoed.
pub fn reply_to(request: &Message) -> Message {
    let mut reply = Message::new(request.id(), MessageType::Response, OpCode::Query);
    for query in request.queries() {
        reply.add_query(query.clone());
    }
    reply
}

pub fn query_message(domain: &str) -> Message {
    let mut query = Query::new();
    query.set_name(name(domain));
    query.set_query_type(hickory_proto::rr::RecordType::A);
    query.set_query_class(hickory_proto::rr::DNSClass::IN);

    let mut message = Message::new(0x4242, MessageType::Query, OpCode::Query);
    message.add_query(query);
    message
}

pub fn a_record(owner: &str, ip: Ipv4Addr) -> Record {
    Record::from_rdata(name(owner), 300, RData::A(A(ip)))
}

pub fn cname_record(owner: &str, target: &str) -> Record {
    Record::from_rdata(name(owner), 300, RData::CNAME(CNAME(name(target))))
}

pub fn ns_record(zone: &str, nameserver: &str) -> Record {
    Record::from_rdata(name(zone), 172800, RData::NS(NS(name(nameserver))))
}

pub fn soa_record(zone: &str) -> Record {
    let mname = name(&format!("ns1.{}", zone));
    let rname = name(&format!("hostmaster.{}", zone));
    let soa = SOA::new(mname, rname, 1, 3600, 900, 604800, 86400);
    Record::from_rdata(name(zone), 86400, RData::SOA(soa))
}
