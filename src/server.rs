use std::net::{Ipv4Addr, UdpSocket};

use anyhow::Context;
use bytes::Bytes;
use log::{debug, warn};

use crate::error::CodecError;
use crate::message::Message;
use crate::reply::build_reply;

/// Largest UDP payload without EDNS0.
const MAX_DATAGRAM: usize = 512;

/// Serves DNS queries over a single UDP socket.
pub struct Server {
    socket: UdpSocket,
    answer_addr: Ipv4Addr,
    ttl: u32,
}

impl Server {
    pub fn bind(addr: &str, answer_addr: Ipv4Addr, ttl: u32) -> anyhow::Result<Self> {
        let socket = UdpSocket::bind(addr).with_context(|| format!("failed to bind {addr}"))?;

        Ok(Self {
            socket,
            answer_addr,
            ttl,
        })
    }

    /// Receive and answer datagrams until the socket fails.
    ///
    /// A datagram that fails to decode or encode is logged and dropped;
    /// the sender gets no reply.
    pub fn run(&self) -> anyhow::Result<()> {
        let mut buf = [0u8; MAX_DATAGRAM];

        loop {
            let (size, source) = self
                .socket
                .recv_from(&mut buf)
                .context("error receiving datagram")?;
            debug!("received {size} bytes from {source}");

            match self.handle(&buf[..size]) {
                Ok(response) => {
                    if let Err(err) = self.socket.send_to(&response, source) {
                        warn!("failed to send reply to {source}: {err}");
                    }
                }
                Err(err) => {
                    warn!("dropping datagram from {source}: {err}");
                }
            }
        }
    }

    /// Decode one datagram and produce the encoded reply.
    fn handle(&self, datagram: &[u8]) -> Result<Bytes, CodecError> {
        let request = Message::decode(datagram)?;
        let response = build_reply(&request, self.answer_addr, self.ttl)?;
        response.encode()
    }
}
