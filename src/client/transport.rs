//! Message transport to the game server

use std::io::{self, Read, Write};
use std::net::{TcpStream, ToSocketAddrs};

/// Bytes read per receive; server messages are short integers
pub const RECV_BUFFER: usize = 16;

/// A bidirectional, message-at-a-time channel to the server.
pub trait Transport {
    fn send(&mut self, message: &str) -> io::Result<()>;

    /// Next message; an empty string means the peer closed the connection.
    fn receive(&mut self) -> io::Result<String>;
}

/// Transport over a plain TCP connection
pub struct TcpTransport {
    stream: TcpStream,
}

impl TcpTransport {
    pub fn connect<A: ToSocketAddrs>(addr: A) -> io::Result<Self> {
        let stream = TcpStream::connect(addr)?;
        Ok(Self { stream })
    }

    pub fn from_stream(stream: TcpStream) -> Self {
        Self { stream }
    }
}

impl Transport for TcpTransport {
    fn send(&mut self, message: &str) -> io::Result<()> {
        self.stream.write_all(message.as_bytes())?;
        self.stream.flush()?;
        log::debug!("[Sent] {message}");
        Ok(())
    }

    fn receive(&mut self) -> io::Result<String> {
        let mut buf = [0u8; RECV_BUFFER];
        let n = self.stream.read(&mut buf)?;
        let message = String::from_utf8_lossy(&buf[..n]).into_owned();
        log::debug!("[Received] {message}");
        Ok(message)
    }
}
