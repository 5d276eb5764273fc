//! Game-server client
//!
//! Contains:
//! - Wire message decoding and the handshake format
//! - TCP transport
//! - The per-game session loop

pub mod protocol;
pub mod session;
pub mod transport;

pub use protocol::{handshake_message, Action, GameResult, ServerMessage, NICKNAME_MAX};
pub use session::GameSession;
pub use transport::{TcpTransport, Transport};
