//! Game loop driving the engine from server messages

use crate::engine::AIEngine;
use crate::error::ClientResult;

use super::protocol::{handshake_message, Action, GameResult, ServerMessage};
use super::transport::Transport;

/// One game against the server
pub struct GameSession<T: Transport> {
    transport: T,
    engine: AIEngine,
    player: u8,
    nickname: String,
}

impl<T: Transport> GameSession<T> {
    pub fn new(transport: T, engine: AIEngine, player: u8, nickname: impl Into<String>) -> Self {
        Self {
            transport,
            engine,
            player,
            nickname: nickname.into(),
        }
    }

    pub fn engine(&self) -> &AIEngine {
        &self.engine
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Play until the server reports a result or closes the connection.
    ///
    /// Returns `None` when the connection closed before a result arrived.
    pub fn run(&mut self) -> ClientResult<Option<GameResult>> {
        let greeting = self.transport.receive()?;
        log::info!("Server greeting: {}", greeting.trim());

        let hello = handshake_message(self.player, &self.nickname);
        self.transport.send(&hello)?;

        loop {
            let raw = self.transport.receive()?;
            if raw.is_empty() {
                log::info!("Connection closed by server.");
                return Ok(None);
            }

            let msg = ServerMessage::parse(&raw)?;
            if let Some(code) = msg.opponent_move {
                match self.engine.apply_opponent_move(code) {
                    Ok(_) => log::info!("Opponent played move: {code}\n{}", self.engine.board()),
                    Err(e) => log::warn!("Ignoring opponent move: {e}"),
                }
            }

            match msg.action() {
                Action::Move => {
                    let code = self.engine.choose_move()?;
                    if let Err(e) = self.engine.apply_own_move(code) {
                        log::warn!("Own move not recorded: {e}");
                    }
                    self.transport.send(&code.to_string())?;
                }
                Action::GameOver(result) => {
                    log::info!("Game over: {}", result.description());
                    return Ok(Some(result));
                }
                Action::Wait(code) => log::debug!("No action for server code {code}"),
            }
        }
    }
}
