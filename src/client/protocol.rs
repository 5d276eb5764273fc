//! Wire messages exchanged with the game server
//!
//! Every server message is one decimal integer `msg`: `msg % 100` is the
//! opponent's last move (0 for none) and `msg / 100` says what happens next.

use crate::error::{ClientError, ClientResult};

/// Longest nickname the server accepts
pub const NICKNAME_MAX: usize = 9;

/// Final result reported by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Won,
    Lost,
    Draw,
    /// Opponent made an illegal move
    WonByOpponentError,
    /// Our move was rejected
    LostByOwnError,
}

impl GameResult {
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(Self::Won),
            2 => Some(Self::Lost),
            3 => Some(Self::Draw),
            4 => Some(Self::WonByOpponentError),
            5 => Some(Self::LostByOwnError),
            _ => None,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Won => "You won!",
            Self::Lost => "You lost.",
            Self::Draw => "Draw.",
            Self::WonByOpponentError => "You won. Opponent made an error.",
            Self::LostByOwnError => "You lost. You made an error.",
        }
    }
}

/// What the server expects after a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Reply with a move
    Move,
    GameOver(GameResult),
    /// Unknown code: nothing to do, keep listening
    Wait(u32),
}

/// Decoded server message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerMessage {
    pub code: u32,
    pub opponent_move: Option<u32>,
}

impl ServerMessage {
    pub fn parse(raw: &str) -> ClientResult<Self> {
        let msg: u32 = raw
            .trim()
            .parse()
            .map_err(|_| ClientError::Malformed(raw.to_string()))?;
        Ok(Self::from_value(msg))
    }

    pub fn from_value(msg: u32) -> Self {
        let mv = msg % 100;
        Self {
            code: msg / 100,
            opponent_move: (mv != 0).then_some(mv),
        }
    }

    pub fn action(&self) -> Action {
        match self.code {
            0 | 6 => Action::Move,
            code => GameResult::from_code(code).map_or(Action::Wait(code), Action::GameOver),
        }
    }
}

/// First message sent after the greeting: `"{player} {nickname}"`.
pub fn handshake_message(player: u8, nickname: &str) -> String {
    let nickname: String = nickname.chars().take(NICKNAME_MAX).collect();
    format!("{player} {nickname}")
}
