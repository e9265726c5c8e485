//! Mixer Channels
//!
//! Presets belong to one of five routing channels. The mixer's database
//! stores the channel as a small integer in the `vad` column.

use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::error::CoreError;

/// Audio routing channel a preset belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Game,
    Chat,
    Mic,
    Media,
    Aux,
}

impl Channel {
    pub const ALL: [Channel; 5] = [
        Channel::Game,
        Channel::Chat,
        Channel::Mic,
        Channel::Media,
        Channel::Aux,
    ];

    /// Value of the `vad` column for this channel
    pub fn vad(self) -> i64 {
        match self {
            Channel::Game => 1,
            Channel::Chat => 2,
            Channel::Mic => 3,
            Channel::Media => 4,
            Channel::Aux => 5,
        }
    }

    pub fn from_vad(vad: i64) -> Result<Self, CoreError> {
        Channel::ALL
            .into_iter()
            .find(|c| c.vad() == vad)
            .ok_or(CoreError::UnknownVad(vad))
    }

    /// Name shown in the mixer UI
    pub fn display_name(self) -> &'static str {
        match self {
            Channel::Game => "Game",
            Channel::Chat => "Chat",
            Channel::Mic => "Mic",
            Channel::Media => "Media",
            Channel::Aux => "AUX",
        }
    }

    /// Parse a channel name, falling back to [`Channel::Game`].
    ///
    /// A warning is logged on fallback so a typo does not go unnoticed.
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            warn!(
                "Unknown channel {:?}, using {} (expected game, chat, mic, media or aux)",
                name,
                Channel::Game
            );
            Channel::Game
        })
    }
}

impl FromStr for Channel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "game" => Ok(Channel::Game),
            "chat" => Ok(Channel::Chat),
            "mic" => Ok(Channel::Mic),
            "media" => Ok(Channel::Media),
            "aux" => Ok(Channel::Aux),
            _ => Err(format!("unknown channel: {}", s)),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
