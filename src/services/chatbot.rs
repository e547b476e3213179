use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub const REPLY_PREFIX: &str = "AI: ";

/// How a reply is derived from the incoming message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyMode {
    /// `"AI: "` followed by the message reversed character by character.
    #[default]
    Reverse,
    /// The message, unchanged.
    Echo,
}

impl fmt::Display for ReplyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplyMode::Reverse => f.write_str("reverse"),
            ReplyMode::Echo => f.write_str("echo"),
        }
    }
}

/// Reverses `msg` by Unicode scalar value.
pub fn reverse(msg: &str) -> String {
    msg.chars().rev().collect()
}

pub fn generate_reply(mode: ReplyMode, user_msg: &str) -> String {
    match mode {
        ReplyMode::Reverse => format!("{}{}", REPLY_PREFIX, reverse(user_msg)),
        ReplyMode::Echo => user_msg.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_mode_prefixes_reversed_message() {
        assert_eq!(generate_reply(ReplyMode::Reverse, "hello"), "AI: olleh");
        assert_eq!(generate_reply(ReplyMode::Reverse, ""), "AI: ");
    }

    #[test]
    fn echo_mode_is_identity() {
        assert_eq!(generate_reply(ReplyMode::Echo, "hello"), "hello");
        assert_eq!(generate_reply(ReplyMode::Echo, ""), "");
    }

    #[test]
    fn default_mode_is_reverse() {
        assert_eq!(ReplyMode::default(), ReplyMode::Reverse);
    }
}
