use crate::domain::constants::SHARE_TOKEN_LEN;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Client-generated capability token for share links: random bytes rendered
/// as lowercase hex, truncated to a fixed length.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShareToken(String);

impl ShareToken {
    pub fn generate() -> Self {
        Self::generate_with_len(SHARE_TOKEN_LEN)
    }

    pub fn generate_with_len(len: usize) -> Self {
        let mut bytes = [0u8; 16];
        rand::thread_rng().fill_bytes(&mut bytes);
        let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
        Self(hex[..len.min(hex.len())].to_string())
    }

    pub fn new(value: String) -> Result<Self, String> {
        if value.is_empty() {
            return Err("Share token cannot be empty".to_string());
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShareToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ShareToken> for String {
    fn from(token: ShareToken) -> Self {
        token.0
    }
}
