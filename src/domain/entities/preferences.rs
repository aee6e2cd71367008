use serde::{Deserialize, Serialize};

/// On-device preferences blob; unknown fields from older app versions are
/// tolerated and dropped on the next write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub push_enabled: bool,
    pub email_enabled: bool,
    pub analytics_enabled: bool,
    pub language: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            push_enabled: true,
            email_enabled: true,
            analytics_enabled: true,
            language: "pt-BR".to_string(),
        }
    }
}

impl Preferences {
    pub fn toggle_language(&mut self) {
        self.language = if self.language == "pt-BR" {
            "en-US".to_string()
        } else {
            "pt-BR".to_string()
        };
    }
}
