use serde::{Deserialize, Serialize};
use std::fmt;

/// Which environment version file a cycle bumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[serde(alias = "dev")]
    Development,
    #[serde(alias = "prod")]
    Production,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Development => f.write_str("development"),
            Mode::Production => f.write_str("production"),
        }
    }
}

/// Contents of the mode file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ModeConfig {
    pub mode: Mode,
}

/// Written once at bootstrap; the comments document the accepted aliases.
pub const DEFAULT_MODE_FILE: &str = "\
# mode: dev (alias for development) or mode: prod (alias for production)
mode: development
# or
# mode: production
";
