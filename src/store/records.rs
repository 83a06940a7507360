use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};

/// The pending commit record written by an editor or a human.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingCommit {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub commit_message: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl PendingCommit {
    /// Whitespace-only messages count as empty.
    pub fn is_empty(&self) -> bool {
        self.commit_message.trim().is_empty()
    }
}

/// Base metadata written when the project has none.
pub fn default_manifest() -> Value {
    json!({
        "name": "project-name",
        "version": "1.0.0",
        "description": "",
        "main": "index.js",
        "scripts": {
            "test": "echo \"Error: no test specified\" && exit 1"
        },
        "author": "",
        "license": "ISC"
    })
}
