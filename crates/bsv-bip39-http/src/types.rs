//! HTTP source configuration.

/// Configuration for an [`HttpWordlistSource`](crate::HttpWordlistSource).
#[derive(Debug, Clone)]
pub struct HttpSourceConfig {
    /// Directory URL holding the word-list files; a trailing slash is tolerated.
    pub base_url: String,
    /// File extension appended to the list name.
    pub file_extension: String,
}

impl Default for HttpSourceConfig {
    fn default() -> Self {
        Self {
            base_url: "https://raw.githubusercontent.com/bitcoin/bips/master/bip-0039".to_string(),
            file_extension: "txt".to_string(),
        }
    }
}
