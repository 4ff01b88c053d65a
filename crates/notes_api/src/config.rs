use std::time::Duration;

use clap::Args;

/// Application configuration, read from flags or environment variables.
///
/// Environment variables:
/// - `MONGO_URI` - MongoDB connection string (required with the `mongodb` backend)
/// - `MONGO_DB` - Database name (default: "notes")
/// - `MONGO_COLLECTION` - Collection holding the notes (default: "notes")
/// - `REQUEST_TIMEOUT_SECS` - Whole-request deadline in seconds (default: 10)
#[derive(Args, Debug, Clone)]
pub struct Config {
    /// MongoDB connection string
    #[arg(long, env = "MONGO_URI")]
    pub mongo_uri: Option<String>,

    /// MongoDB database name
    #[arg(long, default_value = "notes", env = "MONGO_DB")]
    pub mongo_db: String,

    /// Collection that holds the notes
    #[arg(long, default_value = "notes", env = "MONGO_COLLECTION")]
    pub collection: String,

    /// Deadline for a whole HTTP request, in seconds
    #[arg(long, default_value_t = 10, env = "REQUEST_TIMEOUT_SECS")]
    pub request_timeout_secs: u64,
}

impl Config {
    /// Get the request deadline as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mongo_uri: None,
            mongo_db: "notes".to_string(),
            collection: "notes".to_string(),
            request_timeout_secs: 10,
        }
    }
}
