pub mod loader;
pub mod prober;

use std::time::Duration;

/// Shared blocking HTTP client for the manifest fetch and probes.
pub fn http_client() -> reqwest::blocking::Client {
    reqwest::blocking::Client::builder()
        .user_agent(format!("classfind/{}", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(10))
        .build()
        .expect("Failed to create HTTP client")
}
