// --- File: crates/planetwatcher_common/src/http.rs ---
use reqwest::Response;

pub mod client;

/// True when the transport produced a response with a 2xx status.
pub fn is_success(response: Option<&Response>) -> bool {
    response.is_some_and(|r| r.status().is_success())
}
