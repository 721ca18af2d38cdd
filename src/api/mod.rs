//! Backend integration layer: REST client and background request worker.

mod client;
mod dto;
mod worker;

pub use client::HttpChatBackend;
pub use worker::RequestWorker;

/// Returns the api module name for smoke checks.
pub fn module_name() -> &'static str {
    "api"
}
