//! Transport layer for the Dashboard client.

pub mod http;

pub use http::HttpTransport;
