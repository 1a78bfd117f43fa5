//! Transport layer for the Feedbin SDK.

pub mod http;

pub use http::HttpTransport;
