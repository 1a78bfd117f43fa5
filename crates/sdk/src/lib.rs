//! # Feedbin SDK
//!
//! Async Rust client for the [Feedbin](https://feedbin.com) v2 REST API.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use feedbin_sdk::{EntryQuery, FeedbinClient, FeedbinResult};
//!
//! # async fn example() -> FeedbinResult<()> {
//! let client = FeedbinClient::builder()
//!     .credentials("reader@example.com", "password")
//!     .build()?;
//!
//! let page = client
//!     .entries()
//!     .list(&EntryQuery::new().read(false).per_page(20))
//!     .await?;
//! println!("{} unread entries on this page", page.items.len());
//!
//! if let Some(id) = page.items.first().and_then(|entry| entry.id()) {
//!     client.unread_entries().mark_read(&[id]).await?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Every call is a single HTTP request. Nothing is cached and nothing is
//! retried; errors come back as [`FeedbinError`].

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod pagination;
pub mod transport;

pub use api::{EntryQuery, MAX_ENTRY_IDS_PER_REQUEST};
pub use client::{FeedbinClient, FeedbinClientBuilder};
pub use config::{ClientConfig, Credentials, DEFAULT_BASE_URL};
pub use error::{FeedbinError, FeedbinResult};
pub use models::{Entry, Feed, Subscription, Tag, Tagging};
pub use pagination::Page;
