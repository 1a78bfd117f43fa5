//! MCP server exposing a Feedbin account as a set of tools.
//!
//! The server speaks JSON-RPC 2.0 over newline-delimited stdio and forwards
//! each tool call to the Feedbin REST API through [`feedbin_sdk`].

pub mod config;
pub mod protocol;
pub mod server;
pub mod tools;

pub use config::{ConfigError, ServerConfig};
pub use server::McpServer;
pub use tools::{register_feedbin_tools, ToolRegistry};
