//! # Stockroom Architecture
//!
//! Stockroom is an inventory service: items with a name, a description and
//! an optional photo, kept in a JSON document store, served over HTTP.
//!
//! It is built as a library with two thin clients (the HTTP router and the
//! CLI), so the consistency rules live in one place.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Clients (http/, cli/ in the binary)                        │
//! │  - Parse requests / arguments, map errors to statuses       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Parses ids, validates input, stages uploads              │
//! │  - Projects items into public views                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation                                 │
//! │  - Commits the collection first, cleans photo files after   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - ItemStore: locked read-modify-write over a backend       │
//! │  - PhotoStore: flat directory of uploaded files             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Consistency Rules
//!
//! - An item's `photo` names a file that exists after every successful
//!   operation touching that item.
//! - A photo file that no item references is removed, best-effort, once the
//!   collection no longer points at it. Failing to remove it is logged and
//!   never fails the request.
//! - Ids are `max(id) + 1` at registration time, and an id freed by a
//!   delete is not handed out again while the process runs.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Item collection backends and the photo directory
//! - [`model`]: `Item`, input types, and the public `ItemView`
//! - [`http`]: axum routes and error mapping
//! - [`config`]: Configuration loading
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod http;
pub mod model;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
