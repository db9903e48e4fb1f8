//! # Prodz Architecture
//!
//! Prodz is a **UI-agnostic product catalog library**. The catalog lives
//! entirely in memory for the lifetime of one process; there is no storage
//! backend and nothing outlives the owning value.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, key reading, prompts, colored output          │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the catalog, returns structured Result types        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Catalog (catalog.rs)                                       │
//! │  - Doubly linked sequence over an index arena               │
//! │  - Insertion order, O(1) tail insert and unlink, cursor     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Catalog
//!
//! Products are kept in insertion order in a doubly linked chain. Rather
//! than heap-allocating nodes and aliasing raw pointers, nodes live in a
//! slot arena and link to each other by stable indices ([`catalog::NodeHandle`]).
//! The catalog also carries a **cursor**, a single "current position" used
//! for stateful back-and-forth navigation; see [`catalog`] for the exact
//! movement rules.
//!
//! Product ids are an intended-unique key, but uniqueness is deliberately
//! not enforced: inserting a duplicate id succeeds, and id lookups resolve
//! to the earliest inserted match.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, catalog), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! ## Testing Strategy
//!
//! 1. **Catalog** (`catalog.rs`): the lion's share of testing — structural
//!    invariants are re-checked after every mutation sequence.
//! 2. **Commands** (`commands/*.rs`): unit tests of the operation logic
//!    against a fresh catalog.
//! 3. **API** (`tests/`): integration flows through the facade, plus an
//!    end-to-end run of the binary's demo mode.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`catalog`]: The doubly linked product sequence and its cursor
//! - [`model`]: Core data types (`Product`, `ProductPatch`)
//! - [`error`]: Error types
//! - `cli`: Menu, prompts, and printing for the binary (not part of the lib API)

pub mod api;
pub mod catalog;
pub mod commands;
pub mod error;
pub mod model;
