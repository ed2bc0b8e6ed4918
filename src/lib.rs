//! StorCLI Prometheus Textfile Collector
//!
//! A one-shot metrics collector for Broadcom/LSI MegaRAID controllers.
//! It runs the vendor `storcli` management binary, parses its JSON
//! output (including several undocumented format quirks), and emits a
//! flat set of labeled gauges in the Prometheus text exposition format
//! for a node-exporter textfile collector to pick up.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────┐  exec   ┌────────────┐         ┌────────────┐
//! │ storcli  │ ──────► │   quirks   │ ──────► │   typed    │
//! │  binary  │  JSON   │ normalizer │         │  decoder   │
//! └──────────┘         └────────────┘         └─────┬──────┘
//!       │                                          │
//!       │ exec (once, lazy)   ┌────────────┐       ▼
//!       └────────────────────►│   detail   │  ┌────────────┐   text   ┌─────────┐
//!                             │   source   │─►│ collectors │ ───────► │ stdout  │
//!                             └────────────┘  └────────────┘          │ or file │
//!                                                                     └─────────┘
//! ```
//!
//! # Modules
//!
//! - [`storcli`] - Process client, quirk normalizer, and JSON types
//! - [`collectors`] - Model-to-gauge mappers
//! - [`metrics`] - Prometheus metric definitions
//! - [`output`] - Exposition writer
//! - [`config`] - Binary discovery and run configuration
//! - [`error`] - Error types
//!
//! # Error Model
//!
//! Two tiers, no retries: exec/decode failures and output write
//! failures abort the run before any output is produced; per-drive
//! detail resolution failures and malformed numeric sub-fields degrade
//! locally (warn + skip, or zero default) and the run continues.

pub mod collectors;
pub mod config;
pub mod error;
pub mod metrics;
pub mod output;
pub mod storcli;
