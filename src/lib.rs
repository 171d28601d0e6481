//! # Brigade
//!
//! Record store and reporting engine for a firefighting corps:
//! - Four entity stores (firefighters, equipment, occurrences, interventions)
//! - Monotonic ids and soft delete; history is never discarded
//! - Fixed-layout binary files, one per store
//! - Cross-entity reports for capacity, efficiency and fleet strain
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        CLI shell                            │
//! │              (validated operator input)                     │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        Session                              │
//! │         (owns the stores; load on open, save on close)      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │   Stores    │◄─────────│   Reports   │
//!   │  (Vec + id  │   read   │ (aggregates)│
//!   │   index)    │          └─────────────┘
//!   └──────┬──────┘
//!          │
//!          ▼
//!   ┌─────────────┐
//!   │  Persist    │
//!   │ (*.bin)     │
//!   └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod model;
pub mod store;
pub mod persist;
pub mod report;
pub mod session;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{BrigadeError, Result};
pub use config::Config;
pub use session::Session;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Brigade
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
