//! Version resolution layer
//!
//! Pure logic that turns an ordered version catalog and the current page
//! path into the set of versions worth surfacing.
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │    Token    │────▶│  Selector   │◀────│   Catalog   │
//! │ (from path) │     │  (decide)   │     │  (loaded)   │
//! └─────────────┘     └──────┬──────┘     └─────────────┘
//!                            │
//!                            ▼
//!                     ┌─────────────┐
//!                     │  Navigator  │
//!                     │ (walk back) │
//!                     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`cursor`]: Positions within a specific catalog
//! - [`navigator`]: Predecessor lookups and major-version floor queries
//! - [`selector`]: Decides featured versions and page staleness
//! - [`token`]: Derives the current version token from the page path

pub mod cursor;
pub mod navigator;
pub mod selector;
pub mod token;
