// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific scraping specifications. A spec encodes *where the ground
//! truth lives in the HTML* of one page and *how to extract it robustly*.
//!
//! ## What lives here
//! - **Pure HTML parsing** of a page snapshot handed in as text.
//! - **Selector choice & precedence** (e.g. the ordered heading-level list the
//!   agenda center needs because its categories use different heading levels).
//! - **Tolerant extraction**: a row whose substructure is missing is skipped,
//!   never the whole page.
//!
//! ## What does **not** live here
//! - **Fetching** (`core::net`), **caching/persistence** (`store`), and
//!   **export formatting** (`table`, `file`).
//! - **Compliance decisions**: those belong to `evaluate`.
//!
//! ## Typical call chain
//! ```text
//! GUI / CLI → runner → scrape::collect_agendas → core::net::http_get
//!                                             ↘ specs::agenda_center::extract
//!                                               returns Agendas (records)
//!                      store::save_dataset (outside of specs)
//! ```
//!
//! ## Testing notes
//! Specs are tested **offline** against captured fixtures (`tests/fixtures`).
pub mod agenda_center;
