//! Calc Common - Shared types and logic for India Tools
//!
//! Holds everything both the calculation daemon (calcd) and the CLI client
//! (calcctl) need: the static tool catalog, the wire contracts of the
//! `/api/*` endpoints, the calculation formulas, per-page form state and the
//! TOML configuration.

pub mod api;
pub mod calc;
pub mod catalog;
pub mod config;
pub mod error;
pub mod form;

pub use api::*;
pub use catalog::{
    catalog, filter_tools, find_by_id, find_by_path, Category, CategoryFilter, ToolDescriptor,
    CATEGORY_CHOICES, NO_TOOLS_FOUND,
};
pub use config::Config;
pub use error::{CalcError, CatalogError};
pub use form::{FormError, FormState, Outcome, CONNECTION_ERROR};
