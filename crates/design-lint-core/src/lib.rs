//! # design-lint-core
//!
//! Core framework for design-guideline linting over stylesheet and markup
//! sources.
//!
//! This crate provides the foundational types for building guideline
//! linters:
//!
//! - [`Check`] trait for per-file line-scanning checks
//! - [`GuidelineConfig`] for the merged allowed-values configuration
//! - [`Scanner`] for walking inputs and dispatching files by extension
//! - [`ValidationResult`] for representing findings
//! - [`report`] for rendering findings as text or JSON
//!
//! ## Example
//!
//! ```ignore
//! use design_lint_core::{GuidelineConfig, Scanner};
//!
//! let scanner = Scanner::builder()
//!     .config(GuidelineConfig::load(None)?)
//!     .stylesheet_checks(design_lint_rules::stylesheet_checks())
//!     .markup_checks(design_lint_rules::markup_checks())
//!     .build();
//!
//! let result = scanner.scan(&paths)?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod check;
mod config;
mod context;
mod scanner;
mod types;

/// Report rendering in text and JSON formats.
pub mod report;

pub use check::{Check, CheckBox};
pub use config::{ColorConfig, ConfigError, GuidelineConfig, SpacingConfig, TypographyConfig};
pub use context::FileContext;
pub use report::{ReportError, ReportFormat};
pub use scanner::{ScanError, Scanner, ScannerBuilder};
pub use types::{ScanResult, Severity, ValidationResult};
