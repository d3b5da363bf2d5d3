//! cron-expand - standard cron expression expansion
//!
//! Interprets a six-field cron schedule string and expands each field to
//! the concrete values it denotes:
//! ```text
//! ┌───────────── minute (0-59)
//! │ ┌───────────── hour (0-23)
//! │ │ ┌───────────── day of month (1-31)
//! │ │ │ ┌───────────── month (1-12)
//! │ │ │ │ ┌───────────── day of week (0-6, 0=Sunday)
//! │ │ │ │ │ ┌───────────── command (verbatim)
//! * * * * * /path/command
//! ```
//!
//! Supported field syntaxes: exact number, `*` wildcard, two-value comma
//! list, `*/n` step, and `a-b` range. Non-standard dialects (named macros,
//! seconds or year fields) are not supported.
//!
//! ## Quick Start
//!
//! ```
//! use cron_expand::{FieldKind, ParsedResult, printer};
//!
//! let parsed = ParsedResult::parse("*/15 0 1,15 * 1-5 /usr/bin/find").unwrap();
//!
//! assert_eq!(parsed.get(FieldKind::Minute).values, ["0", "15", "30", "45"]);
//! assert_eq!(parsed.get(FieldKind::DayOfMonth).values, ["1", "15"]);
//!
//! // One aligned line per field, ready for display.
//! let table = printer::render(&parsed);
//! assert!(table.starts_with("minute         0 15 30 45"));
//! ```

pub mod format;
mod parser;
pub mod printer;
mod types;

pub use parser::{FieldSyntax, ParsedResult};
pub use types::{CronError, ExpandedField, FieldDomain, FieldKind, Result};
