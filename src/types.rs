//! Core types for the cron expansion library

use serde::Serialize;
use thiserror::Error;

/// Result type alias for cron parsing operations
pub type Result<T> = std::result::Result<T, CronError>;

/// Cron parsing errors
#[derive(Debug, Error)]
pub enum CronError {
    /// Raw input does not have the standard six-field shape
    #[error("Not a supported cron format: '{0}'")]
    UnsupportedFormat(String),

    /// Tokenization was invoked on an input that was never recognized
    #[error("No cron fields found")]
    NoFieldsFound,

    /// A time-field token matched none of the known syntaxes
    #[error("Cannot parse field: '{0}'")]
    UnrecognizedField(String),
}

/// The six positional fields of a standard cron expression, in
/// left-to-right order: five time fields followed by the command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Minute of the hour (0-59)
    Minute,
    /// Hour of the day (0-23)
    Hour,
    /// Day of the month (1-31)
    DayOfMonth,
    /// Month of the year (1-12)
    Month,
    /// Day of the week (0-6, 0=Sunday)
    DayOfWeek,
    /// The command to execute, taken verbatim
    Command,
}

impl FieldKind {
    /// All six kinds in positional order
    pub const ALL: [FieldKind; 6] = [
        FieldKind::Minute,
        FieldKind::Hour,
        FieldKind::DayOfMonth,
        FieldKind::Month,
        FieldKind::DayOfWeek,
        FieldKind::Command,
    ];

    /// Position of this field within the expression (0..5)
    pub const fn index(self) -> usize {
        match self {
            FieldKind::Minute => 0,
            FieldKind::Hour => 1,
            FieldKind::DayOfMonth => 2,
            FieldKind::Month => 3,
            FieldKind::DayOfWeek => 4,
            FieldKind::Command => 5,
        }
    }

    /// Display name used by renderers
    pub const fn name(self) -> &'static str {
        match self {
            FieldKind::Minute => "minute",
            FieldKind::Hour => "hour",
            FieldKind::DayOfMonth => "day of month",
            FieldKind::Month => "month",
            FieldKind::DayOfWeek => "day of week",
            FieldKind::Command => "command",
        }
    }

    /// Legal numeric bounds for this field; `None` for the command field
    pub const fn domain(self) -> Option<FieldDomain> {
        match self {
            FieldKind::Minute => Some(FieldDomain { min: 0, max: 59 }),
            FieldKind::Hour => Some(FieldDomain { min: 0, max: 23 }),
            FieldKind::DayOfMonth => Some(FieldDomain { min: 1, max: 31 }),
            FieldKind::Month => Some(FieldDomain { min: 1, max: 12 }),
            FieldKind::DayOfWeek => Some(FieldDomain { min: 0, max: 6 }),
            FieldKind::Command => None,
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Inclusive numeric bounds of a time field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDomain {
    /// Inclusive minimum
    pub min: u32,
    /// Inclusive maximum
    pub max: u32,
}

impl FieldDomain {
    /// Check whether a value lies within the bounds
    pub fn contains(&self, value: u32) -> bool {
        self.min <= value && value <= self.max
    }
}

/// One field of a parsed expression, expanded to its concrete values
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpandedField {
    /// Display name of the originating field
    pub name: &'static str,

    /// Ordered concrete values: numeric strings for time fields, the
    /// literal token for the command field
    pub values: Vec<String>,
}
