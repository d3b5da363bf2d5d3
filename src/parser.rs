//! Cron field classification and expansion
//!
//! Each of the five time fields uses one of these sub-grammars:
//! ```text
//! 5      - exact value
//! *      - every value in the field's domain
//! 1,15   - exactly the two named values
//! */15   - every 15th value starting at the domain minimum
//! 9-17   - every value from 9 to 17 inclusive
//! ```
//! The sixth field is the command and is taken verbatim.

use crate::format;
use crate::types::{CronError, ExpandedField, FieldDomain, FieldKind, Result};
use serde::Serialize;

/// One recognized cron field sub-grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSyntax {
    /// A single in-domain value, e.g. `5`
    Number(u32),
    /// `*`: every value in the domain
    Wildcard,
    /// `a,b`: exactly the two named values, in the given order
    List(u32, u32),
    /// `*/n`: every nth value starting at the domain minimum
    Step(u32),
    /// `a-b`: every value from a to b inclusive
    Range(u32, u32),
}

impl FieldSyntax {
    /// Classify a time-field token against its domain.
    ///
    /// Strategies are tried in fixed priority order: number, wildcard,
    /// list, step, range. The first eligible one wins, so a plain number
    /// is never reinterpreted as any other syntax. Tokens matching no
    /// strategy, including out-of-domain values, fail with
    /// [`CronError::UnrecognizedField`].
    pub fn classify(token: &str, domain: FieldDomain) -> Result<Self> {
        if let Ok(value) = token.parse::<u32>() {
            if domain.contains(value) {
                return Ok(FieldSyntax::Number(value));
            }
        }

        if token == "*" {
            return Ok(FieldSyntax::Wildcard);
        }

        if let Some((first, second)) = as_two_value_list(token) {
            if domain.contains(first) && domain.contains(second) {
                return Ok(FieldSyntax::List(first, second));
            }
        }

        if let Some(step) = as_step(token) {
            // A zero step would never advance past the minimum.
            if step != 0 && domain.contains(step) {
                return Ok(FieldSyntax::Step(step));
            }
        }

        if let Some((start, end)) = as_range(token) {
            if start <= end && domain.contains(start) && domain.contains(end) {
                return Ok(FieldSyntax::Range(start, end));
            }
        }

        Err(CronError::UnrecognizedField(token.to_string()))
    }

    /// Expand to the concrete values this syntax denotes within the domain.
    pub fn expand(self, domain: FieldDomain) -> Vec<String> {
        match self {
            FieldSyntax::Number(value) => vec![value.to_string()],
            FieldSyntax::Wildcard => (domain.min..=domain.max)
                .map(|value| value.to_string())
                .collect(),
            FieldSyntax::List(first, second) => {
                vec![first.to_string(), second.to_string()]
            }
            FieldSyntax::Step(step) => {
                let mut values = Vec::new();
                let mut current = domain.min;
                while current <= domain.max {
                    values.push(current.to_string());
                    current += step;
                }
                values
            }
            FieldSyntax::Range(start, end) => {
                (start..=end).map(|value| value.to_string()).collect()
            }
        }
    }
}

/// `a,b` with digits and commas only, no leading/trailing comma, and
/// exactly two values. Longer lists are not part of this grammar.
fn as_two_value_list(token: &str) -> Option<(u32, u32)> {
    if !token.chars().all(|c| c.is_ascii_digit() || c == ',') {
        return None;
    }
    if token.starts_with(',') || token.ends_with(',') {
        return None;
    }
    let (first, second) = token.split_once(',')?;
    if second.contains(',') {
        return None;
    }
    Some((first.parse().ok()?, second.parse().ok()?))
}

/// `*/n` with a literal wildcard base; numeric bases are not supported.
fn as_step(token: &str) -> Option<u32> {
    let digits = token.strip_prefix("*/")?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// `a-b` with digits on both sides of a single dash.
fn as_range(token: &str) -> Option<(u32, u32)> {
    let (start, end) = token.split_once('-')?;
    if start.is_empty() || !start.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if end.is_empty() || !end.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some((start.parse().ok()?, end.parse().ok()?))
}

/// A fully expanded cron expression
#[derive(Debug, Clone, Serialize)]
pub struct ParsedResult {
    /// Original expression string
    pub expression: String,
    /// Expanded fields, indexed by [`FieldKind`] position
    fields: [ExpandedField; format::FIELD_COUNT],
}

impl ParsedResult {
    /// Parse and expand a standard six-field cron expression.
    ///
    /// All six fields expand successfully or the whole parse fails; there
    /// is no partial result.
    ///
    /// # Examples
    ///
    /// ```
    /// use cron_expand::{FieldKind, ParsedResult};
    ///
    /// let parsed = ParsedResult::parse("*/15 0 1,15 * 1-5 /usr/bin/find").unwrap();
    /// assert_eq!(parsed.get(FieldKind::Minute).values, ["0", "15", "30", "45"]);
    /// assert_eq!(parsed.get(FieldKind::Command).values, ["/usr/bin/find"]);
    /// ```
    pub fn parse(expression: &str) -> Result<Self> {
        if !format::is_standard_format(expression) {
            return Err(CronError::UnsupportedFormat(expression.to_string()));
        }

        let [minute, hour, day_of_month, month, day_of_week, command] =
            format::tokenize(expression)?;
        tracing::debug!(expression, "recognized standard cron format");

        let fields = [
            expand_field(FieldKind::Minute, minute)?,
            expand_field(FieldKind::Hour, hour)?,
            expand_field(FieldKind::DayOfMonth, day_of_month)?,
            expand_field(FieldKind::Month, month)?,
            expand_field(FieldKind::DayOfWeek, day_of_week)?,
            expand_field(FieldKind::Command, command)?,
        ];

        Ok(Self {
            expression: expression.to_string(),
            fields,
        })
    }

    /// Expanded values for the given field kind
    pub fn get(&self, kind: FieldKind) -> &ExpandedField {
        &self.fields[kind.index()]
    }

    /// All six expanded fields in positional order
    pub fn fields(&self) -> &[ExpandedField; format::FIELD_COUNT] {
        &self.fields
    }
}

/// Expand one token for its field kind; the command field has no numeric
/// domain and is accepted verbatim.
fn expand_field(kind: FieldKind, token: &str) -> Result<ExpandedField> {
    let values = match kind.domain() {
        Some(domain) => FieldSyntax::classify(token, domain)?.expand(domain),
        None => vec![token.to_string()],
    };
    Ok(ExpandedField {
        name: kind.name(),
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINUTE: FieldDomain = FieldDomain { min: 0, max: 59 };
    const DAY_OF_MONTH: FieldDomain = FieldDomain { min: 1, max: 31 };
    const MONTH: FieldDomain = FieldDomain { min: 1, max: 12 };

    fn values(expression: &str, kind: FieldKind) -> Vec<String> {
        ParsedResult::parse(expression)
            .unwrap()
            .get(kind)
            .values
            .clone()
    }

    #[test]
    fn test_classify_number() {
        assert_eq!(
            FieldSyntax::classify("5", MINUTE).unwrap(),
            FieldSyntax::Number(5)
        );
        assert_eq!(
            FieldSyntax::classify("59", MINUTE).unwrap(),
            FieldSyntax::Number(59)
        );
    }

    #[test]
    fn test_classify_number_normalizes_leading_zero() {
        let syntax = FieldSyntax::classify("07", MINUTE).unwrap();
        assert_eq!(syntax.expand(MINUTE), vec!["7"]);
    }

    #[test]
    fn test_classify_rejects_out_of_domain_number() {
        let err = FieldSyntax::classify("60", MINUTE).unwrap_err();
        assert!(matches!(err, CronError::UnrecognizedField(t) if t == "60"));
    }

    #[test]
    fn test_classify_wildcard() {
        assert_eq!(
            FieldSyntax::classify("*", MINUTE).unwrap(),
            FieldSyntax::Wildcard
        );
    }

    #[test]
    fn test_wildcard_expands_whole_domain() {
        for kind in [
            FieldKind::Minute,
            FieldKind::Hour,
            FieldKind::DayOfMonth,
            FieldKind::Month,
            FieldKind::DayOfWeek,
        ] {
            let domain = kind.domain().unwrap();
            let expanded = FieldSyntax::Wildcard.expand(domain);
            assert_eq!(expanded.len() as u32, domain.max - domain.min + 1);
            assert_eq!(expanded.first().unwrap(), &domain.min.to_string());
            assert_eq!(expanded.last().unwrap(), &domain.max.to_string());
        }
    }

    #[test]
    fn test_classify_list_keeps_given_order() {
        let syntax = FieldSyntax::classify("40,5", MINUTE).unwrap();
        assert_eq!(syntax, FieldSyntax::List(40, 5));
        assert_eq!(syntax.expand(MINUTE), vec!["40", "5"]);
    }

    #[test]
    fn test_classify_rejects_long_list() {
        let err = FieldSyntax::classify("1,2,3", MINUTE).unwrap_err();
        assert!(matches!(err, CronError::UnrecognizedField(t) if t == "1,2,3"));
    }

    #[test]
    fn test_classify_rejects_malformed_lists() {
        assert!(FieldSyntax::classify(",5", MINUTE).is_err());
        assert!(FieldSyntax::classify("5,", MINUTE).is_err());
        assert!(FieldSyntax::classify("5,,7", MINUTE).is_err());
        assert!(FieldSyntax::classify("5,x", MINUTE).is_err());
    }

    #[test]
    fn test_classify_rejects_out_of_domain_list() {
        assert!(FieldSyntax::classify("5,60", MINUTE).is_err());
    }

    #[test]
    fn test_step_starts_at_domain_minimum() {
        let syntax = FieldSyntax::classify("*/10", DAY_OF_MONTH).unwrap();
        assert_eq!(syntax, FieldSyntax::Step(10));
        assert_eq!(syntax.expand(DAY_OF_MONTH), vec!["1", "11", "21", "31"]);
    }

    #[test]
    fn test_step_over_minute_domain() {
        let syntax = FieldSyntax::classify("*/15", MINUTE).unwrap();
        assert_eq!(syntax.expand(MINUTE), vec!["0", "15", "30", "45"]);
    }

    #[test]
    fn test_classify_rejects_numeric_step_base() {
        let err = FieldSyntax::classify("5/3", MINUTE).unwrap_err();
        assert!(matches!(err, CronError::UnrecognizedField(t) if t == "5/3"));
    }

    #[test]
    fn test_classify_rejects_zero_step() {
        assert!(FieldSyntax::classify("*/0", MINUTE).is_err());
    }

    #[test]
    fn test_classify_rejects_out_of_domain_step() {
        assert!(FieldSyntax::classify("*/13", MONTH).is_err());
    }

    #[test]
    fn test_classify_range() {
        let syntax = FieldSyntax::classify("13-27", MINUTE).unwrap();
        assert_eq!(syntax, FieldSyntax::Range(13, 27));
        assert_eq!(
            syntax.expand(MINUTE),
            (13..=27).map(|v| v.to_string()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_classify_rejects_inverted_range() {
        assert!(FieldSyntax::classify("27-13", MINUTE).is_err());
    }

    #[test]
    fn test_classify_rejects_out_of_domain_range() {
        assert!(FieldSyntax::classify("5-99", MINUTE).is_err());
        assert!(FieldSyntax::classify("0-5", MONTH).is_err());
    }

    #[test]
    fn test_classify_rejects_mixed_separators() {
        assert!(FieldSyntax::classify("1/3-5", MINUTE).is_err());
        assert!(FieldSyntax::classify("1-3,5", MINUTE).is_err());
        assert!(FieldSyntax::classify("1-2-3", MINUTE).is_err());
    }

    #[test]
    fn test_number_priority_over_other_syntaxes() {
        // A bare in-domain number always classifies as Number.
        assert_eq!(
            FieldSyntax::classify("6", FieldDomain { min: 0, max: 6 }).unwrap(),
            FieldSyntax::Number(6)
        );
    }

    #[test]
    fn test_parse_command_taken_verbatim() {
        assert_eq!(
            values("* * * * * */weird,token-5", FieldKind::Command),
            vec!["*/weird,token-5"]
        );
    }

    #[test]
    fn test_parse_rejects_unsupported_shape() {
        let err = ParsedResult::parse("* * * *").unwrap_err();
        assert!(matches!(err, CronError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_parse_aborts_on_first_bad_field() {
        let err = ParsedResult::parse("61 * * * * /path/command").unwrap_err();
        assert!(matches!(err, CronError::UnrecognizedField(t) if t == "61"));
    }

    #[test]
    fn test_parse_populates_every_kind() {
        let parsed = ParsedResult::parse("1 3 8 12 2 /path/command").unwrap();
        for kind in FieldKind::ALL {
            assert_eq!(parsed.get(kind).name, kind.name());
            assert!(!parsed.get(kind).values.is_empty());
        }
        assert_eq!(parsed.expression, "1 3 8 12 2 /path/command");
    }

    #[test]
    fn test_parse_expands_every_field_kind() {
        let parsed = ParsedResult::parse("*/15 */3 */10 */2 */1 /path/command").unwrap();
        assert_eq!(parsed.get(FieldKind::Minute).values, ["0", "15", "30", "45"]);
        assert_eq!(
            parsed.get(FieldKind::Hour).values,
            ["0", "3", "6", "9", "12", "15", "18", "21"]
        );
        assert_eq!(
            parsed.get(FieldKind::DayOfMonth).values,
            ["1", "11", "21", "31"]
        );
        assert_eq!(
            parsed.get(FieldKind::Month).values,
            ["1", "3", "5", "7", "9", "11"]
        );
        assert_eq!(
            parsed.get(FieldKind::DayOfWeek).values,
            ["0", "1", "2", "3", "4", "5", "6"]
        );
    }

    #[test]
    fn test_serialize_to_json() {
        let parsed = ParsedResult::parse("1 3 8 12 2 /path/command").unwrap();
        let json = serde_json::to_value(&parsed).unwrap();
        assert_eq!(json["expression"], "1 3 8 12 2 /path/command");
        assert_eq!(json["fields"][0]["name"], "minute");
        assert_eq!(json["fields"][0]["values"][0], "1");
        assert_eq!(json["fields"][5]["values"][0], "/path/command");
    }
}
