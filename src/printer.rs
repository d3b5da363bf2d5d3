//! Aligned-table rendering of a parsed expression

use crate::parser::ParsedResult;

/// Column width field names are padded to; longer names are truncated.
pub const NAME_WIDTH: usize = 15;

/// Render each field on its own line: the display name padded into a
/// fixed-width column, followed by the space-joined values.
pub fn render(result: &ParsedResult) -> String {
    result
        .fields()
        .iter()
        .map(|field| {
            let name = if field.name.len() > NAME_WIDTH {
                &field.name[..NAME_WIDTH]
            } else {
                field.name
            };
            format!("{:<width$}{}", name, field.values.join(" "), width = NAME_WIDTH)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
