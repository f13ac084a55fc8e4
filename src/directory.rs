//! Formats provider records into document blocks.

use crate::model::Block;
use crate::provider::Provider;
use crate::richtext::{parse_markup, ParseError, Span};

/// Title printed at the top of the directory.
pub const DIRECTORY_TITLE: &str = "Provider Directory";

const TITLE_GAP_INCHES: f64 = 0.3;
const HEADING_GAP_INCHES: f64 = 0.1;
const ENTRY_GAP_INCHES: f64 = 0.2;

/// Builds the complete block list: the title followed by one entry per provider.
pub fn directory_blocks(providers: &[Provider]) -> Result<Vec<Block>, ParseError> {
    let mut blocks = vec![
        Block::title(DIRECTORY_TITLE),
        Block::spacer_inches(TITLE_GAP_INCHES),
    ];

    for (index, provider) in providers.iter().enumerate() {
        blocks.extend(provider_blocks(index + 1, provider)?);
    }

    Ok(blocks)
}

/// Builds the blocks for a single entry; `number` is the 1-based position shown in the heading.
pub fn provider_blocks(number: usize, provider: &Provider) -> Result<Vec<Block>, ParseError> {
    let specialty = parse_markup(&format!(
        "**Specialty:** {}",
        escape_markup(provider.specialty().label())
    ))?;

    Ok(vec![
        Block::heading(format!("{}. {}", number, provider.name())),
        Block::spacer_inches(HEADING_GAP_INCHES),
        body_line(format!("NPI: {}", provider.npi())),
        body_line(format!("Phone: {}", provider.phone())),
        body_line(provider.address()),
        body_line(provider.city()),
        Block::body(specialty),
        Block::spacer_inches(ENTRY_GAP_INCHES),
    ])
}

fn body_line(text: impl Into<String>) -> Block {
    Block::body(vec![Span::new(text)])
}

fn escape_markup(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '*' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
