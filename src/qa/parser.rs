//! QA log section parser
//!
//! Splits a log into its five sections with a single scan over lines.
//! A heading is a line that is exactly `### <label>` and is newline
//! terminated; its block runs until the next line starting with `###`
//! or the end of the text.

use super::section::{ParsedLog, SectionName};

/// Characters stripped from both ends of a bullet line
const BULLET_CHARS: [char; 2] = ['-', ' '];

pub(crate) fn parse(text: &str) -> ParsedLog {
    // Raw text of each section's first block; `Some` once its heading was seen
    let mut blocks: [Option<String>; 5] = Default::default();
    let mut current: Option<SectionName> = None;

    for raw in text.split_inclusive('\n') {
        if raw.starts_with("###") {
            current = raw
                .strip_suffix('\n')
                .and_then(SectionName::from_heading)
                .filter(|name| blocks[name.index()].is_none());
            if let Some(name) = current {
                blocks[name.index()] = Some(String::new());
            }
            continue;
        }

        if let Some(name) = current
            && let Some(block) = blocks[name.index()].as_mut()
        {
            block.push_str(raw);
        }
    }

    ParsedLog::from_sections(
        blocks.map(|block| block.as_deref().map(block_items).unwrap_or_default()),
    )
}

/// Bullet items of one block, in order
///
/// The block as a whole is trimmed first, so only its first and last lines
/// lose outer whitespace before the bullet strip.
fn block_items(block: &str) -> Vec<String> {
    block.trim().split('\n').filter_map(normalize_line).collect()
}

/// Strip bullet markers, then whitespace, from both ends; `None` if nothing is left
fn normalize_line(line: &str) -> Option<String> {
    let item = line.trim_matches(BULLET_CHARS.as_slice()).trim();
    if item.is_empty() {
        None
    } else {
        Some(item.to_string())
    }
}
