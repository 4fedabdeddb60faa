//! Reading of the pseudo-element keyword list.
//!
//! The input is line based:
//! - blank lines are ignored,
//! - `#if CONDITION` / `#endif` gate a region on a build flag,
//! - every other line is `keyword` or `keyword, EnumName`.
//!
//! A bare keyword gets a derived enumerator (see [`derive_enum_name`]), an
//! explicit name is used verbatim inside the `CSSSelector::` namespace.

pub mod conditional;
pub mod enum_name;

use std::path::Path;

use smol_str::SmolStr;
use tracing::trace;

use crate::config::BuildFlags;
use crate::error::{GenError, GenResult};
pub use conditional::{ConditionalFilter, Directive};
pub use enum_name::{derive_enum_name, explicit_enum_name, VendorPrefix};

/// One keyword of the generated table and the enumerator it maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordEntry {
    keyword: SmolStr,
    enum_value: String,
}

impl KeywordEntry {
    pub fn new(keyword: impl Into<SmolStr>, enum_value: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            enum_value: enum_value.into(),
        }
    }

    /// Builds an entry from a trimmed definition line. `line` is 1-based and
    /// only used for error reporting.
    pub fn from_definition(line: usize, definition: &str) -> GenResult<Self> {
        let mut fields = definition.split(',');
        let keyword = fields.next().unwrap_or_default().trim();
        let enum_value = match fields.next() {
            Some(explicit) => explicit_enum_name(explicit.trim()),
            None => derive_enum_name(keyword).ok_or_else(|| GenError::MalformedKeyword {
                line,
                keyword: keyword.to_owned(),
            })?,
        };
        Ok(Self::new(keyword, enum_value))
    }

    /// Keyword exactly as written in the input, including a vendor prefix or
    /// trailing `(`.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn enum_value(&self) -> &str {
        &self.enum_value
    }
}

/// Parses keyword definitions, dropping lines excluded by `flags`.
/// Entries keep input order.
pub fn parse_keyword_definitions(text: &str, flags: &BuildFlags) -> GenResult<Vec<KeywordEntry>> {
    let mut filter = ConditionalFilter::new();
    let mut entries = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let Some(definition) = filter.admit(line, flags) else {
            continue;
        };
        let entry = KeywordEntry::from_definition(index + 1, definition)?;
        trace!(keyword = entry.keyword(), enum_value = entry.enum_value(), "keyword");
        entries.push(entry);
    }
    Ok(entries)
}

/// Reads the keyword file at `path`; the file is closed before parsing.
pub fn read_keyword_definitions(path: &Path, flags: &BuildFlags) -> GenResult<Vec<KeywordEntry>> {
    let text = std::fs::read_to_string(path).map_err(|source| GenError::ReadInput {
        path: path.to_owned(),
        source,
    })?;
    parse_keyword_definitions(&text, flags)
}
