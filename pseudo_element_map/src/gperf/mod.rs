//! gperf source generation and the gperf run itself.

pub mod invoke;
pub mod template;

use std::io::{self, Write};

use crate::keywords::KeywordEntry;
pub use invoke::{gperf_arguments, Gperf, HashTableCompiler, GPERF_FLAGS};

/// Byte length of the longest keyword as written, `0` without entries.
///
/// This sizes the `LChar` buffer of the 16-bit lookup, so vendor prefixes and
/// a trailing `(` count.
pub fn longest_keyword(entries: &[KeywordEntry]) -> usize {
    entries.iter().map(|entry| entry.keyword().len()).max().unwrap_or(0)
}

/// Writes the complete gperf source for `entries` to `out`.
pub fn write_gperf_source<W: Write>(entries: &[KeywordEntry], out: &mut W) -> io::Result<()> {
    let max_keyword_length = longest_keyword(entries);

    out.write_all(template::HEADER.as_bytes())?;
    for entry in entries {
        writeln!(out, "\"{}\", {}", entry.keyword(), entry.enum_value())?;
    }
    out.write_all(template::LCHAR_LOOKUP.as_bytes())?;
    out.write_all(template::UCHAR_LOOKUP_HEAD.as_bytes())?;
    write!(out, "{max_keyword_length}")?;
    out.write_all(template::UCHAR_LOOKUP_TAIL.as_bytes())?;
    out.write_all(template::STRING_IMPL_LOOKUP.as_bytes())?;
    Ok(())
}
