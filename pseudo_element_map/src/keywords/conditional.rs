use tracing::debug;

use crate::config::BuildFlags;

const IF_DIRECTIVE: &str = "#if ";
const ENDIF_DIRECTIVE: &str = "#endif";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive<'a> {
    /// `#if CONDITION`, holding the trimmed, not yet normalized condition.
    If(&'a str),
    EndIf,
}

impl<'a> Directive<'a> {
    /// Recognizes a directive on an already trimmed line.
    ///
    /// Only `#if ` and `#endif` are directives. `#ifdef`, `#else` and friends
    /// are not, and end up as keyword lines.
    pub fn parse(line: &'a str) -> Option<Self> {
        if let Some(condition) = line.strip_prefix(IF_DIRECTIVE) {
            Some(Directive::If(condition.trim()))
        } else if line.starts_with(ENDIF_DIRECTIVE) {
            Some(Directive::EndIf)
        } else {
            None
        }
    }
}

/// Turns a function-like condition into a flag token: `ENABLE(VIDEO)` becomes
/// `ENABLE_VIDEO`.
pub fn normalize_condition(condition: &str) -> String {
    condition.replace('(', "_").replace(')', "")
}

/// Single-level `#if`/`#endif` filter.
///
/// The state is one flag, so regions do not nest: an inner `#if` that holds
/// leaves an outer skip in place, and the first `#endif` ends skipping
/// whatever the depth.
#[derive(Debug, Default)]
pub struct ConditionalFilter {
    skipping: bool,
}

impl ConditionalFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one raw input line through the filter.
    ///
    /// Returns the trimmed line when it is a keyword definition that should be
    /// emitted; blank lines, directives and lines in an excluded region give
    /// `None`.
    pub fn admit<'l>(&mut self, line: &'l str, flags: &BuildFlags) -> Option<&'l str> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        match Directive::parse(line) {
            Some(Directive::If(condition)) => {
                let flag = normalize_condition(condition);
                if !flags.is_active(&flag) {
                    debug!(%flag, "condition not active, skipping region");
                    self.skipping = true;
                }
                None
            }
            Some(Directive::EndIf) => {
                self.skipping = false;
                None
            }
            None if self.skipping => None,
            None => Some(line),
        }
    }
}
