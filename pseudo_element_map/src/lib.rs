//! Generator for WebCore's selector pseudo-element lookup table.
//!
//! Reads `SelectorPseudoElementTypeMap.in`, writes a gperf source mapping each
//! keyword to its `CSSSelector::PseudoElement*` enumerator and runs gperf on it.

pub mod config;
pub mod error;
pub mod generate;
pub mod gperf;
pub mod keywords;
pub mod logging;

pub use config::{BuildFlags, Cli, GeneratorConfig};
pub use error::{GenError, GenResult};
pub use generate::{generate, GenerateReport};
pub use gperf::{Gperf, HashTableCompiler};
pub use keywords::KeywordEntry;
