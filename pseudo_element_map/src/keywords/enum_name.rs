use strum::{AsRefStr, EnumIter, IntoEnumIterator};

/// Namespace every emitted enumerator lives in.
pub const ENUM_NAMESPACE: &str = "CSSSelector::";

/// Prefix of derived enumerators, e.g. `CSSSelector::PseudoElementFirstLine`.
pub const DERIVED_ENUM_PREFIX: &str = "CSSSelector::PseudoElement";

/// Vendor prefixes that do not take part in the enum name.
///
/// Iteration order is the order they are stripped in: `-webkit--khtml-foo`
/// loses both.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, AsRefStr)]
pub enum VendorPrefix {
    #[strum(serialize = "-webkit-")]
    Webkit,
    #[strum(serialize = "-khtml-")]
    Khtml,
}

/// Derives `CSSSelector::PseudoElement<UpperCamelCase>` from a keyword.
///
/// A trailing `(` (functional pseudo-element) and any vendor prefix are
/// dropped first, then each `-` separated segment gets its first character
/// uppercased. Returns `None` when a segment is empty, which covers empty
/// keywords and leading, trailing or doubled dashes: there is no sensible
/// enumerator for those.
pub fn derive_enum_name(keyword: &str) -> Option<String> {
    let mut name = keyword.strip_suffix('(').unwrap_or(keyword);
    for prefix in VendorPrefix::iter() {
        name = name.strip_prefix(prefix.as_ref()).unwrap_or(name);
    }

    let mut enum_name = String::with_capacity(DERIVED_ENUM_PREFIX.len() + name.len());
    enum_name.push_str(DERIVED_ENUM_PREFIX);
    for segment in name.split('-') {
        let mut chars = segment.chars();
        let first = chars.next()?;
        enum_name.extend(first.to_uppercase());
        enum_name.push_str(chars.as_str());
    }
    Some(enum_name)
}

/// Enumerator for an explicit second field, used verbatim.
pub fn explicit_enum_name(suffix: &str) -> String {
    format!("{ENUM_NAMESPACE}{suffix}")
}
