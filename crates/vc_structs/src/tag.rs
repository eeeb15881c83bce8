//! The per-field tag mini-language.
//!
//! A tag is `key,option,option...`: the key renames the field (an empty key
//! keeps the declared name) and the options adjust how the field is encoded.
//! A key of `-` excludes the field, whatever options follow it.

/// Excludes a field when used as the key.
pub const IGNORE: &str = "-";

/// Skip the field when its value is empty.
pub const OMIT_EMPTY: &str = "omitempty";

/// Keep nested records as raw values instead of recursing into them.
pub const OMIT_NESTED: &str = "omitnested";

/// Splice a nested map into the parent map.
pub const FLATTEN: &str = "flatten";

/// Emit scalars and `Display` values as strings.
pub const STRING: &str = "string";

// -----------------------------------------------------------------------------
// TagSpec

/// A parsed field tag.
///
/// # Examples
///
/// ```
/// use vc_structs::tag::TagSpec;
///
/// let tag = TagSpec::parse("created_at,omitempty,string");
///
/// assert_eq!(tag.name(), Some("created_at"));
/// assert!(tag.omit_empty());
/// assert!(tag.as_string());
/// assert!(!tag.flatten());
///
/// let tag = TagSpec::parse(",flatten");
/// assert_eq!(tag.name(), None);
/// assert!(tag.flatten());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TagSpec<'a> {
    key: &'a str,
    options: TagOptions<'a>,
}

impl<'a> TagSpec<'a> {
    /// Splits `tag` on its first comma into key and options. Never fails.
    pub fn parse(tag: &'a str) -> Self {
        match tag.split_once(',') {
            Some((key, options)) => Self {
                key,
                options: TagOptions(options),
            },
            None => Self {
                key: tag,
                options: TagOptions(""),
            },
        }
    }

    /// Returns `true` if the key of `tag` excludes its field.
    ///
    /// Checked before the options are looked at, so `-,omitempty` excludes
    /// the field too.
    #[inline]
    pub fn is_ignored(tag: &str) -> bool {
        TagSpec::parse(tag).key() == IGNORE
    }

    /// Returns the raw key, empty when the tag does not rename the field.
    #[inline]
    pub fn key(&self) -> &'a str {
        self.key
    }

    /// Returns the rename, if the tag has one.
    #[inline]
    pub fn name(&self) -> Option<&'a str> {
        (!self.key.is_empty()).then_some(self.key)
    }

    #[inline]
    pub fn options(&self) -> TagOptions<'a> {
        self.options
    }

    /// Returns `true` if `option` is set.
    #[inline]
    pub fn has(&self, option: &str) -> bool {
        self.options.contains(option)
    }

    #[inline]
    pub fn omit_empty(&self) -> bool {
        self.has(OMIT_EMPTY)
    }

    #[inline]
    pub fn omit_nested(&self) -> bool {
        self.has(OMIT_NESTED)
    }

    #[inline]
    pub fn flatten(&self) -> bool {
        self.has(FLATTEN)
    }

    #[inline]
    pub fn as_string(&self) -> bool {
        self.has(STRING)
    }
}

// -----------------------------------------------------------------------------
// TagOptions

/// The comma-separated options of a tag. Unknown options are kept.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TagOptions<'a>(&'a str);

impl<'a> TagOptions<'a> {
    /// Returns `true` if `option` is one of the options.
    pub fn contains(&self, option: &str) -> bool {
        self.iter().any(|candidate| candidate == option)
    }

    /// Iterates over the options in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + use<'a> {
        let options = self.0;
        options.split(',').filter(|option| !option.is_empty())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::TagSpec;

    #[test]
    fn key_only() {
        let tag = TagSpec::parse("name");
        assert_eq!(tag.key(), "name");
        assert!(tag.options().is_empty());
    }

    #[test]
    fn options_only() {
        let tag = TagSpec::parse(",omitempty,omitnested");
        assert_eq!(tag.name(), None);
        assert!(tag.omit_empty());
        assert!(tag.omit_nested());
        assert!(!tag.has("omit"));
    }

    #[test]
    fn unknown_options_are_kept() {
        let tag = TagSpec::parse("x,omitempty,custom");
        let options: Vec<&str> = tag.options().iter().collect();
        assert_eq!(options, ["omitempty", "custom"]);
        assert!(tag.has("custom"));
    }

    #[test]
    fn ignore_is_the_key() {
        assert!(TagSpec::is_ignored("-"));
        assert!(TagSpec::is_ignored("-,"));
        assert!(TagSpec::is_ignored("-,omitempty"));
        assert!(!TagSpec::is_ignored(",-"));
        assert!(!TagSpec::is_ignored("--"));
        assert!(!TagSpec::is_ignored(""));
        assert_eq!(TagSpec::parse("").name(), None);
    }
}
