use crate::compat::{String, ToString, Vec};
use percent_encoding::percent_decode_str;

/// Keys ending in this suffix collect their occurrences into a list.
pub(crate) const LIST_SUFFIX: &str = "[]";

/// Value of a query parameter in the all-params view.
/// Scalar keys hold one decoded string; `[]`-suffixed keys hold the ordered
/// values of every occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Scalar(String),
    List(Vec<String>),
}

impl ParamValue {
    /// Get the scalar value, or `None` for a list entry.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar(value) => Some(value.as_str()),
            Self::List(_) => None,
        }
    }

    /// Get the list values, or `None` for a scalar entry.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::Scalar(_) => None,
            Self::List(values) => Some(values.as_slice()),
        }
    }
}

/// Insertion-ordered view of all query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamMap {
    entries: Vec<(String, ParamValue)>,
}

impl ParamMap {
    /// Look up an entry by its decoded key (including any `[]` suffix).
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push_scalar(&mut self, key: String, value: String) {
        // Duplicate scalar keys keep their first position, last value wins
        if let Some((_, existing)) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            *existing = ParamValue::Scalar(value);
        } else {
            self.entries.push((key, ParamValue::Scalar(value)));
        }
    }

    fn push_list_item(&mut self, key: String, value: String) {
        if let Some((_, ParamValue::List(items))) =
            self.entries.iter_mut().find(|(k, _)| *k == key)
        {
            items.push(value);
        } else {
            self.entries.push((key, ParamValue::List(Vec::from([value]))));
        }
    }
}

/// Structured matcher for `key=value` occurrences.
///
/// By default the occurrence's key (and value, when one is given) is
/// percent-decoded before comparing against the literal arguments. `raw()`
/// switches to comparing the raw occurrence text verbatim, for callers whose
/// arguments are already encoded. No pattern syntax exists in either mode.
#[derive(Debug, Clone, Copy)]
pub struct ParamMatch<'a> {
    key: &'a str,
    value: Option<&'a str>,
    raw: bool,
}

impl<'a> ParamMatch<'a> {
    /// Match any occurrence of `key`, regardless of value.
    pub fn key(key: &'a str) -> Self {
        Self {
            key,
            value: None,
            raw: false,
        }
    }

    /// Match only occurrences carrying exactly `key=value`.
    pub fn pair(key: &'a str, value: &'a str) -> Self {
        Self {
            key,
            value: Some(value),
            raw: false,
        }
    }

    /// Compare against the raw (undecoded) occurrence text.
    pub fn raw(mut self) -> Self {
        self.raw = true;
        self
    }

    pub(crate) fn key_name(&self) -> &'a str {
        self.key
    }

    pub(crate) fn matches(&self, raw_key: &str, raw_value: &str) -> bool {
        let key_hit = if self.raw {
            raw_key == self.key
        } else {
            decode_component(raw_key) == self.key
        };
        if !key_hit {
            return false;
        }
        match self.value {
            None => true,
            Some(value) if self.raw => raw_value == value,
            Some(value) => decode_component(raw_value) == value,
        }
    }
}

/// Check one `&`-separated segment of the raw query text against a matcher.
/// Empty segments never match.
pub(crate) fn segment_matches(matcher: &ParamMatch<'_>, segment: &str) -> bool {
    if segment.is_empty() {
        return false;
    }
    let (raw_key, raw_value) = split_segment(segment);
    matcher.matches(raw_key, raw_value)
}

/// Split one segment on the first '='; a segment with no '=' is a bare key.
pub(crate) fn split_segment(segment: &str) -> (&str, &str) {
    segment.split_once('=').unwrap_or((segment, ""))
}

/// Decode a percent-encoded query component, replacing invalid UTF-8.
pub(crate) fn decode_component(input: &str) -> String {
    percent_decode_str(input).decode_utf8_lossy().into_owned()
}

fn occurrences(query: &str) -> impl Iterator<Item = (&str, &str)> {
    query
        .split('&')
        .filter(|segment| !segment.is_empty())
        .map(split_segment)
}

/// Build the insertion-ordered all-params view from raw query text.
/// Keys and values are both decoded.
pub(crate) fn parse_all(query: &str) -> ParamMap {
    let mut map = ParamMap::default();
    for (raw_key, raw_value) in occurrences(query) {
        let key = decode_component(raw_key);
        let value = decode_component(raw_value);
        if key.ends_with(LIST_SUFFIX) {
            map.push_list_item(key, value);
        } else {
            map.push_scalar(key, value);
        }
    }
    map
}

/// Decoded value of the first occurrence whose decoded key equals `key`.
/// Empty string when the key is absent.
pub(crate) fn first_value(query: &str, key: &str) -> String {
    occurrences(query)
        .find(|(raw_key, _)| decode_component(raw_key) == key)
        .map_or_else(String::new, |(_, raw_value)| decode_component(raw_value))
}

/// Decoded values of every occurrence whose decoded key equals `key`,
/// in `&`-split order.
pub(crate) fn all_values(query: &str, key: &str) -> Vec<String> {
    occurrences(query)
        .filter(|(raw_key, _)| decode_component(raw_key) == key)
        .map(|(_, raw_value)| decode_component(raw_value))
        .collect()
}
