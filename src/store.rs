use crate::bridge::{LocationBridge, NoopBridge};
use crate::compat::{String, ToString, Vec, format};
use crate::dates;
use crate::params::{self, ParamMap, ParamMatch};

/// Key under which date lists are conventionally stored.
pub const DATE_LIST_KEY: &str = "dates[]";

/// Construction overrides for [`QueryStringStore`].
/// Any field left `None` is read from the bridge instead.
#[derive(Debug, Clone, Copy)]
pub struct StoreOptions<'a> {
    /// Raw query text to start from, with or without a leading '?'.
    pub query_string: Option<&'a str>,
    /// Fragment to start from, with or without a leading '#'.
    pub hash: Option<&'a str>,
    /// Scheme + host + port, no trailing slash.
    pub origin: Option<&'a str>,
    /// Path to split into route segments.
    pub route: Option<&'a str>,
    /// Push every mutation to the bridge. Defaults to true.
    pub auto_sync: bool,
}

impl Default for StoreOptions<'_> {
    fn default() -> Self {
        Self {
            query_string: None,
            hash: None,
            origin: None,
            route: None,
            auto_sync: true,
        }
    }
}

/// Value object holding a URL's query string, fragment, origin and route
/// segments, with the address bar kept in sync through a [`LocationBridge`].
///
/// Invariants: `query_string` never carries a leading '?', `hash` never
/// carries a leading '#', and route segments never contain empties produced
/// by leading slashes (a trailing slash keeps its empty segment). One owner
/// per instance; mutations are plain synchronous state transitions followed
/// by at most one bridge write.
#[derive(Debug, Clone)]
pub struct QueryStringStore<B = NoopBridge> {
    query_string: String,
    hash: String,
    origin: String,
    route_segments: Vec<String>,
    auto_sync: bool,
    bridge: B,
}

impl QueryStringStore<NoopBridge> {
    /// Store with no live address bar: reads start empty (unless overridden)
    /// and sync writes go nowhere.
    pub fn headless(options: StoreOptions<'_>) -> Self {
        Self::with_bridge(NoopBridge, options)
    }
}

impl<B: LocationBridge> QueryStringStore<B> {
    pub fn with_bridge(bridge: B, options: StoreOptions<'_>) -> Self {
        let query_string = match options.query_string {
            Some(qs) => strip_query_prefix(qs),
            None => bridge.current_query(),
        };
        let origin = match options.origin {
            Some(origin) => origin.to_string(),
            None => bridge.current_origin(),
        };
        let path = match options.route {
            Some(route) => route.to_string(),
            None => bridge.current_path(),
        };
        let hash = bridge.current_fragment();

        let mut store = Self {
            query_string,
            hash,
            origin,
            route_segments: split_route(&path),
            auto_sync: options.auto_sync,
            bridge,
        };
        if let Some(hash) = options.hash {
            store.set_hash(hash);
        }
        if store.auto_sync && options.query_string.is_some() {
            let qs = store.query_string.clone();
            store.set_query_string(&qs);
        }
        store
    }

    // ---- construction & synchronization ----

    /// Refresh `query_string` and `hash` from the bridge (read-only; never
    /// writes back). Returns the new query string, empty when the bridge
    /// exposes none.
    pub fn read_from_bridge(&mut self) -> String {
        self.query_string = self.bridge.current_query();
        self.hash = self.bridge.current_fragment();
        self.query_string.clone()
    }

    /// Recompute the canonical URI and push it to the bridge with a
    /// non-navigating replace. Returns the computed URI. Idempotent for
    /// unchanged state.
    pub fn sync_to_bridge(&mut self) -> String {
        let uri = self.canonical_uri();
        self.bridge.replace_uri(&uri);
        uri
    }

    fn canonical_uri(&self) -> String {
        let mut uri = self.origin.clone();
        if !self.route_segments.is_empty() {
            uri.push('/');
            uri.push_str(&self.route_segments.join("/"));
        }
        uri.push('?');
        uri.push_str(&self.query_string);
        if !self.hash.is_empty() {
            uri.push('#');
            uri.push_str(&self.hash);
        }
        uri
    }

    fn maybe_sync(&mut self) {
        if self.auto_sync {
            self.sync_to_bridge();
        }
    }

    // ---- whole-string access ----

    pub fn query_string(&self) -> &str {
        &self.query_string
    }

    /// Replace the whole query string (a leading '?' is stripped), then sync.
    pub fn set_query_string(&mut self, query_string: &str) -> &str {
        self.query_string = strip_query_prefix(query_string);
        self.maybe_sync();
        &self.query_string
    }

    pub fn auto_sync(&self) -> bool {
        self.auto_sync
    }

    pub fn set_auto_sync(&mut self, auto_sync: bool) {
        self.auto_sync = auto_sync;
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    // ---- query parameter reads ----

    /// All parameters as an insertion-ordered map: scalar keys map to their
    /// value, `[]`-suffixed keys to the ordered list of occurrence values.
    /// Keys and values are both decoded.
    pub fn all_params(&self) -> ParamMap {
        params::parse_all(&self.query_string)
    }

    /// Decoded value of the first occurrence of `key`, empty when absent.
    pub fn first_value(&self, key: &str) -> String {
        params::first_value(&self.query_string, key)
    }

    /// Decoded values of every occurrence of `key`, in query order.
    pub fn all_values(&self, key: &str) -> Vec<String> {
        params::all_values(&self.query_string, key)
    }

    /// Values of [`DATE_LIST_KEY`], sorted ascending chronologically.
    pub fn date_list(&self) -> Vec<String> {
        self.date_list_for(DATE_LIST_KEY)
    }

    /// Values of `key` sorted ascending chronologically. The sort is stable
    /// and entries that fail to parse as dates sort last, in input order.
    pub fn date_list_for(&self, key: &str) -> Vec<String> {
        dates::sort_ascending(self.all_values(key))
    }

    // ---- query parameter mutation ----

    /// Replace the value of the first occurrence of `key`, or append
    /// `key=value` when the key is absent. An empty `value` removes the key
    /// instead; an empty `key` leaves the state untouched.
    pub fn update_param(&mut self, key: &str, value: &str) -> &str {
        if key.is_empty() {
            return &self.query_string;
        }
        if value.is_empty() {
            return self.remove_key(key, false);
        }

        let matcher = ParamMatch::key(key);
        let mut replaced = false;
        let segments: Vec<String> = self
            .query_string
            .split('&')
            .map(|segment| {
                if !replaced && params::segment_matches(&matcher, segment) {
                    replaced = true;
                    // Keep the occurrence's raw key; only the value changes
                    let raw_key = params::split_segment(segment).0;
                    format!("{raw_key}={value}")
                } else {
                    segment.to_string()
                }
            })
            .collect();

        if replaced {
            self.query_string = segments.join("&");
        } else {
            push_pair(&mut self.query_string, key, value);
        }
        self.maybe_sync();
        &self.query_string
    }

    /// Append a `key=value` occurrence even when the key already exists.
    /// No-op for an empty `key` or `value`.
    pub fn append_param(&mut self, key: &str, value: &str) -> &str {
        if key.is_empty() || value.is_empty() {
            return &self.query_string;
        }
        push_pair(&mut self.query_string, key, value);
        self.maybe_sync();
        &self.query_string
    }

    /// Remove occurrences matching `matcher` in one pass over the query
    /// text: all of them, or only the first when `only_first` is set. Any
    /// leading '&' left behind is stripped.
    pub fn remove_param(&mut self, matcher: &ParamMatch<'_>, only_first: bool) -> &str {
        if matcher.key_name().is_empty() {
            return &self.query_string;
        }
        let mut removed = false;
        let kept: Vec<&str> = self
            .query_string
            .split('&')
            .filter(|&segment| {
                if removed && only_first {
                    return true;
                }
                if params::segment_matches(matcher, segment) {
                    removed = true;
                    return false;
                }
                true
            })
            .collect();
        let rebuilt = kept.join("&");
        self.query_string = rebuilt.trim_start_matches('&').to_string();
        self.maybe_sync();
        &self.query_string
    }

    /// Remove every occurrence of `key` regardless of value (or only the
    /// first when `only_first` is set).
    pub fn remove_key(&mut self, key: &str, only_first: bool) -> &str {
        self.remove_param(&ParamMatch::key(key), only_first)
    }

    /// True when any occurrence matches.
    pub fn has_param(&self, matcher: &ParamMatch<'_>) -> bool {
        if matcher.key_name().is_empty() {
            return false;
        }
        self.query_string
            .split('&')
            .any(|segment| params::segment_matches(matcher, segment))
    }

    /// True when any occurrence of `key` exists, regardless of value.
    pub fn has_key(&self, key: &str) -> bool {
        self.has_param(&ParamMatch::key(key))
    }

    /// Remove every `key=value` occurrence when one exists, otherwise append
    /// one. Removing all matches keeps double-toggling an involution even
    /// when duplicates were present beforehand. An empty `value` degrades to
    /// removing the key.
    pub fn toggle_param(&mut self, key: &str, value: &str) -> &str {
        if key.is_empty() {
            return &self.query_string;
        }
        if value.is_empty() {
            return self.remove_key(key, false);
        }
        let matcher = ParamMatch::pair(key, value);
        if self.has_param(&matcher) {
            self.remove_param(&matcher, false)
        } else {
            self.append_param(key, value)
        }
    }

    // ---- hash fragment ----

    /// The fragment, refreshed from the bridge first when `auto_sync` is on.
    pub fn hash(&mut self) -> &str {
        if self.auto_sync {
            self.hash = self.bridge.current_fragment();
        }
        &self.hash
    }

    /// Store a fragment; a leading '#' is stripped, an empty value clears.
    pub fn set_hash(&mut self, hash: &str) {
        self.hash = hash.strip_prefix('#').unwrap_or(hash).to_string();
        self.maybe_sync();
    }

    pub fn remove_hash(&mut self) {
        self.set_hash("");
    }

    // ---- route segments ----

    pub fn route_segments(&self) -> &[String] {
        &self.route_segments
    }

    /// The route segments joined back with '/'.
    pub fn route(&self) -> String {
        self.route_segments.join("/")
    }

    /// Segment at `index`; negative indices count from the end (-1 is last).
    pub fn segment(&self, index: isize) -> Option<&str> {
        self.normalize_index(index)
            .map(|i| self.route_segments[i].as_str())
    }

    /// Replace the segment at `index`. An empty `value` or an out-of-range
    /// index is a no-op (no sync). Returns the joined route.
    pub fn set_segment(&mut self, index: isize, value: &str) -> String {
        if !value.is_empty() {
            if let Some(i) = self.normalize_index(index) {
                self.route_segments[i] = value.to_string();
                self.maybe_sync();
            }
        }
        self.route()
    }

    /// Remove the segment at `index` (no empty-value guard here). Returns
    /// the joined route.
    pub fn remove_segment(&mut self, index: isize) -> String {
        if let Some(i) = self.normalize_index(index) {
            self.route_segments.remove(i);
            self.maybe_sync();
        }
        self.route()
    }

    fn normalize_index(&self, index: isize) -> Option<usize> {
        let len = self.route_segments.len() as isize;
        let resolved = if index < 0 {
            index.checked_add(len)?
        } else {
            index
        };
        (0..len).contains(&resolved).then_some(resolved as usize)
    }
}

fn strip_query_prefix(raw: &str) -> String {
    raw.strip_prefix('?').unwrap_or(raw).to_string()
}

/// Append `key=value`, separated by '&' only when text already exists.
fn push_pair(query_string: &mut String, key: &str, value: &str) {
    if !query_string.is_empty() {
        query_string.push('&');
    }
    query_string.push_str(key);
    query_string.push('=');
    query_string.push_str(value);
}

fn split_route(path: &str) -> Vec<String> {
    if path.is_empty() {
        return Vec::new();
    }
    path.trim_start_matches('/')
        .split('/')
        .map(ToString::to_string)
        .collect()
}
