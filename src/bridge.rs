use crate::compat::{String, ToString, Vec};
use crate::helpers::{prune_fragment, prune_query, split_origin_path};

/// Narrow view of the host environment's location/history state.
///
/// The store never touches global environment state directly; everything it
/// knows about the live address bar goes through this trait. `replace_uri`
/// must swap the displayed URI in place: no navigation, no reload, no new
/// history entry.
pub trait LocationBridge {
    /// Scheme + host + port, no trailing slash.
    fn current_origin(&self) -> String;
    /// Path component, with its leading slash.
    fn current_path(&self) -> String;
    /// Query text without the leading '?'.
    fn current_query(&self) -> String;
    /// Fragment text without the leading '#'.
    fn current_fragment(&self) -> String;
    /// Replace the displayed URI without navigating.
    fn replace_uri(&mut self, uri: &str);
}

/// Bridge for headless use: all reads are empty, writes are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopBridge;

impl LocationBridge for NoopBridge {
    fn current_origin(&self) -> String {
        String::new()
    }

    fn current_path(&self) -> String {
        String::new()
    }

    fn current_query(&self) -> String {
        String::new()
    }

    fn current_fragment(&self) -> String {
        String::new()
    }

    fn replace_uri(&mut self, _uri: &str) {}
}

/// In-memory bridge holding a single URI, for tests and non-browser hosts.
/// Components are split out of the URI on demand and every `replace_uri`
/// call is recorded.
#[derive(Debug, Clone, Default)]
pub struct MemoryBridge {
    uri: String,
    replaced: Vec<String>,
}

impl MemoryBridge {
    pub fn new(uri: &str) -> Self {
        Self {
            uri: uri.to_string(),
            replaced: Vec::new(),
        }
    }

    /// The URI currently "displayed" by this bridge.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Every URI passed to `replace_uri`, oldest first.
    pub fn replaced(&self) -> &[String] {
        &self.replaced
    }

    fn without_fragment(&self) -> &str {
        prune_fragment(&self.uri).0
    }
}

impl LocationBridge for MemoryBridge {
    fn current_origin(&self) -> String {
        let (base, _) = prune_query(self.without_fragment());
        split_origin_path(base).0.to_string()
    }

    fn current_path(&self) -> String {
        let (base, _) = prune_query(self.without_fragment());
        split_origin_path(base).1.to_string()
    }

    fn current_query(&self) -> String {
        prune_query(self.without_fragment())
            .1
            .unwrap_or_default()
            .to_string()
    }

    fn current_fragment(&self) -> String {
        prune_fragment(&self.uri).1.unwrap_or_default().to_string()
    }

    fn replace_uri(&mut self, uri: &str) {
        self.uri = uri.to_string();
        self.replaced.push(uri.to_string());
    }
}
