//! Export keys: the left-hand side of an export map.
//!
//! A key is either an exact sub-path (`"."`, `"./types"`) or a wildcard
//! prefix written `"./queries/*"` in manifests. The distinction is a variant,
//! not a string shape, so callers never re-derive it with `ends_with`.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::error::DomainError;

const WILDCARD_SUFFIX: &str = "/*";

/// One published sub-path pattern.
///
/// Invariant: a `Prefix` base never ends with `/`. The rendered form of
/// `Prefix(base)` is `base + "/*"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExportKey {
    /// A literal sub-path such as `"."` or `"./repository"`.
    Exact(String),
    /// A wildcard; stores the base without the trailing `/*`.
    Prefix(String),
}

impl ExportKey {
    /// An exact key. A path written in wildcard form (`"./queries/*"`)
    /// names the wildcard, so it becomes `Prefix` like [`ExportKey::parse`].
    pub fn exact(path: impl Into<String>) -> Self {
        let path = path.into();
        if path.ends_with(WILDCARD_SUFFIX) {
            return Self::parse(&path);
        }
        Self::Exact(path)
    }

    pub fn prefix(base: impl Into<String>) -> Self {
        let base = base.into();
        Self::Prefix(base.trim_end_matches('/').to_string())
    }

    /// Parse a manifest key. Total: every string is some key.
    ///
    /// `"./queries/*"` becomes `Prefix("./queries")`; everything else is
    /// `Exact`.
    pub fn parse(raw: &str) -> Self {
        match raw.strip_suffix(WILDCARD_SUFFIX) {
            Some(base) => Self::Prefix(base.to_string()),
            None => Self::Exact(raw.to_string()),
        }
    }

    /// Parse a key and reject shapes a package manager would not accept.
    pub fn try_parse(raw: &str) -> Result<Self, DomainError> {
        let invalid = |reason: &str| DomainError::InvalidKey {
            key: raw.to_string(),
            reason: reason.to_string(),
        };

        if raw != "." && !raw.starts_with("./") {
            return Err(invalid("must be '.' or start with './'"));
        }

        let key = Self::parse(raw);
        if key.path().contains('*') {
            return Err(invalid("'*' is only allowed as a trailing '/*'"));
        }
        if key.path().ends_with('/') && key.path() != "./" {
            return Err(invalid("trailing '/' is not allowed"));
        }
        Ok(key)
    }

    /// The path for exact keys, the base for wildcard keys.
    pub fn path(&self) -> &str {
        match self {
            Self::Exact(path) | Self::Prefix(path) => path,
        }
    }

    pub const fn is_wildcard(&self) -> bool {
        matches!(self, Self::Prefix(_))
    }

    /// Match a requested import path against this key.
    ///
    /// Returns the wildcard suffix (empty for exact matches) when the key
    /// answers the request.
    pub fn match_request<'a>(&self, requested: &'a str) -> Option<&'a str> {
        match self {
            Self::Exact(path) => (path == requested).then_some(""),
            Self::Prefix(base) => requested
                .strip_prefix(base.as_str())
                .and_then(|rest| rest.strip_prefix('/')),
        }
    }

    /// Whether two wildcard keys can both answer one request.
    ///
    /// Exact keys never overlap anything: exact always wins over wildcards.
    pub fn overlaps(&self, other: &ExportKey) -> bool {
        match (self, other) {
            (Self::Prefix(a), Self::Prefix(b)) => {
                a == b || nested_under(a, b) || nested_under(b, a)
            }
            _ => false,
        }
    }

    fn marker(&self) -> &'static str {
        match self {
            Self::Exact(_) => "",
            Self::Prefix(_) => WILDCARD_SUFFIX,
        }
    }
}

fn nested_under(inner: &str, outer: &str) -> bool {
    inner
        .strip_prefix(outer)
        .is_some_and(|rest| rest.starts_with('/'))
}

// Keys sort by their rendered string so maps iterate in manifest order.
// `Exact("./a/*")` renders like `Prefix("./a")`; the variant breaks the tie.
impl Ord for ExportKey {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.path().bytes().chain(self.marker().bytes());
        let rhs = other.path().bytes().chain(other.marker().bytes());
        lhs.cmp(rhs).then_with(|| self.is_wildcard().cmp(&other.is_wildcard()))
    }
}

impl PartialOrd for ExportKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ExportKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.path(), self.marker())
    }
}

impl From<&str> for ExportKey {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl Serialize for ExportKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ExportKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(|raw| Self::parse(&raw))
    }
}
