//! Domain value objects: LibraryKind, KindSelection, Platform.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity.
//! They hold NO export-table knowledge. Which sub-paths a kind publishes lives
//! in `registry.rs`. This file defines the types, their string forms, and
//! their parsers.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm and the `FromStr` arm here
//! 3. Add a `KindExports` entry in `registry.rs`

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── LibraryKind ──────────────────────────────────────────────────────────────

/// One of the five architectural roles a generated library can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LibraryKind {
    Contract,
    DataAccess,
    Feature,
    Infra,
    Provider,
}

impl LibraryKind {
    /// Every supported kind, in declaration order.
    pub const ALL: [LibraryKind; 5] = [
        Self::Contract,
        Self::DataAccess,
        Self::Feature,
        Self::Infra,
        Self::Provider,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Contract => "contract",
            Self::DataAccess => "data-access",
            Self::Feature => "feature",
            Self::Infra => "infra",
            Self::Provider => "provider",
        }
    }

    /// One-line description used by `barrel kinds`.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Contract => "Domain types, errors, ports and events",
            Self::DataAccess => "Repositories, queries, validation and layers",
            Self::Feature => "Business services and optional RPC handlers",
            Self::Infra => "Infrastructure services with providers and layers",
            Self::Provider => "Adapters wrapping an external SDK",
        }
    }
}

impl fmt::Display for LibraryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LibraryKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "contract" => Ok(Self::Contract),
            "data-access" | "data_access" | "dataaccess" => Ok(Self::DataAccess),
            "feature" => Ok(Self::Feature),
            "infra" | "infrastructure" => Ok(Self::Infra),
            "provider" => Ok(Self::Provider),
            other => Err(DomainError::UnknownKind(other.to_string())),
        }
    }
}

// ── KindSelection ────────────────────────────────────────────────────────────

/// The kind a caller asked for, with unsupported requests kept explicit.
///
/// Parsing is total: anything that is not a [`LibraryKind`] becomes
/// `Unsupported` carrying the raw string, so resolution can degrade to the
/// minimal barrel-only map instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KindSelection {
    Supported(LibraryKind),
    Unsupported(String),
}

impl KindSelection {
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<LibraryKind>() {
            Ok(kind) => Self::Supported(kind),
            Err(_) => Self::Unsupported(raw.to_string()),
        }
    }

    pub const fn supported(&self) -> Option<LibraryKind> {
        match self {
            Self::Supported(kind) => Some(*kind),
            Self::Unsupported(_) => None,
        }
    }

    pub const fn is_supported(&self) -> bool {
        matches!(self, Self::Supported(_))
    }
}

impl From<LibraryKind> for KindSelection {
    fn from(kind: LibraryKind) -> Self {
        Self::Supported(kind)
    }
}

impl fmt::Display for KindSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Supported(kind) => kind.fmt(f),
            Self::Unsupported(raw) => write!(f, "{raw} (unsupported)"),
        }
    }
}

// ── Platform ─────────────────────────────────────────────────────────────────

/// Runtime platforms a feature library can target.
///
/// Carried on the config for the template layer. Export maps never contain
/// platform-keyed paths; consumers rely on tree-shaking instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Client,
    Server,
    Edge,
}

impl Platform {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Server => "server",
            Self::Edge => "edge",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "client" | "browser" => Ok(Self::Client),
            "server" | "node" => Ok(Self::Server),
            "edge" => Ok(Self::Edge),
            other => Err(DomainError::UnknownPlatform(other.to_string())),
        }
    }
}
