//! Source precedence for setting updates.
//!
//! Every update to a setting is tagged with the [`Source`] it came from.
//! Sources form a total order; when two sources disagree about a setting's
//! value, [`Source::supersedes`] decides which one wins:
//!
//! - `Override` always wins, and once a setting is held by `Override` only
//!   another `Override` update can replace it.
//! - For ordinary settings, a higher-numbered source outranks a lower one
//!   (`Env` beats `Workspace` beats `System`, ...).
//! - For *policy* settings the comparison is inverted: a lower-numbered,
//!   more central source outranks a more local one (`Entity` beats
//!   `Project`), so server-side policy cannot be undone by local config.

use serde::{Deserialize, Serialize};

/// Ordered tag identifying where a setting's value came from.
///
/// The numeric order is the precedence order for ordinary settings; policy
/// settings invert it. `Override` sits outside the order as a wildcard.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Source {
    /// Unconditional override; beats everything, including itself.
    Override = 0,
    /// Schema defaults (the seed source for ordinary settings).
    #[default]
    Base = 1,
    /// Organization-level server policy.
    Org = 2,
    /// Entity-level (user or team) server policy.
    Entity = 3,
    /// Project-level server policy.
    Project = 4,
    /// Per-user settings file.
    User = 5,
    /// System-wide settings file.
    System = 6,
    /// Workspace settings file.
    Workspace = 7,
    /// Environment variables.
    Env = 8,
    /// Client setup call.
    Setup = 9,
    /// Login flow.
    Login = 10,
    /// Run init call.
    Init = 11,
    /// Explicit settings object passed by the caller.
    Settings = 12,
    /// Command-line arguments (the seed source for policy settings).
    Args = 13,
}

impl Source {
    /// All sources in ascending numeric order.
    pub const ALL: [Source; 14] = [
        Source::Override,
        Source::Base,
        Source::Org,
        Source::Entity,
        Source::Project,
        Source::User,
        Source::System,
        Source::Workspace,
        Source::Env,
        Source::Setup,
        Source::Login,
        Source::Init,
        Source::Settings,
        Source::Args,
    ];

    /// Decide whether an update from `self` replaces a value currently held
    /// at `current`.
    ///
    /// Rules, in order:
    /// - `Override` always wins.
    /// - A value held by `Override` is otherwise immovable.
    /// - Policy settings: `self` wins iff it is lower-or-equal ranked.
    /// - Ordinary settings: `self` wins iff it is higher-or-equal ranked.
    pub fn supersedes(self, current: Source, is_policy: bool) -> bool {
        if self == Source::Override {
            return true;
        }
        if current == Source::Override {
            return false;
        }
        if is_policy {
            self <= current
        } else {
            self >= current
        }
    }

    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Override => "override",
            Source::Base => "base",
            Source::Org => "org",
            Source::Entity => "entity",
            Source::Project => "project",
            Source::User => "user",
            Source::System => "system",
            Source::Workspace => "workspace",
            Source::Env => "env",
            Source::Setup => "setup",
            Source::Login => "login",
            Source::Init => "init",
            Source::Settings => "settings",
            Source::Args => "args",
        }
    }

    /// Parse from string, case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        Source::ALL
            .iter()
            .copied()
            .find(|source| source.as_str() == lower)
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
