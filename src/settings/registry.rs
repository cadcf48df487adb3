//! The settings registry: the aggregate over all declared settings.
//!
//! [`Settings`] owns one [`Setting`] per name declared in the schema. The
//! key set is fixed at construction; no settings are added or removed later.
//! Collaborators (environment ingestion, config files, login, run init, CLI)
//! only ever call [`Settings::update`] with a `(entries, source)` batch and
//! read back through [`Settings::get`], the typed accessors, or
//! [`Settings::snapshot`].
//!
//! ## Precedence
//!
//! Each entry is arbitrated per-setting by [`Source::supersedes`]; see the
//! [`source`](crate::settings::source) module.
//!
//! ## Atomicity
//!
//! A batch naming an unknown setting applies nothing. A value failing its
//! pipeline leaves that one setting unchanged and aborts only that
//! assignment; remaining entries still apply, in sorted-name order, and the
//! first error is returned.
//!
//! ## Sharing
//!
//! The registry is synchronous and does no internal locking: a single
//! writer must be enforced by the caller. [`Settings::freeze`] makes an
//! instance permanently read-only so it can be shared across threads.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::schema;
use crate::settings::value as coerce;
use crate::settings::{Setting, Source};
use crate::{Error, Result};

/// Resolved console capture mode, after `auto` resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleMode {
    /// No console capture.
    Off,
    /// Wrap stdout/stderr write calls.
    Wrap,
    /// Redirect stdout/stderr file descriptors.
    Redirect,
}

impl ConsoleMode {
    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsoleMode::Off => "off",
            ConsoleMode::Wrap => "wrap",
            ConsoleMode::Redirect => "redirect",
        }
    }
}

impl std::fmt::Display for ConsoleMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The registry of all declared settings.
///
/// There is no attribute-style write surface: all mutation goes through
/// [`Settings::update`] / [`Settings::update_one`], so source precedence and
/// validation can never be bypassed.
#[derive(Debug)]
pub struct Settings {
    props: BTreeMap<&'static str, Setting>,
    frozen: bool,
}

impl Settings {
    /// Build a registry with every declared setting at its schema default.
    ///
    /// Ordinary settings seed at `Source::Base`, policy settings at
    /// `Source::Args`, so that under either comparator any real update
    /// overrides the default.
    pub fn new() -> Self {
        let mut props = BTreeMap::new();
        for spec in schema::specs() {
            let seed = if spec.is_policy {
                Source::Args
            } else {
                Source::Base
            };
            props.insert(spec.name, Setting::new(&spec, seed));
        }
        Self {
            props,
            frozen: false,
        }
    }

    /// Build a registry and apply construction-time overrides at
    /// `Source::Settings`.
    ///
    /// Unknown keys are rejected with [`Error::UnknownSetting`], consistent
    /// with [`Settings::update`].
    pub fn with_overrides(overrides: &Map<String, Value>) -> Result<Self> {
        let mut settings = Self::new();
        settings.update(overrides, Source::Settings)?;
        Ok(settings)
    }

    // ==================== Mutation ====================

    /// Apply a batch of `(name, value)` entries from one source.
    ///
    /// Every key is checked against the declared schema first; if any key is
    /// unknown the whole batch is rejected and nothing is applied. Entries
    /// then apply in sorted-name order; see the module docs for the
    /// per-entry failure semantics.
    pub fn update(&mut self, entries: &Map<String, Value>, source: Source) -> Result<()> {
        if self.frozen {
            return Err(Error::Frozen("settings".to_string()));
        }
        let unknown: Vec<&str> = entries
            .keys()
            .filter(|key| !self.props.contains_key(key.as_str()))
            .map(|key| key.as_str())
            .collect();
        if !unknown.is_empty() {
            return Err(Error::UnknownSetting(unknown.join(", ")));
        }

        let mut names: Vec<&str> = entries.keys().map(|key| key.as_str()).collect();
        names.sort_unstable();

        let mut first_error = None;
        for name in names {
            let Some(value) = entries.get(name) else {
                continue;
            };
            let Some(setting) = self.props.get_mut(name) else {
                continue;
            };
            if let Err(err) = setting.update(value.clone(), source) {
                if first_error.is_none() {
                    first_error = Some(err);
                }
            }
        }
        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Apply a single `(name, value)` entry from one source.
    pub fn update_one(&mut self, name: &str, value: Value, source: Source) -> Result<()> {
        let mut entries = Map::new();
        entries.insert(name.to_string(), value);
        self.update(&entries, source)
    }

    // ==================== Freezing & Copying ====================

    /// Make the registry permanently read-only (until [`Self::unfreeze`]).
    ///
    /// Once frozen, [`Settings::update`] fails regardless of individual
    /// setting flags, so all reads are race-free and the instance can be
    /// shared across threads.
    pub fn freeze(&mut self) {
        self.frozen = true;
        tracing::debug!("settings frozen");
    }

    /// Re-enable mutation.
    pub fn unfreeze(&mut self) {
        self.frozen = false;
        tracing::debug!("settings unfrozen");
    }

    /// Whether the registry-level gate is closed.
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// An independent deep copy, always unfrozen.
    ///
    /// Subsequent mutation of either instance is invisible to the other.
    pub fn copy(&self) -> Settings {
        Settings {
            props: self.props.clone(),
            frozen: false,
        }
    }

    // ==================== Mapping-style Access ====================

    /// The resolved (derived) value of a declared setting.
    pub fn get(&self, name: &str) -> Result<Value> {
        match self.props.get(name) {
            Some(setting) => Ok(setting.value(self)),
            None => Err(Error::UnknownSetting(name.to_string())),
        }
    }

    /// Whether a setting name is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.props.contains_key(name)
    }

    /// Declared setting names, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.props.keys().copied()
    }

    /// The number of declared settings.
    pub fn len(&self) -> usize {
        self.props.len()
    }

    /// Whether the registry declares no settings (never true for the
    /// standard schema).
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// Read access to one setting's metadata (source, policy flag, raw
    /// value).
    pub fn setting(&self, name: &str) -> Option<&Setting> {
        self.props.get(name)
    }

    /// Export every declared setting's resolved value plus every computed
    /// accessor as a plain JSON-serializable map.
    ///
    /// Consumers (the background sync process, debug dumps) read only this
    /// snapshot, never live settings.
    pub fn snapshot(&self) -> Map<String, Value> {
        let mut map = Map::new();
        for (name, setting) in &self.props {
            map.insert((*name).to_string(), setting.value(self));
        }
        for computed in schema::computed() {
            map.insert(computed.name.to_string(), (computed.compute)(self));
        }
        map
    }

    // ==================== Coercing Helpers ====================

    fn str_value(&self, name: &str) -> Option<String> {
        self.get(name)
            .ok()
            .and_then(|value| value.as_str().map(str::to_string))
    }

    fn bool_value(&self, name: &str) -> Option<bool> {
        self.get(name).ok().as_ref().and_then(coerce::as_bool)
    }

    fn i64_value(&self, name: &str) -> Option<i64> {
        self.get(name).ok().as_ref().and_then(coerce::as_i64)
    }

    // ==================== Typed Accessors ====================

    /// Server endpoint, never empty (schema default applies).
    pub fn base_url(&self) -> String {
        self.str_value("base_url")
            .unwrap_or_else(|| schema::DEFAULT_BASE_URL.to_string())
    }

    /// Operating mode: one of `online`, `offline`, `run`, `dryrun`,
    /// `disabled`.
    pub fn mode(&self) -> String {
        self.str_value("mode").unwrap_or_else(|| "online".to_string())
    }

    pub fn api_key(&self) -> Option<String> {
        self.str_value("api_key")
    }

    pub fn entity(&self) -> Option<String> {
        self.str_value("entity")
    }

    pub fn project(&self) -> Option<String> {
        self.str_value("project")
    }

    pub fn run_id(&self) -> Option<String> {
        self.str_value("run_id")
    }

    pub fn run_name(&self) -> Option<String> {
        self.str_value("run_name")
    }

    pub fn run_group(&self) -> Option<String> {
        self.str_value("run_group")
    }

    pub fn run_tags(&self) -> Option<Vec<String>> {
        self.get("run_tags").ok().as_ref().and_then(coerce::as_string_list)
    }

    pub fn git_remote(&self) -> String {
        self.str_value("git_remote").unwrap_or_else(|| "origin".to_string())
    }

    pub fn ignore_globs(&self) -> Vec<String> {
        self.get("ignore_globs")
            .ok()
            .as_ref()
            .and_then(coerce::as_string_list)
            .unwrap_or_default()
    }

    pub fn heartbeat_seconds(&self) -> i64 {
        self.i64_value("heartbeat_seconds").unwrap_or(30)
    }

    pub fn summary_warnings(&self) -> i64 {
        self.i64_value("summary_warnings").unwrap_or(5)
    }

    pub fn silent(&self) -> bool {
        self.bool_value("silent").unwrap_or(false)
    }

    pub fn quiet(&self) -> Option<bool> {
        self.bool_value("quiet")
    }

    pub fn strict(&self) -> Option<bool> {
        self.bool_value("strict")
    }

    pub fn show_errors(&self) -> bool {
        self.bool_value("show_errors").unwrap_or(true)
    }

    pub fn show_info(&self) -> bool {
        self.bool_value("show_info").unwrap_or(true)
    }

    pub fn show_warnings(&self) -> bool {
        self.bool_value("show_warnings").unwrap_or(true)
    }

    pub fn root_dir(&self) -> Option<String> {
        self.str_value("root_dir")
    }

    /// The staging directory under `root_dir` (derived).
    pub fn stage_dir(&self) -> Option<String> {
        self.str_value("stage_dir")
    }

    /// The run's files directory; `None` until run identity is established.
    pub fn files_dir(&self) -> Option<String> {
        self.str_value("files_dir")
    }

    pub fn log_dir(&self) -> Option<String> {
        self.str_value("log_dir")
    }

    pub fn log_user(&self) -> Option<String> {
        self.str_value("log_user")
    }

    pub fn log_internal(&self) -> Option<String> {
        self.str_value("log_internal")
    }

    pub fn resume_file(&self) -> Option<String> {
        self.str_value("resume_file")
    }

    pub fn sync_dir(&self) -> Option<String> {
        self.str_value("sync_dir")
    }

    pub fn sync_file(&self) -> Option<String> {
        self.str_value("sync_file")
    }

    pub fn tmp_dir(&self) -> Option<String> {
        self.str_value("tmp_dir")
    }

    pub fn settings_system(&self) -> Option<String> {
        self.str_value("settings_system")
    }

    pub fn settings_workspace(&self) -> Option<String> {
        self.str_value("settings_workspace")
    }

    // ==================== Computed Accessors ====================
    //
    // Pure functions of other settings' resolved values; no storage of
    // their own. Exported by `snapshot()` through the schema's computed
    // table.

    /// Whether the client runs without talking to the server.
    pub fn is_offline(&self) -> bool {
        if self.bool_value("disabled").unwrap_or(false) {
            return true;
        }
        matches!(self.mode().as_str(), "dryrun" | "offline")
    }

    /// Whether the client is fully disabled (every operation a no-op).
    pub fn is_noop(&self) -> bool {
        self.mode() == "disabled"
    }

    /// Whether the endpoint is a self-hosted deployment rather than the
    /// default cloud.
    pub fn is_local(&self) -> bool {
        self.base_url() != schema::DEFAULT_BASE_URL
    }

    /// Effective run-mode string used in staged directory names.
    pub fn run_mode(&self) -> &'static str {
        if self.is_offline() { "offline-run" } else { "run" }
    }

    /// Compact timestamp of the run start, once `start_datetime` is set.
    pub fn timespec(&self) -> Option<String> {
        let raw = self.str_value("start_datetime")?;
        let datetime = chrono::DateTime::parse_from_rfc3339(&raw).ok()?;
        Some(datetime.format("%Y%m%d_%H%M%S").to_string())
    }

    /// Console capture mode after `auto` resolution.
    pub fn console_mode(&self) -> ConsoleMode {
        let console = self
            .str_value("console")
            .unwrap_or_else(|| "auto".to_string());
        match console.as_str() {
            "off" => ConsoleMode::Off,
            "wrap" => ConsoleMode::Wrap,
            "redirect" => ConsoleMode::Redirect,
            // "auto": wrapping is the only safe choice for in-process
            // threads; everything else can take the redirect path
            _ => {
                if self.str_value("start_method").as_deref() == Some("thread") {
                    ConsoleMode::Wrap
                } else {
                    ConsoleMode::Redirect
                }
            }
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

/// Entry helper so computed specs can serialize `ConsoleMode`.
pub(crate) fn console_mode_value(settings: &Settings) -> Value {
    json!(settings.console_mode().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(pairs: &[(&str, Value)]) -> Map<String, Value> {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }

    // ==================== Construction Tests ====================

    #[test]
    fn test_new_declares_full_schema() {
        let settings = Settings::new();
        assert!(!settings.is_empty());
        assert!(settings.contains("base_url"));
        assert!(settings.contains("mode"));
        assert!(!settings.contains("bogus_key"));
        assert_eq!(settings.len(), settings.names().count());
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::new();
        assert_eq!(settings.mode(), "online");
        assert_eq!(settings.base_url(), schema::DEFAULT_BASE_URL);
        assert_eq!(settings.summary_warnings(), 5);
        assert_eq!(settings.git_remote(), "origin");
        assert_eq!(settings.api_key(), None);
    }

    #[test]
    fn test_with_overrides() {
        let settings = Settings::with_overrides(&entries(&[
            ("project", json!("atlas")),
            ("mode", json!("offline")),
        ]))
        .unwrap();
        assert_eq!(settings.project().unwrap(), "atlas");
        assert_eq!(settings.mode(), "offline");
        assert_eq!(
            settings.setting("project").unwrap().source(),
            Source::Settings
        );
    }

    #[test]
    fn test_with_overrides_rejects_unknown() {
        let err =
            Settings::with_overrides(&entries(&[("no_such_setting", json!(1))])).unwrap_err();
        assert!(matches!(err, Error::UnknownSetting(_)));
    }

    // ==================== Update Scenario Tests ====================

    #[test]
    fn test_ordinary_setting_greatest_source_wins() {
        // mode default "online"; BASE then ENV -> ENV value stands
        let mut settings = Settings::new();
        settings
            .update_one("mode", json!("offline"), Source::Base)
            .unwrap();
        settings
            .update_one("mode", json!("disabled"), Source::Env)
            .unwrap();
        assert_eq!(settings.mode(), "disabled");
    }

    #[test]
    fn test_policy_setting_smallest_source_wins() {
        // summary_warnings is policy: ENTITY outranks PROJECT
        let mut settings = Settings::new();
        settings
            .update_one("summary_warnings", json!(42), Source::Project)
            .unwrap();
        settings
            .update_one("summary_warnings", json!(43), Source::Entity)
            .unwrap();
        assert_eq!(settings.summary_warnings(), 43);
    }

    #[test]
    fn test_policy_setting_local_source_loses() {
        let mut settings = Settings::new();
        settings
            .update_one("summary_warnings", json!(42), Source::Entity)
            .unwrap();
        settings
            .update_one("summary_warnings", json!(43), Source::Project)
            .unwrap();
        assert_eq!(settings.summary_warnings(), 42);
    }

    #[test]
    fn test_override_dominates_policy_and_ordinary() {
        let mut settings = Settings::new();
        settings
            .update_one("summary_warnings", json!(1), Source::Override)
            .unwrap();
        settings
            .update_one("summary_warnings", json!(2), Source::Org)
            .unwrap();
        assert_eq!(settings.summary_warnings(), 1);

        settings
            .update_one("mode", json!("offline"), Source::Override)
            .unwrap();
        settings
            .update_one("mode", json!("online"), Source::Args)
            .unwrap();
        assert_eq!(settings.mode(), "offline");
    }

    // ==================== Atomicity Tests ====================

    #[test]
    fn test_unknown_key_rejects_whole_batch() {
        let mut settings = Settings::new();
        let err = settings
            .update(
                &entries(&[("bogus_key", json!(1)), ("mode", json!("offline"))]),
                Source::Override,
            )
            .unwrap_err();
        assert!(matches!(err, Error::UnknownSetting(_)));
        // nothing applied, including the individually-valid key
        assert_eq!(settings.mode(), "online");
        assert_eq!(settings.base_url(), schema::DEFAULT_BASE_URL);
    }

    #[test]
    fn test_invalid_value_aborts_only_that_assignment() {
        let mut settings = Settings::new();
        let err = settings
            .update(
                &entries(&[("mode", json!("sideways")), ("project", json!("atlas"))]),
                Source::Env,
            )
            .unwrap_err();
        assert!(matches!(err, Error::InvalidValue { .. }));
        assert_eq!(settings.mode(), "online");
        // the valid entry still applied
        assert_eq!(settings.project().unwrap(), "atlas");
    }

    #[test]
    fn test_preprocessor_coercion_via_update() {
        let mut settings = Settings::new();
        settings
            .update_one("summary_warnings", json!("7"), Source::Env)
            .unwrap();
        assert_eq!(settings.summary_warnings(), 7);

        settings
            .update_one("silent", json!("true"), Source::Env)
            .unwrap();
        assert!(settings.silent());
    }

    // ==================== Freeze & Copy Tests ====================

    #[test]
    fn test_freeze_is_sticky() {
        let mut settings = Settings::new();
        settings.freeze();
        assert!(settings.is_frozen());
        let err = settings
            .update_one("mode", json!("offline"), Source::Override)
            .unwrap_err();
        assert!(matches!(err, Error::Frozen(_)));
        assert_eq!(settings.mode(), "online");
    }

    #[test]
    fn test_unfreeze_reopens() {
        let mut settings = Settings::new();
        settings.freeze();
        settings.unfreeze();
        settings
            .update_one("mode", json!("offline"), Source::Env)
            .unwrap();
        assert_eq!(settings.mode(), "offline");
    }

    #[test]
    fn test_copy_of_frozen_is_unfrozen_and_mutable() {
        let mut settings = Settings::new();
        settings.freeze();
        let mut clone = settings.copy();
        assert!(!clone.is_frozen());
        clone
            .update_one("mode", json!("offline"), Source::Env)
            .unwrap();
        assert_eq!(clone.mode(), "offline");
        assert!(settings.is_frozen());
    }

    #[test]
    fn test_copy_is_independent() {
        let mut original = Settings::new();
        let copy = original.copy();
        original
            .update_one("project", json!("atlas"), Source::Env)
            .unwrap();
        assert_eq!(original.project().unwrap(), "atlas");
        assert_eq!(copy.project(), None);
    }

    // ==================== Snapshot Tests ====================

    #[test]
    fn test_snapshot_round_trips_through_json() {
        let mut settings = Settings::new();
        settings
            .update(
                &entries(&[
                    ("project", json!("atlas")),
                    ("run_id", json!("r1")),
                    ("run_tags", json!(["a", "b"])),
                ]),
                Source::Init,
            )
            .unwrap();
        let snapshot = settings.snapshot();
        let encoded = serde_json::to_string(&snapshot).unwrap();
        let decoded: Map<String, Value> = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, snapshot);
    }

    #[test]
    fn test_snapshot_includes_all_settings_and_computed() {
        let settings = Settings::new();
        let snapshot = settings.snapshot();
        for name in settings.names() {
            assert!(snapshot.contains_key(name), "missing {name}");
        }
        for computed in schema::computed() {
            assert!(snapshot.contains_key(computed.name), "missing {}", computed.name);
        }
        assert_eq!(snapshot["run_mode"], json!("run"));
        assert_eq!(snapshot["is_offline"], json!(false));
    }

    // ==================== Computed Accessor Tests ====================

    #[test]
    fn test_is_offline() {
        let mut settings = Settings::new();
        assert!(!settings.is_offline());
        settings
            .update_one("mode", json!("offline"), Source::Env)
            .unwrap();
        assert!(settings.is_offline());
        assert_eq!(settings.run_mode(), "offline-run");
    }

    #[test]
    fn test_disabled_forces_offline() {
        let mut settings = Settings::new();
        settings
            .update_one("disabled", json!(true), Source::Env)
            .unwrap();
        assert!(settings.is_offline());
    }

    #[test]
    fn test_is_noop() {
        let mut settings = Settings::new();
        settings
            .update_one("mode", json!("disabled"), Source::Env)
            .unwrap();
        assert!(settings.is_noop());
    }

    #[test]
    fn test_is_local() {
        let mut settings = Settings::new();
        assert!(!settings.is_local());
        settings
            .update_one("base_url", json!("https://ballast.example.org"), Source::Env)
            .unwrap();
        assert!(settings.is_local());
    }

    #[test]
    fn test_timespec_from_start_datetime() {
        let mut settings = Settings::new();
        assert_eq!(settings.timespec(), None);
        settings
            .update_one(
                "start_datetime",
                json!("2026-03-01T09:30:00+00:00"),
                Source::Init,
            )
            .unwrap();
        assert_eq!(settings.timespec().unwrap(), "20260301_093000");
    }

    #[test]
    fn test_console_mode_resolution() {
        let mut settings = Settings::new();
        assert_eq!(settings.console_mode(), ConsoleMode::Redirect);
        settings
            .update_one("start_method", json!("thread"), Source::Env)
            .unwrap();
        assert_eq!(settings.console_mode(), ConsoleMode::Wrap);
        settings
            .update_one("console", json!("off"), Source::Args)
            .unwrap();
        assert_eq!(settings.console_mode(), ConsoleMode::Off);
    }

    // ==================== Derived Path Tests ====================

    #[test]
    fn test_stage_dir_joins_root() {
        let mut settings = Settings::new();
        settings
            .update_one("root_dir", json!("/srv/runs"), Source::Env)
            .unwrap();
        assert_eq!(settings.stage_dir().unwrap(), "/srv/runs/ballast");
    }

    #[test]
    fn test_run_scoped_paths_null_until_identity() {
        let mut settings = Settings::new();
        assert_eq!(settings.files_dir(), None);
        settings
            .update(
                &entries(&[
                    ("root_dir", json!("/srv/runs")),
                    ("run_id", json!("r1")),
                    ("start_datetime", json!("2026-03-01T09:30:00+00:00")),
                ]),
                Source::Init,
            )
            .unwrap();
        assert_eq!(
            settings.files_dir().unwrap(),
            "/srv/runs/ballast/run-20260301_093000-r1/files"
        );
        assert_eq!(
            settings.log_user().unwrap(),
            "/srv/runs/ballast/run-20260301_093000-r1/logs/debug.log"
        );
        assert_eq!(settings.sync_file().unwrap(), "run-r1.sync");
    }

    #[test]
    fn test_derived_paths_track_mode_changes() {
        let mut settings = Settings::new();
        settings
            .update(
                &entries(&[
                    ("run_id", json!("r1")),
                    ("start_datetime", json!("2026-03-01T09:30:00+00:00")),
                ]),
                Source::Init,
            )
            .unwrap();
        let online = settings.files_dir().unwrap();
        settings
            .update_one("mode", json!("offline"), Source::Args)
            .unwrap();
        let offline = settings.files_dir().unwrap();
        assert!(online.contains("/run-"));
        assert!(offline.contains("/offline-run-"));
    }
}
