//! The declared settings schema.
//!
//! This module is the single registration point for every setting the
//! registry knows about: one [`SettingSpec`] struct literal per setting,
//! carrying its name, default, preprocess/validate/derive pipeline, policy
//! flag, and - crucially - an explicit, static list of the other settings
//! its derivers read. The dependency graph is built purely from these
//! declared `deps` lists, never from reflection or closure inspection.
//!
//! Registry-level computed accessors (pure functions over resolved values
//! with no storage of their own) are registered in [`computed`] so the
//! snapshot and the offline generator can enumerate them.
//!
//! The checked-in artifacts in [`generated`] (setting names, canonical
//! modification order) are emitted by `ballast schema generate` and guarded
//! against drift by the tests at the bottom of this file.

pub mod generated;
pub mod graph;

use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Value, json};

use crate::Result;
use crate::settings::value as coerce;
use crate::settings::{Deriver, Preprocessor, Settings, Validator};
use graph::DependencyGraph;

/// The default cloud endpoint. `is_local` compares against this.
pub const DEFAULT_BASE_URL: &str = "https://api.ballast.dev";

/// Directory name staged under `root_dir` when no override applies.
pub const DEFAULT_STAGE_DIR: &str = "ballast";

/// Declaration of one setting: everything the registry needs to seed,
/// update, and derive it.
#[derive(Debug, Clone)]
pub struct SettingSpec {
    /// Declared name; the registry's key.
    pub name: &'static str,
    /// Produces the schema default (exempt from validation).
    pub default: fn() -> Value,
    /// Pure transforms run before validation.
    pub preprocessors: &'static [Preprocessor],
    /// Predicates run against the preprocessed value.
    pub validators: &'static [Validator],
    /// Pure derivation chain applied on every read.
    pub derivers: &'static [Deriver],
    /// Names of the settings the derivers read, declared statically.
    pub deps: &'static [&'static str],
    /// Whether source precedence is inverted for this setting.
    pub is_policy: bool,
    /// Whether the setting rejects all updates from birth.
    pub frozen: bool,
}

impl Default for SettingSpec {
    fn default() -> Self {
        Self {
            name: "",
            default: || Value::Null,
            preprocessors: &[],
            validators: &[],
            derivers: &[],
            deps: &[],
            is_policy: false,
            frozen: false,
        }
    }
}

/// Declaration of one registry-level computed accessor.
#[derive(Debug, Clone)]
pub struct ComputedSpec {
    /// Exported name in the snapshot.
    pub name: &'static str,
    /// Pure function over the registry's resolved values.
    pub compute: fn(&Settings) -> Value,
}

// ==================== Preprocessors ====================

fn pp_str_as_bool(value: &Value) -> std::result::Result<Value, String> {
    match coerce::as_bool(value) {
        Some(b) => Ok(json!(b)),
        None => Err(format!("{value} is not a boolean")),
    }
}

fn pp_to_int(value: &Value) -> std::result::Result<Value, String> {
    match coerce::as_i64(value) {
        Some(n) => Ok(json!(n)),
        None => Err(format!("{value} is not an integer")),
    }
}

fn pp_to_float(value: &Value) -> std::result::Result<Value, String> {
    match coerce::as_f64(value) {
        Some(n) => Ok(json!(n)),
        None => Err(format!("{value} is not a number")),
    }
}

fn pp_trim_slash(value: &Value) -> std::result::Result<Value, String> {
    match value.as_str() {
        Some(s) => Ok(json!(s.trim_end_matches('/'))),
        None => Err("expected a string".to_string()),
    }
}

fn pp_split_commas(value: &Value) -> std::result::Result<Value, String> {
    match value {
        Value::String(s) => Ok(json!(coerce::split_commas(s))),
        Value::Array(_) => Ok(value.clone()),
        _ => Err("expected a string or list of strings".to_string()),
    }
}

// ==================== Validators ====================

fn error_choices(value: &Value, choices: &[&str]) -> String {
    format!("{value} not in [{}]", choices.join(", "))
}

fn vd_string(value: &Value) -> std::result::Result<(), String> {
    if value.is_string() {
        Ok(())
    } else {
        Err("expected a string".to_string())
    }
}

fn vd_bool(value: &Value) -> std::result::Result<(), String> {
    if value.is_boolean() {
        Ok(())
    } else {
        Err("expected a boolean".to_string())
    }
}

fn vd_int(value: &Value) -> std::result::Result<(), String> {
    if value.as_i64().is_some() {
        Ok(())
    } else {
        Err("expected an integer".to_string())
    }
}

fn vd_number(value: &Value) -> std::result::Result<(), String> {
    if value.is_number() {
        Ok(())
    } else {
        Err("expected a number".to_string())
    }
}

fn vd_string_list(value: &Value) -> std::result::Result<(), String> {
    match value {
        Value::Array(items) if items.iter().all(Value::is_string) => Ok(()),
        _ => Err("expected a list of strings".to_string()),
    }
}

fn vd_datetime(value: &Value) -> std::result::Result<(), String> {
    let Some(s) = value.as_str() else {
        return Err("expected an RFC 3339 timestamp string".to_string());
    };
    match chrono::DateTime::parse_from_rfc3339(s) {
        Ok(_) => Ok(()),
        Err(err) => Err(format!("not an RFC 3339 timestamp: {err}")),
    }
}

fn vd_mode(value: &Value) -> std::result::Result<(), String> {
    const CHOICES: &[&str] = &["dryrun", "run", "offline", "online", "disabled"];
    match value.as_str() {
        Some(s) if CHOICES.contains(&s) => Ok(()),
        _ => Err(error_choices(value, CHOICES)),
    }
}

fn vd_console(value: &Value) -> std::result::Result<(), String> {
    const CHOICES: &[&str] = &["auto", "redirect", "off", "wrap"];
    match value.as_str() {
        Some(s) if CHOICES.contains(&s) => Ok(()),
        _ => Err(error_choices(value, CHOICES)),
    }
}

fn vd_anonymous(value: &Value) -> std::result::Result<(), String> {
    const CHOICES: &[&str] = &["allow", "must", "never", "false", "true"];
    match value.as_str() {
        Some(s) if CHOICES.contains(&s) => Ok(()),
        _ => Err(error_choices(value, CHOICES)),
    }
}

fn vd_problem(value: &Value) -> std::result::Result<(), String> {
    const CHOICES: &[&str] = &["fatal", "warn", "silent"];
    match value.as_str() {
        Some(s) if CHOICES.contains(&s) => Ok(()),
        _ => Err(error_choices(value, CHOICES)),
    }
}

fn vd_start_method(value: &Value) -> std::result::Result<(), String> {
    const CHOICES: &[&str] = &["thread", "spawn", "fork", "forkserver"];
    match value.as_str() {
        Some(s) if CHOICES.contains(&s) => Ok(()),
        _ => Err(error_choices(value, CHOICES)),
    }
}

fn vd_base_url(value: &Value) -> std::result::Result<(), String> {
    static URL_RE: OnceLock<Regex> = OnceLock::new();
    let re = URL_RE.get_or_init(|| Regex::new(r"^https?://\S+$").expect("valid pattern"));
    let Some(s) = value.as_str() else {
        return Err("expected a string".to_string());
    };
    if !re.is_match(s) {
        return Err(format!("{s} is not a valid server address"));
    }
    if s.starts_with("http://") && s.contains("ballast.dev") {
        return Err(format!("http is not secure, please use {DEFAULT_BASE_URL}"));
    }
    Ok(())
}

fn vd_project_name(value: &Value) -> std::result::Result<(), String> {
    const INVALID_CHARS: &[char] = &['/', '\\', '#', '?', '%', ':'];
    let Some(s) = value.as_str() else {
        return Err("expected a string".to_string());
    };
    if s.len() > 128 {
        return Err(format!("project name \"{s}\" exceeds 128 characters"));
    }
    let found: Vec<char> = s.chars().filter(|c| INVALID_CHARS.contains(c)).collect();
    if !found.is_empty() {
        return Err(format!(
            "project name \"{s}\" cannot contain {}",
            found.iter().collect::<String>()
        ));
    }
    Ok(())
}

// ==================== Derivers ====================

/// The run-scoped directory `<stage_dir>/<run_mode>-<timespec>-<run_id>`,
/// or `None` until the run identity is established.
fn run_dir(ctx: &Settings) -> Option<String> {
    let stage = ctx.stage_dir()?;
    let timespec = ctx.timespec()?;
    let run_id = ctx.run_id()?;
    Some(coerce::join_path(
        &stage,
        &[&format!("{}-{}-{}", ctx.run_mode(), timespec, run_id)],
    ))
}

fn dv_join_root(value: Value, ctx: &Settings) -> Value {
    let name = value.as_str().unwrap_or(DEFAULT_STAGE_DIR);
    match ctx.root_dir() {
        Some(root) => json!(coerce::join_path(&root, &[name])),
        None => json!(name),
    }
}

fn dv_join_stage_dir(value: Value, ctx: &Settings) -> Value {
    match (ctx.stage_dir(), value.as_str()) {
        (Some(stage), Some(name)) => json!(coerce::join_path(&stage, &[name])),
        _ => value,
    }
}

fn dv_join_run_dir(value: Value, ctx: &Settings) -> Value {
    match (run_dir(ctx), value.as_str()) {
        (Some(dir), Some(name)) => json!(coerce::join_path(&dir, &[name])),
        _ => Value::Null,
    }
}

// the stored value only anchors sync_dir/sync_file; the derived path is a
// pure function of the run identity
fn dv_run_dir(_value: Value, ctx: &Settings) -> Value {
    match run_dir(ctx) {
        Some(dir) => json!(dir),
        None => Value::Null,
    }
}

fn dv_run_file_name(_value: Value, ctx: &Settings) -> Value {
    match ctx.run_id() {
        Some(run_id) => json!(format!("run-{run_id}.sync")),
        None => Value::Null,
    }
}

fn dv_join_log_dir(value: Value, ctx: &Settings) -> Value {
    match (ctx.log_dir(), value.as_str()) {
        (Some(dir), Some(name)) => json!(coerce::join_path(&dir, &[name])),
        _ => Value::Null,
    }
}

fn dv_expand_user(value: Value, _ctx: &Settings) -> Value {
    match value.as_str() {
        Some(path) => json!(coerce::expand_user(path)),
        None => value,
    }
}

// ==================== Registration Tables ====================

/// Dependency list shared by every run-scoped path deriver.
const RUN_DIR_DEPS: &[&str] = &["disabled", "mode", "run_id", "stage_dir", "start_datetime"];

/// The full static registration table, one entry per declared setting, in
/// sorted name order.
pub fn specs() -> Vec<SettingSpec> {
    vec![
        SettingSpec {
            name: "allow_val_change",
            validators: &[vd_bool],
            ..Default::default()
        },
        SettingSpec {
            name: "anonymous",
            validators: &[vd_string, vd_anonymous],
            ..Default::default()
        },
        SettingSpec {
            name: "api_key",
            // never preprocessed: treated like a password
            validators: &[vd_string],
            ..Default::default()
        },
        SettingSpec {
            name: "args",
            validators: &[vd_string_list],
            ..Default::default()
        },
        SettingSpec {
            name: "base_url",
            default: || json!(DEFAULT_BASE_URL),
            preprocessors: &[pp_trim_slash],
            validators: &[vd_string, vd_base_url],
            ..Default::default()
        },
        SettingSpec {
            name: "cli_only_mode",
            validators: &[vd_bool],
            ..Default::default()
        },
        SettingSpec {
            name: "code_dir",
            validators: &[vd_string],
            ..Default::default()
        },
        SettingSpec {
            name: "config_paths",
            preprocessors: &[pp_split_commas],
            validators: &[vd_string_list],
            ..Default::default()
        },
        SettingSpec {
            name: "console",
            default: || json!("auto"),
            validators: &[vd_string, vd_console],
            ..Default::default()
        },
        SettingSpec {
            name: "debug_log",
            validators: &[vd_string],
            ..Default::default()
        },
        SettingSpec {
            name: "disable_code",
            validators: &[vd_bool],
            is_policy: true,
            ..Default::default()
        },
        SettingSpec {
            name: "disable_git",
            validators: &[vd_bool],
            is_policy: true,
            ..Default::default()
        },
        SettingSpec {
            name: "disable_meta",
            validators: &[vd_bool],
            ..Default::default()
        },
        SettingSpec {
            name: "disable_stats",
            validators: &[vd_bool],
            ..Default::default()
        },
        SettingSpec {
            name: "disable_viewer",
            validators: &[vd_bool],
            ..Default::default()
        },
        SettingSpec {
            name: "disabled",
            default: || json!(false),
            validators: &[vd_bool],
            ..Default::default()
        },
        SettingSpec {
            name: "docker",
            validators: &[vd_string],
            ..Default::default()
        },
        SettingSpec {
            name: "email",
            validators: &[vd_string],
            ..Default::default()
        },
        SettingSpec {
            name: "entity",
            validators: &[vd_string],
            ..Default::default()
        },
        SettingSpec {
            name: "except_exit",
            validators: &[vd_bool],
            ..Default::default()
        },
        SettingSpec {
            name: "executable",
            validators: &[vd_string],
            ..Default::default()
        },
        SettingSpec {
            name: "files_dir",
            default: || json!("files"),
            validators: &[vd_string],
            derivers: &[dv_join_run_dir],
            deps: RUN_DIR_DEPS,
            ..Default::default()
        },
        SettingSpec {
            name: "force",
            validators: &[vd_bool],
            ..Default::default()
        },
        SettingSpec {
            name: "git_remote",
            default: || json!("origin"),
            validators: &[vd_string],
            ..Default::default()
        },
        SettingSpec {
            name: "heartbeat_seconds",
            default: || json!(30),
            validators: &[vd_int],
            ..Default::default()
        },
        SettingSpec {
            name: "host",
            validators: &[vd_string],
            ..Default::default()
        },
        SettingSpec {
            name: "ignore_globs",
            default: || json!([]),
            preprocessors: &[pp_split_commas],
            validators: &[vd_string_list],
            ..Default::default()
        },
        SettingSpec {
            name: "internal_check_process",
            default: || json!(8.0),
            validators: &[vd_number],
            ..Default::default()
        },
        SettingSpec {
            name: "internal_queue_timeout",
            default: || json!(2.0),
            validators: &[vd_number],
            ..Default::default()
        },
        SettingSpec {
            name: "label_disable",
            validators: &[vd_bool],
            ..Default::default()
        },
        SettingSpec {
            name: "launch",
            validators: &[vd_bool],
            ..Default::default()
        },
        SettingSpec {
            name: "launch_config_path",
            validators: &[vd_string],
            ..Default::default()
        },
        SettingSpec {
            name: "log_dir",
            default: || json!("logs"),
            validators: &[vd_string],
            derivers: &[dv_join_run_dir],
            deps: RUN_DIR_DEPS,
            ..Default::default()
        },
        SettingSpec {
            name: "log_internal",
            default: || json!("debug-internal.log"),
            validators: &[vd_string],
            derivers: &[dv_join_log_dir],
            deps: &["log_dir"],
            ..Default::default()
        },
        SettingSpec {
            name: "log_symlink_internal",
            default: || json!("debug-internal.log"),
            validators: &[vd_string],
            derivers: &[dv_join_stage_dir],
            deps: &["stage_dir"],
            ..Default::default()
        },
        SettingSpec {
            name: "log_symlink_user",
            default: || json!("debug.log"),
            validators: &[vd_string],
            derivers: &[dv_join_stage_dir],
            deps: &["stage_dir"],
            ..Default::default()
        },
        SettingSpec {
            name: "log_user",
            default: || json!("debug.log"),
            validators: &[vd_string],
            derivers: &[dv_join_log_dir],
            deps: &["log_dir"],
            ..Default::default()
        },
        SettingSpec {
            name: "login_timeout",
            preprocessors: &[pp_to_float],
            validators: &[vd_number],
            ..Default::default()
        },
        SettingSpec {
            name: "mode",
            default: || json!("online"),
            validators: &[vd_string, vd_mode],
            ..Default::default()
        },
        SettingSpec {
            name: "notebook_name",
            validators: &[vd_string],
            ..Default::default()
        },
        SettingSpec {
            name: "os",
            validators: &[vd_string],
            ..Default::default()
        },
        SettingSpec {
            name: "problem",
            default: || json!("fatal"),
            validators: &[vd_string, vd_problem],
            ..Default::default()
        },
        SettingSpec {
            name: "program",
            validators: &[vd_string],
            ..Default::default()
        },
        SettingSpec {
            name: "program_relpath",
            validators: &[vd_string],
            ..Default::default()
        },
        SettingSpec {
            name: "project",
            validators: &[vd_string, vd_project_name],
            ..Default::default()
        },
        SettingSpec {
            name: "quiet",
            preprocessors: &[pp_str_as_bool],
            validators: &[vd_bool],
            ..Default::default()
        },
        SettingSpec {
            name: "reinit",
            validators: &[vd_bool],
            ..Default::default()
        },
        SettingSpec {
            name: "relogin",
            validators: &[vd_bool],
            ..Default::default()
        },
        SettingSpec {
            name: "require_service",
            validators: &[vd_string],
            ..Default::default()
        },
        SettingSpec {
            name: "resume",
            validators: &[vd_string],
            ..Default::default()
        },
        SettingSpec {
            name: "resume_file",
            default: || json!("resume.json"),
            validators: &[vd_string],
            derivers: &[dv_join_stage_dir],
            deps: &["stage_dir"],
            ..Default::default()
        },
        SettingSpec {
            name: "root_dir",
            validators: &[vd_string],
            ..Default::default()
        },
        SettingSpec {
            name: "run_group",
            validators: &[vd_string],
            ..Default::default()
        },
        SettingSpec {
            name: "run_id",
            validators: &[vd_string],
            ..Default::default()
        },
        SettingSpec {
            name: "run_job_type",
            validators: &[vd_string],
            ..Default::default()
        },
        SettingSpec {
            name: "run_name",
            validators: &[vd_string],
            ..Default::default()
        },
        SettingSpec {
            name: "run_notes",
            validators: &[vd_string],
            ..Default::default()
        },
        SettingSpec {
            name: "run_tags",
            preprocessors: &[pp_split_commas],
            validators: &[vd_string_list],
            ..Default::default()
        },
        SettingSpec {
            name: "runqueue_item_id",
            validators: &[vd_string],
            ..Default::default()
        },
        SettingSpec {
            name: "runtime",
            validators: &[vd_string],
            ..Default::default()
        },
        SettingSpec {
            name: "save_code",
            validators: &[vd_bool],
            is_policy: true,
            ..Default::default()
        },
        SettingSpec {
            name: "save_requirements",
            default: || json!(true),
            validators: &[vd_bool],
            ..Default::default()
        },
        SettingSpec {
            name: "service_transport",
            validators: &[vd_string],
            ..Default::default()
        },
        SettingSpec {
            name: "settings_system",
            default: || json!("~/.config/ballast/settings"),
            validators: &[vd_string],
            derivers: &[dv_expand_user],
            ..Default::default()
        },
        SettingSpec {
            name: "settings_workspace",
            default: || json!("settings"),
            validators: &[vd_string],
            derivers: &[dv_join_stage_dir],
            deps: &["stage_dir"],
            ..Default::default()
        },
        SettingSpec {
            name: "show_colors",
            validators: &[vd_bool],
            ..Default::default()
        },
        SettingSpec {
            name: "show_emoji",
            validators: &[vd_bool],
            ..Default::default()
        },
        SettingSpec {
            name: "show_errors",
            default: || json!(true),
            preprocessors: &[pp_str_as_bool],
            validators: &[vd_bool],
            ..Default::default()
        },
        SettingSpec {
            name: "show_info",
            default: || json!(true),
            preprocessors: &[pp_str_as_bool],
            validators: &[vd_bool],
            ..Default::default()
        },
        SettingSpec {
            name: "show_warnings",
            default: || json!(true),
            preprocessors: &[pp_str_as_bool],
            validators: &[vd_bool],
            ..Default::default()
        },
        SettingSpec {
            name: "silent",
            default: || json!(false),
            preprocessors: &[pp_str_as_bool],
            validators: &[vd_bool],
            ..Default::default()
        },
        SettingSpec {
            name: "stage_dir",
            default: || json!(DEFAULT_STAGE_DIR),
            validators: &[vd_string],
            derivers: &[dv_join_root],
            deps: &["root_dir"],
            ..Default::default()
        },
        SettingSpec {
            name: "start_datetime",
            validators: &[vd_datetime],
            ..Default::default()
        },
        SettingSpec {
            name: "start_method",
            validators: &[vd_string, vd_start_method],
            ..Default::default()
        },
        SettingSpec {
            name: "start_time",
            validators: &[vd_number],
            ..Default::default()
        },
        SettingSpec {
            name: "strict",
            preprocessors: &[pp_str_as_bool],
            validators: &[vd_bool],
            ..Default::default()
        },
        SettingSpec {
            name: "summary_errors",
            validators: &[vd_int],
            ..Default::default()
        },
        SettingSpec {
            name: "summary_warnings",
            default: || json!(5),
            preprocessors: &[pp_to_int],
            validators: &[vd_int],
            is_policy: true,
            ..Default::default()
        },
        SettingSpec {
            name: "sweep_id",
            validators: &[vd_string],
            ..Default::default()
        },
        SettingSpec {
            name: "sweep_param_path",
            validators: &[vd_string],
            ..Default::default()
        },
        SettingSpec {
            name: "symlink",
            validators: &[vd_bool],
            ..Default::default()
        },
        SettingSpec {
            name: "sync_dir",
            default: || json!(""),
            validators: &[vd_string],
            derivers: &[dv_run_dir],
            deps: RUN_DIR_DEPS,
            ..Default::default()
        },
        SettingSpec {
            name: "sync_file",
            default: || json!(""),
            validators: &[vd_string],
            derivers: &[dv_run_file_name],
            deps: &["run_id"],
            ..Default::default()
        },
        SettingSpec {
            name: "sync_symlink_latest",
            default: || json!("latest-run"),
            validators: &[vd_string],
            derivers: &[dv_join_stage_dir],
            deps: &["stage_dir"],
            ..Default::default()
        },
        SettingSpec {
            name: "system_sample",
            default: || json!(15),
            validators: &[vd_int],
            ..Default::default()
        },
        SettingSpec {
            name: "system_sample_seconds",
            default: || json!(2),
            validators: &[vd_int],
            ..Default::default()
        },
        SettingSpec {
            name: "tmp_dir",
            default: || json!("tmp"),
            validators: &[vd_string],
            derivers: &[dv_join_run_dir],
            deps: RUN_DIR_DEPS,
            ..Default::default()
        },
        SettingSpec {
            name: "unsaved_keys",
            validators: &[vd_string_list],
            ..Default::default()
        },
        SettingSpec {
            name: "username",
            validators: &[vd_string],
            ..Default::default()
        },
    ]
}

/// The registry-level computed accessors, in sorted name order.
pub fn computed() -> Vec<ComputedSpec> {
    vec![
        ComputedSpec {
            name: "console_mode",
            compute: crate::settings::registry::console_mode_value,
        },
        ComputedSpec {
            name: "is_local",
            compute: |settings| json!(settings.is_local()),
        },
        ComputedSpec {
            name: "is_noop",
            compute: |settings| json!(settings.is_noop()),
        },
        ComputedSpec {
            name: "is_offline",
            compute: |settings| json!(settings.is_offline()),
        },
        ComputedSpec {
            name: "run_mode",
            compute: |settings| json!(settings.run_mode()),
        },
        ComputedSpec {
            name: "timespec",
            compute: |settings| match settings.timespec() {
                Some(timespec) => json!(timespec),
                None => Value::Null,
            },
        },
    ]
}

/// Render the `generated.rs` module from the live schema.
///
/// Used by `ballast schema generate`; the emitted consts are checked in and
/// compared against live recomputation by the drift tests below.
pub fn render_generated_module() -> Result<String> {
    let specs = specs();
    let graph = DependencyGraph::from_specs(&specs)?;
    let order = graph.modification_order()?;

    let mut out = String::new();
    out.push_str("//! Generated schema artifacts.\n");
    out.push_str("//!\n");
    out.push_str("//! Do not edit by hand: regenerate with `ballast schema generate` and\n");
    out.push_str("//! keep in sync with the live schema (guarded by the drift tests in\n");
    out.push_str("//! `schema/mod.rs`).\n\n");
    out.push_str("/// Every declared setting name, in sorted order.\n");
    out.push_str("pub const SETTING_NAMES: &[&str] = &[\n");
    for spec in &specs {
        out.push_str(&format!("    \"{}\",\n", spec.name));
    }
    out.push_str("];\n\n");
    out.push_str("/// The canonical modification order: every setting appears after the\n");
    out.push_str("/// settings its derivers read.\n");
    out.push_str("pub const MODIFICATION_ORDER: &[&str] = &[\n");
    for name in &order {
        out.push_str(&format!("    \"{name}\",\n"));
    }
    out.push_str("];\n");
    Ok(out)
}
