//! Generated schema artifacts.
//!
//! Do not edit by hand: regenerate with `ballast schema generate` and
//! keep in sync with the live schema (guarded by the drift tests in
//! `schema/mod.rs`).

/// Every declared setting name, in sorted order.
pub const SETTING_NAMES: &[&str] = &[
    "allow_val_change",
    "anonymous",
    "api_key",
    "args",
    "base_url",
    "cli_only_mode",
    "code_dir",
    "config_paths",
    "console",
    "debug_log",
    "disable_code",
    "disable_git",
    "disable_meta",
    "disable_stats",
    "disable_viewer",
    "disabled",
    "docker",
    "email",
    "entity",
    "except_exit",
    "executable",
    "files_dir",
    "force",
    "git_remote",
    "heartbeat_seconds",
    "host",
    "ignore_globs",
    "internal_check_process",
    "internal_queue_timeout",
    "label_disable",
    "launch",
    "launch_config_path",
    "log_dir",
    "log_internal",
    "log_symlink_internal",
    "log_symlink_user",
    "log_user",
    "login_timeout",
    "mode",
    "notebook_name",
    "os",
    "problem",
    "program",
    "program_relpath",
    "project",
    "quiet",
    "reinit",
    "relogin",
    "require_service",
    "resume",
    "resume_file",
    "root_dir",
    "run_group",
    "run_id",
    "run_job_type",
    "run_name",
    "run_notes",
    "run_tags",
    "runqueue_item_id",
    "runtime",
    "save_code",
    "save_requirements",
    "service_transport",
    "settings_system",
    "settings_workspace",
    "show_colors",
    "show_emoji",
    "show_errors",
    "show_info",
    "show_warnings",
    "silent",
    "stage_dir",
    "start_datetime",
    "start_method",
    "start_time",
    "strict",
    "summary_errors",
    "summary_warnings",
    "sweep_id",
    "sweep_param_path",
    "symlink",
    "sync_dir",
    "sync_file",
    "sync_symlink_latest",
    "system_sample",
    "system_sample_seconds",
    "tmp_dir",
    "unsaved_keys",
    "username",
];

/// The canonical modification order: every setting appears after the
/// settings its derivers read.
pub const MODIFICATION_ORDER: &[&str] = &[
    "allow_val_change",
    "anonymous",
    "api_key",
    "args",
    "base_url",
    "cli_only_mode",
    "code_dir",
    "config_paths",
    "console",
    "debug_log",
    "disable_code",
    "disable_git",
    "disable_meta",
    "disable_stats",
    "disable_viewer",
    "disabled",
    "docker",
    "email",
    "entity",
    "except_exit",
    "executable",
    "mode",
    "run_id",
    "root_dir",
    "stage_dir",
    "start_datetime",
    "files_dir",
    "force",
    "git_remote",
    "heartbeat_seconds",
    "host",
    "ignore_globs",
    "internal_check_process",
    "internal_queue_timeout",
    "label_disable",
    "launch",
    "launch_config_path",
    "log_dir",
    "log_internal",
    "log_symlink_internal",
    "log_symlink_user",
    "log_user",
    "login_timeout",
    "notebook_name",
    "os",
    "problem",
    "program",
    "program_relpath",
    "project",
    "quiet",
    "reinit",
    "relogin",
    "require_service",
    "resume",
    "resume_file",
    "run_group",
    "run_job_type",
    "run_name",
    "run_notes",
    "run_tags",
    "runqueue_item_id",
    "runtime",
    "save_code",
    "save_requirements",
    "service_transport",
    "settings_system",
    "settings_workspace",
    "show_colors",
    "show_emoji",
    "show_errors",
    "show_info",
    "show_warnings",
    "silent",
    "start_method",
    "start_time",
    "strict",
    "summary_errors",
    "summary_warnings",
    "sweep_id",
    "sweep_param_path",
    "symlink",
    "sync_dir",
    "sync_file",
    "sync_symlink_latest",
    "system_sample",
    "system_sample_seconds",
    "tmp_dir",
    "unsaved_keys",
    "username",
];
