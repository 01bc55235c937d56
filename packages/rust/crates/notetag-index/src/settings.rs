//! Settings loader and resolved run configuration.
//!
//! Loads and merges:
//! - System defaults: `<PRJ_ROOT>/notetag.yaml`
//! - User overrides:  `<PRJ_CONFIG_HOME>/notetag/settings.yaml`
//!
//! Merge precedence is user over system. The merged settings resolve into an
//! [`IndexConfig`] once, at startup; nothing downstream reads the clock or
//! the environment.

use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};
use notetag_io::DEFAULT_MAX_BYTES;
use notetag_scanner::DiscoverOptions;
use serde::Deserialize;

use crate::document::DocumentTemplate;
use crate::render::RenderOptions;

const DEFAULT_SYSTEM_SETTINGS_RELATIVE_PATH: &str = "notetag.yaml";
const DEFAULT_USER_SETTINGS_RELATIVE_PATH: &str = "notetag/settings.yaml";
const DEFAULT_CONFIG_HOME_RELATIVE_PATH: &str = ".config";
const DEFAULT_DOCUMENT: &str = "README.md";

/// Optional settings from YAML. Unset fields fall back to built-in defaults.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct NotetagSettings {
    /// Notes root; defaults to `<year>/<MM>` of the run date
    pub notes_root: Option<String>,
    /// Index document path
    pub document: Option<String>,
    /// Per-file read limit in bytes
    pub max_note_bytes: Option<u64>,
    /// Suffix after the per-tag file count
    pub count_label: Option<String>,
    /// Heading of a synthesized index document
    pub default_title: Option<String>,
    /// Description of a synthesized index document
    pub default_description: Option<String>,
    /// Visit directory entries in file-name order
    pub sort_entries: Option<bool>,
}

impl NotetagSettings {
    fn merge(self, overlay: Self) -> Self {
        Self {
            notes_root: overlay.notes_root.or(self.notes_root),
            document: overlay.document.or(self.document),
            max_note_bytes: overlay.max_note_bytes.or(self.max_note_bytes),
            count_label: overlay.count_label.or(self.count_label),
            default_title: overlay.default_title.or(self.default_title),
            default_description: overlay.default_description.or(self.default_description),
            sort_entries: overlay.sort_entries.or(self.sort_entries),
        }
    }
}

/// Load merged settings (user overrides system).
///
/// `config_home` replaces `PRJ_CONFIG_HOME` when given (CLI `--conf`).
pub fn load_settings(config_home: Option<&Path>) -> NotetagSettings {
    let (system_path, user_path) = settings_paths(config_home);
    load_settings_from_paths(&system_path, &user_path)
}

#[doc(hidden)]
pub fn settings_paths(config_home: Option<&Path>) -> (PathBuf, PathBuf) {
    let root = project_root();
    let system_path = root.join(DEFAULT_SYSTEM_SETTINGS_RELATIVE_PATH);
    let user_path =
        resolve_config_home(&root, config_home).join(DEFAULT_USER_SETTINGS_RELATIVE_PATH);
    (system_path, user_path)
}

#[doc(hidden)]
pub fn load_settings_from_paths(system: &Path, user: &Path) -> NotetagSettings {
    load_one(system).merge(load_one(user))
}

fn load_one(path: &Path) -> NotetagSettings {
    if !path.exists() {
        return NotetagSettings::default();
    }
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) => {
            tracing::warn!(
                path = %path.display(),
                error = %error,
                "failed to read settings file; ignoring"
            );
            return NotetagSettings::default();
        }
    };
    if raw.trim().is_empty() {
        return NotetagSettings::default();
    }
    match serde_yaml::from_str::<NotetagSettings>(&raw) {
        Ok(value) => {
            tracing::debug!(path = %path.display(), "loaded settings");
            value
        }
        Err(error) => {
            tracing::warn!(
                path = %path.display(),
                error = %error,
                "failed to parse settings yaml; ignoring file"
            );
            NotetagSettings::default()
        }
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn project_root() -> PathBuf {
    non_empty_env("PRJ_ROOT")
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn resolve_config_home(project_root: &Path, config_home: Option<&Path>) -> PathBuf {
    let configured = config_home
        .filter(|path| !path.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .or_else(|| non_empty_env("PRJ_CONFIG_HOME").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_HOME_RELATIVE_PATH));
    if configured.is_absolute() {
        configured
    } else {
        project_root.join(configured)
    }
}

/// Notes root for the month containing `date`: `<year>/<MM>`.
#[must_use]
pub fn month_root(date: NaiveDate) -> PathBuf {
    PathBuf::from(format!("{:04}/{:02}", date.year(), date.month()))
}

/// Fully resolved inputs of one pipeline run.
#[derive(Debug, Clone)]
pub struct IndexConfig {
    /// Directory scanned for notes
    pub notes_root: PathBuf,
    /// Index document rewritten by the run
    pub document: PathBuf,
    /// Discovery options
    pub discover: DiscoverOptions,
    /// Per-file read limit for notes and the document
    pub max_bytes: u64,
    /// Renderer options
    pub render: RenderOptions,
    /// Template for a missing document
    pub template: DocumentTemplate,
}

impl IndexConfig {
    /// Config with built-in defaults for everything but the two paths.
    #[must_use]
    pub fn new(notes_root: impl Into<PathBuf>, document: impl Into<PathBuf>) -> Self {
        Self {
            notes_root: notes_root.into(),
            document: document.into(),
            discover: DiscoverOptions::default(),
            max_bytes: DEFAULT_MAX_BYTES,
            render: RenderOptions::default(),
            template: DocumentTemplate::default(),
        }
    }

    /// Resolve settings against the run date.
    #[must_use]
    pub fn from_settings(settings: &NotetagSettings, today: NaiveDate) -> Self {
        let notes_root = settings
            .notes_root
            .as_ref()
            .map_or_else(|| month_root(today), PathBuf::from);
        let document = settings
            .document
            .as_deref()
            .unwrap_or(DEFAULT_DOCUMENT);

        let mut config = Self::new(notes_root, document);
        if let Some(max_bytes) = settings.max_note_bytes {
            config.max_bytes = max_bytes;
        }
        if let Some(sort_entries) = settings.sort_entries {
            config.discover.sort_entries = sort_entries;
        }
        if let Some(label) = &settings.count_label {
            config.render.count_label.clone_from(label);
        }
        if let Some(title) = &settings.default_title {
            config.template.title.clone_from(title);
        }
        if let Some(description) = &settings.default_description {
            config.template.description.clone_from(description);
        }
        config
    }

    /// Directory that note links are written relative to.
    #[must_use]
    pub fn link_base(&self) -> &Path {
        self.document.parent().unwrap_or_else(|| Path::new(""))
    }
}
