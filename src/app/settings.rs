use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::{
    app::sourcing::GenerationOrder,
    cli::Cli,
    data::{
        cache::DEFAULT_CACHE_CAPACITY,
        http::{DEFAULT_BACKEND_URL, DEFAULT_TIMEOUT_SECS},
    },
    domain::{
        color::non_empty,
        contrast::{
            ContrastMode, ContrastResolver, DEFAULT_DARK_TEXT, DEFAULT_LIGHT_TEXT,
            DEFAULT_MIN_CONTRAST_RATIO,
        },
        language::Language,
    },
};

pub const CONFIG_DIR_ENV: &str = "FLYER_STYLE_CONFIG_DIR";
pub const BACKEND_URL_ENV: &str = "FLYER_STYLE_BACKEND_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub backend_url: String,
    pub request_timeout_secs: u64,
    pub dark_text_color: String,
    pub light_text_color: String,
    pub min_contrast_ratio: f32,
    pub contrast_mode: ContrastMode,
    pub generation_order: GenerationOrder,
    pub default_language: Language,
    pub cache_capacity: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            dark_text_color: DEFAULT_DARK_TEXT.to_string(),
            light_text_color: DEFAULT_LIGHT_TEXT.to_string(),
            min_contrast_ratio: DEFAULT_MIN_CONTRAST_RATIO,
            contrast_mode: ContrastMode::default(),
            generation_order: GenerationOrder::default(),
            default_language: Language::default(),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl EngineSettings {
    #[must_use]
    pub fn contrast_resolver(&self) -> ContrastResolver {
        ContrastResolver::new(&self.dark_text_color, &self.light_text_color)
            .with_mode(self.contrast_mode)
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    /// Flags given on the command line win over everything else.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(url) = non_empty(cli.backend_url.as_deref()) {
            self.backend_url = url.to_string();
        }
        if let Some(timeout) = cli.timeout {
            self.request_timeout_secs = timeout;
        }
        if let Some(contrast) = cli.contrast {
            self.contrast_mode = contrast.into();
        }
        if let Some(order) = cli.generation_order() {
            self.generation_order = order;
        }
    }
}

/// Defaults, then the settings file, then `FLYER_STYLE_BACKEND_URL`, then
/// CLI flags. The returned path is where `--save-settings` writes.
pub fn load_engine_settings(cli: &Cli, enable_disk: bool) -> (EngineSettings, Option<PathBuf>) {
    let path = if enable_disk { settings_path() } else { None };
    let env_backend = std::env::var(BACKEND_URL_ENV).ok();
    let settings = resolve_settings(cli, path.as_deref(), env_backend.as_deref());
    (settings, path)
}

pub(crate) fn resolve_settings(
    cli: &Cli,
    path: Option<&Path>,
    env_backend: Option<&str>,
) -> EngineSettings {
    let mut settings = path.and_then(read_settings_file).unwrap_or_default();
    if let Some(url) = non_empty(env_backend) {
        settings.backend_url = url.to_string();
    }
    settings.apply_cli(cli);
    settings
}

fn read_settings_file(path: &Path) -> Option<EngineSettings> {
    let content = fs::read_to_string(path).ok()?;
    match serde_json::from_str::<EngineSettings>(&content) {
        Ok(saved) => Some(saved),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable settings file");
            None
        }
    }
}

pub fn save_engine_settings(path: &Path, settings: &EngineSettings) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("creating settings directory failed")?;
    }
    let payload =
        serde_json::to_string_pretty(settings).context("serializing settings payload failed")?;
    fs::write(path, payload).context("writing settings file failed")?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600))
            .context("restricting settings file permissions failed")?;
    }
    Ok(())
}

pub fn clear_engine_settings(path: &Path) -> anyhow::Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err).context("removing settings file failed"),
    }
}

fn settings_path() -> Option<PathBuf> {
    if let Some(base) = std::env::var_os(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(base).join("settings.json"));
    }

    let home = std::env::var_os("HOME")?;
    Some(
        PathBuf::from(home)
            .join(".config")
            .join("flyer-style")
            .join("settings.json"),
    )
}
