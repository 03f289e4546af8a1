use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::extract::{
    DEFAULT_SCRIPT_EXTENSIONS, DEFAULT_TEMPLATE_EXTENSIONS, ExtensionMap, normalize_extension,
};

pub const CONFIG_FILE_NAME: &str = ".potgenrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Output catalog path → sources (files, directories or globs), in
    /// declaration order.
    #[serde(default)]
    pub targets: IndexMap<String, Vec<String>>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_template_extensions")]
    pub template_extensions: Vec<String>,
    #[serde(default = "default_script_extensions")]
    pub script_extensions: Vec<String>,
}

fn default_template_extensions() -> Vec<String> {
    DEFAULT_TEMPLATE_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}

fn default_script_extensions() -> Vec<String> {
    DEFAULT_SCRIPT_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            targets: IndexMap::new(),
            ignores: Vec::new(),
            template_extensions: default_template_extensions(),
            script_extensions: default_script_extensions(),
        }
    }
}

impl Config {
    /// Configuration written by `potgen init`.
    pub fn starter() -> Self {
        let mut targets = IndexMap::new();
        targets.insert(
            "locale/messages.pot".to_string(),
            vec!["templates".to_string(), "static/js".to_string()],
        );
        Self {
            targets,
            ignores: vec!["**/node_modules/**".to_string()],
            ..Default::default()
        }
    }

    /// Validate configuration values.
    ///
    /// Returns an error for invalid glob patterns, empty target paths, or an
    /// extension claimed by both source kinds.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        for (output, sources) in &self.targets {
            if output.trim().is_empty() {
                bail!("Target output path in 'targets' must not be empty");
            }
            for source in sources {
                if source.contains('*') || source.contains('?') || source.contains('[') {
                    Pattern::new(source).with_context(|| {
                        format!(
                            "Invalid glob pattern in 'targets' for \"{}\": \"{}\"",
                            output, source
                        )
                    })?;
                }
            }
        }

        for template in &self.template_extensions {
            let template = normalize_extension(template);
            if template.is_empty() {
                bail!("Empty extension in 'templateExtensions'");
            }
            if self
                .script_extensions
                .iter()
                .any(|script| normalize_extension(script) == template)
            {
                bail!(
                    "Extension \"{}\" is listed in both 'templateExtensions' and 'scriptExtensions'",
                    template
                );
            }
        }
        if self
            .script_extensions
            .iter()
            .any(|script| normalize_extension(script).is_empty())
        {
            bail!("Empty extension in 'scriptExtensions'");
        }

        Ok(())
    }

    pub fn extension_map(&self) -> ExtensionMap {
        ExtensionMap::new(&self.template_extensions, &self.script_extensions)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::starter();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

/// Walk up from `start_dir` looking for the config file, stopping at the
/// repository root (a directory containing `.git`).
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir
        .canonicalize()
        .unwrap_or_else(|_| start_dir.to_path_buf());

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the config file, `None` when using defaults.
    pub path: Option<PathBuf>,
}

impl ConfigLoadResult {
    pub fn from_file(&self) -> bool {
        self.path.is_some()
    }

    /// Directory that target paths are relative to: the config file's
    /// directory, or `fallback` when no file was found.
    pub fn base_dir(&self, fallback: &Path) -> PathBuf {
        self.path
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or_else(|| fallback.to_path_buf())
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}

#[cfg(test)]
mod tests {
    use crate::config::*;
    use crate::core::SourceKind;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.targets.is_empty());
        assert!(config.ignores.is_empty());
        assert_eq!(config.template_extensions, vec!["html", "njk", "jinja", "jinja2"]);
        assert_eq!(config.script_extensions, vec!["js", "mjs", "cjs"]);
    }

    #[test]
    fn test_parse_config_keeps_target_order() {
        let json = r#"{
              "targets": {
                  "locale/web.pot": ["templates"],
                  "locale/admin.pot": ["admin/templates", "admin/static/*.js"]
              },
              "ignores": ["**/dist/**"],
              "scriptExtensions": [".js"]
          }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        let outputs: Vec<_> = config.targets.keys().map(String::as_str).collect();
        assert_eq!(outputs, vec!["locale/web.pot", "locale/admin.pot"]);
        assert_eq!(config.ignores, vec!["**/dist/**"]);
        assert_eq!(config.script_extensions, vec![".js"]);
        assert_eq!(config.template_extensions, default_template_extensions());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_find_config_file() {
        let dir = tempdir().unwrap();
        let sub_dir = dir.path().join("templates").join("partials");
        fs::create_dir_all(&sub_dir).unwrap();

        let config_path = dir.path().canonicalize().unwrap().join(CONFIG_FILE_NAME);
        File::create(&config_path).unwrap();

        let found = find_config_file(&sub_dir);
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_not_found() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        let found = find_config_file(dir.path());
        assert!(found.is_none());
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, r#"{ "targets": { "out.pot": ["src"] } }"#).unwrap();

        let result = load_config(dir.path()).unwrap();
        assert!(result.from_file());
        assert_eq!(result.config.targets["out.pot"], vec!["src"]);
        assert_eq!(
            result.base_dir(Path::new("unused")),
            dir.path().canonicalize().unwrap()
        );
    }

    #[test]
    fn test_load_config_default_when_not_found() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();

        let result = load_config(dir.path()).unwrap();
        assert!(!result.from_file());
        assert!(result.config.targets.is_empty());
        assert_eq!(result.base_dir(dir.path()), dir.path());
    }

    #[test]
    fn test_load_config_with_invalid_pattern_fails() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{ "ignores": ["[invalid"] }"#,
        )
        .unwrap();

        assert!(load_config(dir.path()).is_err());
    }

    #[test]
    fn test_validate_invalid_target_pattern() {
        let mut config = Config::default();
        config
            .targets
            .insert("out.pot".to_string(), vec!["src/**/[bad".to_string()]);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("targets"));
    }

    #[test]
    fn test_validate_overlapping_extensions() {
        let config = Config {
            template_extensions: vec!["html".to_string(), "js".to_string()],
            script_extensions: vec![".js".to_string()],
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("\"js\""));
    }

    #[test]
    fn test_extension_map_from_config() {
        let config = Config {
            template_extensions: vec!["tmpl".to_string()],
            ..Default::default()
        };
        let map = config.extension_map();
        assert_eq!(map.kind_for(Path::new("a.tmpl")), Some(SourceKind::Template));
        assert_eq!(map.kind_for(Path::new("a.html")), None);
        assert_eq!(map.kind_for(Path::new("a.mjs")), Some(SourceKind::Script));
    }

    #[test]
    fn test_default_config_json_round_trips() {
        let json = default_config_json().unwrap();
        assert!(json.contains("\"targets\""));
        assert!(json.contains("templateExtensions"));
        let config: Config = serde_json::from_str(&json).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.targets.len(), 1);
    }
}
