use crate::error::{KeepError, Result};
use crate::types::config::KeepConfig;
use std::path::{Path, PathBuf};
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "keep.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".keep/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/keep/config.toml";

/// Configuration layers in increasing precedence.
fn layer_paths(root: &Path, global_path: Option<&Path>) -> Vec<PathBuf> {
    global_path
        .map(Path::to_path_buf)
        .into_iter()
        .chain([root.join(DEFAULT_CONFIG_FILE), root.join(DEFAULT_LOCAL_FILE)])
        .collect()
}

pub fn load_config(root: &Path) -> Result<Option<KeepConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

/// Any layer may be missing; `None` only when none of them exist.
pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<KeepConfig>> {
    let mut merged: Option<Value> = None;
    for path in layer_paths(root, global_path) {
        let Some(layer) = read_layer(&path)? else {
            continue;
        };
        tracing::debug!(path = %path.display(), "applying config layer");
        merged = Some(match merged {
            Some(base) => overlay(base, layer),
            None => layer,
        });
    }

    let Some(merged) = merged else {
        tracing::debug!(root = %root.display(), "no config layers found, using defaults");
        return Ok(None);
    };
    let cfg: KeepConfig = merged.try_into()?;
    cfg.validate()?;
    Ok(Some(cfg))
}

fn read_layer(path: &Path) -> Result<Option<Value>> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(error) => return Err(KeepError::Io(error)),
    };
    toml::from_str(&content)
        .map(Some)
        .map_err(|e| KeepError::ConfigParse(format!("{}: {}", path.display(), e)))
}

/// Tables merge key by key; any other value in `top` replaces `base`.
fn overlay(base: Value, top: Value) -> Value {
    match (base, top) {
        (Value::Table(mut base), Value::Table(top)) => {
            for (key, value) in top {
                let merged = match base.remove(&key) {
                    Some(existing) => overlay(existing, value),
                    None => value,
                };
                base.insert(key, merged);
            }
            Value::Table(base)
        }
        (_, top) => top,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_returns_none_when_no_layer_exists() {
        let dir = TempDir::new().expect("temp dir should be created");
        let missing_global = dir.path().join("absent/config.toml");
        let cfg = load_config_with_global(dir.path(), Some(&missing_global))
            .expect("load should not fail");
        assert!(cfg.is_none());
    }

    #[test]
    fn global_config_applies_without_repo_file() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");
        fs::write(&global_path, "[report]\ntop = 7\n").expect("global config should write");

        let cfg = load_config_with_global(root.path(), Some(&global_path))
            .expect("load should succeed")
            .expect("global layer should produce a config");
        assert_eq!(cfg.top(), 7);
    }

    #[test]
    fn local_override_applies_without_repo_file() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::create_dir_all(root.path().join(".keep")).expect("local keep dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            "[context]\nrecent_labels = [\"api\"]\n",
        )
        .expect("local override should write");

        let cfg = load_config_with_global(root.path(), None)
            .expect("load should succeed")
            .expect("local layer should produce a config");
        assert_eq!(cfg.recent_labels(), ["api"]);
    }

    #[test]
    fn load_config_merges_global_repo_and_local_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[context]
recent_work = "GLOBAL_STATE.md"

[report]
top = 9
format = "json"
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[context]
recent_work = "notes/state.md"
recent_labels = ["auth"]

[report]
top = 3
"#,
        )
        .expect("repo config should write");

        fs::create_dir_all(root.path().join(".keep")).expect("local keep dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[report]
top = 2
"#,
        )
        .expect("local override should write");

        let cfg = load_config_with_global(root.path(), Some(&global_path))
            .expect("load should succeed")
            .expect("merged config should exist");

        assert_eq!(cfg.recent_work(), "notes/state.md");
        assert_eq!(cfg.recent_labels(), ["auth"]);
        assert_eq!(cfg.top(), 2);
        assert_eq!(
            cfg.format(),
            Some(crate::types::config::ConfiguredFormat::Json)
        );
    }

    #[test]
    fn load_config_rejects_invalid_values() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(root.path().join(DEFAULT_CONFIG_FILE), "[report]\ntop = 0\n")
            .expect("repo config should write");

        let err = load_config_with_global(root.path(), None).expect_err("top = 0 is invalid");
        assert!(matches!(err, KeepError::ConfigParse(_)));
    }

    #[test]
    fn load_config_reports_malformed_toml() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(root.path().join(DEFAULT_CONFIG_FILE), "[report\ntop = ")
            .expect("repo config should write");

        let err = load_config_with_global(root.path(), None).expect_err("parse should fail");
        assert!(err.to_string().contains("keep.toml"));
    }
}
