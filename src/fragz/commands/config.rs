use super::{CmdMessage, CmdResult};
use crate::config::FragzConfig;
use crate::error::{FragzError, Result};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    /// Report the effective configuration
    Show(FragzConfig),
    /// Write a starter config file
    Init { force: bool },
}

pub fn run(root: &Path, action: ConfigAction) -> Result<CmdResult> {
    let config_path = FragzConfig::path_in(root);

    match action {
        ConfigAction::Show(config) => {
            let mut result = CmdResult::default();
            if !config_path.exists() {
                result.add_message(CmdMessage::info(format!(
                    "No {} found, using defaults",
                    config_path.display()
                )));
            }
            Ok(result.with_config(config).with_config_path(config_path))
        }
        ConfigAction::Init { force } => {
            if config_path.exists() && !force {
                return Err(FragzError::Config(format!(
                    "{} already exists (use --force to overwrite)",
                    config_path.display()
                )));
            }

            let config = FragzConfig::default();
            let written = config.save(root)?;
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::success(format!(
                "Wrote {}",
                written.display()
            )));
            Ok(result.with_config(config).with_config_path(written))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_init_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();

        let result = run(dir.path(), ConfigAction::Init { force: false }).unwrap();

        assert_eq!(result.config, Some(FragzConfig::default()));
        assert_eq!(
            FragzConfig::load(dir.path()).unwrap(),
            FragzConfig::default()
        );
        assert!(result.messages[0].content.starts_with("Wrote "));
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = FragzConfig::path_in(dir.path());
        fs::write(&path, r#"{ "fragment_names": ["keep.mmd"] }"#).unwrap();

        let err = run(dir.path(), ConfigAction::Init { force: false }).unwrap_err();
        assert!(err.to_string().contains("--force"));
        assert!(fs::read_to_string(&path).unwrap().contains("keep.mmd"));

        run(dir.path(), ConfigAction::Init { force: true }).unwrap();
        assert!(FragzConfig::load(dir.path())
            .unwrap()
            .fragment_names
            .is_empty());
    }

    #[test]
    fn test_show_without_file_notes_defaults() {
        let dir = tempfile::tempdir().unwrap();

        let result = run(dir.path(), ConfigAction::Show(FragzConfig::default())).unwrap();

        assert_eq!(result.config_path, Some(FragzConfig::path_in(dir.path())));
        assert!(result.messages[0].content.contains("using defaults"));
    }

    #[test]
    fn test_show_with_file_is_quiet() {
        let dir = tempfile::tempdir().unwrap();
        FragzConfig::default().save(dir.path()).unwrap();

        let result = run(dir.path(), ConfigAction::Show(FragzConfig::default())).unwrap();
        assert!(result.messages.is_empty());
    }
}
