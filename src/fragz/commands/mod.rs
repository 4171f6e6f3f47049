use crate::config::FragzConfig;
use crate::model::{FragmentRef, FragmentStatus};
use std::path::PathBuf;

pub mod check;
pub mod config;
pub mod merge;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub document: Option<Vec<u8>>,
    pub output_path: Option<PathBuf>,
    pub included: Vec<FragmentRef>,
    pub skipped: Vec<FragmentRef>,
    pub statuses: Vec<FragmentStatus>,
    pub config: Option<FragzConfig>,
    pub config_path: Option<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_document(mut self, document: Vec<u8>) -> Self {
        self.document = Some(document);
        self
    }

    pub fn with_output_path(mut self, path: PathBuf) -> Self {
        self.output_path = Some(path);
        self
    }

    pub fn with_statuses(mut self, statuses: Vec<FragmentStatus>) -> Self {
        self.statuses = statuses;
        self
    }

    pub fn with_config(mut self, config: FragzConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    pub fn has_warnings(&self) -> bool {
        self.messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Warning | MessageLevel::Error))
    }
}
