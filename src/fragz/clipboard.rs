use crate::error::{FragzError, Result};
use std::io::Write;
use std::process::{Command, Stdio};

/// Destination for the merged document once it has been written.
pub trait Clipboard {
    fn set_contents(&mut self, bytes: &[u8]) -> Result<()>;
}

/// The platform clipboard, driven through the usual copy utilities.
/// - macOS: pbcopy
/// - Linux: wl-copy under Wayland, otherwise xclip or xsel
/// - Windows: clip.exe
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_contents(&mut self, bytes: &[u8]) -> Result<()> {
        copy_to_clipboard(bytes)
    }
}

pub fn copy_to_clipboard(bytes: &[u8]) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        pipe_to("pbcopy", &[], bytes)
    }

    #[cfg(target_os = "linux")]
    {
        copy_linux(bytes)
    }

    #[cfg(target_os = "windows")]
    {
        pipe_to("clip", &[], bytes)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        let _ = bytes;
        Err(FragzError::Clipboard(
            "Clipboard not supported on this platform".to_string(),
        ))
    }
}

#[cfg(target_os = "linux")]
fn copy_linux(bytes: &[u8]) -> Result<()> {
    if std::env::var_os("WAYLAND_DISPLAY").is_some() {
        if let Ok(()) = pipe_to("wl-copy", &[], bytes) {
            return Ok(());
        }
    }

    // Try xclip first, then xsel
    pipe_to("xclip", &["-selection", "clipboard"], bytes).or_else(|_| {
        pipe_to("xsel", &["--clipboard", "--input"], bytes).map_err(|e| {
            FragzError::Clipboard(format!("{}. Install xclip, xsel or wl-clipboard.", e))
        })
    })
}

#[cfg_attr(
    not(any(target_os = "macos", target_os = "linux", target_os = "windows")),
    allow(dead_code)
)]
fn pipe_to(program: &str, args: &[&str], bytes: &[u8]) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| FragzError::Clipboard(format!("Failed to spawn {}: {}", program, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(bytes)
            .map_err(|e| FragzError::Clipboard(format!("Failed to write to {}: {}", program, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| FragzError::Clipboard(format!("Failed to wait for {}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(FragzError::Clipboard(format!(
            "{} exited with {}",
            program, status
        )))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// Keeps every payload it is handed.
    #[derive(Debug, Default)]
    pub struct RecordingClipboard {
        pub copies: Vec<Vec<u8>>,
    }

    impl Clipboard for RecordingClipboard {
        fn set_contents(&mut self, bytes: &[u8]) -> Result<()> {
            self.copies.push(bytes.to_vec());
            Ok(())
        }
    }

    /// Always fails, like a headless box without any clipboard utility.
    #[derive(Debug, Default)]
    pub struct FailingClipboard {
        pub attempts: usize,
    }

    impl Clipboard for FailingClipboard {
        fn set_contents(&mut self, _bytes: &[u8]) -> Result<()> {
            self.attempts += 1;
            Err(FragzError::Clipboard("no clipboard available".to_string()))
        }
    }
}
