//! # Merging Fragments
//!
//! A merge run produces one document from the configured fragments:
//!
//! ```text
//! <header block>
//! <lines 2..N of fragment 1>
//! <blank line>
//! <lines 2..N of fragment 2>
//! <blank line>
//! ...
//! ```
//!
//! The first line of every fragment is its own header and is dropped. This is
//! unconditional: a fragment without such a line loses its first line of real
//! content.
//!
//! Fragments the store reports as missing or unreadable are skipped with a
//! diagnostic and leave no trace in the document. The relative order of the
//! remaining fragments is the configured order. A zero-byte fragment
//! contributes nothing, not even its separator.
//!
//! Only a failed output write aborts the run. The skip notices gathered so far
//! travel with that error as [`FragzError::Interrupted`].
//!
//! Content is handled as bytes. Lines are split on `\n` only, so `\r\n` files
//! keep their carriage returns.

use super::{CmdMessage, CmdResult};
use crate::clipboard::Clipboard;
use crate::config::FragzConfig;
use crate::error::{FragzError, Result};
use crate::model::{FragmentRef, SkipReason};
use crate::store::FragmentStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeOptions {
    pub copy_to_clipboard: bool,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            copy_to_clipboard: true,
        }
    }
}

/// The document plus what went into it. Nothing has been written yet.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Assembly {
    pub document: Vec<u8>,
    pub included: Vec<(FragmentRef, usize)>,
    pub skipped: Vec<(FragmentRef, SkipReason)>,
}

pub fn assemble<S: FragmentStore>(store: &S, config: &FragzConfig) -> Result<Assembly> {
    let mut assembly = Assembly::default();
    push_header(&mut assembly.document, &config.header_block);

    for fragment in FragmentRef::sequence(config.fragment_names.iter().cloned()) {
        let content = match store.read_fragment(&fragment.name) {
            Ok(content) => content,
            Err(FragzError::FragmentNotFound(_)) => {
                assembly.skipped.push((fragment, SkipReason::NotFound));
                continue;
            }
            Err(FragzError::FragmentRead { source, .. }) => {
                let reason = SkipReason::Unreadable(source.to_string());
                assembly.skipped.push((fragment, reason));
                continue;
            }
            Err(e) => return Err(e),
        };

        let body_lines = push_body(&mut assembly.document, &content);
        assembly.included.push((fragment, body_lines));
    }

    Ok(assembly)
}

pub fn run<S: FragmentStore, C: Clipboard>(
    store: &mut S,
    clipboard: &mut C,
    config: &FragzConfig,
    options: MergeOptions,
) -> Result<CmdResult> {
    config.validate()?;

    let Assembly {
        document,
        included,
        skipped,
    } = assemble(store, config)?;

    let mut result = CmdResult::default();
    for (fragment, reason) in &skipped {
        result.add_message(match reason {
            SkipReason::NotFound => {
                CmdMessage::warning(format!("{}: file not found, ignoring", fragment.name))
            }
            SkipReason::Unreadable(err) => CmdMessage::error(format!(
                "{}: cannot read ({}), ignoring",
                fragment.name, err
            )),
        });
    }
    for (fragment, lines) in &included {
        result.add_message(CmdMessage::info(format!("{}: {} line(s)", fragment, lines)));
    }

    let output_path = match store.write_output(&config.output_path, &document) {
        Ok(path) => path,
        Err(source) if result.messages.is_empty() => return Err(source),
        Err(source) => {
            return Err(FragzError::Interrupted {
                notices: result.messages,
                source: Box::new(source),
            })
        }
    };
    result.add_message(CmdMessage::success(format!(
        "Merged {} of {} fragments into {}",
        included.len(),
        config.fragment_names.len(),
        output_path.display()
    )));

    if options.copy_to_clipboard {
        match clipboard.set_contents(&document) {
            Ok(()) => result.add_message(CmdMessage::success("Copied to clipboard")),
            Err(e) => result.add_message(CmdMessage::warning(format!(
                "Failed to copy to clipboard: {}",
                e
            ))),
        }
    }

    result.included = included.into_iter().map(|(fragment, _)| fragment).collect();
    result.skipped = skipped.into_iter().map(|(fragment, _)| fragment).collect();
    Ok(result.with_document(document).with_output_path(output_path))
}

fn push_header(document: &mut Vec<u8>, header: &str) {
    document.extend_from_slice(header.as_bytes());
    if !header.is_empty() && !header.ends_with('\n') {
        document.push(b'\n');
    }
}

/// Appends everything after the first line, then a blank separator.
/// Returns the number of body lines written.
fn push_body(document: &mut Vec<u8>, content: &[u8]) -> usize {
    if content.is_empty() {
        return 0;
    }

    let lines = split_lines(content);
    for line in lines.iter().skip(1) {
        document.extend_from_slice(line);
        document.push(b'\n');
    }
    document.push(b'\n');
    lines.len().saturating_sub(1)
}

fn split_lines(content: &[u8]) -> Vec<&[u8]> {
    let trimmed = content.strip_suffix(&b"\n"[..]).unwrap_or(content);
    trimmed.split(|b| *b == b'\n').collect()
}
