use colored::Colorize;
use fragz::api::{CmdMessage, MessageLevel};
use fragz::config::FragzConfig;
use fragz::model::FragmentStatus;
use std::io::Write;
use std::path::Path;

/// Where messages go. Warnings and errors always land on stderr.
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct MessageSink {
    pub verbose: bool,
    /// Keep stdout clean for piped document output
    pub stdout_reserved: bool,
}

pub(super) fn print_messages(messages: &[CmdMessage], sink: MessageSink) {
    for message in messages {
        let text = match message.level {
            MessageLevel::Info if !sink.verbose => continue,
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };

        let to_stderr = sink.stdout_reserved
            || matches!(message.level, MessageLevel::Warning | MessageLevel::Error);
        if to_stderr {
            eprintln!("{}", text);
        } else {
            println!("{}", text);
        }
    }
}

pub(super) fn print_document(document: &[u8]) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(document)?;
    stdout.flush()
}

pub(super) fn print_statuses(statuses: &[FragmentStatus]) {
    print!("{}", render_statuses(statuses));
}

pub(super) fn print_config(config: &FragzConfig, path: Option<&Path>) {
    print!("{}", render_config(config, path));
}

fn render_statuses(statuses: &[FragmentStatus]) -> String {
    let mut output = String::new();
    for status in statuses {
        let state = if status.present { "ok" } else { "missing" };
        output.push_str(&format!(
            "{:>3}. {:<8} {}\n",
            status.fragment.position,
            state,
            status.path.display()
        ));
    }
    output
}

fn render_config(config: &FragzConfig, path: Option<&Path>) -> String {
    let mut output = String::new();
    if let Some(path) = path {
        output.push_str(&format!("# {}\n", path.display()));
    }
    output.push_str(&format!("output_path = {}\n", config.output_path));
    output.push_str("fragment_names =\n");
    for (i, name) in config.fragment_names.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, name));
    }
    output.push_str("header_block =\n");
    for line in config.header_block.lines() {
        output.push_str(&format!("  | {}\n", line));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use fragz::model::FragmentRef;
    use std::path::PathBuf;

    #[test]
    fn test_render_statuses() {
        let statuses = vec![
            FragmentStatus {
                fragment: FragmentRef::new(1, "a.mmd"),
                path: PathBuf::from("d/a.mmd"),
                present: true,
            },
            FragmentStatus {
                fragment: FragmentRef::new(2, "b.mmd"),
                path: PathBuf::from("d/b.mmd"),
                present: false,
            },
        ];

        assert_eq!(
            render_statuses(&statuses),
            "  1. ok       d/a.mmd\n  2. missing  d/b.mmd\n"
        );
    }

    #[test]
    fn test_render_config() {
        let config = FragzConfig {
            fragment_names: vec!["a.mmd".into()],
            header_block: "classDiagram\n".into(),
            ..FragzConfig::default()
        };

        let rendered = render_config(&config, Some(Path::new("fragz.json")));
        assert_eq!(
            rendered,
            "# fragz.json\noutput_path = diagram.mmd\nfragment_names =\n  1. a.mmd\nheader_block =\n  | classDiagram\n"
        );
    }
}
