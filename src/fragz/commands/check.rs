use super::{CmdMessage, CmdResult};
use crate::config::FragzConfig;
use crate::error::Result;
use crate::model::{FragmentRef, FragmentStatus};
use crate::store::FragmentStore;

/// Reports which configured fragments a merge would pick up. Reads nothing.
pub fn run<S: FragmentStore>(store: &S, config: &FragzConfig) -> Result<CmdResult> {
    config.validate()?;

    let statuses: Vec<FragmentStatus> = FragmentRef::sequence(config.fragment_names.iter().cloned())
        .into_iter()
        .map(|fragment| FragmentStatus {
            path: store.fragment_path(&fragment.name),
            present: store.fragment_exists(&fragment.name),
            fragment,
        })
        .collect();

    let mut result = CmdResult::default();
    let missing = statuses.iter().filter(|s| !s.present).count();

    for status in statuses.iter().filter(|s| !s.present) {
        result.add_message(CmdMessage::warning(format!(
            "{}: file not found",
            status.fragment.name
        )));
    }

    if statuses.is_empty() {
        result.add_message(CmdMessage::info("No fragments configured."));
    } else if missing == 0 {
        result.add_message(CmdMessage::success(format!(
            "All {} fragments present",
            statuses.len()
        )));
    } else {
        result.add_message(CmdMessage::info(format!(
            "{} of {} fragments present",
            statuses.len() - missing,
            statuses.len()
        )));
    }

    Ok(result.with_statuses(statuses))
}
