use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// A fragment name together with its place in the configured sequence.
///
/// Names are not required to be unique; a name listed twice is a second,
/// independent reference and gets processed twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FragmentRef {
    pub position: usize,
    pub name: String,
}

impl FragmentRef {
    pub fn new(position: usize, name: impl Into<String>) -> Self {
        Self {
            position,
            name: name.into(),
        }
    }

    /// Builds the ordered references for a list of names, 1-based.
    pub fn sequence<I, N>(names: I) -> Vec<FragmentRef>
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        names
            .into_iter()
            .enumerate()
            .map(|(i, name)| FragmentRef::new(i + 1, name))
            .collect()
    }
}

impl fmt::Display for FragmentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.position, self.name)
    }
}

/// Why a configured fragment left no trace in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SkipReason {
    NotFound,
    Unreadable(String),
}

/// Presence of a fragment as seen by the store, without reading its body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FragmentStatus {
    pub fragment: FragmentRef,
    pub path: PathBuf,
    pub present: bool,
}
