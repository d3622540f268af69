//! Feed error and warning types.

use std::fmt;
use std::path::PathBuf;

/// A top-level section of the feed, delimited by `*TAG count ... #TAG`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionTag {
    /// `ZA`: station groups.
    StationGroups,
    /// `ZP`: stops.
    Stops,
    /// `LL`: lines, their variants and routes.
    Lines,
}

impl SectionTag {
    /// The marker text between `*`/`#` and the count.
    pub fn marker(&self) -> &'static str {
        match self {
            SectionTag::StationGroups => "ZA",
            SectionTag::Stops => "ZP",
            SectionTag::Lines => "LL",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            SectionTag::StationGroups => "station groups",
            SectionTag::Stops => "stops",
            SectionTag::Lines => "lines",
        }
    }
}

impl fmt::Display for SectionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "*{} ({})", self.marker(), self.description())
    }
}

/// Errors that abort parsing of a feed.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// A required section is missing or has no closing marker
    #[error("section {section} not found")]
    SectionNotFound { section: SectionTag },

    /// The feed file could not be read
    #[error("failed to read feed {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Anomalies that are reported but do not stop parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedWarning {
    /// The count in a section header disagrees with the records parsed
    #[error("section {section} declares {declared} records but {parsed} were parsed")]
    RecordCountMismatch {
        section: SectionTag,
        declared: usize,
        parsed: usize,
    },

    /// A group's `*PR` block lists a different number of stops than it declares
    #[error("stop block of group {group_id} declares {declared} stops but {parsed} were parsed")]
    StopBlockCountMismatch {
        group_id: String,
        declared: usize,
        parsed: usize,
    },

    /// Route blocks could not all be paired with a line variant
    #[error("{variants} line variants declared but {sequences} route blocks found")]
    SequenceCountMismatch { variants: usize, sequences: usize },
}
