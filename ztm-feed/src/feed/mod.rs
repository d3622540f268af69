//! Parser for the fixed-format transit feed export.
//!
//! The export is one text file holding marker-delimited sections:
//!
//! - `*ZA n ... #ZA`: station groups
//! - `*ZP n ... #ZP`: stops, one `*PR n ... #PR` block per group
//! - `*LL n ... #LL`: lines, each with its variant count and one nested
//!   `*LW ... #LW` route block per variant
//!
//! Each parser locates its own section in the same in-memory text, and
//! [`ParsedFeed`] composes the results. Only a missing section is an error;
//! lines that don't look like records are skipped.

mod config;
mod error;
mod groups;
mod lines;
mod model;
mod section;
mod stations;
mod tokenize;


pub use config::FeedConfig;
pub use error::{FeedError, FeedWarning, SectionTag};
pub use groups::{parse_group_line, parse_groups};
pub use lines::{DeclaredLines, join_routes, parse_line_variants, parse_routes, split_header};
pub use model::{FeedSummary, ParsedFeed};
pub use section::{Blocks, Section, blocks, find_section};
pub use stations::{
    StopBlock, count_group_headers, first_number, parse_station_line, parse_stations,
    parse_stop_blocks,
};
pub use tokenize::{SplitPolicy, parse_stop_ref, split_fields};
