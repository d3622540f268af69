//! Station group (`*ZA`) records.

use tracing::trace;

use super::tokenize::{SplitPolicy, split_fields};
use crate::domain::StationGroup;

/// Fields a group record must have: id, name, city code, city name.
const GROUP_FIELDS: usize = 4;

/// Parse every group record in a `*ZA` section body.
///
/// Lines with fewer than four fields are not records and are skipped.
pub fn parse_groups(body: &str) -> Vec<StationGroup> {
    body.lines()
        .filter_map(|line| {
            let group = parse_group_line(line);
            if group.is_none() {
                trace!(line, "skipping non-record line in group section");
            }
            group
        })
        .collect()
}

/// Parse a single group record line.
pub fn parse_group_line(line: &str) -> Option<StationGroup> {
    let fields = split_fields(line, SplitPolicy::GROUP_RECORD, Some(GROUP_FIELDS));
    let [id, name, city_code, city_name] = fields.as_slice() else {
        return None;
    };
    Some(StationGroup {
        id: id.to_string(),
        name: name.to_string(),
        city_code: city_code.to_string(),
        city_name: city_name.to_string(),
    })
}
