//! Stop (`*ZP`) records.
//!
//! A stop record starts with the 6-digit stop id. The section is laid out per
//! group: a group header line, then a `*PR n ... #PR` block holding that
//! group's stops. The section's own count is the number of group headers.
//!
//! Columns, separated by 3+ spaces:
//!
//! ```text
//! 100101   2   Ul./Pl.: Kijowska,   Kier.: al. Zieleniecka,   Y= 52.248455   X= 21.044827   Pu=0
//! id       -   street               destination               latitude       longitude      -
//! ```

use tracing::trace;

use super::groups::parse_group_line;
use super::tokenize::{SplitPolicy, split_fields};
use crate::domain::{Station, StationGroup, StopId};

/// Maximum number of columns; anything further stays in the last one.
const MAX_FIELDS: usize = 7;

/// Columns a record needs before it is usable: id, unused, street, destination.
const MIN_FIELDS: usize = 4;

const STREET_PREFIX: &str = "Ul./Pl.: ";
const DESTINATION_PREFIX: &str = "Kier.: ";

const BLOCK_OPEN: &str = "*PR";
const BLOCK_CLOSE: &str = "#PR";

/// A `*PR n ... #PR` block: the stops listed under one group header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopBlock {
    /// Id of the group header preceding the block, empty if there was none.
    pub group_id: String,
    /// The count written after `*PR`.
    pub declared: usize,
    /// Stop records found inside the block.
    pub parsed: usize,
}

/// Parse every stop record in a `*ZP` section body.
pub fn parse_stations(body: &str) -> Vec<Station> {
    body.lines()
        .filter_map(|line| {
            let station = parse_station_line(line);
            if station.is_none() {
                trace!(line, "skipping non-record line in stop section");
            }
            station
        })
        .collect()
}

/// Parse a single stop record line.
///
/// Returns `None` for lines that don't start with exactly six digits or that
/// have too few columns. Missing or non-numeric coordinates are `None`.
pub fn parse_station_line(line: &str) -> Option<Station> {
    let line = line.trim();
    let id = StopId::parse_prefix(line)?;

    let fields = split_fields(line, SplitPolicy::STOP_RECORD, Some(MAX_FIELDS));
    if fields.len() < MIN_FIELDS {
        return None;
    }

    let street = strip_label(fields[2], STREET_PREFIX);
    let destination = strip_label(fields[3], DESTINATION_PREFIX);
    let y = fields.get(4).and_then(|f| first_number(f));
    let x = fields.get(5).and_then(|f| first_number(f));

    Some(Station::new(id, street, destination, y, x))
}

/// Number of group header lines in a `*ZP` section body.
pub fn count_group_headers(body: &str) -> usize {
    body.lines().filter_map(group_header).count()
}

/// Every `*PR` block of a `*ZP` section body, in document order.
///
/// A block without a count after its marker is not reported. An unclosed
/// block ends where the next one opens.
pub fn parse_stop_blocks(body: &str) -> Vec<StopBlock> {
    let mut blocks = Vec::new();
    let mut group_id = String::new();
    let mut open: Option<StopBlock> = None;

    for line in body.lines() {
        let trimmed = line.trim();
        if let Some(count) = trimmed.strip_prefix(BLOCK_OPEN) {
            blocks.extend(open.take());
            open = count.trim().parse().ok().map(|declared| StopBlock {
                group_id: group_id.clone(),
                declared,
                parsed: 0,
            });
        } else if trimmed.starts_with(BLOCK_CLOSE) {
            blocks.extend(open.take());
        } else if let Some(block) = open.as_mut() {
            if parse_station_line(trimmed).is_some() {
                block.parsed += 1;
            }
        } else if let Some(group) = group_header(trimmed) {
            group_id = group.id;
        }
    }

    blocks.extend(open);
    blocks
}

/// A line of the stop section that introduces a group.
fn group_header(line: &str) -> Option<StationGroup> {
    let line = line.trim();
    if line.starts_with(['*', '#']) || StopId::parse_prefix(line).is_some() {
        return None;
    }
    parse_group_line(line)
}

fn strip_label<'a>(field: &'a str, label: &str) -> &'a str {
    field.strip_prefix(label).unwrap_or(field).trim()
}

/// The first number in `text`: digits, optionally followed by a decimal
/// point and more digits.
///
/// ```
/// use ztm_feed::feed::first_number;
///
/// assert_eq!(first_number("Y= 52.248455"), Some(52.248455));
/// assert_eq!(first_number("52.1234 N"), Some(52.1234));
/// assert_eq!(first_number("Y= yy.yyyyyy"), None);
/// ```
pub fn first_number(text: &str) -> Option<f64> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let rest = &text[start..];

    let integer_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    let mut len = integer_len;
    if rest[integer_len..].starts_with('.') {
        len += 1 + rest[integer_len + 1..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
    }

    rest[..len].parse().ok()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn record() -> impl Strategy<Value = String> {
        (
            "[0-9]{6}",
            "[A-Za-z.]{1,12}( [A-Za-z.]{1,8})?",
            "[A-Za-z.]{1,12}",
            50.0f64..55.0,
            19.0f64..23.0,
        )
            .prop_map(|(id, street, destination, y, x)| {
                format!(
                    "   {id}   2   Ul./Pl.: {street}   Kier.: {destination}   Y= {y:.6}   X= {x:.6}   Pu=0"
                )
            })
    }

    proptest! {
        /// Parsing the same section twice yields identical records
        #[test]
        fn idempotent(lines in prop::collection::vec(record(), 0..10)) {
            let body = lines.join("\n");
            prop_assert_eq!(parse_stations(&body), parse_stations(&body));
            prop_assert_eq!(parse_stations(&body).len(), lines.len());
        }

        /// The group id is always the stop id minus its last two characters
        #[test]
        fn group_id_derivation(line in record()) {
            let station = parse_station_line(&line).unwrap();
            let id = station.id.to_string();
            prop_assert_eq!(station.group_id.as_str(), &id[..id.len() - 2]);
        }
    }
}
