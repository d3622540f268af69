//! Field splitting for the feed's line shapes.
//!
//! Records are laid out in loosely aligned columns. Columns are separated by
//! runs of whitespace, but single (and in some sections double) spaces also
//! occur inside values, so each section declares the shortest run that counts
//! as a separator.

use crate::domain::{STOP_ID_LEN, StopId, StopRef};

/// How a line is cut into fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitPolicy {
    /// Split on runs of at least `min_run` whitespace characters.
    WhitespaceRun { min_run: usize },
    /// Split on a comma (plus the whitespace after it), or on runs of at
    /// least `min_run` whitespace characters.
    CommaOrWhitespaceRun { min_run: usize },
}

impl SplitPolicy {
    /// Stop records: columns separated by 3+ spaces.
    pub const STOP_RECORD: SplitPolicy = SplitPolicy::WhitespaceRun { min_run: 3 };

    /// Group records: columns separated by commas or 2+ spaces.
    pub const GROUP_RECORD: SplitPolicy = SplitPolicy::CommaOrWhitespaceRun { min_run: 2 };

    fn min_run(&self) -> usize {
        match *self {
            SplitPolicy::WhitespaceRun { min_run }
            | SplitPolicy::CommaOrWhitespaceRun { min_run } => min_run,
        }
    }

    fn splits_on_comma(&self) -> bool {
        matches!(self, SplitPolicy::CommaOrWhitespaceRun { .. })
    }
}

/// Split a line into trimmed fields.
///
/// With `max_fields = Some(n)` at most `n` fields are produced; everything
/// after the `n - 1`th separator stays together in the last field.
///
/// # Examples
///
/// ```
/// use ztm_feed::feed::{SplitPolicy, split_fields};
///
/// let fields = split_fields("  1001   Kijowska,  04  WARSZAWA", SplitPolicy::GROUP_RECORD, None);
/// assert_eq!(fields, ["1001", "Kijowska", "04", "WARSZAWA"]);
///
/// let fields = split_fields("a   b c   d   e", SplitPolicy::STOP_RECORD, Some(3));
/// assert_eq!(fields, ["a", "b c", "d   e"]);
/// ```
pub fn split_fields(line: &str, policy: SplitPolicy, max_fields: Option<usize>) -> Vec<&str> {
    let line = line.trim();
    let mut fields = Vec::new();
    let mut field_start = 0;
    let mut pos = 0;

    while pos < line.len() {
        if max_fields.is_some_and(|max| fields.len() + 1 >= max) {
            break;
        }

        let run_end = whitespace_run_end(line, pos);
        let run_len = line[pos..run_end].chars().count();

        let separator_end = if run_len >= policy.min_run() {
            Some(run_end)
        } else if policy.splits_on_comma() && line[pos..].starts_with(',') {
            Some(whitespace_run_end(line, pos + 1))
        } else {
            None
        };

        match separator_end {
            Some(end) => {
                fields.push(line[field_start..pos].trim());
                field_start = end;
                pos = end;
            }
            None if run_end > pos => pos = run_end,
            None => pos += line[pos..].chars().next().map_or(1, char::len_utf8),
        }
    }

    fields.push(line[field_start..].trim());
    fields
}

/// Byte index just past the whitespace run starting at `start`.
fn whitespace_run_end(line: &str, start: usize) -> usize {
    line[start..]
        .char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map_or(line.len(), |(offset, _)| start + offset)
}

/// Match a route line of the shape `r <6-digit id>   <name>, --`.
///
/// The pattern may appear anywhere in the line; the first occurrence wins.
/// The name runs up to the first comma that is followed by `--`.
///
/// # Examples
///
/// ```
/// use ztm_feed::feed::parse_stop_ref;
///
/// let stop = parse_stop_ref("   r 100101   Kijowska, --  WARSZAWA").unwrap();
/// assert_eq!(stop.station_id.as_str(), "100101");
/// assert_eq!(stop.station_name, "Kijowska");
///
/// assert!(parse_stop_ref("   Kijowska 01, WARSZAWA").is_none());
/// ```
pub fn parse_stop_ref(line: &str) -> Option<StopRef> {
    line.match_indices("r ")
        .find_map(|(at, anchor)| stop_ref_after_anchor(&line[at + anchor.len()..]))
}

fn stop_ref_after_anchor(rest: &str) -> Option<StopRef> {
    let station_id = StopId::parse(rest.get(..STOP_ID_LEN)?).ok()?;

    let after_id = &rest[STOP_ID_LEN..];
    let gap = after_id.chars().next().filter(|c| c.is_whitespace())?;
    let name_area = &after_id[gap.len_utf8()..];

    let name = name_area
        .match_indices(',')
        .filter(|&(i, _)| i > 0)
        .find(|&(i, _)| name_area[i + 1..].trim_start().starts_with("--"))
        .map(|(i, _)| name_area[..i].trim())?;

    Some(StopRef {
        station_id,
        station_name: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_record_split() {
        let line = "   100101   2      Ul./Pl.: Kijowska,   Kier.: al. Zieleniecka,   Y= 52.248455   X= 21.044827   Pu=0";
        let fields = split_fields(line, SplitPolicy::STOP_RECORD, Some(7));
        assert_eq!(
            fields,
            vec![
                "100101",
                "2",
                "Ul./Pl.: Kijowska,",
                "Kier.: al. Zieleniecka,",
                "Y= 52.248455",
                "X= 21.044827",
                "Pu=0",
            ]
        );
    }

    #[test]
    fn stop_record_keeps_two_space_gaps_inside_fields() {
        let fields = split_fields("a  b   c", SplitPolicy::STOP_RECORD, None);
        assert_eq!(fields, vec!["a  b", "c"]);
    }

    #[test]
    fn max_fields_keeps_tail_together() {
        let fields = split_fields(
            "1   2   3   4   5   6   7   8   9",
            SplitPolicy::STOP_RECORD,
            Some(7),
        );
        assert_eq!(fields.len(), 7);
        assert_eq!(fields[6], "7   8   9");
    }

    #[test]
    fn group_record_split_on_commas_and_double_spaces() {
        let fields = split_fields(
            "1001   Kijowska,                         04  WARSZAWA",
            SplitPolicy::GROUP_RECORD,
            Some(4),
        );
        assert_eq!(fields, vec!["1001", "Kijowska", "04", "WARSZAWA"]);
    }

    #[test]
    fn group_record_comma_only() {
        let fields =
            split_fields("1001,Kijowska, 04,WARSZAWA", SplitPolicy::GROUP_RECORD, Some(4));
        assert_eq!(fields, vec!["1001", "Kijowska", "04", "WARSZAWA"]);
    }

    #[test]
    fn group_record_tail_keeps_separators() {
        let fields = split_fields(
            "1001, Plac Bankowy, 04, WARSZAWA, extra",
            SplitPolicy::GROUP_RECORD,
            Some(4),
        );
        assert_eq!(fields[3], "WARSZAWA, extra");
    }

    #[test]
    fn single_spaces_never_split() {
        let fields = split_fields("Dw. Wileński 01", SplitPolicy::GROUP_RECORD, None);
        assert_eq!(fields, vec!["Dw. Wileński 01"]);
    }

    #[test]
    fn tabs_count_as_whitespace() {
        let fields = split_fields("a\t\t\tb", SplitPolicy::STOP_RECORD, None);
        assert_eq!(fields, vec!["a", "b"]);
    }

    #[test]
    fn blank_line_is_one_empty_field() {
        assert_eq!(split_fields("", SplitPolicy::STOP_RECORD, None), vec![""]);
        assert_eq!(split_fields("     ", SplitPolicy::GROUP_RECORD, None), vec![""]);
    }

    #[test]
    fn non_ascii_text_is_preserved() {
        let fields = split_fields("Żerań FSO   Kier.: Łomianki", SplitPolicy::STOP_RECORD, None);
        assert_eq!(fields, vec!["Żerań FSO", "Kier.: Łomianki"]);
    }

    #[test]
    fn stop_ref_basic() {
        let stop = parse_stop_ref("            r 100101   Kijowska, --").unwrap();
        assert_eq!(stop.station_id, StopId::parse("100101").unwrap());
        assert_eq!(stop.station_name, "Kijowska");
    }

    #[test]
    fn stop_ref_name_may_contain_commas() {
        let stop = parse_stop_ref("r 700301  Al. Jerozolimskie, róg, --  WARSZAWA").unwrap();
        assert_eq!(stop.station_name, "Al. Jerozolimskie, róg");
    }

    #[test]
    fn stop_ref_allows_space_before_dashes() {
        let stop = parse_stop_ref("r 700301 Centrum,    -- 01").unwrap();
        assert_eq!(stop.station_name, "Centrum");
    }

    #[test]
    fn stop_ref_anchor_later_in_line() {
        let stop = parse_stop_ref("   kursor 123 r 100201  Park Praski, --").unwrap();
        assert_eq!(stop.station_id.as_str(), "100201");
        assert_eq!(stop.station_name, "Park Praski");
    }

    #[test]
    fn stop_ref_rejects_other_shapes() {
        // No dashes after the comma
        assert!(parse_stop_ref("r 100101   Kijowska, WARSZAWA").is_none());
        // Seven digits
        assert!(parse_stop_ref("r 1001011   Kijowska, --").is_none());
        // Five digits
        assert!(parse_stop_ref("r 10010   Kijowska, --").is_none());
        // No gap after the id
        assert!(parse_stop_ref("r 100101Kijowska, --").is_none());
        // No name before the comma
        assert!(parse_stop_ref("r 100101 , --").is_none());
        // Header lines
        assert!(parse_stop_ref("*LW 12").is_none());
        assert!(parse_stop_ref("").is_none());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Field text without separators: words joined by single spaces
    fn field() -> impl Strategy<Value = String> {
        prop::collection::vec("[A-Za-z0-9.:=]{1,8}", 1..4).prop_map(|words| words.join(" "))
    }

    proptest! {
        /// Fields joined by 3+ spaces split back into the same fields
        #[test]
        fn stop_policy_recovers_fields(
            fields in prop::collection::vec(field(), 1..8),
            gap in 3usize..8,
        ) {
            let line = fields.join(&" ".repeat(gap));
            let split = split_fields(&line, SplitPolicy::STOP_RECORD, None);
            prop_assert_eq!(split, fields.iter().map(String::as_str).collect::<Vec<_>>());
        }

        /// Never more fields than requested
        #[test]
        fn respects_max_fields(
            fields in prop::collection::vec(field(), 1..12),
            max in 1usize..8,
        ) {
            let line = fields.join("   ");
            let split = split_fields(&line, SplitPolicy::STOP_RECORD, Some(max));
            prop_assert_eq!(split.len(), fields.len().min(max));
        }

        /// Splitting the same line twice gives the same fields
        #[test]
        fn deterministic(line in "[ -~]{0,60}") {
            let a = split_fields(&line, SplitPolicy::GROUP_RECORD, Some(4));
            let b = split_fields(&line, SplitPolicy::GROUP_RECORD, Some(4));
            prop_assert_eq!(a, b);
        }

        /// A well-formed route line always yields its id and name
        #[test]
        fn stop_ref_recovers_parts(
            id in "[0-9]{6}",
            name in "[A-Za-z][A-Za-z .]{0,20}[A-Za-z]",
            gap in 1usize..6,
        ) {
            let line = format!("      r {id}{}{name}, --  01", " ".repeat(gap));
            let stop = parse_stop_ref(&line).unwrap();
            prop_assert_eq!(stop.station_id.as_str(), id.as_str());
            prop_assert_eq!(stop.station_name, name);
        }
    }
}
