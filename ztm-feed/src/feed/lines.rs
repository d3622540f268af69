//! Line (`*LL`) section: line variants and their routes.
//!
//! The section lists each line as a `Linia:` header followed by a line that
//! carries its variant count. Routes come as nested `*LW ... #LW` blocks, one
//! per variant, in the same order the variants are declared. Blocks carry no
//! line number of their own, so the k-th block is attached to the k-th
//! variant. This pairing is assumed, not checked against the feed; when the
//! two counts differ the surplus is kept unjoined and a warning is reported.

use tracing::trace;

use super::error::FeedWarning;
use super::section::blocks;
use super::tokenize::parse_stop_ref;
use crate::domain::{StopRef, StopSequence, TransitMode, TransportLine};

const HEADER_PREFIX: &str = "Linia:";
const ROUTE_TAG: &str = "LW";

/// Variants declared in a line section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclaredLines {
    /// Number of `Linia:` headers seen.
    pub headers: usize,
    /// One record per declared variant, in declaration order.
    pub variants: Vec<TransportLine>,
}

/// Expand every `Linia:` header into its variants.
///
/// A header whose next line has no number declares no variants. A header on
/// the last line of the section has no count line and is ignored.
pub fn parse_line_variants(body: &str) -> DeclaredLines {
    let lines: Vec<&str> = body.lines().collect();
    let mut declared = DeclaredLines::default();

    for pair in lines.windows(2) {
        let header = pair[0].trim();
        if !header.starts_with(HEADER_PREFIX) {
            continue;
        }
        declared.headers += 1;

        let count = first_integer(pair[1]).unwrap_or(0);
        let (line_number, category) = split_header(header);
        let mode = TransitMode::classify(category);
        trace!(header, count, %mode, "line header");

        declared
            .variants
            .extend((1..=count).map(|variant| TransportLine {
                line_number: line_number.to_string(),
                variant,
                mode,
                category: category.to_string(),
            }));
    }

    declared
}

/// Split `Linia: <number> - <category>` at its last dash.
///
/// Everything before the last dash is the line number (which may itself
/// contain dashes); what follows is the category label. Without a dash the
/// number is empty and the whole text is the category.
///
/// ```
/// use ztm_feed::feed::split_header;
///
/// assert_eq!(split_header("Linia: 1 - LINIA TRAMWAJOWA"), ("1", "LINIA TRAMWAJOWA"));
/// assert_eq!(split_header("Linia: Z-7 - LINIA ZASTĘPCZA"), ("Z-7", "LINIA ZASTĘPCZA"));
/// ```
pub fn split_header(header: &str) -> (&str, &str) {
    let (number, category) = header.rsplit_once('-').unwrap_or(("", header));
    let number = number.trim();
    let number = number.strip_prefix(HEADER_PREFIX).unwrap_or(number).trim();
    (number, category.trim())
}

fn first_integer(text: &str) -> Option<u32> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let digits = text[start..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    text[start..start + digits].parse().ok()
}

/// The stops of every `*LW` block, in document order.
pub fn parse_routes(body: &str) -> Vec<Vec<StopRef>> {
    blocks(body, ROUTE_TAG)
        .map(|block| block.lines().filter_map(parse_stop_ref).collect())
        .collect()
}

/// Attach routes to variants by position.
///
/// With `join` disabled every sequence keeps only its ordinal.
pub fn join_routes(
    variants: &[TransportLine],
    routes: Vec<Vec<StopRef>>,
    join: bool,
) -> (Vec<StopSequence>, Option<FeedWarning>) {
    let warning = (join && variants.len() != routes.len()).then_some(
        FeedWarning::SequenceCountMismatch {
            variants: variants.len(),
            sequences: routes.len(),
        },
    );

    let sequences = routes
        .into_iter()
        .enumerate()
        .map(|(ordinal, stops)| StopSequence {
            ordinal,
            key: if join {
                variants.get(ordinal).map(TransportLine::key)
            } else {
                None
            },
            stops,
        })
        .collect();

    (sequences, warning)
}
