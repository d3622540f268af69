//! Marker-delimited sections.
//!
//! A section starts with `*TAG <count>` and ends at the next `#TAG`. The same
//! shape nests: the `*LL` section holds one `*LW ... #LW` block per route.

use super::error::{FeedError, SectionTag};

/// A located top-level section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section<'a> {
    pub tag: SectionTag,
    /// The count written after the opening marker.
    pub declared_count: usize,
    /// Text between the count and the closing marker, trimmed.
    pub body: &'a str,
}

impl<'a> Section<'a> {
    /// Locate the section for `tag` in `text`.
    pub fn extract(text: &'a str, tag: SectionTag) -> Result<Self, FeedError> {
        let (declared_count, body) = find_section(text, tag.marker(), tag.marker())
            .ok_or(FeedError::SectionNotFound { section: tag })?;
        Ok(Section {
            tag,
            declared_count,
            body,
        })
    }
}

/// Find the first `*<start_tag> <digits>` followed by `#<end_tag>`.
///
/// Returns the declared count and the trimmed text in between. An opening
/// marker without a count is passed over; the search continues with the next
/// one.
pub fn find_section<'a>(text: &'a str, start_tag: &str, end_tag: &str) -> Option<(usize, &'a str)> {
    let open = format!("*{start_tag} ");
    let close = format!("#{end_tag}");

    let mut from = 0;
    while let Some(offset) = text[from..].find(&open) {
        let marker_at = from + offset;
        let count_start = marker_at + open.len();
        from = marker_at + 1;

        let digits = text[count_start..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        if digits == 0 {
            continue;
        }
        let count_end = count_start + digits;
        let Ok(count) = text[count_start..count_end].parse::<usize>() else {
            continue;
        };

        // Without a closing marker here there is none after a later opener either.
        let body_len = text[count_end..].find(&close)?;
        return Some((count, text[count_end..count_end + body_len].trim()));
    }
    None
}

/// Non-overlapping `*<tag> ... #<tag>` blocks of `text`, in document order.
///
/// Each item is the raw text between the markers, count included.
pub fn blocks<'a>(text: &'a str, tag: &str) -> Blocks<'a> {
    Blocks {
        rest: text,
        open: format!("*{tag}"),
        close: format!("#{tag}"),
    }
}

/// Iterator returned by [`blocks`].
#[derive(Debug, Clone)]
pub struct Blocks<'a> {
    rest: &'a str,
    open: String,
    close: String,
}

impl<'a> Iterator for Blocks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let body_start = self.rest.find(&self.open)? + self.open.len();
        let after_open = &self.rest[body_start..];
        let body_len = match after_open.find(&self.close) {
            Some(len) => len,
            None => {
                self.rest = "";
                return None;
            }
        };
        self.rest = &after_open[body_len + self.close.len()..];
        Some(&after_open[..body_len])
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The body never includes the markers and is always trimmed
        #[test]
        fn body_excludes_markers(count in 0usize..10_000, body in "[a-zA-Z0-9 ,.\n]{0,80}") {
            let text = format!("header\n*ZA {count}\n{body}\n#ZA\ntrailer");
            let (declared, found) = find_section(&text, "ZA", "ZA").unwrap();
            prop_assert_eq!(declared, count);
            prop_assert_eq!(found, body.trim());
        }

        /// Every well-formed block is found, in order
        #[test]
        fn all_blocks_found(bodies in prop::collection::vec("[a-z0-9 \n]{0,20}", 0..8)) {
            let text: String = bodies.iter().map(|b| format!("*LW{b}#LW\n")).collect();
            let found: Vec<_> = blocks(&text, "LW").collect();
            prop_assert_eq!(found.len(), bodies.len());
            for (found, body) in found.iter().zip(&bodies) {
                prop_assert_eq!(*found, body.as_str());
            }
        }
    }
}
