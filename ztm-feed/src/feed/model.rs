//! The parsed feed and its derived views.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use encoding_rs::WINDOWS_1250;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::config::FeedConfig;
use super::error::{FeedError, FeedWarning, SectionTag};
use super::groups::parse_groups;
use super::lines::{join_routes, parse_line_variants, parse_routes};
use super::section::Section;
use super::stations::{count_group_headers, parse_stations, parse_stop_blocks};
use crate::domain::{
    Station, StationGroup, StopId, StopSequence, TransitMode, TransportLine, VariantKey,
};

/// A fully parsed feed.
///
/// Built once from the whole text and read-only afterwards.
#[derive(Debug, Clone)]
pub struct ParsedFeed {
    groups: Vec<StationGroup>,
    stations: Vec<Station>,
    lines: Vec<TransportLine>,
    sequences: Vec<StopSequence>,
    warnings: Vec<FeedWarning>,

    group_index: HashMap<String, usize>,
    station_index: HashMap<StopId, usize>,
    sequence_index: HashMap<VariantKey, usize>,
}

/// Record counts of a parsed feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedSummary {
    pub groups: usize,
    pub stops: usize,
    pub stops_with_coordinates: usize,
    pub line_variants: usize,
    pub sequences: usize,
    pub edges: usize,
    /// Line variants per mode, keyed by mode name.
    pub modes: BTreeMap<String, usize>,
    pub warnings: usize,
}

impl ParsedFeed {
    /// Parse a feed with the default configuration.
    pub fn parse(text: &str) -> Result<Self, FeedError> {
        Self::parse_with_config(text, &FeedConfig::default())
    }

    /// Parse a feed.
    ///
    /// Fails only when one of the `*ZA`, `*ZP` or `*LL` sections is missing.
    /// Lines that don't parse as records are skipped.
    pub fn parse_with_config(text: &str, config: &FeedConfig) -> Result<Self, FeedError> {
        let group_section = Section::extract(text, SectionTag::StationGroups)?;
        let stop_section = Section::extract(text, SectionTag::Stops)?;
        let line_section = Section::extract(text, SectionTag::Lines)?;

        let groups = parse_groups(group_section.body);
        debug!(
            groups = groups.len(),
            declared = group_section.declared_count,
            "parsed station groups"
        );

        let stations = parse_stations(stop_section.body);
        let group_headers = count_group_headers(stop_section.body);
        debug!(
            stops = stations.len(),
            group_headers,
            declared = stop_section.declared_count,
            "parsed stops"
        );

        let declared = parse_line_variants(line_section.body);
        let routes = parse_routes(line_section.body);
        debug!(
            headers = declared.headers,
            variants = declared.variants.len(),
            routes = routes.len(),
            declared = line_section.declared_count,
            "parsed lines"
        );

        let mut warnings = Vec::new();
        if config.verify_record_counts {
            let counts = [
                (&group_section, groups.len()),
                (&stop_section, group_headers),
                (&line_section, declared.headers),
            ];
            warnings.extend(counts.into_iter().filter_map(|(section, parsed)| {
                (section.declared_count != parsed).then_some(FeedWarning::RecordCountMismatch {
                    section: section.tag,
                    declared: section.declared_count,
                    parsed,
                })
            }));

            warnings.extend(
                parse_stop_blocks(stop_section.body)
                    .into_iter()
                    .filter(|block| block.declared != block.parsed)
                    .map(|block| FeedWarning::StopBlockCountMismatch {
                        group_id: block.group_id,
                        declared: block.declared,
                        parsed: block.parsed,
                    }),
            );
        }

        let (sequences, join_warning) =
            join_routes(&declared.variants, routes, config.join_sequences);
        warnings.extend(join_warning);

        for warning in &warnings {
            warn!(%warning, "feed anomaly");
        }

        Ok(Self::from_parts(groups, stations, declared.variants, sequences, warnings))
    }

    /// Read and parse a feed file with the default configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FeedError> {
        Self::load_with_config(path, &FeedConfig::default())
    }

    /// Read and parse a feed file.
    ///
    /// UTF-8 files are read as is. Anything else is taken to be Windows-1250,
    /// the code page the exports are published in.
    pub fn load_with_config(
        path: impl AsRef<Path>,
        config: &FeedConfig,
    ) -> Result<Self, FeedError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| FeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let text = decode_feed(&bytes);

        let feed = Self::parse_with_config(&text, config)?;
        info!(
            path = %path.display(),
            groups = feed.groups.len(),
            stops = feed.stations.len(),
            variants = feed.lines.len(),
            "loaded feed"
        );
        Ok(feed)
    }

    fn from_parts(
        groups: Vec<StationGroup>,
        stations: Vec<Station>,
        lines: Vec<TransportLine>,
        sequences: Vec<StopSequence>,
        warnings: Vec<FeedWarning>,
    ) -> Self {
        // First occurrence wins for repeated ids.
        let mut group_index = HashMap::new();
        for (i, group) in groups.iter().enumerate() {
            group_index.entry(group.id.clone()).or_insert(i);
        }
        let mut station_index = HashMap::new();
        for (i, station) in stations.iter().enumerate() {
            station_index.entry(station.id).or_insert(i);
        }
        let mut sequence_index = HashMap::new();
        for (i, sequence) in sequences.iter().enumerate() {
            if let Some(key) = &sequence.key {
                sequence_index.entry(key.clone()).or_insert(i);
            }
        }

        Self {
            groups,
            stations,
            lines,
            sequences,
            warnings,
            group_index,
            station_index,
            sequence_index,
        }
    }

    pub fn groups(&self) -> &[StationGroup] {
        &self.groups
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Line variants in declaration order.
    pub fn lines(&self) -> &[TransportLine] {
        &self.lines
    }

    /// Route stop sequences in document order.
    pub fn sequences(&self) -> &[StopSequence] {
        &self.sequences
    }

    /// Non-fatal anomalies found while parsing.
    pub fn warnings(&self) -> &[FeedWarning] {
        &self.warnings
    }

    pub fn group(&self, id: &str) -> Option<&StationGroup> {
        self.group_index.get(id).map(|&i| &self.groups[i])
    }

    pub fn station(&self, id: &StopId) -> Option<&Station> {
        self.station_index.get(id).map(|&i| &self.stations[i])
    }

    /// The group a stop belongs to, if the feed lists it.
    pub fn group_of(&self, station: &Station) -> Option<&StationGroup> {
        self.group(&station.group_id)
    }

    /// Stops of a group, in feed order.
    pub fn stations_in_group<'a>(
        &'a self,
        group_id: &'a str,
    ) -> impl Iterator<Item = &'a Station> + 'a {
        self.stations.iter().filter(move |s| s.group_id == group_id)
    }

    /// The route attached to a line variant.
    pub fn sequence_for(&self, key: &VariantKey) -> Option<&StopSequence> {
        self.sequence_index.get(key).map(|&i| &self.sequences[i])
    }

    pub fn lines_with_mode(&self, mode: TransitMode) -> impl Iterator<Item = &TransportLine> + '_ {
        self.lines.iter().filter(move |l| l.mode == mode)
    }

    /// Every stop id, in stop-table order.
    pub fn nodes(&self) -> Vec<StopId> {
        self.stations.iter().map(|s| s.id).collect()
    }

    /// Stop id to `(x, y)`, for stops with both coordinates.
    pub fn coordinates(&self) -> HashMap<StopId, (f64, f64)> {
        self.stations
            .iter()
            .filter_map(|s| Some((s.id, s.coordinates()?)))
            .collect()
    }

    /// Consecutive stop pairs of every route, in travel order.
    ///
    /// Routes sharing a segment each contribute it, so duplicates are kept.
    pub fn edges(&self) -> Vec<(StopId, StopId)> {
        self.sequences.iter().flat_map(|s| s.hops()).collect()
    }

    pub fn summary(&self) -> FeedSummary {
        let modes = TransitMode::ALL
            .iter()
            .map(|&mode| (mode.to_string(), self.lines_with_mode(mode).count()))
            .collect();

        FeedSummary {
            groups: self.groups.len(),
            stops: self.stations.len(),
            stops_with_coordinates: self
                .stations
                .iter()
                .filter(|s| s.coordinates().is_some())
                .count(),
            line_variants: self.lines.len(),
            sequences: self.sequences.len(),
            edges: self.sequences.iter().map(|s| s.hops().count()).sum(),
            modes,
            warnings: self.warnings.len(),
        }
    }
}

fn decode_feed(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => {
            debug!("feed is not UTF-8, decoding as Windows-1250");
            WINDOWS_1250.decode_without_bom_handling(bytes).0
        }
    }
}
