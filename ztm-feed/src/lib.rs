//! Transit feed importer.
//!
//! Parses the text export of a city transit network (station groups, stops,
//! lines and their routes) into typed records, and exposes the stop graph
//! they describe: nodes, coordinates and directed edges.

pub mod domain;
pub mod feed;
