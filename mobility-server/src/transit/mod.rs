//! Transit line network and itinerary matching.
//!
//! Finds which line serves a pair of stations. Matching is deterministic:
//! a station matches only by exact (case-insensitive) name against the
//! line's station list. When no single line covers both endpoints the
//! lookup reports [`NoRouteFound`] rather than inventing an itinerary;
//! transfer planning is out of scope for this network model.

use serde::Serialize;
use tracing::trace;

use crate::domain::TransitMode;

/// Error returned when no single line serves both endpoints.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no direct transit line between {origin} and {destination}")]
pub struct NoRouteFound {
    pub origin: String,
    pub destination: String,
}

/// An ordered sequence of stations served by one transit line.
#[derive(Debug, Clone)]
pub struct TransitLine {
    name: String,
    mode: TransitMode,
    stations: Vec<String>,
}

impl TransitLine {
    /// Create a line from its name, sub-mode and ordered station list.
    pub fn new(name: impl Into<String>, mode: TransitMode, stations: &[&str]) -> Self {
        Self {
            name: name.into(),
            mode,
            stations: stations.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// The line's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The sub-mode operating this line.
    pub fn mode(&self) -> TransitMode {
        self.mode
    }

    /// The stations in line order.
    pub fn stations(&self) -> &[String] {
        &self.stations
    }

    /// Index of a station on this line, matching by exact name
    /// (case-insensitive).
    fn station_index(&self, name: &str) -> Option<usize> {
        self.stations.iter().position(|s| s.eq_ignore_ascii_case(name))
    }
}

/// A matched itinerary on a single line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineMatch {
    /// Line display name.
    pub line: String,

    /// Sub-mode operating the line.
    pub mode: TransitMode,

    /// Station to board at.
    pub board: String,

    /// Station to alight at.
    pub alight: String,

    /// Stations travelled through, board and alight inclusive, in
    /// travel order.
    pub stations: Vec<String>,
}

/// Immutable set of transit lines.
///
/// Built once at startup and shared read-only.
#[derive(Debug, Clone, Default)]
pub struct TransitNetwork {
    lines: Vec<TransitLine>,
}

impl TransitNetwork {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line to the network.
    pub fn add_line(&mut self, line: TransitLine) {
        self.lines.push(line);
    }

    /// The lines in registration order.
    pub fn lines(&self) -> &[TransitLine] {
        &self.lines
    }

    /// Find a single line serving both stations.
    ///
    /// Lines are tried in registration order and the first line that
    /// contains both endpoints wins, so results are stable for a given
    /// network. Travelling against line order reverses the returned
    /// station sequence.
    pub fn find_direct_line(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<LineMatch, NoRouteFound> {
        for line in &self.lines {
            let (Some(from_idx), Some(to_idx)) =
                (line.station_index(origin), line.station_index(destination))
            else {
                continue;
            };

            let stations: Vec<String> = if from_idx <= to_idx {
                line.stations[from_idx..=to_idx].to_vec()
            } else {
                line.stations[to_idx..=from_idx]
                    .iter()
                    .rev()
                    .cloned()
                    .collect()
            };

            trace!(line = %line.name, origin, destination, "matched direct line");

            return Ok(LineMatch {
                line: line.name.clone(),
                mode: line.mode,
                board: stations[0].clone(),
                alight: stations[stations.len() - 1].clone(),
                stations,
            });
        }

        Err(NoRouteFound {
            origin: origin.to_string(),
            destination: destination.to_string(),
        })
    }
}

/// The reference Quito network: Metro Línea 1, Trolebús and Ecovía.
pub fn quito_network() -> TransitNetwork {
    let mut network = TransitNetwork::new();

    network.add_line(TransitLine::new(
        "Metro Línea 1",
        TransitMode::Metro,
        &[
            "El Labrador",
            "La Carolina",
            "Universidad Central",
            "Centro Histórico",
            "El Recreo",
            "Quitumbe",
        ],
    ));
    network.add_line(TransitLine::new(
        "Trolebús",
        TransitMode::Trolley,
        &[
            "La Y",
            "La Carolina",
            "Centro Histórico",
            "El Recreo",
            "Terminal Terrestre",
        ],
    ));
    network.add_line(TransitLine::new(
        "Ecovía",
        TransitMode::Busway,
        &[
            "Terminal Terrestre",
            "Centro Histórico",
            "La Mariscal",
            "Plaza Foch",
        ],
    ));

    network
}
