use std::path::Path;

use anyhow::{anyhow, Context, Result};
use csv::ReaderBuilder;
use fnv::FnvHashMap;

use crate::{geo, transit};

/// Anchorage id of the first harbor entrance.
pub const PORT_1_ANCHORAGE: u32 = 9001;
/// Anchorage id of the second harbor entrance.
pub const PORT_2_ANCHORAGE: u32 = 9002;

const PORT_1_LATLNG: (f64, f64) = (22.616677, 120.265942);
const PORT_2_LATLNG: (f64, f64) = (22.552638, 120.316716);

/// Pier id to `(lat, lng)` lookup.
///
/// The two entrance anchorages resolve even on an empty table; everything
/// else comes from a loaded CSV.
#[derive(Debug, Default)]
pub struct PierTable {
    coords: FnvHashMap<u32, (f64, f64)>,
}

impl PierTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load pier coordinates from a CSV with an `id,lat,lng` header row.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)
            .with_context(|| format!("opening pier table {}", path.display()))?;

        let mut coords = FnvHashMap::default();
        for result in rdr.records() {
            let record = result?;
            let field = |i: usize| {
                record
                    .get(i)
                    .with_context(|| format!("row {:?} has too few fields", record))
            };
            let raw_id = field(0)?;
            let id: u32 = raw_id
                .parse()
                .with_context(|| format!("bad pier id {:?}", raw_id))?;
            let lat: f64 = field(1)?
                .parse()
                .with_context(|| format!("bad latitude for pier {}", id))?;
            let lng: f64 = field(2)?
                .parse()
                .with_context(|| format!("bad longitude for pier {}", id))?;
            coords.insert(id, (lat, lng));
        }

        Ok(Self { coords })
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Coordinates of a pier, `(lat, lng)` in degrees.
    pub fn latlng(&self, pier: u32) -> Result<(f64, f64)> {
        match pier {
            PORT_1_ANCHORAGE => Ok(PORT_1_LATLNG),
            PORT_2_ANCHORAGE => Ok(PORT_2_LATLNG),
            _ => self
                .coords
                .get(&pier)
                .copied()
                .ok_or_else(|| anyhow!("unknown pier {}", pier)),
        }
    }

    /// Distance in kilometers from a `(lat, lng)` position to a pier.
    pub fn distance_to_pier(&self, from: (f64, f64), pier: u32) -> Result<f64> {
        let dest = self.latlng(pier)?;
        Ok(geo::great_circle_distance_km(from.1, from.0, dest.1, dest.0))
    }

    /// Travel time in hours from a `(lat, lng)` position to a pier at
    /// `speed_knots`.
    pub fn time_to_pier(&self, from: (f64, f64), pier: u32, speed_knots: f64) -> Result<f64> {
        let dist = self.distance_to_pier(from, pier)?;
        Ok(transit::travel_time_hours(dist, speed_knots))
    }
}

/// Tug station closest to a pier. Piers with no listed station fall back
/// to station 1001.
pub fn tug_station(pier: u32) -> u32 {
    match pier {
        1501..=1513 | 1814 => 1047,
        1801 | 1802 | 1813 => 1046,
        1803 | 1804 => 1057,
        1805..=1807 | 1809 | 1821 => 1060,
        1816 => 1063,
        1817..=1819 => 1056,
        1823 => 1061,
        1825 => 1043,
        1829 => 1036,
        1808..=1899 => 1033,
        4020 | 4021 => 1001,
        4022 => 1002,
        4023 => 1003,
        4024 => 1004,
        4025 => 1006,
        4031 => 1035,
        4032 => 1033,
        4033 => 1032,
        4044 => 1044,
        4045 => 1045,
        4046 => 1046,
        4050 => 1048,
        4051 => 1049,
        4052 => 1050,
        4053 => 1051,
        4054 => 1052,
        4061 => 1062,
        4062 => 1064,
        4081 => 1109,
        4082 => 1108,
        8801 => 1086,
        8804 => 1089,
        8807 => 1119,
        8861 => 1085,
        _ => 1001,
    }
}
