//! State directory: code, name and nearest-centroid lookups
//!
//! The directory is built once from [`STATE_TABLE`] and never mutated, so a
//! single instance can be shared freely across threads.

use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;

use crate::geo::Coordinate;
use crate::states::STATE_TABLE;

/// Maximum distance in kilometers between a point and a state's centroid for
/// the point to be considered part of that state
pub const MAX_DISTANCE_KM: f64 = 500.0;

/// Process-wide directory, built on first use
pub static DIRECTORY: LazyLock<StateDirectory> = LazyLock::new(StateDirectory::new);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateRecord {
    pub code: &'static str,
    pub name: &'static str,
    pub centroid: Coordinate,
}

/// Result of a coordinate lookup
#[derive(Debug, Clone, PartialEq)]
pub struct NearestState {
    pub code: &'static str,
    pub name: &'static str,
    pub distance_km: f64,
}

#[derive(Debug)]
pub struct StateDirectory {
    records: Vec<StateRecord>,
    by_code: HashMap<&'static str, usize>,
}

impl StateDirectory {
    /// Build the directory from the embedded table.
    ///
    /// Panics if the embedded data breaks an invariant (malformed or
    /// duplicate code, duplicate name, centroid out of range).
    pub fn new() -> Self {
        let records: Vec<StateRecord> = STATE_TABLE
            .iter()
            .map(|&(code, name, latitude, longitude)| StateRecord {
                code,
                name,
                centroid: Coordinate::new(latitude, longitude),
            })
            .collect();

        let mut by_code = HashMap::with_capacity(records.len());
        for (idx, record) in records.iter().enumerate() {
            assert!(
                record.code.len() == 2 && record.code.bytes().all(|b| b.is_ascii_uppercase()),
                "malformed state code {:?}",
                record.code
            );
            assert!(
                (-90.0..=90.0).contains(&record.centroid.latitude)
                    && (-180.0..=180.0).contains(&record.centroid.longitude),
                "centroid out of range for {}",
                record.code
            );
            let previous = by_code.insert(record.code, idx);
            assert!(previous.is_none(), "duplicate state code {}", record.code);
            assert!(
                records[..idx].iter().all(|r| r.name != record.name),
                "duplicate state name {}",
                record.name
            );
        }

        Self { records, by_code }
    }

    /// Shared process-wide instance
    pub fn shared() -> &'static StateDirectory {
        &DIRECTORY
    }

    /// True if `code` is a listed state code. Case-sensitive.
    pub fn is_valid_code(&self, code: &str) -> bool {
        self.by_code.contains_key(code)
    }

    /// Code of the state whose display name is exactly `name`
    pub fn by_name(&self, name: &str) -> Option<&'static str> {
        self.records
            .iter()
            .find(|r| r.name == name)
            .map(|r| r.code)
    }

    /// Code of the state with the nearest centroid, if within
    /// [`MAX_DISTANCE_KM`]
    pub fn by_coordinate(&self, latitude: f64, longitude: f64) -> Option<&'static str> {
        self.nearest(latitude, longitude).map(|n| n.code)
    }

    /// Nearest state centroid to the point, if within [`MAX_DISTANCE_KM`].
    ///
    /// Exact ties go to whichever record comes first in table order; callers
    /// should not depend on that. Non-finite coordinates never match.
    pub fn nearest(&self, latitude: f64, longitude: f64) -> Option<NearestState> {
        let point = Coordinate::new(latitude, longitude);

        let (record, distance_km) = self
            .records
            .iter()
            .map(|r| (r, r.centroid.distance_km(&point)))
            .filter(|(_, d)| d.is_finite())
            .min_by(|(_, a), (_, b)| a.total_cmp(b))?;

        if distance_km > MAX_DISTANCE_KM {
            debug!(
                "({}, {}) is {:.1} km from nearest centroid {}, outside tolerance",
                latitude, longitude, distance_km, record.code
            );
            return None;
        }

        debug!("({}, {}) -> {} ({:.1} km)", latitude, longitude, record.code, distance_km);
        Some(NearestState {
            code: record.code,
            name: record.name,
            distance_km,
        })
    }

    pub fn get(&self, code: &str) -> Option<&StateRecord> {
        self.by_code.get(code).map(|&idx| &self.records[idx])
    }

    /// Display name for a code
    pub fn name_of(&self, code: &str) -> Option<&'static str> {
        self.get(code).map(|r| r.name)
    }

    /// All records in table order
    pub fn records(&self) -> impl Iterator<Item = &StateRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for StateDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> &'static StateDirectory {
        StateDirectory::shared()
    }

    #[test]
    fn test_is_valid_code() {
        assert!(directory().is_valid_code("CA"));
        assert!(directory().is_valid_code("TX"));
        assert!(directory().is_valid_code("OK"));
    }

    #[test]
    fn test_is_valid_code_case_sensitive() {
        assert!(!directory().is_valid_code("ca"));
        assert!(!directory().is_valid_code("cA"));
        assert!(!directory().is_valid_code("Ca"));

        for record in directory().records() {
            assert!(directory().is_valid_code(record.code));
            assert!(!directory().is_valid_code(&record.code.to_lowercase()));
        }
    }

    #[test]
    fn test_invalid_code() {
        assert!(!directory().is_valid_code("XY"));
        assert!(!directory().is_valid_code(""));
        assert!(!directory().is_valid_code("CAL"));
        assert!(!directory().is_valid_code("12"));
    }

    #[test]
    fn test_by_name() {
        assert_eq!(directory().by_name("Connecticut"), Some("CT"));
        assert_eq!(directory().by_name("Mississippi"), Some("MS"));
        assert_eq!(directory().by_name("Utah"), Some("UT"));
        assert_eq!(directory().by_name("District of Columbia"), Some("DC"));
    }

    #[test]
    fn test_by_name_unknown() {
        assert_eq!(directory().by_name("Germany"), None);
        // exact match only
        assert_eq!(directory().by_name("utah"), None);
        assert_eq!(directory().by_name(" Utah"), None);
        assert_eq!(directory().by_name(""), None);
    }

    #[test]
    fn test_by_coordinate() {
        // Sacramento, California
        assert_eq!(directory().by_coordinate(38.3454, -121.2935), Some("CA"));
        // Austin, Texas
        assert_eq!(directory().by_coordinate(30.25, -97.75), Some("TX"));
        // Baton Rouge, Louisiana
        assert_eq!(directory().by_coordinate(30.45, -91.14), Some("LA"));
    }

    #[test]
    fn test_by_coordinate_unknown() {
        // Moscow, Russia
        assert_eq!(directory().by_coordinate(55.75, 37.6167), None);
        // Canberra, Australia
        assert_eq!(directory().by_coordinate(-35.3075, 149.1244), None);
        // New Delhi, India
        assert_eq!(directory().by_coordinate(28.6139, 77.2089), None);
    }

    #[test]
    fn test_by_coordinate_threshold() {
        // Due north of the Hawaii centroid, open ocean otherwise
        assert_eq!(directory().by_coordinate(25.1567, -157.5311), Some("HI")); // ~450 km
        assert_eq!(directory().by_coordinate(26.0561, -157.5311), None); // ~550 km

        let inside = directory().nearest(25.6055, -157.5311).unwrap(); // ~499.9 km
        assert_eq!(inside.code, "HI");
        assert!(inside.distance_km < MAX_DISTANCE_KM);
        assert!(inside.distance_km > MAX_DISTANCE_KM - 1.0);
        assert_eq!(directory().nearest(25.6073, -157.5311), None); // ~500.1 km
    }

    #[test]
    fn test_by_coordinate_non_finite() {
        assert_eq!(directory().by_coordinate(f64::NAN, -97.75), None);
        assert_eq!(directory().by_coordinate(30.25, f64::INFINITY), None);
    }

    #[test]
    fn test_centroid_maps_to_itself() {
        for record in directory().records() {
            let found = directory().nearest(record.centroid.latitude, record.centroid.longitude);
            let found = found.expect("centroid should always match");
            assert_eq!(found.code, record.code);
            assert_eq!(found.distance_km, 0.0);
        }
    }

    #[test]
    fn test_nearest_reports_distance() {
        let nearest = directory().nearest(38.3454, -121.2935).unwrap();
        assert_eq!(nearest.code, "CA");
        assert_eq!(nearest.name, "California");
        assert!((nearest.distance_km - 277.95).abs() < 0.1);
        assert!(nearest.distance_km <= MAX_DISTANCE_KM);
    }

    #[test]
    fn test_idempotent() {
        let first = directory().nearest(30.45, -91.14);
        for _ in 0..10 {
            assert_eq!(directory().nearest(30.45, -91.14), first);
            assert_eq!(directory().by_name("Utah"), Some("UT"));
        }
    }

    #[test]
    fn test_get_and_name_of() {
        let record = directory().get("WA").unwrap();
        assert_eq!(record.name, "Washington");
        assert_eq!(record.centroid, Coordinate::new(47.3917, -121.5708));
        assert_eq!(directory().name_of("PR"), Some("Puerto Rico"));
        assert_eq!(directory().name_of("pr"), None);
        assert!(directory().get("XY").is_none());
    }

    #[test]
    fn test_fresh_directory_matches_shared() {
        let fresh = StateDirectory::new();
        assert_eq!(fresh.len(), directory().len());
        assert!(!fresh.is_empty());
        assert!(fresh.records().eq(directory().records()));
    }
}
