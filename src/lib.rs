//! US state and territory lookups by code, name or coordinate
//!
//! Coordinates are matched to the state with the nearest average centroid,
//! provided it lies within [`MAX_DISTANCE_KM`].

pub mod api;
pub mod directory;
pub mod geo;
pub mod states;

pub use directory::{NearestState, StateDirectory, StateRecord, DIRECTORY, MAX_DISTANCE_KM};
pub use geo::{haversine_km, Coordinate, EARTH_RADIUS_KM};
