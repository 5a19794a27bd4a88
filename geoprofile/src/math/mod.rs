mod haversine;

pub use haversine::{distance_between, haversine};
