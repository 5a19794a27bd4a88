use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfileError {
    /// A path and its elevation samples must be the same length.
    #[error("path has {path} coordinates but {samples} elevation samples")]
    SampleMismatch { path: usize, samples: usize },

    #[error("invalid coordinate at index {index}: ({longitude}, {latitude})")]
    InvalidCoordinate {
        index: usize,
        longitude: f64,
        latitude: f64,
    },

    #[error("{0}")]
    Kml(#[from] kml::Error),

    #[error("no linestring in KML document")]
    NoLineString,
}
