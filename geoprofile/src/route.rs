//! Route path extraction from KML markup.

use crate::ProfileError;
use geo::{geometry::Geometry, Point};
use kml::{quick_collection, Kml};

/// Extracts the first linestring in a KML document as a route path.
///
/// Containers are searched in document order; points, styles, and
/// other non-linestring content are skipped. A well-formed document
/// with no linestring is [`ProfileError::NoLineString`].
pub fn kml_path(kml_text: &str) -> Result<Vec<Point<f64>>, ProfileError> {
    let document: Kml = kml_text.parse()?;
    quick_collection(document)?
        .into_iter()
        .find_map(|geometry| match geometry {
            Geometry::LineString(line) => Some(line.into_points()),
            _ => None,
        })
        .ok_or(ProfileError::NoLineString)
}

#[cfg(test)]
mod tests {
    use super::kml_path;
    use crate::ProfileError;
    use geo::point;

    const ROUTE_KML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
<Document>
    <name>Creek loop</name>
    <Placemark>
        <name>Creek loop</name>
        <LineString>
            <tessellate>1</tessellate>
            <coordinates>
                -82.531524,36.512916,0 -82.540000,36.520000,0 -82.551234,36.527800,0
            </coordinates>
        </LineString>
    </Placemark>
</Document>
</kml>"#;

    const POINT_ONLY_KML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
<Placemark>
    <Point><coordinates>-82.531524,36.512916,0</coordinates></Point>
</Placemark>
</kml>"#;

    #[test]
    fn test_extracts_linestring_in_order() {
        let path = kml_path(ROUTE_KML).unwrap();
        assert_eq!(
            path,
            vec![
                point!(x: -82.531524, y: 36.512916),
                point!(x: -82.540000, y: 36.520000),
                point!(x: -82.551234, y: 36.527800),
            ]
        );
    }

    #[test]
    fn test_document_without_linestring() {
        let err = kml_path(POINT_ONLY_KML).unwrap_err();
        assert!(matches!(err, ProfileError::NoLineString));
    }

    #[test]
    fn test_malformed_markup() {
        let err = kml_path("<").unwrap_err();
        assert!(matches!(err, ProfileError::Kml(_)));
    }
}
