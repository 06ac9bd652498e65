//! Minimal GeoJSON model and flat projection for the survey-reach map.
//!
//! Only the subset of GeoJSON the bundled boundary file uses is modeled:
//! a `FeatureCollection` of named `Polygon`/`MultiPolygon` features. Anything
//! else is a parse error, which the loader treats as fatal for the dataset.

use serde::Deserialize;

/// The parsed boundary file: one feature per region.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RegionCollection {
    pub features: Vec<RegionFeature>,
}

impl RegionCollection {
    pub fn feature(&self, name: &str) -> Option<&RegionFeature> {
        self.features
            .iter()
            .find(|feature| feature.properties.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RegionFeature {
    pub properties: RegionProperties,
    pub geometry: RegionGeometry,
}

/// The joinable region-name column of the boundary file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RegionProperties {
    pub name: String,
}

/// Polygon rings in GeoJSON order: `[lon, lat]`, first ring is the shell.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum RegionGeometry {
    Polygon(Vec<Vec<[f64; 2]>>),
    MultiPolygon(Vec<Vec<Vec<[f64; 2]>>>),
}

impl RegionGeometry {
    /// Every ring of the region, shells and holes alike.
    pub fn rings(&self) -> Box<dyn Iterator<Item = &Vec<[f64; 2]>> + '_> {
        match self {
            RegionGeometry::Polygon(rings) => Box::new(rings.iter()),
            RegionGeometry::MultiPolygon(polygons) => {
                Box::new(polygons.iter().flat_map(|rings| rings.iter()))
            }
        }
    }
}

pub fn parse_regions(text: &str) -> Result<RegionCollection, serde_json::Error> {
    serde_json::from_str(text)
}

/// Equirectangular viewport: longitude spans the width, latitude the height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapViewport {
    pub width: f64,
    pub height: f64,
}

impl MapViewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn project(&self, lon: f64, lat: f64) -> (f64, f64) {
        let x = (lon + 180.0) / 360.0 * self.width;
        let y = (90.0 - lat) / 180.0 * self.height;
        (x, y)
    }
}

/// SVG path data covering every ring of the region, in viewport coordinates.
pub fn region_path(geometry: &RegionGeometry, viewport: MapViewport) -> String {
    let mut path = String::new();
    for ring in geometry.rings() {
        for (idx, [lon, lat]) in ring.iter().enumerate() {
            let (x, y) = viewport.project(*lon, *lat);
            let op = if idx == 0 { 'M' } else { 'L' };
            if !path.is_empty() && idx == 0 {
                path.push(' ');
            }
            path.push_str(&format!("{op}{x:.1},{y:.1}"));
        }
        path.push('Z');
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = r#"{
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": {"name": "Squareland"},
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0], [0.0, 0.0]]]
            }
        }]
    }"#;

    #[test]
    fn parses_a_polygon_feature() {
        let regions = parse_regions(SQUARE).expect("valid GeoJSON");
        assert_eq!(regions.features.len(), 1);
        assert_eq!(regions.features[0].properties.name, "Squareland");
        assert!(regions.feature("Squareland").is_some());
        assert!(regions.feature("Atlantis").is_none());
    }

    #[test]
    fn projection_maps_the_corners() {
        let viewport = MapViewport::new(720.0, 360.0);
        assert_eq!(viewport.project(-180.0, 90.0), (0.0, 0.0));
        assert_eq!(viewport.project(180.0, -90.0), (720.0, 360.0));
        assert_eq!(viewport.project(0.0, 0.0), (360.0, 180.0));
    }

    #[test]
    fn path_closes_every_ring() {
        let regions = parse_regions(SQUARE).expect("valid GeoJSON");
        let path = region_path(
            &regions.features[0].geometry,
            MapViewport::new(360.0, 180.0),
        );
        assert!(path.starts_with('M'));
        assert_eq!(path.matches('Z').count(), 1);
        assert_eq!(path.matches('M').count(), 1);
    }

    #[test]
    fn multipolygon_yields_one_subpath_per_ring() {
        let geometry = RegionGeometry::MultiPolygon(vec![
            vec![vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]],
            vec![vec![[5.0, 5.0], [6.0, 5.0], [6.0, 6.0], [5.0, 5.0]]],
        ]);
        let path = region_path(&geometry, MapViewport::new(360.0, 180.0));
        assert_eq!(path.matches('M').count(), 2);
        assert_eq!(path.matches('Z').count(), 2);
    }
}
