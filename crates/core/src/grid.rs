//! Terrain grid: the immutable cell matrix of a loaded map.

use serde::{Deserialize, Serialize};

use crate::error::MapParseError;
use crate::terrain::Terrain;

/// On-disk map description.
///
/// ```json
/// { "name": "Île Centrale", "width": 2, "height": 1, "terrain": [["water", "grass"]] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapDocument {
    pub name: String,
    pub width: usize,
    pub height: usize,
    /// `terrain[y][x]`
    pub terrain: Vec<Vec<Terrain>>,
}

impl MapDocument {
    /// Build a `width x height` document by evaluating `f(x, y)` per cell.
    pub fn generate(
        name: impl Into<String>,
        width: usize,
        height: usize,
        f: impl Fn(usize, usize) -> Terrain,
    ) -> Self {
        let terrain = (0..height)
            .map(|y| (0..width).map(|x| f(x, y)).collect())
            .collect();
        Self {
            name: name.into(),
            width,
            height,
            terrain,
        }
    }
}

/// Validated `width x height` terrain matrix, stored row-major.
///
/// Invariant: `cells.len() == width * height`, both dimensions positive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerrainGrid {
    name: String,
    width: usize,
    height: usize,
    cells: Vec<Terrain>,
}

impl TerrainGrid {
    /// Validate a document and take ownership of its cells.
    ///
    /// Rejects zero dimensions, a row count different from `height`, and any
    /// row whose length differs from `width`.
    pub fn from_document(doc: MapDocument) -> Result<Self, MapParseError> {
        let MapDocument {
            name,
            width,
            height,
            terrain,
        } = doc;

        if width == 0 || height == 0 {
            return Err(MapParseError::EmptyDimensions { width, height });
        }
        if terrain.len() != height {
            return Err(MapParseError::RowCount {
                expected: height,
                found: terrain.len(),
            });
        }

        let mut cells = Vec::with_capacity(width * height);
        for (row, labels) in terrain.into_iter().enumerate() {
            if labels.len() != width {
                return Err(MapParseError::RowLength {
                    row,
                    expected: width,
                    found: labels.len(),
                });
            }
            cells.extend(labels);
        }

        Ok(Self {
            name,
            width,
            height,
            cells,
        })
    }

    /// Convenience constructor from string labels, mainly for tests and fixtures.
    pub fn from_labels(name: impl Into<String>, rows: &[&[&str]]) -> Result<Self, MapParseError> {
        let terrain: Vec<Vec<Terrain>> = rows
            .iter()
            .map(|row| row.iter().map(|l| Terrain::from_label(l)).collect())
            .collect();
        Self::from_document(MapDocument {
            name: name.into(),
            width: rows.first().map_or(0, |r| r.len()),
            height: rows.len(),
            terrain,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Terrain at column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> Option<&Terrain> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y * self.width + x)
    }

    /// Cells in row-major order as `(x, y, terrain)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Terrain)> + '_ {
        let w = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, t)| (i % w, i / w, t))
    }

    /// Size of the whole grid in world pixels.
    pub fn world_size(&self, tile_size: f64) -> (f64, f64) {
        (self.width as f64 * tile_size, self.height as f64 * tile_size)
    }

    pub fn to_document(&self) -> MapDocument {
        MapDocument {
            name: self.name.clone(),
            width: self.width,
            height: self.height,
            terrain: self.cells.chunks(self.width).map(|r| r.to_vec()).collect(),
        }
    }
}

impl TryFrom<MapDocument> for TerrainGrid {
    type Error = MapParseError;

    fn try_from(doc: MapDocument) -> Result<Self, Self::Error> {
        Self::from_document(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_are_indexed_column_then_row() {
        let grid =
            TerrainGrid::from_labels("t", &[&["grass", "forest"], &["water", "grass"]]).unwrap();
        assert_eq!(grid.get(1, 0), Some(&Terrain::Forest));
        assert_eq!(grid.get(0, 1), Some(&Terrain::Water));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.len(), 4);
    }

    #[test]
    fn iter_is_row_major() {
        let grid = TerrainGrid::from_labels("t", &[&["grass", "forest", "water"]]).unwrap();
        let coords: Vec<_> = grid.iter().map(|(x, y, _)| (x, y)).collect();
        assert_eq!(coords, vec![(0, 0), (1, 0), (2, 0)]);
    }

    #[test]
    fn rejects_short_row() {
        let doc = MapDocument {
            name: "bad".into(),
            width: 2,
            height: 2,
            terrain: vec![
                vec![Terrain::Grass, Terrain::Grass],
                vec![Terrain::Grass],
            ],
        };
        let err = TerrainGrid::from_document(doc).unwrap_err();
        assert!(matches!(
            err,
            MapParseError::RowLength {
                row: 1,
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn rejects_row_count_mismatch() {
        let doc = MapDocument::generate("bad", 3, 2, |_, _| Terrain::Plains);
        let doc = MapDocument { height: 3, ..doc };
        let err = TerrainGrid::from_document(doc).unwrap_err();
        assert!(matches!(err, MapParseError::RowCount { expected: 3, found: 2 }));
    }

    #[test]
    fn rejects_empty_dimensions() {
        let doc = MapDocument::generate("empty", 0, 0, |_, _| Terrain::Plains);
        assert!(matches!(
            TerrainGrid::from_document(doc),
            Err(MapParseError::EmptyDimensions { .. })
        ));
    }

    #[test]
    fn document_roundtrip_preserves_unknown_labels() {
        let grid = TerrainGrid::from_labels("t", &[&["lava", "water"]]).unwrap();
        let json = serde_json::to_string(&grid.to_document()).unwrap();
        assert!(json.contains("\"lava\""));
        let back: MapDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(TerrainGrid::from_document(back).unwrap(), grid);
    }
}
