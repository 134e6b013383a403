//! Map library: a directory of JSON map documents keyed by file stem.
//!
//! Listing a directory with no `.json` files first writes the default fixture
//! maps, so a fresh install always has something to show.

use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{Result, ViewerError};
use crate::grid::{MapDocument, TerrainGrid};
use crate::terrain::Terrain;

const MAP_EXTENSION: &str = "json";

#[derive(Debug, Clone)]
pub struct MapLibrary {
    dir: PathBuf,
}

impl MapLibrary {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, stem: &str) -> PathBuf {
        self.dir.join(format!("{stem}.{MAP_EXTENSION}"))
    }

    /// Sorted stems of the available maps.
    ///
    /// Creates the directory if needed and seeds it with [`default_maps`] when
    /// it holds no map files.
    pub fn list(&self) -> Result<Vec<String>> {
        fs::create_dir_all(&self.dir).map_err(|e| ViewerError::map_parse(&self.dir, e))?;

        let mut stems = self.scan()?;
        if stems.is_empty() {
            info!(dir = %self.dir.display(), "no maps found, writing default maps");
            self.write_defaults()?;
            stems = self.scan()?;
        }
        debug!(count = stems.len(), "maps listed");
        Ok(stems)
    }

    fn scan(&self) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.dir).map_err(|e| ViewerError::map_parse(&self.dir, e))?;

        let mut stems = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| ViewerError::map_parse(&self.dir, e))?.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(MAP_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                stems.push(stem.to_string());
            }
        }
        stems.sort();
        Ok(stems)
    }

    /// Read and validate the map stored under `stem`.
    pub fn load(&self, stem: &str) -> Result<TerrainGrid> {
        let path = self.path_for(stem);
        if !path.is_file() {
            return Err(ViewerError::MapNotFound {
                stem: stem.to_string(),
                path,
            });
        }

        let file = fs::File::open(&path).map_err(|e| ViewerError::map_parse(&path, e))?;
        let doc: MapDocument = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| ViewerError::map_parse(&path, e))?;
        let grid = TerrainGrid::from_document(doc).map_err(|e| ViewerError::map_parse(&path, e))?;

        let unknown = grid.iter().filter(|(_, _, t)| !t.is_known()).count();
        if unknown > 0 {
            warn!(stem, unknown, "map contains unrecognized terrain labels");
        }
        info!(stem, name = grid.name(), width = grid.width(), height = grid.height(), "map loaded");
        Ok(grid)
    }

    /// Write `doc` as pretty-printed JSON under `stem`, replacing any existing file.
    pub fn save(&self, stem: &str, doc: &MapDocument) -> Result<()> {
        let path = self.path_for(stem);
        let file = fs::File::create(&path).map_err(|e| ViewerError::map_parse(&path, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, doc).map_err(|e| ViewerError::map_parse(&path, e))?;
        writer.flush().map_err(|e| ViewerError::map_parse(&path, e))?;
        Ok(())
    }

    fn write_defaults(&self) -> Result<()> {
        for (stem, doc) in default_maps() {
            self.save(stem, &doc)?;
        }
        Ok(())
    }
}

/// The fixture maps written into an empty library, as `(stem, document)`.
pub fn default_maps() -> Vec<(&'static str, MapDocument)> {
    vec![
        ("plaines_forets", plains_and_forests()),
        ("ile_centrale", central_island()),
        ("desert_oasis", desert_oasis()),
        ("grande_bataille", great_battle()),
    ]
}

fn plains_and_forests() -> MapDocument {
    MapDocument::generate("Plaines et Forêts", 20, 15, |x, y| {
        if (x + y) % 3 == 0 {
            Terrain::Forest
        } else {
            Terrain::Grass
        }
    })
}

fn central_island() -> MapDocument {
    MapDocument::generate("Île Centrale", 20, 15, |x, y| {
        let dx = x as f64 - 10.0;
        let dy = y as f64 - 7.5;
        let dist = (dx * dx + dy * dy).sqrt();
        if dist < 4.0 {
            Terrain::Mountain
        } else if dist < 7.0 {
            Terrain::Grass
        } else {
            Terrain::Water
        }
    })
}

fn desert_oasis() -> MapDocument {
    MapDocument::generate("Désert et Oasis", 20, 15, |x, y| {
        if (8..=12).contains(&x) && (6..=9).contains(&y) {
            Terrain::Water
        } else if (7..=13).contains(&x) && (5..=10).contains(&y) {
            Terrain::Grass
        } else {
            Terrain::Desert
        }
    })
}

fn great_battle() -> MapDocument {
    MapDocument::generate("Grande Bataille", 40, 30, |x, y| {
        if (18..=22).contains(&x) {
            // River down the middle.
            Terrain::Water
        } else if y < 5 {
            Terrain::Mountain
        } else if x % 7 == 0 && y % 5 == 0 {
            Terrain::Forest
        } else if y > 25 {
            Terrain::Desert
        } else {
            Terrain::Plains
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_maps_have_consistent_dimensions() {
        for (stem, doc) in default_maps() {
            assert_eq!(doc.terrain.len(), doc.height, "{stem}");
            assert!(doc.terrain.iter().all(|r| r.len() == doc.width), "{stem}");
            TerrainGrid::from_document(doc).unwrap();
        }
    }

    #[test]
    fn island_has_mountain_core_and_water_rim() {
        let grid = TerrainGrid::from_document(central_island()).unwrap();
        assert_eq!(grid.get(10, 7), Some(&Terrain::Mountain));
        assert_eq!(grid.get(10, 2), Some(&Terrain::Grass));
        assert_eq!(grid.get(0, 0), Some(&Terrain::Water));
    }

    #[test]
    fn oasis_water_is_ringed_by_grass() {
        let grid = TerrainGrid::from_document(desert_oasis()).unwrap();
        assert_eq!(grid.get(10, 7), Some(&Terrain::Water));
        assert_eq!(grid.get(7, 5), Some(&Terrain::Grass));
        assert_eq!(grid.get(0, 0), Some(&Terrain::Desert));
    }

    #[test]
    fn great_battle_layers() {
        let grid = TerrainGrid::from_document(great_battle()).unwrap();
        assert_eq!((grid.width(), grid.height()), (40, 30));
        assert_eq!(grid.get(20, 0), Some(&Terrain::Water));
        assert_eq!(grid.get(0, 0), Some(&Terrain::Mountain));
        assert_eq!(grid.get(7, 10), Some(&Terrain::Forest));
        assert_eq!(grid.get(1, 29), Some(&Terrain::Desert));
        assert_eq!(grid.get(1, 10), Some(&Terrain::Plains));
    }

    #[test]
    fn plains_forests_pattern() {
        let grid = TerrainGrid::from_document(plains_and_forests()).unwrap();
        assert_eq!(grid.get(0, 0), Some(&Terrain::Forest));
        assert_eq!(grid.get(1, 0), Some(&Terrain::Grass));
        assert_eq!(grid.get(2, 1), Some(&Terrain::Forest));
    }
}
