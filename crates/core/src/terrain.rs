//! Terrain labels and their fixed fill colors.

use serde::{Deserialize, Serialize};

use crate::types::Rgb;

/// Terrain category of a map cell.
///
/// Labels outside the known set are kept verbatim in `Unknown` so that a map
/// round-trips unchanged and the fallback color is an explicit case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Terrain {
    Grass,
    Water,
    Mountain,
    Forest,
    Desert,
    Plains,
    Unknown(String),
}

impl Terrain {
    pub const KNOWN: [Terrain; 6] = [
        Terrain::Grass,
        Terrain::Water,
        Terrain::Mountain,
        Terrain::Forest,
        Terrain::Desert,
        Terrain::Plains,
    ];

    /// Color used for unrecognized labels.
    pub const FALLBACK_COLOR: Rgb = Rgb::WHITE;

    /// Parse a label. Matching is exact (labels are lowercase in map files).
    pub fn from_label(label: &str) -> Self {
        match label {
            "grass" => Terrain::Grass,
            "water" => Terrain::Water,
            "mountain" => Terrain::Mountain,
            "forest" => Terrain::Forest,
            "desert" => Terrain::Desert,
            "plains" => Terrain::Plains,
            other => Terrain::Unknown(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Terrain::Grass => "grass",
            Terrain::Water => "water",
            Terrain::Mountain => "mountain",
            Terrain::Forest => "forest",
            Terrain::Desert => "desert",
            Terrain::Plains => "plains",
            Terrain::Unknown(label) => label,
        }
    }

    /// Fill color of this terrain. Total: unknown labels map to white.
    pub fn color(&self) -> Rgb {
        match self {
            Terrain::Grass => Rgb::new(0x22, 0x8B, 0x22),
            Terrain::Water => Rgb::new(0x00, 0x77, 0xBE),
            Terrain::Mountain => Rgb::new(0x8B, 0x89, 0x89),
            Terrain::Forest => Rgb::new(0x00, 0x64, 0x00),
            Terrain::Desert => Rgb::new(0xED, 0xC9, 0xAF),
            Terrain::Plains => Rgb::new(0x90, 0xEE, 0x90),
            Terrain::Unknown(_) => Self::FALLBACK_COLOR,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Terrain::Unknown(_))
    }
}

impl From<String> for Terrain {
    fn from(label: String) -> Self {
        match Terrain::from_label(&label) {
            Terrain::Unknown(_) => Terrain::Unknown(label),
            known => known,
        }
    }
}

impl From<Terrain> for String {
    fn from(terrain: Terrain) -> Self {
        match terrain {
            Terrain::Unknown(label) => label,
            known => known.label().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_table_is_bit_exact() {
        let expected = [
            ("grass", "#228B22"),
            ("water", "#0077BE"),
            ("mountain", "#8B8989"),
            ("forest", "#006400"),
            ("desert", "#EDC9AF"),
            ("plains", "#90EE90"),
        ];
        for (label, hex) in expected {
            assert_eq!(Terrain::from_label(label).color().to_string(), hex, "{label}");
        }
    }

    #[test]
    fn unknown_label_falls_back_to_white() {
        let t = Terrain::from_label("lava");
        assert_eq!(t, Terrain::Unknown("lava".to_string()));
        assert!(!t.is_known());
        assert_eq!(t.color().to_string(), "#FFFFFF");
        assert_eq!(t.label(), "lava");
    }

    #[test]
    fn labels_are_case_sensitive() {
        assert!(!Terrain::from_label("Grass").is_known());
    }

    #[test]
    fn serde_uses_plain_labels() {
        let row: Vec<Terrain> = serde_json::from_str(r#"["forest","swamp"]"#).unwrap();
        assert_eq!(row[0], Terrain::Forest);
        assert_eq!(row[1], Terrain::Unknown("swamp".to_string()));
        assert_eq!(serde_json::to_string(&row).unwrap(), r#"["forest","swamp"]"#);
    }
}
