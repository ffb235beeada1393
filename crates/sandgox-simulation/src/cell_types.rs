//! Cell type definitions and registry

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Rgb;

/// Density used for cells that never get displaced
pub const IMMOVABLE_DENSITY: i32 = 9999;

/// Every kind of cell the engine knows about
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum CellType {
    Air = 0,
    Sand = 1,
    Water = 2,
    Metal = 3,
    WaterGenerator = 4,
    BlackHole = 5,
}

impl CellType {
    /// Number of variants
    pub const COUNT: usize = 6;

    pub const ALL: [CellType; Self::COUNT] = [
        CellType::Air,
        CellType::Sand,
        CellType::Water,
        CellType::Metal,
        CellType::WaterGenerator,
        CellType::BlackHole,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CellType::Air => "air",
            CellType::Sand => "sand",
            CellType::Water => "water",
            CellType::Metal => "metal",
            CellType::WaterGenerator => "water_generator",
            CellType::BlackHole => "black_hole",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown cell type `{0}` (expected one of: air, sand, water, metal, water_generator, black_hole)")]
pub struct ParseCellTypeError(pub String);

impl FromStr for CellType {
    type Err = ParseCellTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "air" | "erase" | "eraser" => Ok(CellType::Air),
            "sand" => Ok(CellType::Sand),
            "water" => Ok(CellType::Water),
            "metal" => Ok(CellType::Metal),
            "water_generator" | "generator" => Ok(CellType::WaterGenerator),
            "black_hole" | "blackhole" => Ok(CellType::BlackHole),
            _ => Err(ParseCellTypeError(s.to_string())),
        }
    }
}

/// How a cell type behaves each tick
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Behavior {
    /// Never moves, never reacts (air, metal)
    Inert,
    /// Falls, piles up diagonally (sand)
    Powder,
    /// Falls, then flows sideways (water)
    Liquid,
    /// Fills empty neighbours with water
    Generator,
    /// Turns every neighbour into air
    Destroyer,
}

/// Physical properties of a cell type
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeProperties {
    pub cell_type: CellType,
    /// Ranking used for displacement; higher sinks below lower
    pub density: i32,
    /// Allows density-based displacement beyond plain air replacement
    pub liquid: bool,
    pub behavior: Behavior,
    /// Colour variants; the first entry is the base colour
    pub palette: &'static [Rgb],
}

impl TypeProperties {
    pub fn base_color(&self) -> Rgb {
        self.palette[0]
    }
}

const SAND_PALETTE: &[Rgb] = &[
    Rgb::new(255, 255, 0),
    Rgb::new(200, 200, 0),
    Rgb::new(150, 150, 0),
];
const WATER_PALETTE: &[Rgb] = &[Rgb::new(0, 0, 255), Rgb::new(0, 0, 200), Rgb::new(0, 0, 150)];
const AIR_PALETTE: &[Rgb] = &[Rgb::BLACK];
const METAL_PALETTE: &[Rgb] = &[Rgb::new(128, 128, 128)];
const WATER_GENERATOR_PALETTE: &[Rgb] = &[Rgb::new(95, 78, 158)];
const BLACK_HOLE_PALETTE: &[Rgb] = &[Rgb::new(52, 8, 54)];

/// Registry of all cell types
///
/// Built once and read-only afterwards. Every [`CellType`] is registered
/// exactly once, so lookups never miss.
#[derive(Clone, Debug)]
pub struct CellTypes {
    types: Vec<TypeProperties>,
}

impl CellTypes {
    pub fn new() -> Self {
        let mut types = Self {
            types: Vec::with_capacity(CellType::ALL.len()),
        };
        types.register_defaults();

        for (index, cell_type) in CellType::ALL.iter().enumerate() {
            assert_eq!(
                types.types.get(index).map(|p| p.cell_type),
                Some(*cell_type),
                "cell type {cell_type} registered out of order or missing"
            );
        }
        log::debug!("Registered {} cell types", types.types.len());
        types
    }

    fn register_defaults(&mut self) {
        self.register(TypeProperties {
            cell_type: CellType::Air,
            density: 0,
            liquid: false,
            behavior: Behavior::Inert,
            palette: AIR_PALETTE,
        });

        self.register(TypeProperties {
            cell_type: CellType::Sand,
            density: 10,
            liquid: false,
            behavior: Behavior::Powder,
            palette: SAND_PALETTE,
        });

        self.register(TypeProperties {
            cell_type: CellType::Water,
            density: 9,
            liquid: true,
            behavior: Behavior::Liquid,
            palette: WATER_PALETTE,
        });

        self.register(TypeProperties {
            cell_type: CellType::Metal,
            density: IMMOVABLE_DENSITY,
            liquid: false,
            behavior: Behavior::Inert,
            palette: METAL_PALETTE,
        });

        self.register(TypeProperties {
            cell_type: CellType::WaterGenerator,
            density: IMMOVABLE_DENSITY,
            liquid: false,
            behavior: Behavior::Generator,
            palette: WATER_GENERATOR_PALETTE,
        });

        self.register(TypeProperties {
            cell_type: CellType::BlackHole,
            density: IMMOVABLE_DENSITY,
            liquid: false,
            behavior: Behavior::Destroyer,
            palette: BLACK_HOLE_PALETTE,
        });
    }

    fn register(&mut self, props: TypeProperties) {
        debug_assert!(!props.palette.is_empty());
        self.types.push(props);
    }

    /// Get properties for a cell type
    pub fn get(&self, cell_type: CellType) -> &TypeProperties {
        &self.types[cell_type.index()]
    }

    pub fn density(&self, cell_type: CellType) -> i32 {
        self.get(cell_type).density
    }

    pub fn is_liquid(&self, cell_type: CellType) -> bool {
        self.get(cell_type).liquid
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypeProperties> {
        self.types.iter()
    }
}

impl Default for CellTypes {
    fn default() -> Self {
        Self::new()
    }
}
