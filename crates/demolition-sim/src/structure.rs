//! Structure builder.
//!
//! Turns a layout into a list of entity specs without touching the world.
//! A placement either builds completely or returns an error, so callers
//! can validate every placement before spawning anything.

use glam::DVec2;

use demolition_core::components::LatticeCell;
use demolition_core::constants::*;
use demolition_core::enums::{EntityKind, Material};
use demolition_core::error::BuildError;
use demolition_core::layout::{BuildingLayout, LayoutRef, ObjectKind};

use crate::layouts;

/// A destructible entity ready to be spawned.
#[derive(Debug, Clone, PartialEq)]
pub struct EntitySpec {
    pub kind: EntityKind,
    pub center: DVec2,
    pub width: f64,
    pub height: f64,
    /// Lattice position, row 0 at the bottom.
    pub cell: LatticeCell,
    pub material: Material,
    pub mass: f64,
}

/// Build a layout centered on `anchor_x` with its bottom on `ground_level`.
pub fn build(
    layout: &LayoutRef,
    anchor_x: f64,
    ground_level: f64,
) -> Result<Vec<EntitySpec>, BuildError> {
    match layout {
        LayoutRef::Tower { width, height } => build_tower(*width, *height, anchor_x, ground_level),
        LayoutRef::Named { name } => {
            let named = layouts::find(name).ok_or_else(|| BuildError::UnknownLayout(name.clone()))?;
            build_named(&named, anchor_x, ground_level)
        }
        LayoutRef::Inline { layout } => build_named(layout, anchor_x, ground_level),
    }
}

/// Procedural `width × height` lattice of uniform blocks.
pub fn build_tower(
    width: u32,
    height: u32,
    anchor_x: f64,
    ground_level: f64,
) -> Result<Vec<EntitySpec>, BuildError> {
    if width == 0 || height == 0 {
        return Err(BuildError::EmptyTower { width, height });
    }
    let count = width
        .checked_mul(height)
        .filter(|&n| n <= MAX_TOWER_BLOCKS)
        .ok_or(BuildError::TowerTooLarge {
            width,
            height,
            max: MAX_TOWER_BLOCKS,
        })?;

    let half_span = f64::from(width - 1) / 2.0;
    let mut specs = Vec::with_capacity(count as usize);
    for row in 0..height {
        for col in 0..width {
            specs.push(EntitySpec {
                kind: EntityKind::Block,
                center: DVec2::new(
                    anchor_x + (f64::from(col) - half_span) * BLOCK_WIDTH,
                    ground_level + f64::from(row) * BLOCK_HEIGHT + BLOCK_HEIGHT / 2.0,
                ),
                width: BLOCK_WIDTH,
                height: BLOCK_HEIGHT,
                cell: LatticeCell { row, col },
                material: banner_material(height - 1 - row, col, width, height),
                mass: BLOCK_MASS,
            });
        }
    }
    Ok(specs)
}

/// Grid layout with object overlays. Grid row 0 is the top of the building.
pub fn build_named(
    layout: &BuildingLayout,
    anchor_x: f64,
    ground_level: f64,
) -> Result<Vec<EntitySpec>, BuildError> {
    validate(layout)?;

    let rows = layout.rows();
    let cols = layout.cols();
    let cell = LAYOUT_CELL_SIZE;
    let left = anchor_x - cols as f64 * cell / 2.0;

    let mut specs = Vec::new();

    for (r, line) in layout.grid.iter().enumerate() {
        let lattice_row = (rows - 1 - r) as u32;
        for (c, &code) in line.iter().enumerate() {
            if code == 0 || layout.objects.iter().any(|o| o.covers(r, c)) {
                continue;
            }
            let cell_type = layout
                .cell_types
                .get(&code)
                .ok_or_else(|| BuildError::UnknownCellType {
                    name: layout.name.clone(),
                    row: r,
                    col: c,
                    code,
                })?;
            specs.push(EntitySpec {
                kind: EntityKind::Block,
                center: DVec2::new(
                    left + c as f64 * cell + cell / 2.0,
                    ground_level + f64::from(lattice_row) * cell + cell / 2.0,
                ),
                width: cell,
                height: cell,
                cell: LatticeCell {
                    row: lattice_row,
                    col: c as u32,
                },
                material: cell_type.material,
                mass: BLOCK_MASS,
            });
        }
    }

    for object in &layout.objects {
        match object.kind {
            ObjectKind::Character => {
                let width = object.width as f64 * cell;
                let height = object.height as f64 * cell;
                let bottom_row = rows - (object.row + object.height);
                specs.push(EntitySpec {
                    kind: EntityKind::Character,
                    center: DVec2::new(
                        left + object.col as f64 * cell + width / 2.0,
                        ground_level + bottom_row as f64 * cell + height / 2.0,
                    ),
                    width,
                    height,
                    cell: LatticeCell {
                        row: bottom_row as u32,
                        col: object.col as u32,
                    },
                    material: Material::default(),
                    mass: CHARACTER_MASS_PER_CELL * (object.width * object.height) as f64,
                });
            }
        }
    }

    Ok(specs)
}

fn validate(layout: &BuildingLayout) -> Result<(), BuildError> {
    let cols = layout.cols();
    if layout.rows() == 0 || cols == 0 {
        return Err(BuildError::EmptyGrid(layout.name.clone()));
    }
    for (row, line) in layout.grid.iter().enumerate() {
        if line.len() != cols {
            return Err(BuildError::RaggedGrid {
                name: layout.name.clone(),
                row,
                expected: cols,
                actual: line.len(),
            });
        }
    }
    for (index, object) in layout.objects.iter().enumerate() {
        let fits = object.width > 0
            && object.height > 0
            && object.col + object.width <= cols
            && object.row + object.height <= layout.rows();
        if !fits {
            return Err(BuildError::ObjectOutOfBounds {
                name: layout.name.clone(),
                index,
            });
        }
    }
    for (first, a) in layout.objects.iter().enumerate() {
        for (offset, b) in layout.objects[first + 1..].iter().enumerate() {
            if a.overlaps(b) {
                return Err(BuildError::OverlappingObjects {
                    name: layout.name.clone(),
                    first,
                    second: first + 1 + offset,
                });
            }
        }
    }
    Ok(())
}

/// Red field with a gold star cluster in the upper-left canton.
/// `row` counts from the top.
fn banner_material(row: u32, col: u32, width: u32, height: u32) -> Material {
    let at = |fr: f64, fc: f64| {
        row == (f64::from(height) * fr).floor() as u32 && col == (f64::from(width) * fc).floor() as u32
    };
    let star = at(0.2, 0.2) || at(0.15, 0.4) || at(0.25, 0.45) || at(0.35, 0.4) || at(0.3, 0.35);
    let canton = f64::from(row) < f64::from(height) * 0.3 && f64::from(col) < f64::from(width) * 0.3;

    if star || (canton && (row + col) % 4 == 0) {
        Material::BannerGold
    } else {
        Material::BannerRed
    }
}
