//! Built-in named layouts.

use std::collections::BTreeMap;

use demolition_core::enums::Material;
use demolition_core::layout::{BuildingLayout, CellType, LayoutObject, ObjectKind};

pub const PAGODA: &str = "pagoda";

/// Look up a built-in layout by name.
pub fn find(name: &str) -> Option<BuildingLayout> {
    match name {
        PAGODA => Some(pagoda()),
        _ => None,
    }
}

/// Names accepted by `find`.
pub fn names() -> &'static [&'static str] {
    &[PAGODA]
}

/// Tiered pagoda: wall body, stepped roof, two doors, and a hollow
/// chamber holding a 3x4 character.
pub fn pagoda() -> BuildingLayout {
    let grid = vec![
        vec![0, 0, 0, 0, 2, 2, 2, 2, 2, 2, 0, 0, 0, 0],
        vec![0, 0, 0, 2, 2, 2, 2, 2, 2, 2, 2, 0, 0, 0],
        vec![0, 0, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 0, 0],
        vec![0, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 0],
        vec![2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2],
        vec![1, 1, 1, 3, 1, 1, 1, 1, 1, 1, 3, 1, 1, 1],
        vec![1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        vec![1, 1, 1, 1, 1, 0, 0, 0, 1, 1, 1, 1, 1, 1],
        vec![1, 1, 1, 1, 1, 0, 0, 0, 1, 1, 1, 1, 1, 1],
        vec![1, 1, 1, 1, 1, 0, 0, 0, 1, 1, 1, 1, 1, 1],
        vec![1, 1, 1, 1, 1, 0, 0, 0, 1, 1, 1, 1, 1, 1],
        vec![2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2],
    ];

    let cell_types = BTreeMap::from([
        (1, CellType { material: Material::Wall }),
        (2, CellType { material: Material::Roof }),
        (3, CellType { material: Material::Door }),
    ]);

    BuildingLayout {
        name: PAGODA.to_string(),
        grid,
        objects: vec![LayoutObject {
            kind: ObjectKind::Character,
            col: 5,
            row: 7,
            width: 3,
            height: 4,
        }],
        cell_types,
    }
}
