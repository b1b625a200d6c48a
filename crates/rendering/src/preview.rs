use bevy::prelude::*;

use simulation::config::{CELL_SIZE, GROUND_Y, LOT_HALF_EXTENT};
use simulation::grid::CellCoord;
use simulation::occupancy::OccupancyMap;
use simulation::placement::DragPreview;

const FREE_COLOR: Color = Color::srgb(0.2, 0.9, 0.3);
const BLOCKED_COLOR: Color = Color::srgb(0.95, 0.2, 0.2);
const OCCUPIED_COLOR: Color = Color::srgba(0.6, 0.6, 0.65, 0.6);
const LOT_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 0.08);

/// Lift above the ground so lines don't z-fight with the floor.
const GIZMO_LIFT: f32 = 0.02;

/// Corners of a cell on the ground, inset by `inset` world units.
pub fn cell_outline(cell: CellCoord, inset: f32) -> [Vec3; 4] {
    let x0 = cell.x as f32 * CELL_SIZE + inset;
    let z0 = cell.y as f32 * CELL_SIZE + inset;
    let x1 = (cell.x + 1) as f32 * CELL_SIZE - inset;
    let z1 = (cell.y + 1) as f32 * CELL_SIZE - inset;
    let y = GROUND_Y + GIZMO_LIFT;
    [
        Vec3::new(x0, y, z0),
        Vec3::new(x1, y, z0),
        Vec3::new(x1, y, z1),
        Vec3::new(x0, y, z1),
    ]
}

fn draw_quad(gizmos: &mut Gizmos, corners: [Vec3; 4], color: Color) {
    for i in 0..4 {
        gizmos.line(corners[i], corners[(i + 1) % 4], color);
    }
}

/// Outline every cell of the dragged footprint: green where free, red where
/// another building already stands.
pub fn draw_drag_preview(mut gizmos: Gizmos, preview: Res<DragPreview>) {
    let Some(preview) = &preview.0 else {
        return;
    };
    for &cell in &preview.cells {
        let color = if preview.blocked.contains(&cell) {
            BLOCKED_COLOR
        } else {
            FREE_COLOR
        };
        draw_quad(&mut gizmos, cell_outline(cell, 0.05), color);
    }
}

/// Cross out committed cells.
pub fn draw_occupied_cells(mut gizmos: Gizmos, occupancy: Res<OccupancyMap>) {
    for cell in occupancy.iter() {
        let [a, b, c, d] = cell_outline(cell, 0.15);
        gizmos.line(a, c, OCCUPIED_COLOR);
        gizmos.line(b, d, OCCUPIED_COLOR);
    }
}

/// Faint lot grid.
pub fn draw_lot_grid(mut gizmos: Gizmos) {
    let extent = LOT_HALF_EXTENT as f32 * CELL_SIZE;
    let y = GROUND_Y + GIZMO_LIFT * 0.5;
    for i in -LOT_HALF_EXTENT..=LOT_HALF_EXTENT {
        let v = i as f32 * CELL_SIZE;
        gizmos.line(Vec3::new(v, y, -extent), Vec3::new(v, y, extent), LOT_COLOR);
        gizmos.line(Vec3::new(-extent, y, v), Vec3::new(extent, y, v), LOT_COLOR);
    }
}
