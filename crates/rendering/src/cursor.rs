use bevy::prelude::*;

use simulation::config::GROUND_Y;
use simulation::features::{DisabledFeatures, Feature};
use simulation::placement::PointerWorldPos;

/// Intersect a ray with the ground plane. `None` when the ray is parallel to
/// the ground or points away from it.
pub fn ground_hit(origin: Vec3, direction: Vec3) -> Option<Vec3> {
    if direction.y.abs() <= 0.001 {
        return None;
    }
    let t = (GROUND_Y - origin.y) / direction.y;
    if t <= 0.0 {
        return None;
    }
    Some(origin + direction * t)
}

/// Cast the cursor into the scene and publish where it meets the ground.
pub fn update_pointer_world_pos(
    windows: Query<&Window>,
    camera_q: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    mut pointer: ResMut<PointerWorldPos>,
    mut disabled: ResMut<DisabledFeatures>,
) {
    let Ok(window) = windows.get_single() else {
        pointer.0 = None;
        disabled.disable(Feature::Pointer, "no primary window");
        return;
    };
    let Ok((camera, cam_transform)) = camera_q.get_single() else {
        pointer.0 = None;
        disabled.disable(Feature::Pointer, "no 3D camera");
        return;
    };

    let hit = window
        .cursor_position()
        .and_then(|screen_pos| camera.viewport_to_world(cam_transform, screen_pos).ok())
        .and_then(|ray| ground_hit(ray.origin, *ray.direction));
    if pointer.0 != hit {
        pointer.0 = hit;
    }
}
