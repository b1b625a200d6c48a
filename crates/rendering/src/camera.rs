use bevy::prelude::*;

use simulation::features::{DisabledFeatures, Feature};
use simulation::placement::PlacementController;
use simulation::player::Player;

/// Third-person camera that trails the player, pulling up and back while a
/// building is being dragged so the lot is visible.
#[derive(Resource, Debug, Clone)]
pub struct FollowCamera {
    /// Offset from the player while walking.
    pub offset: Vec3,
    /// Offset from the player while dragging a building.
    pub build_offset: Vec3,
    /// Exponential catch-up rate, per second.
    pub smoothing: f32,
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self {
            offset: Vec3::new(0.0, 10.0, -15.0),
            build_offset: Vec3::new(0.0, 25.0, -15.0),
            smoothing: 6.0,
        }
    }
}

impl FollowCamera {
    pub fn offset_for(&self, dragging: bool) -> Vec3 {
        if dragging {
            self.build_offset
        } else {
            self.offset
        }
    }

    /// Where the camera should move this frame when chasing `target`.
    pub fn step(&self, current: Vec3, target: Vec3, delta_secs: f32) -> Vec3 {
        let alpha = 1.0 - (-self.smoothing * delta_secs).exp();
        current.lerp(target, alpha.clamp(0.0, 1.0))
    }
}

pub fn setup_camera(mut commands: Commands, follow: Res<FollowCamera>) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(follow.offset).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// System: chase the player and look at them.
pub fn follow_player(
    time: Res<Time>,
    follow: Res<FollowCamera>,
    controller: Res<PlacementController>,
    players: Query<&Transform, (With<Player>, Without<Camera3d>)>,
    mut cameras: Query<&mut Transform, With<Camera3d>>,
    mut disabled: ResMut<DisabledFeatures>,
) {
    let Ok(player) = players.get_single() else {
        disabled.disable(Feature::Camera, "no single Player entity to follow");
        return;
    };
    let Ok(mut transform) = cameras.get_single_mut() else {
        disabled.disable(Feature::Camera, "no 3D camera");
        return;
    };
    let focus = player.translation;
    let target = focus + follow.offset_for(controller.is_dragging());
    let next = follow.step(transform.translation, target, time.delta_secs());
    *transform = Transform::from_translation(next).looking_at(focus, Vec3::Y);
}
