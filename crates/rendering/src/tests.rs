use bevy::prelude::*;

use simulation::buildings::BuildingKind;
use simulation::grid::{world_to_cell, CellCoord};
use simulation::keybindings::KeyBindings;
use simulation::placement::PlacementCommand;
use simulation::player::PlayerAction;

use crate::camera::FollowCamera;
use crate::cursor::ground_hit;
use crate::input::{move_direction, placement_commands, player_actions};
use crate::preview::cell_outline;

fn keys_down(codes: &[KeyCode]) -> ButtonInput<KeyCode> {
    let mut keys = ButtonInput::<KeyCode>::default();
    for &code in codes {
        keys.press(code);
    }
    keys
}

// ---------------------------------------------------------------------------
// Pointer
// ---------------------------------------------------------------------------

#[test]
fn test_ground_hit_from_above() {
    let hit = ground_hit(Vec3::new(2.0, 10.0, -3.0), Vec3::new(0.0, -1.0, 0.0));
    assert_eq!(hit, Some(Vec3::new(2.0, 0.0, -3.0)));
}

#[test]
fn test_ground_hit_slanted_ray() {
    let hit = ground_hit(Vec3::new(0.0, 10.0, -15.0), Vec3::new(0.0, -10.0, 15.0).normalize())
        .expect("ray reaches the ground");
    assert!(hit.length() < 1e-3);
    assert_eq!(world_to_cell(hit + Vec3::splat(0.01)), CellCoord::new(0, 0));
}

#[test]
fn test_ground_hit_misses_when_parallel_or_upward() {
    assert_eq!(ground_hit(Vec3::new(0.0, 5.0, 0.0), Vec3::X), None);
    assert_eq!(ground_hit(Vec3::new(0.0, 5.0, 0.0), Vec3::Y), None);
}

// ---------------------------------------------------------------------------
// Key mapping
// ---------------------------------------------------------------------------

#[test]
fn test_number_keys_select_buildings() {
    let bindings = KeyBindings::default();
    assert_eq!(
        placement_commands(&keys_down(&[KeyCode::Digit2]), &bindings),
        vec![PlacementCommand::Select(BuildingKind::TownHall)]
    );
    assert_eq!(
        placement_commands(&keys_down(&[KeyCode::Digit1]), &bindings),
        vec![PlacementCommand::Select(BuildingKind::Tavern)]
    );
}

#[test]
fn test_rotate_confirm_cancel_keys() {
    let bindings = KeyBindings::default();
    let keys = keys_down(&[KeyCode::KeyR, KeyCode::KeyP, KeyCode::Escape]);
    assert_eq!(
        placement_commands(&keys, &bindings),
        vec![
            PlacementCommand::Rotate,
            PlacementCommand::Confirm,
            PlacementCommand::Cancel
        ]
    );
}

#[test]
fn test_held_keys_do_not_repeat_commands() {
    let bindings = KeyBindings::default();
    let mut keys = keys_down(&[KeyCode::KeyR]);
    keys.clear();
    assert!(keys.pressed(KeyCode::KeyR));
    assert!(placement_commands(&keys, &bindings).is_empty());
}

#[test]
fn test_tavern_action_keys() {
    let bindings = KeyBindings::default();
    let keys = keys_down(&[KeyCode::Space, KeyCode::KeyQ, KeyCode::KeyE]);
    assert_eq!(
        player_actions(&keys, &bindings),
        vec![PlayerAction::Strike, PlayerAction::PickUp, PlayerAction::Deliver]
    );
}

#[test]
fn test_move_direction() {
    let bindings = KeyBindings::default();
    assert_eq!(
        move_direction(&keys_down(&[KeyCode::KeyW]), &bindings),
        Vec2::new(0.0, 1.0)
    );
    assert_eq!(
        move_direction(&keys_down(&[KeyCode::ArrowDown, KeyCode::KeyD]), &bindings),
        Vec2::new(-1.0, -1.0)
    );
    assert_eq!(
        move_direction(&keys_down(&[KeyCode::KeyA, KeyCode::KeyD]), &bindings),
        Vec2::ZERO
    );
}

// ---------------------------------------------------------------------------
// Camera and gizmos
// ---------------------------------------------------------------------------

#[test]
fn test_camera_pulls_back_while_dragging() {
    let follow = FollowCamera::default();
    assert_eq!(follow.offset_for(false), Vec3::new(0.0, 10.0, -15.0));
    assert_eq!(follow.offset_for(true), Vec3::new(0.0, 25.0, -15.0));
}

#[test]
fn test_camera_step_converges() {
    let follow = FollowCamera::default();
    let target = Vec3::new(0.0, 10.0, -15.0);
    let mut pos = Vec3::ZERO;
    for _ in 0..240 {
        pos = follow.step(pos, target, 1.0 / 60.0);
    }
    assert!((pos - target).length() < 1e-3);
    assert_eq!(follow.step(pos, target, 0.0), pos);
}

#[test]
fn test_cell_outline_stays_inside_cell() {
    let cell = CellCoord::new(-2, 3);
    for corner in cell_outline(cell, 0.05) {
        assert_eq!(world_to_cell(corner), cell);
    }
}
