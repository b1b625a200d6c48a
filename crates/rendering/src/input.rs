use bevy::prelude::*;
use bevy_egui::EguiContexts;

use simulation::buildings::BuildingKind;
use simulation::keybindings::{KeyBinding, KeyBindings};
use simulation::placement::PlacementCommand;
use simulation::player::{MoveIntent, PlayerAction};

// ---------------------------------------------------------------------------
// Pure key mapping
// ---------------------------------------------------------------------------

/// Placement commands for this frame's key presses, in the order they apply.
pub fn placement_commands(
    keys: &ButtonInput<KeyCode>,
    bindings: &KeyBindings,
) -> Vec<PlacementCommand> {
    let mut out = Vec::new();
    for kind in BuildingKind::ALL {
        if bindings.select(kind).just_pressed(keys) {
            out.push(PlacementCommand::Select(kind));
        }
    }
    if bindings.rotate.just_pressed(keys) {
        out.push(PlacementCommand::Rotate);
    }
    if bindings.confirm.just_pressed(keys) {
        out.push(PlacementCommand::Confirm);
    }
    if bindings.cancel.just_pressed(keys) {
        out.push(PlacementCommand::Cancel);
    }
    out
}

pub fn player_actions(keys: &ButtonInput<KeyCode>, bindings: &KeyBindings) -> Vec<PlayerAction> {
    let mut out = Vec::new();
    if bindings.strike.just_pressed(keys) {
        out.push(PlayerAction::Strike);
    }
    if bindings.pick_up.just_pressed(keys) {
        out.push(PlayerAction::PickUp);
    }
    if bindings.deliver.just_pressed(keys) {
        out.push(PlayerAction::Deliver);
    }
    out
}

/// Walking direction on the ground (x, z). The camera sits behind the player
/// looking along +Z, so screen-right is world -X.
pub fn move_direction(keys: &ButtonInput<KeyCode>, bindings: &KeyBindings) -> Vec2 {
    let held = |a: KeyBinding, b: KeyBinding| a.pressed(keys) || b.pressed(keys);
    let mut dir = Vec2::ZERO;
    if held(bindings.move_forward, bindings.move_forward_alt) {
        dir.y += 1.0;
    }
    if held(bindings.move_back, bindings.move_back_alt) {
        dir.y -= 1.0;
    }
    if held(bindings.move_left, bindings.move_left_alt) {
        dir.x += 1.0;
    }
    if held(bindings.move_right, bindings.move_right_alt) {
        dir.x -= 1.0;
    }
    dir
}

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

pub fn keyboard_placement_input(
    keys: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    mut commands: EventWriter<PlacementCommand>,
) {
    commands.send_batch(placement_commands(&keys, &bindings));
}

/// Mouse confirm/cancel, skipped while egui owns the pointer so clicks on
/// the HUD do not land in the world.
pub fn mouse_placement_input(
    mouse: Res<ButtonInput<MouseButton>>,
    bindings: Res<KeyBindings>,
    mut contexts: EguiContexts,
    mut commands: EventWriter<PlacementCommand>,
) {
    let confirm = mouse.just_pressed(bindings.confirm_mouse);
    let cancel = mouse.just_pressed(bindings.cancel_mouse);
    if !confirm && !cancel {
        return;
    }
    let over_ui = contexts
        .try_ctx_mut()
        .is_some_and(|ctx| ctx.wants_pointer_input() || ctx.is_pointer_over_area());
    if over_ui {
        return;
    }
    if confirm {
        commands.send(PlacementCommand::Confirm);
    }
    if cancel {
        commands.send(PlacementCommand::Cancel);
    }
}

pub fn keyboard_player_input(
    keys: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    mut intent: ResMut<MoveIntent>,
    mut actions: EventWriter<PlayerAction>,
) {
    let dir = move_direction(&keys, &bindings);
    if intent.0 != dir {
        intent.0 = dir;
    }
    actions.send_batch(player_actions(&keys, &bindings));
}
