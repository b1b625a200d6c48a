//! In-game heads-up display: pebbles, round clock, what the player carries,
//! the placement hint while dragging, and the game-over banner.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use simulation::brewing::BubbleVat;
use simulation::features::{DisabledFeatures, Feature};
use simulation::food::FoodKind;
use simulation::game_params::GameParams;
use simulation::keybindings::KeyBindings;
use simulation::placement::{DragPreview, PlacementPreview};
use simulation::player::Player;
use simulation::session::{GameOver, SessionClock, Wallet};

/// Final message, latched when the round ends.
#[derive(Resource, Default, Debug, Clone, PartialEq, Eq)]
pub struct GameOverBanner(pub Option<String>);

pub fn pebbles_text(wallet: &Wallet) -> String {
    format!("Pebbles: {}", wallet.pebbles)
}

pub fn carrying_text(carrying: Option<FoodKind>) -> String {
    match carrying {
        Some(food) => format!("Carrying: {}", food),
        None => "Hands free".to_string(),
    }
}

/// One line per drag: what, which way, and whether it fits.
pub fn drag_hint(preview: &PlacementPreview, bindings: &KeyBindings) -> String {
    let status = if preview.is_valid() {
        format!("{} to place", bindings.confirm.display_label())
    } else {
        format!("blocked by {} cell(s)", preview.blocked.len())
    };
    format!(
        "{} ({}°): {}, {} to rotate, {} to cancel",
        preview.kind,
        preview.rotation.degrees(),
        status,
        bindings.rotate.display_label(),
        bindings.cancel.display_label()
    )
}

pub fn latch_game_over(mut events: EventReader<GameOver>, mut banner: ResMut<GameOverBanner>) {
    if let Some(event) = events.read().last() {
        banner.0 = Some(event.message());
    }
}

#[allow(clippy::too_many_arguments)]
pub fn hud_ui(
    mut contexts: EguiContexts,
    wallet: Option<Res<Wallet>>,
    clock: Option<Res<SessionClock>>,
    params: Res<GameParams>,
    bindings: Res<KeyBindings>,
    preview: Res<DragPreview>,
    players: Query<&Player>,
    vats: Query<&BubbleVat>,
    mut disabled: ResMut<DisabledFeatures>,
) {
    let (Some(wallet), Some(clock)) = (wallet, clock) else {
        disabled.disable(Feature::Hud, "session resources missing");
        return;
    };
    let ctx = contexts.ctx_mut();

    egui::Window::new("Tavern")
        .anchor(egui::Align2::LEFT_TOP, [12.0, 12.0])
        .resizable(false)
        .collapsible(false)
        .title_bar(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(pebbles_text(&wallet));
                ui.separator();
                ui.heading(clock.display());
            });
            if let Ok(player) = players.get_single() {
                ui.label(carrying_text(player.carrying));
            }
            for vat in &vats {
                let fill = vat.level / params.bubbles.max_level.max(1.0);
                let text = if vat.is_ready(&params.bubbles) {
                    format!("{} ready", vat.produces)
                } else {
                    vat.produces.label().to_string()
                };
                ui.add(egui::ProgressBar::new(fill).text(text));
            }
        });

    if let Some(preview) = &preview.0 {
        egui::TopBottomPanel::bottom("placement_hint").show(ctx, |ui| {
            ui.label(drag_hint(preview, &bindings));
        });
    }
}

pub fn game_over_ui(mut contexts: EguiContexts, banner: Res<GameOverBanner>) {
    let Some(message) = &banner.0 else {
        return;
    };
    egui::Window::new("Closing time")
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .resizable(false)
        .collapsible(false)
        .show(contexts.ctx_mut(), |ui| {
            ui.heading(message);
        });
}
