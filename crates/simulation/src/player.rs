// ---------------------------------------------------------------------------
// player – Striking vats, picking up food and serving tables
// ---------------------------------------------------------------------------

use bevy::prelude::*;

use crate::brewing::{BubbleVat, VatStruck};
use crate::customers::{CustomerTable, FoodDelivered};
use crate::features::{feature_enabled, DisabledFeatures, Feature};
use crate::food::FoodKind;
use crate::game_params::GameParams;
use crate::session::round_in_progress;
use crate::SimulationSet;

#[derive(Component, Debug, Clone, Default, PartialEq, Eq)]
pub struct Player {
    pub carrying: Option<FoodKind>,
}

/// Edge-triggered interaction requests from the player.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    Strike,
    PickUp,
    Deliver,
}

/// Movement request for the current frame, in world XZ.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct MoveIntent(pub Vec2);

/// Entries within `radius` of `origin`, nearest first.
fn in_range<T: Copy>(
    origin: Vec3,
    radius: f32,
    candidates: impl Iterator<Item = (T, Vec3)>,
) -> Vec<(T, f32)> {
    let mut found: Vec<(T, f32)> = candidates
        .map(|(item, pos)| (item, origin.distance(pos)))
        .filter(|(_, dist)| *dist <= radius)
        .collect();
    found.sort_by(|a, b| a.1.total_cmp(&b.1));
    found
}

#[allow(clippy::too_many_arguments)]
fn handle_player_actions(
    mut actions: EventReader<PlayerAction>,
    params: Res<GameParams>,
    mut disabled: ResMut<DisabledFeatures>,
    mut players: Query<(&Transform, &mut Player)>,
    vats: Query<(Entity, &Transform, &BubbleVat)>,
    tables: Query<(Entity, &Transform), With<CustomerTable>>,
    mut strikes: EventWriter<VatStruck>,
    mut deliveries: EventWriter<FoodDelivered>,
) {
    if actions.is_empty() {
        return;
    }
    let Ok((player_tf, mut player)) = players.get_single_mut() else {
        actions.clear();
        disabled.disable(Feature::PlayerActions, "no single Player entity");
        return;
    };
    let origin = player_tf.translation;
    let radius = params.player.interact_radius;

    for action in actions.read() {
        match action {
            PlayerAction::Strike => {
                let hits = in_range(
                    origin,
                    radius,
                    vats.iter().map(|(e, tf, _)| (e, tf.translation)),
                );
                if hits.is_empty() {
                    debug!("Strike hit nothing");
                }
                for (vat, _) in hits {
                    strikes.send(VatStruck { vat });
                }
            }
            PlayerAction::PickUp => {
                if let Some(food) = player.carrying {
                    info!("Already carrying {}", food);
                    continue;
                }
                let ready = in_range(
                    origin,
                    radius,
                    vats.iter()
                        .filter(|(_, _, vat)| vat.is_ready(&params.bubbles))
                        .map(|(_, tf, vat)| (vat.produces, tf.translation)),
                );
                match ready.first() {
                    Some((food, _)) => {
                        info!("Picked up {}", food);
                        player.carrying = Some(*food);
                    }
                    None => info!("No ready vat in reach"),
                }
            }
            PlayerAction::Deliver => {
                let Some(food) = player.carrying else {
                    info!("Nothing to deliver");
                    continue;
                };
                let nearby = in_range(
                    origin,
                    radius,
                    tables.iter().map(|(e, tf)| (e, tf.translation)),
                );
                match nearby.first() {
                    Some((table, _)) => {
                        deliveries.send(FoodDelivered {
                            table: *table,
                            food,
                        });
                        player.carrying = None;
                    }
                    None => info!("No table in reach"),
                }
            }
        }
    }
}

fn move_player(
    time: Res<Time>,
    params: Res<GameParams>,
    intent: Res<MoveIntent>,
    mut disabled: ResMut<DisabledFeatures>,
    mut players: Query<&mut Transform, With<Player>>,
) {
    if intent.0 == Vec2::ZERO {
        return;
    }
    let Ok(mut transform) = players.get_single_mut() else {
        disabled.disable(Feature::PlayerMovement, "no single Player entity");
        return;
    };
    let step = intent.0.normalize_or_zero() * params.player.move_speed * time.delta_secs();
    transform.translation.x += step.x;
    transform.translation.z += step.y;
}

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DisabledFeatures>()
            .init_resource::<MoveIntent>()
            .add_event::<PlayerAction>()
            .add_systems(
                Update,
                (
                    move_player.run_if(feature_enabled(Feature::PlayerMovement)),
                    handle_player_actions.run_if(feature_enabled(Feature::PlayerActions)),
                )
                    .chain()
                    .in_set(SimulationSet::Input)
                    .run_if(round_in_progress),
            );
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::brewing::BrewingPlugin;
    use crate::customers::{CustomersPlugin, TableState};
    use crate::session::Wallet;
    use crate::sim_rng::SimRng;

    fn player_test_app() -> App {
        let mut app = App::new();
        app.init_resource::<GameParams>()
            .init_resource::<Time>()
            .init_resource::<Wallet>()
            .init_resource::<SimRng>()
            .add_plugins((PlayerPlugin, BrewingPlugin, CustomersPlugin));
        app.configure_sets(
            Update,
            (SimulationSet::Input, SimulationSet::Simulation).chain(),
        );
        app
    }

    fn spawn_player(app: &mut App, at: Vec3, carrying: Option<FoodKind>) -> Entity {
        app.world_mut()
            .spawn((Player { carrying }, Transform::from_translation(at)))
            .id()
    }

    fn spawn_vat(app: &mut App, at: Vec3, food: FoodKind, level: f32) -> Entity {
        let mut vat = BubbleVat::new(food, &GameParams::default().bubbles);
        vat.level = level;
        app.world_mut()
            .spawn((vat, Transform::from_translation(at)))
            .id()
    }

    fn spawn_waiting_table(app: &mut App, at: Vec3, demand: FoodKind) -> Entity {
        let table = CustomerTable {
            state: TableState::Waiting {
                demand,
                patience: Timer::from_seconds(30.0, TimerMode::Once),
            },
        };
        app.world_mut()
            .spawn((table, Transform::from_translation(at)))
            .id()
    }

    fn act(app: &mut App, action: PlayerAction) {
        app.world_mut().send_event(action);
        app.update();
    }

    fn carrying(app: &App, player: Entity) -> Option<FoodKind> {
        app.world().get::<Player>(player).and_then(|p| p.carrying)
    }

    fn vat_level(app: &App, vat: Entity) -> f32 {
        app.world()
            .get::<BubbleVat>(vat)
            .map(|v| v.level)
            .unwrap_or(f32::NAN)
    }

    #[test]
    fn test_in_range_sorts_nearest_first() {
        let found = in_range(
            Vec3::ZERO,
            5.0,
            [(1, Vec3::new(4.0, 0.0, 0.0)), (2, Vec3::new(1.0, 0.0, 0.0)), (3, Vec3::new(9.0, 0.0, 0.0))]
                .into_iter(),
        );
        let ids: Vec<i32> = found.iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_system_strike_hits_only_nearby_vats() {
        let mut app = player_test_app();
        spawn_player(&mut app, Vec3::ZERO, None);
        let near = spawn_vat(&mut app, Vec3::new(2.0, 0.0, 0.0), FoodKind::BubbleTea, 0.0);
        let far = spawn_vat(&mut app, Vec3::new(20.0, 0.0, 0.0), FoodKind::FoamSoup, 0.0);

        act(&mut app, PlayerAction::Strike);
        assert_eq!(vat_level(&app, near), 20.0);
        assert_eq!(vat_level(&app, far), 0.0);
    }

    #[test]
    fn test_system_pick_up_needs_ready_vat() {
        let mut app = player_test_app();
        let player = spawn_player(&mut app, Vec3::ZERO, None);
        spawn_vat(&mut app, Vec3::new(1.0, 0.0, 0.0), FoodKind::FizzPie, 40.0);

        act(&mut app, PlayerAction::PickUp);
        assert_eq!(carrying(&app, player), None);

        spawn_vat(&mut app, Vec3::new(0.0, 0.0, 3.0), FoodKind::FoamSoup, 90.0);
        act(&mut app, PlayerAction::PickUp);
        assert_eq!(carrying(&app, player), Some(FoodKind::FoamSoup));
    }

    #[test]
    fn test_system_pick_up_while_carrying_is_noop() {
        let mut app = player_test_app();
        let player = spawn_player(&mut app, Vec3::ZERO, Some(FoodKind::BubbleTea));
        spawn_vat(&mut app, Vec3::new(1.0, 0.0, 0.0), FoodKind::FizzPie, 100.0);

        act(&mut app, PlayerAction::PickUp);
        assert_eq!(carrying(&app, player), Some(FoodKind::BubbleTea));
    }

    #[test]
    fn test_system_deliver_serves_nearest_table() {
        let mut app = player_test_app();
        let player = spawn_player(&mut app, Vec3::ZERO, Some(FoodKind::FoamSoup));
        let near = spawn_waiting_table(&mut app, Vec3::new(1.0, 0.0, 1.0), FoodKind::FoamSoup);
        let other = spawn_waiting_table(&mut app, Vec3::new(3.0, 0.0, 3.0), FoodKind::FoamSoup);
        let start = app.world().resource::<Wallet>().pebbles;

        act(&mut app, PlayerAction::Deliver);
        assert_eq!(carrying(&app, player), None);
        assert_eq!(app.world().resource::<Wallet>().pebbles, start + 50);
        let near_table = app.world().get::<CustomerTable>(near).map(|t| t.demand());
        let other_table = app.world().get::<CustomerTable>(other).map(|t| t.demand());
        assert_eq!(near_table, Some(None));
        assert_eq!(other_table, Some(Some(FoodKind::FoamSoup)));
    }

    #[test]
    fn test_system_wrong_delivery_still_consumes_food() {
        let mut app = player_test_app();
        let player = spawn_player(&mut app, Vec3::ZERO, Some(FoodKind::FizzPie));
        let table = spawn_waiting_table(&mut app, Vec3::new(1.0, 0.0, 0.0), FoodKind::BubbleTea);
        let start = app.world().resource::<Wallet>().pebbles;

        act(&mut app, PlayerAction::Deliver);
        assert_eq!(carrying(&app, player), None);
        assert_eq!(app.world().resource::<Wallet>().pebbles, start);
        let demand = app.world().get::<CustomerTable>(table).and_then(|t| t.demand());
        assert_eq!(demand, Some(FoodKind::BubbleTea));
    }

    #[test]
    fn test_system_deliver_without_table_keeps_food() {
        let mut app = player_test_app();
        let player = spawn_player(&mut app, Vec3::ZERO, Some(FoodKind::FizzPie));
        spawn_waiting_table(&mut app, Vec3::new(30.0, 0.0, 0.0), FoodKind::FizzPie);

        act(&mut app, PlayerAction::Deliver);
        assert_eq!(carrying(&app, player), Some(FoodKind::FizzPie));
    }

    #[test]
    fn test_system_move_intent_moves_on_xz() {
        let mut app = player_test_app();
        let player = spawn_player(&mut app, Vec3::ZERO, None);
        app.insert_resource(MoveIntent(Vec2::new(1.0, 0.0)));
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs(2));
        app.update();

        let pos = app
            .world()
            .get::<Transform>(player)
            .map(|t| t.translation)
            .unwrap_or(Vec3::NAN);
        assert!((pos - Vec3::new(10.0, 0.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_system_actions_ignored_after_game_over() {
        let mut app = player_test_app();
        app.insert_resource(crate::session::SessionClock {
            remaining_secs: 0.0,
            game_over: true,
        });
        spawn_player(&mut app, Vec3::ZERO, None);
        let vat = spawn_vat(&mut app, Vec3::new(1.0, 0.0, 0.0), FoodKind::BubbleTea, 0.0);

        act(&mut app, PlayerAction::Strike);
        assert_eq!(vat_level(&app, vat), 0.0);
    }

    #[test]
    fn test_system_missing_player_disables_actions() {
        let mut app = player_test_app();
        act(&mut app, PlayerAction::Strike);
        let disabled = app.world().resource::<DisabledFeatures>();
        assert!(!disabled.is_enabled(Feature::PlayerActions));
    }
}
