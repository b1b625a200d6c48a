// ---------------------------------------------------------------------------
// brewing – Bubble vats that fill when struck and drain over time
// ---------------------------------------------------------------------------

use bevy::prelude::*;

use crate::food::FoodKind;
use crate::game_params::{BubbleParams, GameParams};
use crate::SimulationSet;

/// A vat whose bubble level must be kept high before its food can be taken.
#[derive(Component, Debug, Clone)]
pub struct BubbleVat {
    pub level: f32,
    pub produces: FoodKind,
    pub decay_timer: Timer,
}

impl BubbleVat {
    pub fn new(produces: FoodKind, params: &BubbleParams) -> Self {
        Self {
            level: params.min_level,
            produces,
            decay_timer: Timer::from_seconds(
                params.decay_interval_secs.max(f32::EPSILON),
                TimerMode::Repeating,
            ),
        }
    }

    pub fn is_ready(&self, params: &BubbleParams) -> bool {
        self.level >= params.ready_threshold
    }

    /// Add bubbles from one strike, clamped to the vat's range.
    pub fn strike(&mut self, params: &BubbleParams) {
        self.set_level(self.level + params.increase_amount, params);
    }

    /// Advance the decay countdown. Each whole interval elapsed drains
    /// `decay_rate` once.
    pub fn decay(&mut self, delta: std::time::Duration, params: &BubbleParams) {
        self.decay_timer.tick(delta);
        let intervals = self.decay_timer.times_finished_this_tick();
        if intervals > 0 {
            self.set_level(self.level - params.decay_rate * intervals as f32, params);
        }
    }

    fn set_level(&mut self, level: f32, params: &BubbleParams) {
        self.level = level.clamp(params.min_level, params.max_level);
    }
}

/// The player hit a vat.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct VatStruck {
    pub vat: Entity,
}

/// A vat crossed the ready threshold in either direction.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct VatReadyChanged {
    pub vat: Entity,
    pub ready: bool,
}

fn apply_vat_strikes(
    mut strikes: EventReader<VatStruck>,
    params: Res<GameParams>,
    mut vats: Query<&mut BubbleVat>,
    mut ready_changed: EventWriter<VatReadyChanged>,
) {
    for strike in strikes.read() {
        let Ok(mut vat) = vats.get_mut(strike.vat) else {
            warn!("VatStruck for {:?}, which is not a bubble vat", strike.vat);
            continue;
        };
        let was_ready = vat.is_ready(&params.bubbles);
        vat.strike(&params.bubbles);
        if vat.is_ready(&params.bubbles) != was_ready {
            ready_changed.send(VatReadyChanged {
                vat: strike.vat,
                ready: !was_ready,
            });
        }
    }
}

fn decay_vats(
    time: Res<Time>,
    params: Res<GameParams>,
    mut vats: Query<(Entity, &mut BubbleVat)>,
    mut ready_changed: EventWriter<VatReadyChanged>,
) {
    for (entity, mut vat) in &mut vats {
        let was_ready = vat.is_ready(&params.bubbles);
        vat.decay(time.delta(), &params.bubbles);
        if vat.is_ready(&params.bubbles) != was_ready {
            ready_changed.send(VatReadyChanged {
                vat: entity,
                ready: !was_ready,
            });
        }
    }
}

pub struct BrewingPlugin;

impl Plugin for BrewingPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<VatStruck>()
            .add_event::<VatReadyChanged>()
            .add_systems(
                Update,
                (apply_vat_strikes, decay_vats)
                    .chain()
                    .in_set(SimulationSet::Simulation),
            );
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn params() -> BubbleParams {
        BubbleParams::default()
    }

    fn brewing_test_app() -> App {
        let mut app = App::new();
        app.init_resource::<GameParams>()
            .init_resource::<Time>()
            .add_plugins(BrewingPlugin);
        app
    }

    fn advance(app: &mut App, secs: f32) {
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(secs));
        app.update();
    }

    fn ready_events(app: &App) -> Vec<VatReadyChanged> {
        let events = app.world().resource::<Events<VatReadyChanged>>();
        let mut reader = events.get_cursor();
        reader.read(events).copied().collect()
    }

    #[test]
    fn test_new_vat_starts_empty() {
        let vat = BubbleVat::new(FoodKind::FoamSoup, &params());
        assert_eq!(vat.level, 0.0);
        assert!(!vat.is_ready(&params()));
    }

    #[test]
    fn test_strikes_clamp_at_max() {
        let p = params();
        let mut vat = BubbleVat::new(FoodKind::BubbleTea, &p);
        for _ in 0..4 {
            vat.strike(&p);
        }
        assert_eq!(vat.level, 80.0);
        assert!(vat.is_ready(&p));
        for _ in 0..10 {
            vat.strike(&p);
        }
        assert_eq!(vat.level, 100.0);
    }

    #[test]
    fn test_decay_counts_whole_seconds_only() {
        let p = params();
        let mut vat = BubbleVat::new(FoodKind::BubbleTea, &p);
        vat.strike(&p);
        vat.decay(Duration::from_millis(600), &p);
        assert_eq!(vat.level, 20.0);
        vat.decay(Duration::from_millis(600), &p);
        assert_eq!(vat.level, 19.0);
        vat.decay(Duration::from_secs(3), &p);
        assert_eq!(vat.level, 16.0);
    }

    #[test]
    fn test_decay_clamps_at_min() {
        let p = params();
        let mut vat = BubbleVat::new(FoodKind::FizzPie, &p);
        vat.decay(Duration::from_secs(10), &p);
        assert_eq!(vat.level, 0.0);
    }

    #[test]
    fn test_system_strike_crosses_ready_threshold() {
        let mut app = brewing_test_app();
        let p = params();
        let vat = app
            .world_mut()
            .spawn(BubbleVat::new(FoodKind::BubbleTea, &p))
            .id();

        for _ in 0..3 {
            app.world_mut().send_event(VatStruck { vat });
        }
        app.update();
        assert_eq!(app.world().get::<BubbleVat>(vat).map(|v| v.level), Some(60.0));
        assert!(ready_events(&app).is_empty());

        app.world_mut().send_event(VatStruck { vat });
        app.update();
        assert_eq!(
            ready_events(&app),
            vec![VatReadyChanged { vat, ready: true }]
        );
    }

    #[test]
    fn test_system_decay_drops_below_ready() {
        let mut app = brewing_test_app();
        let p = params();
        let mut vat_state = BubbleVat::new(FoodKind::FoamSoup, &p);
        vat_state.level = 75.0;
        let vat = app.world_mut().spawn(vat_state).id();

        advance(&mut app, 1.0);
        let level = app.world().get::<BubbleVat>(vat).map(|v| v.level);
        assert_eq!(level, Some(74.0));
        assert_eq!(
            ready_events(&app),
            vec![VatReadyChanged { vat, ready: false }]
        );
    }

    #[test]
    fn test_system_strike_on_non_vat_is_ignored() {
        let mut app = brewing_test_app();
        let not_a_vat = app.world_mut().spawn_empty().id();
        app.world_mut().send_event(VatStruck { vat: not_a_vat });
        app.update();
        assert!(ready_events(&app).is_empty());
    }
}
