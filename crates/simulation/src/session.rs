// ---------------------------------------------------------------------------
// session – Round clock, pebble wallet and game over
// ---------------------------------------------------------------------------

use bevy::prelude::*;

use crate::game_params::GameParams;
use crate::SimulationSet;

/// Countdown for the current round.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SessionClock {
    pub remaining_secs: f32,
    pub game_over: bool,
}

impl Default for SessionClock {
    fn default() -> Self {
        Self::new(GameParams::default().session.duration_secs)
    }
}

impl SessionClock {
    pub fn new(duration_secs: f32) -> Self {
        Self {
            remaining_secs: duration_secs,
            game_over: false,
        }
    }

    /// Advance the clock. Returns true on the tick the round ends.
    pub fn tick(&mut self, delta_secs: f32) -> bool {
        if self.game_over {
            return false;
        }
        self.remaining_secs -= delta_secs;
        if self.remaining_secs <= 0.0 {
            self.remaining_secs = 0.0;
            self.game_over = true;
            return true;
        }
        false
    }

    pub fn display(&self) -> String {
        format_clock(self.remaining_secs)
    }
}

/// The player's money ("pebbles").
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct Wallet {
    pub pebbles: i64,
}

impl Default for Wallet {
    fn default() -> Self {
        Self {
            pebbles: GameParams::default().session.starting_pebbles,
        }
    }
}

impl Wallet {
    /// Add (or, with a negative amount, remove) pebbles.
    pub fn add(&mut self, amount: i64) {
        self.pebbles += amount;
    }
}

/// Sent once when the round clock runs out.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOver {
    pub final_score: i64,
}

impl GameOver {
    pub fn message(&self) -> String {
        format!("Game Over! Final Score: {}", self.final_score)
    }
}

/// Format seconds as `MM:SS`, flooring both parts.
pub fn format_clock(secs: f32) -> String {
    let secs = secs.max(0.0);
    let minutes = (secs / 60.0).floor() as u32;
    let seconds = (secs % 60.0).floor() as u32;
    format!("{:02}:{:02}", minutes, seconds)
}

/// Run condition: false once the round has ended. Without a clock the round
/// never ends.
pub fn round_in_progress(clock: Option<Res<SessionClock>>) -> bool {
    clock.is_none_or(|c| !c.game_over)
}

fn tick_session_clock(
    time: Res<Time>,
    mut clock: ResMut<SessionClock>,
    wallet: Res<Wallet>,
    mut game_over: EventWriter<GameOver>,
) {
    if clock.game_over {
        return;
    }
    if clock.tick(time.delta_secs()) {
        let event = GameOver {
            final_score: wallet.pebbles,
        };
        info!("{}", event.message());
        game_over.send(event);
    }
}

/// Freeze gameplay time once the round is over.
fn pause_on_game_over(
    mut events: EventReader<GameOver>,
    virtual_time: Option<ResMut<Time<Virtual>>>,
) {
    if events.read().last().is_none() {
        return;
    }
    if let Some(mut virtual_time) = virtual_time {
        virtual_time.pause();
    }
}

fn init_session_from_params(
    params: Res<GameParams>,
    mut clock: ResMut<SessionClock>,
    mut wallet: ResMut<Wallet>,
) {
    *clock = SessionClock::new(params.session.duration_secs);
    wallet.pebbles = params.session.starting_pebbles;
}

pub struct SessionPlugin;

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SessionClock>()
            .init_resource::<Wallet>()
            .add_event::<GameOver>()
            .add_systems(Startup, init_session_from_params)
            .add_systems(Update, tick_session_clock.in_set(SimulationSet::Simulation))
            .add_systems(
                Update,
                pause_on_game_over
                    .in_set(SimulationSet::PostSim)
                    .after(tick_session_clock),
            );
    }
}
