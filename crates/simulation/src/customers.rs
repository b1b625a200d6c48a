// ---------------------------------------------------------------------------
// customers – Tables that seat a customer, wait for food and pay
// ---------------------------------------------------------------------------
//
// Each table cycles Vacant -> Waiting -> Cooldown -> Vacant. A vacant table
// seats a new customer on the same tick. Deliveries are handled before the
// clocks advance, so food that arrives on the last tick of patience counts.

use bevy::prelude::*;

use crate::features::{feature_enabled, DisabledFeatures, Feature};
use crate::food::FoodKind;
use crate::game_params::{CustomerParams, GameParams};
use crate::session::Wallet;
use crate::sim_rng::SimRng;
use crate::SimulationSet;

#[derive(Debug, Clone)]
pub enum TableState {
    Vacant,
    Waiting { demand: FoodKind, patience: Timer },
    Cooldown(Timer),
}

#[derive(Component, Debug, Clone)]
pub struct CustomerTable {
    pub state: TableState,
}

impl Default for CustomerTable {
    fn default() -> Self {
        Self {
            state: TableState::Vacant,
        }
    }
}

impl CustomerTable {
    /// What the seated customer wants, if anyone is seated.
    pub fn demand(&self) -> Option<FoodKind> {
        match &self.state {
            TableState::Waiting { demand, .. } => Some(*demand),
            _ => None,
        }
    }

    /// Seconds of patience left for the seated customer.
    pub fn patience_left(&self) -> Option<f32> {
        match &self.state {
            TableState::Waiting { patience, .. } => Some(patience.remaining_secs()),
            _ => None,
        }
    }

    fn seat(&mut self, demand: FoodKind, params: &CustomerParams) {
        self.state = TableState::Waiting {
            demand,
            patience: Timer::from_seconds(params.wait_secs, TimerMode::Once),
        };
    }

    fn start_cooldown(&mut self, params: &CustomerParams) {
        self.state =
            TableState::Cooldown(Timer::from_seconds(params.table_cooldown_secs, TimerMode::Once));
    }
}

/// Food handed to a table by the player.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoodDelivered {
    pub table: Entity,
    pub food: FoodKind,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomerArrived {
    pub table: Entity,
    pub demand: FoodKind,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomerServed {
    pub table: Entity,
    pub food: FoodKind,
    pub payment: i64,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomerLeft {
    pub table: Entity,
    pub demand: FoodKind,
    pub penalty: i64,
}

/// Outcome of handing food to a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    NoCustomer,
    WrongFood { wanted: FoodKind },
    Served,
}

/// Resolve a delivery against a table, moving it to cooldown when served.
pub fn deliver_to_table(
    table: &mut CustomerTable,
    food: FoodKind,
    params: &CustomerParams,
) -> DeliveryOutcome {
    let Some(wanted) = table.demand() else {
        return DeliveryOutcome::NoCustomer;
    };
    if wanted != food {
        return DeliveryOutcome::WrongFood { wanted };
    }
    table.start_cooldown(params);
    DeliveryOutcome::Served
}

fn handle_food_deliveries(
    mut deliveries: EventReader<FoodDelivered>,
    params: Res<GameParams>,
    wallet: Option<ResMut<Wallet>>,
    mut disabled: ResMut<DisabledFeatures>,
    mut tables: Query<&mut CustomerTable>,
    mut served: EventWriter<CustomerServed>,
) {
    let Some(mut wallet) = wallet else {
        disabled.disable(Feature::CustomerTables, "no Wallet resource");
        return;
    };
    for delivery in deliveries.read() {
        let Ok(mut table) = tables.get_mut(delivery.table) else {
            warn!("FoodDelivered to {:?}, which is not a table", delivery.table);
            continue;
        };
        match deliver_to_table(&mut table, delivery.food, &params.customers) {
            DeliveryOutcome::NoCustomer => {
                info!("No customer to serve at table {:?}", delivery.table);
            }
            DeliveryOutcome::WrongFood { wanted } => {
                info!(
                    "Customer at {:?} wanted {} but got {}",
                    delivery.table, wanted, delivery.food
                );
            }
            DeliveryOutcome::Served => {
                let payment = params.customers.payment;
                wallet.add(payment);
                info!(
                    "Customer at {:?} served {}, +{} pebbles",
                    delivery.table, delivery.food, payment
                );
                served.send(CustomerServed {
                    table: delivery.table,
                    food: delivery.food,
                    payment,
                });
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn update_customer_tables(
    time: Res<Time>,
    params: Res<GameParams>,
    mut rng: ResMut<SimRng>,
    wallet: Option<ResMut<Wallet>>,
    mut disabled: ResMut<DisabledFeatures>,
    mut tables: Query<(Entity, &mut CustomerTable)>,
    mut arrived: EventWriter<CustomerArrived>,
    mut left: EventWriter<CustomerLeft>,
) {
    let Some(mut wallet) = wallet else {
        disabled.disable(Feature::CustomerTables, "no Wallet resource");
        return;
    };
    let customers = &params.customers;
    for (entity, mut table) in &mut tables {
        let mut expired = None;
        let mut cooled_down = false;
        match &mut table.state {
            TableState::Vacant => {}
            TableState::Waiting { demand, patience } => {
                patience.tick(time.delta());
                if patience.finished() {
                    expired = Some(*demand);
                }
            }
            TableState::Cooldown(timer) => {
                timer.tick(time.delta());
                cooled_down = timer.finished();
            }
        }

        if cooled_down {
            debug!("Table {:?} is ready for the next customer", entity);
            table.state = TableState::Vacant;
        }

        if let Some(demand) = expired {
            wallet.add(customers.penalty);
            info!(
                "Customer at {:?} left without {}, {} pebbles",
                entity, demand, customers.penalty
            );
            left.send(CustomerLeft {
                table: entity,
                demand,
                penalty: customers.penalty,
            });
            table.start_cooldown(customers);
        }

        if matches!(table.state, TableState::Vacant) {
            let Some(demand) = rng.pick(&FoodKind::ALL) else {
                continue;
            };
            table.seat(demand, customers);
            debug!("Customer seated at {:?} and wants {}", entity, demand);
            arrived.send(CustomerArrived {
                table: entity,
                demand,
            });
        }
    }
}

pub struct CustomersPlugin;

impl Plugin for CustomersPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DisabledFeatures>()
            .add_event::<FoodDelivered>()
            .add_event::<CustomerArrived>()
            .add_event::<CustomerServed>()
            .add_event::<CustomerLeft>()
            .add_systems(
                Update,
                (handle_food_deliveries, update_customer_tables)
                    .chain()
                    .in_set(SimulationSet::Simulation)
                    .run_if(feature_enabled(Feature::CustomerTables)),
            );
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn customers_test_app() -> App {
        let mut app = App::new();
        app.init_resource::<GameParams>()
            .init_resource::<Time>()
            .init_resource::<Wallet>()
            .init_resource::<DisabledFeatures>()
            .insert_resource(SimRng::from_seed_u64(7))
            .add_plugins(CustomersPlugin);
        app
    }

    fn advance(app: &mut App, secs: f32) {
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(secs));
        app.update();
    }

    fn pebbles(app: &App) -> i64 {
        app.world().resource::<Wallet>().pebbles
    }

    fn demand_of(app: &App, table: Entity) -> Option<FoodKind> {
        app.world().get::<CustomerTable>(table).and_then(|t| t.demand())
    }

    fn wrong_food(wanted: FoodKind) -> FoodKind {
        FoodKind::ALL
            .into_iter()
            .find(|f| *f != wanted)
            .expect("more than one food kind")
    }

    #[test]
    fn test_delivery_outcomes() {
        let params = CustomerParams::default();
        let mut table = CustomerTable::default();
        assert_eq!(
            deliver_to_table(&mut table, FoodKind::FizzPie, &params),
            DeliveryOutcome::NoCustomer
        );

        table.seat(FoodKind::FoamSoup, &params);
        assert_eq!(
            deliver_to_table(&mut table, FoodKind::FizzPie, &params),
            DeliveryOutcome::WrongFood {
                wanted: FoodKind::FoamSoup
            }
        );
        assert_eq!(table.demand(), Some(FoodKind::FoamSoup));

        assert_eq!(
            deliver_to_table(&mut table, FoodKind::FoamSoup, &params),
            DeliveryOutcome::Served
        );
        assert!(matches!(table.state, TableState::Cooldown(_)));
    }

    #[test]
    fn test_system_vacant_table_seats_customer() {
        let mut app = customers_test_app();
        let table = app.world_mut().spawn(CustomerTable::default()).id();
        app.update();

        let demand = demand_of(&app, table).expect("customer seated");
        let events = app.world().resource::<Events<CustomerArrived>>();
        let mut reader = events.get_cursor();
        let arrived: Vec<_> = reader.read(events).copied().collect();
        assert_eq!(arrived, vec![CustomerArrived { table, demand }]);
    }

    #[test]
    fn test_system_impatient_customer_costs_penalty() {
        let mut app = customers_test_app();
        let table = app.world_mut().spawn(CustomerTable::default()).id();
        app.update();
        let start = pebbles(&app);

        advance(&mut app, 29.0);
        assert_eq!(pebbles(&app), start);
        assert!(demand_of(&app, table).is_some());

        advance(&mut app, 1.5);
        assert_eq!(pebbles(&app), start - 10);
        assert!(demand_of(&app, table).is_none());

        // Cooldown, then a new customer takes the seat.
        advance(&mut app, 5.0);
        assert!(demand_of(&app, table).is_some());
        assert_eq!(pebbles(&app), start - 10);
    }

    #[test]
    fn test_system_correct_delivery_pays() {
        let mut app = customers_test_app();
        let table = app.world_mut().spawn(CustomerTable::default()).id();
        app.update();
        let demand = demand_of(&app, table).expect("customer seated");
        let start = pebbles(&app);

        app.world_mut().send_event(FoodDelivered {
            table,
            food: demand,
        });
        app.update();

        assert_eq!(pebbles(&app), start + 50);
        assert!(demand_of(&app, table).is_none());
        let events = app.world().resource::<Events<CustomerServed>>();
        let mut reader = events.get_cursor();
        assert_eq!(reader.read(events).count(), 1);
    }

    #[test]
    fn test_system_wrong_food_keeps_customer_waiting() {
        let mut app = customers_test_app();
        let table = app.world_mut().spawn(CustomerTable::default()).id();
        app.update();
        let demand = demand_of(&app, table).expect("customer seated");
        let start = pebbles(&app);

        app.world_mut().send_event(FoodDelivered {
            table,
            food: wrong_food(demand),
        });
        app.update();

        assert_eq!(pebbles(&app), start);
        assert_eq!(demand_of(&app, table), Some(demand));
    }

    #[test]
    fn test_system_missing_wallet_disables_tables() {
        let mut app = customers_test_app();
        app.world_mut().remove_resource::<Wallet>();
        let table = app.world_mut().spawn(CustomerTable::default()).id();
        app.update();
        app.update();

        assert!(demand_of(&app, table).is_none());
        let disabled = app.world().resource::<DisabledFeatures>();
        assert!(!disabled.is_enabled(Feature::CustomerTables));
    }
}
