use bevy::prelude::*;

use simulation::brewing::{BubbleVat, VatReadyChanged};
use simulation::buildings::{BuildingKind, PlacedBuilding};
use simulation::config::LOT_WORLD_SIZE;
use simulation::customers::CustomerTable;
use simulation::food::FoodKind;
use simulation::game_params::GameParams;
use simulation::player::Player;

/// Where the tavern floor props stand.
const VAT_POSITIONS: [Vec3; 3] = [
    Vec3::new(-4.0, 0.0, 6.0),
    Vec3::new(0.0, 0.0, 7.0),
    Vec3::new(4.0, 0.0, 6.0),
];
const TABLE_POSITIONS: [Vec3; 2] = [Vec3::new(-6.0, 0.0, -3.0), Vec3::new(6.0, 0.0, -3.0)];
const PLAYER_START: Vec3 = Vec3::new(0.0, 0.0, 0.0);

/// Shared materials swapped at runtime.
#[derive(Resource)]
pub struct SceneMaterials {
    pub vat_idle: Handle<StandardMaterial>,
    pub vat_ready: Handle<StandardMaterial>,
    pub tavern: Handle<StandardMaterial>,
    pub town_hall: Handle<StandardMaterial>,
}

impl SceneMaterials {
    fn building(&self, kind: BuildingKind) -> Handle<StandardMaterial> {
        match kind {
            BuildingKind::Tavern => self.tavern.clone(),
            BuildingKind::TownHall => self.town_hall.clone(),
        }
    }
}

pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    params: Res<GameParams>,
) {
    let scene = SceneMaterials {
        vat_idle: materials.add(Color::srgb(0.35, 0.45, 0.7)),
        vat_ready: materials.add(Color::srgb(0.4, 0.9, 1.0)),
        tavern: materials.add(Color::srgb(0.6, 0.4, 0.25)),
        town_hall: materials.add(Color::srgb(0.75, 0.72, 0.65)),
    };

    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(LOT_WORLD_SIZE, LOT_WORLD_SIZE))),
        MeshMaterial3d(materials.add(Color::srgb(0.3, 0.5, 0.3))),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(8.0, 16.0, -4.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        Player::default(),
        Mesh3d(meshes.add(Capsule3d::new(0.35, 1.0))),
        MeshMaterial3d(materials.add(Color::srgb(0.9, 0.75, 0.3))),
        Transform::from_translation(PLAYER_START + Vec3::Y * 0.85),
    ));

    let vat_mesh = meshes.add(Cylinder::new(0.6, 1.2));
    for (pos, food) in VAT_POSITIONS.into_iter().zip(FoodKind::ALL) {
        commands.spawn((
            BubbleVat::new(food, &params.bubbles),
            Mesh3d(vat_mesh.clone()),
            MeshMaterial3d(scene.vat_idle.clone()),
            Transform::from_translation(pos + Vec3::Y * 0.6),
            Name::new(format!("{} vat", food)),
        ));
    }

    let table_mesh = meshes.add(Cuboid::new(1.4, 0.8, 1.4));
    let table_material = materials.add(Color::srgb(0.5, 0.3, 0.2));
    for pos in TABLE_POSITIONS {
        commands.spawn((
            CustomerTable::default(),
            Mesh3d(table_mesh.clone()),
            MeshMaterial3d(table_material.clone()),
            Transform::from_translation(pos + Vec3::Y * 0.4),
        ));
    }

    commands.insert_resource(scene);
}

/// Give newly committed buildings a body. The entity sits on the ground, so
/// the box is raised by half its height.
pub fn spawn_building_meshes(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    scene: Res<SceneMaterials>,
    added: Query<(Entity, &PlacedBuilding), Added<PlacedBuilding>>,
) {
    for (entity, building) in &added {
        let size = building.kind.bounding_size();
        let mesh = meshes.add(Cuboid::new(size.x, size.y, size.z));
        commands
            .entity(entity)
            .insert((Visibility::default(), Name::new(building.kind.label())))
            .with_children(|parent| {
                parent.spawn((
                    Mesh3d(mesh),
                    MeshMaterial3d(scene.building(building.kind)),
                    Transform::from_xyz(0.0, size.y * 0.5, 0.0),
                ));
            });
    }
}

/// Light up vats that are ready to pour.
pub fn update_vat_materials(
    mut events: EventReader<VatReadyChanged>,
    scene: Res<SceneMaterials>,
    mut vats: Query<&mut MeshMaterial3d<StandardMaterial>, With<BubbleVat>>,
) {
    for event in events.read() {
        let Ok(mut material) = vats.get_mut(event.vat) else {
            continue;
        };
        material.0 = if event.ready {
            scene.vat_ready.clone()
        } else {
            scene.vat_idle.clone()
        };
    }
}
