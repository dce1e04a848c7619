use bevy::prelude::*;
use bevy_ecs_tilemap::prelude::TilePos;
use troop_transport::LogicPlugins;
use troop_transport::units::{TransportedBy, Unit, UnitKind};

/// Headless app with unit and transport logic
pub fn transport_app() -> App {
    let mut app = App::new();
    app.add_plugins(LogicPlugins);
    app
}

pub fn spawn_unit(app: &mut App, kind: UnitKind, owner: Entity, position: TilePos) -> Entity {
    app.world_mut().spawn(Unit::new(kind, owner, position)).id()
}

/// Spawns a unit aboard `transport`, on the transport's tile
pub fn spawn_loaded(app: &mut App, kind: UnitKind, owner: Entity, transport: Entity) -> Entity {
    let position = app
        .world()
        .get::<Unit>(transport)
        .map(|unit| unit.position)
        .unwrap_or(TilePos { x: 0, y: 0 });
    app.world_mut()
        .spawn((Unit::new(kind, owner, position), TransportedBy(transport)))
        .id()
}

/// Write one message and run a frame
pub fn send<M: Message>(app: &mut App, message: M) {
    app.world_mut().resource_mut::<Messages<M>>().write(message);
    app.update();
}

/// Everything of type `M` written so far
pub fn drain<M: Message>(app: &mut App) -> Vec<M> {
    app.world_mut()
        .resource_mut::<Messages<M>>()
        .drain()
        .collect()
}
