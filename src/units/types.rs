use bevy::ecs::entity::{EntityMapper, MapEntities};
use bevy::ecs::reflect::ReflectMapEntities;
use bevy::prelude::*;
use bevy_ecs_tilemap::prelude::TilePos;
use serde::{Deserialize, Serialize};

/// Type of military unit
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Reflect, Default, Serialize, Deserialize,
)]
pub enum UnitKind {
    /// Line infantry
    #[default]
    Infantry,
    Cavalry,
    Artillery,
    Armor,
    /// Sea transport for land units
    Troopship,
    /// Warship, carries nothing
    Frigate,
    /// Air transport, only light units fit
    Airship,
    Fighter,
}

/// Static attributes of a unit kind.
///
/// This is the table the allocator reads transport costs and capacities from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect, Serialize, Deserialize)]
pub struct UnitProfile {
    /// Capacity consumed when loaded; zero means the unit cannot be carried
    pub transport_cost: u32,
    pub transport_capacity: u32,
    pub movement: u32,
    pub is_air: bool,
    pub is_transport: bool,
}

impl UnitProfile {
    pub fn can_be_transported(&self) -> bool {
        self.transport_cost > 0
    }

    pub fn can_transport(&self) -> bool {
        self.is_transport && self.transport_capacity > 0
    }

    pub fn is_air_transport(&self) -> bool {
        self.is_air && self.can_transport()
    }
}

impl UnitKind {
    pub const ALL: [UnitKind; 8] = [
        UnitKind::Infantry,
        UnitKind::Cavalry,
        UnitKind::Artillery,
        UnitKind::Armor,
        UnitKind::Troopship,
        UnitKind::Frigate,
        UnitKind::Airship,
        UnitKind::Fighter,
    ];

    pub fn profile(self) -> UnitProfile {
        match self {
            UnitKind::Infantry => land(2, 1),
            UnitKind::Cavalry => land(3, 2),
            UnitKind::Artillery => land(3, 1),
            UnitKind::Armor => land(4, 2),
            UnitKind::Troopship => UnitProfile {
                transport_cost: 0,
                transport_capacity: 6,
                movement: 2,
                is_air: false,
                is_transport: true,
            },
            UnitKind::Frigate => UnitProfile {
                transport_cost: 0,
                transport_capacity: 0,
                movement: 3,
                is_air: false,
                is_transport: false,
            },
            UnitKind::Airship => UnitProfile {
                transport_cost: 0,
                transport_capacity: 2,
                movement: 4,
                is_air: true,
                is_transport: true,
            },
            UnitKind::Fighter => UnitProfile {
                transport_cost: 0,
                transport_capacity: 0,
                movement: 4,
                is_air: true,
                is_transport: false,
            },
        }
    }

    pub fn transport_cost(self) -> u32 {
        self.profile().transport_cost
    }

    pub fn transport_capacity(self) -> u32 {
        self.profile().transport_capacity
    }

    pub fn movement(self) -> u32 {
        self.profile().movement
    }
}

fn land(transport_cost: u32, movement: u32) -> UnitProfile {
    UnitProfile {
        transport_cost,
        transport_capacity: 0,
        movement,
        is_air: false,
        is_transport: false,
    }
}

/// Military unit component
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component, MapEntities)]
#[require(Name)]
pub struct Unit {
    pub kind: UnitKind,
    pub owner: Entity, // Nation entity that owns this unit (remapped via MapEntities)
    pub position: TilePos,
    pub movement_left: u32,
    pub damage: u32,
}

impl MapEntities for Unit {
    fn map_entities<M: EntityMapper>(&mut self, mapper: &mut M) {
        self.owner = mapper.get_mapped(self.owner);
    }
}

impl Unit {
    /// Create a fresh unit with full movement and no damage
    pub fn new(kind: UnitKind, owner: Entity, position: TilePos) -> Self {
        Self {
            kind,
            owner,
            position,
            movement_left: kind.movement(),
            damage: 0,
        }
    }

    pub fn profile(&self) -> UnitProfile {
        self.kind.profile()
    }

    /// Two units are interchangeable when nothing but their identity differs
    pub fn is_equivalent(&self, other: &Unit) -> bool {
        self.kind == other.kind
            && self.owner == other.owner
            && self.movement_left == other.movement_left
            && self.damage == other.damage
    }
}

/// Relationship from a loaded unit to the transport carrying it.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Reflect)]
#[reflect(Component)]
#[relationship(relationship_target = Cargo)]
pub struct TransportedBy(pub Entity);

/// Auto-maintained list of units aboard a transport, in load order.
#[derive(Component, Clone, Debug, Default, Reflect)]
#[reflect(Component)]
#[relationship_target(relationship = TransportedBy)]
pub struct Cargo(Vec<Entity>);

impl Cargo {
    pub fn units(&self) -> &[Entity] {
        &self.0
    }
}
