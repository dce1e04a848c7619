//! Testing utilities for the transport allocator
//!
//! Two kinds of fixtures live here: ECS helpers that spawn units into a
//! `World`, and [`FixedOracle`], a plain-map oracle for exercising the
//! allocation algorithms without any ECS at all.

use bevy::prelude::*;
use bevy_ecs_tilemap::prelude::TilePos;
use std::collections::HashMap;

use crate::transport::oracle::{CapacityOracle, UnitTraits};
use crate::units::{TransportedBy, Unit, UnitKind};

/// Spawns a unit with full movement on `position`
pub fn spawn_unit(world: &mut World, kind: UnitKind, owner: Entity, position: TilePos) -> Entity {
    world.spawn(Unit::new(kind, owner, position)).id()
}

/// Spawns a unit already aboard `transport`, on the transport's tile
pub fn spawn_loaded(world: &mut World, kind: UnitKind, owner: Entity, transport: Entity) -> Entity {
    let position = world
        .get::<Unit>(transport)
        .map(|unit| unit.position)
        .unwrap_or(TilePos { x: 0, y: 0 });
    world
        .spawn((Unit::new(kind, owner, position), TransportedBy(transport)))
        .id()
}

/// Unit type in a [`FixedOracle`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TestKind {
    pub cost: u32,
    pub capacity: u32,
    pub air: bool,
    pub tag: u32,
}

#[derive(Debug, Clone, Copy)]
struct TestUnit {
    kind: TestKind,
    movement: u32,
    /// Units of the same kind and class are equivalent
    class: u32,
}

/// In-memory oracle with `u32` unit ids handed out in creation order
#[derive(Debug, Default)]
pub struct FixedOracle {
    units: HashMap<u32, TestUnit>,
    cargo: HashMap<u32, Vec<u32>>,
    carriers: HashMap<u32, u32>,
    next_id: u32,
}

impl FixedOracle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_unit(&mut self, kind: TestKind, movement: u32) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.units.insert(
            id,
            TestUnit {
                kind,
                movement,
                class: 0,
            },
        );
        id
    }

    pub fn add_cargo(&mut self, cost: u32) -> u32 {
        self.add_tagged_cargo(cost, 0)
    }

    pub fn add_tagged_cargo(&mut self, cost: u32, tag: u32) -> u32 {
        self.add_unit(
            TestKind {
                cost,
                capacity: 0,
                air: false,
                tag,
            },
            1,
        )
    }

    pub fn add_transport(&mut self, capacity: u32) -> u32 {
        self.add_transport_with_movement(capacity, 0)
    }

    pub fn add_transport_with_movement(&mut self, capacity: u32, movement: u32) -> u32 {
        self.add_unit(
            TestKind {
                cost: 0,
                capacity,
                air: false,
                tag: 0,
            },
            movement,
        )
    }

    pub fn add_air_transport(&mut self, capacity: u32) -> u32 {
        self.add_unit(
            TestKind {
                cost: 0,
                capacity,
                air: true,
                tag: 0,
            },
            4,
        )
    }

    /// Put `unit` aboard `transport`, consuming its capacity
    pub fn load(&mut self, transport: u32, unit: u32) {
        self.cargo.entry(transport).or_default().push(unit);
        self.carriers.insert(unit, transport);
    }

    /// Make `unit` distinguishable from other units of its kind
    pub fn set_class(&mut self, unit: u32, class: u32) {
        if let Some(test_unit) = self.units.get_mut(&unit) {
            test_unit.class = class;
        }
    }

    pub fn cost_of(&self, unit: u32) -> u32 {
        self.unit_cost(unit)
    }

    fn get(&self, unit: u32) -> Option<&TestUnit> {
        self.units.get(&unit)
    }
}

impl CapacityOracle<u32> for FixedOracle {
    fn available_capacity(&self, transport: u32) -> u32 {
        let capacity = self.get(transport).map(|u| u.kind.capacity).unwrap_or(0);
        let used: u32 = self
            .cargo
            .get(&transport)
            .map(|aboard| aboard.iter().map(|unit| self.unit_cost(*unit)).sum())
            .unwrap_or(0);
        capacity.saturating_sub(used)
    }

    fn cargo_of(&self, transport: u32) -> Vec<u32> {
        self.cargo.get(&transport).cloned().unwrap_or_default()
    }

    fn carrier_of(&self, unit: u32) -> Option<u32> {
        self.carriers.get(&unit).copied()
    }
}

impl UnitTraits<u32> for FixedOracle {
    type Kind = Option<TestKind>;

    fn unit_type(&self, unit: u32) -> Self::Kind {
        self.get(unit).map(|u| u.kind)
    }

    fn transport_cost(&self, kind: Self::Kind) -> u32 {
        kind.map(|k| k.cost).unwrap_or(0)
    }

    fn transport_capacity(&self, kind: Self::Kind) -> u32 {
        kind.map(|k| k.capacity).unwrap_or(0)
    }

    fn movement_remaining(&self, unit: u32) -> u32 {
        self.get(unit).map(|u| u.movement).unwrap_or(0)
    }

    fn can_be_transported(&self, unit: u32) -> bool {
        self.get(unit).is_some_and(|u| u.kind.cost > 0)
    }

    fn can_transport(&self, unit: u32) -> bool {
        self.get(unit).is_some_and(|u| u.kind.capacity > 0)
    }

    fn is_air_transport(&self, unit: u32) -> bool {
        self.get(unit)
            .is_some_and(|u| u.kind.air && u.kind.capacity > 0)
    }

    fn is_equivalent(&self, a: u32, b: u32) -> bool {
        match (self.get(a), self.get(b)) {
            (Some(x), Some(y)) => {
                a == b || (x.kind == y.kind && x.class == y.class && x.movement == y.movement)
            }
            _ => false,
        }
    }
}
