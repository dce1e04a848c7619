//! ECS-backed view of units and cargo for the transport allocator.
//!
//! Built once per batch of requests so that every request in the batch sees
//! the same capacities, no matter how the world changes in between.

use bevy::prelude::*;
use bevy_ecs_tilemap::prelude::TilePos;
use std::collections::HashMap;

use super::error::TransportError;
use super::oracle::{CapacityOracle, UnitTraits};
use super::sorting::total_transport_cost;
use crate::units::{Cargo, TransportedBy, Unit, UnitKind};

/// Row shape of the query a snapshot is built from
pub type UnitQueryItem<'a> = (
    Entity,
    &'a Unit,
    Option<&'a Cargo>,
    Option<&'a TransportedBy>,
);

#[derive(Debug, Clone, Default)]
pub struct TransportSnapshot {
    units: HashMap<Entity, Unit>,
    cargo: HashMap<Entity, Vec<Entity>>,
    carriers: HashMap<Entity, Entity>,
}

impl TransportSnapshot {
    pub fn from_units<'a>(rows: impl IntoIterator<Item = UnitQueryItem<'a>>) -> Self {
        let mut snapshot = Self::default();
        for (entity, unit, cargo, transported_by) in rows {
            snapshot.units.insert(entity, unit.clone());
            if let Some(cargo) = cargo {
                snapshot.cargo.insert(entity, cargo.units().to_vec());
            }
            if let Some(TransportedBy(carrier)) = transported_by {
                snapshot.carriers.insert(entity, *carrier);
            }
        }
        snapshot
    }

    pub fn from_query(
        query: &Query<(Entity, &Unit, Option<&Cargo>, Option<&TransportedBy>)>,
    ) -> Self {
        Self::from_units(query.iter())
    }

    pub fn unit(&self, entity: Entity) -> Option<&Unit> {
        self.units.get(&entity)
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.units.contains_key(&entity)
    }

    /// Units standing on `position`, loaded or not, in entity order
    pub fn units_at(&self, position: TilePos) -> Vec<Entity> {
        let mut found: Vec<Entity> = self
            .units
            .iter()
            .filter(|(_, unit)| unit.position == position)
            .map(|(entity, _)| *entity)
            .collect();
        found.sort();
        found
    }

    /// Check that a request only names known units and capable transports
    pub fn validate_request(
        &self,
        units: &[Entity],
        transports: &[Entity],
    ) -> Result<(), TransportError> {
        for entity in units.iter().chain(transports) {
            if !self.contains(*entity) {
                return Err(TransportError::UnknownUnit(*entity));
            }
        }
        for transport in transports {
            if !self.can_transport(*transport) {
                return Err(TransportError::NotATransport(*transport));
            }
        }
        Ok(())
    }

    fn kind(&self, entity: Entity) -> Option<UnitKind> {
        self.units.get(&entity).map(|unit| unit.kind)
    }
}

impl CapacityOracle<Entity> for TransportSnapshot {
    fn available_capacity(&self, transport: Entity) -> u32 {
        let Some(kind) = self.kind(transport) else {
            return 0;
        };
        let used: u32 = self
            .cargo
            .get(&transport)
            .map(|aboard| total_transport_cost(self, aboard))
            .unwrap_or(0);
        kind.transport_capacity().saturating_sub(used)
    }

    fn cargo_of(&self, transport: Entity) -> Vec<Entity> {
        self.cargo.get(&transport).cloned().unwrap_or_default()
    }

    fn carrier_of(&self, unit: Entity) -> Option<Entity> {
        self.carriers.get(&unit).copied()
    }
}

impl UnitTraits<Entity> for TransportSnapshot {
    /// `None` for entities that are not units
    type Kind = Option<UnitKind>;

    fn unit_type(&self, unit: Entity) -> Self::Kind {
        self.kind(unit)
    }

    fn transport_cost(&self, kind: Self::Kind) -> u32 {
        kind.map(UnitKind::transport_cost).unwrap_or(0)
    }

    fn transport_capacity(&self, kind: Self::Kind) -> u32 {
        kind.map(UnitKind::transport_capacity).unwrap_or(0)
    }

    fn movement_remaining(&self, unit: Entity) -> u32 {
        self.units
            .get(&unit)
            .map(|unit| unit.movement_left)
            .unwrap_or(0)
    }

    fn can_be_transported(&self, unit: Entity) -> bool {
        self.units
            .get(&unit)
            .is_some_and(|unit| unit.profile().can_be_transported())
    }

    fn can_transport(&self, unit: Entity) -> bool {
        self.units
            .get(&unit)
            .is_some_and(|unit| unit.profile().can_transport())
    }

    fn is_air_transport(&self, unit: Entity) -> bool {
        self.units
            .get(&unit)
            .is_some_and(|unit| unit.profile().is_air_transport())
    }

    fn is_equivalent(&self, a: Entity, b: Entity) -> bool {
        if a == b {
            return self.contains(a);
        }
        match (self.units.get(&a), self.units.get(&b)) {
            (Some(a), Some(b)) => a.is_equivalent(b),
            _ => false,
        }
    }
}
