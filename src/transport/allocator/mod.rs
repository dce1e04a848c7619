//! Unit to transport assignment.
//!
//! Five strategies share the sorting helpers in [`super::sorting`]:
//! even distribution and minimal-transport loading ([`load`]), already-loaded
//! lookup and minimal unload sets ([`unload`]), and air-transport capacity
//! matching ([`air`]). Every strategy is a pure function of the oracles and
//! its arguments; per-call capacity bookkeeping lives in local collections.

use std::collections::HashMap;

use bevy::prelude::*;

use super::oracle::{CapacityOracle, UnitId, UnitTraits};
use super::route::Route;
use super::settings::LoadStrategy;
use super::sorting::total_transport_cost;

pub mod air;
pub mod load;
pub mod unload;


/// Carried unit -> carrying transport
pub type TransportMapping<U> = HashMap<U, U>;

/// Borrowing front-end over the capacity and unit-trait oracles.
pub struct TransportAllocator<'a, C, T> {
    capacity: &'a C,
    traits: &'a T,
}

impl<'a, C, T> TransportAllocator<'a, C, T> {
    pub fn new(capacity: &'a C, traits: &'a T) -> Self {
        Self { capacity, traits }
    }
}

impl<'a, S> TransportAllocator<'a, S, S> {
    /// Use one value as both oracles
    pub fn from_snapshot(snapshot: &'a S) -> Self {
        Self::new(snapshot, snapshot)
    }
}

impl<C, T> TransportAllocator<'_, C, T> {
    /// Pick the assignment strategy from the route phase.
    ///
    /// Loading spreads units evenly. Unloading reports the current carriers
    /// of `units` among the units standing on the route origin. Any other move
    /// reports carriers among `units` themselves.
    pub fn map_transports<U>(
        &self,
        route: &Route<U>,
        units: &[U],
        transports_to_load: &[U],
    ) -> TransportMapping<U>
    where
        U: UnitId,
        C: CapacityOracle<U>,
        T: UnitTraits<U>,
    {
        if route.is_load() {
            return self.map_transports_to_load(units, transports_to_load);
        }
        if route.is_unload() {
            return self.map_transports_already_loaded(units, route.origin_units());
        }
        self.map_transports_already_loaded(units, units)
    }

    /// Load with the given strategy
    pub fn map_transports_to_load_with<U>(
        &self,
        strategy: LoadStrategy,
        units: &[U],
        transports: &[U],
    ) -> TransportMapping<U>
    where
        U: UnitId,
        C: CapacityOracle<U>,
        T: UnitTraits<U>,
    {
        match strategy {
            LoadStrategy::EvenDistribution => self.map_transports_to_load(units, transports),
            LoadStrategy::MinTransports => {
                self.map_transports_to_load_using_min_transports(units, transports)
            }
        }
    }

    /// Sum of transport costs of `units`
    pub fn transport_cost<U>(&self, units: &[U]) -> u32
    where
        U: UnitId,
        T: UnitTraits<U>,
    {
        total_transport_cost(self.traits, units)
    }

    /// Transportable units of the manifest that a mapping left behind
    pub fn unassigned<U>(&self, units: &[U], mapping: &TransportMapping<U>) -> Vec<U>
    where
        U: UnitId,
        T: UnitTraits<U>,
    {
        let missing: Vec<U> = units
            .iter()
            .copied()
            .filter(|unit| self.traits.can_be_transported(*unit) && !mapping.contains_key(unit))
            .collect();
        if !missing.is_empty() {
            debug!("{} unit(s) could not be assigned a transport", missing.len());
        }
        missing
    }
}
