use std::collections::HashMap;

use bevy::prelude::*;

use super::{TransportAllocator, TransportMapping};
use crate::transport::oracle::{CapacityOracle, UnitId, UnitTraits};
use crate::transport::sorting::{
    sort_by_capacity_then_movement_descending, sort_by_transport_cost_descending,
    total_transport_cost,
};

impl<C, T> TransportAllocator<'_, C, T> {
    /// Load as many units as possible, spreading them across transports.
    ///
    /// Heaviest units go first, each into the first transport with room left.
    /// A transport that just received a unit moves to the back of the line.
    /// Units that fit nowhere are left out of the mapping.
    pub fn map_transports_to_load<U>(&self, units: &[U], transports: &[U]) -> TransportMapping<U>
    where
        U: UnitId,
        C: CapacityOracle<U>,
        T: UnitTraits<U>,
    {
        let cargo = sort_by_transport_cost_descending(self.traits, units);
        let mut carriers =
            sort_by_capacity_then_movement_descending(self.capacity, self.traits, transports);

        let mut mapping = TransportMapping::new();
        let mut added_load: HashMap<U, u32> = HashMap::new();
        for unit in cargo {
            let Some(index) = self.first_transport_with_room(unit, &carriers, &added_load) else {
                trace!("No transport has room for {:?}", unit);
                continue;
            };

            let transport = carriers.remove(index);
            *added_load.entry(transport).or_default() += self.traits.unit_cost(unit);
            mapping.insert(unit, transport);
            carriers.push(transport);
        }
        mapping
    }

    /// Load using as few transports as possible.
    ///
    /// Transports are filled to capacity in order until one is found that can
    /// take everything still waiting. Among those, the one with the least free
    /// capacity is kept back and receives the remainder last.
    pub fn map_transports_to_load_using_min_transports<U>(
        &self,
        units: &[U],
        transports: &[U],
    ) -> TransportMapping<U>
    where
        U: UnitId,
        C: CapacityOracle<U>,
        T: UnitTraits<U>,
    {
        let mut cargo = sort_by_transport_cost_descending(self.traits, units);
        let carriers =
            sort_by_capacity_then_movement_descending(self.capacity, self.traits, transports);

        let mut mapping = TransportMapping::new();
        let mut final_transport: Option<(U, u32)> = None;
        for transport in carriers {
            let capacity = self.capacity.available_capacity(transport);
            let remaining_cost = total_transport_cost(self.traits, &cargo);
            if remaining_cost <= capacity {
                // Keep looking for a tighter fit
                if final_transport.is_none_or(|(_, best)| capacity < best) {
                    final_transport = Some((transport, capacity));
                }
                continue;
            }

            if final_transport.is_some() {
                break;
            }

            self.load_max_units(transport, &mut cargo, &mut mapping);
        }

        if let Some((transport, _)) = final_transport {
            self.load_max_units(transport, &mut cargo, &mut mapping);
        }
        mapping
    }

    fn first_transport_with_room<U>(
        &self,
        unit: U,
        carriers: &[U],
        added_load: &HashMap<U, u32>,
    ) -> Option<usize>
    where
        U: UnitId,
        C: CapacityOracle<U>,
        T: UnitTraits<U>,
    {
        let cost = self.traits.unit_cost(unit);
        carriers.iter().position(|transport| {
            let added = added_load.get(transport).copied().unwrap_or(0);
            self.capacity
                .available_capacity(*transport)
                .saturating_sub(added)
                >= cost
        })
    }

    /// Greedily fill one transport, removing loaded units from `cargo`
    fn load_max_units<U>(&self, transport: U, cargo: &mut Vec<U>, mapping: &mut TransportMapping<U>)
    where
        U: UnitId,
        C: CapacityOracle<U>,
        T: UnitTraits<U>,
    {
        let mut capacity = self.capacity.available_capacity(transport);
        cargo.retain(|unit| {
            let cost = self.traits.unit_cost(*unit);
            if capacity >= cost {
                capacity -= cost;
                mapping.insert(*unit, transport);
                false
            } else {
                true
            }
        });
    }
}
