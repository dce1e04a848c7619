use std::collections::HashMap;

use bevy::prelude::*;

use super::TransportAllocator;
use crate::transport::oracle::{UnitId, UnitTraits};
use crate::transport::sorting::sort_by_transport_cost_descending;

impl<C, T> TransportAllocator<'_, C, T> {
    /// Largest set of units that could in theory board the air transports
    /// among `transports`, counting whole transport types rather than
    /// individual free capacity. No unit is returned twice.
    pub fn find_units_to_load_on_air_transports<U>(&self, units: &[U], transports: &[U]) -> Vec<U>
    where
        U: UnitId,
        T: UnitTraits<U>,
    {
        let air_transports: Vec<U> = transports
            .iter()
            .copied()
            .filter(|transport| self.traits.is_air_transport(*transport))
            .collect();
        let cargo = sort_by_transport_cost_descending(self.traits, units);

        let unit_types = group_by_type(self.traits, &cargo);
        let transport_types = group_by_type(self.traits, &air_transports);

        let mut taken = vec![false; cargo.len()];
        let mut total_load = Vec::new();
        for (unit_type, _) in &unit_types {
            let cost = self.traits.transport_cost(*unit_type);
            for (transport_type, count) in &transport_types {
                let capacity = self.traits.transport_capacity(*transport_type);
                if cost == 0 || capacity < cost {
                    continue;
                }

                let mut wanted = ((capacity / cost) as usize).saturating_mul(*count);
                for (index, unit) in cargo.iter().enumerate() {
                    if wanted == 0 {
                        break;
                    }
                    if !taken[index] && self.traits.unit_type(*unit) == *unit_type {
                        taken[index] = true;
                        total_load.push(*unit);
                        wanted -= 1;
                    }
                }
            }
        }

        debug!(
            "{} of {} unit(s) fit on {} air transport(s)",
            total_load.len(),
            cargo.len(),
            air_transports.len()
        );
        total_load
    }
}

/// Distinct types in order of first appearance, with their counts
fn group_by_type<U, T>(traits: &T, units: &[U]) -> Vec<(T::Kind, usize)>
where
    U: UnitId,
    T: UnitTraits<U>,
{
    let mut order = Vec::new();
    let mut counts: HashMap<T::Kind, usize> = HashMap::new();
    for unit in units {
        let kind = traits.unit_type(*unit);
        let count = counts.entry(kind).or_insert(0);
        if *count == 0 {
            order.push(kind);
        }
        *count += 1;
    }
    order
        .into_iter()
        .map(|kind| (kind, counts.get(&kind).copied().unwrap_or(0)))
        .collect()
}
