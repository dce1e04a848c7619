use std::collections::HashSet;

use bevy::prelude::*;

use super::{TransportAllocator, TransportMapping};
use crate::transport::oracle::{CapacityOracle, UnitId, UnitTraits};
use crate::transport::sorting::{filter_transportable, filter_transports, find_equivalent};

/// Unresolved manifest units with the transports each could unload from.
/// Order matters: ties are always broken by position in this list.
type UnloadOptions<U> = Vec<(U, Vec<U>)>;

impl<C, T> TransportAllocator<'_, C, T> {
    /// Report the current carrier of every already-loaded unit, restricted
    /// to carriers among `transports`.
    pub fn map_transports_already_loaded<U>(
        &self,
        units: &[U],
        transports: &[U],
    ) -> TransportMapping<U>
    where
        U: UnitId,
        C: CapacityOracle<U>,
        T: UnitTraits<U>,
    {
        let carriers: HashSet<U> = filter_transports(self.traits, transports)
            .into_iter()
            .collect();

        filter_transportable(self.traits, units)
            .into_iter()
            .filter_map(|unit| {
                self.capacity
                    .carrier_of(unit)
                    .filter(|transport| carriers.contains(transport))
                    .map(|transport| (unit, transport))
            })
            .collect()
    }

    /// Pick a small set of transports whose cargo covers every unit of the
    /// manifest, treating equivalent units as interchangeable.
    ///
    /// Greedy set cover: the unit with the fewest options is resolved first,
    /// from the transport whose passengers are on average the most
    /// constrained themselves.
    pub fn find_min_transports_to_unload<U>(&self, units: &[U], transports: &[U]) -> HashSet<U>
    where
        U: UnitId,
        C: CapacityOracle<U>,
        T: UnitTraits<U>,
    {
        let mut result = HashSet::new();
        let mut options = self.unload_options(units, transports);
        while !options.is_empty() {
            options.sort_by_key(|(_, candidates)| candidates.len());

            let (unit, candidates) = &options[0];
            let Some(selected) = self.optimal_transport_to_unload_from(candidates, &options)
            else {
                debug!("No remaining candidate transports for {:?}, skipping", unit);
                options.remove(0);
                continue;
            };

            trace!("Unloading from {:?} to cover {:?}", selected, unit);
            self.remove_transport_and_loaded_units(selected, &mut options);
            result.insert(selected);
        }
        result
    }

    fn unload_options<U>(&self, units: &[U], transports: &[U]) -> UnloadOptions<U>
    where
        U: UnitId,
        C: CapacityOracle<U>,
        T: UnitTraits<U>,
    {
        let carriers = filter_transports(self.traits, transports);
        let cargo: Vec<(U, Vec<U>)> = carriers
            .iter()
            .map(|transport| (*transport, self.capacity.cargo_of(*transport)))
            .collect();

        filter_transportable(self.traits, units)
            .into_iter()
            .map(|unit| {
                let candidates = cargo
                    .iter()
                    .filter(|(_, aboard)| {
                        find_equivalent(self.traits, unit, aboard.iter().copied()).is_some()
                    })
                    .map(|(transport, _)| *transport)
                    .collect();
                (unit, candidates)
            })
            .collect()
    }

    /// Lowest average option count per passenger wins; a transport carrying
    /// anything no longer needed is never preferred. Falls back to the first
    /// candidate, `None` only when there are no candidates.
    fn optimal_transport_to_unload_from<U>(
        &self,
        candidates: &[U],
        options: &UnloadOptions<U>,
    ) -> Option<U>
    where
        U: UnitId,
        C: CapacityOracle<U>,
        T: UnitTraits<U>,
    {
        let mut selected = *candidates.first()?;
        let mut min_average = f64::INFINITY;
        for transport in candidates {
            let aboard = self.capacity.cargo_of(*transport);
            let Some(total) = self.transport_options_score(&aboard, options) else {
                continue;
            };
            let average = f64::from(total) / aboard.len() as f64;
            if average < min_average {
                min_average = average;
                selected = *transport;
            }
        }
        Some(selected)
    }

    /// Sum of option counts of the unresolved units matching `aboard`, or
    /// `None` if some passenger matches nothing unresolved
    fn transport_options_score<U>(&self, aboard: &[U], options: &UnloadOptions<U>) -> Option<u32>
    where
        U: UnitId,
        T: UnitTraits<U>,
    {
        aboard.iter().try_fold(0u32, |total, loaded| {
            let (_, candidates) = options
                .iter()
                .find(|(unit, _)| self.traits.is_equivalent(*unit, *loaded))?;
            Some(total.saturating_add(candidates.len() as u32))
        })
    }

    fn remove_transport_and_loaded_units<U>(&self, transport: U, options: &mut UnloadOptions<U>)
    where
        U: UnitId,
        C: CapacityOracle<U>,
        T: UnitTraits<U>,
    {
        for loaded in self.capacity.cargo_of(transport) {
            if let Some(index) = options
                .iter()
                .position(|(unit, _)| self.traits.is_equivalent(*unit, loaded))
            {
                options.remove(index);
            }
        }
        for (_, candidates) in options.iter_mut() {
            candidates.retain(|candidate| *candidate != transport);
        }
    }
}
