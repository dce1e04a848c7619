use std::cmp::Reverse;

use super::oracle::{CapacityOracle, UnitId, UnitTraits};

/// Units that can be carried, heaviest first. Equal costs keep input order.
pub fn sort_by_transport_cost_descending<U, T>(traits: &T, units: &[U]) -> Vec<U>
where
    U: UnitId,
    T: UnitTraits<U>,
{
    let mut cargo = filter_transportable(traits, units);
    cargo.sort_by_key(|unit| Reverse(traits.unit_cost(*unit)));
    cargo
}

/// Units that can carry, most free capacity first, then most movement left.
pub fn sort_by_capacity_then_movement_descending<U, C, T>(
    capacity: &C,
    traits: &T,
    transports: &[U],
) -> Vec<U>
where
    U: UnitId,
    C: CapacityOracle<U>,
    T: UnitTraits<U>,
{
    let mut carriers = filter_transports(traits, transports);
    carriers.sort_by_key(|transport| {
        (
            Reverse(capacity.available_capacity(*transport)),
            Reverse(traits.movement_remaining(*transport)),
        )
    });
    carriers
}

pub fn filter_transportable<U: UnitId, T: UnitTraits<U>>(traits: &T, units: &[U]) -> Vec<U> {
    units
        .iter()
        .copied()
        .filter(|unit| traits.can_be_transported(*unit))
        .collect()
}

pub fn filter_transports<U: UnitId, T: UnitTraits<U>>(traits: &T, units: &[U]) -> Vec<U> {
    units
        .iter()
        .copied()
        .filter(|unit| traits.can_transport(*unit))
        .collect()
}

/// Sum of transport costs, saturating at `u32::MAX`; an empty collection
/// costs nothing
pub fn total_transport_cost<U: UnitId, T: UnitTraits<U>>(traits: &T, units: &[U]) -> u32 {
    units
        .iter()
        .fold(0u32, |total, unit| total.saturating_add(traits.unit_cost(*unit)))
}

/// First unit in `units` equivalent to `unit`
pub fn find_equivalent<U, T>(traits: &T, unit: U, units: impl IntoIterator<Item = U>) -> Option<U>
where
    U: UnitId,
    T: UnitTraits<U>,
{
    units
        .into_iter()
        .find(|candidate| traits.is_equivalent(*candidate, unit))
}
