use std::collections::HashMap;

use bevy::prelude::*;

use super::allocator::TransportAllocator;
use super::error::TransportError;
use super::messages::{
    AirLiftPlanned, AirLiftRequest, ApplyTransportMapping, MapTransportsRequest,
    TransportRequestRejected, TransportsMapped, UnloadPlanRequest, UnloadPlanned,
};
use super::oracle::{CapacityOracle, UnitTraits};
use super::route::Route;
use super::settings::TransportSettings;
use super::snapshot::TransportSnapshot;
use crate::units::{Cargo, TransportedBy, Unit};

type UnitQuery<'w, 's> = Query<
    'w,
    's,
    (
        Entity,
        &'static Unit,
        Option<&'static Cargo>,
        Option<&'static TransportedBy>,
    ),
>;

/// Resolve every pending [`MapTransportsRequest`] against one snapshot
pub fn resolve_transport_requests(
    mut requests: MessageReader<MapTransportsRequest>,
    units: UnitQuery,
    settings: Res<TransportSettings>,
    mut mapped: MessageWriter<TransportsMapped>,
    mut rejected: MessageWriter<TransportRequestRejected>,
) {
    if requests.is_empty() {
        return;
    }
    let snapshot = TransportSnapshot::from_query(&units);
    let allocator = TransportAllocator::from_snapshot(&snapshot);

    for request in requests.read() {
        let route = Route::new(
            request.route.from,
            request.route.to,
            request.route.phase,
            snapshot.units_at(request.route.from),
        );
        let transports: &[Entity] = if route.is_load() {
            &request.transports
        } else {
            &[]
        };
        if let Err(error) = snapshot.validate_request(&request.units, transports) {
            warn!("Rejected transport request: {}", error);
            rejected.write(TransportRequestRejected { error });
            continue;
        }

        let mapping = if route.is_load() {
            allocator.map_transports_to_load_with(
                settings.load_strategy,
                &request.units,
                &request.transports,
            )
        } else {
            allocator.map_transports(&route, &request.units, &request.transports)
        };

        let unassigned = if route.is_load() {
            allocator.unassigned(&request.units, &mapping)
        } else {
            Vec::new()
        };
        if settings.report_overflow && !unassigned.is_empty() {
            warn!(
                "{} unit(s) left behind at ({}, {}): not enough transport capacity",
                unassigned.len(),
                route.start.x,
                route.start.y
            );
        }

        let mut assignments: Vec<(Entity, Entity)> = mapping.into_iter().collect();
        assignments.sort();
        info!(
            "Mapped {} unit(s) to transports for {:?}",
            assignments.len(),
            route.phase
        );
        mapped.write(TransportsMapped {
            phase: route.phase,
            assignments,
            unassigned,
        });
    }
}

/// Answer [`UnloadPlanRequest`]s with a minimal set of transports
pub fn plan_unloads(
    mut requests: MessageReader<UnloadPlanRequest>,
    units: UnitQuery,
    mut planned: MessageWriter<UnloadPlanned>,
    mut rejected: MessageWriter<TransportRequestRejected>,
) {
    if requests.is_empty() {
        return;
    }
    let snapshot = TransportSnapshot::from_query(&units);
    let allocator = TransportAllocator::from_snapshot(&snapshot);

    for request in requests.read() {
        if let Err(error) = snapshot.validate_request(&request.units, &request.transports) {
            warn!("Rejected unload plan: {}", error);
            rejected.write(TransportRequestRejected { error });
            continue;
        }

        let mut transports: Vec<Entity> = allocator
            .find_min_transports_to_unload(&request.units, &request.transports)
            .into_iter()
            .collect();
        transports.sort();
        info!(
            "Unloading {} unit(s) needs {} transport(s)",
            request.units.len(),
            transports.len()
        );
        planned.write(UnloadPlanned { transports });
    }
}

/// Answer [`AirLiftRequest`]s with the units the air transports could carry
pub fn plan_air_lifts(
    mut requests: MessageReader<AirLiftRequest>,
    units: UnitQuery,
    mut planned: MessageWriter<AirLiftPlanned>,
    mut rejected: MessageWriter<TransportRequestRejected>,
) {
    if requests.is_empty() {
        return;
    }
    let snapshot = TransportSnapshot::from_query(&units);
    let allocator = TransportAllocator::from_snapshot(&snapshot);

    for request in requests.read() {
        // Non-air transports are allowed here and simply ignored
        if let Err(error) = snapshot.validate_request(&request.units, &[]) {
            warn!("Rejected air lift: {}", error);
            rejected.write(TransportRequestRejected { error });
            continue;
        }

        let lifted =
            allocator.find_units_to_load_on_air_transports(&request.units, &request.transports);
        debug!("Air lift can carry {} of {} unit(s)", lifted.len(), request.units.len());
        planned.write(AirLiftPlanned { units: lifted });
    }
}

/// Put units aboard their assigned transports and onto the transport's tile.
///
/// Assignments are checked against cargo as it stood at the start of the
/// frame plus everything loaded earlier in the same frame; any assignment
/// naming a non-carrier, uncarriable cargo or an already full transport is
/// rejected.
pub fn apply_transport_mappings(
    mut commands: Commands,
    mut orders: MessageReader<ApplyTransportMapping>,
    mut units: Query<(
        Entity,
        &mut Unit,
        Option<&Cargo>,
        Option<&TransportedBy>,
    )>,
    mut rejected: MessageWriter<TransportRequestRejected>,
) {
    if orders.is_empty() {
        return;
    }
    let snapshot = TransportSnapshot::from_units(units.iter());
    let mut added_load: HashMap<Entity, u32> = HashMap::new();

    for order in orders.read() {
        for (unit, transport) in &order.assignments {
            if let Err(error) = check_assignment(&snapshot, &added_load, *unit, *transport) {
                warn!("Rejected load of {:?} onto {:?}: {}", unit, transport, error);
                rejected.write(TransportRequestRejected { error });
                continue;
            }
            if snapshot.carrier_of(*unit) == Some(*transport) {
                trace!("{:?} is already aboard {:?}", unit, transport);
                continue;
            }

            let Ok(position) = units.get(*transport).map(|(_, carrier, ..)| carrier.position)
            else {
                warn!("Transport {:?} no longer exists", transport);
                continue;
            };
            let Ok((_, mut loaded, ..)) = units.get_mut(*unit) else {
                warn!("Failed to get unit entity {:?}", unit);
                continue;
            };
            loaded.position = position;
            *added_load.entry(*transport).or_default() += snapshot.unit_cost(*unit);
            commands.entity(*unit).insert(TransportedBy(*transport));
        }
    }
}

fn check_assignment(
    snapshot: &TransportSnapshot,
    added_load: &HashMap<Entity, u32>,
    unit: Entity,
    transport: Entity,
) -> Result<(), TransportError> {
    snapshot.validate_request(&[unit], &[transport])?;
    if !snapshot.can_be_transported(unit) {
        return Err(TransportError::NotTransportable(unit));
    }
    if snapshot.carrier_of(unit) == Some(transport) {
        return Ok(());
    }

    let added = added_load.get(&transport).copied().unwrap_or(0);
    let room = snapshot.available_capacity(transport).saturating_sub(added);
    if room < snapshot.unit_cost(unit) {
        return Err(TransportError::NoRoom { unit, transport });
    }
    Ok(())
}
