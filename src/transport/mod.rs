use bevy::prelude::*;

// Capability traits and route descriptor
pub mod oracle;
pub use oracle::{CapacityOracle, UnitId, UnitTraits};

pub mod route;
pub use route::{Route, RoutePhase};

// Assignment algorithms (Logic Layer)
pub mod allocator;
pub use allocator::{TransportAllocator, TransportMapping};

pub mod sorting;

// ECS view of units and cargo
pub mod snapshot;
pub use snapshot::TransportSnapshot;

pub mod settings;
pub use settings::{LoadStrategy, TransportSettings};

pub mod error;
pub use error::TransportError;

// Messages
pub mod messages;
pub use messages::{
    AirLiftPlanned, AirLiftRequest, ApplyTransportMapping, MapTransportsRequest, RouteRequest,
    TransportRequestRejected, TransportsMapped, UnloadPlanRequest, UnloadPlanned,
};

// Systems
pub mod systems;
pub use systems::{
    apply_transport_mappings, plan_air_lifts, plan_unloads, resolve_transport_requests,
};

/// System set for transport request handling
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransportSet;

/// Plugin resolving transport requests against the unit world
pub struct TransportPlugin;

impl Plugin for TransportPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TransportSettings>()
            .register_type::<TransportSettings>()
            .register_type::<LoadStrategy>()
            .register_type::<RoutePhase>();

        // Register messages
        app.add_message::<MapTransportsRequest>()
            .add_message::<TransportsMapped>()
            .add_message::<UnloadPlanRequest>()
            .add_message::<UnloadPlanned>()
            .add_message::<AirLiftRequest>()
            .add_message::<AirLiftPlanned>()
            .add_message::<ApplyTransportMapping>()
            .add_message::<TransportRequestRejected>();

        // Loads are applied before new requests so requests see the new cargo
        app.add_systems(
            Update,
            (
                apply_transport_mappings,
                resolve_transport_requests,
                plan_unloads,
                plan_air_lifts,
            )
                .chain()
                .in_set(TransportSet),
        );
    }
}
