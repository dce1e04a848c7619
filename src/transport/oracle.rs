//! Read-only capabilities the transport allocator consumes.
//!
//! The allocator never owns game state. Everything it knows about cargo
//! bookkeeping comes through [`CapacityOracle`], and everything it knows about
//! unit attributes comes through [`UnitTraits`]. The ECS implementation is
//! [`TransportSnapshot`](super::snapshot::TransportSnapshot).

use std::fmt::Debug;
use std::hash::Hash;

/// Identity token for a unit. `Entity` in the game, plain integers in tests.
pub trait UnitId: Copy + Eq + Hash + Debug {}

impl<T: Copy + Eq + Hash + Debug> UnitId for T {}

/// Current cargo bookkeeping of transports.
pub trait CapacityOracle<U: UnitId> {
    /// Base capacity minus the cost of everything already aboard
    fn available_capacity(&self, transport: U) -> u32;

    /// Units currently aboard, in load order
    fn cargo_of(&self, transport: U) -> Vec<U>;

    fn carrier_of(&self, unit: U) -> Option<U>;
}

/// Static and per-instance unit attributes.
pub trait UnitTraits<U: UnitId> {
    /// Grouping key for units that share transport cost and capacity
    type Kind: Copy + Eq + Hash + Debug;

    fn unit_type(&self, unit: U) -> Self::Kind;

    fn transport_cost(&self, kind: Self::Kind) -> u32;

    fn transport_capacity(&self, kind: Self::Kind) -> u32;

    fn movement_remaining(&self, unit: U) -> u32;

    fn can_be_transported(&self, unit: U) -> bool;

    fn can_transport(&self, unit: U) -> bool;

    fn is_air_transport(&self, unit: U) -> bool;

    /// Symmetric, not necessarily transitive
    fn is_equivalent(&self, a: U, b: U) -> bool;

    fn unit_cost(&self, unit: U) -> u32 {
        self.transport_cost(self.unit_type(unit))
    }
}
