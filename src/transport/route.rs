use bevy::prelude::*;
use bevy_ecs_tilemap::prelude::TilePos;
use serde::{Deserialize, Serialize};

use super::oracle::UnitId;

/// Classification of a requested move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum RoutePhase {
    /// Land units boarding transports
    Load,
    /// Cargo leaving its transports
    Unload,
    /// Any other move; cargo stays aboard
    Move,
}

/// An already-resolved route, as seen by the transport allocator
#[derive(Debug, Clone, PartialEq)]
pub struct Route<U> {
    pub start: TilePos,
    pub end: TilePos,
    pub phase: RoutePhase,
    /// Units present on `start` when the route was resolved
    pub origin_units: Vec<U>,
}

impl<U: UnitId> Route<U> {
    pub fn new(start: TilePos, end: TilePos, phase: RoutePhase, origin_units: Vec<U>) -> Self {
        Self {
            start,
            end,
            phase,
            origin_units,
        }
    }

    pub fn is_load(&self) -> bool {
        self.phase == RoutePhase::Load
    }

    pub fn is_unload(&self) -> bool {
        self.phase == RoutePhase::Unload
    }

    pub fn origin_units(&self) -> &[U] {
        &self.origin_units
    }
}
