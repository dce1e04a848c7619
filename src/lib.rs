//! Troop Transport - unit to transport assignment for a hex-based wargame
//!
//! This library decides which transports carry which units when armies
//! load, move and unload, and which transports must unload to put a given
//! force ashore. The algorithms in [`transport::allocator`] work against the
//! oracle traits in [`transport::oracle`]; [`transport::TransportSnapshot`]
//! implements those traits on top of the ECS world.

use crate::transport::TransportPlugin;
use crate::units::UnitsPlugin;
use bevy::app::PluginGroup;

pub mod transport;
pub mod units;

/// Plugin group for unit and transport logic (headless-compatible)
pub struct LogicPlugins;

impl PluginGroup for LogicPlugins {
    fn build(self) -> bevy::app::PluginGroupBuilder {
        bevy::app::PluginGroupBuilder::start::<Self>()
            .add(UnitsPlugin)
            .add(TransportPlugin)
    }
}

#[cfg(test)]
pub mod test_utils;
