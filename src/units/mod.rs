use bevy::prelude::*;

pub mod types;
pub mod validation;


pub use types::{Cargo, TransportedBy, Unit, UnitKind, UnitProfile};
pub use validation::{ProfileIssue, validate_catalogue, validate_profile};

/// Plugin for military unit types
pub struct UnitsPlugin;

impl Plugin for UnitsPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<UnitKind>()
            .register_type::<UnitProfile>()
            .register_type::<Unit>()
            .register_type::<TransportedBy>()
            .register_type::<Cargo>();

        for (kind, issue) in validate_catalogue() {
            warn!("Unit catalogue entry {:?}: {}", kind, issue);
        }
    }
}
