//! Conformance checks over the unit catalogue.
//!
//! Every declared [`UnitProfile`] is checked for attribute combinations the
//! transport allocator cannot make sense of. The checks run once when
//! [`UnitsPlugin`](super::UnitsPlugin) is built and again in the test suite.

use thiserror::Error;

use super::types::{UnitKind, UnitProfile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProfileIssue {
    #[error("transport has no capacity")]
    TransportWithoutCapacity,
    #[error("non-transport declares capacity {0}")]
    CapacityOnNonTransport(u32),
    #[error("transport is itself transportable (cost {0})")]
    TransportableTransport(u32),
    #[error("unit has no movement")]
    Immobile,
    #[error("air transport capacity {capacity} cannot hold the lightest cargo (cost {lightest})")]
    AirTransportTooSmall { capacity: u32, lightest: u32 },
}

/// Check a single profile in isolation
pub fn validate_profile(profile: &UnitProfile) -> Vec<ProfileIssue> {
    let mut issues = Vec::new();

    if profile.is_transport && profile.transport_capacity == 0 {
        issues.push(ProfileIssue::TransportWithoutCapacity);
    }
    if !profile.is_transport && profile.transport_capacity > 0 {
        issues.push(ProfileIssue::CapacityOnNonTransport(
            profile.transport_capacity,
        ));
    }
    if profile.is_transport && profile.transport_cost > 0 {
        issues.push(ProfileIssue::TransportableTransport(profile.transport_cost));
    }
    if profile.movement == 0 {
        issues.push(ProfileIssue::Immobile);
    }

    issues
}

/// Check a set of profiles, including cross-profile rules
pub fn validate_profiles<K: Copy>(profiles: &[(K, UnitProfile)]) -> Vec<(K, ProfileIssue)> {
    let mut issues: Vec<(K, ProfileIssue)> = profiles
        .iter()
        .flat_map(|(kind, profile)| {
            validate_profile(profile)
                .into_iter()
                .map(move |issue| (*kind, issue))
        })
        .collect();

    let lightest = profiles
        .iter()
        .map(|(_, profile)| profile.transport_cost)
        .filter(|cost| *cost > 0)
        .min();

    if let Some(lightest) = lightest {
        for (kind, profile) in profiles {
            if profile.is_air_transport() && profile.transport_capacity < lightest {
                issues.push((
                    *kind,
                    ProfileIssue::AirTransportTooSmall {
                        capacity: profile.transport_capacity,
                        lightest,
                    },
                ));
            }
        }
    }

    issues
}

/// Check every kind in [`UnitKind::ALL`]
pub fn validate_catalogue() -> Vec<(UnitKind, ProfileIssue)> {
    let profiles: Vec<(UnitKind, UnitProfile)> = UnitKind::ALL
        .iter()
        .map(|kind| (*kind, kind.profile()))
        .collect();
    validate_profiles(&profiles)
}
