//! Final presence audit over the configured scene objects.

use std::collections::BTreeMap;

use crate::scene::{ObjectKind, SceneContext};

use super::types::ValidationReport;

/// Kinds audited by the validation pass, in report order.
const AUDITED_KINDS: [ObjectKind; 3] = [
    ObjectKind::Georeference,
    ObjectKind::Terrain,
    ObjectKind::SunSky,
];

/// Re-query each configured object kind and report presence.
///
/// Presence is the only check: field values are never inspected, so an
/// origin with wrong coordinates still passes. Downstream UI depends on
/// this weak guarantee; do not strengthen it here.
pub fn validate(scene: &SceneContext) -> ValidationReport {
    let mut presence = BTreeMap::new();
    for kind in AUDITED_KINDS {
        presence.insert(kind, scene.contains(kind));
    }
    let overall = presence.values().all(|present| *present);
    ValidationReport { overall, presence }
}
