//! Turns a finished drag into the animation that settles it.

use viewfinder_animation::AnimationSpec;
use viewfinder_foundation::{DragRelease, GestureKind, HandleMapping, PanConstraints};

use crate::PanConfig;

/// Which representation a settle animation drives. The other one is
/// recomputed from it on every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleAxis {
    Offset,
    Handle,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettlePlan {
    pub axis: SettleAxis,
    pub start: f32,
    pub target: f32,
    pub spec: AnimationSpec,
    /// The target was redirected onto a snap point.
    pub snapped: bool,
}

/// Plans the coast after a release, or `None` when the release is too slow
/// to move anything.
///
/// Content releases coast in offset space and stop at the pan limits. Handle
/// releases coast in track space, stop at the track ends, and may be pulled
/// onto the nearest snap point.
pub fn plan_release(
    release: &DragRelease,
    constraints: &PanConstraints,
    mapping: &HandleMapping,
    config: &PanConfig,
) -> Option<SettlePlan> {
    let info = config.inertia.fling_info(release.velocity)?;
    let spec = AnimationSpec::ease_out_cubic(info.duration_millis);

    match release.kind {
        GestureKind::Content => {
            if !constraints.is_enabled() {
                return None;
            }
            let max = constraints.max_offset;
            Some(SettlePlan {
                axis: SettleAxis::Offset,
                start: release.position,
                target: info.target(release.position, -max, max),
                spec,
                snapped: false,
            })
        }
        GestureKind::Handle => {
            if !mapping.is_active() {
                return None;
            }
            let coasted = info.target(release.position, 0.0, mapping.movable_width);
            let snap = config.snap_points.nearest_within(
                coasted,
                mapping.movable_width,
                config.release_snap_threshold,
            );
            Some(SettlePlan {
                axis: SettleAxis::Handle,
                start: release.position,
                target: snap.unwrap_or(coasted),
                spec,
                snapped: snap.is_some(),
            })
        }
    }
}
