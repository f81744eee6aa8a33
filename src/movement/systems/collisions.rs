//! Movement domain: ground detection.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, GroundSensor, Player};

pub(crate) fn probe_ground(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &mut GroundSensor), With<Player>>,
) {
    // Only Ground-layer colliders count as footing
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, mut sensor) in &mut query {
        let foot = transform.translation.truncate() + sensor.offset;
        let probe = Collider::circle(sensor.radius);

        let grounded = !spatial_query
            .shape_intersections(&probe, foot, 0.0, &ground_filter)
            .is_empty();

        if grounded != sensor.grounded {
            debug!("Ground probe at {:?}: grounded={}", foot, grounded);
        }
        sensor.grounded = grounded;
    }
}
