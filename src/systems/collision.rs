//! Pairwise body-vs-body collision.
//!
//! One separation pass per frame over every unordered pair. Deep multi-body
//! piles settle over several frames; there is no iteration to convergence.

use crate::domain::settings::SimSettings;
use crate::rigid_body::{RigidBody, Vec2};

/// Resolve every overlapping pair. Returns the number of contacts.
///
/// Dragged bodies take part: they push free bodies away and have their
/// velocity overwritten, but their position stays pointer-driven.
pub fn resolve_all(bodies: &mut [RigidBody], settings: &SimSettings) -> u32 {
    let mut contacts = 0;
    let n = bodies.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let (head, tail) = bodies.split_at_mut(j);
            if resolve_pair(&mut head[i], &mut tail[0], settings) {
                contacts += 1;
            }
        }
    }
    contacts
}

/// Separate one pair and exchange normal velocity. Returns true on contact.
pub fn resolve_pair(a: &mut RigidBody, b: &mut RigidBody, settings: &SimSettings) -> bool {
    let delta = b.pos - a.pos;
    let distance = delta.length();

    // Coincident centers have no direction; fall back to a fixed axis
    let normal = if distance > 0.0 && distance.is_finite() {
        Vec2::from_angle(delta.y.atan2(delta.x))
    } else {
        Vec2::UNIT_X
    };

    let reach = a.effective_radius(normal) + b.effective_radius(normal);
    // NaN distance (non-finite positions) never counts as contact
    if distance.is_nan() || distance >= reach {
        return false;
    }
    let overlap = reach - distance;

    separate(a, b, normal, overlap);
    exchange_velocity(a, b, normal, settings.collision_damping);
    true
}

fn separate(a: &mut RigidBody, b: &mut RigidBody, normal: Vec2, overlap: f32) {
    match (a.is_dragging(), b.is_dragging()) {
        (false, false) => {
            let correction = normal * (overlap * 0.5);
            a.pos -= correction;
            b.pos += correction;
        }
        (true, false) => b.pos += normal * overlap,
        (false, true) => a.pos -= normal * overlap,
        (true, true) => {}
    }
}

/// 1D elastic exchange along `normal`, weighted by mass; tangential
/// components pass through untouched.
fn exchange_velocity(a: &mut RigidBody, b: &mut RigidBody, normal: Vec2, damping: f32) {
    let tangent = normal.perp();

    let an = a.velocity.dot(normal);
    let at = a.velocity.dot(tangent);
    let bn = b.velocity.dot(normal);
    let bt = b.velocity.dot(tangent);

    let total = a.mass() + b.mass();
    // Fraction of the relative normal velocity each body absorbs
    let wa = 2.0 * (b.mass() / total);
    let wb = 2.0 * (a.mass() / total);
    let relative = bn - an;

    let an_after = an + wa * relative;
    let bn_after = bn - wb * relative;

    a.velocity = (normal * an_after + tangent * at) * damping;
    b.velocity = (normal * bn_after + tangent * bt) * damping;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disk(id: u32, x: f32, y: f32, r: f32, vx: f32) -> RigidBody {
        RigidBody::new_disk(id, x, y, r)
            .unwrap()
            .with_velocity(Vec2::new(vx, 0.0))
    }

    #[test]
    fn equal_masses_swap_velocities_and_keep_momentum() {
        let settings = SimSettings::default();
        let mut bodies = vec![disk(1, 100.0, 100.0, 20.0, 3.0), disk(2, 130.0, 100.0, 20.0, -3.0)];
        let before: f32 = bodies.iter().map(|b| b.mass() * b.velocity.x).sum();

        assert_eq!(resolve_all(&mut bodies, &settings), 1);

        assert_eq!(bodies[0].velocity, Vec2::new(-3.0, 0.0));
        assert_eq!(bodies[1].velocity, Vec2::new(3.0, 0.0));
        let after: f32 = bodies.iter().map(|b| b.mass() * b.velocity.x).sum();
        assert_eq!(before, after);
        // Half the 10-unit overlap each way
        assert_eq!(bodies[0].pos.x, 95.0);
        assert_eq!(bodies[1].pos.x, 135.0);
    }

    #[test]
    fn heavier_body_keeps_more_momentum() {
        let settings = SimSettings::default();
        let mut light = disk(1, 0.0, 0.0, 10.0, 0.0);
        let mut heavy = disk(2, 35.0, 0.0, 30.0, -4.0);
        assert!(resolve_pair(&mut light, &mut heavy, &settings));
        assert!(light.velocity.x < -4.0);
        assert!(heavy.velocity.x < 0.0);
        assert!(heavy.velocity.x > -4.0);
    }

    #[test]
    fn coincident_centers_separate_along_fixed_axis() {
        let settings = SimSettings::default();
        let mut a = disk(1, 50.0, 50.0, 10.0, 0.0);
        let mut b = disk(2, 50.0, 50.0, 10.0, 0.0);
        assert!(resolve_pair(&mut a, &mut b, &settings));
        assert!(a.pos.is_finite() && b.pos.is_finite());
        assert_eq!(a.pos, Vec2::new(40.0, 50.0));
        assert_eq!(b.pos, Vec2::new(60.0, 50.0));
    }

    #[test]
    fn dragged_body_holds_position_and_pushes_free_body() {
        let settings = SimSettings::default();
        let mut held = disk(1, 100.0, 100.0, 20.0, 0.0);
        held.begin_drag(Vec2::new(100.0, 100.0));
        let mut free = disk(2, 130.0, 100.0, 20.0, 0.0);

        assert!(resolve_pair(&mut held, &mut free, &settings));
        assert_eq!(held.pos, Vec2::new(100.0, 100.0));
        assert_eq!(free.pos.x, 140.0);
    }

    #[test]
    fn damping_shrinks_post_collision_speed() {
        let settings = SimSettings {
            collision_damping: 0.5,
            ..SimSettings::default()
        };
        let mut a = disk(1, 0.0, 0.0, 10.0, 4.0);
        let mut b = disk(2, 15.0, 0.0, 10.0, -4.0);
        resolve_pair(&mut a, &mut b, &settings);
        assert_eq!(a.velocity.x, -2.0);
        assert_eq!(b.velocity.x, 2.0);
    }

    #[test]
    fn sprite_reach_depends_on_contact_axis() {
        let settings = SimSettings::default();

        // 40x20 box: half-extent 20 along x, 10 along y
        let mut sprite = RigidBody::new_sprite(1, 0.0, 0.0, 40.0, 20.0, 0.0).unwrap();
        let mut side = disk(2, 25.0, 0.0, 10.0, 0.0);
        assert!(resolve_pair(&mut sprite, &mut side, &settings));
        assert_eq!(sprite.pos.x, -2.5);
        assert_eq!(side.pos.x, 27.5);

        let mut sprite = RigidBody::new_sprite(1, 0.0, 0.0, 40.0, 20.0, 0.0).unwrap();
        let mut below = disk(2, 0.0, 25.0, 10.0, 0.0);
        assert!(!resolve_pair(&mut sprite, &mut below, &settings));
        assert_eq!(below.pos, Vec2::new(0.0, 25.0));
    }

    #[test]
    fn rotated_sprite_reaches_along_its_long_axis() {
        let settings = SimSettings::default();
        // Quarter turn puts the 40-unit side along y
        let mut sprite = RigidBody::new_sprite(1, 0.0, 0.0, 40.0, 20.0, 90.0)
            .unwrap()
            .with_velocity(Vec2::new(0.0, 2.0));
        let mut below = disk(2, 0.0, 25.0, 10.0, 0.0);

        assert!(resolve_pair(&mut sprite, &mut below, &settings));
        assert!(below.pos.y > 25.0);
        assert!(sprite.pos.y < 0.0);
        assert!(below.velocity.y > 0.0);
        assert!(sprite.pos.is_finite() && below.velocity.is_finite());
    }

    #[test]
    fn separated_bodies_are_untouched() {
        let settings = SimSettings::default();
        let mut bodies = vec![disk(1, 0.0, 0.0, 10.0, 1.0), disk(2, 20.0, 0.0, 10.0, -1.0)];
        assert_eq!(resolve_all(&mut bodies, &settings), 0);
        assert_eq!(bodies[0].velocity.x, 1.0);
    }
}
