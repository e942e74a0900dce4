//! Hit testing - which body sits under the pointer
//!
//! Sprites are tested against their rotated box first, then (when a decoded
//! alpha mask is available) against the mask so transparent margins do not
//! grab.

use crate::rigid_body::{OpacitySampler, RigidBody, Shape, Vec2};

/// Does `point` land on `body`?
pub fn contains(body: &RigidBody, point: Vec2) -> bool {
    match *body.shape() {
        Shape::Disk { radius } => (point - body.pos).length() <= radius,
        Shape::Sprite { width, height } => {
            let local = (point - body.pos).rotate(-body.rotation_radians());
            let half_w = width * 0.5;
            let half_h = height * 0.5;
            if local.x.abs() > half_w || local.y.abs() > half_h {
                return false;
            }
            match body.visual.sampler() {
                Some(sampler) => is_opaque(sampler, local, width, height),
                None => true,
            }
        }
    }
}

/// Topmost body under `point`: the last match in draw order
pub fn pick(bodies: &[RigidBody], point: Vec2) -> Option<usize> {
    bodies.iter().rposition(|b| contains(b, point))
}

fn is_opaque(sampler: &dyn OpacitySampler, local: Vec2, width: f32, height: f32) -> bool {
    let (px_w, px_h) = sampler.dimensions();
    if px_w == 0 || px_h == 0 {
        return true;
    }
    // Local box [-w/2, w/2] maps onto pixel columns [0, px_w)
    let u = (local.x + width * 0.5) / width;
    let v = (local.y + height * 0.5) / height;
    let px = ((u * px_w as f32) as u32).min(px_w - 1);
    let py = ((v * px_h as f32) as u32).min(px_h - 1);
    sampler.alpha_at(px, py).map_or(false, |a| a > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rigid_body::AlphaMask;

    #[test]
    fn disk_edge_counts_as_hit() {
        let b = RigidBody::new_disk(1, 50.0, 50.0, 10.0).unwrap();
        assert!(contains(&b, Vec2::new(60.0, 50.0)));
        assert!(!contains(&b, Vec2::new(60.5, 50.0)));
    }

    #[test]
    fn rotated_sprite_uses_local_frame() {
        let b = RigidBody::new_sprite(1, 0.0, 0.0, 40.0, 10.0, 90.0).unwrap();
        // After a quarter turn the long side runs along y
        assert!(contains(&b, Vec2::new(0.0, 18.0)));
        assert!(!contains(&b, Vec2::new(18.0, 0.0)));
    }

    #[test]
    fn transparent_margin_is_not_clickable() {
        // 2x1 mask: left half transparent, right half opaque
        let mask = AlphaMask::new(2, 1, vec![0, 255]).unwrap();
        let mut b = RigidBody::new_sprite(1, 0.0, 0.0, 20.0, 10.0, 0.0).unwrap();
        b.visual.attach_mask(mask);
        assert!(!contains(&b, Vec2::new(-5.0, 0.0)));
        assert!(contains(&b, Vec2::new(5.0, 0.0)));
    }

    #[test]
    fn pick_prefers_last_overlapping_body() {
        let bodies = vec![
            RigidBody::new_disk(1, 0.0, 0.0, 20.0).unwrap(),
            RigidBody::new_disk(2, 10.0, 0.0, 20.0).unwrap(),
            RigidBody::new_disk(3, 200.0, 0.0, 20.0).unwrap(),
        ];
        let point = Vec2::new(5.0, 0.0);
        assert_eq!(pick(&bodies, point), Some(1));
        assert_eq!(pick(&bodies, point), pick(&bodies, point));
        assert_eq!(pick(&bodies, Vec2::new(100.0, 100.0)), None);
    }
}
