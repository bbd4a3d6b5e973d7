//! Axis-aligned box collision.
//!
//! Overlap testing is pure; recording the partner's type and pushing an entity
//! out of platforms are explicit, separate steps. Resolution runs one axis at a
//! time so the second axis sees the position already corrected on the first.

use glam::{Vec2, Vec3};

use crate::components::entity::Entity;

// ---------------------------------------------------------------------------
// Pure geometry
// ---------------------------------------------------------------------------

/// Per-axis gap between two centered boxes: `|Δcenter| - (half_a + half_b)`.
/// Negative on an axis means the projections overlap on that axis.
pub fn axis_gaps(a_pos: Vec3, a_half: Vec2, b_pos: Vec3, b_half: Vec2) -> Vec2 {
    let delta = (a_pos.truncate() - b_pos.truncate()).abs();
    delta - (a_half + b_half)
}

/// Boxes collide only when both gaps are strictly negative. Touching edges do not count.
pub fn boxes_overlap(a_pos: Vec3, a_half: Vec2, b_pos: Vec3, b_half: Vec2) -> bool {
    let gaps = axis_gaps(a_pos, a_half, b_pos, b_half);
    gaps.x < 0.0 && gaps.y < 0.0
}

/// Overlap depth along one axis given the center distance on that axis.
pub fn penetration(distance: f32, half_a: f32, half_b: f32) -> f32 {
    (distance.abs() - half_a - half_b).abs()
}

// ---------------------------------------------------------------------------
// Entity collision
// ---------------------------------------------------------------------------

/// Axis a resolution pass works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

impl Entity {
    /// Pure overlap test. Always false if either entity is inactive.
    pub fn overlaps(&self, other: &Entity) -> bool {
        if !self.active || !other.active {
            return false;
        }
        boxes_overlap(
            self.position,
            self.half_extents(),
            other.position,
            other.half_extents(),
        )
    }

    /// Overlap test that also records `other`'s type in `last_collision`.
    /// With several partners, the last one checked wins.
    pub fn check_collision(&mut self, other: &Entity) -> bool {
        let hit = self.overlaps(other);
        if hit {
            self.last_collision = Some(other.entity_type);
        }
        hit
    }

    /// Vertical overlap depth against `other`.
    pub fn penetration_y(&self, other: &Entity) -> f32 {
        penetration(
            self.position.y - other.position.y,
            self.height / 2.0,
            other.height / 2.0,
        )
    }

    /// Horizontal overlap depth against `other`.
    pub fn penetration_x(&self, other: &Entity) -> f32 {
        penetration(
            self.position.x - other.position.x,
            self.width / 2.0,
            other.width / 2.0,
        )
    }

    /// Push out of every overlapping object vertically, against the direction of travel.
    ///
    /// Moving up sets `collided.top`, moving down sets `collided.bottom`, and
    /// zeroes `velocity.y` either way. An entity with no vertical velocity is
    /// left where it is.
    pub fn resolve_collisions_y(&mut self, objects: &[Entity]) {
        self.resolve_axis(Axis::Y, objects);
    }

    /// Horizontal counterpart of [`Entity::resolve_collisions_y`], setting
    /// `collided.right` / `collided.left`.
    pub fn resolve_collisions_x(&mut self, objects: &[Entity]) {
        self.resolve_axis(Axis::X, objects);
    }

    fn resolve_axis(&mut self, axis: Axis, objects: &[Entity]) {
        for object in objects {
            if !self.check_collision(object) {
                continue;
            }

            let (depth, velocity) = match axis {
                Axis::Y => (self.penetration_y(object), self.velocity.y),
                Axis::X => (self.penetration_x(object), self.velocity.x),
            };

            // Sign of travel picks the push direction; at rest there is none.
            let forward = if velocity > 0.0 {
                true
            } else if velocity < 0.0 {
                false
            } else {
                continue;
            };
            let push = if forward { -depth } else { depth };

            match axis {
                Axis::Y => {
                    self.position.y += push;
                    self.velocity.y = 0.0;
                    if forward {
                        self.collided.top = true;
                    } else {
                        self.collided.bottom = true;
                    }
                }
                Axis::X => {
                    self.position.x += push;
                    self.velocity.x = 0.0;
                    if forward {
                        self.collided.right = true;
                    } else {
                        self.collided.left = true;
                    }
                }
            }
            log::trace!("resolved {:?} overlap of {} against {:?}", axis, depth, object.entity_type);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityType;

    fn platform_at(x: f32, y: f32) -> Entity {
        Entity::platform().with_position(Vec3::new(x, y, 0.0))
    }

    #[test]
    fn disjoint_on_either_axis_is_no_collision() {
        let a = Entity::player();
        // Overlaps on y, apart on x.
        let b = platform_at(1.5, 0.0);
        // Overlaps on x, apart on y.
        let c = platform_at(0.0, -1.5);
        assert!(!a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn touching_edges_do_not_collide() {
        let a = Entity::player();
        let b = platform_at(1.0, 0.0);
        assert_eq!(axis_gaps(a.position, a.half_extents(), b.position, b.half_extents()).x, 0.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn overlap_records_partner_type() {
        let mut a = Entity::player();
        let b = platform_at(0.5, 0.5);
        assert!(a.overlaps(&b));
        assert_eq!(a.last_collision, None);

        assert!(a.check_collision(&b));
        assert_eq!(a.last_collision, Some(EntityType::Platform));

        let enemy = Entity::enemy(Default::default()).with_position(Vec3::new(-0.5, 0.0, 0.0));
        assert!(a.check_collision(&enemy));
        assert_eq!(a.last_collision, Some(EntityType::Enemy));
    }

    #[test]
    fn inactive_entities_never_collide() {
        let mut a = Entity::player();
        let mut b = platform_at(0.0, 0.0);
        b.active = false;
        assert!(!a.check_collision(&b));
        assert_eq!(a.last_collision, None);

        b.active = true;
        a.active = false;
        assert!(!a.check_collision(&b));
    }

    #[test]
    fn falling_onto_platform_lands_on_top() {
        // Platform top edge at y = 0.5; player bottom edge at 0.25.
        let platforms = vec![platform_at(0.0, 0.0)];
        let mut p = Entity::player().with_position(Vec3::new(0.0, 0.75, 0.0));
        p.velocity.y = -2.0;

        let depth = p.penetration_y(&platforms[0]);
        assert_eq!(depth, 0.25);

        p.resolve_collisions_y(&platforms);
        assert!(p.collided.bottom);
        assert!(!p.collided.top);
        assert_eq!(p.velocity.y, 0.0);
        assert_eq!(p.position.y, 1.0);
    }

    #[test]
    fn rising_into_ceiling_is_pushed_down() {
        let platforms = vec![platform_at(0.0, 1.0)];
        let mut p = Entity::player().with_position(Vec3::new(0.0, 0.25, 0.0));
        p.velocity.y = 3.0;

        p.resolve_collisions_y(&platforms);
        assert!(p.collided.top);
        assert_eq!(p.velocity.y, 0.0);
        assert_eq!(p.position.y, 0.0);
    }

    #[test]
    fn stationary_overlap_is_left_alone() {
        let platforms = vec![platform_at(0.0, 0.0)];
        let mut p = Entity::player().with_position(Vec3::new(0.25, 0.5, 0.0));

        p.resolve_collisions_y(&platforms);
        p.resolve_collisions_x(&platforms);
        assert_eq!(p.position, Vec3::new(0.25, 0.5, 0.0));
        assert!(!p.collided.any());
        // The overlap itself was still observed.
        assert_eq!(p.last_collision, Some(EntityType::Platform));
    }

    #[test]
    fn walking_into_wall_stops_at_its_edge() {
        let platforms = vec![platform_at(1.0, 0.0)];
        let mut p = Entity::player().with_position(Vec3::new(0.25, 0.0, 0.0));
        p.velocity.x = 2.0;

        p.resolve_collisions_x(&platforms);
        assert!(p.collided.right);
        assert_eq!(p.velocity.x, 0.0);
        assert_eq!(p.position.x, 0.0);

        let mut q = Entity::player().with_position(Vec3::new(1.75, 0.0, 0.0));
        q.velocity.x = -2.0;
        q.resolve_collisions_x(&platforms);
        assert!(q.collided.left);
        assert_eq!(q.position.x, 2.0);
    }

    #[test]
    fn resolution_skips_inactive_platforms() {
        let mut hidden = platform_at(0.0, 0.0);
        hidden.active = false;
        let mut p = Entity::player().with_position(Vec3::new(0.0, 0.75, 0.0));
        p.velocity.y = -1.0;

        p.resolve_collisions_y(&[hidden]);
        assert_eq!(p.position.y, 0.75);
        assert_eq!(p.velocity.y, -1.0);
    }
}
