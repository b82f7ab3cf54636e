use egui::{Pos2, Vec2};
use parry2d::na::{Isometry2, Vector2};
use parry2d::query;
use parry2d::shape::{Ball, Cuboid};

/// Axis-aligned Bounding Box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AaBB {
    pub min: Pos2,
    pub max: Pos2,
}

impl AaBB {
    pub fn from_pos_size(pos: Pos2, size: Vec2) -> Self {
        AaBB { min: pos, max: pos + size }
    }

    pub fn center(&self) -> Pos2 {
        Pos2::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Pos2,
    pub radius: f32,
}

/// true if the circle touches or overlaps the box
pub fn circle_intersects_aabb(circle: &Circle, aabb: &AaBB) -> bool {
    let aabb_center = aabb.center();
    let half_extents = aabb.size() / 2.0;
    match query::intersection_test(
        &Isometry2::translation(circle.center.x, circle.center.y),
        &Ball::new(circle.radius),
        &Isometry2::translation(aabb_center.x, aabb_center.y),
        &Cuboid::new(Vector2::new(half_extents.x, half_extents.y)),
    ) {
        Ok(intersecting) => intersecting,
        Err(e) => {
            log::warn!("intersection test failed: {e:?}");
            false
        }
    }
}
