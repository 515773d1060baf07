use glam::{IVec3, Vec3};

use super::math::normalize;

/// Number of samples taken per unit of `direction` when marching a ray.
pub const STEPS_PER_BLOCK: u32 = 8;

#[derive(Debug, Clone)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    // The direction is kept as given: a sight vector is already unit length
    // and marching scales with it.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Block positions visited by stepping 1/8 of `direction` at a time for
    /// `max_distance * 8` steps, starting at the origin.
    pub fn march(&self, max_distance: u32) -> impl Iterator<Item = IVec3> + '_ {
        (0..max_distance.saturating_mul(STEPS_PER_BLOCK))
            .map(move |step| normalize(self.at(step as f32 / STEPS_PER_BLOCK as f32)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_march_step_count() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        assert_eq!(ray.march(3).count(), 24);
    }

    #[test]
    fn test_march_huge_distance_saturates() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let mut steps = ray.march(u32::MAX / 4);
        assert_eq!(steps.next(), Some(IVec3::ZERO));
        assert_eq!(steps.size_hint().1, Some(u32::MAX as usize - 1));
    }

    #[test]
    fn test_march_visits_blocks_in_order() {
        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::NEG_Y);
        let mut visited: Vec<IVec3> = ray.march(2).collect();
        visited.dedup();
        assert_eq!(
            visited,
            vec![IVec3::new(0, 5, 0), IVec3::new(0, 4, 0), IVec3::new(0, 3, 0)]
        );
    }
}
