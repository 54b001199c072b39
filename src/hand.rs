//! # Hands
//!
//! A hand is a small closed polygon drawn in an un-rotated frame: the origin is the pivot and
//! the tip points at 12 o'clock (negative y). Each frame the shape is rotated to the hand's
//! angle and placed at the face centre; the shape itself is never modified.

use embedded_graphics::prelude::Point;
use heapless::Vec;
use num_traits::Float;

use crate::angle::{self, Angle};
use crate::geometry::GeometryError;

/// The most points a hand polygon can have
pub const MAX_HAND_POINTS: usize = 8;

/// Which hand
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HandKind {
    Minute,
    Hour,
}

/// The outline of a hand
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HandShape(&'static [Point]);

/// Long, narrow minute hand
pub const MINUTE_HAND: HandShape =
    HandShape(&[Point::new(-8, 20), Point::new(8, 20), Point::new(0, -80)]);

/// Short hour hand
pub const HOUR_HAND: HandShape =
    HandShape(&[Point::new(-6, 20), Point::new(6, 20), Point::new(0, -60)]);

impl HandShape {
    /// Create a hand from its outline.
    ///
    /// A polygon needs at least three points and at most [`MAX_HAND_POINTS`].
    pub const fn new(points: &'static [Point]) -> Result<Self, GeometryError> {
        if points.len() < 3 || points.len() > MAX_HAND_POINTS {
            return Err(GeometryError::BadHandShape {
                points: points.len() as u32,
            });
        }

        Ok(Self(points))
    }

    pub fn points(&self) -> &'static [Point] {
        self.0
    }

    /// Distance from the pivot to the furthest point, rounded up
    pub fn reach(&self) -> u32 {
        let furthest = self
            .0
            .iter()
            .map(|p| (p.x * p.x + p.y * p.y) as u32)
            .max()
            .unwrap_or(0);

        Float::ceil(Float::sqrt(furthest as f32)) as u32
    }

    /// Rotate the hand about its pivot
    pub fn rotated(&self, angle: Angle) -> HandPath {
        HandPath(self.0.iter().map(|&p| angle::rotate(p, angle)).collect())
    }
}

/// A hand rotated into position
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HandPath(Vec<Point, MAX_HAND_POINTS>);

impl HandPath {
    /// Move the pivot to `centre`
    pub fn placed_at(mut self, centre: Point) -> Self {
        for point in self.0.iter_mut() {
            *point += centre;
        }

        self
    }

    pub fn points(&self) -> &[Point] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn too_few_points() {
        const LINE: &[Point] = &[Point::new(0, 0), Point::new(0, -10)];

        assert_eq!(HandShape::new(LINE), Err(GeometryError::BadHandShape { points: 2 }));
        assert!(HandShape::new(MINUTE_HAND.points()).is_ok());
    }

    #[test]
    fn too_many_points() {
        const STAR: &[Point] = &[Point::new(0, -10); MAX_HAND_POINTS + 1];

        assert_eq!(HandShape::new(STAR), Err(GeometryError::BadHandShape { points: 9 }));
    }

    #[test]
    fn reach() {
        const OFF_AXIS: &[Point] = &[Point::new(-2, 3), Point::new(2, 3), Point::new(5, -40)];

        assert_eq!(MINUTE_HAND.reach(), 80);
        assert_eq!(HOUR_HAND.reach(), 60);
        // sqrt(1625) is just over 40.3
        assert_eq!(HandShape::new(OFF_AXIS).map(|hand| hand.reach()), Ok(41));
    }

    #[test]
    fn unrotated_hand_only_moves() {
        let path = HOUR_HAND.rotated(Angle::ZERO).placed_at(Point::new(72, 84));

        assert_eq!(
            path.points(),
            &[Point::new(66, 104), Point::new(78, 104), Point::new(72, 24)]
        );
    }

    #[test]
    fn half_past_points_down() {
        let path = MINUTE_HAND
            .rotated(Angle::minute(30))
            .placed_at(Point::new(72, 84));

        assert_eq!(path.points()[2], Point::new(72, 164));
    }

    #[test]
    fn rotation_keeps_the_shape() {
        let angle = Angle::from_fraction(1, 3);
        let rotated = MINUTE_HAND.rotated(angle);

        assert_eq!(rotated.points().len(), MINUTE_HAND.points().len());

        for (&point, original) in rotated.points().iter().zip(MINUTE_HAND.points()) {
            let restored = angle::rotate(point, -angle);
            let delta = restored - *original;
            assert!(delta.x.abs() <= 1 && delta.y.abs() <= 1);
        }
    }
}
