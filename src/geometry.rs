//! # Face geometry
//!
//! [`FaceGeometry`] turns the bounds of the drawing surface and a [`FaceConfig`] into the pixel
//! positions of everything on the dial. It is computed once when the face is mounted and is
//! never changed afterwards.
//!
//! ## Ticks
//!
//! Tick `i` of `n` points at `i / n` of a full turn. The outer end sits on the face radius and
//! the inner end `tick length` pixels closer to the centre.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::angle::Angle;
use crate::config::FaceConfig;

/// Invalid face configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GeometryError {
    /// The face radius leaves no room for the ticks
    #[error("face radius {radius} px must exceed the tick length {tick_length} px")]
    TickTooLong { radius: i32, tick_length: u32 },

    /// A face needs at least one tick
    #[error("a face needs at least one tick")]
    NoTicks,

    /// A hand outline needs between 3 and 8 points
    #[error("a hand outline can't have {points} points")]
    BadHandShape { points: u32 },
}

/// Outline of the watch display
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Shape {
    Round,
    Rectangular,
}

/// How long each tick is
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickLengths {
    /// Every tick has the same length
    Uniform(u32),
    /// Every `every`th tick, starting at 12 o'clock, is `major` long and the rest `minor`
    Emphasised { major: u32, minor: u32, every: u16 },
}

impl TickLengths {
    /// Length of tick `index`
    pub const fn length(&self, index: u16) -> u32 {
        match *self {
            TickLengths::Uniform(length) => length,
            TickLengths::Emphasised { major, minor, every } => {
                if every != 0 && index % every == 0 {
                    major
                } else {
                    minor
                }
            }
        }
    }

    /// The longest tick
    pub const fn longest(&self) -> u32 {
        match *self {
            TickLengths::Uniform(length) => length,
            TickLengths::Emphasised { major, minor, .. } => {
                if major > minor {
                    major
                } else {
                    minor
                }
            }
        }
    }
}

/// A tick mark line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tick {
    /// End nearest the centre
    pub inner: Point,
    /// End on the face radius
    pub outer: Point,
}

/// Pixel geometry of a mounted face.
///
/// Only [`FaceGeometry::new`] builds one, so every value has at least one tick and a radius
/// longer than its longest tick.
///
/// ```compile_fail
/// # use simple_analog::{FaceGeometry, TickLengths};
/// # use embedded_graphics::prelude::*;
/// # use embedded_graphics::primitives::Rectangle;
/// let geometry = FaceGeometry {
///     bounds: Rectangle::new(Point::zero(), Size::new(144, 168)),
///     centre: Point::new(72, 84),
///     radius: 72,
///     tick_count: 0,
///     tick_lengths: TickLengths::Uniform(5),
///     minute_hand_length: 80,
///     hour_hand_length: 60,
/// };
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceGeometry {
    bounds: Rectangle,
    centre: Point,
    radius: u32,
    tick_count: u16,
    tick_lengths: TickLengths,
    minute_hand_length: u32,
    hour_hand_length: u32,
}

impl FaceGeometry {
    /// Lay out a face within `bounds`.
    ///
    /// Round faces give up `round_inset` pixels of radius to the bezel. The radius must be
    /// strictly longer than the longest tick.
    pub fn new(bounds: Rectangle, config: &FaceConfig) -> Result<Self, GeometryError> {
        if config.tick_count == 0 {
            return Err(GeometryError::NoTicks);
        }

        let Size { width, height } = bounds.size;
        let centre = bounds.top_left + Point::new((width / 2) as i32, (height / 2) as i32);

        let radius = match config.shape {
            Shape::Round => (width / 2) as i32 - config.round_inset as i32,
            Shape::Rectangular => (width / 2) as i32,
        };

        let tick_length = config.tick_lengths.longest();
        if radius <= tick_length as i32 {
            return Err(GeometryError::TickTooLong { radius, tick_length });
        }

        Ok(Self {
            bounds,
            centre,
            radius: radius as u32,
            tick_count: config.tick_count,
            tick_lengths: config.tick_lengths,
            minute_hand_length: config.minute_hand.reach(),
            hour_hand_length: config.hour_hand.reach(),
        })
    }

    /// Area of the surface the face covers
    pub const fn bounds(&self) -> Rectangle {
        self.bounds
    }

    /// Pivot of the hands
    pub const fn centre(&self) -> Point {
        self.centre
    }

    /// Distance from the centre to the outer end of each tick (px)
    pub const fn radius(&self) -> u32 {
        self.radius
    }

    pub const fn tick_count(&self) -> u16 {
        self.tick_count
    }

    pub const fn tick_lengths(&self) -> TickLengths {
        self.tick_lengths
    }

    pub const fn minute_hand_length(&self) -> u32 {
        self.minute_hand_length
    }

    pub const fn hour_hand_length(&self) -> u32 {
        self.hour_hand_length
    }

    /// Direction of tick `index`; indices past the tick count wrap around the dial
    pub const fn tick_angle(&self, index: u16) -> Angle {
        Angle::from_fraction((index % self.tick_count) as u32, self.tick_count as u32)
    }

    /// End points of tick `index`
    pub fn tick(&self, index: u16) -> Tick {
        let index = index % self.tick_count;
        let angle = self.tick_angle(index);
        let length = self.tick_lengths.length(index);

        Tick {
            inner: angle.project(self.centre, self.radius as i32 - length as i32),
            outer: angle.project(self.centre, self.radius as i32),
        }
    }

    /// Every tick on the dial, clockwise from 12 o'clock
    pub fn ticks(&self) -> impl Iterator<Item = Tick> {
        let geometry = *self;
        (0..self.tick_count).map(move |index| geometry.tick(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::HandShape;
    use pretty_assertions::assert_eq;

    fn screen(width: u32, height: u32) -> Rectangle {
        Rectangle::new(Point::zero(), Size::new(width, height))
    }

    /// Rectangular 144x168 display
    fn watch(config: FaceConfig) -> FaceGeometry {
        FaceGeometry::new(screen(144, 168), &config).unwrap()
    }

    #[test]
    fn rectangular_layout() {
        let geometry = watch(FaceConfig::hour_ticks(Shape::Rectangular));

        assert_eq!(geometry.centre(), Point::new(72, 84));
        assert_eq!(geometry.radius(), 72);
        assert_eq!(geometry.minute_hand_length(), 80);
        assert_eq!(geometry.hour_hand_length(), 60);
    }

    #[test]
    fn round_faces_leave_room_for_the_bezel() {
        let hours = FaceGeometry::new(screen(180, 180), &FaceConfig::hour_ticks(Shape::Round));
        let minutes = FaceGeometry::new(screen(180, 180), &FaceConfig::minute_ticks(Shape::Round));

        assert_eq!(hours.map(|g| g.radius()), Ok(85));
        assert_eq!(minutes.map(|g| g.radius()), Ok(71));
    }

    #[test]
    fn centre_follows_the_bounds() {
        let bounds = Rectangle::new(Point::new(10, 20), Size::new(100, 60));
        let config = FaceConfig::minute_ticks(Shape::Rectangular);
        let geometry = FaceGeometry::new(bounds, &config).unwrap();

        assert_eq!(geometry.centre(), Point::new(60, 50));
    }

    #[test]
    fn first_tick_is_due_north() {
        for config in [
            FaceConfig::hour_ticks(Shape::Rectangular),
            FaceConfig::minute_ticks(Shape::Round),
        ] {
            let geometry = watch(config);
            let tick = geometry.tick(0);

            assert_eq!(tick.outer.x, geometry.centre().x);
            assert_eq!(tick.inner.x, geometry.centre().x);
            assert!(tick.outer.y < tick.inner.y && tick.inner.y < geometry.centre().y);
        }
    }

    #[test]
    fn quarter_past_tick_is_due_east() {
        let hours = watch(FaceConfig::hour_ticks(Shape::Rectangular));
        let minutes = watch(FaceConfig::minute_ticks(Shape::Rectangular));

        assert_eq!(
            hours.tick(3),
            Tick { inner: Point::new(129, 84), outer: Point::new(144, 84) }
        );
        assert_eq!(
            minutes.tick(15),
            Tick { inner: Point::new(139, 84), outer: Point::new(144, 84) }
        );
    }

    #[test]
    fn every_third_hour_tick_is_longer() {
        let geometry = watch(FaceConfig::hour_ticks(Shape::Rectangular));

        for (index, tick) in geometry.ticks().enumerate() {
            let length = tick.outer - tick.inner;
            let length = ((length.x * length.x + length.y * length.y) as f32).sqrt();
            let expected = if index % 3 == 0 { 15.0 } else { 10.0 };

            assert!((length - expected).abs() <= 1.5, "tick {index} is {length} px");
        }
    }

    #[test]
    fn tick_sets() {
        let hours = watch(FaceConfig::hour_ticks(Shape::Rectangular));
        let minutes = watch(FaceConfig::minute_ticks(Shape::Rectangular));

        assert_eq!(hours.ticks().count(), 12);
        assert_eq!(minutes.ticks().count(), 60);
        assert_eq!(minutes.tick(60), minutes.tick(0));
        assert_eq!(hours.tick_angle(6), Angle::from_fraction(1, 2));
    }

    #[test]
    fn radius_equal_to_tick_length_is_rejected() {
        let config = FaceConfig::minute_ticks(Shape::Rectangular)
            .with_tick_lengths(TickLengths::Uniform(30));

        assert_eq!(
            FaceGeometry::new(screen(60, 60), &config),
            Err(GeometryError::TickTooLong { radius: 30, tick_length: 30 })
        );
        assert!(FaceGeometry::new(screen(62, 62), &config).is_ok());
    }

    #[test]
    fn tiny_round_face_is_rejected() {
        let config = FaceConfig::minute_ticks(Shape::Round);

        assert_eq!(
            FaceGeometry::new(screen(30, 30), &config),
            Err(GeometryError::TickTooLong { radius: -4, tick_length: 5 })
        );
    }

    #[test]
    fn custom_hands_set_the_hand_lengths() {
        const LONG: &[Point] = &[Point::new(-4, 10), Point::new(4, 10), Point::new(0, -70)];
        const SHORT: &[Point] = &[Point::new(-4, 10), Point::new(4, 10), Point::new(0, -45)];

        let config = FaceConfig::hour_ticks(Shape::Rectangular)
            .with_hands(HandShape::new(LONG).unwrap(), HandShape::new(SHORT).unwrap());
        let geometry = watch(config);

        assert_eq!(geometry.minute_hand_length(), 70);
        assert_eq!(geometry.hour_hand_length(), 45);
    }

    #[test]
    fn faces_need_ticks() {
        let config = FaceConfig::hour_ticks(Shape::Round).with_tick_count(0);

        assert_eq!(FaceGeometry::new(screen(144, 168), &config), Err(GeometryError::NoTicks));
    }
}
