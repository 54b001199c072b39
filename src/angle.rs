//! # Angles
//!
//! An [`Angle`] is a fraction of a full turn stored in fixed point, with `0x10000` units per
//! turn. The units live in a `u16` so all arithmetic wraps modulo one turn for free.
//!
//! Angles follow the dial convention: zero points at 12 o'clock and increasing angles rotate
//! clockwise on a screen whose y axis grows downwards.

use core::f32::consts::TAU;
use core::ops::{Add, Neg};

use embedded_graphics::prelude::Point;
use num_traits::Float;

use crate::clock::ClockTime;
use crate::hand::HandKind;

/// Angle units in a full turn
pub const FULL_TURN: u32 = 0x10000;

/// A direction on the dial
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Angle(u16);

impl Angle {
    /// 12 o'clock
    pub const ZERO: Angle = Angle(0);

    pub const fn from_units(units: u16) -> Self {
        Self(units)
    }

    pub const fn units(self) -> u16 {
        self.0
    }

    /// `num / den` of a full turn.
    ///
    /// Whole turns are discarded, so `from_fraction(60, 60)` is [`Angle::ZERO`]. A zero
    /// denominator also yields [`Angle::ZERO`].
    pub const fn from_fraction(num: u32, den: u32) -> Self {
        if den == 0 {
            return Self::ZERO;
        }

        let units = (num as u64 * FULL_TURN as u64) / den as u64;
        Self((units % FULL_TURN as u64) as u16)
    }

    /// Minute hand angle
    pub const fn minute(minute: u8) -> Self {
        Self::from_fraction(minute as u32, 60)
    }

    /// Hour hand angle.
    ///
    /// The hour is split into six steps of ten minutes, so the hand creeps forward through the
    /// hour in 1/72 turn increments instead of jumping on the hour.
    pub const fn hour(hour: u8, minute: u8) -> Self {
        Self::from_fraction((hour as u32 % 12) * 6 + minute as u32 / 10, 12 * 6)
    }

    /// Angle of a hand at the given time
    pub const fn of_hand(kind: HandKind, time: ClockTime) -> Self {
        match kind {
            HandKind::Minute => Self::minute(time.minute()),
            HandKind::Hour => Self::hour(time.hour(), time.minute()),
        }
    }

    pub fn radians(self) -> f32 {
        self.0 as f32 / FULL_TURN as f32 * TAU
    }

    /// Screen space unit vector `(sin, -cos)` pointing along the angle
    pub fn direction(self) -> (f32, f32) {
        let radians = self.radians();
        (Float::sin(radians), -Float::cos(radians))
    }

    /// The point `distance` pixels from `origin` along the angle, rounded to the nearest pixel
    pub fn project(self, origin: Point, distance: i32) -> Point {
        let (x, y) = self.direction();
        let distance = distance as f32;

        origin + Point::new(Float::round(x * distance) as i32, Float::round(y * distance) as i32)
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Angle {
        Angle(self.0.wrapping_add(rhs.0))
    }
}

impl Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        Angle(self.0.wrapping_neg())
    }
}

/// Rotate a point about the origin, rounding to the nearest pixel
pub fn rotate(point: Point, angle: Angle) -> Point {
    let radians = angle.radians();
    let (sin, cos) = (Float::sin(radians), Float::cos(radians));
    let (x, y) = (point.x as f32, point.y as f32);

    Point::new(
        Float::round(x * cos - y * sin) as i32,
        Float::round(x * sin + y * cos) as i32,
    )
}
