//! # Face configuration
//!
//! The watch face comes in two editions which differ only in configuration:
//!
//! - [`FaceConfig::hour_ticks`]: twelve bold ticks with the quarters emphasised, a red hour hand
//!   on a blue dial and the day-of-year week number.
//! - [`FaceConfig::minute_ticks`]: sixty fine ticks, white hands outlined in black on a black
//!   dial and the Sunday-first calendar week.
//!
//! Either can be adjusted with the `with_*` builders before the face is mounted.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;
use embedded_time::duration::Minutes;

use crate::geometry::{FaceGeometry, GeometryError, Shape, TickLengths};
use crate::hand::{HandKind, HandShape, HOUR_HAND, MINUTE_HAND};
use crate::week::WeekPolicy;

const WHITE: Rgb888 = Rgb888::new(0xFF, 0xFF, 0xFF);
const BLACK: Rgb888 = Rgb888::new(0x00, 0x00, 0x00);
const BLUE: Rgb888 = Rgb888::new(0x00, 0x00, 0xFF);
const RED: Rgb888 = Rgb888::new(0xFF, 0x00, 0x00);

/// Colours of each part of the face
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorScheme {
    pub background: Rgb888,
    pub ticks: Rgb888,
    pub minute_fill: Rgb888,
    pub minute_outline: Rgb888,
    pub hour_fill: Rgb888,
    pub hour_outline: Rgb888,
    /// Dot over the hand pivot
    pub hub: Rgb888,
    /// Week number text
    pub label: Rgb888,
}

impl ColorScheme {
    /// White on blue with a red hour hand
    pub const BLUE: ColorScheme = ColorScheme {
        background: BLUE,
        ticks: WHITE,
        minute_fill: WHITE,
        minute_outline: WHITE,
        hour_fill: RED,
        hour_outline: RED,
        hub: BLACK,
        label: WHITE,
    };

    /// White on black, hands outlined in black
    pub const BLACK: ColorScheme = ColorScheme {
        background: BLACK,
        ticks: WHITE,
        minute_fill: WHITE,
        minute_outline: BLACK,
        hour_fill: WHITE,
        hour_outline: BLACK,
        hub: BLACK,
        label: WHITE,
    };
}

/// Everything needed to lay out and paint a face
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceConfig {
    pub shape: Shape,
    /// Number of ticks around the dial
    pub tick_count: u16,
    pub tick_lengths: TickLengths,
    /// Tick stroke width (px)
    pub tick_width: u32,
    /// Radius given up to the bezel on round displays (px)
    pub round_inset: u32,
    pub week_policy: WeekPolicy,
    pub colors: ColorScheme,
    pub minute_hand: HandShape,
    pub hour_hand: HandShape,
    /// Side of the square hub dot (px)
    pub hub_size: u32,
    /// Top of the week label, relative to the top of the surface (px)
    pub label_top: i32,
    pub label_height: u32,
    /// Minimum time between redraws
    pub redraw_interval: Minutes<u32>,
}

impl FaceConfig {
    /// Twelve tick face
    ///
    /// * Ticks at 12, 3, 6 and 9 o'clock are 15 px, the rest 10 px, all 5 px wide
    /// * Round displays lose 5 px of radius
    /// * Week numbers count from the day of the year
    pub const fn hour_ticks(shape: Shape) -> Self {
        Self {
            shape,
            tick_count: 12,
            tick_lengths: TickLengths::Emphasised {
                major: 15,
                minor: 10,
                every: 3,
            },
            tick_width: 5,
            round_inset: 5,
            week_policy: WeekPolicy::DayOfYear,
            colors: ColorScheme::BLUE,
            minute_hand: MINUTE_HAND,
            hour_hand: HOUR_HAND,
            hub_size: 5,
            label_top: 114,
            label_height: 30,
            redraw_interval: Minutes(1),
        }
    }

    /// Sixty tick face
    ///
    /// * Every tick is 5 px long and 1 px wide
    /// * Round displays lose 19 px of radius to leave room for the week label
    /// * Week numbers count Sundays
    pub const fn minute_ticks(shape: Shape) -> Self {
        Self {
            shape,
            tick_count: 60,
            tick_lengths: TickLengths::Uniform(5),
            tick_width: 1,
            round_inset: 19,
            week_policy: WeekPolicy::SundayWeeks,
            colors: ColorScheme::BLACK,
            minute_hand: MINUTE_HAND,
            hour_hand: HOUR_HAND,
            hub_size: 3,
            label_top: 114,
            label_height: 30,
            redraw_interval: Minutes(1),
        }
    }

    pub const fn with_tick_count(mut self, tick_count: u16) -> Self {
        self.tick_count = tick_count;
        self
    }

    pub const fn with_tick_lengths(mut self, tick_lengths: TickLengths) -> Self {
        self.tick_lengths = tick_lengths;
        self
    }

    pub const fn with_week_policy(mut self, week_policy: WeekPolicy) -> Self {
        self.week_policy = week_policy;
        self
    }

    pub const fn with_colors(mut self, colors: ColorScheme) -> Self {
        self.colors = colors;
        self
    }

    pub const fn with_hands(mut self, minute_hand: HandShape, hour_hand: HandShape) -> Self {
        self.minute_hand = minute_hand;
        self.hour_hand = hour_hand;
        self
    }

    pub const fn with_redraw_interval(mut self, interval: Minutes<u32>) -> Self {
        self.redraw_interval = interval;
        self
    }

    /// Outline of the given hand
    pub const fn hand(&self, kind: HandKind) -> HandShape {
        match kind {
            HandKind::Minute => self.minute_hand,
            HandKind::Hour => self.hour_hand,
        }
    }

    /// Check the configuration fits a surface, returning the resulting layout
    pub fn validate(&self, bounds: Rectangle) -> Result<FaceGeometry, GeometryError> {
        FaceGeometry::new(bounds, self)
    }

    /// Area of the week label within `bounds`
    pub fn label_area(&self, bounds: Rectangle) -> Rectangle {
        Rectangle::new(
            bounds.top_left + Point::new(0, self.label_top),
            Size::new(bounds.size.width, self.label_height),
        )
    }
}
