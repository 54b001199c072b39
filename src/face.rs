//! # Watch face
//!
//! A [`Watchface`] holds everything the face keeps between frames: its configuration, the week
//! label buffer and the minute it last drew. It is owned by the caller and handed a surface
//! with [`Watchface::mount`].
//!
//! ## Mounting
//!
//! Mounting lays the face out on the surface, attaches to it and returns a [`Mounted`] guard.
//! The guard detaches from the surface when dropped, whichever way the caller leaves the scope.
//!
//! ## Frames
//!
//! A frame is painted back to front:
//!
//! - background fill and tick marks
//! - week label
//! - minute hand, hour hand and the hub dot over the pivot
//!
//! If the wall clock can't be read the frame is still drawn, with a blank label and both hands
//! at 12 o'clock.

use chrono::{Datelike, NaiveDateTime, Timelike};
use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

use crate::angle::Angle;
use crate::clock::{ClockTime, TimeSource};
use crate::config::FaceConfig;
use crate::geometry::{FaceGeometry, GeometryError};
use crate::hand::HandKind;
use crate::surface::Surface;
use crate::week::WeekLabel;

/// Errors from a mounted face
#[derive(Debug, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaceError<E> {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// The host surface failed to draw
    #[error("drawing failed: {0:?}")]
    Surface(E),
}

/// An analog watch face
#[derive(Clone, Debug)]
pub struct Watchface {
    config: FaceConfig,
    label: WeekLabel,
    /// Minutes since the common era of the last frame drawn with a known time
    last_drawn: Option<i64>,
}

impl Watchface {
    pub const fn new(config: FaceConfig) -> Self {
        Self {
            config,
            label: WeekLabel::blank(),
            last_drawn: None,
        }
    }

    pub fn config(&self) -> &FaceConfig {
        &self.config
    }

    /// The week label of the last frame
    pub fn label(&self) -> &WeekLabel {
        &self.label
    }

    /// Lay the face out on `surface` and attach to it.
    ///
    /// Fails without touching the surface if the face doesn't fit its bounds.
    pub fn mount<'a, S: Surface>(
        &'a mut self,
        surface: &'a mut S,
    ) -> Result<Mounted<'a, S>, FaceError<S::Error>> {
        let geometry = self.config.validate(surface.bounds())?;

        info!(
            "mounting face: radius {=u32} px, {=u16} ticks",
            geometry.radius(),
            geometry.tick_count()
        );

        surface.attach();
        self.last_drawn = None;

        Ok(Mounted {
            face: self,
            surface,
            geometry,
        })
    }
}

/// A face attached to a surface
pub struct Mounted<'a, S: Surface> {
    face: &'a mut Watchface,
    surface: &'a mut S,
    geometry: FaceGeometry,
}

impl<'a, S: Surface> Mounted<'a, S> {
    pub fn geometry(&self) -> &FaceGeometry {
        &self.geometry
    }

    pub fn surface(&self) -> &S {
        &*self.surface
    }

    pub fn label(&self) -> &WeekLabel {
        &self.face.label
    }

    /// Draw a frame at the time given by `clock`
    pub fn redraw(&mut self, clock: &impl TimeSource) -> Result<(), FaceError<S::Error>> {
        let now = match clock.now() {
            Ok(now) => Some(now),
            Err(err) => {
                warn!("can't read the wall clock, drawing a blank frame: {}", err);
                None
            }
        };

        self.draw(now)
    }

    /// Handle the host's minute tick.
    ///
    /// Draws when nothing has been drawn yet or at least the redraw interval separates `now`
    /// from the last frame. Returns whether a frame was drawn.
    pub fn on_tick(&mut self, now: NaiveDateTime) -> Result<bool, FaceError<S::Error>> {
        let stamp = minute_stamp(&now);
        let interval = self.face.config.redraw_interval.0 as u64;

        if let Some(last) = self.face.last_drawn {
            // A clock set backwards is a change too
            if stamp.abs_diff(last) < interval {
                trace!("tick within the redraw interval, skipping");
                return Ok(false);
            }
        }

        self.draw(Some(now))?;
        Ok(true)
    }

    /// Draw a frame for `now`, or a blank frame when the time is unknown
    pub fn draw(&mut self, now: Option<NaiveDateTime>) -> Result<(), FaceError<S::Error>> {
        self.draw_background().map_err(FaceError::Surface)?;
        self.draw_week_label(now).map_err(FaceError::Surface)?;
        self.draw_hands(now.map(|now| ClockTime::from_time(&now)))
            .map_err(FaceError::Surface)?;

        self.face.last_drawn = now.as_ref().map(minute_stamp);

        if let Some(now) = now {
            debug!("frame drawn at {=u32}:{=u32}", now.hour(), now.minute());
        }

        Ok(())
    }

    fn draw_background(&mut self) -> Result<(), S::Error> {
        let config = self.face.config;

        self.surface
            .fill_rect(self.geometry.bounds(), config.colors.background)?;

        for tick in self.geometry.ticks() {
            self.surface
                .draw_line(tick.inner, tick.outer, config.tick_width, config.colors.ticks)?;
        }

        Ok(())
    }

    fn draw_week_label(&mut self, now: Option<NaiveDateTime>) -> Result<(), S::Error> {
        let config = self.face.config;

        self.face
            .label
            .update(config.week_policy, now.map(|now| now.date()));

        if self.face.label.is_empty() {
            return Ok(());
        }

        let area = config.label_area(self.geometry.bounds());
        self.surface
            .draw_label(area, self.face.label.as_str(), config.colors.label)
    }

    fn draw_hands(&mut self, time: Option<ClockTime>) -> Result<(), S::Error> {
        let config = self.face.config;
        let colors = config.colors;
        let centre = self.geometry.centre();

        let hands = [
            (HandKind::Minute, colors.minute_fill, colors.minute_outline),
            (HandKind::Hour, colors.hour_fill, colors.hour_outline),
        ];

        for (kind, fill, outline) in hands {
            let angle = time.map_or(Angle::ZERO, |time| Angle::of_hand(kind, time));
            let path = config.hand(kind).rotated(angle).placed_at(centre);

            self.surface.fill_polygon(path.points(), fill)?;
            self.surface.outline_polygon(path.points(), outline)?;
        }

        // Dot over the pivot
        let bounds = self.geometry.bounds();
        let Size { width, height } = bounds.size;
        let hub = config.hub_size;
        let offset = (hub / 2) as i32;
        let top_left = bounds.top_left
            + Point::new((width / 2) as i32 - offset, (height / 2) as i32 - offset);

        self.surface
            .fill_rect(Rectangle::new(top_left, Size::new(hub, hub)), colors.hub)
    }
}

impl<'a, S: Surface> Drop for Mounted<'a, S> {
    fn drop(&mut self) {
        self.surface.detach();
        info!("face unmounted");
    }
}

/// Minutes since the common era
fn minute_stamp(now: &NaiveDateTime) -> i64 {
    now.date().num_days_from_ce() as i64 * 24 * 60 + now.hour() as i64 * 60 + now.minute() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    #[test]
    fn minute_stamps_count_minutes() {
        let at = |day, hour, minute| {
            NaiveDate::from_ymd_opt(2024, 2, day)
                .and_then(|d| d.and_hms_opt(hour, minute, 30))
                .unwrap()
        };

        assert_eq!(minute_stamp(&at(28, 10, 1)) - minute_stamp(&at(28, 10, 0)), 1);
        assert_eq!(minute_stamp(&at(29, 0, 0)) - minute_stamp(&at(28, 23, 59)), 1);
        assert_eq!(minute_stamp(&at(29, 0, 0)) - minute_stamp(&at(28, 0, 0)), 24 * 60);
    }
}
