//! # Drawing surface
//!
//! The face never touches pixels itself; it issues a handful of primitive draw calls on a
//! [`Surface`] provided by the host. [`GraphicsSurface`] provides one for any
//! [`embedded_graphics`] draw target.
//!
//! ## Lifecycle
//!
//! [`Surface::attach`] and [`Surface::detach`] bracket the time a face is mounted on the surface,
//! for hosts which need to create and destroy layers or widgets. Both default to doing nothing.

use embedded_graphics::mono_font::ascii::FONT_10X20;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle, Triangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};

/// Host drawing operations used by the face
pub trait Surface {
    type Error;

    /// Area available to the face
    fn bounds(&self) -> Rectangle;

    fn fill_rect(&mut self, rect: Rectangle, color: Rgb888) -> Result<(), Self::Error>;

    fn draw_line(
        &mut self,
        from: Point,
        to: Point,
        width: u32,
        color: Rgb888,
    ) -> Result<(), Self::Error>;

    /// Fill a closed convex polygon
    fn fill_polygon(&mut self, points: &[Point], color: Rgb888) -> Result<(), Self::Error>;

    /// Draw the 1 px outline of a closed polygon
    fn outline_polygon(&mut self, points: &[Point], color: Rgb888) -> Result<(), Self::Error>;

    /// Draw `text` centred horizontally at the top of `area`
    fn draw_label(&mut self, area: Rectangle, text: &str, color: Rgb888) -> Result<(), Self::Error>;

    /// Called when a face is mounted
    fn attach(&mut self) {}

    /// Called when a face is unmounted
    fn detach(&mut self) {}
}

/// [`Surface`] over an [`embedded_graphics`] draw target
pub struct GraphicsSurface<D>(D);

impl<D> GraphicsSurface<D> {
    pub fn new(target: D) -> Self {
        Self(target)
    }

    pub fn into_inner(self) -> D {
        self.0
    }

    pub fn target(&self) -> &D {
        &self.0
    }
}

impl<D> Surface for GraphicsSurface<D>
where
    D: DrawTarget,
    D::Color: From<Rgb888>,
{
    type Error = D::Error;

    fn bounds(&self) -> Rectangle {
        self.0.bounding_box()
    }

    fn fill_rect(&mut self, rect: Rectangle, color: Rgb888) -> Result<(), Self::Error> {
        let color: D::Color = color.into();
        self.0.fill_solid(&rect, color)
    }

    fn draw_line(
        &mut self,
        from: Point,
        to: Point,
        width: u32,
        color: Rgb888,
    ) -> Result<(), Self::Error> {
        let color: D::Color = color.into();

        Line::new(from, to)
            .into_styled(PrimitiveStyle::with_stroke(color, width))
            .draw(&mut self.0)
    }

    fn fill_polygon(&mut self, points: &[Point], color: Rgb888) -> Result<(), Self::Error> {
        let style = PrimitiveStyle::<D::Color>::with_fill(color.into());

        // Convex polygons fill as a fan of triangles around the first point
        if let Some((&first, rest)) = points.split_first() {
            for pair in rest.windows(2) {
                Triangle::new(first, pair[0], pair[1])
                    .into_styled(style)
                    .draw(&mut self.0)?;
            }
        }

        Ok(())
    }

    fn outline_polygon(&mut self, points: &[Point], color: Rgb888) -> Result<(), Self::Error> {
        let style = PrimitiveStyle::<D::Color>::with_stroke(color.into(), 1);

        for (index, &from) in points.iter().enumerate() {
            let to = points[(index + 1) % points.len()];
            Line::new(from, to).into_styled(style).draw(&mut self.0)?;
        }

        Ok(())
    }

    fn draw_label(
        &mut self,
        area: Rectangle,
        text: &str,
        color: Rgb888,
    ) -> Result<(), Self::Error> {
        let character_style = MonoTextStyle::<D::Color>::new(&FONT_10X20, color.into());
        let text_style = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Top)
            .build();
        let position = area.top_left + Point::new((area.size.width / 2) as i32, 0);

        Text::with_text_style(text, position, character_style, text_style).draw(&mut self.0)?;

        Ok(())
    }
}
