/*
 *  display/canvas.rs
 *
 *  SweepS - time, well drawn
 *  (c) 2023-26 SweepS contributors
 *
 *  Runtime-sized framebuffer the face composites into
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use core::convert::Infallible;
use embedded_graphics::geometry::{OriginDimensions, Size};
use embedded_graphics::pixelcolor::PixelColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// A runtime-sized framebuffer for embedded-graphics. The paint pass
/// draws here; a [`crate::host::DisplaySink`] carries the finished frame
/// out. Out-of-bounds pixels are silently clipped.
#[derive(Debug, Clone)]
pub struct FrameCanvas<C: PixelColor> {
    buf: Vec<C>,
    width: usize,
    height: usize,
}

impl<C: PixelColor + Clone> FrameCanvas<C> {
    pub fn new(width: u32, height: u32, fill: C) -> Self {
        let (width, height) = (width as usize, height as usize);
        Self {
            buf: vec![fill; width * height],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width as u32
    }

    pub fn height(&self) -> u32 {
        self.height as u32
    }

    /// Row-major pixel data, for hosts that push the whole frame at once.
    pub fn as_slice(&self) -> &[C] {
        &self.buf
    }

    /// Read a single pixel back; `None` outside the canvas.
    pub fn pixel(&self, p: Point) -> Option<C> {
        self.index_of(p).map(|i| self.buf[i])
    }

    #[inline]
    fn index_of(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 {
            return None;
        }
        let (x, y) = (p.x as usize, p.y as usize);
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }
}

impl<C: PixelColor> OriginDimensions for FrameCanvas<C> {
    fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }
}

impl<C: PixelColor + Clone> DrawTarget for FrameCanvas<C> {
    type Color = C;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(p, color) in pixels {
            if let Some(i) = self.index_of(p) {
                self.buf[i] = color;
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        // row-sliced fast path for the rectangle fills the primitives use
        let bounds = self.bounding_box();
        let area = area.intersection(&bounds);
        if area.size.width == 0 || area.size.height == 0 {
            return Ok(());
        }
        let x0 = area.top_left.x as usize;
        let y0 = area.top_left.y as usize;
        let w = area.size.width as usize;
        for row in 0..area.size.height as usize {
            let base = (y0 + row) * self.width + x0;
            self.buf[base..base + w].fill(color);
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.buf.fill(color);
        Ok(())
    }
}
