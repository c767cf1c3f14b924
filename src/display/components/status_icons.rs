/*
 *  display/components/status_icons.rs
 *
 *  SweepS - time, well drawn
 *  (c) 2023-26 SweepS contributors
 *
 *  Procedurally drawn battery and bluetooth status icons
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

use crate::status::BatteryTier;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};

/// Battery icon drawn from primitives: outline, terminal nub, and a fill
/// bar proportional to the tier. Drawing by tier instead of swapping
/// bitmap handles means there is no stale resource to leak on update.
pub struct BatteryIcon {
    bounds: Rectangle,
}

impl BatteryIcon {
    pub fn new(bounds: Rectangle) -> Self {
        Self { bounds }
    }

    pub fn render<D>(&self, target: &mut D, tier: BatteryTier) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        const NUB_W: u32 = 3;

        let Size { width, height } = self.bounds.size;
        if width <= NUB_W + 4 || height < 6 {
            return Ok(());
        }

        let body = Rectangle::new(self.bounds.top_left, Size::new(width - NUB_W, height));
        body.into_styled(PrimitiveStyle::with_stroke(Rgb565::WHITE, 1))
            .draw(target)?;

        // terminal nub, vertically centered on the right edge
        let nub = Rectangle::new(
            Point::new(
                self.bounds.top_left.x + (width - NUB_W) as i32,
                self.bounds.top_left.y + (height / 4) as i32,
            ),
            Size::new(NUB_W, height / 2),
        );
        nub.into_styled(PrimitiveStyle::with_fill(Rgb565::WHITE))
            .draw(target)?;

        let inner = Rectangle::new(
            body.top_left + Point::new(2, 2),
            Size::new(body.size.width - 4, body.size.height - 4),
        );

        let (thirds, color) = match tier {
            BatteryTier::Full => (3, Rgb565::GREEN),
            BatteryTier::Mid => (2, Rgb565::YELLOW),
            BatteryTier::Low => (1, Rgb565::CSS_ORANGE),
            BatteryTier::Critical => (0, Rgb565::RED),
        };

        // Critical still shows a one-pixel sliver so the icon reads as
        // "nearly dead" rather than "broken"
        let fill_w = (inner.size.width * thirds / 3).max(1);
        Rectangle::new(inner.top_left, Size::new(fill_w, inner.size.height))
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(target)?;

        Ok(())
    }
}

/// The bluetooth-lost rune, stroked from line segments.
pub struct BluetoothIcon {
    bounds: Rectangle,
}

impl BluetoothIcon {
    pub fn new(bounds: Rectangle) -> Self {
        Self { bounds }
    }

    pub fn render<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let Size { width, height } = self.bounds.size;
        if width < 8 || height < 8 {
            return Ok(());
        }

        let tl = self.bounds.top_left;
        let cx = tl.x + width as i32 / 2;
        let left = tl.x + width as i32 / 4;
        let right = tl.x + 3 * width as i32 / 4;
        let top = tl.y;
        let upper = tl.y + height as i32 / 4;
        let lower = tl.y + 3 * height as i32 / 4;
        let bottom = tl.y + height as i32 - 1;

        let style = PrimitiveStyle::with_stroke(Rgb565::WHITE, 1);
        for (a, b) in [
            (Point::new(cx, top), Point::new(cx, bottom)),
            (Point::new(cx, top), Point::new(right, upper)),
            (Point::new(right, upper), Point::new(left, lower)),
            (Point::new(cx, bottom), Point::new(right, lower)),
            (Point::new(right, lower), Point::new(left, upper)),
        ] {
            Line::new(a, b).into_styled(style).draw(target)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::canvas::FrameCanvas;

    fn canvas() -> FrameCanvas<Rgb565> {
        FrameCanvas::new(48, 32, Rgb565::BLACK)
    }

    fn count_color(canvas: &FrameCanvas<Rgb565>, color: Rgb565) -> usize {
        canvas.as_slice().iter().filter(|&&c| c == color).count()
    }

    #[test]
    fn full_tier_fills_more_than_low() {
        let icon = BatteryIcon::new(Rectangle::new(Point::new(2, 2), Size::new(32, 15)));

        let mut full = canvas();
        icon.render(&mut full, BatteryTier::Full).unwrap();
        let mut low = canvas();
        icon.render(&mut low, BatteryTier::Low).unwrap();

        assert!(count_color(&full, Rgb565::GREEN) > 0);
        assert!(count_color(&low, Rgb565::CSS_ORANGE) > 0);
        assert!(count_color(&full, Rgb565::GREEN) > 2 * count_color(&low, Rgb565::CSS_ORANGE));
    }

    #[test]
    fn critical_tier_keeps_a_red_sliver() {
        let icon = BatteryIcon::new(Rectangle::new(Point::new(2, 2), Size::new(32, 15)));
        let mut c = canvas();
        icon.render(&mut c, BatteryTier::Critical).unwrap();
        assert!(count_color(&c, Rgb565::RED) > 0);
    }

    #[test]
    fn degenerate_bounds_draw_nothing() {
        let icon = BatteryIcon::new(Rectangle::new(Point::zero(), Size::new(5, 3)));
        let mut c = canvas();
        icon.render(&mut c, BatteryTier::Full).unwrap();
        assert!(c.as_slice().iter().all(|&p| p == Rgb565::BLACK));
    }

    #[test]
    fn bluetooth_rune_is_visible() {
        let icon = BluetoothIcon::new(Rectangle::new(Point::new(4, 4), Size::new(25, 25)));
        let mut c = canvas();
        icon.render(&mut c).unwrap();
        assert!(count_color(&c, Rgb565::WHITE) > 20);
    }
}
