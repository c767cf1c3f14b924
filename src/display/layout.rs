/*
 *  display/layout.rs
 *
 *  SweepS - time, well drawn
 *  (c) 2023-26 SweepS contributors
 *
 *  Screen layout: where the dial, text bands, and status icons live
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

use crate::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::primitives::Rectangle;

/// Placement of every fixed element on the face. All rectangles were laid
/// out on the native 144x168 canvas and scale linearly to other screens.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    pub width: u32,
    pub height: u32,

    /// Dial pivot; both hands are anchored here.
    pub center: Point,

    /// "07 Mar" band, top right.
    pub date: Rectangle,

    /// "Sat" band, top left.
    pub day: Rectangle,

    /// Battery tier icon, bottom left.
    pub battery: Rectangle,

    /// Bluetooth-lost icon, bottom right, visible only while disconnected.
    pub bluetooth: Rectangle,

    /// Temperature band, bottom right, visible only while connected.
    pub weather: Rectangle,
}

impl LayoutConfig {
    /// Build the layout for a given screen size.
    pub fn for_screen(width: u32, height: u32) -> Self {
        let rect = |x: i32, y: i32, w: u32, h: u32| {
            Rectangle::new(
                Point::new(scale(x, width, SCREEN_WIDTH), scale(y, height, SCREEN_HEIGHT)),
                Size::new(
                    scale(w as i32, width, SCREEN_WIDTH) as u32,
                    scale(h as i32, height, SCREEN_HEIGHT) as u32,
                ),
            )
        };

        Self {
            width,
            height,
            center: Point::new(
                scale(72, width, SCREEN_WIDTH),
                scale(99, height, SCREEN_HEIGHT),
            ),
            date: rect(70, 0, 70, 25),
            day: rect(5, 0, 40, 25),
            battery: rect(3, 150, 32, 15),
            bluetooth: rect(115, 140, 25, 25),
            weather: rect(108, 140, 35, 25),
        }
    }
}

#[inline]
fn scale(v: i32, actual: u32, native: u32) -> i32 {
    v * actual as i32 / native as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_layout_matches_reference_coordinates() {
        let layout = LayoutConfig::for_screen(SCREEN_WIDTH, SCREEN_HEIGHT);
        assert_eq!(layout.center, Point::new(72, 99));
        assert_eq!(layout.date.top_left, Point::new(70, 0));
        assert_eq!(layout.day.top_left, Point::new(5, 0));
        assert_eq!(layout.battery.top_left, Point::new(3, 150));
        assert_eq!(layout.bluetooth.top_left, Point::new(115, 140));
        assert_eq!(layout.weather.top_left, Point::new(108, 140));
        assert_eq!(layout.weather.size, Size::new(35, 25));
    }

    #[test]
    fn doubled_screen_scales_linearly() {
        let layout = LayoutConfig::for_screen(SCREEN_WIDTH * 2, SCREEN_HEIGHT * 2);
        assert_eq!(layout.center, Point::new(144, 198));
        assert_eq!(layout.battery.size, Size::new(64, 30));
    }

    #[test]
    fn everything_stays_on_screen() {
        for (w, h) in [(144u32, 168u32), (200, 200), (320, 240)] {
            let layout = LayoutConfig::for_screen(w, h);
            for r in [layout.date, layout.day, layout.battery, layout.bluetooth, layout.weather] {
                let br = r.bottom_right().unwrap_or(r.top_left);
                assert!(br.x <= w as i32 && br.y <= h as i32);
            }
            assert!(layout.center.x < w as i32 && layout.center.y < h as i32);
        }
    }
}
