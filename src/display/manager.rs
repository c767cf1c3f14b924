/*
 *  display/manager.rs
 *
 *  SweepS - time, well drawn
 *  (c) 2023-26 SweepS contributors
 *
 *  Composites the face components into the frame canvas
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

use crate::app::FaceSnapshot;
use crate::display::canvas::FrameCanvas;
use crate::display::components::{BatteryIcon, BluetoothIcon, FaceRenderer, FaceText};
use crate::display::error::DisplayError;
use crate::display::layout::LayoutConfig;
use core::convert::Infallible;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

/// Owns the canvas and the face components; one `compose` call per dirty
/// paint pass rebuilds the whole frame. Geometry is validated once here,
/// so composing itself cannot fail.
pub struct DisplayManager {
    canvas: FrameCanvas<Rgb565>,
    layout: LayoutConfig,
    face: FaceRenderer,
    battery_icon: BatteryIcon,
    bluetooth_icon: BluetoothIcon,
    text: FaceText,
    final_radius: i32,
}

impl DisplayManager {
    pub fn new(
        width: u32,
        height: u32,
        final_radius: i32,
        hand_margin: i32,
    ) -> Result<Self, DisplayError> {
        if width == 0 || height == 0 {
            return Err(DisplayError::InvalidGeometry(format!(
                "screen {}x{} has no area",
                width, height
            )));
        }
        if hand_margin <= 0 || final_radius <= 2 * hand_margin {
            return Err(DisplayError::InvalidGeometry(format!(
                "final radius {} must exceed twice the hand margin {}",
                final_radius, hand_margin
            )));
        }

        let layout = LayoutConfig::for_screen(width, height);
        let reach = final_radius;
        if layout.center.x - reach < 0
            || layout.center.y - reach < 0
            || layout.center.x + reach >= width as i32
            || layout.center.y + reach >= height as i32
        {
            return Err(DisplayError::InvalidGeometry(format!(
                "dial radius {} overflows the {}x{} screen at {:?}",
                final_radius, width, height, layout.center
            )));
        }

        Ok(Self {
            canvas: FrameCanvas::new(width, height, Rgb565::BLACK),
            face: FaceRenderer::new(layout.center, hand_margin),
            battery_icon: BatteryIcon::new(layout.battery),
            bluetooth_icon: BluetoothIcon::new(layout.bluetooth),
            text: FaceText::new(layout.clone()),
            layout,
            final_radius,
        })
    }

    /// Repaint the whole frame from a snapshot.
    pub fn compose(&mut self, snap: &FaceSnapshot) {
        let result = self.draw_frame(snap);
        // canvas drawing is Infallible; make that visible to the compiler
        match result {
            Ok(()) => {}
            Err(e) => match e {},
        }
    }

    fn draw_frame(&mut self, snap: &FaceSnapshot) -> Result<(), Infallible> {
        self.canvas.clear(Rgb565::BLACK)?;

        self.face.render_tick_ring(&mut self.canvas, self.final_radius)?;

        let plot = self.face.plot(snap.radius, snap.time, snap.animating);
        self.face.render(&mut self.canvas, &plot)?;

        self.battery_icon.render(&mut self.canvas, snap.battery)?;
        if snap.show_bluetooth_icon {
            self.bluetooth_icon.render(&mut self.canvas)?;
        }

        self.text.render(
            &mut self.canvas,
            &snap.date,
            &snap.day,
            &snap.temperature,
            snap.show_weather_text,
        )?;

        Ok(())
    }

    pub fn canvas(&self) -> &FrameCanvas<Rgb565> {
        &self.canvas
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::BatteryTier;
    use arrayvec::ArrayString;
    use crate::clock::ClockTime;

    fn snapshot() -> FaceSnapshot {
        FaceSnapshot {
            time: ClockTime::new(3, 0),
            animating: false,
            radius: 55,
            battery: BatteryTier::Full,
            show_bluetooth_icon: false,
            show_weather_text: true,
            temperature: ArrayString::from("72F").unwrap(),
            date: ArrayString::from("07 Mar").unwrap(),
            day: ArrayString::from("Sat").unwrap(),
        }
    }

    #[test]
    fn rejects_degenerate_geometry() {
        assert!(DisplayManager::new(0, 168, 55, 10).is_err());
        assert!(DisplayManager::new(144, 168, 20, 10).is_err());
        assert!(DisplayManager::new(144, 168, 80, 10).is_err());
    }

    #[test]
    fn composes_a_full_frame() {
        let mut mgr = DisplayManager::new(144, 168, 55, 10).unwrap();
        mgr.compose(&snapshot());

        let canvas = mgr.canvas();
        // minute hand straight up from the pivot
        assert_eq!(canvas.pixel(Point::new(72, 80)), Some(Rgb565::RED));
        // battery fill present
        assert!(canvas.as_slice().iter().any(|&c| c == Rgb565::GREEN));
        // something white was drawn for the text bands
        assert!(canvas.as_slice().iter().any(|&c| c == Rgb565::WHITE));
    }

    #[test]
    fn bluetooth_icon_follows_visibility() {
        let mut mgr = DisplayManager::new(144, 168, 55, 10).unwrap();

        let mut snap = snapshot();
        snap.show_bluetooth_icon = true;
        snap.show_weather_text = false;
        mgr.compose(&snap);
        let rect = mgr.layout().bluetooth;
        let mut lit = 0;
        for y in rect.top_left.y..rect.top_left.y + rect.size.height as i32 {
            for x in rect.top_left.x..rect.top_left.x + rect.size.width as i32 {
                if mgr.canvas().pixel(Point::new(x, y)) == Some(Rgb565::WHITE) {
                    lit += 1;
                }
            }
        }
        assert!(lit > 10, "rune should be stroked while disconnected");
    }
}
