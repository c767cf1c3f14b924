/*
 *  display/components/face.rs
 *
 *  SweepS - time, well drawn
 *  (c) 2023-26 SweepS contributors
 *
 *  The analog face: hand plotting and drawing, plus the background
 *  tick ring
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

use crate::clock::{self, ClockTime, FULL_TURN};
use crate::constants::HAND_STROKE_WIDTH;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};

/// Hand endpoints for one frame, pre-clipped by the visibility rules.
/// Pure data so the geometry is testable without a draw target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandPlot {
    pub draw_hour: bool,
    pub hour_tip: Point,
    pub draw_minute: bool,
    pub minute_tip: Point,
}

/// Draws the two hands around a fixed pivot. Stateless beyond geometry;
/// the caller supplies the (possibly still growing) radius each frame.
pub struct FaceRenderer {
    center: Point,
    hand_margin: i32,
    stroke: PrimitiveStyle<Rgb565>,
}

impl FaceRenderer {
    pub fn new(center: Point, hand_margin: i32) -> Self {
        Self {
            center,
            hand_margin,
            stroke: PrimitiveStyle::with_stroke(Rgb565::RED, HAND_STROKE_WIDTH),
        }
    }

    /// Compute both hand tips for the given radius and time.
    ///
    /// A hand is suppressed while its length would be non-positive, which
    /// happens early in the startup sweep as the radius grows from zero.
    pub fn plot(&self, radius: i32, time: ClockTime, animating: bool) -> HandPlot {
        let angles = clock::angle_for(time, animating);

        let minute_tip = self.center + radius_vector(angles.minute, radius - self.hand_margin);
        // the hour hand sits 2.5 margins in from the dial edge
        let hour_tip = self.center + radius_vector(angles.hour, radius - self.hand_margin * 5 / 2);

        HandPlot {
            draw_hour: radius > 2 * self.hand_margin,
            hour_tip,
            draw_minute: radius > self.hand_margin,
            minute_tip,
        }
    }

    /// Stroke the visible hands from the pivot out to their tips.
    pub fn render<D>(&self, target: &mut D, plot: &HandPlot) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        if plot.draw_hour {
            Line::new(self.center, plot.hour_tip)
                .into_styled(self.stroke)
                .draw(target)?;
        }
        if plot.draw_minute {
            Line::new(self.center, plot.minute_tip)
                .into_styled(self.stroke)
                .draw(target)?;
        }
        Ok(())
    }

    /// Draw the twelve hour ticks standing in for the background bitmap.
    pub fn render_tick_ring<D>(&self, target: &mut D, radius: i32) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let style = PrimitiveStyle::with_stroke(Rgb565::CSS_DIM_GRAY, 1);
        for hour in 0..12 {
            let angle = FULL_TURN * hour / 12;
            let outer = self.center + radius_vector(angle, radius);
            let inner = self.center + radius_vector(angle, radius - 5);
            Line::new(inner, outer).into_styled(style).draw(target)?;
        }
        Ok(())
    }
}

/// Endpoint offset for a hand of `length` at `angle` (FULL_TURN units,
/// 0 = up, clockwise positive). Y is negated because the screen's vertical
/// axis grows downward.
fn radius_vector(angle: i32, length: i32) -> Point {
    let rad = angle as f32 / FULL_TURN as f32 * core::f32::consts::TAU;
    Point::new(
        (rad.sin() * length as f32).round() as i32,
        (-rad.cos() * length as f32).round() as i32,
    )
}
