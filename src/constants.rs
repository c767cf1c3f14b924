/*
 *  constants.rs
 *
 *  SweepS - time, well drawn
 *  (c) 2023-26 SweepS contributors
 *
 *  Face geometry and timing defaults
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

/// Native screen size of the original watch canvas; other sizes scale
/// the layout proportionally.
pub const SCREEN_WIDTH: u32 = 144;
/// See [`SCREEN_WIDTH`].
pub const SCREEN_HEIGHT: u32 = 168;

/// Gap between a hand tip and the dial edge. The hour hand keeps two and
/// a half of these.
pub const HAND_MARGIN: i32 = 10;

/// Dial radius once the startup sweep has fully grown it.
pub const FINAL_RADIUS: i32 = 55;

/// Base duration of the startup sweep; the hands run takes twice this.
pub const ANIMATION_DURATION_MS: u64 = 500;

/// Shared start delay before either startup run moves.
pub const ANIMATION_DELAY_MS: u64 = 600;

/// Stroke width for both hands.
pub const HAND_STROKE_WIDTH: u32 = 2;

/// Request a fresh temperature whenever the minute hits a multiple of this.
pub const WEATHER_INTERVAL_MINS: u32 = 30;

/// Frame cadence while dirty; redraws are coalesced to this.
pub const FRAME_FPS: u32 = 30;
