/*
 *  display/error.rs
 *
 *  SweepS - time, well drawn
 *  (c) 2023-26 SweepS contributors
 *
 *  Error types for the display subsystem
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

use thiserror::Error;

/// Display subsystem failures. These only surface at construction time;
/// drawing into the owned canvas is infallible once the geometry checks
/// out, so a broken face is caught before the run loop starts.
#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("invalid face geometry: {0}")]
    InvalidGeometry(String),
}
