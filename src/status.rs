/*
 *  status.rs
 *
 *  SweepS - time, well drawn
 *  (c) 2023-26 SweepS contributors
 *
 *  Battery tier and connection-status mapping
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

use serde::{Deserialize, Serialize};

/// Discrete battery icon tiers. The thresholds are inclusive ranges; only
/// the tier changes what is drawn, never the raw percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatteryTier {
    Full,
    Mid,
    Low,
    Critical,
}

impl BatteryTier {
    /// Map a charge percentage to its icon tier. Values above 100 clamp.
    pub fn from_percent(percent: u8) -> Self {
        match percent.min(100) {
            67..=100 => BatteryTier::Full,
            34..=66 => BatteryTier::Mid,
            11..=33 => BatteryTier::Low,
            _ => BatteryTier::Critical,
        }
    }
}

/// When the disconnect buzz fires.
///
/// The watch this face came from buzzed on *every* status callback while
/// disconnected, not just on the falling edge. That stays the default;
/// `Edge` is the once-per-disconnect alternative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HapticPolicy {
    #[default]
    Level,
    Edge,
}

/// What a connection snapshot means for the face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionEffect {
    pub show_bluetooth_icon: bool,
    pub show_weather_text: bool,
    pub trigger_haptic: bool,
}

/// Derive layer visibility and the haptic decision from a connection
/// snapshot. `was_connected` is only consulted by the edge policy.
pub fn connection_effect(
    connected: bool,
    was_connected: bool,
    policy: HapticPolicy,
) -> ConnectionEffect {
    let trigger_haptic = match policy {
        HapticPolicy::Level => !connected,
        HapticPolicy::Edge => was_connected && !connected,
    };
    ConnectionEffect {
        show_bluetooth_icon: !connected,
        show_weather_text: connected,
        trigger_haptic,
    }
}
