/*
 *  clock.rs
 *
 *  SweepS - time, well drawn
 *  (c) 2023-26 SweepS contributors
 *
 *  Time model and hand-angle math for the analog face
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

/// One full revolution in face angle units. The 16-bit turn convention is
/// kept from the watch platform the face grew up on; angles only become
/// radians at the trig call site.
pub const FULL_TURN: i32 = 65_536;

/// Hour/minute pair as the face understands it: 12-hour dial, no seconds.
///
/// During the startup sweep `hours` holds a minutes-equivalent value in
/// 0..=59 (see [`hours_to_minutes`]) so the hour hand moves smoothly
/// instead of stepping through twelve discrete positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClockTime {
    pub hours: i32,
    pub minutes: i32,
}

impl ClockTime {
    pub fn new(hours: i32, minutes: i32) -> Self {
        Self { hours, minutes }
    }

    /// Build from 24-hour wall-clock values, folding onto the 12-hour dial.
    pub fn from_wall(hours_24: u32, minutes: u32) -> Self {
        Self {
            hours: (hours_24 % 12) as i32,
            minutes: minutes as i32,
        }
    }
}

/// Hand angles in [`FULL_TURN`] units, 0 = straight up, clockwise positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandAngles {
    pub minute: i32,
    pub hour: i32,
}

/// Map a time to hand angles.
///
/// While animating, `hours` is already scaled into the 0..=59 range and is
/// divided out of 60 rather than 12, which keeps the intermediate sweep
/// smooth. In either mode the hour hand picks up a minute-of-hour creep so
/// it drifts between hour marks rather than jumping on the hour.
pub fn angle_for(time: ClockTime, animating: bool) -> HandAngles {
    let minute = FULL_TURN * time.minutes / 60;

    let mut hour = if animating {
        FULL_TURN * time.hours / 60
    } else {
        FULL_TURN * time.hours / 12
    };
    // (minute / FULL_TURN) * (FULL_TURN / 12), folded into one division
    hour += minute / 12;

    HandAngles { minute, hour }
}

/// Scale an hour on the 12-hour dial to its minutes-equivalent (0..=59),
/// the range the startup sweep animates the hour hand through.
pub fn hours_to_minutes(hours: i32) -> i32 {
    hours * 60 / 12
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minute_angle_identity() {
        for m in 0..60 {
            let a = angle_for(ClockTime::new(0, m), false);
            assert_eq!(a.minute, FULL_TURN * m / 60);
        }
    }

    #[test]
    fn minute_angle_monotonic_and_wraps() {
        let mut prev = -1;
        for m in 0..60 {
            let a = angle_for(ClockTime::new(0, m), false);
            assert!(a.minute > prev);
            prev = a.minute;
        }
        // 60 minutes is the same dial position as 0
        assert_eq!(angle_for(ClockTime::new(0, 0), false).minute, 0);
        assert!(prev < FULL_TURN);
    }

    #[test]
    fn hour_angle_strictly_increases_over_dial() {
        let mut prev = -1;
        for h in 0..12 {
            for m in 0..60 {
                let a = angle_for(ClockTime::new(h, m), false);
                assert!(
                    a.hour > prev,
                    "hour angle regressed at {:02}:{:02}",
                    h,
                    m
                );
                prev = a.hour;
            }
        }
        // one full turn across the 12-hour cycle, never reaching FULL_TURN
        assert!(prev < FULL_TURN);
        assert!(prev >= FULL_TURN - FULL_TURN / (12 * 60) - 1);
    }

    #[test]
    fn three_oclock_quarter_turn() {
        let a = angle_for(ClockTime::new(3, 0), false);
        assert_eq!(a.minute, 0);
        assert_eq!(a.hour, FULL_TURN / 4);
    }

    #[test]
    fn six_thirty() {
        let a = angle_for(ClockTime::new(6, 30), false);
        assert_eq!(a.minute, FULL_TURN / 2);
        // half turn plus half of one hour division
        assert_eq!(a.hour, FULL_TURN / 2 + FULL_TURN / 24);
        let frac = a.hour as f32 / FULL_TURN as f32;
        assert!((frac - 0.5417).abs() < 0.001);
    }

    #[test]
    fn animated_hours_divide_out_of_sixty() {
        // 9 o'clock pre-scaled to 45 "minutes" lands at 3/4 turn
        let a = angle_for(ClockTime::new(hours_to_minutes(9), 0), true);
        assert_eq!(a.hour, FULL_TURN * 45 / 60);
    }

    #[test]
    fn hours_to_minutes_table() {
        assert_eq!(hours_to_minutes(0), 0);
        assert_eq!(hours_to_minutes(1), 5);
        assert_eq!(hours_to_minutes(6), 30);
        assert_eq!(hours_to_minutes(11), 55);
    }

    #[test]
    fn from_wall_folds_to_twelve_hour_dial() {
        assert_eq!(ClockTime::from_wall(0, 0), ClockTime::new(0, 0));
        assert_eq!(ClockTime::from_wall(12, 30), ClockTime::new(0, 30));
        assert_eq!(ClockTime::from_wall(15, 59), ClockTime::new(3, 59));
        assert_eq!(ClockTime::from_wall(23, 1), ClockTime::new(11, 1));
    }
}
