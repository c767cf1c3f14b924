/*
 *  companion.rs
 *
 *  SweepS - time, well drawn
 *  (c) 2023-26 SweepS contributors
 *
 *  Key/value messages to and from the phone companion app, plus the
 *  temperature string they feed
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

use arrayvec::ArrayString;
use core::fmt::Write;

/// Dictionary key carrying the Fahrenheit temperature.
pub const KEY_TEMPERATURE: u8 = 0;

/// Longest temperature string we will display, terminator excluded.
pub const TEMPERATURE_TEXT_CAP: usize = 8;

/// A small integer-valued dictionary, the shape both directions of the
/// companion channel speak. Keys are tiny and few; a flat vec beats a map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanionMessage {
    entries: Vec<(u8, i32)>,
}

impl CompanionMessage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite an entry.
    pub fn insert(&mut self, key: u8, value: i32) {
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Builder-style insert, handy in tests and simulators.
    pub fn with_int(mut self, key: u8, value: i32) -> Self {
        self.insert(key, value);
        self
    }

    /// Look up an integer value. Absence is an ordinary, recoverable
    /// condition here; a dropped or partial dictionary must never bring
    /// the face down.
    pub fn int(&self, key: u8) -> Option<i32> {
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Format a Fahrenheit reading for the weather layer, e.g. `"72F"`.
/// Stack-allocated; absurdly long values truncate rather than allocate.
pub fn format_temperature(deg_f: i32) -> ArrayString<TEMPERATURE_TEXT_CAP> {
    let mut buf = ArrayString::new();
    let _ = write!(&mut buf, "{}F", deg_f);
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_positive_reading() {
        assert_eq!(format_temperature(72).as_str(), "72F");
    }

    #[test]
    fn formats_negative_reading() {
        assert_eq!(format_temperature(-9).as_str(), "-9F");
    }

    #[test]
    fn message_roundtrip_and_overwrite() {
        let mut msg = CompanionMessage::new();
        assert!(msg.is_empty());
        msg.insert(KEY_TEMPERATURE, 65);
        msg.insert(KEY_TEMPERATURE, 72);
        assert_eq!(msg.int(KEY_TEMPERATURE), Some(72));
        assert_eq!(msg.int(7), None);
    }
}
