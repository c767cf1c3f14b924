/*
 *  app.rs
 *
 *  SweepS - time, well drawn
 *  (c) 2023-26 SweepS contributors
 *
 *  Watchface application state: the canonical and animated times, the
 *  startup sweep, and the sensor callback handlers
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

use crate::animation::{Easing, Timeline, scaled};
use crate::clock::{ClockTime, hours_to_minutes};
use crate::companion::{
    CompanionMessage, KEY_TEMPERATURE, TEMPERATURE_TEXT_CAP, format_temperature,
};
use crate::config::Settings;
use crate::host::{CompanionOutbox, HapticService};
use crate::status::{BatteryTier, HapticPolicy, connection_effect};
use arrayvec::ArrayString;
use chrono::{DateTime, Local, Timelike};
use core::fmt::Write;
use log::{error, info, warn};
use std::time::Instant;

/// Lifecycle of the face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Constructed, sweep not yet moving.
    Loading,
    /// Startup sweep in flight; the face reads the animated time.
    Animating,
    /// Terminal until next launch; the face reads the canonical time.
    Steady,
}

/// Everything the paint pass needs for one frame, copied out so the
/// renderer never borrows mutable application state.
#[derive(Debug, Clone)]
pub struct FaceSnapshot {
    pub time: ClockTime,
    pub animating: bool,
    pub radius: i32,
    pub battery: BatteryTier,
    pub show_bluetooth_icon: bool,
    pub show_weather_text: bool,
    pub temperature: ArrayString<TEMPERATURE_TEXT_CAP>,
    pub date: ArrayString<8>,
    pub day: ArrayString<6>,
}

/// The watchface proper. One instance owns all mutable state; every
/// mutation happens inside a handler invoked from the single run loop,
/// and redraws are requested by marking dirty, never drawn inline.
pub struct Watchface {
    // canonical time, updated once per minute
    last_time: ClockTime,
    // transient sweep time; only read while `animating`
    anim_time: ClockTime,
    radius: i32,
    animating: bool,
    phase: Phase,

    epoch: Instant,
    radius_run: Timeline,
    hands_run: Timeline,

    battery: BatteryTier,
    connected: bool,
    haptic_policy: HapticPolicy,
    weather_interval_mins: u32,

    temperature: ArrayString<TEMPERATURE_TEXT_CAP>,
    date_text: ArrayString<8>,
    day_text: ArrayString<6>,

    final_radius: i32,
    dirty: bool,
}

impl Watchface {
    /// Build the face and schedule both startup runs against `epoch`.
    ///
    /// The canonical time is seeded from `now` immediately so the sweep
    /// has real targets even before the first minute tick lands.
    pub fn new(settings: &Settings, epoch: Instant, now: DateTime<Local>) -> Self {
        let mut face = Self {
            last_time: ClockTime::default(),
            anim_time: ClockTime::default(),
            radius: 0,
            animating: false,
            phase: Phase::Loading,
            epoch,
            radius_run: Timeline::new(settings.anim_duration, settings.anim_delay, Easing::EaseInOut),
            hands_run: Timeline::new(
                2 * settings.anim_duration,
                settings.anim_delay,
                Easing::EaseInOut,
            ),
            battery: BatteryTier::Full,
            connected: true,
            haptic_policy: settings.haptic_policy,
            weather_interval_mins: settings.weather_interval_mins,
            temperature: ArrayString::from("...").unwrap_or_default(),
            date_text: ArrayString::new(),
            day_text: ArrayString::new(),
            final_radius: settings.final_radius,
            dirty: true,
        };
        face.set_wall_time(now);
        face
    }

    /// Minute tick: refresh the canonical time and text bands, and on the
    /// half-hour cadence ask the companion for a fresh temperature.
    pub fn handle_tick(&mut self, now: DateTime<Local>, outbox: &mut dyn CompanionOutbox) {
        self.set_wall_time(now);
        self.dirty = true;

        if now.minute() % self.weather_interval_mins == 0 {
            match outbox.send_request(KEY_TEMPERATURE, 0) {
                Ok(()) => info!("weather request sent"),
                Err(e) => error!("Outbox send failed: {e}"),
            }
        }
    }

    /// Battery snapshot: remap to a tier, redraw only when it changes.
    pub fn handle_battery(&mut self, percent: u8) {
        let tier = BatteryTier::from_percent(percent);
        if tier != self.battery {
            info!("battery tier -> {:?} ({percent}%)", tier);
            self.battery = tier;
            self.dirty = true;
        }
    }

    /// Connection snapshot: flip layer visibility and maybe buzz.
    pub fn handle_connection(&mut self, connected: bool, haptics: &mut dyn HapticService) {
        let effect = connection_effect(connected, self.connected, self.haptic_policy);
        if connected != self.connected {
            info!(
                "companion {}",
                if connected { "connected" } else { "disconnected" }
            );
        }
        self.connected = connected;
        if effect.trigger_haptic {
            haptics.double_pulse();
        }
        self.dirty = true;
    }

    /// Inbound companion dictionary. A missing temperature key keeps the
    /// previous reading on screen; it must never take the face down.
    pub fn handle_inbound(&mut self, msg: &CompanionMessage) {
        match msg.int(KEY_TEMPERATURE) {
            Some(deg_f) => {
                self.temperature = format_temperature(deg_f);
                self.dirty = true;
            }
            None => warn!("inbound message missing temperature key; keeping previous reading"),
        }
    }

    /// Advance both startup runs to `now`. Called from the frame loop;
    /// inert once the sweep has completed.
    pub fn step_animations(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.epoch);

        if let Some(frame) = self.radius_run.sample(elapsed) {
            self.radius = scaled(frame.progress, self.final_radius);
            self.dirty = true;
        }

        if let Some(frame) = self.hands_run.sample(elapsed) {
            if frame.just_started {
                self.animating = true;
                self.phase = Phase::Animating;
            }
            self.anim_time.hours = scaled(frame.progress, hours_to_minutes(self.last_time.hours));
            self.anim_time.minutes = scaled(frame.progress, self.last_time.minutes);
            self.dirty = true;
            if frame.just_finished {
                self.animating = false;
                self.phase = Phase::Steady;
                info!("startup sweep complete");
            }
        }
    }

    /// Consume the dirty flag; the host coalesces repaints around this.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Copy out everything the paint pass reads.
    pub fn snapshot(&self) -> FaceSnapshot {
        FaceSnapshot {
            time: if self.animating { self.anim_time } else { self.last_time },
            animating: self.animating,
            radius: self.radius,
            battery: self.battery,
            show_bluetooth_icon: !self.connected,
            show_weather_text: self.connected,
            temperature: self.temperature,
            date: self.date_text,
            day: self.day_text,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn animating(&self) -> bool {
        self.animating
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    fn set_wall_time(&mut self, now: DateTime<Local>) {
        self.last_time = ClockTime::from_wall(now.hour(), now.minute());

        self.date_text.clear();
        let _ = write!(&mut self.date_text, "{}", now.format("%d %b"));
        self.day_text.clear();
        let _ = write!(&mut self.day_text, "{}", now.format("%a"));
    }
}
