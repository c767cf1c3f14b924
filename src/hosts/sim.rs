/*
 *  hosts/sim.rs
 *
 *  SweepS - time, well drawn
 *  (c) 2023-26 SweepS contributors
 *
 *  Simulated host services for desktop runs: scripted battery drain,
 *  connection flaps, a companion echo, logging haptics, and a console
 *  display sink
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

use crate::companion::{CompanionMessage, KEY_TEMPERATURE};
use crate::display::canvas::FrameCanvas;
use crate::host::{CompanionOutbox, DisplaySink, HapticService, HostError, HostEvent};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use log::{debug, info};
use std::time::Duration;
use tokio::sync::mpsc::Sender;

/// Initial battery peek, mirroring the one-shot sensor read at startup.
pub fn peek_battery() -> u8 {
    100
}

/// Initial connection peek.
pub fn peek_connection() -> bool {
    true
}

/// Haptic engine that buzzes the log instead of a motor.
pub struct LogHaptics;

impl HapticService for LogHaptics {
    fn double_pulse(&mut self) {
        info!("haptic: bzz-bzz");
    }
}

/// Companion echo: every outbound request is answered synchronously with
/// a temperature dictionary on the event channel, with the reading
/// wandering a little so the weather band visibly updates.
pub struct EchoCompanion {
    events: Sender<HostEvent>,
    temp_f: i32,
    step: i32,
}

impl EchoCompanion {
    pub fn new(events: Sender<HostEvent>) -> Self {
        Self {
            events,
            temp_f: 72,
            step: 1,
        }
    }
}

impl CompanionOutbox for EchoCompanion {
    fn send_request(&mut self, key: u8, value: u8) -> Result<(), HostError> {
        debug!("outbox: key {key} = {value}");
        // bounce between pleasant extremes
        self.temp_f += self.step;
        if self.temp_f >= 80 || self.temp_f <= 60 {
            self.step = -self.step;
        }
        let reply = CompanionMessage::new().with_int(KEY_TEMPERATURE, self.temp_f);
        self.events
            .try_send(HostEvent::Inbound(reply))
            .map_err(|e| HostError::OutboxSend(e.to_string()))
    }
}

/// Display sink that reports frame statistics to the log. Stands in for
/// a compositor; every dirty paint pass lands here exactly once.
pub struct ConsoleSink {
    frames: u64,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self { frames: 0 }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySink for ConsoleSink {
    fn present(&mut self, frame: &FrameCanvas<Rgb565>) -> Result<(), HostError> {
        self.frames += 1;
        let lit = frame
            .as_slice()
            .iter()
            .filter(|&&c| c != Rgb565::BLACK)
            .count();
        debug!(
            "frame {}: {}x{}, {} lit pixels",
            self.frames,
            frame.width(),
            frame.height(),
            lit
        );
        Ok(())
    }
}

/// Spawn the scripted battery and connection sensors onto the run loop's
/// executor. Single-threaded: these tasks only touch their channel.
pub fn spawn_sensors(events: Sender<HostEvent>) {
    let battery_tx = events.clone();
    tokio::spawn(async move {
        let mut percent: u8 = peek_battery();
        loop {
            tokio::time::sleep(Duration::from_secs(45)).await;
            percent = percent.saturating_sub(7);
            if battery_tx
                .send(HostEvent::Battery { percent })
                .await
                .is_err()
            {
                break;
            }
            if percent == 0 {
                break;
            }
        }
    });

    tokio::spawn(async move {
        let mut connected = peek_connection();
        loop {
            tokio::time::sleep(Duration::from_secs(90)).await;
            connected = !connected;
            if events
                .send(HostEvent::Connection { connected })
                .await
                .is_err()
            {
                break;
            }
        }
    });
}
