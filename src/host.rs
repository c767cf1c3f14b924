/*
 *  host.rs
 *
 *  SweepS - time, well drawn
 *  (c) 2023-26 SweepS contributors
 *
 *  Traits for the services the host platform owns: display sink, haptics,
 *  companion outbox, and the event stream from the sensors
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

use crate::companion::CompanionMessage;
use crate::display::canvas::FrameCanvas;
use embedded_graphics::pixelcolor::Rgb565;
use thiserror::Error;

/// Errors crossing the host boundary. Everything here is best-effort from
/// the face's point of view: log it, keep ticking.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("companion outbox send failed: {0}")]
    OutboxSend(String),

    #[error("display present failed: {0}")]
    Present(String),
}

/// Receives the composited frame once per dirty paint pass. The host owns
/// coalescing; the face never presents from inside a mutation callback.
pub trait DisplaySink {
    fn present(&mut self, frame: &FrameCanvas<Rgb565>) -> Result<(), HostError>;
}

/// Fire-and-forget haptic engine. The double pulse is the only pattern the
/// face asks for.
pub trait HapticService {
    fn double_pulse(&mut self);
}

/// Outbound half of the companion channel. One tiny keyed byte per
/// request; failures are reported, never retried.
pub trait CompanionOutbox {
    fn send_request(&mut self, key: u8, value: u8) -> Result<(), HostError>;
}

/// Sensor and inbound-message events, delivered strictly sequentially on
/// the single run loop.
#[derive(Debug, Clone)]
pub enum HostEvent {
    Battery { percent: u8 },
    Connection { connected: bool },
    Inbound(CompanionMessage),
}
