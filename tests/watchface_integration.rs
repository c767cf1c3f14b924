/*
 *  watchface_integration.rs
 *
 *  SweepS - time, well drawn
 *  (c) 2023-26 SweepS contributors
 *
 *  End-to-end scenarios: state machine through compose through sink
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

use chrono::{DateTime, Local, TimeZone};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

use sweeps::app::{Phase, Watchface};
use sweeps::clock::ClockTime;
use sweeps::config::Settings;
use sweeps::display::DisplayManager;
use sweeps::host::{DisplaySink, HostEvent};
use sweeps::hosts::sim::{ConsoleSink, EchoCompanion, LogHaptics};

fn local(h: u32, m: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(2026, 3, 7, h, m, 0).unwrap()
}

fn manager(settings: &Settings) -> DisplayManager {
    DisplayManager::new(
        settings.width,
        settings.height,
        settings.final_radius,
        settings.hand_margin,
    )
    .unwrap()
}

fn lit_in(mgr: &DisplayManager, rect: embedded_graphics::primitives::Rectangle) -> usize {
    let mut lit = 0;
    for y in rect.top_left.y..rect.top_left.y + rect.size.height as i32 {
        for x in rect.top_left.x..rect.top_left.x + rect.size.width as i32 {
            if let Some(c) = mgr.canvas().pixel(Point::new(x, y)) {
                if c != Rgb565::BLACK {
                    lit += 1;
                }
            }
        }
    }
    lit
}

#[test]
fn startup_sweep_settles_on_the_canonical_face() {
    let settings = Settings::default();
    let epoch = Instant::now();
    let mut face = Watchface::new(&settings, epoch, local(3, 0));
    let mut mgr = manager(&settings);
    let mut sink = ConsoleSink::new();

    // mid-sweep: dial fully grown, hands still catching up
    face.step_animations(epoch + settings.anim_delay + settings.anim_duration);
    assert_eq!(face.phase(), Phase::Animating);
    assert_eq!(face.radius(), settings.final_radius);
    if face.take_dirty() {
        mgr.compose(&face.snapshot());
        sink.present(mgr.canvas()).unwrap();
    }

    // past the end: the frame shows exactly 3:00
    face.step_animations(epoch + settings.anim_delay + 2 * settings.anim_duration);
    assert_eq!(face.phase(), Phase::Steady);
    let snap = face.snapshot();
    assert_eq!(snap.time, ClockTime::new(3, 0));
    mgr.compose(&snap);
    sink.present(mgr.canvas()).unwrap();

    // minute hand straight up, hour hand due right of the pivot
    assert_eq!(mgr.canvas().pixel(Point::new(72, 60)), Some(Rgb565::RED));
    assert_eq!(mgr.canvas().pixel(Point::new(90, 99)), Some(Rgb565::RED));
    assert_eq!(sink.frames(), 2);
}

#[test]
fn hands_stay_hidden_while_the_dial_is_small() {
    let settings = Settings::default();
    let epoch = Instant::now();
    let mut face = Watchface::new(&settings, epoch, local(6, 30));
    let mut mgr = manager(&settings);

    // barely past the delay: radius still within the margin
    face.step_animations(epoch + settings.anim_delay + Duration::from_millis(10));
    assert!(face.radius() <= 2 * settings.hand_margin);
    mgr.compose(&face.snapshot());
    assert!(
        !mgr.canvas().as_slice().iter().any(|&c| c == Rgb565::RED),
        "no hand strokes before the dial clears the margin"
    );
}

#[test]
fn disconnect_swaps_weather_for_the_bluetooth_rune() {
    let settings = Settings::default();
    let mut face = Watchface::new(&settings, Instant::now(), local(8, 0));
    let mut haptics = LogHaptics;
    let mut mgr = manager(&settings);

    mgr.compose(&face.snapshot());
    let bt_rect = mgr.layout().bluetooth;
    let connected_lit = lit_in(&mgr, bt_rect);

    face.handle_connection(false, &mut haptics);
    let snap = face.snapshot();
    assert!(snap.show_bluetooth_icon);
    assert!(!snap.show_weather_text);
    mgr.compose(&snap);
    assert!(
        lit_in(&mgr, bt_rect) > connected_lit,
        "rune should appear once the companion drops"
    );
}

#[test]
fn temperature_round_trips_through_the_companion() {
    let settings = Settings::default();
    let mut face = Watchface::new(&settings, Instant::now(), local(10, 29));
    let (tx, mut rx) = mpsc::channel::<HostEvent>(4);
    let mut companion = EchoCompanion::new(tx);

    // half-hour cadence fires the request, the echo answers in kind
    face.handle_tick(local(10, 30), &mut companion);
    match rx.try_recv().unwrap() {
        HostEvent::Inbound(msg) => face.handle_inbound(&msg),
        other => panic!("unexpected event: {other:?}"),
    }

    let reading = face.snapshot().temperature;
    assert!(reading.ends_with('F'), "got {reading:?}");
    assert!(reading.len() >= 2);

    // off-cadence minute stays quiet
    face.handle_tick(local(10, 31), &mut companion);
    assert!(rx.try_recv().is_err());
}

#[test]
fn custom_geometry_composes_without_panicking() {
    let mut settings = Settings::default();
    settings.width = 320;
    settings.height = 240;
    let epoch = Instant::now();
    let mut face = Watchface::new(&settings, epoch, local(7, 45));
    let mut mgr = manager(&settings);

    face.step_animations(epoch + settings.anim_delay + 2 * settings.anim_duration);
    mgr.compose(&face.snapshot());
    assert!(mgr.canvas().as_slice().iter().any(|&c| c == Rgb565::RED));
}
