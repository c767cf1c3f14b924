/*
 *  main.rs
 *
 *  SweepS - time, well drawn
 *  (c) 2023-26 SweepS contributors
 *
 *  Binary entry point: config, logging, and the single cooperative run
 *  loop delivering ticks, frames, and sensor events to the face
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

use anyhow::Context;
use chrono::{Local, Timelike};
use env_logger::Env;
use log::{info, warn};
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::time::interval;

use sweeps::app::Watchface;
use sweeps::config::{self, Settings};
use sweeps::display::DisplayManager;
use sweeps::host::{DisplaySink, HostEvent};
use sweeps::hosts::sim::{self, ConsoleSink, EchoCompanion, LogHaptics};

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let settings = config::load()?;

    env_logger::Builder::from_env(
        Env::default().default_filter_or(settings.log_level.clone()),
    )
    .init();

    info!(
        "SweepS {} (built {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE
    );

    run(settings).await
}

/// The run loop. Everything the face mutates happens here, strictly
/// sequentially; repaints are coalesced to the frame cadence via the
/// dirty flag.
async fn run(settings: Settings) -> anyhow::Result<()> {
    let mut manager = DisplayManager::new(
        settings.width,
        settings.height,
        settings.final_radius,
        settings.hand_margin,
    )
    .context("display initialization failed")?;

    let (events_tx, mut events_rx) = mpsc::channel::<HostEvent>(16);
    let mut outbox = EchoCompanion::new(events_tx.clone());
    let mut haptics = LogHaptics;
    let mut sink = ConsoleSink::new();

    let epoch = Instant::now();
    let mut face = Watchface::new(&settings, epoch, Local::now());

    // startup peeks, applied before the first subscription event lands
    face.handle_battery(sim::peek_battery());
    face.handle_connection(sim::peek_connection(), &mut haptics);

    sim::spawn_sensors(events_tx);

    let mut second = interval(Duration::from_secs(1));
    let mut frame = interval(Duration::from_micros(
        1_000_000 / settings.frame_fps.max(1) as u64,
    ));
    let mut last_minute: Option<u32> = None;

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = second.tick() => {
                let now = Local::now();
                if last_minute != Some(now.minute()) {
                    last_minute = Some(now.minute());
                    face.handle_tick(now, &mut outbox);
                }
            }
            _ = frame.tick() => {
                face.step_animations(Instant::now());
                if face.take_dirty() {
                    manager.compose(&face.snapshot());
                    if let Err(e) = sink.present(manager.canvas()) {
                        warn!("present failed: {e}");
                    }
                }
            }
            Some(ev) = events_rx.recv() => match ev {
                HostEvent::Battery { percent } => face.handle_battery(percent),
                HostEvent::Connection { connected } => {
                    face.handle_connection(connected, &mut haptics)
                }
                HostEvent::Inbound(msg) => face.handle_inbound(&msg),
            },
            _ = &mut shutdown => {
                info!("shutting down");
                break;
            }
        }
    }

    Ok(())
}

/// Wait for SIGINT, SIGTERM, or SIGHUP so systemd and terminals can both
/// stop us cleanly.
#[cfg(unix)]
async fn shutdown_signal() {
    use tokio::signal::unix::{SignalKind, signal};

    let mut sigterm = match signal(SignalKind::terminate()) {
        Ok(s) => Some(s),
        Err(e) => {
            warn!("SIGTERM handler unavailable: {e}");
            None
        }
    };
    let mut sighup = match signal(SignalKind::hangup()) {
        Ok(s) => Some(s),
        Err(e) => {
            warn!("SIGHUP handler unavailable: {e}");
            None
        }
    };

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {}
        _ = async {
            match sigterm.as_mut() {
                Some(s) => { s.recv().await; }
                None => std::future::pending::<()>().await,
            }
        } => {}
        _ = async {
            match sighup.as_mut() {
                Some(s) => { s.recv().await; }
                None => std::future::pending::<()>().await,
            }
        } => {}
    }
}

#[cfg(not(unix))]
async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
