/*
 *  config.rs
 *
 *  SweepS - time, well drawn
 *  (c) 2023-26 SweepS contributors
 *
 *  Layered configuration: defaults, YAML file, CLI overrides
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

use crate::constants::{
    ANIMATION_DELAY_MS, ANIMATION_DURATION_MS, FINAL_RADIUS, FRAME_FPS, HAND_MARGIN,
    SCREEN_HEIGHT, SCREEN_WIDTH, WEATHER_INTERVAL_MINS,
};
use crate::status::HapticPolicy;
use clap::{ArgAction, Parser, ValueHint};
use dirs_next::home_dir;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Error type for config loading/validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Top-level app configuration as read from disk. Everything is optional
/// so the layers merge Option-by-Option.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub log_level: Option<String>,
    pub face: Option<FaceConfig>,
    pub animation: Option<AnimationConfig>,
    pub status: Option<StatusConfig>,
}

/// Screen and dial geometry.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FaceConfig {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub final_radius: Option<i32>,
    pub hand_margin: Option<i32>,
}

/// Startup sweep timing and frame cadence.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AnimationConfig {
    pub duration_ms: Option<u64>,
    pub delay_ms: Option<u64>,
    pub frame_fps: Option<u32>,
}

/// Status-line behavior.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StatusConfig {
    pub haptic_policy: Option<HapticPolicy>,
    pub weather_interval_mins: Option<u32>,
}

/// CLI overrides. All fields are Options so we can layer them over YAML.
#[derive(Debug, Parser, Clone)]
#[command(name = "SweepS", about = "SweepS hybrid watchface", disable_help_flag = false)]
pub struct Cli {
    /// Path to a YAML config file (overrides search)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub log_level: Option<String>,
    #[arg(long)]
    pub width: Option<u32>,
    #[arg(long)]
    pub height: Option<u32>,
    #[arg(long)]
    pub final_radius: Option<i32>,
    #[arg(long)]
    pub hand_margin: Option<i32>,
    #[arg(long)]
    pub anim_duration_ms: Option<u64>,
    #[arg(long)]
    pub anim_delay_ms: Option<u64>,
    /// "level" buzzes on every disconnected poll, "edge" once per drop
    #[arg(long)]
    pub haptic_policy: Option<String>,
    /// dump fully merged config (after overrides) and exit
    #[arg(long, action = ArgAction::SetTrue)]
    pub dump_config: bool,
}

/// Fully resolved settings the rest of the app consumes. No Options left.
#[derive(Debug, Clone)]
pub struct Settings {
    pub log_level: String,
    pub width: u32,
    pub height: u32,
    pub final_radius: i32,
    pub hand_margin: i32,
    pub anim_duration: Duration,
    pub anim_delay: Duration,
    pub frame_fps: u32,
    pub haptic_policy: HapticPolicy,
    pub weather_interval_mins: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            final_radius: FINAL_RADIUS,
            hand_margin: HAND_MARGIN,
            anim_duration: Duration::from_millis(ANIMATION_DURATION_MS),
            anim_delay: Duration::from_millis(ANIMATION_DELAY_MS),
            frame_fps: FRAME_FPS,
            haptic_policy: HapticPolicy::default(),
            weather_interval_mins: WEATHER_INTERVAL_MINS,
        }
    }
}

/// Public entry point: parse CLI, read YAML, merge, validate, resolve.
pub fn load() -> Result<Settings, ConfigError> {
    let cli = Cli::parse();

    // 1) defaults (empty Config)
    let mut cfg = Config::default();

    // 2) YAML file (explicit path or search)
    if let Some(p) = cli.config.as_ref() {
        if p.exists() {
            let y = read_yaml(p)?;
            merge(&mut cfg, y);
        } else {
            return Err(ConfigError::Validation(format!(
                "Config file not found: {}",
                p.display()
            )));
        }
    } else if let Some(p) = find_config_file() {
        let y = read_yaml(&p)?;
        merge(&mut cfg, y);
    }

    // 3) CLI overrides (highest precedence)
    apply_cli_overrides(&mut cfg, &cli)?;

    // 4) Validate
    validate(&cfg)?;

    if cli.dump_config {
        // Pretty YAML of effective config (nice for debugging)
        let s = serde_yaml::to_string(&cfg)?;
        println!("{s}");
        std::process::exit(0);
    }

    Ok(resolve(&cfg))
}

/// Try common locations in order (first hit wins).
fn find_config_file() -> Option<PathBuf> {
    // XDG-style: ~/.config/sweeps/config.yaml
    if let Some(home) = home_dir() {
        let p = home.join(".config/sweeps/config.yaml");
        if p.exists() {
            return Some(p);
        }
        let p = home.join(".config/sweeps.yaml");
        if p.exists() {
            return Some(p);
        }
    }
    // project local
    for candidate in &["sweeps.yaml", "config.yaml"] {
        let p = PathBuf::from(candidate);
        if p.exists() {
            return Some(p);
        }
    }
    None
}

fn read_yaml(path: &Path) -> Result<Config, ConfigError> {
    let s = fs::read_to_string(path)?;
    let cfg: Config = serde_yaml::from_str(&s)?;
    Ok(cfg)
}

/// Shallow merge `src` into `dst`, Option-by-Option.
fn merge(dst: &mut Config, src: Config) {
    if src.log_level.is_some() {
        dst.log_level = src.log_level;
    }
    match (&mut dst.face, src.face) {
        (None, Some(c)) => dst.face = Some(c),
        (Some(d), Some(s)) => {
            if s.width.is_some() {
                d.width = s.width;
            }
            if s.height.is_some() {
                d.height = s.height;
            }
            if s.final_radius.is_some() {
                d.final_radius = s.final_radius;
            }
            if s.hand_margin.is_some() {
                d.hand_margin = s.hand_margin;
            }
        }
        _ => {}
    }
    match (&mut dst.animation, src.animation) {
        (None, Some(c)) => dst.animation = Some(c),
        (Some(d), Some(s)) => {
            if s.duration_ms.is_some() {
                d.duration_ms = s.duration_ms;
            }
            if s.delay_ms.is_some() {
                d.delay_ms = s.delay_ms;
            }
            if s.frame_fps.is_some() {
                d.frame_fps = s.frame_fps;
            }
        }
        _ => {}
    }
    match (&mut dst.status, src.status) {
        (None, Some(c)) => dst.status = Some(c),
        (Some(d), Some(s)) => {
            if s.haptic_policy.is_some() {
                d.haptic_policy = s.haptic_policy;
            }
            if s.weather_interval_mins.is_some() {
                d.weather_interval_mins = s.weather_interval_mins;
            }
        }
        _ => {}
    }
}

fn apply_cli_overrides(cfg: &mut Config, cli: &Cli) -> Result<(), ConfigError> {
    if cli.log_level.is_some() {
        cfg.log_level = cli.log_level.clone();
    }

    if cli.width.is_some()
        || cli.height.is_some()
        || cli.final_radius.is_some()
        || cli.hand_margin.is_some()
    {
        let face = cfg.face.get_or_insert_with(FaceConfig::default);
        if cli.width.is_some() {
            face.width = cli.width;
        }
        if cli.height.is_some() {
            face.height = cli.height;
        }
        if cli.final_radius.is_some() {
            face.final_radius = cli.final_radius;
        }
        if cli.hand_margin.is_some() {
            face.hand_margin = cli.hand_margin;
        }
    }

    if cli.anim_duration_ms.is_some() || cli.anim_delay_ms.is_some() {
        let anim = cfg.animation.get_or_insert_with(AnimationConfig::default);
        if cli.anim_duration_ms.is_some() {
            anim.duration_ms = cli.anim_duration_ms;
        }
        if cli.anim_delay_ms.is_some() {
            anim.delay_ms = cli.anim_delay_ms;
        }
    }

    if let Some(policy) = cli.haptic_policy.as_deref() {
        let status = cfg.status.get_or_insert_with(StatusConfig::default);
        status.haptic_policy = Some(match policy {
            "level" => HapticPolicy::Level,
            "edge" => HapticPolicy::Edge,
            other => {
                return Err(ConfigError::Validation(format!(
                    "haptic_policy must be \"level\" or \"edge\", got \"{other}\""
                )));
            }
        });
    }

    Ok(())
}

/// Put any invariants here (required fields, ranges, etc.)
fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if let Some(face) = cfg.face.as_ref() {
        if let (Some(w), Some(h)) = (face.width, face.height) {
            if w == 0 || h == 0 {
                return Err(ConfigError::Validation(
                    "face width/height must be > 0".into(),
                ));
            }
        }
        let margin = face.hand_margin.unwrap_or(HAND_MARGIN);
        let radius = face.final_radius.unwrap_or(FINAL_RADIUS);
        if margin <= 0 {
            return Err(ConfigError::Validation("hand_margin must be > 0".into()));
        }
        if radius <= 2 * margin {
            return Err(ConfigError::Validation(
                "final_radius must exceed twice hand_margin or the hour hand never draws".into(),
            ));
        }
    }
    if let Some(anim) = cfg.animation.as_ref() {
        if anim.duration_ms == Some(0) {
            return Err(ConfigError::Validation("animation duration must be > 0".into()));
        }
        if let Some(fps) = anim.frame_fps {
            if fps == 0 || fps > 120 {
                return Err(ConfigError::Validation("frame_fps must be in 1..=120".into()));
            }
        }
    }
    if let Some(status) = cfg.status.as_ref() {
        if let Some(mins) = status.weather_interval_mins {
            if mins == 0 || mins > 60 {
                return Err(ConfigError::Validation(
                    "weather_interval_mins must be in 1..=60".into(),
                ));
            }
        }
    }
    Ok(())
}

/// Collapse the merged Config onto concrete Settings.
fn resolve(cfg: &Config) -> Settings {
    let defaults = Settings::default();
    let face = cfg.face.clone().unwrap_or_default();
    let anim = cfg.animation.clone().unwrap_or_default();
    let status = cfg.status.clone().unwrap_or_default();

    Settings {
        log_level: cfg.log_level.clone().unwrap_or(defaults.log_level),
        width: face.width.unwrap_or(defaults.width),
        height: face.height.unwrap_or(defaults.height),
        final_radius: face.final_radius.unwrap_or(defaults.final_radius),
        hand_margin: face.hand_margin.unwrap_or(defaults.hand_margin),
        anim_duration: anim
            .duration_ms
            .map(Duration::from_millis)
            .unwrap_or(defaults.anim_duration),
        anim_delay: anim
            .delay_ms
            .map(Duration::from_millis)
            .unwrap_or(defaults.anim_delay),
        frame_fps: anim.frame_fps.unwrap_or(defaults.frame_fps),
        haptic_policy: status.haptic_policy.unwrap_or(defaults.haptic_policy),
        weather_interval_mins: status
            .weather_interval_mins
            .unwrap_or(defaults.weather_interval_mins),
    }
}
