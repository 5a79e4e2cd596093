// SPDX-License-Identifier: MIT
// Copyright (c) 2026 pointsplan contributors

pub mod airports;
pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod loyalty;
pub mod render;
pub mod request;

use std::path::PathBuf;

pub use error::PlannerError;
pub use pointsplan_itinerary as itinerary;

/// Directory holding `config.json`. Falls back to the working directory when
/// the platform has no config location.
pub fn get_config_root() -> PathBuf {
    directories::ProjectDirs::from("org", "pointsplan", "pointsplan")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}
