//! Core domain: optional RON overrides for gameplay tuning.
//!
//! Every tuning resource has a `Default` matching the shipped game feel. At
//! startup `assets/config/tuning.ron` may override any subset of them; each
//! section and each field inside a section is optional.

use bevy::prelude::*;
use ron::Options;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::boss::BossTuning;
use crate::combat::{CombatTuning, EnemyTuning};
use crate::core::resources::RunConfig;
use crate::lifecycle::BuffTuning;
use crate::movement::MovementTuning;

pub const TUNING_PATH: &str = "assets/config/tuning.ron";

/// Error type for tuning file failures.
#[derive(Debug)]
pub struct ConfigLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ConfigLoadError {}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TuningFile {
    pub seed: Option<u64>,
    pub movement: Option<MovementTuning>,
    pub combat: Option<CombatTuning>,
    pub enemy: Option<EnemyTuning>,
    pub buffs: Option<BuffTuning>,
    pub boss: Option<BossTuning>,
}

fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

pub fn parse_tuning(source: &str, file_name: &str) -> Result<TuningFile, ConfigLoadError> {
    ron_options()
        .from_str(source)
        .map_err(|e| ConfigLoadError {
            file: file_name.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Returns `Ok(None)` when the file does not exist.
pub fn load_tuning_file(path: &Path) -> Result<Option<TuningFile>, ConfigLoadError> {
    let file_name = path.display().to_string();
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|e| ConfigLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_tuning(&contents, &file_name).map(Some)
}

impl TuningFile {
    /// Insert every section present in the file as a resource. Plugins added
    /// afterwards only `init_resource`, so these values win.
    pub fn install(self, app: &mut App) {
        if let Some(seed) = self.seed {
            app.insert_resource(RunConfig { seed });
        }
        if let Some(movement) = self.movement {
            app.insert_resource(movement);
        }
        if let Some(combat) = self.combat {
            app.insert_resource(combat);
        }
        if let Some(enemy) = self.enemy {
            app.insert_resource(enemy);
        }
        if let Some(buffs) = self.buffs {
            app.insert_resource(buffs);
        }
        if let Some(boss) = self.boss {
            app.insert_resource(boss);
        }
    }
}

pub(crate) fn install_tuning_overrides(app: &mut App) {
    match load_tuning_file(Path::new(TUNING_PATH)) {
        Ok(Some(file)) => {
            info!("Loaded tuning overrides from {}", TUNING_PATH);
            file.install(app);
        }
        Ok(None) => {
            info!("No tuning file at {}, using defaults", TUNING_PATH);
        }
        Err(e) => {
            error!("{}; using default tuning", e);
        }
    }
}
