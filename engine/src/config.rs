//
// Copyright 2025-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

use crate::mutation::PlannerOptions;
use clap::{Parser, Subcommand};
use ipcalc_common::{Ability, Breed, DataError, Faction, GameData, Profession, Tables};
use serde::{Deserialize, Serialize};
use serde_env_field::EnvField;
use std::convert::Infallible;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Arguments {
    #[arg(
        short = 'c',
        long = "config",
        help = "Path to configuration file",
        default_value = "ipcalc.yaml"
    )]
    pub config_file: String,

    #[arg(
        short = 'e',
        long = "env",
        help = "Path to environment file",
        default_value = ".env"
    )]
    pub env_file: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create and save a new profile
    New {
        name: String,
        #[arg(long, default_value = "solitus")]
        breed: Breed,
        #[arg(long, default_value = "adventurer")]
        profession: Profession,
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        level: i32,
        #[arg(long, default_value = "neutral")]
        faction: Faction,
    },
    /// Print a stored profile
    Show { name: String },
    /// Set an ability to a trained value (breed base plus IP points)
    SetAbility {
        name: String,
        ability: Ability,
        #[arg(allow_negative_numbers = true)]
        value: i32,
    },
    /// Set the IP points of a skill, by name or numeric id
    SetSkill {
        name: String,
        skill: String,
        #[arg(allow_negative_numbers = true)]
        points: i32,
    },
    SetBreed { name: String, breed: Breed },
    SetLevel {
        name: String,
        #[arg(allow_negative_numbers = true)]
        level: i32,
    },
    SetProfession { name: String, profession: Profession },
    /// Print the cap breakdown of a skill without touching any profile
    Cap {
        skill: String,
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        level: i32,
        #[arg(long, default_value = "adventurer")]
        profession: Profession,
        #[arg(long, default_value = "solitus")]
        breed: Breed,
        /// Ability totals: Strength, Agility, Stamina, Intelligence, Sense, Psychic
        #[arg(long, value_delimiter = ',', default_value = "6,6,6,6,6,6")]
        abilities: Vec<i32>,
    },
}

/// Errors that can occur while loading configuration or tables.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to open {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Yaml {
        path: String,
        source: serde_yaml::Error,
    },

    #[error("Invalid tables: {0}")]
    Data(#[from] DataError),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub planner: PlannerOptions,
    /// Custom tables replacing the built-in standard data.
    #[serde(default)]
    pub tables: Option<EnvField<TablesPath>>,
}

impl Configuration {
    pub fn load(path: &str) -> ConfigResult<Configuration> {
        let file = std::fs::File::open(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        serde_yaml::from_reader(file).map_err(|source| ConfigError::Yaml {
            path: path.to_string(),
            source,
        })
    }

    /// Like [`Configuration::load`], but a missing file yields defaults.
    pub fn load_or_default(path: &str) -> ConfigResult<Configuration> {
        if Path::new(path).exists() {
            Self::load(path)
        } else {
            tracing::debug!("No configuration file at {}, using defaults", path);
            Ok(Configuration::default())
        }
    }

    /// Game data named by the configuration, or the standard tables.
    pub fn load_tables(&self) -> ConfigResult<GameData> {
        let Some(tables) = &self.tables else {
            return Ok(GameData::standard().clone());
        };
        let path = tables.to_path();
        let shown = path.display().to_string();
        let file = std::fs::File::open(path).map_err(|source| ConfigError::Io {
            path: shown.clone(),
            source,
        })?;
        let tables: Tables = serde_yaml::from_reader(file).map_err(|source| ConfigError::Yaml {
            path: shown.clone(),
            source,
        })?;
        tracing::info!("Loaded {} skills from {}", tables.skills.len(), shown);
        Ok(GameData::new(tables)?)
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub directory: EnvField<StoreDirectory>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreDirectory(PathBuf);

impl StoreDirectory {
    pub fn to_path(&self) -> &Path {
        &self.0
    }
}

impl FromStr for StoreDirectory {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(PathBuf::from(s)))
    }
}

impl Default for StoreDirectory {
    fn default() -> Self {
        Self(PathBuf::from("profiles"))
    }
}

impl std::fmt::Display for StoreDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TablesPath(PathBuf);

impl TablesPath {
    pub fn to_path(&self) -> &Path {
        &self.0
    }
}

impl FromStr for TablesPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(PathBuf::from(s)))
    }
}

impl std::fmt::Display for TablesPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
