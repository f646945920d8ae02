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

//! Static game data: skill registry, breed tables, profession cost tables
//! and title-level ceilings.
//!
//! The calculators never reach for a global. They are handed a [`GameData`]
//! value, which is either the built-in standard data or tables loaded from a
//! file and validated through [`GameData::new`].

use crate::ability::{Ability, AbilityScores};
use crate::identity::{Breed, Profession};
use crate::skill::{SkillCategory, SkillDefinition, SkillId, SkillNames};
use crate::standard;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use thiserror::Error;

/// Cost factor used when neither the profession table nor the skill
/// registry knows the skill.
pub const FALLBACK_COST_FACTOR: f64 = 2.0;

/// Errors raised while validating game data tables.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DataError {
    /// The same skill id was defined twice.
    #[error("Duplicate skill definition: {0}")]
    DuplicateSkill(SkillId),

    /// A trickle-down factor was negative or not a finite number.
    #[error("Invalid trickle-down factor {factor} on skill {skill}")]
    InvalidTrickleFactor { skill: SkillId, factor: f64 },

    /// A cost factor was zero, negative or not a finite number.
    #[error("Invalid cost factor {factor} for {context}")]
    InvalidCostFactor { context: String, factor: f64 },

    /// The title-level table is empty, unsorted or has falling ceilings.
    #[error("Invalid title level table: {0}")]
    InvalidTitleLevels(String),
}

/// Result type for table validation.
pub type DataResult<T> = Result<T, DataError>;

/// Per-breed ability data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BreedTable {
    /// Base value of each ability before any IP is spent.
    pub base_abilities: AbilityScores,
    /// Cost factor of each ability, in [`Ability::ALL`] order.
    pub ability_costs: [f64; 6],
}

impl BreedTable {
    pub fn base(&self, ability: Ability) -> i32 {
        self.base_abilities[ability]
    }

    pub fn cost_factor(&self, ability: Ability) -> f64 {
        self.ability_costs[ability.index()]
    }
}

impl Default for BreedTable {
    fn default() -> Self {
        Self {
            base_abilities: AbilityScores::uniform(6),
            ability_costs: [FALLBACK_COST_FACTOR; 6],
        }
    }
}

/// Per-profession cost factors.
///
/// A skill's factor is its entry in `overrides` if present, else the entry
/// for its category in `category_costs`, else the table-wide fallback.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfessionTable {
    pub category_costs: BTreeMap<SkillCategory, f64>,
    #[serde(default)]
    pub overrides: BTreeMap<SkillId, f64>,
}

/// One title-level bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleLevel {
    /// Title level number, starting at 1.
    pub rank: u8,
    /// First character level in this bracket.
    pub min_level: i32,
    /// Maximum number of IP-purchased points allowed in this bracket.
    pub ceiling: i32,
}

/// Raw, serializable game data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tables {
    pub skills: Vec<SkillDefinition>,
    pub breeds: BTreeMap<Breed, BreedTable>,
    pub professions: BTreeMap<Profession, ProfessionTable>,
    pub title_levels: Vec<TitleLevel>,
    #[serde(default = "fallback_cost_factor")]
    pub fallback_cost_factor: f64,
}

fn fallback_cost_factor() -> f64 {
    FALLBACK_COST_FACTOR
}

impl Tables {
    /// Check every invariant the calculators rely on: unique skill ids,
    /// non-negative trickle factors, positive cost factors and a sorted
    /// title-level table whose ceilings never fall.
    pub fn validate(&self) -> DataResult<()> {
        let mut seen = HashSet::new();
        for skill in &self.skills {
            if !seen.insert(skill.id) {
                return Err(DataError::DuplicateSkill(skill.id));
            }
            if let Some(factor) = skill
                .trickle
                .0
                .iter()
                .copied()
                .find(|factor| !factor.is_finite() || *factor < 0.0)
            {
                return Err(DataError::InvalidTrickleFactor {
                    skill: skill.id,
                    factor,
                });
            }
        }

        check_cost(self.fallback_cost_factor, || "fallback".to_string())?;
        for (breed, table) in &self.breeds {
            for ability in Ability::ALL {
                check_cost(table.cost_factor(ability), || format!("{breed} {ability}"))?;
            }
        }
        for (profession, table) in &self.professions {
            for (category, factor) in &table.category_costs {
                check_cost(*factor, || format!("{profession} {category:?}"))?;
            }
            for (skill, factor) in &table.overrides {
                check_cost(*factor, || format!("{profession} {skill}"))?;
            }
        }

        if self.title_levels.is_empty() {
            return Err(DataError::InvalidTitleLevels("no title levels".into()));
        }
        for pair in self.title_levels.windows(2) {
            if pair[1].min_level <= pair[0].min_level {
                return Err(DataError::InvalidTitleLevels(format!(
                    "TL{} does not start after TL{}",
                    pair[1].rank, pair[0].rank
                )));
            }
            if pair[1].ceiling < pair[0].ceiling {
                return Err(DataError::InvalidTitleLevels(format!(
                    "TL{} ceiling is lower than TL{}",
                    pair[1].rank, pair[0].rank
                )));
            }
        }
        Ok(())
    }
}

fn check_cost(factor: f64, context: impl FnOnce() -> String) -> DataResult<()> {
    if factor.is_finite() && factor > 0.0 {
        Ok(())
    } else {
        Err(DataError::InvalidCostFactor {
            context: context(),
            factor,
        })
    }
}

/// Indexed, read-only game data handed to the calculators.
#[derive(Debug, Clone)]
pub struct GameData {
    tables: Tables,
    index: HashMap<SkillId, usize>,
    names: SkillNames,
}

static STANDARD_DATA: Lazy<GameData> = Lazy::new(|| GameData::index(standard::tables()));

impl GameData {
    /// Validate and index a set of tables.
    pub fn new(tables: Tables) -> DataResult<Self> {
        tables.validate()?;
        Ok(Self::index(tables))
    }

    /// The built-in standard tables.
    pub fn standard() -> &'static GameData {
        &STANDARD_DATA
    }

    fn index(tables: Tables) -> Self {
        let index = tables
            .skills
            .iter()
            .enumerate()
            .map(|(position, skill)| (skill.id, position))
            .collect();
        let names = SkillNames::from_definitions(&tables.skills);
        Self {
            tables,
            index,
            names,
        }
    }

    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    /// Display-name table built from the skill definitions.
    pub fn names(&self) -> &SkillNames {
        &self.names
    }

    /// Get a skill definition by ID
    pub fn skill(&self, id: SkillId) -> Option<&SkillDefinition> {
        self.index.get(&id).map(|position| &self.tables.skills[*position])
    }

    /// All skill definitions, in table order.
    pub fn skills(&self) -> impl Iterator<Item = &SkillDefinition> {
        self.tables.skills.iter()
    }

    /// Get all skills in a category
    pub fn skills_by_category(&self, category: SkillCategory) -> Vec<&SkillDefinition> {
        self.skills()
            .filter(|skill| skill.category == category)
            .collect()
    }

    /// Breed data, falling back to the default table for a breed the
    /// tables do not list.
    pub fn breed(&self, breed: Breed) -> BreedTable {
        self.tables
            .breeds
            .get(&breed)
            .copied()
            .unwrap_or_default()
    }

    pub fn has_breed(&self, breed: Breed) -> bool {
        self.tables.breeds.contains_key(&breed)
    }

    pub fn has_profession(&self, profession: Profession) -> bool {
        self.tables.professions.contains_key(&profession)
    }

    pub fn fallback_cost_factor(&self) -> f64 {
        self.tables.fallback_cost_factor
    }

    /// Cost factor of a skill for a profession.
    pub fn cost_factor(&self, profession: Profession, skill: SkillId) -> f64 {
        let category = self.skill(skill).map(|definition| definition.category);
        self.tables
            .professions
            .get(&profession)
            .and_then(|table| {
                table.overrides.get(&skill).copied().or_else(|| {
                    category.and_then(|category| table.category_costs.get(&category).copied())
                })
            })
            .unwrap_or(self.tables.fallback_cost_factor)
    }

    /// Cost factor of an ability for a breed.
    pub fn ability_cost_factor(&self, breed: Breed, ability: Ability) -> f64 {
        self.breed(breed).cost_factor(ability)
    }

    /// Title-level bracket of a character level. Levels below the first
    /// bracket belong to the first bracket.
    pub fn title_level(&self, level: i32) -> TitleLevel {
        let levels = &self.tables.title_levels;
        levels
            .iter()
            .rev()
            .find(|title| level >= title.min_level)
            .or_else(|| levels.first())
            .copied()
            .unwrap_or(TitleLevel {
                rank: 1,
                min_level: 1,
                ceiling: 0,
            })
    }
}
