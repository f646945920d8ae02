//
// Copyright 2025 Hans W. Uhlig. All Rights Reserved.
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

//! Shared character-build types and static game data
//!
//! This crate defines the data the calculation engine consumes:
//! - Character identity (breed, profession, faction)
//! - The six abilities and trickle-down weighting vectors
//! - Integer-keyed skill ids and the skill registry
//! - Breed, profession and title-level tables

pub mod ability;
pub mod identity;
mod macros;
pub mod skill;
pub mod standard;
pub mod tables;

pub use self::ability::{Ability, AbilityScores, TrickleFactors};
pub use self::identity::{Breed, Faction, Profession};
pub use self::skill::{SkillCategory, SkillDefinition, SkillId, SkillNames};
pub use self::tables::{
    BreedTable, DataError, DataResult, FALLBACK_COST_FACTOR, GameData, ProfessionTable, Tables,
    TitleLevel,
};
