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

use crate::skill::SkillId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// The six core abilities.
///
/// Abilities are stored in a profile alongside ordinary skills under the
/// skill ids 16 through 21, and their order here is the order of every
/// ability vector and trickle-down weighting vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Ability {
    Strength,
    Agility,
    Stamina,
    Intelligence,
    Sense,
    Psychic,
}

impl Ability {
    /// All abilities in vector order.
    pub const ALL: [Ability; 6] = [
        Ability::Strength,
        Ability::Agility,
        Ability::Stamina,
        Ability::Intelligence,
        Ability::Sense,
        Ability::Psychic,
    ];

    /// Get the display name of the ability.
    pub fn name(&self) -> &'static str {
        match self {
            Ability::Strength => "Strength",
            Ability::Agility => "Agility",
            Ability::Stamina => "Stamina",
            Ability::Intelligence => "Intelligence",
            Ability::Sense => "Sense",
            Ability::Psychic => "Psychic",
        }
    }

    /// Position of this ability in ability and weighting vectors.
    pub fn index(&self) -> usize {
        match self {
            Ability::Strength => 0,
            Ability::Agility => 1,
            Ability::Stamina => 2,
            Ability::Intelligence => 3,
            Ability::Sense => 4,
            Ability::Psychic => 5,
        }
    }

    /// Skill id under which the ability is stored in a profile.
    pub fn skill_id(&self) -> SkillId {
        match self {
            Ability::Strength => SkillId::STRENGTH,
            Ability::Agility => SkillId::AGILITY,
            Ability::Stamina => SkillId::STAMINA,
            Ability::Intelligence => SkillId::INTELLIGENCE,
            Ability::Sense => SkillId::SENSE,
            Ability::Psychic => SkillId::PSYCHIC,
        }
    }

    /// Reverse of [`Ability::skill_id`].
    pub fn from_skill_id(id: SkillId) -> Option<Ability> {
        Self::ALL.into_iter().find(|ability| ability.skill_id() == id)
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Ability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strength" | "str" => Ok(Ability::Strength),
            "agility" | "agi" => Ok(Ability::Agility),
            "stamina" | "sta" => Ok(Ability::Stamina),
            "intelligence" | "int" => Ok(Ability::Intelligence),
            "sense" | "sen" => Ok(Ability::Sense),
            "psychic" | "psy" => Ok(Ability::Psychic),
            _ => Err(format!("Unknown ability: {s}")),
        }
    }
}

/// One integer per ability, in [`Ability::ALL`] order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AbilityScores(pub [i32; 6]);

impl AbilityScores {
    pub fn new(scores: [i32; 6]) -> Self {
        Self(scores)
    }

    /// Every ability at the same value.
    pub fn uniform(value: i32) -> Self {
        Self([value; 6])
    }

    /// Copy with one ability replaced.
    pub fn with(mut self, ability: Ability, value: i32) -> Self {
        self[ability] = value;
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (Ability, i32)> + '_ {
        Ability::ALL.into_iter().map(move |ability| (ability, self[ability]))
    }
}

impl Index<Ability> for AbilityScores {
    type Output = i32;

    fn index(&self, ability: Ability) -> &Self::Output {
        &self.0[ability.index()]
    }
}

impl IndexMut<Ability> for AbilityScores {
    fn index_mut(&mut self, ability: Ability) -> &mut Self::Output {
        &mut self.0[ability.index()]
    }
}

impl From<[i32; 6]> for AbilityScores {
    fn from(value: [i32; 6]) -> Self {
        Self(value)
    }
}

/// Trickle-down weighting vector: one non-negative factor per ability.
///
/// A vector of all zeros means the skill does not depend on abilities at
/// all, which is the case for the abilities themselves, armor class and
/// miscellaneous stats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TrickleFactors(pub [f64; 6]);

impl TrickleFactors {
    pub const NONE: TrickleFactors = TrickleFactors([0.0; 6]);

    pub fn new(factors: [f64; 6]) -> Self {
        Self(factors)
    }

    /// Factor applied to a single ability.
    pub fn factor(&self, ability: Ability) -> f64 {
        self.0[ability.index()]
    }

    /// True when no ability contributes to the skill.
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|factor| *factor == 0.0)
    }

    /// Sum of all factors. Standard tables keep this at 1.0 for every
    /// trainable skill.
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }
}
