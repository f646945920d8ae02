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

//! Character identity: breed, profession and faction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Character species variant.
///
/// Each breed has its own base ability values and per-ability cost
/// factors (see [`crate::tables::BreedTable`]).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Breed {
    #[default]
    Solitus,
    Opifex,
    Nanomage,
    Atrox,
}

impl Breed {
    pub fn name(&self) -> &'static str {
        match self {
            Breed::Solitus => "Solitus",
            Breed::Opifex => "Opifex",
            Breed::Nanomage => "Nanomage",
            Breed::Atrox => "Atrox",
        }
    }

    pub fn all() -> &'static [Breed] {
        &[Breed::Solitus, Breed::Opifex, Breed::Nanomage, Breed::Atrox]
    }
}

impl fmt::Display for Breed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Breed {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|breed| breed.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| format!("Unknown breed: {s}"))
    }
}

/// Character class. Determines the cost factor of every skill.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Profession {
    #[default]
    Adventurer,
    Agent,
    Bureaucrat,
    Doctor,
    Enforcer,
    Engineer,
    Fixer,
    Keeper,
    MartialArtist,
    MetaPhysicist,
    NanoTechnician,
    Shade,
    Soldier,
    Trader,
}

impl Profession {
    pub fn name(&self) -> &'static str {
        match self {
            Profession::Adventurer => "Adventurer",
            Profession::Agent => "Agent",
            Profession::Bureaucrat => "Bureaucrat",
            Profession::Doctor => "Doctor",
            Profession::Enforcer => "Enforcer",
            Profession::Engineer => "Engineer",
            Profession::Fixer => "Fixer",
            Profession::Keeper => "Keeper",
            Profession::MartialArtist => "Martial Artist",
            Profession::MetaPhysicist => "Meta-Physicist",
            Profession::NanoTechnician => "Nano-Technician",
            Profession::Shade => "Shade",
            Profession::Soldier => "Soldier",
            Profession::Trader => "Trader",
        }
    }

    pub fn all() -> &'static [Profession] {
        &[
            Profession::Adventurer,
            Profession::Agent,
            Profession::Bureaucrat,
            Profession::Doctor,
            Profession::Enforcer,
            Profession::Engineer,
            Profession::Fixer,
            Profession::Keeper,
            Profession::MartialArtist,
            Profession::MetaPhysicist,
            Profession::NanoTechnician,
            Profession::Shade,
            Profession::Soldier,
            Profession::Trader,
        ]
    }
}

impl fmt::Display for Profession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Profession {
    type Err = String;

    /// Accepts display names with or without separators, so "Martial Artist",
    /// "martial-artist" and "martialartist" all resolve.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        match wanted.as_str() {
            "ma" => return Ok(Profession::MartialArtist),
            "mp" => return Ok(Profession::MetaPhysicist),
            "nt" => return Ok(Profession::NanoTechnician),
            _ => {}
        }
        Self::all()
            .iter()
            .find(|profession| normalize(profession.name()) == wanted)
            .copied()
            .ok_or_else(|| format!("Unknown profession: {s}"))
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Cosmetic allegiance. Not used by any calculation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Clan,
    #[default]
    Neutral,
    Omni,
}

impl Faction {
    pub fn name(&self) -> &'static str {
        match self {
            Faction::Clan => "Clan",
            Faction::Neutral => "Neutral",
            Faction::Omni => "Omni",
        }
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Faction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "clan" => Ok(Faction::Clan),
            "neutral" | "neut" => Ok(Faction::Neutral),
            "omni" => Ok(Faction::Omni),
            _ => Err(format!("Unknown faction: {s}")),
        }
    }
}
