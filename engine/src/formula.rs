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

//! Ability-driven formulas shared by every skill.
//!
//! ### **Equations**
//!
//! W = Σ ability(i) * factor(i)
//!
//! Trickle = floor(W / 4)
//!
//! AbilityCap = round(((W - 5) * 2) + 5)
//!
//! Rounding is half away from zero, the game's native convention, so a
//! weighted value of 5.75 gives 7 rather than the 6 banker's rounding
//! would produce.

use ipcalc_common::{AbilityScores, TrickleFactors};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Absorbs floating point noise from factors such as 0.1 and 0.3 so that a
/// weighted sum meant to be exactly 12.0 never floors to 11.
const EPSILON: f64 = 1e-9;

/// How far a skill may be improved according to current ability totals.
///
/// Skills without any ability dependency are not limited by abilities at
/// all. That is a distinct value here rather than a large sentinel number,
/// so it survives any `min` against the level-driven allowance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AbilityLimit {
    /// Improvement limited to this many points. May be negative when
    /// abilities are very low; callers clamp.
    Limited(i32),
    /// Abilities place no limit on the skill.
    Unbounded,
}

impl AbilityLimit {
    /// The smaller of this limit and a level-driven allowance.
    pub fn min_with(self, allowance: i32) -> i32 {
        match self {
            AbilityLimit::Limited(limit) => limit.min(allowance),
            AbilityLimit::Unbounded => allowance,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, AbilityLimit::Unbounded)
    }

    pub fn value(&self) -> Option<i32> {
        match self {
            AbilityLimit::Limited(limit) => Some(*limit),
            AbilityLimit::Unbounded => None,
        }
    }
}

impl fmt::Display for AbilityLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbilityLimit::Limited(limit) => write!(f, "{limit}"),
            AbilityLimit::Unbounded => write!(f, "unbounded"),
        }
    }
}

/// Round to the nearest integer, with halves rounded away from zero.
///
/// Non-finite input rounds to zero.
pub fn round_half_away_from_zero(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    let magnitude = (value.abs() + 0.5 + EPSILON).floor();
    if value < 0.0 {
        -(magnitude as i64)
    } else {
        magnitude as i64
    }
}

/// W = Σ ability(i) * factor(i)
///
/// Negative ability values are treated as zero.
pub fn weighted_abilities(abilities: &AbilityScores, factors: &TrickleFactors) -> f64 {
    abilities
        .iter()
        .map(|(ability, value)| f64::from(value.max(0)) * factors.factor(ability))
        .sum()
}

/// Trickle = floor(W / 4)
///
/// `abilities` must hold full ability totals, not the IP-purchased part.
pub fn trickle_down(abilities: &AbilityScores, factors: &TrickleFactors) -> i32 {
    if factors.is_empty() {
        return 0;
    }
    let weighted = weighted_abilities(abilities, factors);
    saturate((weighted / 4.0 + EPSILON).floor() as i64).max(0)
}

/// AbilityCap = round(((W - 5) * 2) + 5)
///
/// Values below 5 are returned as computed; clamping belongs to the skill
/// cap calculation.
pub fn ability_cap_improvements(abilities: &AbilityScores, factors: &TrickleFactors) -> AbilityLimit {
    if factors.is_empty() {
        return AbilityLimit::Unbounded;
    }
    let weighted = weighted_abilities(abilities, factors);
    AbilityLimit::Limited(saturate(round_half_away_from_zero(
        ((weighted - 5.0) * 2.0) + 5.0,
    )))
}

fn saturate(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
