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

//! Skill cap calculator
//!
//! ## Equation
//! Cap = Base + Trickle + max(0, min(LevelAllowance, AbilityAllowance))
//!
//! LevelAllowance = min(floor(Level * 5 / CostFactor), TitleCeiling(Level))
//!
//! AbilityAllowance comes from [`ability_cap_improvements`] and is unbounded
//! for skills that do not depend on abilities.

use crate::formula::{AbilityLimit, ability_cap_improvements, trickle_down};
use ipcalc_common::{
    Ability, AbilityScores, Breed, GameData, Profession, SkillCategory, SkillId, TrickleFactors,
};
use serde::{Deserialize, Serialize};

/// Every intermediate value of a cap computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapBreakdown {
    pub base: i32,
    pub trickle: i32,
    pub cost_factor: f64,
    pub title_level: u8,
    pub level_allowance: i32,
    pub ability_limit: AbilityLimit,
    /// IP-purchasable points allowed on top of base and trickle.
    pub allowance: i32,
    pub cap: i32,
}

/// Pure calculator over injected game data.
#[derive(Debug, Clone, Copy)]
pub struct Calculator<'d> {
    data: &'d GameData,
}

impl Calculator<'static> {
    /// Calculator over the built-in standard tables.
    pub fn standard() -> Self {
        Self::new(GameData::standard())
    }
}

impl<'d> Calculator<'d> {
    pub fn new(data: &'d GameData) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &'d GameData {
        self.data
    }

    /// Weighting vector of a skill; unknown skills have none.
    fn factors(&self, skill: SkillId) -> TrickleFactors {
        self.data
            .skill(skill)
            .map(|definition| definition.trickle)
            .unwrap_or(TrickleFactors::NONE)
    }

    /// Trickle-down bonus of a skill for the given ability totals.
    pub fn trickle(&self, skill: SkillId, abilities: &AbilityScores) -> i32 {
        trickle_down(abilities, &self.factors(skill))
    }

    /// Ability-driven improvement limit of a skill.
    pub fn ability_limit(&self, skill: SkillId, abilities: &AbilityScores) -> AbilityLimit {
        ability_cap_improvements(abilities, &self.factors(skill))
    }

    /// LevelAllowance = min(floor(Level * 5 / CostFactor), TitleCeiling(Level))
    ///
    /// Negative levels count as zero and an unusable cost factor is replaced
    /// by the table fallback.
    pub fn level_allowance(&self, level: i32, cost_factor: f64) -> i32 {
        let level = level.max(0);
        let cost_factor = if cost_factor.is_finite() && cost_factor > 0.0 {
            cost_factor
        } else {
            self.data.fallback_cost_factor()
        };
        let raw = (f64::from(level) * 5.0 / cost_factor + 1e-9).floor();
        let raw = raw.min(f64::from(i32::MAX)) as i32;
        raw.min(self.data.title_level(level).ceiling).max(0)
    }

    /// Cap of a non-ability skill.
    ///
    /// Unknown skills get a trainable base of 5, no trickle and the fallback
    /// cost factor. Armor class and miscellaneous stats cannot be trained,
    /// so their allowance is always zero. Abilities are capped by
    /// [`Calculator::ability_cap`], which knows the breed.
    pub fn skill_cap(
        &self,
        level: i32,
        profession: Profession,
        skill: SkillId,
        abilities: &AbilityScores,
    ) -> CapBreakdown {
        let category = self
            .data
            .skill(skill)
            .map(|definition| definition.category)
            .unwrap_or(SkillCategory::Body);
        let base = category.default_base();
        let trickle = self.trickle(skill, abilities);
        let cost_factor = self.data.cost_factor(profession, skill);
        let level_allowance = self.level_allowance(level, cost_factor);
        let ability_limit = self.ability_limit(skill, abilities);
        let allowance = if category.is_trainable() {
            ability_limit.min_with(level_allowance).max(0)
        } else {
            0
        };
        CapBreakdown {
            base,
            trickle,
            cost_factor,
            title_level: self.data.title_level(level.max(0)).rank,
            level_allowance,
            ability_limit,
            allowance,
            cap: base.saturating_add(trickle).saturating_add(allowance),
        }
    }

    /// Cap of an ability: breed base plus the level-driven allowance at the
    /// breed's cost factor. Abilities neither trickle nor depend on other
    /// abilities.
    pub fn ability_cap(&self, level: i32, breed: Breed, ability: Ability) -> CapBreakdown {
        let table = self.data.breed(breed);
        let base = table.base(ability).max(0);
        let cost_factor = table.cost_factor(ability);
        let level_allowance = self.level_allowance(level, cost_factor);
        CapBreakdown {
            base,
            trickle: 0,
            cost_factor,
            title_level: self.data.title_level(level.max(0)).rank,
            level_allowance,
            ability_limit: AbilityLimit::Unbounded,
            allowance: level_allowance,
            cap: base.saturating_add(level_allowance),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calculator() -> Calculator<'static> {
        Calculator::standard()
    }

    #[test]
    fn test_body_dev_ability_limited() {
        let cap = calculator().skill_cap(
            50,
            Profession::Adventurer,
            SkillId::BODY_DEV,
            &AbilityScores::uniform(6),
        );
        assert_eq!(cap.base, 5);
        assert_eq!(cap.trickle, 1);
        assert_eq!(cap.ability_limit, AbilityLimit::Limited(7));
        assert_eq!(cap.allowance, 7);
        assert_eq!(cap.cap, 13);
    }

    #[test]
    fn test_body_dev_title_level_ceiling() {
        let abilities = AbilityScores::uniform(6).with(Ability::Stamina, 48);
        let cap = calculator().skill_cap(14, Profession::Adventurer, SkillId::BODY_DEV, &abilities);
        assert_eq!(cap.trickle, 12);
        assert_eq!(cap.title_level, 1);
        assert_eq!(cap.level_allowance, 55);
        assert_eq!(cap.cap, 72);
    }

    #[test]
    fn test_ability_floor_binds_at_any_level() {
        let abilities = AbilityScores::uniform(6);
        let low = calculator().skill_cap(14, Profession::Adventurer, SkillId::BODY_DEV, &abilities);
        let high =
            calculator().skill_cap(200, Profession::Adventurer, SkillId::BODY_DEV, &abilities);
        assert_eq!(low.cap, high.cap);
        assert_eq!(high.cap, 13);
    }

    #[test]
    fn test_level_binds_with_high_abilities() {
        let abilities = AbilityScores::uniform(500);
        let cap = calculator().skill_cap(2, Profession::Adventurer, SkillId::BODY_DEV, &abilities);
        // floor(10 / 1.2) = 8
        assert_eq!(cap.level_allowance, 8);
        assert_eq!(cap.allowance, 8);
        assert_eq!(cap.cap, 5 + 125 + 8);
    }

    #[test]
    fn test_cost_factor_changes_level_allowance() {
        let calculator = calculator();
        let abilities = AbilityScores::uniform(500);
        let enforcer =
            calculator.skill_cap(40, Profession::Enforcer, SkillId::BODY_DEV, &abilities);
        let doctor = calculator.skill_cap(40, Profession::Doctor, SkillId::BODY_DEV, &abilities);
        assert_eq!(enforcer.level_allowance, 190);
        assert_eq!(doctor.level_allowance, 100);
        assert!(enforcer.cap > doctor.cap);
    }

    #[test]
    fn test_unknown_skill_is_finite() {
        let cap = calculator().skill_cap(
            100,
            Profession::Trader,
            SkillId(9999),
            &AbilityScores::uniform(6),
        );
        assert_eq!(cap.base, 5);
        assert_eq!(cap.trickle, 0);
        assert!(cap.ability_limit.is_unbounded());
        assert_eq!(cap.cost_factor, 2.0);
        assert_eq!(cap.cap, 5 + 250);
    }

    #[test]
    fn test_untrainable_skill_has_no_allowance() {
        let cap = calculator().skill_cap(
            200,
            Profession::Soldier,
            SkillId::PROJECTILE_AC,
            &AbilityScores::uniform(400),
        );
        assert_eq!(cap.base, 0);
        assert_eq!(cap.allowance, 0);
        assert_eq!(cap.cap, 0);
    }

    #[test]
    fn test_negative_inputs_never_yield_negative_caps() {
        let cap = calculator().skill_cap(
            -10,
            Profession::Agent,
            SkillId::AIMED_SHOT,
            &AbilityScores::uniform(-50),
        );
        assert_eq!(cap.level_allowance, 0);
        assert_eq!(cap.allowance, 0);
        assert_eq!(cap.cap, 5);
    }

    #[test]
    fn test_ability_cap() {
        let cap = calculator().ability_cap(14, Breed::Solitus, Ability::Strength);
        assert_eq!(cap.base, 6);
        assert_eq!(cap.trickle, 0);
        // floor(70 / 2.0) = 35, under the TL1 ceiling
        assert_eq!(cap.allowance, 35);
        assert_eq!(cap.cap, 41);

        let cap = calculator().ability_cap(1, Breed::Atrox, Ability::Strength);
        assert_eq!(cap.base, 10);
        // floor(5 / 1.4) = 3
        assert_eq!(cap.cap, 13);
    }

    #[test]
    fn test_level_allowance_with_bad_cost_factor() {
        let calculator = calculator();
        assert_eq!(calculator.level_allowance(10, 0.0), 25);
        assert_eq!(calculator.level_allowance(10, f64::NAN), 25);
        assert_eq!(calculator.level_allowance(-3, 1.0), 0);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn standard_skill() -> impl Strategy<Value = SkillId> {
            let ids: Vec<SkillId> = GameData::standard().skills().map(|skill| skill.id).collect();
            proptest::sample::select(ids)
        }

        fn scores() -> impl Strategy<Value = AbilityScores> {
            proptest::array::uniform6(0i32..800).prop_map(AbilityScores::new)
        }

        proptest! {
            #[test]
            fn cap_never_decreases_with_level(
                level in 0i32..300,
                skill in standard_skill(),
                profession in proptest::sample::select(Profession::all()),
                abilities in scores(),
            ) {
                let calculator = Calculator::standard();
                let lower = calculator.skill_cap(level, profession, skill, &abilities);
                let higher = calculator.skill_cap(level + 1, profession, skill, &abilities);
                prop_assert!(higher.cap >= lower.cap);
            }

            #[test]
            fn cap_never_decreases_with_abilities(
                level in 0i32..300,
                skill in standard_skill(),
                profession in proptest::sample::select(Profession::all()),
                abilities in scores(),
                raised in proptest::sample::select(Ability::ALL.to_vec()),
                step in 1i32..50,
            ) {
                let calculator = Calculator::standard();
                let boosted = abilities.with(raised, abilities[raised] + step);
                let lower = calculator.skill_cap(level, profession, skill, &abilities);
                let higher = calculator.skill_cap(level, profession, skill, &boosted);
                prop_assert!(higher.cap >= lower.cap);
                prop_assert!(higher.trickle >= lower.trickle);
            }

            #[test]
            fn ability_cap_never_decreases_with_level(
                level in 0i32..300,
                breed in proptest::sample::select(Breed::all()),
                ability in proptest::sample::select(Ability::ALL.to_vec()),
            ) {
                let calculator = Calculator::standard();
                let lower = calculator.ability_cap(level, breed, ability);
                let higher = calculator.ability_cap(level + 1, breed, ability);
                prop_assert!(higher.cap >= lower.cap);
            }

            #[test]
            fn cap_is_never_negative(
                level in -50i32..300,
                value in -100i32..800,
                skill in 0u32..200,
            ) {
                let calculator = Calculator::standard();
                let cap = calculator.skill_cap(level, Profession::Trader, SkillId(skill), &AbilityScores::uniform(value));
                prop_assert!(cap.cap >= 0);
                prop_assert!(cap.allowance >= 0);
            }
        }
    }
}
