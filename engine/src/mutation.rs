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

//! Mutation entry points.
//!
//! Every mutation validates against the current caps, changes one field and
//! recomputes the whole profile before returning. Work happens on a staged
//! copy that replaces the caller's profile only on success, so a rejected
//! mutation leaves the profile exactly as it was.

use crate::aggregate::RecomputeReport;
use crate::calculator::Calculator;
use crate::equipment::{EquipSlot, EquippedItem};
use crate::error::{ProfileError, ProfileResult};
use crate::ip::{cost_to_raise, max_reachable};
use crate::profile::{BonusSource, Identity, Profile, SkillRecord};
use ipcalc_common::{Ability, Breed, GameData, Profession, SkillId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What to do with a value outside the legal range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapPolicy {
    /// Fail with a [`ProfileError`].
    #[default]
    Reject,
    /// Move the value into range and report the adjustment.
    Clamp,
}

/// Whether raising a value must fit the remaining IP.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetPolicy {
    #[default]
    Allow,
    Enforce,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerOptions {
    #[serde(default)]
    pub cap_policy: CapPolicy,
    #[serde(default)]
    pub budget_policy: BudgetPolicy,
}

/// A requested value that was changed before being applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjustment {
    pub requested: i32,
    pub applied: i32,
}

impl Adjustment {
    fn between(requested: i32, applied: i32) -> Option<Self> {
        (requested != applied).then_some(Self { requested, applied })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationOutcome {
    pub adjusted: Option<Adjustment>,
    pub recompute: RecomputeReport,
}

/// A single profile change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Mutation {
    /// `value` is the trained ability value: breed base plus IP points.
    SetAbility { ability: Ability, value: i32 },
    SetSkillPoints { skill: SkillId, points: i32 },
    SetBreed { breed: Breed },
    SetLevel { level: i32 },
    SetProfession { profession: Profession },
    SetBonuses {
        source: BonusSource,
        bonuses: BTreeMap<SkillId, i32>,
    },
    Equip { slot: EquipSlot, item: EquippedItem },
    Unequip { slot: EquipSlot },
}

impl Mutation {
    pub fn apply(self, planner: &Planner<'_>, profile: &mut Profile) -> ProfileResult<MutationOutcome> {
        match self {
            Mutation::SetAbility { ability, value } => planner.set_ability(profile, ability, value),
            Mutation::SetSkillPoints { skill, points } => {
                planner.set_skill_points_from_ip(profile, skill, points)
            }
            Mutation::SetBreed { breed } => planner.set_breed(profile, breed),
            Mutation::SetLevel { level } => planner.set_level(profile, level),
            Mutation::SetProfession { profession } => planner.set_profession(profile, profession),
            Mutation::SetBonuses { source, bonuses } => planner.set_bonuses(profile, source, &bonuses),
            Mutation::Equip { slot, item } => planner.equip(profile, slot, item),
            Mutation::Unequip { slot } => planner.unequip(profile, slot),
        }
    }
}

/// Legal range of IP points for one record, plus the unit offset used when
/// reporting values to the caller.
struct Range {
    skill: SkillId,
    offset: i32,
    allowance: i32,
}

/// Applies mutations under a validation policy.
#[derive(Debug, Clone, Copy)]
pub struct Planner<'d> {
    calculator: Calculator<'d>,
    options: PlannerOptions,
}

impl Planner<'static> {
    pub fn standard(options: PlannerOptions) -> Self {
        Self::new(GameData::standard(), options)
    }
}

impl<'d> Planner<'d> {
    pub fn new(data: &'d GameData, options: PlannerOptions) -> Self {
        Self {
            calculator: Calculator::new(data),
            options,
        }
    }

    pub fn calculator(&self) -> &Calculator<'d> {
        &self.calculator
    }

    pub fn options(&self) -> PlannerOptions {
        self.options
    }

    /// A consistent profile with every registered skill at base value.
    pub fn create_profile(&self, name: impl Into<String>, identity: Identity) -> Profile {
        let mut profile = Profile::new(name, identity);
        let report = self.calculator.recompute(&mut profile);
        tracing::debug!(
            "Created profile '{}' with {} records",
            profile.name(),
            report.inserted.len()
        );
        profile
    }

    pub fn recompute(&self, profile: &mut Profile) -> RecomputeReport {
        self.calculator.recompute(profile)
    }

    /// Set an ability to `value`, its breed base plus IP points.
    #[tracing::instrument(skip(self, profile), fields(profile = %profile.name()))]
    pub fn set_ability(
        &self,
        profile: &mut Profile,
        ability: Ability,
        value: i32,
    ) -> ProfileResult<MutationOutcome> {
        let skill = ability.skill_id();
        self.commit(profile, |staged| {
            let identity = *staged.identity();
            let breakdown = self
                .calculator
                .ability_cap(identity.level, identity.breed, ability);
            let range = Range {
                skill,
                offset: breakdown.base,
                allowance: breakdown.allowance,
            };
            let points = value.saturating_sub(breakdown.base);
            let applied = self.fit(staged, &range, points)?;
            Ok(Adjustment::between(value, breakdown.base + applied))
        })
    }

    /// Set the IP points invested in a skill.
    ///
    /// Ability ids are accepted and treated as ability points.
    #[tracing::instrument(skip(self, profile), fields(profile = %profile.name()))]
    pub fn set_skill_points_from_ip(
        &self,
        profile: &mut Profile,
        skill: SkillId,
        points: i32,
    ) -> ProfileResult<MutationOutcome> {
        self.commit(profile, |staged| {
            if !staged.skills.contains_key(&skill) {
                return Err(ProfileError::UnknownSkill(skill));
            }
            let identity = *staged.identity();
            let allowance = match Ability::from_skill_id(skill) {
                Some(ability) => {
                    self.calculator
                        .ability_cap(identity.level, identity.breed, ability)
                        .allowance
                }
                None => {
                    let trainable = self
                        .calculator
                        .data()
                        .skill(skill)
                        .is_none_or(|definition| definition.is_trainable());
                    if !trainable && points != 0 {
                        return Err(ProfileError::NotTrainable(skill));
                    }
                    self.calculator
                        .skill_cap(
                            identity.level,
                            identity.profession,
                            skill,
                            &staged.ability_totals(),
                        )
                        .allowance
                }
            };
            let range = Range {
                skill,
                offset: 0,
                allowance,
            };
            let applied = self.fit(staged, &range, points)?;
            Ok(Adjustment::between(points, applied))
        })
    }

    /// Change breed. Invested points are kept and moved onto the new bases.
    #[tracing::instrument(skip(self, profile), fields(profile = %profile.name()))]
    pub fn set_breed(&self, profile: &mut Profile, breed: Breed) -> ProfileResult<MutationOutcome> {
        self.commit(profile, |staged| {
            staged.identity.breed = breed;
            Ok(None)
        })
    }

    /// Change level. Negative levels become 0.
    #[tracing::instrument(skip(self, profile), fields(profile = %profile.name()))]
    pub fn set_level(&self, profile: &mut Profile, level: i32) -> ProfileResult<MutationOutcome> {
        self.commit(profile, |staged| {
            staged.identity.level = level.max(0);
            Ok(Adjustment::between(level, staged.identity.level))
        })
    }

    #[tracing::instrument(skip(self, profile), fields(profile = %profile.name()))]
    pub fn set_profession(
        &self,
        profile: &mut Profile,
        profession: Profession,
    ) -> ProfileResult<MutationOutcome> {
        self.commit(profile, |staged| {
            staged.identity.profession = profession;
            Ok(None)
        })
    }

    /// Replace every perk or buff bonus with `bonuses`; skills missing from
    /// the map lose that bonus.
    #[tracing::instrument(skip(self, profile, bonuses), fields(profile = %profile.name(), count = bonuses.len()))]
    pub fn set_bonuses(
        &self,
        profile: &mut Profile,
        source: BonusSource,
        bonuses: &BTreeMap<SkillId, i32>,
    ) -> ProfileResult<MutationOutcome> {
        self.commit(profile, |staged| {
            if let Some(unknown) = bonuses.keys().find(|id| !staged.skills.contains_key(id)) {
                return Err(ProfileError::UnknownSkill(*unknown));
            }
            for (id, record) in staged.skills.iter_mut() {
                record.set_bonus(source, bonuses.get(id).copied().unwrap_or(0));
            }
            Ok(None)
        })
    }

    #[tracing::instrument(skip(self, profile, item), fields(profile = %profile.name(), item = %item.name))]
    pub fn equip(
        &self,
        profile: &mut Profile,
        slot: EquipSlot,
        item: EquippedItem,
    ) -> ProfileResult<MutationOutcome> {
        self.commit(profile, |staged| {
            if let Some(previous) = staged.equipment.equip(slot, item) {
                tracing::debug!("Replaced '{}' in slot {}", previous.name, slot);
            }
            Ok(None)
        })
    }

    #[tracing::instrument(skip(self, profile), fields(profile = %profile.name()))]
    pub fn unequip(&self, profile: &mut Profile, slot: EquipSlot) -> ProfileResult<MutationOutcome> {
        self.commit(profile, |staged| {
            if staged.equipment.unequip(slot).is_none() {
                tracing::debug!("Slot {} was already empty", slot);
            }
            Ok(None)
        })
    }

    /// Run `change` against a recomputed copy of `profile` and keep the
    /// result only if it succeeds.
    fn commit<F>(&self, profile: &mut Profile, change: F) -> ProfileResult<MutationOutcome>
    where
        F: FnOnce(&mut Profile) -> ProfileResult<Option<Adjustment>>,
    {
        let mut staged = profile.clone();
        let mut recompute = self.calculator.recompute(&mut staged);
        let adjusted = match change(&mut staged) {
            Ok(adjusted) => adjusted,
            Err(error) => {
                tracing::debug!("Rejected mutation: {}", error);
                return Err(error);
            }
        };
        recompute.absorb(self.calculator.recompute(&mut staged));
        if let Some(adjustment) = adjusted {
            tracing::warn!(
                "Requested {} but applied {}",
                adjustment.requested,
                adjustment.applied
            );
        }
        *profile = staged;
        Ok(MutationOutcome {
            adjusted,
            recompute,
        })
    }

    /// Validate `requested` IP points against the range and the budget, and
    /// store the accepted value. Returns the applied points.
    fn fit(&self, staged: &mut Profile, range: &Range, requested: i32) -> ProfileResult<i32> {
        let record = staged
            .skills
            .get(&range.skill)
            .copied()
            .ok_or(ProfileError::UnknownSkill(range.skill))?;
        let allowance = range.allowance.max(0);
        let clamp = self.options.cap_policy == CapPolicy::Clamp;

        let mut applied = requested;
        if applied < 0 {
            if !clamp {
                return Err(ProfileError::BelowBase {
                    skill: range.skill,
                    requested: range.offset.saturating_add(requested),
                    minimum: range.offset,
                });
            }
            applied = 0;
        }
        if applied > allowance {
            if !clamp {
                return Err(ProfileError::AboveCap {
                    skill: range.skill,
                    requested: range.offset.saturating_add(requested),
                    maximum: range.offset.saturating_add(allowance),
                });
            }
            applied = allowance;
        }
        if self.options.budget_policy == BudgetPolicy::Enforce {
            applied = self.afford(staged, range, &record, applied)?;
        }

        if let Some(record) = staged.skills.get_mut(&range.skill) {
            record.points_from_ip = applied;
        }
        Ok(applied)
    }

    /// Fit a raise into the remaining IP. Lowering always succeeds.
    fn afford(
        &self,
        staged: &Profile,
        range: &Range,
        record: &SkillRecord,
        points: i32,
    ) -> ProfileResult<i32> {
        let current = record.points_from_ip();
        if points <= current {
            return Ok(points);
        }
        let remaining = staged.ip().remaining();
        let from = record.base().saturating_add(current);
        let required = cost_to_raise(from, record.base().saturating_add(points));
        if required <= remaining {
            return Ok(points);
        }
        if self.options.cap_policy == CapPolicy::Reject {
            return Err(ProfileError::InsufficientIp {
                skill: range.skill,
                required,
                remaining,
            });
        }
        let reachable = max_reachable(from, remaining) - record.base();
        Ok(reachable.clamp(current, points))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planner(cap_policy: CapPolicy, budget_policy: BudgetPolicy) -> Planner<'static> {
        Planner::standard(PlannerOptions {
            cap_policy,
            budget_policy,
        })
    }

    fn adventurer(level: i32) -> (Planner<'static>, Profile) {
        let planner = planner(CapPolicy::Reject, BudgetPolicy::Allow);
        let profile = planner.create_profile(
            "Tester",
            Identity::new(Breed::Solitus, Profession::Adventurer, level),
        );
        (planner, profile)
    }

    /// Atrox stamina is cheap enough to reach 48 at level 14.
    fn atrox(level: i32) -> (Planner<'static>, Profile) {
        let planner = planner(CapPolicy::Reject, BudgetPolicy::Allow);
        let profile = planner.create_profile(
            "Tester",
            Identity::new(Breed::Atrox, Profession::Adventurer, level),
        );
        (planner, profile)
    }

    #[test]
    fn test_create_profile_is_consistent() {
        let (planner, mut profile) = adventurer(1);
        assert!(planner.recompute(&mut profile).is_clean());
        assert_eq!(profile.ip().total_used(), 0);
    }

    #[test]
    fn test_set_ability_uses_trained_value() {
        let (planner, mut profile) = atrox(14);
        let outcome = planner
            .set_ability(&mut profile, Ability::Stamina, 48)
            .unwrap();
        assert_eq!(outcome.adjusted, None);
        let stamina = profile.ability(Ability::Stamina).copied().unwrap_or_default();
        assert_eq!(stamina.points_from_ip(), 39);
        assert_eq!(stamina.total(), 48);
        assert_eq!(
            profile.skill(SkillId::BODY_DEV).map(SkillRecord::trickle),
            Some(12)
        );
    }

    #[test]
    fn test_set_skill_points_within_cap() {
        let (planner, mut profile) = adventurer(50);
        planner
            .set_skill_points_from_ip(&mut profile, SkillId::BODY_DEV, 7)
            .unwrap();
        let body = profile.skill(SkillId::BODY_DEV).copied().unwrap_or_default();
        assert_eq!(body.total(), 13);
        assert_eq!(body.ip_spent(), (6..=12).sum::<i64>());
    }

    #[test]
    fn test_reject_leaves_profile_untouched() {
        let (planner, mut profile) = adventurer(50);
        let before = profile.clone();
        let error = planner
            .set_skill_points_from_ip(&mut profile, SkillId::BODY_DEV, 8)
            .unwrap_err();
        assert_eq!(
            error,
            ProfileError::AboveCap {
                skill: SkillId::BODY_DEV,
                requested: 8,
                maximum: 7
            }
        );
        assert_eq!(profile, before);

        let error = planner
            .set_ability(&mut profile, Ability::Strength, 2)
            .unwrap_err();
        assert_eq!(
            error,
            ProfileError::BelowBase {
                skill: Ability::Strength.skill_id(),
                requested: 2,
                minimum: 6
            }
        );
        assert_eq!(profile, before);
    }

    #[test]
    fn test_clamp_policy_reports_adjustment() {
        let planner = planner(CapPolicy::Clamp, BudgetPolicy::Allow);
        let mut profile = planner.create_profile(
            "Clamp",
            Identity::new(Breed::Solitus, Profession::Adventurer, 50),
        );
        let outcome = planner
            .set_skill_points_from_ip(&mut profile, SkillId::BODY_DEV, 100)
            .unwrap();
        assert_eq!(
            outcome.adjusted,
            Some(Adjustment {
                requested: 100,
                applied: 7
            })
        );
        let outcome = planner
            .set_ability(&mut profile, Ability::Strength, 1)
            .unwrap();
        assert_eq!(
            outcome.adjusted,
            Some(Adjustment {
                requested: 1,
                applied: 6
            })
        );
    }

    #[test]
    fn test_unknown_and_untrainable_skills() {
        let (planner, mut profile) = adventurer(50);
        assert_eq!(
            planner.set_skill_points_from_ip(&mut profile, SkillId(9999), 1),
            Err(ProfileError::UnknownSkill(SkillId(9999)))
        );
        assert_eq!(
            planner.set_skill_points_from_ip(&mut profile, SkillId::MAX_HEALTH, 1),
            Err(ProfileError::NotTrainable(SkillId::MAX_HEALTH))
        );
        assert!(planner
            .set_skill_points_from_ip(&mut profile, SkillId::MAX_HEALTH, 0)
            .is_ok());
    }

    #[test]
    fn test_budget_enforced() {
        let planner = planner(CapPolicy::Reject, BudgetPolicy::Enforce);
        let mut profile = planner.create_profile(
            "Budget",
            Identity::new(Breed::Solitus, Profession::Adventurer, 2),
        );
        // Level 2 grants 15 IP; Strength 6 -> 8 costs 7 + 8.
        assert!(planner.set_ability(&mut profile, Ability::Strength, 8).is_ok());
        assert_eq!(profile.ip().remaining(), 0);
        assert_eq!(
            planner.set_ability(&mut profile, Ability::Agility, 7),
            Err(ProfileError::InsufficientIp {
                skill: Ability::Agility.skill_id(),
                required: 7,
                remaining: 0
            })
        );
        // Lowering always succeeds.
        assert!(planner.set_ability(&mut profile, Ability::Strength, 7).is_ok());
        assert_eq!(profile.ip().remaining(), 8);
    }

    #[test]
    fn test_budget_clamped() {
        let planner = planner(CapPolicy::Clamp, BudgetPolicy::Enforce);
        let mut profile = planner.create_profile(
            "Budget",
            Identity::new(Breed::Solitus, Profession::Adventurer, 2),
        );
        let outcome = planner
            .set_ability(&mut profile, Ability::Strength, 11)
            .unwrap();
        assert_eq!(
            outcome.adjusted,
            Some(Adjustment {
                requested: 11,
                applied: 8
            })
        );
    }

    #[test]
    fn test_lower_ability_clamps_dependents() {
        let (planner, mut profile) = atrox(14);
        planner
            .set_ability(&mut profile, Ability::Stamina, 48)
            .unwrap();
        planner
            .set_skill_points_from_ip(&mut profile, SkillId::BODY_DEV, 55)
            .unwrap();
        assert_eq!(profile.skill(SkillId::BODY_DEV).map(SkillRecord::total), Some(72));

        let outcome = planner
            .set_ability(&mut profile, Ability::Stamina, 9)
            .unwrap();
        assert_eq!(outcome.recompute.clamped.len(), 1);
        // Stamina 9: trickle 2, ability limit 13
        assert_eq!(profile.skill(SkillId::BODY_DEV).map(SkillRecord::total), Some(20));
    }

    #[test]
    fn test_set_level_clamps_negative() {
        let (planner, mut profile) = adventurer(30);
        let outcome = planner.set_level(&mut profile, -3).unwrap();
        assert_eq!(
            outcome.adjusted,
            Some(Adjustment {
                requested: -3,
                applied: 0
            })
        );
        assert_eq!(profile.level(), 0);
        assert_eq!(profile.ip().total_available(), 0);
    }

    #[test]
    fn test_set_level_at_extreme_values() {
        let planner = planner(CapPolicy::Reject, BudgetPolicy::Enforce);
        let mut profile = planner.create_profile(
            "Tester",
            Identity::new(Breed::Solitus, Profession::Adventurer, 1),
        );
        for level in [2_000_000_000, i32::MAX] {
            let outcome = planner.set_level(&mut profile, level).unwrap();
            assert_eq!(outcome.adjusted, None);
            assert_eq!(profile.level(), level);
            assert!(profile.ip().remaining() > 0);
        }
        planner
            .set_ability(&mut profile, Ability::Stamina, 40)
            .unwrap();
        planner
            .set_skill_points_from_ip(&mut profile, SkillId::BODY_DEV, 20)
            .unwrap();
        assert_eq!(
            profile.ip().remaining(),
            profile.ip().total_available() - profile.ip().total_used()
        );
        assert!(planner.recompute(&mut profile).is_clean());
    }

    #[test]
    fn test_set_breed_moves_bases() {
        let (planner, mut profile) = adventurer(20);
        planner
            .set_ability(&mut profile, Ability::Strength, 10)
            .unwrap();
        planner.set_breed(&mut profile, Breed::Atrox).unwrap();
        let strength = profile.ability(Ability::Strength).copied().unwrap_or_default();
        assert_eq!(strength.base(), 10);
        assert_eq!(strength.points_from_ip(), 4);
        assert_eq!(strength.total(), 14);
    }

    #[test]
    fn test_set_profession_changes_caps() {
        let (planner, mut profile) = adventurer(40);
        planner
            .set_ability(&mut profile, Ability::Stamina, 80)
            .unwrap();
        let adventurer_cap = profile.skill(SkillId::BODY_DEV).map(SkillRecord::cap);
        planner
            .set_profession(&mut profile, Profession::Doctor)
            .unwrap();
        let doctor_cap = profile.skill(SkillId::BODY_DEV).map(SkillRecord::cap);
        assert!(doctor_cap < adventurer_cap);
    }

    #[test]
    fn test_bonuses_and_equipment() {
        let (planner, mut profile) = adventurer(50);
        let perks = BTreeMap::from([(SkillId::BODY_DEV, 10)]);
        planner
            .set_bonuses(&mut profile, BonusSource::Perk, &perks)
            .unwrap();
        planner
            .equip(
                &mut profile,
                EquipSlot::Body,
                EquippedItem::new("Vest", 50).with_bonus(SkillId::BODY_DEV, 4),
            )
            .unwrap();
        let body = profile.skill(SkillId::BODY_DEV).copied().unwrap_or_default();
        assert_eq!(body.perk_bonus(), 10);
        assert_eq!(body.equipment_bonus(), 4);
        assert_eq!(body.total(), 6 + 10 + 4);

        planner.unequip(&mut profile, EquipSlot::Body).unwrap();
        planner
            .set_bonuses(&mut profile, BonusSource::Perk, &BTreeMap::new())
            .unwrap();
        assert_eq!(profile.skill(SkillId::BODY_DEV).map(SkillRecord::total), Some(6));

        let unknown = BTreeMap::from([(SkillId(9999), 1)]);
        assert_eq!(
            planner.set_bonuses(&mut profile, BonusSource::Buff, &unknown),
            Err(ProfileError::UnknownSkill(SkillId(9999)))
        );
    }

    #[test]
    fn test_mutation_enum() {
        let (planner, mut profile) = atrox(14);
        let mutation: Mutation =
            serde_json::from_str(r#"{"op":"set_ability","ability":"Stamina","value":48}"#).unwrap();
        mutation.apply(&planner, &mut profile).unwrap();
        Mutation::SetSkillPoints {
            skill: SkillId::BODY_DEV,
            points: 55,
        }
        .apply(&planner, &mut profile)
        .unwrap();
        assert_eq!(profile.skill(SkillId::BODY_DEV).map(SkillRecord::total), Some(72));
    }
}
