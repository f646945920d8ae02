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

//! Profile stat aggregation.
//!
//! One synchronous pass brings every derived field of a profile up to date:
//!
//! 1. Normalize: clamp the level, insert missing records, fold equipment
//!    into `equipment_bonus`, clamp negative inputs.
//! 2. Abilities: breed base, no trickle, ability cap, total.
//! 3. Skills: trickle and cap from the ability totals of step 2, total.
//! 4. IP tracker.
//!
//! Abilities always come first because every skill reads their totals.

use crate::calculator::Calculator;
use crate::ip::{cost_to_raise, total_ip_at_level};
use crate::profile::{IpTracker, Profile, SkillRecord};
use ipcalc_common::{Ability, SkillId};
use serde::{Deserialize, Serialize};

/// IP points removed from a record because its cap fell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clamped {
    pub skill: SkillId,
    pub from: i32,
    pub to: i32,
}

/// What a recompute pass had to repair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecomputeReport {
    pub inserted: Vec<SkillId>,
    pub clamped: Vec<Clamped>,
}

impl RecomputeReport {
    /// True when the pass only refreshed derived values.
    pub fn is_clean(&self) -> bool {
        self.inserted.is_empty() && self.clamped.is_empty()
    }

    pub(crate) fn absorb(&mut self, other: RecomputeReport) {
        self.inserted.extend(other.inserted);
        self.clamped.extend(other.clamped);
    }
}

impl Calculator<'_> {
    /// Recompute every derived field of `profile`.
    ///
    /// Running it twice in a row changes nothing the second time.
    pub fn recompute(&self, profile: &mut Profile) -> RecomputeReport {
        let mut report = RecomputeReport::default();
        self.normalize(profile, &mut report);

        let identity = profile.identity;
        for ability in Ability::ALL {
            let breakdown = self.ability_cap(identity.level, identity.breed, ability);
            let id = ability.skill_id();
            let record = profile
                .skills
                .entry(id)
                .or_insert_with(|| SkillRecord::at_base(breakdown.base));
            record.base = breakdown.base;
            record.trickle = 0;
            record.cap = breakdown.cap;
            settle(id, record, breakdown.allowance, &mut report);
        }

        let abilities = profile.ability_totals();
        for (id, record) in profile.skills.iter_mut() {
            if Ability::from_skill_id(*id).is_some() {
                continue;
            }
            let breakdown = self.skill_cap(identity.level, identity.profession, *id, &abilities);
            record.base = breakdown.base;
            record.trickle = breakdown.trickle;
            record.cap = breakdown.cap;
            settle(*id, record, breakdown.allowance, &mut report);
        }

        profile.ip = self.track_ip(profile);

        tracing::debug!(
            "Recomputed profile '{}': {} records, {} inserted, {} clamped, {} IP remaining",
            profile.name,
            profile.skills.len(),
            report.inserted.len(),
            report.clamped.len(),
            profile.ip.remaining
        );
        report
    }

    fn normalize(&self, profile: &mut Profile, report: &mut RecomputeReport) {
        if profile.identity.level < 0 {
            tracing::warn!(
                "Profile '{}' has negative level {}, using 0",
                profile.name,
                profile.identity.level
            );
            profile.identity.level = 0;
        }
        if !self.data().has_breed(profile.identity.breed) {
            tracing::warn!(
                "No table for breed {}, using default bases",
                profile.identity.breed
            );
        }
        if !self.data().has_profession(profile.identity.profession) {
            tracing::warn!(
                "No table for profession {}, using fallback cost factor",
                profile.identity.profession
            );
        }

        for definition in self.data().skills() {
            if !profile.skills.contains_key(&definition.id) {
                profile
                    .skills
                    .insert(definition.id, SkillRecord::at_base(definition.base()));
                report.inserted.push(definition.id);
            }
        }
        for ability in Ability::ALL {
            let id = ability.skill_id();
            if !profile.skills.contains_key(&id) {
                let base = self.data().breed(profile.identity.breed).base(ability);
                profile.skills.insert(id, SkillRecord::at_base(base));
                report.inserted.push(id);
            }
        }

        let equipment = &profile.equipment;
        for (id, record) in profile.skills.iter_mut() {
            record.equipment_bonus = equipment.bonus_for(*id).max(0);
            record.perk_bonus = record.perk_bonus.max(0);
            record.buff_bonus = record.buff_bonus.max(0);
            record.points_from_ip = record.points_from_ip.max(0);
        }
    }

    fn track_ip(&self, profile: &Profile) -> IpTracker {
        let (ability_ip, skill_ip) =
            profile
                .skills
                .iter()
                .fold((0i64, 0i64), |(abilities, skills), (id, record)| {
                    if Ability::from_skill_id(*id).is_some() {
                        (abilities + record.ip_spent, skills)
                    } else {
                        (abilities, skills + record.ip_spent)
                    }
                });
        let total_available = total_ip_at_level(profile.identity.level);
        let total_used = ability_ip + skill_ip;
        IpTracker {
            total_available,
            total_used,
            remaining: total_available.saturating_sub(total_used),
            ability_ip,
            skill_ip,
        }
    }
}

/// Fit IP points under the allowance, then refresh cost and total.
fn settle(id: SkillId, record: &mut SkillRecord, allowance: i32, report: &mut RecomputeReport) {
    let allowance = allowance.max(0);
    if record.points_from_ip > allowance {
        tracing::warn!(
            "Skill {} lost {} IP points after its cap fell to {}",
            id,
            record.points_from_ip - allowance,
            record.cap
        );
        report.clamped.push(Clamped {
            skill: id,
            from: record.points_from_ip,
            to: allowance,
        });
        record.points_from_ip = allowance;
    }
    record.ip_spent = cost_to_raise(record.base, record.base.saturating_add(record.points_from_ip));
    record.refresh_total();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equipment::{EquipSlot, EquippedItem};
    use crate::profile::Identity;
    use ipcalc_common::{Breed, GameData, Profession};

    fn fresh(breed: Breed, profession: Profession, level: i32) -> Profile {
        let mut profile = Profile::new("Test", Identity::new(breed, profession, level));
        Calculator::standard().recompute(&mut profile);
        profile
    }

    #[test]
    fn test_new_profile_baseline() {
        let profile = fresh(Breed::Solitus, Profession::Adventurer, 1);
        assert_eq!(
            profile.skills.len(),
            GameData::standard().skills().count()
        );
        for (id, record) in profile.skills() {
            assert_eq!(record.points_from_ip(), 0, "{id}");
            assert_eq!(record.ip_spent(), 0, "{id}");
            assert_eq!(record.total(), record.base() + record.trickle(), "{id}");
            assert!(record.cap() >= record.trained(), "{id}");
        }
        assert_eq!(profile.ability(Ability::Strength).map(SkillRecord::total), Some(6));
        assert_eq!(profile.ip().total_used(), 0);
        assert_eq!(profile.ip().total_available(), 0);
    }

    #[test]
    fn test_abilities_use_breed_base() {
        let profile = fresh(Breed::Nanomage, Profession::NanoTechnician, 10);
        assert_eq!(profile.ability(Ability::Intelligence).map(SkillRecord::base), Some(10));
        assert_eq!(profile.ability(Ability::Strength).map(SkillRecord::base), Some(3));
        assert_eq!(profile.ability(Ability::Psychic).map(SkillRecord::trickle), Some(0));
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let calculator = Calculator::standard();
        let mut profile = fresh(Breed::Atrox, Profession::Enforcer, 60);
        if let Some(record) = profile.skills.get_mut(&Ability::Stamina.skill_id()) {
            record.points_from_ip = 30;
        }
        if let Some(record) = profile.skills.get_mut(&SkillId::BODY_DEV) {
            record.points_from_ip = 40;
        }
        calculator.recompute(&mut profile);
        let snapshot = profile.clone();
        let report = calculator.recompute(&mut profile);
        assert!(report.is_clean());
        assert_eq!(profile, snapshot);
    }

    #[test]
    fn test_abilities_feed_trickle() {
        let calculator = Calculator::standard();
        let mut profile = fresh(Breed::Solitus, Profession::Adventurer, 50);
        let before = profile.skill(SkillId::BODY_DEV).map(SkillRecord::trickle);
        if let Some(record) = profile.skills.get_mut(&Ability::Stamina.skill_id()) {
            record.points_from_ip = 42;
        }
        calculator.recompute(&mut profile);
        assert_eq!(before, Some(1));
        // Stamina 48: floor(48 / 4) = 12
        assert_eq!(profile.skill(SkillId::BODY_DEV).map(SkillRecord::trickle), Some(12));
    }

    #[test]
    fn test_conservation() {
        let calculator = Calculator::standard();
        let mut profile = fresh(Breed::Opifex, Profession::Agent, 80);
        if let Some(record) = profile.skills.get_mut(&SkillId::AIMED_SHOT) {
            record.points_from_ip = 3;
            record.perk_bonus = 20;
            record.buff_bonus = -4;
        }
        profile.equipment.equip(
            EquipSlot::RightHand,
            EquippedItem::new("Rifle", 80).with_bonus(SkillId::AIMED_SHOT, 15),
        );
        calculator.recompute(&mut profile);

        let mut spent = 0;
        for (id, record) in profile.skills() {
            assert_eq!(
                record.total(),
                record.base()
                    + record.trickle()
                    + record.points_from_ip()
                    + record.equipment_bonus()
                    + record.perk_bonus()
                    + record.buff_bonus(),
                "{id}"
            );
            spent += record.ip_spent();
        }
        assert_eq!(profile.ip().total_used(), spent);
        assert_eq!(
            profile.ip().remaining(),
            profile.ip().total_available() - spent
        );
        let aimed = profile.skill(SkillId::AIMED_SHOT).copied().unwrap_or_default();
        assert_eq!(aimed.equipment_bonus(), 15);
        assert_eq!(aimed.buff_bonus(), 0);
    }

    #[test]
    fn test_equipment_on_abilities_raises_skill_trickle() {
        let calculator = Calculator::standard();
        let mut profile = fresh(Breed::Solitus, Profession::Soldier, 20);
        profile.equipment.equip(
            EquipSlot::Body,
            EquippedItem::new("Armor", 20).with_bonus(Ability::Stamina.skill_id(), 42),
        );
        calculator.recompute(&mut profile);
        assert_eq!(profile.ability_totals()[Ability::Stamina], 48);
        assert_eq!(profile.skill(SkillId::BODY_DEV).map(SkillRecord::trickle), Some(12));
    }

    #[test]
    fn test_lowered_cap_clamps_points() {
        let calculator = Calculator::standard();
        let mut profile = fresh(Breed::Solitus, Profession::Adventurer, 14);
        if let Some(record) = profile.skills.get_mut(&Ability::Stamina.skill_id()) {
            record.points_from_ip = 30;
        }
        calculator.recompute(&mut profile);
        if let Some(record) = profile.skills.get_mut(&SkillId::BODY_DEV) {
            record.points_from_ip = 50;
        }
        assert!(calculator.recompute(&mut profile).is_clean());

        if let Some(record) = profile.skills.get_mut(&Ability::Stamina.skill_id()) {
            record.points_from_ip = 0;
        }
        let report = calculator.recompute(&mut profile);
        assert_eq!(
            report.clamped,
            vec![Clamped {
                skill: SkillId::BODY_DEV,
                from: 50,
                to: 7
            }]
        );
        let body = profile.skill(SkillId::BODY_DEV).copied().unwrap_or_default();
        assert_eq!(body.trained(), body.cap());
        assert_eq!(body.cap(), 13);
    }

    #[test]
    fn test_negative_level_is_clamped() {
        let profile = fresh(Breed::Solitus, Profession::Trader, -7);
        assert_eq!(profile.level(), 0);
        assert!(profile.skills().all(|(_, record)| record.cap() >= 0 && record.total() >= 0));
    }

    #[test]
    fn test_non_trainable_points_are_removed() {
        let calculator = Calculator::standard();
        let mut profile = fresh(Breed::Solitus, Profession::Trader, 100);
        if let Some(record) = profile.skills.get_mut(&SkillId::PROJECTILE_AC) {
            record.points_from_ip = 5;
        }
        let report = calculator.recompute(&mut profile);
        assert_eq!(report.clamped.len(), 1);
        assert_eq!(
            profile.skill(SkillId::PROJECTILE_AC).map(SkillRecord::points_from_ip),
            Some(0)
        );
    }

    #[test]
    fn test_ip_tracker_split() {
        let calculator = Calculator::standard();
        let mut profile = fresh(Breed::Solitus, Profession::Adventurer, 10);
        if let Some(record) = profile.skills.get_mut(&Ability::Agility.skill_id()) {
            record.points_from_ip = 2;
        }
        if let Some(record) = profile.skills.get_mut(&SkillId::BODY_DEV) {
            record.points_from_ip = 2;
        }
        calculator.recompute(&mut profile);
        // Agility 6 -> 8 costs 7 + 8, Body Dev 5 -> 7 costs 6 + 7
        assert_eq!(profile.ip().ability_ip(), 15);
        assert_eq!(profile.ip().skill_ip(), 13);
        assert_eq!(profile.ip().total_available(), 495);
        assert_eq!(profile.ip().remaining(), 495 - 28);
    }
}
