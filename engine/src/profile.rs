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

//! Versioned character profile.
//!
//! Every derived field is private to this crate. A profile only becomes
//! consistent after [`Calculator::recompute`](crate::Calculator::recompute),
//! which every mutation runs before returning.

use crate::equipment::Equipment;
use ipcalc_common::{Ability, AbilityScores, Breed, Faction, Profession, SkillId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Schema version written by this engine.
pub const PROFILE_VERSION: u32 = 1;

/// Who the character is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub breed: Breed,
    pub profession: Profession,
    pub level: i32,
    #[serde(default)]
    pub faction: Faction,
}

impl Identity {
    pub fn new(breed: Breed, profession: Profession, level: i32) -> Self {
        Self {
            breed,
            profession,
            level,
            faction: Faction::default(),
        }
    }

    pub fn with_faction(mut self, faction: Faction) -> Self {
        self.faction = faction;
        self
    }
}

/// Source of a non-equipment bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BonusSource {
    Perk,
    Buff,
}

/// One skill or ability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub(crate) base: i32,
    pub(crate) trickle: i32,
    pub(crate) points_from_ip: i32,
    pub(crate) ip_spent: i64,
    pub(crate) equipment_bonus: i32,
    pub(crate) perk_bonus: i32,
    pub(crate) buff_bonus: i32,
    pub(crate) cap: i32,
    pub(crate) total: i32,
}

impl SkillRecord {
    /// A record at its base value with nothing invested.
    pub(crate) fn at_base(base: i32) -> Self {
        Self {
            base,
            cap: base,
            total: base,
            ..Self::default()
        }
    }

    pub fn base(&self) -> i32 {
        self.base
    }

    pub fn trickle(&self) -> i32 {
        self.trickle
    }

    pub fn points_from_ip(&self) -> i32 {
        self.points_from_ip
    }

    pub fn ip_spent(&self) -> i64 {
        self.ip_spent
    }

    pub fn equipment_bonus(&self) -> i32 {
        self.equipment_bonus
    }

    pub fn perk_bonus(&self) -> i32 {
        self.perk_bonus
    }

    pub fn buff_bonus(&self) -> i32 {
        self.buff_bonus
    }

    pub fn bonus(&self, source: BonusSource) -> i32 {
        match source {
            BonusSource::Perk => self.perk_bonus,
            BonusSource::Buff => self.buff_bonus,
        }
    }

    pub fn cap(&self) -> i32 {
        self.cap
    }

    pub fn total(&self) -> i32 {
        self.total
    }

    /// The capped part of the value: base, trickle and IP points.
    pub fn trained(&self) -> i32 {
        self.base
            .saturating_add(self.trickle)
            .saturating_add(self.points_from_ip)
    }

    pub(crate) fn refresh_total(&mut self) {
        self.total = self
            .trained()
            .saturating_add(self.equipment_bonus)
            .saturating_add(self.perk_bonus)
            .saturating_add(self.buff_bonus);
    }

    pub(crate) fn set_bonus(&mut self, source: BonusSource, amount: i32) {
        match source {
            BonusSource::Perk => self.perk_bonus = amount,
            BonusSource::Buff => self.buff_bonus = amount,
        }
    }
}

/// IP budget summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpTracker {
    pub(crate) total_available: i64,
    pub(crate) total_used: i64,
    pub(crate) remaining: i64,
    pub(crate) ability_ip: i64,
    pub(crate) skill_ip: i64,
}

impl IpTracker {
    pub fn total_available(&self) -> i64 {
        self.total_available
    }

    pub fn total_used(&self) -> i64 {
        self.total_used
    }

    /// May be negative when a level drop leaves the profile over budget.
    pub fn remaining(&self) -> i64 {
        self.remaining
    }

    pub fn ability_ip(&self) -> i64 {
        self.ability_ip
    }

    pub fn skill_ip(&self) -> i64 {
        self.skill_ip
    }
}

/// A character profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub(crate) version: u32,
    pub(crate) name: String,
    pub(crate) identity: Identity,
    #[serde(default)]
    pub(crate) skills: BTreeMap<SkillId, SkillRecord>,
    #[serde(default)]
    pub(crate) equipment: Equipment,
    #[serde(default)]
    pub(crate) ip: IpTracker,
}

impl Profile {
    /// An empty profile. Records are filled in by the first recompute.
    pub(crate) fn new(name: impl Into<String>, identity: Identity) -> Self {
        Self {
            version: PROFILE_VERSION,
            name: name.into(),
            identity,
            skills: BTreeMap::new(),
            equipment: Equipment::default(),
            ip: IpTracker::default(),
        }
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn breed(&self) -> Breed {
        self.identity.breed
    }

    pub fn profession(&self) -> Profession {
        self.identity.profession
    }

    pub fn level(&self) -> i32 {
        self.identity.level
    }

    pub fn skill(&self, id: SkillId) -> Option<&SkillRecord> {
        self.skills.get(&id)
    }

    pub fn ability(&self, ability: Ability) -> Option<&SkillRecord> {
        self.skills.get(&ability.skill_id())
    }

    pub fn skills(&self) -> impl Iterator<Item = (SkillId, &SkillRecord)> {
        self.skills.iter().map(|(id, record)| (*id, record))
    }

    pub fn equipment(&self) -> &Equipment {
        &self.equipment
    }

    pub fn ip(&self) -> &IpTracker {
        &self.ip
    }

    /// Full current ability totals, bonuses included.
    pub fn ability_totals(&self) -> AbilityScores {
        let mut scores = AbilityScores::default();
        for ability in Ability::ALL {
            scores[ability] = self.ability(ability).map_or(0, SkillRecord::total);
        }
        scores
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_total_is_sum() {
        let mut record = SkillRecord::at_base(5);
        record.trickle = 3;
        record.points_from_ip = 10;
        record.equipment_bonus = 7;
        record.perk_bonus = 2;
        record.buff_bonus = 1;
        record.refresh_total();
        assert_eq!(record.trained(), 18);
        assert_eq!(record.total(), 28);
    }

    #[test]
    fn test_set_bonus() {
        let mut record = SkillRecord::at_base(5);
        record.set_bonus(BonusSource::Perk, 4);
        record.set_bonus(BonusSource::Buff, 9);
        assert_eq!(record.bonus(BonusSource::Perk), 4);
        assert_eq!(record.bonus(BonusSource::Buff), 9);
    }

    #[test]
    fn test_ability_totals_default_to_zero() {
        let mut profile = Profile::new("Test", Identity::default());
        let mut record = SkillRecord::at_base(8);
        record.refresh_total();
        profile.skills.insert(Ability::Agility.skill_id(), record);

        let totals = profile.ability_totals();
        assert_eq!(totals[Ability::Agility], 8);
        assert_eq!(totals[Ability::Strength], 0);
    }

    #[test]
    fn test_profile_json_uses_numeric_keys() {
        let mut profile = Profile::new("Keys", Identity::new(Breed::Atrox, Profession::Enforcer, 10));
        profile.skills.insert(SkillId::BODY_DEV, SkillRecord::at_base(5));
        let json = serde_json::to_value(&profile).unwrap();
        assert!(json["skills"]["152"].is_object());
        assert_eq!(json["version"], PROFILE_VERSION);

        let loaded: Profile = serde_json::from_value(json).unwrap();
        assert_eq!(loaded, profile);
    }
}
