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

use ipcalc_common::SkillId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Slot group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotCategory {
    Weapon,
    Clothing,
    Implant,
}

/// Equipment slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EquipSlot {
    // Weapons
    Hud,
    Utility,
    RightHand,
    LeftHand,
    Belt,
    // Clothing
    Head,
    Neck,
    Back,
    Body,
    Shoulders,
    Arms,
    Wrists,
    Hands,
    Legs,
    Feet,
    RightFinger,
    LeftFinger,
    // Implants
    EyeImplant,
    HeadImplant,
    EarImplant,
    ChestImplant,
    RightArmImplant,
    LeftArmImplant,
    WaistImplant,
    RightWristImplant,
    LeftWristImplant,
    LegImplant,
    RightHandImplant,
    LeftHandImplant,
    FeetImplant,
}

impl EquipSlot {
    pub fn as_str(&self) -> &'static str {
        match self {
            EquipSlot::Hud => "Hud",
            EquipSlot::Utility => "Utility",
            EquipSlot::RightHand => "RightHand",
            EquipSlot::LeftHand => "LeftHand",
            EquipSlot::Belt => "Belt",
            EquipSlot::Head => "Head",
            EquipSlot::Neck => "Neck",
            EquipSlot::Back => "Back",
            EquipSlot::Body => "Body",
            EquipSlot::Shoulders => "Shoulders",
            EquipSlot::Arms => "Arms",
            EquipSlot::Wrists => "Wrists",
            EquipSlot::Hands => "Hands",
            EquipSlot::Legs => "Legs",
            EquipSlot::Feet => "Feet",
            EquipSlot::RightFinger => "RightFinger",
            EquipSlot::LeftFinger => "LeftFinger",
            EquipSlot::EyeImplant => "EyeImplant",
            EquipSlot::HeadImplant => "HeadImplant",
            EquipSlot::EarImplant => "EarImplant",
            EquipSlot::ChestImplant => "ChestImplant",
            EquipSlot::RightArmImplant => "RightArmImplant",
            EquipSlot::LeftArmImplant => "LeftArmImplant",
            EquipSlot::WaistImplant => "WaistImplant",
            EquipSlot::RightWristImplant => "RightWristImplant",
            EquipSlot::LeftWristImplant => "LeftWristImplant",
            EquipSlot::LegImplant => "LegImplant",
            EquipSlot::RightHandImplant => "RightHandImplant",
            EquipSlot::LeftHandImplant => "LeftHandImplant",
            EquipSlot::FeetImplant => "FeetImplant",
        }
    }

    pub fn category(&self) -> SlotCategory {
        match self {
            EquipSlot::Hud
            | EquipSlot::Utility
            | EquipSlot::RightHand
            | EquipSlot::LeftHand
            | EquipSlot::Belt => SlotCategory::Weapon,
            EquipSlot::Head
            | EquipSlot::Neck
            | EquipSlot::Back
            | EquipSlot::Body
            | EquipSlot::Shoulders
            | EquipSlot::Arms
            | EquipSlot::Wrists
            | EquipSlot::Hands
            | EquipSlot::Legs
            | EquipSlot::Feet
            | EquipSlot::RightFinger
            | EquipSlot::LeftFinger => SlotCategory::Clothing,
            _ => SlotCategory::Implant,
        }
    }

    pub fn all() -> &'static [EquipSlot] {
        &[
            EquipSlot::Hud,
            EquipSlot::Utility,
            EquipSlot::RightHand,
            EquipSlot::LeftHand,
            EquipSlot::Belt,
            EquipSlot::Head,
            EquipSlot::Neck,
            EquipSlot::Back,
            EquipSlot::Body,
            EquipSlot::Shoulders,
            EquipSlot::Arms,
            EquipSlot::Wrists,
            EquipSlot::Hands,
            EquipSlot::Legs,
            EquipSlot::Feet,
            EquipSlot::RightFinger,
            EquipSlot::LeftFinger,
            EquipSlot::EyeImplant,
            EquipSlot::HeadImplant,
            EquipSlot::EarImplant,
            EquipSlot::ChestImplant,
            EquipSlot::RightArmImplant,
            EquipSlot::LeftArmImplant,
            EquipSlot::WaistImplant,
            EquipSlot::RightWristImplant,
            EquipSlot::LeftWristImplant,
            EquipSlot::LegImplant,
            EquipSlot::RightHandImplant,
            EquipSlot::LeftHandImplant,
            EquipSlot::FeetImplant,
        ]
    }
}

impl std::fmt::Display for EquipSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EquipSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EquipSlot::all()
            .iter()
            .find(|slot| slot.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| format!("Unknown equipment slot: {s}"))
    }
}

/// An equipped item with its bonuses already resolved for its quality level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquippedItem {
    pub name: String,
    pub quality_level: i32,
    #[serde(default)]
    pub bonuses: BTreeMap<SkillId, i32>,
}

impl EquippedItem {
    pub fn new(name: impl Into<String>, quality_level: i32) -> Self {
        Self {
            name: name.into(),
            quality_level,
            bonuses: BTreeMap::new(),
        }
    }

    pub fn with_bonus(mut self, skill: SkillId, amount: i32) -> Self {
        let bonus = self.bonuses.entry(skill).or_insert(0);
        *bonus = bonus.saturating_add(amount);
        self
    }
}

/// Equipment slots and worn items
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    #[serde(default)]
    pub slots: BTreeMap<EquipSlot, EquippedItem>,
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Equip an item in a slot, returns previously equipped item if any
    pub fn equip(&mut self, slot: EquipSlot, item: EquippedItem) -> Option<EquippedItem> {
        self.slots.insert(slot, item)
    }

    pub fn unequip(&mut self, slot: EquipSlot) -> Option<EquippedItem> {
        self.slots.remove(&slot)
    }

    pub fn get(&self, slot: EquipSlot) -> Option<&EquippedItem> {
        self.slots.get(&slot)
    }

    pub fn is_equipped(&self, slot: EquipSlot) -> bool {
        self.slots.contains_key(&slot)
    }

    /// Net bonus all worn items give a skill. Negative items reduce the sum.
    pub fn bonus_for(&self, skill: SkillId) -> i32 {
        self.slots
            .values()
            .filter_map(|item| item.bonuses.get(&skill))
            .fold(0i32, |sum, bonus| sum.saturating_add(*bonus))
    }

    /// Items worn in slots of one category.
    pub fn in_category(&self, category: SlotCategory) -> impl Iterator<Item = (&EquipSlot, &EquippedItem)> {
        self.slots
            .iter()
            .filter(move |(slot, _)| slot.category() == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_categories() {
        assert_eq!(EquipSlot::RightHand.category(), SlotCategory::Weapon);
        assert_eq!(EquipSlot::Body.category(), SlotCategory::Clothing);
        assert_eq!(EquipSlot::EyeImplant.category(), SlotCategory::Implant);
        assert_eq!(EquipSlot::all().len(), 30);
    }

    #[test]
    fn test_slot_parsing() {
        assert_eq!("eyeimplant".parse::<EquipSlot>(), Ok(EquipSlot::EyeImplant));
        assert_eq!("Hud".parse::<EquipSlot>(), Ok(EquipSlot::Hud));
        assert!("Tail".parse::<EquipSlot>().is_err());
    }

    #[test]
    fn test_equip_and_unequip() {
        let mut equipment = Equipment::new();
        let first = EquippedItem::new("Basic Boots", 10).with_bonus(SkillId::RUN_SPEED, 5);
        let second = EquippedItem::new("Better Boots", 50).with_bonus(SkillId::RUN_SPEED, 20);

        assert!(equipment.equip(EquipSlot::Feet, first.clone()).is_none());
        assert_eq!(equipment.equip(EquipSlot::Feet, second), Some(first));
        assert!(equipment.is_equipped(EquipSlot::Feet));
        assert_eq!(equipment.bonus_for(SkillId::RUN_SPEED), 20);

        assert!(equipment.unequip(EquipSlot::Feet).is_some());
        assert_eq!(equipment.bonus_for(SkillId::RUN_SPEED), 0);
    }

    #[test]
    fn test_bonus_for_sums_slots() {
        let mut equipment = Equipment::new();
        equipment.equip(
            EquipSlot::EyeImplant,
            EquippedItem::new("Eye", 100)
                .with_bonus(SkillId::AIMED_SHOT, 12)
                .with_bonus(SkillId::RIFLE, 8),
        );
        equipment.equip(
            EquipSlot::RightHand,
            EquippedItem::new("Rifle", 120).with_bonus(SkillId::AIMED_SHOT, 30),
        );
        assert_eq!(equipment.bonus_for(SkillId::AIMED_SHOT), 42);
        assert_eq!(equipment.bonus_for(SkillId::RIFLE), 8);
        assert_eq!(equipment.bonus_for(SkillId::BODY_DEV), 0);
        assert_eq!(equipment.in_category(SlotCategory::Implant).count(), 1);
    }

    #[test]
    fn test_with_bonus_saturates() {
        let item = EquippedItem::new("Overclocked", 300)
            .with_bonus(SkillId::RIFLE, i32::MAX)
            .with_bonus(SkillId::RIFLE, 10)
            .with_bonus(SkillId::PISTOL, i32::MIN)
            .with_bonus(SkillId::PISTOL, -10)
            .with_bonus(SkillId::BOW, 4)
            .with_bonus(SkillId::BOW, 3);
        assert_eq!(item.bonuses[&SkillId::RIFLE], i32::MAX);
        assert_eq!(item.bonuses[&SkillId::PISTOL], i32::MIN);
        assert_eq!(item.bonuses[&SkillId::BOW], 7);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut equipment = Equipment::new();
        equipment.equip(
            EquipSlot::Head,
            EquippedItem::new("Hat", 1).with_bonus(SkillId::PSYCHOLOGY, 3),
        );
        let json = serde_json::to_string(&equipment).unwrap();
        let loaded: Equipment = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, equipment);
    }
}
