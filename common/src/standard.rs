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

//! Built-in standard data.
//!
//! Trickle vectors are `[Str, Agi, Sta, Int, Sen, Psy]`.

use crate::ability::AbilityScores;
use crate::macros::define_skills;
use crate::identity::{Breed, Profession};
use crate::skill::{SkillCategory, SkillId};
use crate::tables::{BreedTable, FALLBACK_COST_FACTOR, ProfessionTable, Tables, TitleLevel};
use std::collections::BTreeMap;

define_skills! {
    // Abilities
    STRENGTH = 16 { name: "Strength", category: SkillCategory::Ability, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    AGILITY = 17 { name: "Agility", category: SkillCategory::Ability, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    STAMINA = 18 { name: "Stamina", category: SkillCategory::Ability, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    INTELLIGENCE = 19 { name: "Intelligence", category: SkillCategory::Ability, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    SENSE = 20 { name: "Sense", category: SkillCategory::Ability, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    PSYCHIC = 21 { name: "Psychic", category: SkillCategory::Ability, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },

    // Body
    BODY_DEV = 152 { name: "Body Dev.", category: SkillCategory::Body, trickle: [0.0, 0.0, 1.0, 0.0, 0.0, 0.0], },
    NANO_POOL = 132 { name: "Nano Pool", category: SkillCategory::Body, trickle: [0.0, 0.0, 0.1, 0.1, 0.1, 0.7], },
    MARTIAL_ARTS = 100 { name: "Martial Arts", category: SkillCategory::Body, trickle: [0.2, 0.5, 0.0, 0.0, 0.0, 0.3], },
    BRAWL = 142 { name: "Brawl", category: SkillCategory::Body, trickle: [0.6, 0.0, 0.4, 0.0, 0.0, 0.0], },
    DIMACH = 144 { name: "Dimach", category: SkillCategory::Body, trickle: [0.0, 0.0, 0.0, 0.0, 0.8, 0.2], },
    RIPOSTE = 143 { name: "Riposte", category: SkillCategory::Body, trickle: [0.0, 0.5, 0.0, 0.0, 0.5, 0.0], },
    ADVENTURING = 137 { name: "Adventuring", category: SkillCategory::Body, trickle: [0.2, 0.5, 0.3, 0.0, 0.0, 0.0], },
    SWIMMING = 138 { name: "Swimming", category: SkillCategory::Body, trickle: [0.2, 0.2, 0.6, 0.0, 0.0, 0.0], },

    // Melee
    ONE_HAND_BLUNT = 102 { name: "1h Blunt", category: SkillCategory::Melee, trickle: [0.5, 0.1, 0.4, 0.0, 0.0, 0.0], },
    ONE_HAND_EDGED = 103 { name: "1h Edged", category: SkillCategory::Melee, trickle: [0.3, 0.4, 0.3, 0.0, 0.0, 0.0], },
    PIERCING = 106 { name: "Piercing", category: SkillCategory::Melee, trickle: [0.2, 0.5, 0.3, 0.0, 0.0, 0.0], },
    TWO_HAND_BLUNT = 107 { name: "2h Blunt", category: SkillCategory::Melee, trickle: [0.5, 0.0, 0.5, 0.0, 0.0, 0.0], },
    TWO_HAND_EDGED = 105 { name: "2h Edged", category: SkillCategory::Melee, trickle: [0.6, 0.0, 0.4, 0.0, 0.0, 0.0], },
    MELEE_ENERGY = 104 { name: "Melee Energy", category: SkillCategory::Melee, trickle: [0.0, 0.0, 0.5, 0.5, 0.0, 0.0], },
    PARRY = 145 { name: "Parry", category: SkillCategory::Melee, trickle: [0.5, 0.2, 0.0, 0.0, 0.3, 0.0], },
    SNEAK_ATTACK = 146 { name: "Sneak Attack", category: SkillCategory::Melee, trickle: [0.0, 0.0, 0.0, 0.2, 0.8, 0.0], },
    FAST_ATTACK = 147 { name: "Fast Attack", category: SkillCategory::Melee, trickle: [0.0, 0.6, 0.0, 0.0, 0.4, 0.0], },
    MULTI_MELEE = 101 { name: "Multi Melee", category: SkillCategory::Melee, trickle: [0.3, 0.6, 0.1, 0.0, 0.0, 0.0], },
    MELEE_INIT = 118 { name: "Melee Init.", category: SkillCategory::Melee, trickle: [0.0, 0.6, 0.0, 0.1, 0.3, 0.0], },
    PHYSICAL_INIT = 120 { name: "Physical Init.", category: SkillCategory::Melee, trickle: [0.0, 0.6, 0.0, 0.0, 0.1, 0.3], },

    // Ranged
    SHARP_OBJECTS = 108 { name: "Sharp Objects", category: SkillCategory::Ranged, trickle: [0.2, 0.6, 0.0, 0.0, 0.2, 0.0], },
    GRENADE = 109 { name: "Grenade", category: SkillCategory::Ranged, trickle: [0.0, 0.4, 0.0, 0.2, 0.4, 0.0], },
    HEAVY_WEAPONS = 110 { name: "Heavy Weapons", category: SkillCategory::Ranged, trickle: [0.4, 0.6, 0.0, 0.0, 0.0, 0.0], },
    BOW = 111 { name: "Bow", category: SkillCategory::Ranged, trickle: [0.2, 0.4, 0.0, 0.0, 0.4, 0.0], },
    PISTOL = 112 { name: "Pistol", category: SkillCategory::Ranged, trickle: [0.0, 0.6, 0.0, 0.0, 0.4, 0.0], },
    RIFLE = 113 { name: "Rifle", category: SkillCategory::Ranged, trickle: [0.0, 0.6, 0.0, 0.2, 0.2, 0.0], },
    MG_SMG = 114 { name: "MG / SMG", category: SkillCategory::Ranged, trickle: [0.3, 0.3, 0.3, 0.0, 0.1, 0.0], },
    SHOTGUN = 115 { name: "Shotgun", category: SkillCategory::Ranged, trickle: [0.4, 0.6, 0.0, 0.0, 0.0, 0.0], },
    ASSAULT_RIFLE = 116 { name: "Assault Rifle", category: SkillCategory::Ranged, trickle: [0.0, 0.3, 0.4, 0.0, 0.3, 0.0], },
    RANGED_ENERGY = 133 { name: "Ranged Energy", category: SkillCategory::Ranged, trickle: [0.0, 0.0, 0.0, 0.2, 0.4, 0.4], },
    MULTI_RANGED = 134 { name: "Multi Ranged", category: SkillCategory::Ranged, trickle: [0.0, 0.6, 0.0, 0.4, 0.0, 0.0], },
    RANGED_INIT = 119 { name: "Ranged Init.", category: SkillCategory::Ranged, trickle: [0.0, 0.1, 0.0, 0.2, 0.6, 0.1], },
    AIMED_SHOT = 151 { name: "Aimed Shot", category: SkillCategory::Ranged, trickle: [0.0, 0.0, 0.0, 0.0, 1.0, 0.0], },
    FLING_SHOT = 150 { name: "Fling Shot", category: SkillCategory::Ranged, trickle: [0.0, 1.0, 0.0, 0.0, 0.0, 0.0], },
    BURST = 148 { name: "Burst", category: SkillCategory::Ranged, trickle: [0.3, 0.5, 0.2, 0.0, 0.0, 0.0], },
    FULL_AUTO = 167 { name: "Full Auto", category: SkillCategory::Ranged, trickle: [0.6, 0.0, 0.4, 0.0, 0.0, 0.0], },
    BOW_SPECIAL_ATTACK = 121 { name: "Bow Special Attack", category: SkillCategory::Ranged, trickle: [0.0, 0.5, 0.0, 0.0, 0.5, 0.0], },

    // Nano casting
    MATTER_METAMORPHOSIS = 127 { name: "Matter Metamorphosis", category: SkillCategory::NanoCasting, trickle: [0.0, 0.0, 0.0, 0.8, 0.0, 0.2], },
    BIOLOGICAL_METAMORPHOSIS = 128 { name: "Biological Metamorphosis", category: SkillCategory::NanoCasting, trickle: [0.0, 0.0, 0.0, 0.8, 0.0, 0.2], },
    PSYCHOLOGICAL_MODIFICATIONS = 129 { name: "Psychological Modifications", category: SkillCategory::NanoCasting, trickle: [0.0, 0.0, 0.0, 0.8, 0.0, 0.2], },
    MATTER_CREATION = 130 { name: "Matter Creation", category: SkillCategory::NanoCasting, trickle: [0.0, 0.0, 0.2, 0.8, 0.0, 0.0], },
    TIME_AND_SPACE = 131 { name: "Time and Space", category: SkillCategory::NanoCasting, trickle: [0.0, 0.2, 0.0, 0.8, 0.0, 0.0], },
    SENSORY_IMPROVEMENT = 122 { name: "Sensory Improvement", category: SkillCategory::NanoCasting, trickle: [0.0, 0.0, 0.0, 0.8, 0.2, 0.0], },
    NANO_INIT = 149 { name: "Nano Init.", category: SkillCategory::NanoCasting, trickle: [0.0, 0.8, 0.0, 0.0, 0.0, 0.2], },
    NANO_RESIST = 168 { name: "Nano Resist", category: SkillCategory::NanoCasting, trickle: [0.0, 0.0, 0.0, 0.2, 0.0, 0.8], },

    // Exploring
    VEHICLE_AIR = 139 { name: "Vehicle Air", category: SkillCategory::Exploring, trickle: [0.0, 0.2, 0.0, 0.2, 0.6, 0.0], },
    VEHICLE_GROUND = 166 { name: "Vehicle Ground", category: SkillCategory::Exploring, trickle: [0.0, 0.2, 0.0, 0.2, 0.6, 0.0], },
    VEHICLE_WATER = 117 { name: "Vehicle Water", category: SkillCategory::Exploring, trickle: [0.0, 0.2, 0.0, 0.2, 0.6, 0.0], },
    RUN_SPEED = 156 { name: "Run Speed", category: SkillCategory::Exploring, trickle: [0.2, 0.4, 0.4, 0.0, 0.0, 0.0], },
    MAP_NAVIGATION = 140 { name: "Map Navigation", category: SkillCategory::Exploring, trickle: [0.0, 0.0, 0.0, 0.4, 0.5, 0.1], },

    // Trade & repair
    MECHANICAL_ENGINEERING = 125 { name: "Mechanical Engineering", category: SkillCategory::TradeRepair, trickle: [0.0, 0.5, 0.0, 0.5, 0.0, 0.0], },
    ELECTRICAL_ENGINEERING = 126 { name: "Electrical Engineering", category: SkillCategory::TradeRepair, trickle: [0.0, 0.3, 0.2, 0.5, 0.0, 0.0], },
    QUANTUM_FT = 157 { name: "Quantum FT", category: SkillCategory::TradeRepair, trickle: [0.0, 0.0, 0.0, 0.5, 0.0, 0.5], },
    WEAPON_SMITHING = 158 { name: "Weapon Smithing", category: SkillCategory::TradeRepair, trickle: [0.5, 0.0, 0.0, 0.5, 0.0, 0.0], },
    PHARMA_TECH = 159 { name: "Pharma Tech", category: SkillCategory::TradeRepair, trickle: [0.0, 0.3, 0.0, 0.7, 0.0, 0.0], },
    NANO_PROGRAMMING = 160 { name: "Nano Programming", category: SkillCategory::TradeRepair, trickle: [0.0, 0.0, 0.0, 1.0, 0.0, 0.0], },
    COMPUTER_LITERACY = 161 { name: "Computer Literacy", category: SkillCategory::TradeRepair, trickle: [0.0, 0.0, 0.0, 1.0, 0.0, 0.0], },
    PSYCHOLOGY = 162 { name: "Psychology", category: SkillCategory::TradeRepair, trickle: [0.0, 0.0, 0.0, 0.5, 0.5, 0.0], },
    CHEMISTRY = 163 { name: "Chemistry", category: SkillCategory::TradeRepair, trickle: [0.0, 0.0, 0.5, 0.5, 0.0, 0.0], },
    TUTORING = 141 { name: "Tutoring", category: SkillCategory::TradeRepair, trickle: [0.0, 0.0, 0.0, 0.7, 0.1, 0.2], },
    TRAP_DISARM = 135 { name: "Trap Disarm.", category: SkillCategory::TradeRepair, trickle: [0.0, 0.2, 0.0, 0.2, 0.6, 0.0], },
    BREAK_AND_ENTRY = 165 { name: "Break & Entry", category: SkillCategory::TradeRepair, trickle: [0.0, 0.4, 0.0, 0.0, 0.3, 0.3], },

    // Combat & healing
    FIRST_AID = 123 { name: "First Aid", category: SkillCategory::CombatHealing, trickle: [0.0, 0.3, 0.0, 0.3, 0.4, 0.0], },
    TREATMENT = 124 { name: "Treatment", category: SkillCategory::CombatHealing, trickle: [0.0, 0.3, 0.0, 0.5, 0.2, 0.0], },
    EVADE_CLOSE = 154 { name: "Evade-ClsC", category: SkillCategory::CombatHealing, trickle: [0.0, 0.5, 0.0, 0.2, 0.3, 0.0], },
    DODGE_RANGED = 155 { name: "Dodge-Rng", category: SkillCategory::CombatHealing, trickle: [0.0, 0.5, 0.0, 0.2, 0.3, 0.0], },
    DUCK_EXPLOSIVES = 153 { name: "Duck-Exp", category: SkillCategory::CombatHealing, trickle: [0.0, 0.5, 0.0, 0.2, 0.3, 0.0], },
    CONCEALMENT = 164 { name: "Concealment", category: SkillCategory::CombatHealing, trickle: [0.0, 0.3, 0.0, 0.0, 0.7, 0.0], },
    PERCEPTION = 136 { name: "Perception", category: SkillCategory::CombatHealing, trickle: [0.0, 0.0, 0.0, 0.3, 0.7, 0.0], },

    // Armor class
    PROJECTILE_AC = 90 { name: "Imp/Proj AC", category: SkillCategory::ArmorClass, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    MELEE_AC = 91 { name: "Melee/ma AC", category: SkillCategory::ArmorClass, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    ENERGY_AC = 92 { name: "Energy AC", category: SkillCategory::ArmorClass, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    CHEMICAL_AC = 93 { name: "Chemical AC", category: SkillCategory::ArmorClass, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    RADIATION_AC = 94 { name: "Radiation AC", category: SkillCategory::ArmorClass, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    COLD_AC = 95 { name: "Cold AC", category: SkillCategory::ArmorClass, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    POISON_AC = 96 { name: "Poison AC", category: SkillCategory::ArmorClass, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    FIRE_AC = 97 { name: "Fire AC", category: SkillCategory::ArmorClass, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },

    // Miscellaneous
    MAX_HEALTH = 1 { name: "Max Health", category: SkillCategory::Misc, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    MAX_NANO = 221 { name: "Max Nano", category: SkillCategory::Misc, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    ADD_ALL_OFFENSE = 276 { name: "Add All Off.", category: SkillCategory::Misc, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    ADD_ALL_DEFENSE = 277 { name: "Add All Def.", category: SkillCategory::Misc, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    ADD_PROJECTILE_DAMAGE = 278 { name: "Add. Proj. Dam.", category: SkillCategory::Misc, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    ADD_MELEE_DAMAGE = 279 { name: "Add. Melee Dam.", category: SkillCategory::Misc, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    ADD_ENERGY_DAMAGE = 280 { name: "Add. Energy Dam.", category: SkillCategory::Misc, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    ADD_CHEMICAL_DAMAGE = 281 { name: "Add. Chem. Dam.", category: SkillCategory::Misc, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    ADD_RADIATION_DAMAGE = 282 { name: "Add. Rad. Dam.", category: SkillCategory::Misc, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    ADD_COLD_DAMAGE = 311 { name: "Add. Cold Dam.", category: SkillCategory::Misc, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    ADD_NANO_DAMAGE = 315 { name: "Add. Nano Dam.", category: SkillCategory::Misc, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    ADD_FIRE_DAMAGE = 316 { name: "Add. Fire Dam.", category: SkillCategory::Misc, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    ADD_POISON_DAMAGE = 317 { name: "Add. Poison Dam.", category: SkillCategory::Misc, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    HEAL_DELTA = 343 { name: "Heal Delta", category: SkillCategory::Misc, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    NANO_DELTA = 364 { name: "Nano Delta", category: SkillCategory::Misc, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    CRITICAL_INCREASE = 379 { name: "Critical Increase", category: SkillCategory::Misc, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    HEAL_EFFICIENCY = 535 { name: "Heal Efficiency", category: SkillCategory::Misc, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },

    // Reflects, damage shields and absorbs
    REFLECT_PROJECTILE_AC = 205 { name: "Reflect Proj. AC", category: SkillCategory::Misc, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    REFLECT_MELEE_AC = 206 { name: "Reflect Melee AC", category: SkillCategory::Misc, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    REFLECT_ENERGY_AC = 207 { name: "Reflect Energy AC", category: SkillCategory::Misc, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    REFLECT_CHEMICAL_AC = 208 { name: "Reflect Chem. AC", category: SkillCategory::Misc, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    REFLECT_RADIATION_AC = 216 { name: "Reflect Rad. AC", category: SkillCategory::Misc, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    REFLECT_COLD_AC = 217 { name: "Reflect Cold AC", category: SkillCategory::Misc, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    REFLECT_NANO_AC = 218 { name: "Reflect Nano AC", category: SkillCategory::Misc, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    REFLECT_FIRE_AC = 219 { name: "Reflect Fire AC", category: SkillCategory::Misc, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    REFLECT_POISON_AC = 225 { name: "Reflect Poison AC", category: SkillCategory::Misc, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    SHIELD_PROJECTILE_AC = 226 { name: "Shield Proj. AC", category: SkillCategory::Misc, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    SHIELD_MELEE_AC = 227 { name: "Shield Melee AC", category: SkillCategory::Misc, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    SHIELD_ENERGY_AC = 228 { name: "Shield Energy AC", category: SkillCategory::Misc, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    SHIELD_CHEMICAL_AC = 229 { name: "Shield Chem. AC", category: SkillCategory::Misc, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    SHIELD_RADIATION_AC = 230 { name: "Shield Rad. AC", category: SkillCategory::Misc, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    SHIELD_COLD_AC = 231 { name: "Shield Cold AC", category: SkillCategory::Misc, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    SHIELD_NANO_AC = 232 { name: "Shield Nano AC", category: SkillCategory::Misc, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    SHIELD_FIRE_AC = 233 { name: "Shield Fire AC", category: SkillCategory::Misc, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    SHIELD_POISON_AC = 234 { name: "Shield Poison AC", category: SkillCategory::Misc, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    ABSORB_PROJECTILE_AC = 238 { name: "Absorb Proj. AC", category: SkillCategory::Misc, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    ABSORB_MELEE_AC = 239 { name: "Absorb Melee AC", category: SkillCategory::Misc, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    ABSORB_ENERGY_AC = 240 { name: "Absorb Energy AC", category: SkillCategory::Misc, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    ABSORB_CHEMICAL_AC = 241 { name: "Absorb Chem. AC", category: SkillCategory::Misc, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    ABSORB_RADIATION_AC = 242 { name: "Absorb Rad. AC", category: SkillCategory::Misc, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    ABSORB_COLD_AC = 243 { name: "Absorb Cold AC", category: SkillCategory::Misc, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    ABSORB_NANO_AC = 246 { name: "Absorb Nano AC", category: SkillCategory::Misc, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    ABSORB_FIRE_AC = 244 { name: "Absorb Fire AC", category: SkillCategory::Misc, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    ABSORB_POISON_AC = 245 { name: "Absorb Poison AC", category: SkillCategory::Misc, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },

    // Modifiers
    MAX_NCU = 181 { name: "Max NCU", category: SkillCategory::Misc, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    NANO_COST_MODIFIER = 318 { name: "Nano Cost Modifier", category: SkillCategory::Misc, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    XP_MODIFIER = 319 { name: "XP Modifier", category: SkillCategory::Misc, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    SCALE = 360 { name: "Scale", category: SkillCategory::Misc, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    WEAPON_RANGE = 380 { name: "Weapon Range Inc.", category: SkillCategory::Misc, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    NANO_RANGE = 381 { name: "Nano Range Inc.", category: SkillCategory::Misc, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    SKILL_LOCK_MODIFIER = 382 { name: "Skill Lock Modifier", category: SkillCategory::Misc, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    NANO_INTERRUPT_MODIFIER = 383 { name: "Nano Interrupt Modifier", category: SkillCategory::Misc, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    CRITICAL_RESISTANCE = 391 { name: "Critical Resistance", category: SkillCategory::Misc, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
    DIRECT_NANO_DAMAGE_EFFICIENCY = 536 { name: "Direct Nano Dam. Eff.", category: SkillCategory::Misc, trickle: [0.0, 0.0, 0.0, 0.0, 0.0, 0.0], },
}

/// Title-level brackets. The TL1 ceiling of 55 caps every fresh character
/// regardless of profession.
fn title_levels() -> Vec<TitleLevel> {
    [(1, 55), (15, 190), (50, 400), (100, 620), (150, 850), (190, 990), (205, 1100)]
        .into_iter()
        .zip(1u8..)
        .map(|((min_level, ceiling), rank)| TitleLevel {
            rank,
            min_level,
            ceiling,
        })
        .collect()
}

fn breeds() -> BTreeMap<Breed, BreedTable> {
    BTreeMap::from([
        (
            Breed::Solitus,
            BreedTable {
                base_abilities: AbilityScores::new([6, 6, 6, 6, 6, 6]),
                ability_costs: [2.0, 2.0, 2.0, 2.0, 2.0, 2.0],
            },
        ),
        (
            Breed::Opifex,
            BreedTable {
                base_abilities: AbilityScores::new([5, 8, 5, 6, 7, 5]),
                ability_costs: [2.2, 1.6, 2.2, 2.0, 1.8, 2.2],
            },
        ),
        (
            Breed::Nanomage,
            BreedTable {
                base_abilities: AbilityScores::new([3, 5, 4, 10, 6, 8]),
                ability_costs: [2.6, 2.2, 2.4, 1.4, 2.0, 1.6],
            },
        ),
        (
            Breed::Atrox,
            BreedTable {
                base_abilities: AbilityScores::new([10, 6, 9, 3, 4, 4]),
                ability_costs: [1.4, 2.0, 1.6, 2.6, 2.4, 2.4],
            },
        ),
    ])
}

/// Category costs in the order Body, Melee, Ranged, NanoCasting,
/// Exploring, TradeRepair, CombatHealing.
fn profession(costs: [f64; 7], overrides: &[(SkillId, f64)]) -> ProfessionTable {
    let categories = [
        SkillCategory::Body,
        SkillCategory::Melee,
        SkillCategory::Ranged,
        SkillCategory::NanoCasting,
        SkillCategory::Exploring,
        SkillCategory::TradeRepair,
        SkillCategory::CombatHealing,
    ];
    ProfessionTable {
        category_costs: categories.into_iter().zip(costs).collect(),
        overrides: overrides.iter().copied().collect(),
    }
}

fn professions() -> BTreeMap<Profession, ProfessionTable> {
    BTreeMap::from([
        (
            Profession::Adventurer,
            profession([1.2, 1.8, 1.6, 1.8, 1.0, 2.0, 1.5], &[]),
        ),
        (
            Profession::Agent,
            profession(
                [2.0, 2.2, 1.6, 1.8, 1.5, 1.8, 1.4],
                &[
                    (SkillId::AIMED_SHOT, 1.0),
                    (SkillId::RIFLE, 1.0),
                    (SkillId::CONCEALMENT, 1.0),
                ],
            ),
        ),
        (
            Profession::Bureaucrat,
            profession(
                [2.4, 2.8, 2.2, 1.2, 1.8, 1.6, 2.0],
                &[(SkillId::PSYCHOLOGY, 1.0)],
            ),
        ),
        (
            Profession::Doctor,
            profession(
                [2.0, 2.6, 2.2, 1.2, 1.8, 1.4, 1.0],
                &[(SkillId::TREATMENT, 1.0)],
            ),
        ),
        (
            Profession::Enforcer,
            profession([1.0, 1.0, 2.4, 2.0, 2.0, 2.4, 1.8], &[]),
        ),
        (
            Profession::Engineer,
            profession([2.2, 2.6, 1.8, 1.4, 1.6, 1.0, 1.8], &[]),
        ),
        (
            Profession::Fixer,
            profession(
                [1.6, 2.0, 1.4, 1.6, 1.2, 1.4, 1.2],
                &[(SkillId::RUN_SPEED, 1.0)],
            ),
        ),
        (
            Profession::Keeper,
            profession([1.2, 1.0, 2.6, 1.8, 1.8, 2.4, 1.6], &[]),
        ),
        (
            Profession::MartialArtist,
            profession(
                [1.0, 1.6, 2.4, 1.8, 1.6, 2.2, 1.4],
                &[
                    (SkillId::MARTIAL_ARTS, 1.0),
                    (SkillId::RIPOSTE, 1.0),
                    (SkillId::DIMACH, 1.0),
                ],
            ),
        ),
        (
            Profession::MetaPhysicist,
            profession([2.2, 2.6, 2.4, 1.0, 1.8, 1.6, 1.8], &[]),
        ),
        (
            Profession::NanoTechnician,
            profession([2.4, 2.8, 2.4, 1.0, 1.8, 1.6, 2.0], &[]),
        ),
        (
            Profession::Shade,
            profession(
                [1.2, 1.0, 2.6, 1.8, 1.4, 2.2, 1.2],
                &[(SkillId::SNEAK_ATTACK, 1.0)],
            ),
        ),
        (
            Profession::Soldier,
            profession([1.2, 2.2, 1.0, 2.2, 1.6, 2.0, 1.4], &[]),
        ),
        (
            Profession::Trader,
            profession([2.0, 2.4, 1.6, 1.6, 1.6, 1.2, 1.6], &[]),
        ),
    ])
}

/// Complete standard tables.
pub fn tables() -> Tables {
    Tables {
        skills: standard_skills(),
        breeds: breeds(),
        professions: professions(),
        title_levels: title_levels(),
        fallback_cost_factor: FALLBACK_COST_FACTOR,
    }
}
