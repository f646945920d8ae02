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

use crate::ability::TrickleFactors;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Stable integer key of a skill.
///
/// This is the only key the calculation core uses. Display names live in
/// [`SkillNames`], which is a presentation concern.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SkillId(pub u32);

impl SkillId {
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for SkillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for SkillId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Skill categories for organization and cost lookup
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum SkillCategory {
    Ability,
    Body,
    Melee,
    Ranged,
    NanoCasting,
    Exploring,
    TradeRepair,
    CombatHealing,
    ArmorClass,
    Misc,
}

impl SkillCategory {
    /// Floor value of a skill in this category. Abilities take their floor
    /// from the breed table instead.
    pub fn default_base(&self) -> i32 {
        match self {
            SkillCategory::Ability | SkillCategory::ArmorClass | SkillCategory::Misc => 0,
            _ => 5,
        }
    }

    /// Whether IP can be spent on skills of this category.
    pub fn is_trainable(&self) -> bool {
        !matches!(self, SkillCategory::ArmorClass | SkillCategory::Misc)
    }

    pub fn all() -> &'static [SkillCategory] {
        &[
            SkillCategory::Ability,
            SkillCategory::Body,
            SkillCategory::Melee,
            SkillCategory::Ranged,
            SkillCategory::NanoCasting,
            SkillCategory::Exploring,
            SkillCategory::TradeRepair,
            SkillCategory::CombatHealing,
            SkillCategory::ArmorClass,
            SkillCategory::Misc,
        ]
    }
}

/// Complete skill definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillDefinition {
    pub id: SkillId,
    pub name: String,
    pub category: SkillCategory,
    #[serde(default)]
    pub trickle: TrickleFactors,
}

impl SkillDefinition {
    pub fn base(&self) -> i32 {
        self.category.default_base()
    }

    pub fn is_trainable(&self) -> bool {
        self.category.is_trainable()
    }
}

/// Display-name lookup for skills.
///
/// Kept apart from the calculation tables so a front end can swap in
/// localized or abbreviated names without touching any formula.
#[derive(Debug, Clone, Default)]
pub struct SkillNames {
    names: HashMap<SkillId, String>,
    ids: HashMap<String, SkillId>,
}

impl SkillNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a name table from skill definitions.
    pub fn from_definitions<'a>(definitions: impl IntoIterator<Item = &'a SkillDefinition>) -> Self {
        let mut names = Self::new();
        for definition in definitions {
            names.insert(definition.id, &definition.name);
        }
        names
    }

    /// Register a display name. Lookups by name are case-insensitive and
    /// ignore punctuation, so "Body Dev." matches "body dev" and "bodydev".
    pub fn insert(&mut self, id: SkillId, name: &str) {
        self.ids.insert(lookup_key(name), id);
        self.names.insert(id, name.to_string());
    }

    pub fn name(&self, id: SkillId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    /// Resolve a display name, or a bare numeric id, to a skill id.
    pub fn resolve(&self, name: &str) -> Option<SkillId> {
        if let Ok(raw) = name.trim().parse::<u32>() {
            return Some(SkillId(raw));
        }
        self.ids.get(&lookup_key(name)).copied()
    }
}

fn lookup_key(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_bases() {
        assert_eq!(SkillCategory::Body.default_base(), 5);
        assert_eq!(SkillCategory::NanoCasting.default_base(), 5);
        assert_eq!(SkillCategory::ArmorClass.default_base(), 0);
        assert_eq!(SkillCategory::Misc.default_base(), 0);
    }

    #[test]
    fn test_category_trainable() {
        assert!(SkillCategory::Ability.is_trainable());
        assert!(SkillCategory::Ranged.is_trainable());
        assert!(!SkillCategory::ArmorClass.is_trainable());
        assert!(!SkillCategory::Misc.is_trainable());
    }

    #[test]
    fn test_skill_names_resolve() {
        let mut names = SkillNames::new();
        names.insert(SkillId(152), "Body Dev.");
        assert_eq!(names.resolve("body dev"), Some(SkillId(152)));
        assert_eq!(names.resolve("BODYDEV"), Some(SkillId(152)));
        assert_eq!(names.resolve("152"), Some(SkillId(152)));
        assert_eq!(names.resolve("nano pool"), None);
        assert_eq!(names.name(SkillId(152)), Some("Body Dev."));
    }

    #[test]
    fn test_skill_id_serializes_as_number() {
        let json = serde_json::to_string(&SkillId(152)).unwrap();
        assert_eq!(json, "152");
    }
}
