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

/// Declare the standard skill table.
///
/// Every entry produces an associated constant on [`SkillId`] and a
/// [`SkillDefinition`] in the list returned by `standard_skills()`. The
/// trickle vector is in [`Ability::ALL`] order: Strength, Agility, Stamina,
/// Intelligence, Sense, Psychic.
///
/// [`SkillId`]: crate::skill::SkillId
/// [`SkillDefinition`]: crate::skill::SkillDefinition
/// [`Ability::ALL`]: crate::ability::Ability::ALL
macro_rules! define_skills {
    (
        $(
            $konst:ident = $id:literal {
                name: $name:expr,
                category: $category:expr,
                trickle: [$($factor:expr),* $(,)?],
            }
        ),* $(,)?
    ) => {
        impl $crate::skill::SkillId {
            $(
                #[doc = $name]
                pub const $konst: $crate::skill::SkillId = $crate::skill::SkillId($id);
            )*
        }

        /// Definitions for every skill in the standard table.
        pub(crate) fn standard_skills() -> Vec<$crate::skill::SkillDefinition> {
            vec![
                $(
                    $crate::skill::SkillDefinition {
                        id: $crate::skill::SkillId::$konst,
                        name: String::from($name),
                        category: $category,
                        trickle: $crate::ability::TrickleFactors::new([$($factor),*]),
                    },
                )*
            ]
        }
    };
}

pub(crate) use define_skills;
