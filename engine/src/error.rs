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
use thiserror::Error;

/// Errors raised when a mutation would break a profile invariant.
///
/// A mutation that fails leaves the profile unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    /// The skill is neither registered nor present in the profile.
    #[error("Unknown skill {0}")]
    UnknownSkill(SkillId),

    /// Armor class and miscellaneous stats cannot receive IP.
    #[error("Skill {0} cannot be trained with IP")]
    NotTrainable(SkillId),

    #[error("Skill {skill}: requested {requested} is below the minimum of {minimum}")]
    BelowBase {
        skill: SkillId,
        requested: i32,
        minimum: i32,
    },

    #[error("Skill {skill}: requested {requested} is above the maximum of {maximum}")]
    AboveCap {
        skill: SkillId,
        requested: i32,
        maximum: i32,
    },

    #[error("Skill {skill}: needs {required} IP but only {remaining} remain")]
    InsufficientIp {
        skill: SkillId,
        required: i64,
        remaining: i64,
    },
}

/// Result type for profile mutations.
pub type ProfileResult<T> = Result<T, ProfileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let error = ProfileError::AboveCap {
            skill: SkillId::BODY_DEV,
            requested: 20,
            maximum: 13,
        };
        assert_eq!(
            error.to_string(),
            "Skill #152: requested 20 is above the maximum of 13"
        );
        assert_eq!(
            ProfileError::NotTrainable(SkillId(90)).to_string(),
            "Skill #90 cannot be trained with IP"
        );
    }
}
