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

//! Unit of work over a profile store.
//!
//! A mutation, its recompute and the save happen together. The caller's
//! profile is replaced only after the save succeeded.

use crate::error::ProfileError;
use crate::mutation::{Mutation, MutationOutcome, Planner};
use crate::profile::{Identity, Profile};
use crate::store::{ProfileStore, StoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditorError {
    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for editor operations.
pub type EditorResult<T> = Result<T, EditorError>;

pub struct ProfileEditor<'d, S> {
    planner: Planner<'d>,
    store: S,
}

impl<'d, S: ProfileStore> ProfileEditor<'d, S> {
    pub fn new(planner: Planner<'d>, store: S) -> Self {
        Self { planner, store }
    }

    pub fn planner(&self) -> &Planner<'d> {
        &self.planner
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Create and save a new profile.
    pub async fn create(&self, name: &str, identity: Identity) -> EditorResult<Profile> {
        let profile = self.planner.create_profile(name, identity);
        self.store.save(&profile).await?;
        tracing::info!(
            "Created {} {} '{}' at level {}",
            identity.breed,
            identity.profession,
            name,
            profile.level()
        );
        Ok(profile)
    }

    /// Load a profile and bring its derived fields up to date.
    ///
    /// Repairs made while loading are not written back until the next
    /// [`ProfileEditor::apply`].
    pub async fn open(&self, name: &str) -> EditorResult<Profile> {
        let mut profile = self.store.load(name).await?;
        let report = self.planner.recompute(&mut profile);
        if !report.is_clean() {
            tracing::warn!(
                "Profile '{}' needed repair on load: {} records inserted, {} clamped",
                name,
                report.inserted.len(),
                report.clamped.len()
            );
        }
        Ok(profile)
    }

    /// Apply a mutation and save the recomputed profile.
    pub async fn apply(
        &self,
        profile: &mut Profile,
        mutation: Mutation,
    ) -> EditorResult<MutationOutcome> {
        let mut staged = profile.clone();
        let outcome = mutation.apply(&self.planner, &mut staged)?;
        self.store.save(&staged).await?;
        *profile = staged;
        Ok(outcome)
    }

    /// Open, mutate and save a stored profile by name.
    pub async fn apply_to(
        &self,
        name: &str,
        mutation: Mutation,
    ) -> EditorResult<(Profile, MutationOutcome)> {
        let mut profile = self.open(name).await?;
        let outcome = self.apply(&mut profile, mutation).await?;
        Ok((profile, outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mutation::PlannerOptions;
    use crate::store::MemoryStore;
    use ipcalc_common::{Ability, Breed, Profession, SkillId};

    fn editor() -> ProfileEditor<'static, MemoryStore> {
        ProfileEditor::new(
            Planner::standard(PlannerOptions::default()),
            MemoryStore::new(),
        )
    }

    #[tokio::test]
    async fn test_create_saves() {
        let editor = editor();
        let profile = editor
            .create("New", Identity::new(Breed::Solitus, Profession::Keeper, 5))
            .await
            .unwrap();
        assert_eq!(editor.store().save_count(), 1);
        assert_eq!(editor.open("New").await.unwrap(), profile);
    }

    #[tokio::test]
    async fn test_apply_saves_recomputed_profile() {
        let editor = editor();
        let mut profile = editor
            .create("Apply", Identity::new(Breed::Solitus, Profession::Adventurer, 50))
            .await
            .unwrap();
        editor
            .apply(
                &mut profile,
                Mutation::SetAbility {
                    ability: Ability::Stamina,
                    value: 48,
                },
            )
            .await
            .unwrap();

        let stored = editor.store().load("Apply").await.unwrap();
        assert_eq!(stored, profile);
        assert_eq!(
            stored.skill(SkillId::BODY_DEV).map(|record| record.trickle()),
            Some(12)
        );
        assert_eq!(editor.store().save_count(), 2);
    }

    #[tokio::test]
    async fn test_rejected_mutation_is_not_saved() {
        let editor = editor();
        let mut profile = editor
            .create("Reject", Identity::new(Breed::Solitus, Profession::Adventurer, 50))
            .await
            .unwrap();
        let before = profile.clone();
        let result = editor
            .apply(
                &mut profile,
                Mutation::SetSkillPoints {
                    skill: SkillId::BODY_DEV,
                    points: 500,
                },
            )
            .await;
        assert!(matches!(
            result,
            Err(EditorError::Profile(ProfileError::AboveCap { .. }))
        ));
        assert_eq!(profile, before);
        assert_eq!(editor.store().save_count(), 1);
    }

    #[tokio::test]
    async fn test_apply_to_by_name() {
        let editor = editor();
        editor
            .create("Named", Identity::new(Breed::Nanomage, Profession::MetaPhysicist, 10))
            .await
            .unwrap();
        let (profile, outcome) = editor
            .apply_to("Named", Mutation::SetLevel { level: 20 })
            .await
            .unwrap();
        assert_eq!(outcome.adjusted, None);
        assert_eq!(profile.level(), 20);
        assert_eq!(editor.open("Named").await.unwrap().level(), 20);

        assert!(matches!(
            editor.apply_to("Ghost", Mutation::SetLevel { level: 1 }).await,
            Err(EditorError::Store(StoreError::NotFound(_)))
        ));
    }
}
