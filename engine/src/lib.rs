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

//! Skill cap, trickle-down and Improvement Point engine
//!
//! The engine is layered leaves first:
//! - [`formula`]: ability-weighted trickle-down and ability caps
//! - [`calculator`]: skill and ability caps over injected [`GameData`]
//! - [`ip`]: IP budget and progressive raise cost
//! - [`aggregate`]: the full profile recompute pass
//! - [`mutation`]: validated entry points that change one field at a time
//! - [`store`] and [`editor`]: persisting consistent profiles
//!
//! [`GameData`]: ipcalc_common::GameData

pub mod aggregate;
pub mod calculator;
pub mod config;
pub mod editor;
pub mod equipment;
pub mod error;
pub mod formula;
pub mod ip;
pub mod mutation;
pub mod profile;
pub mod store;

pub use self::aggregate::{Clamped, RecomputeReport};
pub use self::calculator::{CapBreakdown, Calculator};
pub use self::editor::{EditorError, EditorResult, ProfileEditor};
pub use self::equipment::{EquipSlot, EquippedItem, Equipment, SlotCategory};
pub use self::error::{ProfileError, ProfileResult};
pub use self::formula::AbilityLimit;
pub use self::mutation::{
    Adjustment, BudgetPolicy, CapPolicy, Mutation, MutationOutcome, Planner, PlannerOptions,
};
pub use self::profile::{BonusSource, IpTracker, Identity, PROFILE_VERSION, Profile, SkillRecord};
pub use self::store::{JsonFileStore, MemoryStore, ProfileStore, StoreError, StoreResult};
