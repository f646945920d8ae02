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

use clap::Parser;
use ipcalc_common::{Ability, AbilityScores, GameData, SkillId};
use ipcalc_engine::config::{Arguments, Command, Configuration};
use ipcalc_engine::{Identity, JsonFileStore, Mutation, Planner, ProfileEditor};
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load arguments from the command line
    let arguments: Arguments = Parser::parse();

    // Initialize tracing/logging; stdout is reserved for JSON output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(true)
        .with_level(true)
        .with_ansi(true)
        .init();

    // Load environment variables from .env file if specified
    if let Some(ref env_file) = arguments.env_file {
        if std::path::Path::new(env_file).exists() {
            tracing::debug!("Loading environment variables from file: {}", env_file);
            dotenv::from_filename(env_file).ok();
        }
    } else {
        tracing::debug!("Loading environment variables from default file");
        dotenv::dotenv().ok();
    }

    // Load configuration from a file with environment variable substitution
    let config = Configuration::load_or_default(&arguments.config_file)?;
    tracing::debug!("Configuration loaded: {:?}", config);

    let data = config.load_tables()?;
    let planner = Planner::new(&data, config.planner);
    let store = JsonFileStore::new(config.store.directory.to_path());
    tracing::debug!("Profiles stored in {}", store.directory().display());
    let editor = ProfileEditor::new(planner, store);

    let output = match arguments.command {
        Command::New {
            name,
            breed,
            profession,
            level,
            faction,
        } => {
            let identity = Identity::new(breed, profession, level).with_faction(faction);
            let profile = editor.create(&name, identity).await?;
            json!({ "profile": profile })
        }
        Command::Show { name } => {
            let profile = editor.open(&name).await?;
            json!({ "profile": profile })
        }
        Command::SetAbility {
            name,
            ability,
            value,
        } => {
            let (profile, outcome) = editor
                .apply_to(&name, Mutation::SetAbility { ability, value })
                .await?;
            json!({ "outcome": outcome, "profile": profile })
        }
        Command::SetSkill {
            name,
            skill,
            points,
        } => {
            let skill = resolve_skill(&data, &skill)?;
            let (profile, outcome) = editor
                .apply_to(&name, Mutation::SetSkillPoints { skill, points })
                .await?;
            json!({ "outcome": outcome, "profile": profile })
        }
        Command::SetBreed { name, breed } => {
            let (profile, outcome) = editor.apply_to(&name, Mutation::SetBreed { breed }).await?;
            json!({ "outcome": outcome, "profile": profile })
        }
        Command::SetLevel { name, level } => {
            let (profile, outcome) = editor.apply_to(&name, Mutation::SetLevel { level }).await?;
            json!({ "outcome": outcome, "profile": profile })
        }
        Command::SetProfession { name, profession } => {
            let (profile, outcome) = editor
                .apply_to(&name, Mutation::SetProfession { profession })
                .await?;
            json!({ "outcome": outcome, "profile": profile })
        }
        Command::Cap {
            skill,
            level,
            profession,
            breed,
            abilities,
        } => {
            let skill = resolve_skill(&data, &skill)?;
            let scores: [i32; 6] = abilities
                .try_into()
                .map_err(|values: Vec<i32>| format!("Expected 6 ability values, got {}", values.len()))?;
            let calculator = editor.planner().calculator();
            let breakdown = match Ability::from_skill_id(skill) {
                Some(ability) => calculator.ability_cap(level, breed, ability),
                None => calculator.skill_cap(level, profession, skill, &AbilityScores::new(scores)),
            };
            json!({
                "skill": skill,
                "name": data.names().name(skill),
                "breakdown": breakdown,
            })
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn resolve_skill(data: &GameData, name: &str) -> Result<SkillId, String> {
    data.names()
        .resolve(name)
        .ok_or_else(|| format!("Unknown skill: {name}"))
}
