//! Table configuration: command-line flags take precedence over an optional
//! TOML file, which takes precedence over the built-in defaults.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use greenfelt_ai::Difficulty;

use crate::error::CliError;

pub const DEFAULT_NAME: &str = "Player";
pub const DEFAULT_STACK: u32 = 1000;
pub const DEFAULT_SMALL_BLIND: u32 = 25;

/// Fully resolved table setup for a session.
#[derive(Debug, Clone, PartialEq)]
pub struct TableConfig {
    pub name: String,
    pub stack: u32,
    pub small_blind: u32,
    pub difficulty: Difficulty,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            stack: DEFAULT_STACK,
            small_blind: DEFAULT_SMALL_BLIND,
            difficulty: Difficulty::Medium,
        }
    }
}

/// What a config file may specify; every field optional.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    name: Option<String>,
    stack: Option<u32>,
    small_blind: Option<u32>,
    difficulty: Option<String>,
}

/// Merge flags over file over defaults, and validate the result.
pub fn resolve_config(
    path: Option<&Path>,
    name: Option<String>,
    stack: Option<u32>,
    small_blind: Option<u32>,
    difficulty: Option<Difficulty>,
) -> Result<TableConfig, CliError> {
    let file = match path {
        Some(p) => {
            let text = fs::read_to_string(p)
                .map_err(|e| CliError::Config(format!("cannot read {}: {}", p.display(), e)))?;
            toml::from_str::<ConfigFile>(&text)
                .map_err(|e| CliError::Config(format!("cannot parse {}: {}", p.display(), e)))?
        }
        None => ConfigFile::default(),
    };

    let file_difficulty = match &file.difficulty {
        Some(s) => Some(
            Difficulty::parse(s)
                .ok_or_else(|| CliError::Config(format!("unknown difficulty '{}'", s)))?,
        ),
        None => None,
    };

    let name = name
        .or(file.name)
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| DEFAULT_NAME.to_string());

    let cfg = TableConfig {
        name,
        stack: stack.or(file.stack).unwrap_or(DEFAULT_STACK),
        small_blind: small_blind.or(file.small_blind).unwrap_or(DEFAULT_SMALL_BLIND),
        difficulty: difficulty.or(file_difficulty).unwrap_or(Difficulty::Medium),
    };

    if cfg.stack == 0 {
        return Err(CliError::Config("starting stack must be positive".to_string()));
    }
    if cfg.small_blind == 0 {
        return Err(CliError::Config("small blind must be positive".to_string()));
    }
    if cfg.small_blind * 2 > cfg.stack {
        return Err(CliError::Config(
            "starting stack must cover at least one big blind".to_string(),
        ));
    }
    Ok(cfg)
}
