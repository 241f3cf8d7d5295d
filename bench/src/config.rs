//! Run configuration.
//!
//! Settings are layered: built-in defaults, then a `.env` file in the working
//! directory, then process environment variables, then command-line flags.
//!
//! | Variable              | Flag           | Meaning                                  |
//! |-----------------------|----------------|------------------------------------------|
//! | `SEQBENCH_SEED`       | `--seed N`     | fixed RNG seed (default: wall clock)     |
//! | `SEQBENCH_SCALE`      | `--scale F`    | multiply every input size by `F`         |
//! | `SEQBENCH_RESOLUTION` | `--ms`/`--us`  | force timing unit for all scenarios      |
//! | `SEQBENCH_CONCURRENT` | `--concurrent` | run list work on a worker thread         |
//! | `SEQBENCH_LOG_LEVEL`  | `--log-level`  | stderr log level (default: info)         |
//! | `SEQBENCH_LOG_FILE`   | `--log-file`   | also log everything to this file         |

use crate::scenario::ScenarioKind;
use anyhow::{Context, Result, anyhow};
use log::LevelFilter;
use seqbench_core::{Resolution, SeedSource};
use std::env;

pub const ENV_SEED: &str = "SEQBENCH_SEED";
pub const ENV_SCALE: &str = "SEQBENCH_SCALE";
pub const ENV_RESOLUTION: &str = "SEQBENCH_RESOLUTION";
pub const ENV_CONCURRENT: &str = "SEQBENCH_CONCURRENT";
pub const ENV_LOG_LEVEL: &str = "SEQBENCH_LOG_LEVEL";
pub const ENV_LOG_FILE: &str = "SEQBENCH_LOG_FILE";

#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    /// Scenarios to run, in order. Empty means all of them.
    pub scenarios: Vec<ScenarioKind>,
    pub seed: SeedSource,
    pub scale: f64,
    /// Overrides each scenario's own default unit.
    pub resolution: Option<Resolution>,
    pub concurrent: bool,
    pub log_level: LevelFilter,
    pub log_file: Option<String>,
    pub show_help: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            scenarios: Vec::new(),
            seed: SeedSource::Time,
            scale: 1.0,
            resolution: None,
            concurrent: false,
            log_level: LevelFilter::Info,
            log_file: None,
            show_help: false,
        }
    }
}

pub fn usage() -> &'static str {
    "Usage:\n  seqbench [SCENARIO...] [options]\n\nScenarios (default: all):\n  linear     sorted insertion + random erase, list vs vector\n  smart      smart-list vs list vs vector sorted insertion\n  front      list front insertion vs vector push-back vs vector front insertion\n  sort       list merge sort vs vector sort vs deque sort\n  records    sorted insertion with 4..256 byte records, list vs vector vs deque\n\nOptions:\n  --seed <N>          Fixed RNG seed (default: time based)\n  --scale <F>         Multiply input sizes by F (e.g. 0.1 for a quick run)\n  --ms | --us         Report milliseconds or microseconds\n  --concurrent        Run list work on a worker thread (linear scenario)\n  --log-level <L>     off, error, warn, info, debug, trace\n  --log-file <path>   Also write logs to a file\n  --help              Print this help"
}

impl BenchConfig {
    /// Defaults, then `.env`, then the process environment, then `env::args`.
    pub fn load() -> Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(e).context("failed to read .env file");
            }
        }

        let mut config = Self::default();
        config.apply_env(|key| env::var(key).ok())?;
        config.apply_args(env::args().skip(1))?;
        Ok(config)
    }

    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(seed) = lookup(ENV_SEED) {
            self.seed = SeedSource::Fixed(parse_seed(&seed).context(ENV_SEED)?);
        }
        if let Some(scale) = lookup(ENV_SCALE) {
            self.scale = parse_scale(&scale).context(ENV_SCALE)?;
        }
        if let Some(resolution) = lookup(ENV_RESOLUTION) {
            self.resolution =
                Some(parse_resolution(&resolution).context(ENV_RESOLUTION)?);
        }
        if let Some(flag) = lookup(ENV_CONCURRENT) {
            self.concurrent = parse_bool(&flag).context(ENV_CONCURRENT)?;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = parse_level(&level).context(ENV_LOG_LEVEL)?;
        }
        if let Some(path) = lookup(ENV_LOG_FILE) {
            if !path.is_empty() {
                self.log_file = Some(path);
            }
        }
        Ok(())
    }

    pub fn apply_args<I, S>(&mut self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--help" | "-h" => self.show_help = true,
                "--concurrent" => self.concurrent = true,
                "--ms" => self.resolution = Some(Resolution::Millis),
                "--us" => self.resolution = Some(Resolution::Micros),
                "--seed" => {
                    let value = args.next().ok_or_else(|| anyhow!("missing value for --seed"))?;
                    self.seed = SeedSource::Fixed(parse_seed(&value)?);
                }
                "--scale" => {
                    let value = args.next().ok_or_else(|| anyhow!("missing value for --scale"))?;
                    self.scale = parse_scale(&value)?;
                }
                "--log-level" => {
                    let value = args
                        .next()
                        .ok_or_else(|| anyhow!("missing value for --log-level"))?;
                    self.log_level = parse_level(&value)?;
                }
                "--log-file" => {
                    let value = args
                        .next()
                        .ok_or_else(|| anyhow!("missing value for --log-file"))?;
                    self.log_file = Some(value);
                }
                other => match ScenarioKind::from_name(other) {
                    Some(kind) => {
                        if !self.scenarios.contains(&kind) {
                            self.scenarios.push(kind);
                        }
                    }
                    None => return Err(anyhow!("unknown argument: {:?}", other)),
                },
            }
        }
        Ok(())
    }

    /// Scenarios to run, expanding "none selected" to all of them.
    pub fn selected_scenarios(&self) -> Vec<ScenarioKind> {
        if self.scenarios.is_empty() {
            ScenarioKind::ALL.to_vec()
        } else {
            self.scenarios.clone()
        }
    }
}

fn parse_seed(value: &str) -> Result<u64> {
    let value = value.trim();
    let parsed = match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => value.parse::<u64>(),
    };
    parsed.with_context(|| format!("invalid seed: {value:?}"))
}

fn parse_scale(value: &str) -> Result<f64> {
    let scale: f64 = value
        .trim()
        .parse()
        .with_context(|| format!("invalid scale: {value:?}"))?;
    if !scale.is_finite() || scale <= 0.0 {
        return Err(anyhow!("scale must be a positive number, got {scale}"));
    }
    Ok(scale)
}

fn parse_resolution(value: &str) -> Result<Resolution> {
    match value.trim().to_ascii_lowercase().as_str() {
        "us" | "micros" | "microseconds" => Ok(Resolution::Micros),
        "ms" | "millis" | "milliseconds" => Ok(Resolution::Millis),
        other => Err(anyhow!("invalid resolution: {other:?} (expected us or ms)")),
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(anyhow!("invalid boolean: {other:?}")),
    }
}

fn parse_level(value: &str) -> Result<LevelFilter> {
    value
        .trim()
        .parse::<LevelFilter>()
        .map_err(|_| anyhow!("invalid log level: {value:?}"))
}
