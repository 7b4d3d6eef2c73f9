use std::{fs, path::Path};

use anyhow::Context;
use log::debug;
use once_cell::sync::Lazy;
use serde::Deserialize;

pub const ENV_VAR: &str = "G3D2_CONFIG";

// Use macro to work around include_str not accepting string constants
macro_rules! TEMPLATE_NAME_MACRO {
	() => {
		"g3d2.toml"
	};
}

pub static TEMPLATE_NAME: &str = TEMPLATE_NAME_MACRO!();

pub static DATA: &str = include_str!(concat!("../templates/", TEMPLATE_NAME_MACRO!()));

static DEFAULT: Lazy<Config> =
	Lazy::new(|| toml::from_str(DATA).expect("embedded config template should be valid"));

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
	pub input: InputCfg,
	pub output: OutputCfg,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct InputCfg {
	pub trim_whitespace: bool,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputCfg {
	pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
	Raw,
	Hex,
}

impl Default for Config {
	fn default() -> Self {
		DEFAULT.clone()
	}
}

impl Config {
	pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
		let path = path.as_ref();
		debug!("reading config from {path:?}");
		let text = fs::read_to_string(path)
			.with_context(|| format!("unable to read config file {path:?}"))?;
		toml::from_str(&text).with_context(|| format!("invalid config file {path:?}"))
	}
}
