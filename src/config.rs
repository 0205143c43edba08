use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
	/// Configuration for loading the CUDA runtime library.
	pub runtime: RuntimeConfig,
}

impl Config {
	#[allow(clippy::result_unit_err)]
	pub fn read_from_file<P: AsRef<Path>>(file: P) -> Result<Config, ()> {
		let config = std::fs::read_to_string(file)
			.map_err(|e| tracing::error!("Failed to open configuration file: {e}"))?;
		let mut config: Config = toml::from_str(&config)
			.map_err(|e| tracing::error!("Failed to parse configuration file: {e}"))?;

		config.runtime.library_paths = config.runtime.library_paths
			.into_iter()
			.map(expand_path)
			.collect::<Result<Vec<_>, _>>()?;

		Ok(config)
	}
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
	/// Candidate paths of the CUDA runtime library.
	///
	/// These are tried in order, the first one that loads is used.
	/// Bare file names are resolved by the system's dynamic loader.
	pub library_paths: Vec<PathBuf>,
}

impl Default for RuntimeConfig {
	fn default() -> Self {
		Self {
			library_paths: vec![
				"libcudart.so".into(),
				"libcudart.so.12".into(),
				"libcudart.so.11.0".into(),
			],
		}
	}
}

fn expand_path(path: PathBuf) -> Result<PathBuf, ()> {
	let expanded = shellexpand::full(&path.to_string_lossy())
		.map_err(|e| tracing::error!("Failed to expand library path '{}': {e}", path.display()))?
		.into_owned();

	Ok(expanded.into())
}
