use crate::error::{IniError, Result};
use crate::io::file::read_file_with;
use crate::model::{Configuration, KeyComparer};
use std::path::{Path, PathBuf};

/// Default file name looked up by the cascade.
pub const DEFAULT_FILE_NAME: &str = ".strata.ini";

/// Environment variable that, if truthy, skips the file in the home directory.
pub const NO_USER_CONFIG_ENV: &str = "STRATA_NO_USER_CONFIG";

/// A parsed layer with the path it was loaded from.
#[derive(Debug, Clone)]
pub struct LoadedFile {
	pub configuration: Configuration,
	pub path: PathBuf,
}

impl LoadedFile {
	/// Whether the global section sets `root = true`.
	pub fn is_root(&self) -> bool {
		self.configuration
			.global_value("root")
			.is_some_and(|value| value.trim().eq_ignore_ascii_case("true"))
	}
}

/// Discover and load every layer of the cascade.
///
/// The cascade order is:
/// 1. Start from `start_dir` and look for `file_name`
/// 2. Continue up the directory tree, stopping after a file with `root = true`
/// 3. Finally, check `~/<file_name>` (unless disabled via [`NO_USER_CONFIG_ENV`])
///
/// Returns layers most specific first.
pub fn discover_files(start_dir: &Path, file_name: &str, comparer: &KeyComparer) -> Result<Vec<LoadedFile>> {
	let mut layers = walk_up(start_dir, file_name, comparer)?;

	if !is_env_truthy(NO_USER_CONFIG_ENV) {
		let user_path = user_file_path(file_name)?;
		let already_loaded = layers.iter().any(|layer| layer.path == user_path);

		if user_path.is_file() && !already_loaded {
			layers.push(LoadedFile {
				configuration: read_file_with(&user_path, comparer.clone())?,
				path: user_path,
			});
		}
	}

	Ok(layers)
}

/// Collect `file_name` from `start_dir` and each of its ancestors.
fn walk_up(start_dir: &Path, file_name: &str, comparer: &KeyComparer) -> Result<Vec<LoadedFile>> {
	let mut layers = Vec::new();
	let mut current_dir = Some(start_dir);

	while let Some(dir) = current_dir {
		let path = dir.join(file_name);

		if path.is_file() {
			let layer = LoadedFile {
				configuration: read_file_with(&path, comparer.clone())?,
				path,
			};
			let stop = layer.is_root();
			layers.push(layer);

			if stop {
				break;
			}
		}

		current_dir = dir.parent();
	}

	Ok(layers)
}

/// Check if an environment variable is set to a truthy value.
fn is_env_truthy(var_name: &str) -> bool {
	match std::env::var(var_name) {
		Ok(value) => {
			let lower = value.to_lowercase();
			!value.is_empty() && lower != "0" && lower != "false" && lower != "no"
		}
		Err(_) => false,
	}
}

/// Merge layers given most specific first, so that closer files win.
pub fn merge_layers(layers: &[LoadedFile]) -> Configuration {
	let base = layers
		.first()
		.map(|layer| Configuration::with_comparer(layer.configuration.comparer().clone()))
		.unwrap_or_default();

	layers
		.iter()
		.rev()
		.fold(base, |merged, layer| merged.merge(&layer.configuration))
}

/// Discover, load, and merge the cascade from a directory.
pub fn load_layered(start_dir: &Path, file_name: &str, comparer: &KeyComparer) -> Result<Configuration> {
	let layers = discover_files(start_dir, file_name, comparer)?;
	Ok(merge_layers(&layers))
}

/// Path of the cascade file in the user's home directory.
pub fn user_file_path(file_name: &str) -> Result<PathBuf> {
	let home_dir = dirs::home_dir().ok_or(IniError::HomeDirectoryNotFound)?;
	Ok(home_dir.join(file_name))
}
