//! Resolve configuration and data directories for `isola`.
//!
//! The helpers in this module respect environment overrides while falling back
//! to platform-appropriate locations provided by the `directories` crate.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "isola";
const APPLICATION: &str = "isola";

const CONFIG_DIR_ENV: &str = "ISOLA_CONFIG_DIR";
const DATA_DIR_ENV: &str = "ISOLA_DATA_DIR";

/// File name of the JSON content source inside the data directory.
pub const CONTENT_FILE: &str = "content.json";

fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for isola"))
}

/// Resolve an override directory from an environment variable.
///
/// An empty string is treated the same as an unset value.
fn dir_from_env(name: &str) -> Option<PathBuf> {
	let value = env::var_os(name)?;
	if value.is_empty() {
		None
	} else {
		Some(PathBuf::from(value))
	}
}

/// Return the directory holding `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.config_local_dir().to_path_buf())
}

/// Return the directory holding content files.
pub fn get_data_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(DATA_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.data_local_dir().to_path_buf())
}

/// Default location of the JSON content source.
pub fn default_content_path() -> Result<PathBuf> {
	Ok(get_data_dir()?.join(CONTENT_FILE))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_override_is_ignored() {
		// SAFETY: the variable name is unique to this test.
		unsafe {
			env::set_var("ISOLA_TEST_EMPTY_DIR", "");
		}
		assert_eq!(dir_from_env("ISOLA_TEST_EMPTY_DIR"), None);
		unsafe {
			env::remove_var("ISOLA_TEST_EMPTY_DIR");
		}
	}

	#[test]
	fn override_is_used_verbatim() {
		// SAFETY: the variable name is unique to this test.
		unsafe {
			env::set_var("ISOLA_TEST_SET_DIR", "/tmp/isola-data");
		}
		assert_eq!(
			dir_from_env("ISOLA_TEST_SET_DIR"),
			Some(PathBuf::from("/tmp/isola-data"))
		);
		unsafe {
			env::remove_var("ISOLA_TEST_SET_DIR");
		}
	}
}
