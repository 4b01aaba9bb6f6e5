//! Credentials loading for the lookup stage.
//!
//! The Places API key lives in a key=value text file (`.env` convention).
//! The file is parsed directly rather than exported into the process
//! environment, so nothing else in the process can observe the key and
//! tests stay hermetic.

use std::path::Path;

use crate::error::{Error, Result};

/// Variable name the credentials file must define.
pub const API_KEY_VAR: &str = "GOOGLE_PLACES_API_KEY";

/// Default credentials file path.
pub const DEFAULT_ENV_FILE: &str = ".env";

fn remediation(path: &Path, problem: &str) -> String {
    format!(
        "{problem}\n\
        \n\
        The lookup stage needs a Google Places API key. To fix this:\n\
        \n\
        1. Create an API key with the Places API (New) enabled:\n\
           https://console.cloud.google.com/apis/credentials\n\
        \n\
        2. Put it in {path} as a single line:\n\
           {API_KEY_VAR}=your-key-here",
        path = path.display(),
    )
}

/// Read the API key from a key=value credentials file.
///
/// # Errors
///
/// A missing file, an unparseable line, or an absent/empty
/// [`API_KEY_VAR`] entry all fail with a setup error whose message
/// carries remediation instructions for the operator.
pub fn load_api_key<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let entries = dotenv::from_path_iter(path).map_err(|err| {
        Error::setup(remediation(
            path,
            &format!("could not read credentials file {}: {err}", path.display()),
        ))
    })?;

    for entry in entries {
        let (key, value) = entry.map_err(|err| {
            Error::setup(remediation(
                path,
                &format!("malformed credentials file {}: {err}", path.display()),
            ))
        })?;
        if key == API_KEY_VAR {
            let value = value.trim().to_string();
            if value.is_empty() {
                return Err(Error::setup(remediation(
                    path,
                    &format!("{API_KEY_VAR} is empty in {}", path.display()),
                )));
            }
            return Ok(value);
        }
    }

    Err(Error::setup(remediation(
        path,
        &format!("{} does not define {API_KEY_VAR}", path.display()),
    )))
}
