use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Base dashicon config directory (~/.config/dashicon/, %APPDATA%\dashicon on Windows)
pub fn dashicon() -> Result<PathBuf> {
    #[cfg(windows)]
    {
        let appdata = env::var("APPDATA").map_err(|_| {
            Error::internal_unexpected(
                "APPDATA environment variable not set on Windows".to_string(),
            )
        })?;
        Ok(PathBuf::from(appdata).join("dashicon"))
    }

    #[cfg(not(windows))]
    {
        let home = env::var("HOME").map_err(|_| {
            Error::internal_unexpected(
                "HOME environment variable not set on Unix-like system".to_string(),
            )
        })?;
        Ok(PathBuf::from(home).join(".config").join("dashicon"))
    }
}

/// Global dashicon.json config file path
pub fn dashicon_json() -> Result<PathBuf> {
    Ok(dashicon()?.join("dashicon.json"))
}
