//! User interaction handling.

use dialoguer::Confirm;

use crate::error::{Error, Result};

/// Asks a yes/no question, defaulting to "no".
///
/// # Arguments
/// * `skip_prompt` - Answer "yes" without asking
/// * `prompt` - Question shown to the user
pub fn confirm<S: Into<String>>(skip_prompt: bool, prompt: S) -> Result<bool> {
    if skip_prompt {
        return Ok(true);
    }

    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| Error::ConfigError(e.to_string()))
}
