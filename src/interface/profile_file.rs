use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::AthleteProfile;

/// Load an athlete profile from a JSON file and check its domain.
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<AthleteProfile> {
    let content = fs::read_to_string(path)?;
    let profile: AthleteProfile = serde_json::from_str(&content)?;
    profile.validate()?;
    Ok(profile)
}
