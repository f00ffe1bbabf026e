//! # Input Loading
//!
//! Profile files are accepted as JSON or YAML, dispatched on extension
//! the same way the catalog loader does it.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use tracing::debug;

use regc_assess::Profile;

/// Load a profile from a `.json`, `.yaml`, or `.yml` file.
pub fn load_profile(path: &Path) -> anyhow::Result<Profile> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading profile {}", path.display()))?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let profile: Profile = match ext {
        "json" => serde_json::from_str(&raw)
            .with_context(|| format!("parsing profile {}", path.display()))?,
        "yaml" | "yml" => serde_yaml::from_str(&raw)
            .with_context(|| format!("parsing profile {}", path.display()))?,
        other => bail!("unsupported profile extension {other:?}, expected json or yaml"),
    };
    debug!(
        path = %path.display(),
        operator_type = %profile.operator_type,
        "profile loaded"
    );
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_json_profile() {
        let mut f = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            f,
            r#"{{"operator_type": "small-operator", "sector": "satcom",
                "staff_count": 8, "annual_revenue_eur": 1200000}}"#
        )
        .unwrap();
        let p = load_profile(f.path()).unwrap();
        assert_eq!(p.sector.as_deref(), Some("satcom"));
    }

    #[test]
    fn test_load_yaml_profile() {
        let mut f = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        write!(
            f,
            "operator_type: small-operator\nsector: satcom\nstaff_count: 8\nannual_revenue_eur: 1200000\n"
        )
        .unwrap();
        let p = load_profile(f.path()).unwrap();
        assert_eq!(p.staff_count, Some(8));
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let f = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        assert!(load_profile(f.path()).is_err());
    }
}
