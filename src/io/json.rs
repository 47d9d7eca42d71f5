//! JSON files for diffusion parameters, profiles and snapshot series.
//!
//! ```text
//! params.json     {"alpha": 1.0, "length": 1.0, "t_max": 0.1, "nx": 21, "nt": 501}
//! profile.json    [0.0, 12.5, 100.0, 12.5, 0.0]
//! snapshots.json  [{"step": 0, "time_s": 0.0, "temperatures": [...]}, ...]
//! ```

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::sim::diffusion::{DiffusionParams, DiffusionSnapshot};

/// Reads run parameters and checks that they are usable.
///
/// Only range checks are done here; an unstable parameter set is still
/// returned so the caller can report the stability ratio.
pub fn read_params(path: &Path) -> Result<DiffusionParams> {
    let params: DiffusionParams = read_json(path, "parameter")?;
    params
        .check_ranges()
        .with_context(|| format!("Invalid parameters in {}", path.display()))?;
    Ok(params)
}

pub fn write_params(path: &Path, params: &DiffusionParams) -> Result<()> {
    write_json(path, params, "parameter")
}

/// Reads a temperature profile (JSON array of numbers).
pub fn read_profile(path: &Path) -> Result<Vec<f64>> {
    read_json(path, "profile")
}

pub fn write_profile(path: &Path, profile: &[f64]) -> Result<()> {
    write_json(path, profile, "profile")
}

pub fn write_snapshots(path: &Path, snapshots: &[DiffusionSnapshot]) -> Result<()> {
    write_json(path, snapshots, "snapshot")
}

fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    let reader = BufReader::new(file);

    let value = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse {what} file: {}", path.display()))?;

    Ok(value)
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T, what: &str) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create file: {}", path.display()))?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, value)
        .with_context(|| format!("Failed to write {what} file: {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::diffusion::run_recorded;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_params_roundtrip() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("params.json");

        let params = DiffusionParams::new(0.4, 2.0, 1.0, 3, 2);
        write_params(&path, &params)?;
        let content = fs::read_to_string(&path)?;
        assert!(content.contains("\"alpha\""));
        assert!(content.contains("\"t_max\""));

        assert_eq!(read_params(&path)?, params);
        Ok(())
    }

    #[test]
    fn test_read_params_rejects_bad_ranges() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("params.json");
        fs::write(&path, r#"{"alpha":1.0,"length":1.0,"t_max":1.0,"nx":2,"nt":10}"#)?;

        let err = read_params(&path).unwrap_err();
        assert!(format!("{err:#}").contains("nx must be at least 3"), "{err:#}");
        Ok(())
    }

    #[test]
    fn test_read_params_keeps_unstable_set() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("params.json");
        fs::write(&path, r#"{"alpha":0.6,"length":2.0,"t_max":1.0,"nx":3,"nt":2}"#)?;

        let params = read_params(&path)?;
        assert!(!params.is_stable());
        Ok(())
    }

    #[test]
    fn test_profile_roundtrip() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("profile.json");

        let profile = vec![0.0, 12.5, 100.0, 12.5, 0.0];
        write_profile(&path, &profile)?;
        assert_eq!(read_profile(&path)?, profile);
        Ok(())
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = read_profile(Path::new("/nonexistent/profile.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/profile.json"));
    }

    #[test]
    fn test_malformed_profile() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("profile.json");
        fs::write(&path, "[0.0, \"hot\", 0.0]")?;
        assert!(read_profile(&path).is_err());
        Ok(())
    }

    #[test]
    fn test_write_snapshots() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("snapshots.json");

        let params = DiffusionParams::new(0.1, 2.0, 1.0, 3, 4);
        let snaps = run_recorded(&[0.0, 100.0, 0.0], &params, 1)?;
        write_snapshots(&path, &snaps)?;

        let back: Vec<DiffusionSnapshot> = serde_json::from_str(&fs::read_to_string(&path)?)?;
        assert_eq!(back.len(), 4);
        assert_eq!(back[3].step, 3);
        Ok(())
    }
}
