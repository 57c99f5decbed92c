//! Plain-text sidecar files that ride next to mrc-family stacks.

use std::fs;
use std::io;
use std::path::Path;

/// Tilt angles from the `.rawtlt` companion: one float per line.
/// Malformed lines are skipped silently. `None` when no sidecar is present.
pub(crate) fn read_tilt_angles(data_path: &Path) -> Option<Vec<f64>> {
    let text = read_sidecar(data_path, "rawtlt")?;
    Some(
        text.lines()
            .filter_map(|line| line.trim().parse::<f64>().ok())
            .collect(),
    )
}

/// Instrument parameters from the `.txt` companion.
///
/// The listing has a fixed shape: three header lines, one trailer line, and
/// parameter lines in between with an 18-column label gutter followed by
/// `name: value`. Lines that do not parse to a number are skipped silently.
pub(crate) fn read_instrument_parameters(data_path: &Path) -> Vec<(String, f64)> {
    let Some(text) = read_sidecar(data_path, "txt") else {
        return Vec::new();
    };
    let lines: Vec<&str> = text.lines().collect();
    let end = lines.len().saturating_sub(1);
    if end <= 3 {
        return Vec::new();
    }

    let mut params = Vec::new();
    for line in &lines[3..end] {
        let Some((gutter_end, _)) = line.char_indices().nth(18) else {
            continue;
        };
        let Some((name, value)) = line[gutter_end..].trim().split_once(':') else {
            continue;
        };
        let Ok(value) = value.trim().parse::<f64>() else {
            continue;
        };
        params.push((name.trim().to_string(), value));
    }
    params
}

/// Read the sidecar sharing the data file's base name, if present.
/// An unreadable-but-present sidecar is treated as absent, with a warning;
/// sidecars are a bonus, not part of the format contract.
fn read_sidecar(data_path: &Path, extension: &str) -> Option<String> {
    let path = data_path.with_extension(extension);
    match fs::read_to_string(&path) {
        Ok(text) => Some(text),
        Err(err) if err.kind() == io::ErrorKind::NotFound => None,
        Err(err) => {
            log::warn!("skipping unreadable sidecar {}: {err}", path.display());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn tilt_angles_skip_malformed_lines() {
        let dir = tempfile::tempdir().unwrap();
        let stack = dir.path().join("stack.mrc");
        fs::write(dir.path().join("stack.rawtlt"), "-60.0\n-58.0\noops\n60.0\n").unwrap();

        let tilts = read_tilt_angles(&stack).unwrap();
        assert_eq!(tilts, vec![-60.0, -58.0, 60.0]);
    }

    #[test]
    fn missing_sidecars_are_none() {
        let dir = tempfile::tempdir().unwrap();
        let stack = dir.path().join("stack.mrc");
        assert!(read_tilt_angles(&stack).is_none());
        assert!(read_instrument_parameters(&stack).is_empty());
    }

    #[test]
    fn instrument_parameters_use_fixed_listing_shape() {
        let dir = tempfile::tempdir().unwrap();
        let stack = dir.path().join("stack.mrc");
        let listing = "\
header line one
header line two
header line three
                  High tension: 300000
                  Defocus: -1.5
                  Operator: jdoe
trailer line
";
        fs::write(dir.path().join("stack.txt"), listing).unwrap();

        let params = read_instrument_parameters(&stack);
        assert_eq!(
            params,
            vec![
                ("High tension".to_string(), 300000.0),
                ("Defocus".to_string(), -1.5),
            ]
        );
    }
}
