//! MRC-family header normalization.

use std::path::Path;

use databrowser_abi::{MetaValue, MetadataRecord, MrcHeaderDump};

use super::sidecar;

/// Voxel sizes in the header are Angstroms; canonical fields are meters.
const ANGSTROM_TO_METER: f64 = 1e-10;

/// Normalize an mrc-family header dump into a display record.
///
/// X comes from `voxel_size[2]` and Y from `voxel_size[1]` (the container's
/// axis-order convention). Each axis falls back to the defaults `(1, 0, "")`
/// independently when its voxel size is non-positive; bad pixel sizes are
/// common in these headers. Note this is per-axis, unlike the dm-family's
/// all-or-nothing calibration rule.
pub fn normalize_mrc(path: &Path, dump: &MrcHeaderDump) -> MetadataRecord {
    let mut rec = MetadataRecord::for_file(path);

    rec.insert(
        "axisOrientations",
        MetaValue::List(
            dump.axis_orientations
                .iter()
                .map(|&v| MetaValue::Int(v as i64))
                .collect(),
        ),
    );
    rec.insert(
        "cellAngles",
        MetaValue::List(dump.cell_angles.iter().map(|&v| MetaValue::Float(v)).collect()),
    );

    if let Some(vendor) = &dump.vendor_info {
        for (key, value) in vendor {
            rec.insert(key.clone(), value.clone());
        }
    }

    insert_axis(&mut rec, "X", dump.voxel_size[2]);
    insert_axis(&mut rec, "Y", dump.voxel_size[1]);

    rec.insert("FileName", MetaValue::Text(path.display().to_string()));

    if let Some(tilts) = sidecar::read_tilt_angles(path) {
        rec.insert(
            "tilt angles",
            MetaValue::List(tilts.into_iter().map(MetaValue::Float).collect()),
        );
    }
    for (name, value) in sidecar::read_instrument_parameters(path) {
        rec.insert(name, MetaValue::Float(value));
    }

    rec
}

fn insert_axis(rec: &mut MetadataRecord, axis: &str, voxel_size: f64) {
    if voxel_size > 0.0 {
        rec.insert(
            format!("PhysicalSize{axis}"),
            MetaValue::Float(voxel_size * ANGSTROM_TO_METER),
        );
        rec.insert(format!("PhysicalSize{axis}Origin"), MetaValue::Int(0));
        rec.insert(format!("PhysicalSize{axis}Unit"), MetaValue::Text("m".into()));
    } else {
        rec.insert(format!("PhysicalSize{axis}"), MetaValue::Int(1));
        rec.insert(format!("PhysicalSize{axis}Origin"), MetaValue::Int(0));
        rec.insert(format!("PhysicalSize{axis}Unit"), MetaValue::Text(String::new()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn dump(voxel_size: [f64; 3]) -> MrcHeaderDump {
        MrcHeaderDump {
            axis_orientations: [1, 2, 3],
            cell_angles: [90.0, 90.0, 90.0],
            voxel_size,
            vendor_info: None,
        }
    }

    #[test]
    fn positive_voxel_sizes_convert_to_meters() {
        let rec = normalize_mrc(Path::new("/nowhere/s.mrc"), &dump([0.0, 2.0, 5.0]));
        // X uses index 2, Y uses index 1
        assert_eq!(rec.get("PhysicalSizeX"), Some(&MetaValue::Float(5.0e-10)));
        assert_eq!(rec.get("PhysicalSizeXOrigin"), Some(&MetaValue::Int(0)));
        assert_eq!(rec.get("PhysicalSizeXUnit"), Some(&MetaValue::Text("m".into())));
        assert_eq!(rec.get("PhysicalSizeY"), Some(&MetaValue::Float(2.0e-10)));
    }

    #[test]
    fn non_positive_axis_defaults_independently() {
        let rec = normalize_mrc(Path::new("/nowhere/s.mrc"), &dump([0.0, -1.0, 3.0]));
        // Y is bad, X is fine: only Y falls back
        assert_eq!(rec.get("PhysicalSizeX"), Some(&MetaValue::Float(3.0e-10)));
        assert_eq!(rec.get("PhysicalSizeXUnit"), Some(&MetaValue::Text("m".into())));
        assert_eq!(rec.get("PhysicalSizeY"), Some(&MetaValue::Int(1)));
        assert_eq!(rec.get("PhysicalSizeYOrigin"), Some(&MetaValue::Int(0)));
        assert_eq!(
            rec.get("PhysicalSizeYUnit"),
            Some(&MetaValue::Text(String::new()))
        );
    }

    #[test]
    fn header_fields_and_vendor_info_are_kept() {
        let mut vendor = IndexMap::new();
        vendor.insert("HT".to_string(), MetaValue::Float(300000.0));
        let d = MrcHeaderDump {
            vendor_info: Some(vendor),
            ..dump([1.0, 1.0, 1.0])
        };
        let rec = normalize_mrc(Path::new("/nowhere/s.mrc"), &d);
        assert_eq!(
            rec.get("axisOrientations"),
            Some(&MetaValue::List(vec![
                MetaValue::Int(1),
                MetaValue::Int(2),
                MetaValue::Int(3)
            ]))
        );
        assert_eq!(rec.get("HT"), Some(&MetaValue::Float(300000.0)));
        // the path rides along under both the shared and the mrc-pane key
        assert_eq!(
            rec.get("FileName"),
            Some(&MetaValue::Text("/nowhere/s.mrc".into()))
        );
    }

    #[test]
    fn sidecars_merge_when_present() {
        let dir = tempfile::tempdir().unwrap();
        let stack = dir.path().join("tomo.ali");
        std::fs::write(dir.path().join("tomo.rawtlt"), "-30\n0\n30\n").unwrap();

        let rec = normalize_mrc(&stack, &dump([1.0, 1.0, 1.0]));
        assert_eq!(
            rec.get("tilt angles"),
            Some(&MetaValue::List(vec![
                MetaValue::Float(-30.0),
                MetaValue::Float(0.0),
                MetaValue::Float(30.0)
            ]))
        );
    }
}
