//! Digital Micrograph (dm3/dm4) tag normalization.

use std::path::Path;

use databrowser_abi::{DmTagDump, MetaValue, MetadataRecord};

/// Fields whose stripped name contains any of these substrings carry bulk
/// acquisition noise, not metadata worth showing. Case-sensitive, matching
/// the tag dictionaries as written by the instrument software.
const DENY_SUBSTRINGS: &[&str] = &[
    "frame sequence",
    "Private",
    "Reference Images",
    "Frame.Intensity",
    "Area.Transform",
    "Parameters.Objects",
    "Device.Parameters",
];

/// Source calibration key -> canonical field, in display order. Dimension 1
/// is X, dimension 2 is Y.
const CALIBRATION_FIELDS: [(&str, &str); 6] = [
    ("Calibrations.Dimension.1.Scale", "PhysicalSizeX"),
    ("Calibrations.Dimension.1.Origin", "PhysicalSizeXOrigin"),
    ("Calibrations.Dimension.1.Units", "PhysicalSizeXUnit"),
    ("Calibrations.Dimension.2.Scale", "PhysicalSizeY"),
    ("Calibrations.Dimension.2.Origin", "PhysicalSizeYOrigin"),
    ("Calibrations.Dimension.2.Units", "PhysicalSizeYUnit"),
];

/// Normalize a dm-family tag dump into a display record.
///
/// Keeps only tags under the highest image object's `ImageTags.`/`ImageData.`
/// prefixes (first matching prefix wins), drops the deny-listed noise, then
/// copies the X/Y calibration triples into the canonical `PhysicalSize*`
/// fields. Calibration fallback is all-or-nothing: if any of the six source
/// keys is absent, all six canonical fields get the defaults `(1, 0, "")`.
pub fn normalize_dm(path: &Path, dump: &DmTagDump) -> MetadataRecord {
    let prefixes = [
        format!("ImageList.{}.ImageTags.", dump.num_objects),
        format!("ImageList.{}.ImageData.", dump.num_objects),
    ];

    let mut rec = MetadataRecord::for_file(path);
    for (key, value) in &dump.tags {
        let Some(field) = strip_first_prefix(key, &prefixes) else {
            continue;
        };
        if DENY_SUBSTRINGS.iter().any(|s| field.contains(s)) {
            continue;
        }
        rec.insert(field, value.clone());
    }

    let calibrated = CALIBRATION_FIELDS
        .iter()
        .all(|(src, _)| rec.contains_key(src));
    if calibrated {
        for (src, dst) in CALIBRATION_FIELDS {
            let value = rec.get(src).cloned().unwrap_or(MetaValue::Int(1));
            rec.insert(dst, value);
        }
    } else {
        for (_, dst) in CALIBRATION_FIELDS {
            rec.insert(dst, default_for(dst));
        }
    }
    rec
}

/// Keep the remainder after the first prefix found inside `key`, if any.
fn strip_first_prefix<'a>(key: &'a str, prefixes: &[String]) -> Option<&'a str> {
    for prefix in prefixes {
        if let Some(pos) = key.find(prefix.as_str()) {
            return Some(&key[pos + prefix.len()..]);
        }
    }
    None
}

fn default_for(canonical: &str) -> MetaValue {
    if canonical.ends_with("Unit") {
        MetaValue::Text(String::new())
    } else if canonical.ends_with("Origin") {
        MetaValue::Int(0)
    } else {
        MetaValue::Int(1)
    }
}
