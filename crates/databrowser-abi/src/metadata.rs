//! Format-agnostic metadata value & record types.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Key under which every record stores the path it was read from.
pub const FILE_NAME_KEY: &str = "file name";

/// A single metadata value as the metadata pane displays it.
/// Readers park whatever the container held; no unit conversion happens here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<MetaValue>),
}

impl fmt::Display for MetaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetaValue::Int(v) => write!(f, "{v}"),
            MetaValue::Float(v) => write!(f, "{v}"),
            MetaValue::Text(v) => write!(f, "{v}"),
            MetaValue::List(vs) => {
                write!(f, "[")?;
                for (i, v) in vs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{v}")?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<i64> for MetaValue {
    fn from(v: i64) -> Self {
        MetaValue::Int(v)
    }
}

impl From<f64> for MetaValue {
    fn from(v: f64) -> Self {
        MetaValue::Float(v)
    }
}

impl From<&str> for MetaValue {
    fn from(v: &str) -> Self {
        MetaValue::Text(v.to_string())
    }
}

impl From<String> for MetaValue {
    fn from(v: String) -> Self {
        MetaValue::Text(v)
    }
}

/// Normalized metadata for one file: an insertion-ordered field map.
///
/// Order is display order. Overwriting an existing field keeps its original
/// position (ordered-mapping overwrite semantics). The `file name` field is
/// always present and always first.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetadataRecord {
    fields: IndexMap<String, MetaValue>,
}

impl MetadataRecord {
    /// Start a record for `path`, with `file name` as the first field.
    pub fn for_file(path: &Path) -> Self {
        let mut rec = Self::default();
        rec.insert(FILE_NAME_KEY, MetaValue::Text(path.display().to_string()));
        rec
    }

    /// Insert or overwrite a field. An overwritten field keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<MetaValue>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&MetaValue> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Fields in display (insertion) order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetaValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Raw flat tag dictionary from a dm-family reader.
///
/// Keys are dotted hierarchical paths (`ImageList.<N>.ImageTags.<subkey>`);
/// `num_objects` is the highest object index present in the container, which
/// selects the image whose tags are worth keeping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DmTagDump {
    pub tags: IndexMap<String, MetaValue>,
    pub num_objects: u32,
}

/// Raw header fields from an mrc-family reader.
///
/// `voxel_size` is in Angstroms, in the container's axis order. Vendor (FEI)
/// extension entries ride along when the header carries them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MrcHeaderDump {
    pub axis_orientations: [i32; 3],
    pub cell_angles: [f64; 3],
    pub voxel_size: [f64; 3],
    pub vendor_info: Option<IndexMap<String, MetaValue>>,
}
