//! Byte-level encoding of decal records.
//!
//! RON output is pretty-printed with struct names, so a saved record reads
//! as `PART_TARGET(...)` / `MESH_TARGET(...)` nodes.

use thiserror::Error;

/// Failure to convert a record to or from bytes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    #[error("failed to encode record: {0}")]
    Encode(String),
    #[error("failed to decode record: {0}")]
    Decode(String),
}

impl PersistenceError {
    fn encode(e: impl std::fmt::Display) -> Self {
        Self::Encode(e.to_string())
    }

    fn decode(e: impl std::fmt::Display) -> Self {
        Self::Decode(e.to_string())
    }
}

/// Supported serialization formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Human-readable RON text.
    #[default]
    Ron,
    /// Compact binary bincode.
    #[cfg(feature = "serialize-bincode")]
    Bincode,
}

fn ron_style() -> ron::ser::PrettyConfig {
    ron::ser::PrettyConfig::default().struct_names(true)
}

/// Serialize `value` to bytes.
pub fn encode<T: serde::Serialize>(value: &T, format: Format) -> Result<Vec<u8>, PersistenceError> {
    let bytes = match format {
        Format::Ron => ron::ser::to_string_pretty(value, ron_style())
            .map_err(PersistenceError::encode)?
            .into_bytes(),
        #[cfg(feature = "serialize-bincode")]
        Format::Bincode => bincode::serialize(value).map_err(PersistenceError::encode)?,
    };
    Ok(bytes)
}

/// Deserialize a value previously written by [`encode`] in the same format.
pub fn decode<T: serde::de::DeserializeOwned>(
    bytes: &[u8],
    format: Format,
) -> Result<T, PersistenceError> {
    match format {
        Format::Ron => ron::de::from_bytes(bytes).map_err(PersistenceError::decode),
        #[cfg(feature = "serialize-bincode")]
        Format::Bincode => bincode::deserialize(bytes).map_err(PersistenceError::decode),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{BodyRecord, DecalRecord, SurfaceRecord};
    use crate::targets::BodyId;

    fn record() -> DecalRecord {
        DecalRecord {
            bodies: vec![BodyRecord {
                body: BodyId(3),
                surfaces: vec![SurfaceRecord {
                    decal_matrix: std::array::from_fn(|i| i as f32 * 0.1 - 0.75),
                    decal_normal: [0.0, -0.0, 1.0],
                    decal_tangent: [1.0 / 3.0, 2.0 / 3.0, f32::MIN_POSITIVE],
                    target_path: "0/4/1".into(),
                    target_name: "fuselage".into(),
                }],
            }],
        }
    }

    #[test]
    fn ron_preserves_floats_exactly() {
        let original = record();
        let bytes = encode(&original, Format::Ron).unwrap();
        let decoded: DecalRecord = decode(&bytes, Format::Ron).unwrap();

        let (a, b) = (&original.bodies[0].surfaces[0], &decoded.bodies[0].surfaces[0]);
        assert_eq!(a.decal_matrix.map(f32::to_bits), b.decal_matrix.map(f32::to_bits));
        assert_eq!(a.decal_normal.map(f32::to_bits), b.decal_normal.map(f32::to_bits));
        assert_eq!(a.decal_tangent.map(f32::to_bits), b.decal_tangent.map(f32::to_bits));
        assert_eq!(decoded, original);
    }

    #[test]
    fn ron_output_names_records() {
        let text = String::from_utf8(encode(&record(), Format::Ron).unwrap()).unwrap();
        assert!(text.contains(BodyRecord::NODE_NAME));
        assert!(text.contains(SurfaceRecord::NODE_NAME));
        assert!(text.contains("\"0/4/1\""));
    }

    #[test]
    fn decode_garbage_fails() {
        let err = decode::<DecalRecord>(b"not a record", Format::Ron).unwrap_err();
        assert!(matches!(err, PersistenceError::Decode(_)));
        let err = decode::<DecalRecord>(&[0xff, 0xfe], Format::Ron).unwrap_err();
        assert!(matches!(err, PersistenceError::Decode(_)));
    }

    #[cfg(feature = "serialize-bincode")]
    #[test]
    fn bincode_round_trip() {
        let original = record();
        let bytes = encode(&original, Format::Bincode).unwrap();
        let decoded: DecalRecord = decode(&bytes, Format::Bincode).unwrap();
        assert_eq!(decoded, original);
    }
}
