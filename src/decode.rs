//! Decode a pilot file into a [`Record`] by walking the field map.
//!
//! Each [`Field`] is read element by element through the [reader](crate::reader): single bytes
//! by direct indexing, words and dwords in file byte order. The first read that would leave the
//! buffer aborts the whole decode; no partial record is returned. An entry whose width or count
//! differs from its [`Record`] member is rejected before any byte is read.

use crate::reader::{read_u16, read_u32, read_u8};
use crate::record::Record;
use crate::schema::{Field, FieldId, LayoutError, Width, FIELD_MAP};
use crate::source::ByteSource;
use tracing::{debug, trace};

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("IO: {0}")]
    Io(#[from] std::io::Error),
    #[error("Offset out of range: field {field} needs {width} byte(s) at offset {offset}, buffer holds {len}")]
    OffsetOutOfRange {
        field: &'static str,
        offset: usize,
        width: usize,
        len: usize,
    },
    #[error("Layout: {0}")]
    Layout(#[from] LayoutError),
}

/// Decode raw file bytes with the built-in [`FIELD_MAP`]. Short input is zero-extended first.
pub fn decode(bytes: &[u8]) -> Result<Record, DecodeError> {
    decode_with(FIELD_MAP, bytes)
}

/// Decode raw file bytes against a caller-supplied field map.
///
/// Members whose field is absent from `fields` stay zero.
pub fn decode_with(fields: &[Field], bytes: &[u8]) -> Result<Record, DecodeError> {
    decode_source(fields, &ByteSource::from_bytes(bytes))
}

/// Decode an already normalized [`ByteSource`].
pub fn decode_source(fields: &[Field], source: &ByteSource) -> Result<Record, DecodeError> {
    let data = source.as_bytes();
    let mut record = Record::zeroed();
    for field in fields {
        field.check_shape()?;
        let values = read_field(data, field)?;
        debug!(
            field = field.name,
            offset = field.offset,
            width = field.width.bytes(),
            count = field.count,
            "decoded field"
        );
        store(&mut record, field.id, &values);
    }
    Ok(record)
}

fn read_element(data: &[u8], field: &Field, offset: usize) -> Result<u32, DecodeError> {
    Ok(match field.width {
        Width::Byte => u32::from(read_u8(data, field.name, offset)?),
        Width::Word => u32::from(read_u16(data, field.name, offset)?),
        Width::DWord => read_u32(data, field.name, offset)?,
    })
}

fn read_field(data: &[u8], field: &Field) -> Result<Vec<u32>, DecodeError> {
    (0..field.count)
        .map(|i| read_element(data, field, field.element_offset(i)))
        .collect()
}

fn first(values: &[u32]) -> u32 {
    values.first().copied().unwrap_or(0)
}

fn fill<T>(dst: &mut [T], values: &[u32], narrow: impl Fn(u32) -> T) {
    for (slot, &v) in dst.iter_mut().zip(values) {
        *slot = narrow(v);
    }
}

// Narrowing casts are exact: `check_shape` pinned each field to its member's width.
fn store(record: &mut Record, id: FieldId, values: &[u32]) {
    let byte = |v: u32| v as u8;
    let word = |v: u32| v as u16;
    match id {
        FieldId::Header => fill(&mut record.header, values, byte),
        FieldId::Rank => record.rank = first(values) as u8,
        FieldId::Difficulty => record.difficulty = first(values) as u8,
        FieldId::Points => record.points = first(values),
        FieldId::Level => record.level = first(values) as u16,
        FieldId::SecretRank => record.secret_rank = first(values) as u8,
        FieldId::Certificates => fill(&mut record.certificates, values, byte),
        FieldId::SpareCertificates => fill(&mut record.spare_certificates, values, byte),
        FieldId::SimCounters(craft) => fill(&mut record.sim_counters[craft.index()], values, byte),
        FieldId::ActiveCampaign => record.active_campaign = first(values) as u8,
        FieldId::CampaignStatus => fill(&mut record.campaign_status, values, byte),
        FieldId::LastMission => fill(&mut record.last_mission, values, byte),
        FieldId::StatusCopy => record.status_copy = first(values) as u8,
        FieldId::Kills => fill(&mut record.kills, values, word),
        FieldId::LasersFired => record.lasers_fired = first(values),
        FieldId::LaserHits => record.laser_hits = first(values),
        FieldId::WarheadsFired => record.warheads_fired = first(values) as u16,
        FieldId::WarheadHits => record.warhead_hits = first(values) as u16,
        FieldId::TrainingPoints => fill(&mut record.training_points, values, |v| v),
        FieldId::BattlePoints => fill(&mut record.battle_points, values, |v| v),
        FieldId::TotalKills => record.total_kills = first(values) as u16,
        FieldId::ShipsCaptured => record.ships_captured = first(values) as u16,
        FieldId::ShipsLost => record.ships_lost = first(values) as u8,
    }
    trace!(?id, "stored field");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::{write_u16, write_u32};
    use crate::schema::{Craft, Role, FILE_LEN, UNIT_COUNT};

    fn custom(id: FieldId, name: &'static str, offset: usize, width: Width, count: usize, role: Role) -> Field {
        Field {
            id,
            name,
            offset,
            width,
            count,
            role,
            alias_of: None,
        }
    }

    #[test]
    fn scalars_at_documented_offsets() {
        let mut buf = vec![0u8; FILE_LEN];
        buf[2] = 3;
        buf[3] = 2;
        write_u32(&mut buf, 4, 123_456).unwrap();
        write_u16(&mut buf, 8, 42).unwrap();
        buf[10] = 9;
        let r = decode(&buf).expect("decode");
        assert_eq!(r.rank, 3);
        assert_eq!(r.difficulty, 2);
        assert_eq!(r.points, 123_456);
        assert_eq!(r.level, 42);
        assert_eq!(r.secret_rank, 9);
    }

    #[test]
    fn sim_counters_skip_the_gap_between_crafts() {
        let mut buf = vec![0u8; FILE_LEN];
        buf[552..556].copy_from_slice(&[1, 1, 1, 0]);
        buf[556] = 9; // unused gap after the gunboat counters
        let r = decode(&buf).expect("decode");
        assert_eq!(r.sim_counters[Craft::Gunboat.index()], [1, 1, 1, 0]);
        assert_eq!(r.sim_completions(Craft::Gunboat), 3);
        assert_eq!(r.sim_completions(Craft::TieDefender), 0);
    }

    #[test]
    fn out_of_range_field_aborts_decode() {
        let fields = [
            *crate::schema::field(FieldId::Rank).unwrap(),
            custom(FieldId::TotalKills, "late_total_kills", 3854, Width::Word, 1, Role::Scalar),
        ];
        match decode_with(&fields, &[]) {
            Err(DecodeError::OffsetOutOfRange { field, offset, width, len }) => {
                assert_eq!(field, "late_total_kills");
                assert_eq!(offset, 3854);
                assert_eq!(width, 2);
                assert_eq!(len, FILE_LEN);
            }
            other => panic!("expected OffsetOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn wide_enum_field_is_rejected_not_truncated() {
        // 0x0105 would silently become rank 5 if stored through a byte member.
        let mut buf = vec![0u8; FILE_LEN];
        buf[2] = 0x05;
        buf[3] = 0x01;
        let fields = [custom(FieldId::Rank, "rank", 2, Width::Word, 1, Role::EnumCode)];
        match decode_with(&fields, &buf) {
            Err(DecodeError::Layout(LayoutError::ShapeMismatch {
                field,
                width,
                expected_width,
                ..
            })) => {
                assert_eq!(field, "rank");
                assert_eq!((width, expected_width), (2, 1));
            }
            other => panic!("expected ShapeMismatch, got {:?}", other),
        }
    }

    #[test]
    fn short_array_field_is_rejected() {
        let mut buf = vec![0u8; FILE_LEN];
        write_u16(&mut buf, 1632, 7).unwrap();
        let fields = [custom(FieldId::Kills, "kills", 1632, Width::Word, 3, Role::CounterArray)];
        match decode_with(&fields, &buf) {
            Err(DecodeError::Layout(LayoutError::ShapeMismatch { count, expected_count, .. })) => {
                assert_eq!((count, expected_count), (3, UNIT_COUNT));
            }
            other => panic!("expected ShapeMismatch, got {:?}", other),
        }
    }

    #[test]
    fn mismatched_entry_after_valid_one_fails_decode() {
        let fields = [
            *crate::schema::field(FieldId::Level).unwrap(),
            custom(FieldId::Points, "points", 4, Width::Word, 1, Role::Scalar),
        ];
        assert!(matches!(
            decode_with(&fields, &[]),
            Err(DecodeError::Layout(LayoutError::ShapeMismatch { field: "points", .. }))
        ));
    }

    #[test]
    fn absent_fields_stay_zero() {
        let buf = vec![0xffu8; FILE_LEN];
        let level = *crate::schema::field(FieldId::Level).unwrap();
        let r = decode_with(&[level], &buf).expect("decode");
        assert_eq!(r.level, u16::MAX);
        assert_eq!(r.points, 0);
        assert!(r.kills.iter().all(|&k| k == 0));
    }
}
