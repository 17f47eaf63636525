//! Static layout of a `.TFR` pilot file.
//!
//! The file carries no tags or lengths: [`FIELD_MAP`] is the only description of where each
//! value lives. Every entry names an offset, an element width and an element count; arrays are
//! `count` consecutive elements, each `width` bytes apart.
//!
//! ## Aliases
//!
//! The game writes some status values twice. [`FieldId::StatusCopy`] at offset 1628 repeats the
//! status of the active campaign held in [`FieldId::CampaignStatus`]. Both are decoded on their
//! own and may disagree; entries that repeat another carry `alias_of`.


/// Size of every pilot file in bytes.
pub const FILE_LEN: usize = 3855;

pub const HEADER_LEN: usize = 2;
pub const CRAFT_COUNT: usize = 7;
pub const SPARE_CERTIFICATES: usize = 5;
/// Simulator missions per craft.
pub const SIM_SLOTS: usize = 4;
pub const CAMPAIGN_COUNT: usize = 13;
/// Entries in the kill table, index-aligned with the unit-name table.
pub const UNIT_COUNT: usize = 68;
/// 7 craft x 4 training missions.
pub const TRAINING_SLOTS: usize = 28;
/// 13 campaigns x 8 mission slots. Campaigns use between 4 and 8 of them.
pub const BATTLE_SLOTS: usize = 104;

/// Certificate value written once all training missions of a craft are flown.
pub const CERTIFICATE_COMPLETED: u8 = 4;

/// Element width of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    Byte,
    Word,
    DWord,
}

impl Width {
    pub const fn bytes(self) -> usize {
        match self {
            Width::Byte => 1,
            Width::Word => 2,
            Width::DWord => 4,
        }
    }
}

/// What a field means, independent of where it lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Bytes of unknown purpose, kept verbatim.
    Raw,
    Scalar,
    /// Small code translated by [`Labels`](crate::labels::Labels).
    EnumCode,
    CounterArray,
    StatusArray,
}

/// Trainable craft, in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Craft {
    TieFighter,
    TieInterceptor,
    TieBomber,
    TieAdvanced,
    Gunboat,
    TieDefender,
    MissileBoat,
}

impl Craft {
    pub const ALL: [Craft; CRAFT_COUNT] = [
        Craft::TieFighter,
        Craft::TieInterceptor,
        Craft::TieBomber,
        Craft::TieAdvanced,
        Craft::Gunboat,
        Craft::TieDefender,
        Craft::MissileBoat,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Identifies which [`Record`](crate::record::Record) member a field populates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Header,
    Rank,
    Difficulty,
    Points,
    Level,
    SecretRank,
    Certificates,
    SpareCertificates,
    SimCounters(Craft),
    ActiveCampaign,
    CampaignStatus,
    LastMission,
    StatusCopy,
    Kills,
    LasersFired,
    LaserHits,
    WarheadsFired,
    WarheadHits,
    TrainingPoints,
    BattlePoints,
    TotalKills,
    ShipsCaptured,
    ShipsLost,
}

impl FieldId {
    /// Element width and count of the [`Record`](crate::record::Record) member this id fills.
    pub const fn shape(self) -> (Width, usize) {
        match self {
            FieldId::Header => (Width::Byte, HEADER_LEN),
            FieldId::Rank | FieldId::Difficulty | FieldId::SecretRank => (Width::Byte, 1),
            FieldId::Points => (Width::DWord, 1),
            FieldId::Level => (Width::Word, 1),
            FieldId::Certificates => (Width::Byte, CRAFT_COUNT),
            FieldId::SpareCertificates => (Width::Byte, SPARE_CERTIFICATES),
            FieldId::SimCounters(_) => (Width::Byte, SIM_SLOTS),
            FieldId::ActiveCampaign | FieldId::StatusCopy => (Width::Byte, 1),
            FieldId::CampaignStatus | FieldId::LastMission => (Width::Byte, CAMPAIGN_COUNT),
            FieldId::Kills => (Width::Word, UNIT_COUNT),
            FieldId::LasersFired | FieldId::LaserHits => (Width::DWord, 1),
            FieldId::WarheadsFired | FieldId::WarheadHits => (Width::Word, 1),
            FieldId::TrainingPoints => (Width::DWord, TRAINING_SLOTS),
            FieldId::BattlePoints => (Width::DWord, BATTLE_SLOTS),
            FieldId::TotalKills | FieldId::ShipsCaptured => (Width::Word, 1),
            FieldId::ShipsLost => (Width::Byte, 1),
        }
    }
}

/// A field map entry that cannot describe a valid pilot file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("Field {field} ends at byte {end}, past the {len}-byte file")]
    OutOfRange {
        field: &'static str,
        end: usize,
        len: usize,
    },
    #[error("Overlapping fields: {first} and {second}")]
    Overlap {
        first: &'static str,
        second: &'static str,
    },
    #[error("Field {field} is {count} x {width} byte(s), its record member holds {expected_count} x {expected_width}")]
    ShapeMismatch {
        field: &'static str,
        width: usize,
        count: usize,
        expected_width: usize,
        expected_count: usize,
    },
    #[error("Field {field} holds an enum code but is not a single byte")]
    EnumNotByte { field: &'static str },
}

/// One region of the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub id: FieldId,
    pub name: &'static str,
    pub offset: usize,
    pub width: Width,
    pub count: usize,
    pub role: Role,
    /// Set when this region repeats a value stored elsewhere.
    pub alias_of: Option<FieldId>,
}

impl Field {
    const fn new(id: FieldId, name: &'static str, offset: usize, width: Width, count: usize, role: Role) -> Self {
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

    const fn aliasing(mut self, original: FieldId) -> Self {
        self.alias_of = Some(original);
        self
    }

    /// Total bytes covered (`width * count`).
    pub const fn extent(&self) -> usize {
        self.width.bytes() * self.count
    }

    /// Offset of element `i`, saturating so an absurd layout fails the bounds check instead of wrapping.
    pub fn element_offset(&self, i: usize) -> usize {
        self.offset.saturating_add(i.saturating_mul(self.width.bytes()))
    }

    pub fn end(&self) -> usize {
        self.offset.saturating_add(self.extent())
    }

    /// Width and count must match the record member, or values would be truncated or dropped.
    pub fn check_shape(&self) -> Result<(), LayoutError> {
        let (width, count) = self.id.shape();
        if self.width != width || self.count != count {
            return Err(LayoutError::ShapeMismatch {
                field: self.name,
                width: self.width.bytes(),
                count: self.count,
                expected_width: width.bytes(),
                expected_count: count,
            });
        }
        if self.role == Role::EnumCode && (self.width != Width::Byte || self.count != 1) {
            return Err(LayoutError::EnumNotByte { field: self.name });
        }
        Ok(())
    }

    fn overlaps(&self, other: &Field) -> bool {
        self.offset < other.end() && other.offset < self.end()
    }
}

use FieldId as F;
use Role::*;
use Width::*;

/// Every known region of a pilot file, in offset order.
pub static FIELD_MAP: &[Field] = &[
    Field::new(F::Header, "header", 0, Byte, HEADER_LEN, Raw),
    Field::new(F::Rank, "rank", 2, Byte, 1, EnumCode),
    Field::new(F::Difficulty, "difficulty", 3, Byte, 1, EnumCode),
    Field::new(F::Points, "points", 4, DWord, 1, Scalar),
    Field::new(F::Level, "level", 8, Word, 1, Scalar),
    Field::new(F::SecretRank, "secret_rank", 10, Byte, 1, EnumCode),
    Field::new(F::Certificates, "certificates", 90, Byte, CRAFT_COUNT, StatusArray),
    Field::new(F::SpareCertificates, "spare_certificates", 97, Byte, SPARE_CERTIFICATES, Raw),
    // One DWORD of unused space follows each craft's counters.
    Field::new(F::SimCounters(Craft::TieFighter), "sim_tie_fighter", 520, Byte, SIM_SLOTS, CounterArray),
    Field::new(F::SimCounters(Craft::TieInterceptor), "sim_tie_interceptor", 528, Byte, SIM_SLOTS, CounterArray),
    Field::new(F::SimCounters(Craft::TieBomber), "sim_tie_bomber", 536, Byte, SIM_SLOTS, CounterArray),
    Field::new(F::SimCounters(Craft::TieAdvanced), "sim_tie_advanced", 544, Byte, SIM_SLOTS, CounterArray),
    Field::new(F::SimCounters(Craft::Gunboat), "sim_gunboat", 552, Byte, SIM_SLOTS, CounterArray),
    Field::new(F::SimCounters(Craft::TieDefender), "sim_tie_defender", 560, Byte, SIM_SLOTS, CounterArray),
    Field::new(F::SimCounters(Craft::MissileBoat), "sim_missile_boat", 568, Byte, SIM_SLOTS, CounterArray),
    Field::new(F::ActiveCampaign, "active_campaign", 616, Byte, 1, Scalar),
    Field::new(F::CampaignStatus, "campaign_status", 617, Byte, CAMPAIGN_COUNT, StatusArray),
    Field::new(F::LastMission, "last_mission", 637, Byte, CAMPAIGN_COUNT, CounterArray),
    Field::new(F::StatusCopy, "status_copy", 1628, Byte, 1, EnumCode).aliasing(F::CampaignStatus),
    Field::new(F::Kills, "kills", 1632, Word, UNIT_COUNT, CounterArray),
    Field::new(F::LasersFired, "lasers_fired", 1908, DWord, 1, Scalar),
    Field::new(F::LaserHits, "laser_hits", 1912, DWord, 1, Scalar),
    Field::new(F::WarheadsFired, "warheads_fired", 1920, Word, 1, Scalar),
    Field::new(F::WarheadHits, "warhead_hits", 1922, Word, 1, Scalar),
    Field::new(F::TrainingPoints, "training_points", 2064, DWord, TRAINING_SLOTS, CounterArray),
    Field::new(F::BattlePoints, "battle_points", 2914, DWord, BATTLE_SLOTS, CounterArray),
    Field::new(F::TotalKills, "total_kills", 3554, Word, 1, Scalar),
    // Known to be at least one byte; the second byte is a guess.
    Field::new(F::ShipsCaptured, "ships_captured", 3556, Word, 1, Scalar),
    // Last byte of the file, so it cannot be wider.
    Field::new(F::ShipsLost, "ships_lost", 3854, Byte, 1, Scalar),
];

/// Look up a field of [`FIELD_MAP`] by id.
pub fn field(id: FieldId) -> Option<&'static Field> {
    FIELD_MAP.iter().find(|f| f.id == id)
}

/// Check every entry's shape and role, that it fits in `len` bytes, and that no two entries
/// share bytes unless one of them is declared as an alias of the other.
pub fn check_layout(fields: &[Field], len: usize) -> Result<(), LayoutError> {
    for f in fields {
        f.check_shape()?;
        if f.end() > len {
            return Err(LayoutError::OutOfRange {
                field: f.name,
                end: f.end(),
                len,
            });
        }
    }
    for (i, a) in fields.iter().enumerate() {
        for b in &fields[i + 1..] {
            let aliased = a.alias_of == Some(b.id) || b.alias_of == Some(a.id);
            if a.overlaps(b) && !aliased {
                return Err(LayoutError::Overlap {
                    first: a.name,
                    second: b.name,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_map_fits_and_does_not_overlap() {
        check_layout(FIELD_MAP, FILE_LEN).expect("layout");
    }

    #[test]
    fn field_map_is_sorted_by_offset() {
        for pair in FIELD_MAP.windows(2) {
            assert!(pair[0].offset < pair[1].offset, "{} before {}", pair[0].name, pair[1].name);
        }
    }

    #[test]
    fn field_names_are_unique() {
        for (i, a) in FIELD_MAP.iter().enumerate() {
            assert!(FIELD_MAP[i + 1..].iter().all(|b| b.name != a.name), "duplicate {}", a.name);
        }
    }

    #[test]
    fn status_copy_is_declared_alias() {
        let copy = field(FieldId::StatusCopy).expect("status_copy");
        assert_eq!(copy.offset, 1628);
        assert_eq!(copy.alias_of, Some(FieldId::CampaignStatus));
    }

    #[test]
    fn simulator_counters_are_eight_bytes_apart() {
        for craft in Craft::ALL {
            let f = field(FieldId::SimCounters(craft)).expect("sim field");
            assert_eq!(f.offset, 520 + 8 * craft.index());
            assert_eq!(f.extent(), SIM_SLOTS);
        }
    }

    #[test]
    fn array_extents() {
        assert_eq!(field(FieldId::Kills).unwrap().end(), 1632 + 2 * UNIT_COUNT);
        assert_eq!(field(FieldId::TrainingPoints).unwrap().end(), 2064 + 4 * TRAINING_SLOTS);
        assert_eq!(field(FieldId::BattlePoints).unwrap().end(), 2914 + 4 * BATTLE_SLOTS);
    }

    #[test]
    fn check_layout_rejects_field_past_end() {
        let fields = [Field::new(F::TotalKills, "late_total", 3854, Word, 1, Scalar)];
        assert_eq!(
            check_layout(&fields, FILE_LEN),
            Err(LayoutError::OutOfRange { field: "late_total", end: 3856, len: FILE_LEN })
        );
    }

    #[test]
    fn check_layout_rejects_overlap_unless_aliased() {
        let a = Field::new(F::Points, "points", 4, DWord, 1, Scalar);
        let b = Field::new(F::Level, "level", 6, Word, 1, Scalar);
        assert!(matches!(check_layout(&[a, b], FILE_LEN), Err(LayoutError::Overlap { .. })));
        let b = b.aliasing(F::Points);
        assert!(check_layout(&[a, b], FILE_LEN).is_ok());
    }

    #[test]
    fn every_built_in_entry_matches_its_member_shape() {
        for f in FIELD_MAP {
            assert_eq!(f.check_shape(), Ok(()), "{}", f.name);
        }
    }

    #[test]
    fn wide_rank_is_a_shape_mismatch() {
        let f = Field::new(F::Rank, "rank", 2, Word, 1, EnumCode);
        assert_eq!(
            f.check_shape(),
            Err(LayoutError::ShapeMismatch {
                field: "rank",
                width: 2,
                count: 1,
                expected_width: 1,
                expected_count: 1,
            })
        );
    }

    #[test]
    fn short_kill_table_is_a_shape_mismatch() {
        let f = Field::new(F::Kills, "kills", 1632, Word, 3, CounterArray);
        assert!(matches!(
            f.check_shape(),
            Err(LayoutError::ShapeMismatch { expected_count: UNIT_COUNT, count: 3, .. })
        ));
    }

    #[test]
    fn enum_code_must_be_single_byte() {
        let f = Field::new(F::Level, "level", 8, Word, 1, EnumCode);
        assert_eq!(f.check_shape(), Err(LayoutError::EnumNotByte { field: "level" }));
        assert!(matches!(check_layout(&[f], FILE_LEN), Err(LayoutError::EnumNotByte { .. })));
    }

    #[test]
    fn roles_of_built_in_entries() {
        let role = |id| field(id).expect("field").role;
        for id in [F::Rank, F::Difficulty, F::SecretRank, F::StatusCopy] {
            assert_eq!(role(id), EnumCode, "{:?}", id);
        }
        assert_eq!(role(F::Header), Raw);
        assert_eq!(role(F::SpareCertificates), Raw);
        assert_eq!(role(F::Certificates), StatusArray);
        assert_eq!(role(F::CampaignStatus), StatusArray);
        assert_eq!(role(F::Kills), CounterArray);
        assert_eq!(role(F::TrainingPoints), CounterArray);
        assert_eq!(role(F::Points), Scalar);
        for f in FIELD_MAP.iter().filter(|f| f.role == EnumCode) {
            assert_eq!((f.width, f.count), (Byte, 1), "{}", f.name);
        }
    }
}
