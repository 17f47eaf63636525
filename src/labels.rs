//! Translation of small integer codes into display labels.
//!
//! Lookups are total over the code's width: a code outside its table is reported as
//! [`UnknownCode`] instead of indexing past the table. Callers decide on a fallback label.

use crate::schema::{Craft, CRAFT_COUNT, UNIT_COUNT};
use std::fmt;

/// Which code table a lookup went to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeKind {
    Rank,
    Difficulty,
    SecretRank,
    CampaignStatus,
}

impl fmt::Display for CodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CodeKind::Rank => "rank",
            CodeKind::Difficulty => "difficulty",
            CodeKind::SecretRank => "secret rank",
            CodeKind::CampaignStatus => "campaign status",
        };
        f.write_str(s)
    }
}

/// A code that has no label in its table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind} code: {code}")]
pub struct UnknownCode {
    pub kind: CodeKind,
    pub code: u8,
}

/// Progress of one campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampaignStatus {
    Active,
    Completed,
    CapturedOrKilled,
}

impl CampaignStatus {
    pub fn from_code(code: u8) -> Result<Self, UnknownCode> {
        match code {
            1 => Ok(CampaignStatus::Active),
            3 => Ok(CampaignStatus::Completed),
            2 | 4 => Ok(CampaignStatus::CapturedOrKilled),
            _ => Err(UnknownCode {
                kind: CodeKind::CampaignStatus,
                code,
            }),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CampaignStatus::Active => "active",
            CampaignStatus::Completed => "completed",
            CampaignStatus::CapturedOrKilled => "captured or killed",
        }
    }
}

/// Medal earned for a craft's completed simulator missions.
///
/// One completion is not yet a tier. Sums above four can only come from a damaged file and
/// map to `"none"` rather than an error.
pub fn medal_tier(completions: u32) -> &'static str {
    match completions {
        2 => "bronze",
        3 => "silver",
        4 => "gold",
        _ => "none",
    }
}

pub const RANKS: [&str; 6] = ["Cadet", "Officer", "Lieutenant", "Captain", "Commander", "General"];

pub const DIFFICULTIES: [&str; 3] = ["easy", "medium", "hard"];

pub const SECRET_RANKS: [&str; 10] = [
    "None",
    "First Initiate",
    "Second Circle",
    "Third Circle",
    "Fourth Circle",
    "Inner Circle",
    "Emperor's Hand",
    "Emperor's Eyes",
    "Emperor's Voice",
    "Emperor's Reach",
];

/// Craft names as listed on certificates.
pub const CRAFT_NAMES: [&str; CRAFT_COUNT] = ["T/F", "T/I", "T/B", "T/A", "Gunboat", "T/D", "Missile Boat"];

/// Craft names as listed under medals.
pub const CRAFT_MEDAL_NAMES: [&str; CRAFT_COUNT] = ["T/F", "T/I", "T/B", "T/A", "GUN", "T/D", "Missile Boat"];

/// Kill-table names in file order. Several slots belong to craft cut from the released game.
pub const UNIT_NAMES: [&str; UNIT_COUNT] = [
    // Rebel fighters
    "X-W",
    "Y-W",
    "A-W",
    "B-W",
    // Imperial fighters
    "T/F",
    "T/I",
    "T/B",
    "T/A",
    "T/D",
    "TIE New 1",
    "TIE New 2",
    "MIS",
    "T-W",
    "Z-95",
    "R-41",
    "GUN",
    // Shuttles, transports and utility craft
    "SHU",
    "E/S",
    "SPC",
    "SCT",
    "TRN",
    "ATR",
    "ETR",
    "TUG",
    "CUV",
    // Containers and freighters
    "CN/A",
    "CN/B",
    "CN/C",
    "CN/D",
    "HLF",
    "Heavy Freighter",
    "FRT",
    "CARGO",
    "MTRN",
    "CTRN",
    "New Freighter 3",
    "MUTR",
    "CORT",
    "Millennium",
    // Capital ships
    "CRV",
    "M/CRV",
    "FRG",
    "M/FRG",
    "LINER",
    "CRCK",
    "STRKC",
    "ESC",
    "DREAD",
    "CRL",
    "INT",
    "VSD",
    "ISD",
    "Super Star Destroyer",
    // Containers
    "CN/E",
    "CN/F",
    "CN/G",
    "CN/H",
    "CN/I",
    // Platforms and stations
    "PLT/1",
    "PLT/2",
    "PLT/3",
    "PLT/4",
    "PLT/5",
    "PLT/6",
    "Station 7",
    "Station 8",
    "Station 9",
    "FAC/1",
];

/// Label tables used by the renderer.
///
/// [`Labels::english`] carries the stock tables; a caller can build another set (for instance
/// with localized unit names) and pass it to [`render`](crate::render::render).
#[derive(Debug, Clone, Copy)]
pub struct Labels {
    pub ranks: &'static [&'static str],
    pub difficulties: &'static [&'static str],
    pub secret_ranks: &'static [&'static str],
    pub craft_names: &'static [&'static str; CRAFT_COUNT],
    pub craft_medal_names: &'static [&'static str; CRAFT_COUNT],
    pub unit_names: &'static [&'static str; UNIT_COUNT],
}

impl Labels {
    pub const fn english() -> Self {
        Labels {
            ranks: &RANKS,
            difficulties: &DIFFICULTIES,
            secret_ranks: &SECRET_RANKS,
            craft_names: &CRAFT_NAMES,
            craft_medal_names: &CRAFT_MEDAL_NAMES,
            unit_names: &UNIT_NAMES,
        }
    }

    fn lookup(table: &[&'static str], kind: CodeKind, code: u8) -> Result<&'static str, UnknownCode> {
        table.get(usize::from(code)).copied().ok_or(UnknownCode { kind, code })
    }

    pub fn rank_name(&self, code: u8) -> Result<&'static str, UnknownCode> {
        Self::lookup(self.ranks, CodeKind::Rank, code)
    }

    pub fn difficulty_name(&self, code: u8) -> Result<&'static str, UnknownCode> {
        Self::lookup(self.difficulties, CodeKind::Difficulty, code)
    }

    pub fn secret_rank_name(&self, code: u8) -> Result<&'static str, UnknownCode> {
        Self::lookup(self.secret_ranks, CodeKind::SecretRank, code)
    }

    pub fn campaign_status_name(&self, code: u8) -> Result<&'static str, UnknownCode> {
        CampaignStatus::from_code(code).map(CampaignStatus::label)
    }

    pub fn craft_name(&self, craft: Craft) -> &'static str {
        self.craft_names[craft.index()]
    }

    pub fn craft_medal_name(&self, craft: Craft) -> &'static str {
        self.craft_medal_names[craft.index()]
    }
}

impl Default for Labels {
    fn default() -> Self {
        Labels::english()
    }
}
