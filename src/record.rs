//! Decoded pilot record.

use crate::schema::{
    Craft, BATTLE_SLOTS, CAMPAIGN_COUNT, CERTIFICATE_COMPLETED, CRAFT_COUNT, HEADER_LEN, SIM_SLOTS,
    SPARE_CERTIFICATES, TRAINING_SLOTS, UNIT_COUNT,
};

/// One decoded pilot file.
///
/// Pure data: enum-coded members (`rank`, `difficulty`, `secret_rank`, status codes) keep the
/// raw code and are translated by [`Labels`](crate::labels::Labels) at render time. Arrays keep
/// every slot in file order, zeros included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// First two bytes; purpose unknown.
    pub header: [u8; HEADER_LEN],
    pub rank: u8,
    pub difficulty: u8,
    pub points: u32,
    pub level: u16,
    pub secret_rank: u8,
    /// Per craft, [`CERTIFICATE_COMPLETED`] once earned. Fresh pilots hold 2.
    pub certificates: [u8; CRAFT_COUNT],
    /// Certificate slots the game never uses.
    pub spare_certificates: [u8; SPARE_CERTIFICATES],
    /// Simulator missions per craft, 1 per completed mission.
    pub sim_counters: [[u8; SIM_SLOTS]; CRAFT_COUNT],
    /// Zero-based index of the campaign in progress.
    pub active_campaign: u8,
    pub campaign_status: [u8; CAMPAIGN_COUNT],
    /// Highest mission reached per campaign.
    pub last_mission: [u8; CAMPAIGN_COUNT],
    /// Later copy of the active campaign status. Not reconciled with `campaign_status`.
    pub status_copy: u8,
    /// Kills per unit, index-aligned with the unit-name table.
    pub kills: [u16; UNIT_COUNT],
    pub lasers_fired: u32,
    pub laser_hits: u32,
    pub warheads_fired: u16,
    pub warhead_hits: u16,
    /// Zero means the mission was never flown.
    pub training_points: [u32; TRAINING_SLOTS],
    /// Zero means the mission was never flown.
    pub battle_points: [u32; BATTLE_SLOTS],
    pub total_kills: u16,
    pub ships_captured: u16,
    pub ships_lost: u8,
}

impl Record {
    /// A record with every member zero, as decoded from a freshly created pilot.
    pub fn zeroed() -> Self {
        Record {
            header: [0; HEADER_LEN],
            rank: 0,
            difficulty: 0,
            points: 0,
            level: 0,
            secret_rank: 0,
            certificates: [0; CRAFT_COUNT],
            spare_certificates: [0; SPARE_CERTIFICATES],
            sim_counters: [[0; SIM_SLOTS]; CRAFT_COUNT],
            active_campaign: 0,
            campaign_status: [0; CAMPAIGN_COUNT],
            last_mission: [0; CAMPAIGN_COUNT],
            status_copy: 0,
            kills: [0; UNIT_COUNT],
            lasers_fired: 0,
            laser_hits: 0,
            warheads_fired: 0,
            warhead_hits: 0,
            training_points: [0; TRAINING_SLOTS],
            battle_points: [0; BATTLE_SLOTS],
            total_kills: 0,
            ships_captured: 0,
            ships_lost: 0,
        }
    }

    pub fn has_certificate(&self, craft: Craft) -> bool {
        self.certificates[craft.index()] == CERTIFICATE_COMPLETED
    }

    /// Completed simulator missions for `craft`; input to [`medal_tier`](crate::labels::medal_tier).
    pub fn sim_completions(&self, craft: Craft) -> u32 {
        self.sim_counters[craft.index()].iter().map(|&c| u32::from(c)).sum()
    }
}

impl Default for Record {
    fn default() -> Self {
        Record::zeroed()
    }
}
