//! # tfrdump: TIE Fighter pilot file decoder
//!
//! Decodes the fixed-layout `.TFR` pilot save files written by TIE Fighter and renders them as
//! text.
//!
//! ## File format
//!
//! - Always 3855 bytes. A newly created pilot is all zeros; shorter input is zero-padded.
//! - No header, tags or checksum: every value lives at a documented offset ([`FIELD_MAP`]).
//! - Integers are 1, 2 or 4 bytes, unsigned, with the byte at the highest offset most
//!   significant ([`reader`]).
//! - Some ranges have unknown purpose, so the decoder is read-only; there is no encoder.
//!
//! ## Pipeline
//!
//! ```text
//! bytes -> ByteSource (pad to 3855) -> decode (FIELD_MAP) -> Record -> render (Labels) -> lines
//! ```
//!
//! ## Usage
//!
//! ```no_run
//! use tfrdump::{decode, render, Labels};
//!
//! let bytes = std::fs::read("PILOT.TFR")?;
//! let record = decode(&bytes)?;
//! for line in render(&record, &Labels::english()) {
//!     println!("{}", line);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod decode;
pub mod labels;
pub mod reader;
pub mod record;
pub mod render;
pub mod schema;
pub mod source;

pub use decode::{decode, decode_source, decode_with, DecodeError};
pub use labels::{medal_tier, CampaignStatus, CodeKind, Labels, UnknownCode};
pub use record::Record;
pub use render::render;
pub use schema::{check_layout, Craft, Field, FieldId, LayoutError, Role, Width, FIELD_MAP, FILE_LEN};
pub use source::ByteSource;
