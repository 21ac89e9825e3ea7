//! Telemetry encoding for state snapshots.
//!
//! Two renderings of [`StateSnapshot`]: a compact postcard frame for a
//! binary serial link and a JSON line for human-readable consoles.

use heapless::Vec;

use crate::app::events::StateSnapshot;
use crate::error::{Error, Result};

/// Upper bound on an encoded snapshot frame.
pub const FRAME_CAPACITY: usize = 64;

/// Encode `snap` into a postcard frame.
pub fn encode_frame(snap: &StateSnapshot) -> Result<Vec<u8, FRAME_CAPACITY>> {
    let mut buf = [0u8; FRAME_CAPACITY];
    let used = postcard::to_slice(snap, &mut buf)
        .map_err(|_| Error::Telemetry("snapshot does not fit frame"))?;
    Vec::from_slice(used).map_err(|()| Error::Telemetry("snapshot does not fit frame"))
}

pub fn decode_frame(frame: &[u8]) -> Result<StateSnapshot> {
    postcard::from_bytes(frame).map_err(|_| Error::Telemetry("malformed frame"))
}

/// Render `snap` as a single JSON object.
pub fn to_json_line(snap: &StateSnapshot) -> Result<String> {
    serde_json::to_string(snap).map_err(|_| Error::Telemetry("JSON encoding failed"))
}
