//! Fuzz target: `telemetry::decode_frame`
//!
//! Arbitrary bytes must either decode to a snapshot that re-encodes into
//! a frame, or be rejected.  Never a panic.
//!
//! cargo fuzz run fuzz_frame_decode

#![no_main]

use irrigator::telemetry;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(snap) = telemetry::decode_frame(data) {
        let frame = telemetry::encode_frame(&snap).expect("decoded snapshot must re-encode");
        assert_eq!(telemetry::decode_frame(&frame).ok(), Some(snap));
    }
});
