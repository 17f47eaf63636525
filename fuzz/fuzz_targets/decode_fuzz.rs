//! Decode fuzz target: feed arbitrary bytes to the decoder and renderer.
//! Neither may panic; any input length is padded or truncated to a valid file.
//! Build with: cargo fuzz run decode_fuzz (requires nightly and cargo fuzz).

#![cfg_attr(fuzzing, no_main)]

#[cfg(fuzzing)]
use libfuzzer_sys::fuzz_target;

#[cfg(fuzzing)]
fuzz_target!(|data: &[u8]| {
    if let Ok(record) = tfrdump::decode(data) {
        let _ = tfrdump::render(&record, &tfrdump::Labels::english());
    }
});

#[cfg(not(fuzzing))]
fn main() {
    eprintln!("Build with: cargo fuzz run decode_fuzz");
}
