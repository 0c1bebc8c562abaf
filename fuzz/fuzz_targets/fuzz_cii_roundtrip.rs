#![no_main]

use belegwandler::cii::Context;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decode → convert → convert back → decode must not panic at any step.
    if let Ok(invoice) = belegwandler::ctog::convert_to_invoice(data) {
        if let Ok(xml) = belegwandler::gtoc::convert_to_cii(&invoice, Context::En16931) {
            let _ = belegwandler::ctog::convert_to_invoice(xml.as_bytes());
        }
    }
});
