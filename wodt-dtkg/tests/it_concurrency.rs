//! Readers serializing while a writer updates

mod support;

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use support::{lamp_engine, modified_properties, properties, LAMP_DTKG};

#[test]
fn readers_never_observe_partial_updates() {
    let engine = lamp_engine();

    // Text after updating luminosity only
    let luminosity_changed = {
        let probe = lamp_engine();
        probe
            .update_property(&modified_properties()[0], &properties()[0])
            .unwrap();
        probe.current_dtkg()
    };

    let done = AtomicBool::new(false);
    thread::scope(|s| {
        s.spawn(|| {
            for _ in 0..200 {
                engine
                    .update_property(&modified_properties()[0], &properties()[0])
                    .unwrap();
                engine
                    .update_property(&properties()[0], &modified_properties()[0])
                    .unwrap();
            }
            done.store(true, Ordering::SeqCst);
        });

        for _ in 0..4 {
            s.spawn(|| {
                while !done.load(Ordering::SeqCst) {
                    let text = engine.current_dtkg();
                    assert!(
                        text == LAMP_DTKG || text == luminosity_changed,
                        "torn read:\n{text}"
                    );
                }
            });
        }
    });

    assert_eq!(engine.current_dtkg(), LAMP_DTKG);
}
