//! Tests for listeners that call back into the emitter during `emit`.

use std::sync::Arc;

use fp_emitter::{create_emitter, Emitter, Listener};

use crate::{entries, make_log, recorder};

#[test]
fn listener_added_during_emit_runs_from_next_emit() {
    let emitter: Emitter<()> = create_emitter();
    let log = make_log();
    {
        let weak = emitter.downgrade();
        let log = Arc::clone(&log);
        emitter.on(
            "x",
            Listener::new(move |_| {
                log.lock().unwrap().push("first".to_string());
                if let Some(emitter) = weak.upgrade() {
                    emitter.on("x", recorder(&log, "late"));
                }
            }),
        );
    }

    emitter.emit("x", &());
    assert_eq!(entries(&log), vec!["first"]);

    emitter.emit("x", &());
    assert_eq!(entries(&log), vec!["first", "first", "late"]);
}

#[test]
fn listener_removed_during_emit_still_runs_that_round() {
    let emitter: Emitter<()> = create_emitter();
    let log = make_log();
    let victim = recorder(&log, "victim");
    {
        let weak = emitter.downgrade();
        let victim = victim.clone();
        emitter.on(
            "x",
            Listener::new(move |_| {
                if let Some(emitter) = weak.upgrade() {
                    emitter.off("x", &victim);
                }
            }),
        );
    }
    emitter.on("x", victim.clone());

    emitter.emit("x", &());
    assert_eq!(entries(&log), vec!["victim"]);

    emitter.emit("x", &());
    assert_eq!(entries(&log), vec!["victim"]);
}

#[test]
fn listener_may_clear_its_own_event() {
    let emitter: Emitter<()> = create_emitter();
    let log = make_log();
    {
        let weak = emitter.downgrade();
        emitter.on(
            "x",
            Listener::new(move |_| {
                if let Some(emitter) = weak.upgrade() {
                    emitter.clear("x");
                }
            }),
        );
    }
    emitter.on("x", recorder(&log, "second"));

    emitter.emit("x", &());
    emitter.emit("x", &());

    assert_eq!(entries(&log), vec!["second"]);
}

#[test]
fn listener_may_emit_another_event() {
    let emitter: Emitter<u32> = create_emitter();
    let log = make_log();
    {
        let weak = emitter.downgrade();
        emitter.on(
            "outer",
            Listener::new(move |n: &u32| {
                if let Some(emitter) = weak.upgrade() {
                    emitter.emit("inner", &(n + 1));
                }
            }),
        );
    }
    {
        let log = Arc::clone(&log);
        emitter.on(
            "inner",
            Listener::new(move |n: &u32| log.lock().unwrap().push(format!("inner:{n}"))),
        );
    }

    emitter.emit("outer", &1);

    assert_eq!(entries(&log), vec!["inner:2"]);
}

// ============================================================================
// Handle lifetimes
// ============================================================================

#[test]
fn weak_handle_in_listener_does_not_keep_emitter_alive() {
    let emitter: Emitter<()> = create_emitter();
    let log = make_log();
    let weak = emitter.downgrade();
    {
        let weak = weak.clone();
        let log = Arc::clone(&log);
        emitter.on(
            "x",
            Listener::new(move |_| {
                if weak.upgrade().is_some() {
                    log.lock().unwrap().push("alive".to_string());
                }
            }),
        );
    }
    emitter.emit("x", &());
    assert_eq!(Arc::strong_count(&log), 2);

    drop(emitter);

    assert!(weak.upgrade().is_none());
    assert_eq!(Arc::strong_count(&log), 1, "listener should be freed");
    assert_eq!(entries(&log), vec!["alive"]);
}

#[test]
fn strong_handle_in_listener_is_freed_only_after_removal() {
    let emitter: Emitter<()> = create_emitter();
    let weak = emitter.downgrade();
    {
        let handle = emitter.clone();
        emitter.on(
            "x",
            Listener::new(move |_| {
                handle.emit("y", &());
            }),
        );
    }

    drop(emitter);
    let leaked = weak.upgrade();
    assert!(leaked.is_some(), "listener's own handle keeps the emitter alive");

    if let Some(leaked) = leaked {
        leaked.destroy();
    }
    assert!(weak.upgrade().is_none());
}

#[test]
fn upgraded_handle_shares_state() {
    let emitter: Emitter<()> = create_emitter();
    let log = make_log();
    let upgraded = emitter.downgrade().upgrade().unwrap();

    upgraded.on("x", recorder(&log, "a"));
    emitter.emit("x", &());

    assert_eq!(entries(&log), vec!["a"]);
}
