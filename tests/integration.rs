// SPDX-License-Identifier: MPL-2.0
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::tempdir;
use tiny_toast::config::{self, Config, ToastConfig};
use tiny_toast::notifications::{
    DismissReason, Event, ManualClock, Manager, Phase, Position, RawOptions, ToastOptions,
    Variant,
};
use tiny_toast::snippet;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn manager() -> (Manager<String>, ManualClock) {
    let clock = ManualClock::new();
    (Manager::with_clock(clock.clone()), clock)
}

#[test]
fn scenario_timeout_without_delay() {
    let (mut manager, clock) = manager();
    let id = manager.show("A".into(), ToastOptions::new().timeout(ms(2000)).delay(ms(0)));

    clock.advance_ms(1999);
    manager.poll();
    assert_eq!(manager.phase(id), Some(Phase::Active));

    clock.advance_ms(2);
    manager.poll();
    assert!(manager.get(id).is_none());
}

#[test]
fn scenario_delay_then_timeout() {
    let (mut manager, clock) = manager();
    let id = manager.show("B".into(), ToastOptions::new().delay(ms(500)).timeout(ms(1000)));

    clock.advance_ms(400);
    manager.poll();
    assert_eq!(manager.phase(id), Some(Phase::Delayed));
    assert_eq!(manager.visible().count(), 0);

    clock.advance_ms(200);
    manager.poll();
    assert_eq!(manager.phase(id), Some(Phase::Active));

    clock.advance_ms(1000);
    manager.poll();
    assert!(manager.is_empty());
}

#[test]
fn scenario_remove_immediately() {
    let (mut manager, _) = manager();
    let id = manager.show("C".into(), ToastOptions::new());
    manager.remove(id);
    assert_eq!(manager.len(), 0);
}

#[test]
fn sticky_toast_stays_until_removed() {
    let (mut manager, clock) = manager();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    manager.subscribe(move |event| sink.lock().unwrap().push(*event));

    let id = manager.show(
        "Click cross icon to remove the toast.".into(),
        ToastOptions::new().pause(true).class_name("custom-react-tiny-toast"),
    );
    clock.advance(Duration::from_secs(3600));
    manager.poll();
    assert!(manager.contains(id));
    assert_eq!(
        manager.get(id).and_then(|n| n.class_name()),
        Some("custom-react-tiny-toast")
    );

    manager.remove(id);
    assert_eq!(
        seen.lock().unwrap().last(),
        Some(&Event::Dismissed {
            id,
            reason: DismissReason::Removed
        })
    );
}

#[test]
fn form_input_round_trip_through_manager() {
    let (mut manager, _) = manager();
    let raw = RawOptions {
        timeout_ms: Some(2000),
        variant: Some("warning".into()),
        position: Some("bottom-left".into()),
        unique_code: Some("upload".into()),
        ..RawOptions::default()
    };
    let first = manager
        .try_show("Upload pending".into(), raw.clone())
        .expect("valid form input");
    let second = manager
        .try_show("Upload pending".into(), raw)
        .expect("valid form input");

    assert_eq!(first, second);
    let notification = manager.get(first).unwrap();
    assert_eq!(notification.variant(), Variant::Warning);
    assert_eq!(notification.position(), Position::BottomLeft);
}

#[test]
fn config_defaults_flow_into_manager() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config = Config {
        toast: ToastConfig {
            timeout_ms: Some(0),
            variant: Some(Variant::Info),
            position: Some(Position::BottomCenter),
        },
        ..Config::default()
    };
    config::save_with_override(&config, Some(dir.path().to_path_buf()))
        .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let clock = ManualClock::new();
    let mut manager: Manager<&str> =
        Manager::with_clock(clock.clone()).with_defaults(loaded.toast.to_defaults());
    let id = manager.show("from config", ToastOptions::new());
    clock.advance(Duration::from_secs(600));
    manager.poll();

    let notification = manager.get(id).expect("zero timeout keeps the toast");
    assert_eq!(notification.variant(), Variant::Info);
    assert_eq!(notification.position(), Position::BottomCenter);

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn snippet_matches_shown_options() {
    let options = ToastOptions::new()
        .timeout(ms(2000))
        .variant(Variant::Success)
        .position(Position::TopCenter);
    let code = snippet::render("Toast which dismisses in 2000 ms", &options);
    assert!(code.starts_with("let id = manager.show("));
    assert!(code.contains(".variant(Variant::Success)"));
    assert!(code.contains(".position(Position::TopCenter),"));
}
