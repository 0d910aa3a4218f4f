use std::time::Duration;

use clipwatch::{MemoryClipboard, MonitorController, MonitorSettings, Payload};

fn test_settings() -> MonitorSettings {
    MonitorSettings {
        capacity: 2,
        preview_height: 10,
        poll_interval_ms: 100,
    }
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Let the monitor observe at least one tick. Paused tokio time auto-advances
/// while the test sleeps, so this is deterministic.
async fn settle() {
    tokio::time::sleep(Duration::from_millis(150)).await;
}

#[tokio::test(start_paused = true)]
async fn monitor_builds_bounded_deduplicated_history() {
    init_logging();
    let clipboard = MemoryClipboard::new();
    let mut controller = MonitorController::new(&test_settings());
    controller.start(clipboard.clone(), &test_settings()).unwrap();

    // empty clipboard: nothing observed
    settle().await;
    assert!(controller.history_snapshot().is_empty());

    clipboard.set(Some(Payload::Text("a".into())));
    settle().await;
    assert_eq!(titles(&controller), ["a"]);

    // unchanged content across many ticks never grows the history
    tokio::time::sleep(Duration::from_millis(500)).await;
    assert_eq!(titles(&controller), ["a"]);

    clipboard.set(Some(Payload::Text("b".into())));
    settle().await;
    assert_eq!(titles(&controller), ["b", "a"]);

    // capacity 2: inserting a third evicts the oldest
    clipboard.set(Some(Payload::Text("c".into())));
    settle().await;
    assert_eq!(titles(&controller), ["c", "b"]);

    controller.stop().await.unwrap();
    assert!(!controller.is_running());
}

#[tokio::test(start_paused = true)]
async fn restore_writes_back_and_resurfaces_the_entry() {
    init_logging();
    let clipboard = MemoryClipboard::new();
    let mut controller = MonitorController::new(&test_settings());
    controller.start(clipboard.clone(), &test_settings()).unwrap();

    clipboard.set(Some(Payload::Text("old".into())));
    settle().await;
    clipboard.set(Some(Payload::Text("new".into())));
    settle().await;
    assert_eq!(titles(&controller), ["new", "old"]);

    let old_id = controller.history_snapshot()[1].id;
    controller.restore(old_id).unwrap();
    assert_eq!(clipboard.current(), Some(Payload::Text("old".into())));

    // the restored payload is a genuine change versus the newest entry
    settle().await;
    assert_eq!(titles(&controller), ["old", "new"]);

    controller.stop().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn double_start_is_rejected() {
    init_logging();
    let mut controller = MonitorController::new(&test_settings());
    controller
        .start(MemoryClipboard::new(), &test_settings())
        .unwrap();
    assert!(controller
        .start(MemoryClipboard::new(), &test_settings())
        .is_err());
    controller.stop().await.unwrap();
}

fn titles(controller: &MonitorController) -> Vec<String> {
    controller
        .history_snapshot()
        .iter()
        .map(|v| v.title.clone())
        .collect()
}
