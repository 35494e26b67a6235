use super::*;

use tokio::time::{Duration, timeout};

#[tokio::test]
async fn relay_starts_disconnected() {
    let relay = Relay::new(4);
    assert!(!relay.is_connected());
}

#[tokio::test]
async fn lease_marks_connected_until_dropped() {
    let relay = Relay::new(4);
    let lease = relay.lease().await;
    assert!(relay.is_connected());
    drop(lease);
    assert!(!relay.is_connected());
}

#[tokio::test]
async fn messages_arrive_in_enqueue_order() {
    let relay = Relay::new(4);
    let (first, _rx1) = PendingChat::new("one".into(), None);
    let (second, _rx2) = PendingChat::new("two".into(), Some("10.0.0.1".into()));
    relay.enqueue(first).await.unwrap();
    relay.enqueue(second).await.unwrap();

    let mut lease = relay.lease().await;
    assert_eq!(lease.next().await.unwrap().content, "one");
    let next = lease.next().await.unwrap();
    assert_eq!(next.content, "two");
    assert_eq!(next.source.as_deref(), Some("10.0.0.1"));
}

#[tokio::test]
async fn abandoned_messages_are_skipped() {
    let relay = Relay::new(4);
    let (gone, gone_rx) = PendingChat::new("gone".into(), None);
    let (kept, _kept_rx) = PendingChat::new("kept".into(), None);
    relay.enqueue(gone).await.unwrap();
    relay.enqueue(kept).await.unwrap();
    drop(gone_rx);

    let mut lease = relay.lease().await;
    assert_eq!(lease.next().await.unwrap().content, "kept");
}

#[tokio::test]
async fn answer_reaches_requester() {
    let (pending, rx) = PendingChat::new("hi".into(), None);
    assert!(!pending.is_abandoned());
    assert!(pending.answer("hello".into()));
    assert_eq!(rx.await.unwrap(), "hello");
}

#[tokio::test]
async fn answer_after_requester_left_reports_false() {
    let (pending, rx) = PendingChat::new("hi".into(), None);
    drop(rx);
    assert!(pending.is_abandoned());
    assert!(!pending.answer("late".into()));
}

#[tokio::test]
async fn dropped_pending_fails_requester() {
    let (pending, rx) = PendingChat::new("hi".into(), None);
    drop(pending);
    assert!(rx.await.is_err());
}

#[tokio::test]
async fn second_lease_waits_for_first() {
    let relay = Relay::new(4);
    let first = relay.lease().await;

    let waiter = {
        let relay = relay.clone();
        tokio::spawn(async move { relay.lease().await })
    };
    tokio::task::yield_now().await;
    assert!(!waiter.is_finished());

    drop(first);
    let second = timeout(Duration::from_millis(500), waiter).await.unwrap().unwrap();
    assert!(relay.is_connected());
    drop(second);
    assert!(!relay.is_connected());
}

#[tokio::test]
async fn next_is_cancel_safe() {
    let relay = Relay::new(4);
    let mut lease = relay.lease().await;
    assert!(timeout(Duration::from_millis(20), lease.next()).await.is_err());

    let (pending, _rx) = PendingChat::new("after".into(), None);
    relay.enqueue(pending).await.unwrap();
    assert_eq!(lease.next().await.unwrap().content, "after");
}
