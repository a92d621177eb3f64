//! Presence integration tests
//!
//! Exercise the tracker, the shared registry, and the routing service
//! together, the way the chat-routing layer drives them.
//!
//! Run with: cargo test -p integration-tests --test presence_tests

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use integration_tests::{
    init_test_tracing, raw_notification_json, roster, sample_notification, sequence_numbers,
    unique_agent_id,
};
use presence_common::AppConfig;
use presence_core::{NotificationRecord, PresenceStatus, PresenceTracker};
use presence_service::{PresenceRegistry, PresenceService, Routing};

// ============================================================================
// Tracker Tests
// ============================================================================

#[test]
fn test_two_agent_scenario() {
    let mut tracker: PresenceTracker = PresenceTracker::new(["a", "b"]);
    assert!(tracker.is_online("a"));
    assert!(tracker.is_online("b"));

    assert!(tracker.set_offline("a"));
    assert!(!tracker.is_online("a"));
    assert!(tracker.is_online("b"));
    assert!(tracker.has_any_online());

    assert!(tracker.set_offline("b"));
    assert!(!tracker.has_any_online());
}

#[test]
fn test_unregistered_agent_is_online_and_empty() {
    let ids = roster(3);
    let mut tracker: PresenceTracker = PresenceTracker::new(&ids);
    let stranger = unique_agent_id();

    assert!(tracker.is_online(&stranger));
    assert_eq!(tracker.status(&stranger), PresenceStatus::Online);
    assert!(tracker.drain_pending(&stranger).is_empty());
    assert!(!tracker.set_online(&stranger));
    assert!(!tracker.set_offline(&stranger));
    assert_eq!(tracker.len(), 3);
}

#[test]
fn test_dropped_notification_not_recovered_by_registration() {
    let mut tracker: PresenceTracker = PresenceTracker::default();
    let late = unique_agent_id();

    tracker.enqueue_pending(&late, sample_notification(1));
    tracker.register_agent(late.as_str());

    assert!(tracker.drain_pending(&late).is_empty());
}

#[test]
fn test_drain_preserves_arrival_order() -> anyhow::Result<()> {
    let agent = unique_agent_id();
    let mut tracker: PresenceTracker = PresenceTracker::new([agent.as_str()]);
    tracker.set_offline(&agent);

    for seq in 1..=5 {
        tracker.enqueue_pending(&agent, sample_notification(seq));
    }

    let drained = tracker.drain_pending(&agent);
    assert_eq!(sequence_numbers(&drained)?, vec![1, 2, 3, 4, 5]);
    assert!(tracker.drain_pending(&agent).is_empty());
    Ok(())
}

// ============================================================================
// Service Tests
// ============================================================================

#[test]
fn test_json_payload_round_trips_through_queue() -> anyhow::Result<()> {
    init_test_tracing();

    let agent = unique_agent_id();
    let service: PresenceService = PresenceService::new(PresenceRegistry::new([&agent]));
    service.go_offline(&agent);

    let raw = raw_notification_json("user7", "transfer");
    let note: NotificationRecord = serde_json::from_value(raw.clone())?;
    assert_eq!(service.route(&agent, note), Routing::Queued);

    let backlog = service.come_online(&agent).unwrap_or_default();
    assert_eq!(backlog.len(), 1);
    assert_eq!(serde_json::to_value(&backlog[0])?, raw);
    Ok(())
}

#[test]
fn test_service_from_configured_roster() -> anyhow::Result<()> {
    init_test_tracing();

    let ids = roster(2);
    let joined = ids.join(",");
    let config = AppConfig::from_vars(|key| match key {
        "PRESENCE_AGENT_IDS" => Some(joined.clone()),
        "APP_ENV" => Some("staging".to_string()),
        _ => None,
    })?;

    let service: PresenceService = PresenceService::from_config(&config);
    assert_eq!(service.registry().len(), 2);

    for id in &ids {
        assert!(service.go_offline(id));
    }
    assert!(!service.has_available_agent());

    let note = sample_notification(9);
    assert_eq!(service.route(&ids[0], note.clone()), Routing::Queued);
    assert_eq!(service.come_online(&ids[0]), Some(vec![note]));
    assert!(service.has_available_agent());
    Ok(())
}

#[test]
fn test_no_notification_lost_while_agent_flaps() -> anyhow::Result<()> {
    init_test_tracing();

    let agent = unique_agent_id();
    let service: PresenceService = PresenceService::new(PresenceRegistry::new([&agent]));
    let done = Arc::new(AtomicBool::new(false));

    // Flip the agent offline and back, collecting each backlog.
    let flapper = {
        let service = service.clone();
        let agent = agent.clone();
        let done = Arc::clone(&done);
        thread::spawn(move || {
            let mut received = Vec::new();
            while !done.load(Ordering::SeqCst) {
                service.go_offline(&agent);
                thread::yield_now();
                received.extend(service.come_online(&agent).unwrap_or_default());
            }
            received
        })
    };

    let producers: Vec<_> = (0..4u64)
        .map(|worker| {
            let service = service.clone();
            let agent = agent.clone();
            thread::spawn(move || {
                let mut delivered = Vec::new();
                for i in 0..250 {
                    let note = sample_notification(worker * 1000 + i);
                    if let Some(note) = service.route(&agent, note).into_delivery() {
                        delivered.push(note);
                    }
                }
                delivered
            })
        })
        .collect();

    let mut all = Vec::new();
    for handle in producers {
        all.extend(handle.join().expect("producer panicked"));
    }
    done.store(true, Ordering::SeqCst);
    all.extend(flapper.join().expect("flapper panicked"));
    all.extend(service.registry().drain_pending(&agent));

    let mut seqs = sequence_numbers(&all)?;
    seqs.sort_unstable();
    let expected: Vec<u64> = (0..4u64)
        .flat_map(|worker| (0..250).map(move |i| worker * 1000 + i))
        .collect();
    assert_eq!(seqs, expected);
    Ok(())
}
