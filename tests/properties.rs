//! Property tests for delivery and suppression rules.

use proptest::prelude::*;
use watchflag::{Observable, ObservableBool, ObservableConfig};

/// Values a set sequence actually changes to, starting from `initial`.
fn changes(initial: bool, sets: &[bool]) -> Vec<bool> {
    let mut current = initial;
    let mut out = Vec::new();
    for &value in sets {
        if value != current {
            current = value;
            out.push(value);
        }
    }
    out
}

proptest! {
    #[test]
    fn prop_duplicate_set_never_notifies(initial in any::<bool>(), sets in prop::collection::vec(any::<bool>(), 0..64)) {
        let flag = ObservableBool::new(initial);
        let sub = flag.subscribe().unwrap();

        for value in sets {
            let before = flag.get();
            let changed = flag.set(value);
            prop_assert_eq!(changed, before != value);
            prop_assert_eq!(flag.get(), value);

            if changed {
                prop_assert_eq!(sub.try_recv().unwrap(), Some(value));
            } else {
                prop_assert_eq!(sub.try_recv().unwrap(), None);
            }
        }
    }

    #[test]
    fn prop_draining_subscriber_sees_all_changes(initial in any::<bool>(), sets in prop::collection::vec(any::<bool>(), 0..64)) {
        let flag = ObservableBool::new(initial);
        let sub = flag.subscribe().unwrap();

        let mut received = Vec::new();
        for &value in &sets {
            flag.set(value);
            if let Some(v) = sub.try_recv().unwrap() {
                received.push(v);
            }
        }

        prop_assert_eq!(received, changes(initial, &sets));
        prop_assert_eq!(flag.stats().dropped, 0);
    }

    #[test]
    fn prop_stalled_subscriber_keeps_earliest_changes(
        buffer_size in 1usize..6,
        sets in prop::collection::vec(0u8..4, 0..32),
    ) {
        let counter = Observable::with_config(0u8, ObservableConfig::with_buffer_size(buffer_size)).unwrap();
        let sub = counter.subscribe().unwrap();

        let mut expected = Vec::new();
        let mut current = 0u8;
        for &value in &sets {
            counter.set(value);
            if value != current {
                current = value;
                expected.push(value);
            }
        }
        let total = expected.len();
        expected.truncate(buffer_size);

        let received: Vec<u8> = std::iter::from_fn(|| sub.try_recv().unwrap()).collect();
        prop_assert_eq!(&received, &expected);

        let stats = counter.stats();
        prop_assert_eq!(stats.transitions as usize, total);
        prop_assert_eq!(stats.dropped as usize, total - received.len());
    }

    #[test]
    fn prop_late_subscriber_sees_only_later_changes(
        before in prop::collection::vec(any::<bool>(), 0..16),
        after in prop::collection::vec(any::<bool>(), 0..16),
    ) {
        let flag = ObservableBool::new(false);
        for &value in &before {
            flag.set(value);
        }

        let late = flag.subscribe().unwrap();
        prop_assert_eq!(late.try_recv().unwrap(), None);

        let mut received = Vec::new();
        for &value in &after {
            flag.set(value);
            if let Some(v) = late.try_recv().unwrap() {
                received.push(v);
            }
        }

        let current = flag.get();
        let mut all = before.clone();
        all.extend_from_slice(&after);
        prop_assert_eq!(current, all.last().copied().unwrap_or(false));

        let start = before.last().copied().unwrap_or(false);
        prop_assert_eq!(received, changes(start, &after));
    }
}
