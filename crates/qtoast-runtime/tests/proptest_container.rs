//! Property tests for the toast container.
//!
//! 1. Grouping keeps every record exactly once, in emission order per group.
//! 2. Removing any id any number of times leaves exactly the other records.
//! 3. No toast ever has more than one pending timer.
//! 4. Without hover, every toast is eventually removed exactly once.

use std::collections::HashSet;
use std::time::Duration;

use proptest::prelude::*;
use qtoast_core::{ToastOptions, ToastPosition};
use qtoast_runtime::ToastSimulator;

#[derive(Debug, Clone)]
enum Op {
    Emit(ToastPosition),
    Advance(u64),
    Enter(usize),
    Leave(usize),
    Close(usize),
    Hide(usize),
    Remove(usize),
}

fn position_strategy() -> impl Strategy<Value = ToastPosition> {
    prop::sample::select(ToastPosition::ALL.to_vec())
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => position_strategy().prop_map(Op::Emit),
        3 => (0u64..4000).prop_map(Op::Advance),
        1 => any::<usize>().prop_map(Op::Enter),
        1 => any::<usize>().prop_map(Op::Leave),
        1 => any::<usize>().prop_map(Op::Close),
        1 => any::<usize>().prop_map(Op::Hide),
        1 => any::<usize>().prop_map(Op::Remove),
    ]
}

/// Apply `op`; index-based ops pick among the current toasts.
fn apply(sim: &mut ToastSimulator, op: &Op) {
    let ids = sim.container().ids();
    let pick = |i: usize| ids.get(i % ids.len().max(1)).copied();
    match *op {
        Op::Emit(position) => {
            sim.bus()
                .show("p", ToastOptions::new().position(position));
        }
        Op::Advance(ms) => {
            sim.advance(Duration::from_millis(ms));
        }
        Op::Enter(i) => {
            if let Some(id) = pick(i) {
                sim.container_mut().mouse_enter(id);
            }
        }
        Op::Leave(i) => {
            if let Some(id) = pick(i) {
                sim.container_mut().mouse_leave(id);
            }
        }
        Op::Close(i) => {
            if let Some(id) = pick(i) {
                sim.container_mut().close(id);
            }
        }
        Op::Hide(i) => {
            if let Some(id) = pick(i) {
                sim.container_mut().set_show(id, false);
            }
        }
        Op::Remove(i) => {
            if let Some(id) = pick(i) {
                sim.container_mut().remove(id);
            }
        }
    }
}

proptest! {
    #[test]
    fn grouping_preserves_records_and_order(
        positions in prop::collection::vec(position_strategy(), 0..40)
    ) {
        let sim = ToastSimulator::new();
        for position in &positions {
            sim.bus().info("g", ToastOptions::new().position(*position));
        }
        let records = sim.container().records();
        let groups = sim.container().groups();
        prop_assert_eq!(groups.total(), positions.len());

        for group in &groups {
            let expected: Vec<_> = records
                .iter()
                .filter(|r| r.position == group.position)
                .map(|r| r.id)
                .collect();
            let actual: Vec<_> = group.items.iter().map(|r| r.id).collect();
            prop_assert_eq!(actual, expected);
        }

        let ids: HashSet<_> = records.iter().map(|r| r.id).collect();
        prop_assert_eq!(ids.len(), positions.len());
    }

    #[test]
    fn repeated_removal_is_idempotent(
        count in 1usize..20,
        removals in prop::collection::vec((any::<usize>(), 1usize..4), 0..20)
    ) {
        let mut sim = ToastSimulator::new();
        for _ in 0..count {
            sim.bus().success("r", ToastOptions::new());
        }
        let ids = sim.container().ids();
        let mut removed = HashSet::new();
        for (index, times) in removals {
            let id = ids[index % ids.len()];
            for _ in 0..times {
                sim.container_mut().remove(id);
            }
            removed.insert(id);
        }
        let expected: Vec<_> = ids.iter().copied().filter(|id| !removed.contains(id)).collect();
        prop_assert_eq!(sim.container().ids(), expected);
    }

    #[test]
    fn at_most_one_timer_per_toast(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut sim = ToastSimulator::new();
        for op in &ops {
            apply(&mut sim, op);
            prop_assert!(sim.container().pending_timers() <= sim.container().len());
        }
    }

    #[test]
    fn unhovered_toasts_are_removed_exactly_once(
        positions in prop::collection::vec(position_strategy(), 1..15),
        gaps in prop::collection::vec(0u64..5000, 1..15)
    ) {
        let mut sim = ToastSimulator::new();
        let mut finished = Vec::new();
        for (position, gap) in positions.iter().zip(gaps.iter().cycle()) {
            sim.bus().warning("w", ToastOptions::new().position(*position));
            finished.extend(sim.advance(Duration::from_millis(*gap)));
        }
        let emitted = positions.len();
        finished.extend(sim.settle());

        prop_assert!(sim.container().is_empty());
        prop_assert_eq!(finished.len(), emitted);
        let unique: HashSet<_> = finished.iter().copied().collect();
        prop_assert_eq!(unique.len(), emitted);
    }
}
