//! Property-based tests comparing the queue against a `Vec<String>` model.
//!
//! Values are drawn from a tiny alphabet so that equal strings, and thus
//! duplicate runs and ties in sorting, show up often.

use crate::{Chain, Queue, QueueConfig};
use proptest::prelude::*;

fn strings() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-d]{0,2}", 0..40)
}

fn queue_of(values: &[String], config: QueueConfig) -> Queue {
    let mut queue = Queue::with_config(config).unwrap();
    queue.extend(values.iter().map(String::as_str));
    queue
}

fn configs() -> [QueueConfig; 2] {
    [
        QueueConfig::default(),
        QueueConfig::new().with_recursive_sort_limit(1),
    ]
}

fn reverse_k_model(values: &[String], k: usize) -> Vec<String> {
    let mut out = Vec::with_capacity(values.len());
    for chunk in values.chunks(k.max(1)) {
        if k > 1 && chunk.len() == k {
            out.extend(chunk.iter().rev().cloned());
        } else {
            out.extend(chunk.iter().cloned());
        }
    }
    out
}

fn delete_duplicates_model(values: &[String]) -> Vec<String> {
    let mut out = Vec::new();
    let mut i = 0;
    while i < values.len() {
        let mut j = i + 1;
        while j < values.len() && values[j] == values[i] {
            j += 1;
        }
        if j - i == 1 {
            out.push(values[i].clone());
        }
        i = j;
    }
    out
}

/// Keep a string only if `keep(string, best)` holds against the best string
/// to its right.
fn monotonic_model(values: &[String], keep: impl Fn(&String, &String) -> bool) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for value in values.iter().rev() {
        match out.last() {
            Some(best) if !keep(value, best) => {}
            _ => out.push(value.clone()),
        }
    }
    out.reverse();
    out
}

#[derive(Debug, Clone)]
enum Op {
    InsertHead(String),
    InsertTail(String),
    RemoveHead,
    RemoveTail,
    DeleteMiddle,
    Reverse,
    ReverseK(usize),
    SwapPairs,
    Sort(bool),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => "[a-c]{0,2}".prop_map(Op::InsertHead),
        3 => "[a-c]{0,2}".prop_map(Op::InsertTail),
        1 => Just(Op::RemoveHead),
        1 => Just(Op::RemoveTail),
        1 => Just(Op::DeleteMiddle),
        1 => Just(Op::Reverse),
        1 => (0_usize..5).prop_map(Op::ReverseK),
        1 => Just(Op::SwapPairs),
        1 => any::<bool>().prop_map(Op::Sort),
    ]
}

fn apply(queue: &mut Queue, model: &mut Vec<String>, op: Op) {
    match op {
        Op::InsertHead(value) => {
            queue.insert_head(&value).unwrap();
            model.insert(0, value);
        }
        Op::InsertTail(value) => {
            queue.insert_tail(&value).unwrap();
            model.push(value);
        }
        Op::RemoveHead => {
            let expected = if model.is_empty() {
                None
            } else {
                Some(model.remove(0))
            };
            assert_eq!(queue.remove_head(None).map(|e| e.into_value()), expected);
        }
        Op::RemoveTail => {
            assert_eq!(queue.remove_tail(None).map(|e| e.into_value()), model.pop());
        }
        Op::DeleteMiddle => {
            assert_eq!(queue.delete_middle(), !model.is_empty());
            if !model.is_empty() {
                model.remove(model.len() / 2);
            }
        }
        Op::Reverse => {
            queue.reverse();
            model.reverse();
        }
        Op::ReverseK(k) => {
            queue.reverse_k_group(k);
            *model = reverse_k_model(model, k);
        }
        Op::SwapPairs => {
            queue.swap_pairs();
            *model = reverse_k_model(model, 2);
        }
        Op::Sort(descend) => {
            queue.sort(descend);
            if descend {
                model.sort_by(|a, b| b.cmp(a));
            } else {
                model.sort();
            }
        }
    }
}

proptest! {
    #[test]
    fn sort_matches_stable_sort(values in strings(), descend in any::<bool>()) {
        let mut expected = values.clone();
        if descend {
            expected.sort_by(|a, b| b.cmp(a));
        } else {
            expected.sort();
        }
        for config in configs() {
            let mut queue = queue_of(&values, config);
            queue.sort(descend);
            prop_assert_eq!(queue.to_vec(), expected.clone());
            queue.assert_invariants();

            let keys = queue.node_keys();
            queue.sort(descend);
            prop_assert_eq!(queue.node_keys(), keys);
        }
    }

    #[test]
    fn delete_duplicates_on_sorted(mut values in strings()) {
        values.sort();
        let mut queue = queue_of(&values, QueueConfig::default());
        prop_assert_eq!(queue.delete_duplicates(), !values.is_empty());
        prop_assert_eq!(queue.to_vec(), delete_duplicates_model(&values));
        queue.assert_invariants();
    }

    #[test]
    fn reverse_k_group_matches_chunks(values in strings(), k in 0_usize..8) {
        let mut queue = queue_of(&values, QueueConfig::default());
        queue.reverse_k_group(k);
        prop_assert_eq!(queue.to_vec(), reverse_k_model(&values, k));
        queue.assert_invariants();
    }

    #[test]
    fn reverse_twice_is_identity(values in strings()) {
        let mut queue = queue_of(&values, QueueConfig::default());
        let keys = queue.node_keys();
        queue.reverse();
        let mut reversed = values.clone();
        reversed.reverse();
        prop_assert_eq!(queue.to_vec(), reversed);
        queue.reverse();
        prop_assert_eq!(queue.node_keys(), keys);
    }

    #[test]
    fn ascend_and_descend(values in strings()) {
        let mut queue = queue_of(&values, QueueConfig::default());
        let expected = monotonic_model(&values, |value, best| value <= best);
        prop_assert_eq!(queue.ascend(), expected.len());
        prop_assert_eq!(queue.to_vec(), expected);
        queue.assert_invariants();

        let mut queue = queue_of(&values, QueueConfig::default());
        let expected = monotonic_model(&values, |value, best| value >= best);
        prop_assert_eq!(queue.descend(), expected.len());
        prop_assert_eq!(queue.to_vec(), expected);
        queue.assert_invariants();
    }

    #[test]
    fn chain_merge_sorts_everything(
        queues in prop::collection::vec(strings(), 2..5),
        descend in any::<bool>(),
    ) {
        let mut chain = Chain::new();
        let mut expected = Vec::new();
        for values in &queues {
            chain.push(queue_of(values, QueueConfig::default()));
            expected.extend(values.iter().cloned());
        }
        if descend {
            expected.sort_by(|a, b| b.cmp(a));
        } else {
            expected.sort();
        }
        prop_assert_eq!(chain.merge(descend), Ok(expected.len()));
        let merged = chain.into_queues();
        prop_assert_eq!(merged[0].to_vec(), expected);
        prop_assert!(merged[1..].iter().all(Queue::is_empty));
    }

    #[test]
    fn random_operations_keep_the_ring(ops in prop::collection::vec(op(), 0..60)) {
        for config in configs() {
            let mut queue = Queue::with_config(config).unwrap();
            let mut model = Vec::new();
            for op in ops.iter().cloned() {
                apply(&mut queue, &mut model, op);
                queue.assert_invariants();
                prop_assert_eq!(queue.to_vec(), model.clone());
            }
        }
    }

    #[test]
    fn bounded_queue_never_overflows(
        max_len in 1_usize..10,
        values in strings(),
    ) {
        let mut queue = Queue::with_config(QueueConfig::new().with_max_len(max_len)).unwrap();
        let mut accepted = 0;
        for value in &values {
            if queue.insert_tail(value).is_ok() {
                accepted += 1;
            }
        }
        prop_assert_eq!(accepted, values.len().min(max_len));
        prop_assert_eq!(queue.size(), accepted);
        queue.assert_invariants();
    }
}
