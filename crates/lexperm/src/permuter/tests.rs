use crate::{next_permutation, Error, Permuter, PermuteStatus, SortedSet};

fn factorial(n: usize) -> usize {
    (1..=n).product()
}

fn drain(set: SortedSet) -> Vec<Vec<i64>> {
    Permuter::new(set).into_iter().collect()
}

#[test]
fn successor_chain_for_three_elements() {
    // Input order must not matter; the permuter starts from the sorted
    // arrangement.
    let set = SortedSet::new(vec![2, 1, 3]).unwrap();
    let mut permuter = Permuter::new(set);
    assert_eq!(permuter.current(), &[1, 2, 3]);

    let expected: [&[i64]; 5] = [
        &[1, 3, 2],
        &[2, 1, 3],
        &[2, 3, 1],
        &[3, 1, 2],
        &[3, 2, 1],
    ];
    for want in expected {
        assert_eq!(permuter.advance(), PermuteStatus::Ready);
        assert_eq!(permuter.current(), want);
    }

    assert_eq!(permuter.advance(), PermuteStatus::Exhausted);
    assert_eq!(permuter.current(), &[3, 2, 1]);
}

#[test]
fn exhaustion_is_terminal() {
    let set = SortedSet::new(vec![0, 1]).unwrap();
    let mut permuter = Permuter::new(set);
    assert_eq!(permuter.advance(), PermuteStatus::Ready);
    assert_eq!(permuter.advance(), PermuteStatus::Exhausted);
    assert_eq!(permuter.advance(), PermuteStatus::Exhausted);
}

#[test]
fn empty_set_has_no_successors() {
    let set = SortedSet::new(vec![]).unwrap();
    assert!(drain(set).is_empty());
}

#[test]
fn single_element_has_no_successors() {
    let set = SortedSet::new(vec![7]).unwrap();
    assert!(drain(set).is_empty());
}

#[test]
fn successor_count_is_factorial_minus_one() {
    for n in 0..=6 {
        let set = SortedSet::new((0..n as i64).collect()).unwrap();
        let count = Permuter::new(set).into_iter().count();
        assert_eq!(count, factorial(n).saturating_sub(1), "n = {n}");
    }
}

#[test]
fn chain_is_strictly_increasing_without_gaps() {
    let set = SortedSet::new(vec![0, 1, 2, 3]).unwrap();
    let chain = drain(set);
    assert_eq!(chain.len(), factorial(4) - 1);

    let mut prev = vec![0, 1, 2, 3];
    for seq in &chain {
        assert!(seq > &prev, "{seq:?} not greater than {prev:?}");
        prev = seq.clone();
    }

    // Every arrangement is a rearrangement of the same elements.
    for seq in &chain {
        let mut sorted = seq.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, [0, 1, 2, 3]);
    }
}

#[test]
fn raw_step_matches_two_element_chain() {
    let mut seq = [1, 2];
    assert_eq!(next_permutation(&mut seq), PermuteStatus::Ready);
    assert_eq!(seq, [2, 1]);
    assert_eq!(next_permutation(&mut seq), PermuteStatus::Exhausted);
    assert_eq!(seq, [2, 1]);
}

#[test]
fn raw_step_leaves_maximal_sequence_untouched() {
    let mut seq = [5, 3, 1];
    assert_eq!(next_permutation(&mut seq), PermuteStatus::Exhausted);
    assert_eq!(seq, [5, 3, 1]);
}

#[test]
fn set_rejects_negative_values() {
    assert_eq!(
        SortedSet::new(vec![-1, 2]),
        Err(Error::NegativeElement { value: -1 })
    );
}

#[test]
fn set_rejects_duplicates() {
    assert_eq!(
        SortedSet::new(vec![1, 1]),
        Err(Error::DuplicateElement { value: 1 })
    );
    assert_eq!(
        SortedSet::new(vec![3, 1, 2, 1]),
        Err(Error::DuplicateElement { value: 1 })
    );
}

#[test]
fn set_sorts_ascending() {
    let set = SortedSet::new(vec![9, 4, 0, 2]).unwrap();
    assert_eq!(set.as_slice(), &[0, 2, 4, 9]);
    assert_eq!(set.len(), 4);
    assert!(!set.is_empty());
}

#[test]
fn empty_set_is_valid() {
    let set = SortedSet::new(vec![]).unwrap();
    assert!(set.is_empty());
    assert_eq!(set.len(), 0);
}
