use rota_duty::{DutyIndex, DutyMode};

/// Asserts the partition invariant: both sides strictly increasing,
/// disjoint, and their union exactly `[0, n)`.
fn assert_partition(index: &DutyIndex, n: usize) {
    assert_eq!(index.len(), n);
    assert_eq!(index.on_duty().len() + index.off_duty().len(), n);

    let mut merged: Vec<usize> = index
        .on_duty()
        .iter()
        .chain(index.off_duty().iter())
        .copied()
        .collect();
    merged.sort_unstable();
    let expected: Vec<usize> = (0..n).collect();
    assert_eq!(merged, expected, "union must cover [0, {n}) exactly");

    for side in [index.on_duty(), index.off_duty()] {
        for pair in side.windows(2) {
            assert!(pair[0] < pair[1], "sides must be strictly increasing");
        }
    }
}

#[test]
fn partition_invariant_across_patterns() {
    for n in [0usize, 1, 2, 7, 10, 365] {
        let alternating: Vec<bool> = (0..n).map(|p| p % 2 == 0).collect();
        let all_on = vec![true; n];
        let all_off = vec![false; n];
        let weekly: Vec<bool> = (0..n).map(|p| p % 7 < 5).collect();

        for flags in [alternating, all_on, all_off, weekly] {
            let index = DutyIndex::from_flags(&flags);
            assert_partition(&index, n);
        }
    }
}

#[test]
fn membership_matches_flags() {
    let flags: Vec<bool> = (0..31).map(|p| p % 3 == 0).collect();
    let index = DutyIndex::from_flags(&flags);
    for (position, &on) in flags.iter().enumerate() {
        assert_eq!(index.is_on_duty(position), on);
        assert_eq!(index.is_off_duty(position), !on);
    }
}

#[test]
fn from_parts_roundtrips_from_flags() {
    let flags: Vec<bool> = (0..20).map(|p| p % 4 != 0).collect();
    let built = DutyIndex::from_flags(&flags);
    let rebuilt =
        DutyIndex::from_parts(built.on_duty().to_vec(), built.off_duty().to_vec()).unwrap();
    assert_eq!(built, rebuilt);
}

#[test]
fn any_view_always_covers_full_range() {
    for n in [0usize, 1, 5, 12] {
        let flags: Vec<bool> = (0..n).map(|p| p % 2 == 1).collect();
        let index = DutyIndex::from_flags(&flags);
        let seq = index.sequence(DutyMode::Any, false);
        assert_eq!(seq.len(), n);
        for rank in 0..n {
            assert_eq!(seq.get(rank), Some(rank));
        }
    }
}

#[test]
fn same_and_alt_partition_the_range() {
    let flags: Vec<bool> = (0..15).map(|p| p % 5 < 2).collect();
    let index = DutyIndex::from_flags(&flags);
    for start in 0..15 {
        let start_on = index.is_on_duty(start);
        let same = index.sequence(DutyMode::Same, start_on);
        let alt = index.sequence(DutyMode::Alt, start_on);
        assert_eq!(same.len() + alt.len(), 15);
        // The start always belongs to its Same sequence, never to Alt.
        assert_eq!(
            same.rank_at_or_after(start).and_then(|r| same.get(r)),
            Some(start)
        );
        assert_ne!(
            alt.rank_at_or_after(start).and_then(|r| alt.get(r)),
            Some(start)
        );
    }
}
