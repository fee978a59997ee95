use finmark_trace::{MarkTrace, MarkType, TracePoint};

/// Deterministic pseudo-random outline covering every mark type.
fn sample_trace(len: usize, seed: u64) -> MarkTrace {
    let mut state = seed;
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        state >> 33
    };
    (0..len)
        .map(|i| {
            let t = MarkType::ALL[(next() as usize) % MarkType::ALL.len()];
            TracePoint::new(i as f64, (next() % 100) as f64 * 0.5, t).with_position(i as f64 / 10.0)
        })
        .collect()
}

fn type_sets() -> Vec<Vec<MarkType>> {
    vec![
        vec![],
        vec![MarkType::Point],
        MarkType::Gouge.extent_types(),
        vec![MarkType::Nick, MarkType::Scar, MarkType::Hole],
        MarkType::ALL.to_vec(),
    ]
}

#[test]
fn keep_and_remove_partition_every_trace() {
    for seed in 1..6 {
        let t = sample_trace(40, seed);
        for set in type_sets() {
            let kept = t.keep_only(&set);
            let removed = t.remove_types(&set);
            assert_eq!(kept.len() + removed.len(), t.len());

            // merge by x (x is the original index) and compare with the source
            let mut merged: Vec<TracePoint> = kept.iter().chain(removed.iter()).copied().collect();
            merged.sort_by(|a, b| a.x.total_cmp(&b.x));
            assert_eq!(merged.as_slice(), t.points());

            assert!(kept.iter().all(|p| set.contains(&p.mark_type)));
            assert!(removed.iter().all(|p| !set.contains(&p.mark_type)));
            assert!(kept.points().windows(2).all(|w| w[0].x < w[1].x));
            assert!(removed.points().windows(2).all(|w| w[0].x < w[1].x));
        }
    }
}

#[test]
fn reverse_twice_is_identity() {
    for seed in 1..6 {
        let t = sample_trace(25, seed).with_flags(seed % 2 == 0, seed % 3 == 0);
        let twice = t.reverse().reverse();
        assert_eq!(twice.points(), t.points());
        assert_eq!(twice.notch_open(), t.notch_open());
        assert_eq!(twice.curled(), t.curled());
    }
}

#[test]
fn append_lengths_add_and_prefix_is_preserved() {
    let a = sample_trace(12, 7);
    let b = sample_trace(9, 8);
    let c = sample_trace(4, 9);

    let ab = a.append(&b);
    assert_eq!(ab.len(), a.len() + b.len());
    assert_eq!(&ab.points()[..a.len()], a.points());

    let left = a.append(&b).append(&c);
    let right = a.append(&b.append(&c));
    assert_eq!(left.points(), right.points());
}

#[test]
fn channels_stay_equal_length_through_transforms() {
    let t = sample_trace(30, 3);
    let derived = [
        t.keep_only(&[MarkType::Point, MarkType::Tip]),
        t.remove_types(&MarkType::Wave.extent_types()),
        t.append(&t.reverse()),
        t.reverse(),
    ];
    for d in derived {
        let raw = d.to_arrays();
        assert_eq!(raw.x.len(), d.len());
        assert_eq!(raw.y.len(), d.len());
        assert_eq!(raw.mark_types.len(), d.len());
        assert_eq!(raw.positions.len(), d.len());
    }
}

#[test]
fn opposite_direction_traces_line_up_after_reverse() {
    let dorsal = sample_trace(15, 11);
    let ventral = dorsal.reverse();
    assert_eq!(ventral.reverse().types(), dorsal.types());
    assert_eq!(
        ventral.keep_only(&[MarkType::Nick]).reverse(),
        dorsal.keep_only(&[MarkType::Nick])
    );
}
