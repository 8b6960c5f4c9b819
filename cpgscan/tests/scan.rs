use cpgscan::prelude::*;
use cpgscan::tools::scan::chunker::chunk;
use cpgscan::tools::scan::merger::merge;
use rstest::*;

mod common;
use common::{
    planted_sequence,
    random_sequence,
    tuples,
};

fn owned(expected: &[(&str, usize, usize)]) -> Vec<(String, usize, usize)> {
    expected
        .iter()
        .map(|(s, start, len)| (s.to_string(), *start, *len))
        .collect()
}

#[rstest]
#[case::all_gc("CGCGCGCG", 0.6, 4, 8, &[("CGCGCGCG", 0, 8)])]
#[case::no_gc("AAAAAAAA", 0.6, 4, 8, &[])]
#[case::two_islands("CGCGAAAACGCG", 0.6, 4, 4, &[("CGCG", 0, 4), ("CGCG", 8, 4)])]
#[case::lowercase("cgcgaaaacgcg", 0.6, 4, 4, &[("CGCG", 0, 4), ("CGCG", 8, 4)])]
#[case::partial_last_chunk("AAAAAAAACG", 0.6, 4, 1, &[("CG", 8, 2)])]
#[case::partial_last_chunk_extends("AAAACGCGGC", 0.6, 4, 6, &[("CGCGGC", 4, 6)])]
#[case::partial_last_chunk_filtered("AAAAAAAACG", 0.6, 4, 4, &[])]
#[case::chunk_larger_than_sequence("CGCGAT", 0.6, 100, 1, &[("CGCGAT", 0, 6)])]
fn test_scan_examples(
    #[case] sequence: &str,
    #[case] threshold: f64,
    #[case] chunk_size: usize,
    #[case] min_length: usize,
    #[case] expected: &[(&str, usize, usize)],
) -> anyhow::Result<()> {
    for workers in [1, 2, 8] {
        let islands = scan(sequence, threshold, chunk_size, min_length, workers)?;
        assert_eq!(tuples(&islands), owned(expected), "workers = {workers}");
    }
    Ok(())
}

#[rstest]
#[case::threshold_low("ACGT", -0.01, 4, 1, 1)]
#[case::threshold_high("ACGT", 1.01, 4, 1, 1)]
#[case::chunk_size("ACGT", 0.6, 0, 1, 1)]
#[case::min_length("ACGT", 0.6, 4, 0, 1)]
#[case::workers("ACGT", 0.6, 4, 1, 0)]
#[case::alphabet("ACGTN", 0.6, 4, 1, 1)]
#[case::empty("", 0.6, 4, 1, 1)]
fn test_scan_rejects_invalid_arguments(
    #[case] sequence: &str,
    #[case] threshold: f64,
    #[case] chunk_size: usize,
    #[case] min_length: usize,
    #[case] workers: usize,
) {
    let err = scan(sequence, threshold, chunk_size, min_length, workers).unwrap_err();
    assert!(err.is_invalid_argument(), "{err}");
}

#[test]
fn test_boundary_chunk_scored() -> anyhow::Result<()> {
    let sequence = Sequence::try_new("ATATATATGC")?;
    let scanner = IslandScanner::new(
        ScanConfig::default()
            .with_chunk_size(4)
            .with_threshold(0.6)
            .with_min_length(1),
    )?;
    let chunks = scanner.score_chunks(&sequence)?;
    assert_eq!(chunks.len(), 3);

    let last = chunks.last().unwrap();
    assert_eq!((last.start(), last.len(), last.text()), (8, 2, "GC"));
    assert!(last.qualifies());

    let outcome = scanner.scan(&sequence)?;
    assert_eq!(outcome.n_chunks, 3);
    assert_eq!(outcome.n_qualifying, 1);
    assert_eq!(outcome.islands, vec![Island::new("GC", 8, 2)]);
    Ok(())
}

#[rstest]
#[case::slots(PoolStrategy::Slots)]
#[case::channel(PoolStrategy::Channel)]
fn test_determinism_across_workers(#[case] strategy: PoolStrategy) -> anyhow::Result<()> {
    let sequence = planted_sequence(7, 20_000, 25, 60);
    let config = ScanConfig::new(0.6, 8, 16, 1).with_strategy(strategy);
    let reference = IslandScanner::new(config.clone())?.scan(&sequence)?;
    assert!(!reference.islands.is_empty());

    for workers in [2, 3, 4, 16, 64] {
        let outcome = IslandScanner::new(config.clone().with_workers(workers))?.scan(&sequence)?;
        assert_eq!(outcome, reference, "workers = {workers}");
    }
    Ok(())
}

#[test]
fn test_strategies_agree() -> anyhow::Result<()> {
    let sequence = planted_sequence(11, 5_000, 10, 40);
    let config = ScanConfig::new(0.55, 5, 10, 4);
    let slots = IslandScanner::new(config.clone().with_strategy(PoolStrategy::Slots))?
        .scan(&sequence)?;
    let channel = IslandScanner::new(config.with_strategy(PoolStrategy::Channel))?
        .scan(&sequence)?;
    assert_eq!(slots, channel);
    Ok(())
}

#[test]
fn test_idempotence_with_seeded_source() -> anyhow::Result<()> {
    let run = || -> anyhow::Result<Vec<Island>> {
        let sequence = random_sequence(2024, 4096);
        Ok(scan(sequence.as_str(), 0.6, 4, 8, 4)?)
    };
    assert_eq!(run()?, run()?);
    Ok(())
}

#[rstest]
#[case(2)]
#[case(4)]
#[case(7)]
fn test_islands_are_valid_substrings(#[case] chunk_size: usize) -> anyhow::Result<()> {
    let sequence = planted_sequence(3, 3_000, 8, 50);
    let islands = scan(sequence.as_str(), 0.6, chunk_size, 1, 4)?;

    let mut previous_end = 0;
    for island in &islands {
        assert_eq!(
            sequence.as_str().get(island.start()..island.end()),
            Some(island.sequence())
        );
        assert_eq!(island.start() % chunk_size, 0);
        // Maximal runs never touch each other.
        assert!(island.start() == 0 || island.start() > previous_end);
        previous_end = island.end();
    }
    Ok(())
}

#[test]
fn test_merge_maximality_on_random_input() -> anyhow::Result<()> {
    let sequence = random_sequence(99, 2_000);
    let chunks = chunk(&sequence, 4)?;
    let scored = score_all(&chunks, 0.5, 4)?;
    let candidates = merge(&scored)?;
    assert!(!candidates.is_empty());

    for candidate in &candidates {
        let first = candidate.start() / 4;
        let last = first + candidate.n_chunks() - 1;
        assert_eq!(candidate.end(), scored[last].end());
        assert!(scored[first..=last].iter().all(|c| c.qualifies()));
        if first > 0 {
            assert!(!scored[first - 1].qualifies());
        }
        if let Some(next) = scored.get(last + 1) {
            assert!(!next.qualifies());
        }
    }
    Ok(())
}

#[rstest]
#[case(4)]
#[case(8)]
#[case(12)]
#[case(40)]
fn test_min_length_filter_is_subset(#[case] min_length: usize) -> anyhow::Result<()> {
    let sequence = planted_sequence(5, 10_000, 20, 48);
    let all = scan(sequence.as_str(), 0.6, 4, 1, 4)?;
    let filtered = scan(sequence.as_str(), 0.6, 4, min_length, 4)?;

    assert!(filtered.iter().all(|i| i.len() >= min_length));
    assert!(filtered.iter().all(|i| all.contains(i)));
    let expected: Vec<_> = all.into_iter().filter(|i| i.len() >= min_length).collect();
    assert_eq!(filtered, expected);
    Ok(())
}

#[test]
fn test_zero_threshold_yields_whole_sequence() -> anyhow::Result<()> {
    let sequence = random_sequence(1, 1_001);
    let islands = scan(sequence.as_str(), 0.0, 10, 1, 3)?;
    assert_eq!(islands, vec![Island::new(sequence.as_str(), 0, 1_001)]);
    Ok(())
}
