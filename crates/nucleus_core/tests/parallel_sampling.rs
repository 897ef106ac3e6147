//! Parallel sampling with one nucleus and one random stream per worker.

use nucleus_core::rng::NucleonRng;
use nucleus_core::Nucleus;
use rayon::prelude::*;

/// Mean squared radius over `passes` sampling passes of one worker.
fn worker_mean_square_radius(base: &Nucleus, seed: u64, worker: u64, passes: usize) -> f64 {
    let mut nucleus = base.clone();
    let mut rng = NucleonRng::stream(seed, worker);
    let mut total = 0.0;
    for _ in 0..passes {
        nucleus.sample_nucleons(0.0, &mut rng);
        total += nucleus
            .iter()
            .map(|n| n.x() * n.x() + n.y() * n.y() + n.z() * n.z())
            .sum::<f64>();
    }
    total / (passes * nucleus.len()) as f64
}

#[test]
fn test_parallel_workers_match_sequential_replay() {
    let lead = Nucleus::create("Pb").unwrap();
    let workers: Vec<u64> = (0..8).collect();

    let parallel: Vec<f64> = workers
        .par_iter()
        .map(|&w| worker_mean_square_radius(&lead, 2024, w, 50))
        .collect();
    let sequential: Vec<f64> = workers
        .iter()
        .map(|&w| worker_mean_square_radius(&lead, 2024, w, 50))
        .collect();

    assert_eq!(parallel, sequential);
}

#[test]
fn test_workers_draw_distinct_ensembles() {
    let gold = Nucleus::create("Au").unwrap();

    let results: Vec<f64> = (0..4u64)
        .into_par_iter()
        .map(|w| worker_mean_square_radius(&gold, 9, w, 10))
        .collect();

    for (i, a) in results.iter().enumerate() {
        assert!(a.is_finite() && *a > 0.0);
        for b in &results[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_shared_read_only_nucleus_across_threads() {
    let lead = Nucleus::create("Pb").unwrap();
    let radii: Vec<f64> = (0..16).into_par_iter().map(|_| lead.radius()).collect();
    assert!(radii.iter().all(|&r| r == lead.radius()));
}
