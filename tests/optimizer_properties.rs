use rand::rngs::StdRng;
use rand::SeedableRng;
use ringsum::engines::search::{is_permutation, random_permutation, upper_bound, Optimizer};
use ringsum::types::{SEQ_LEN, TARGET_MIN_SUM};

fn fresh_window_sum(seq: &[i32], i: usize) -> i32 {
    let len = seq.len();
    seq[(i + len - 1) % len] + seq[i] + seq[(i + 1) % len]
}

fn assert_consistent(optimizer: &Optimizer) {
    let seq = optimizer.sequence();
    for i in 0..seq.len() {
        assert_eq!(optimizer.window_sum(i), fresh_window_sum(seq, i));
        assert_eq!(optimizer.window_sums()[i], fresh_window_sum(seq, i));
    }
    let min = optimizer.window_sums().iter().copied().min().unwrap();
    assert_eq!(optimizer.min_window_sum(), min);
}

#[test]
fn test_random_starts_stay_below_bound() {
    let bound = upper_bound(SEQ_LEN).unwrap();
    assert_eq!(bound, TARGET_MIN_SUM);

    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..300 {
        let mut optimizer = Optimizer::new(random_permutation(SEQ_LEN, &mut rng));
        let result = optimizer.run_to_local_optimum();
        assert!(result <= bound, "{:?} reached {}", optimizer.sequence(), result);
    }
}

#[test]
fn test_local_optimum_is_fixed_point() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..100 {
        let mut optimizer = Optimizer::new(random_permutation(SEQ_LEN, &mut rng));
        let first = optimizer.run_to_local_optimum();
        let swaps = optimizer.swap_count();

        assert_eq!(optimizer.best_swap(), None);
        assert_eq!(optimizer.step(), None);
        assert_eq!(optimizer.run_to_local_optimum(), first);
        assert_eq!(optimizer.swap_count(), swaps);
    }
}

#[test]
fn test_steps_keep_permutation_and_sums_consistent() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..100 {
        let mut optimizer = Optimizer::new(random_permutation(SEQ_LEN, &mut rng));
        assert_consistent(&optimizer);

        while optimizer.step().is_some() {
            assert!(is_permutation(optimizer.sequence()));
            assert_consistent(&optimizer);
        }
    }
}

#[test]
fn test_min_window_sum_never_decreases() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..100 {
        let mut optimizer = Optimizer::new(random_permutation(SEQ_LEN, &mut rng));
        let mut previous = optimizer.min_window_sum();

        while optimizer.step().is_some() {
            let current = optimizer.min_window_sum();
            assert!(current >= previous, "dropped from {} to {}", previous, current);
            previous = current;
        }
    }
}

#[test]
fn test_accepted_swap_lifts_touched_windows_above_old_floor() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..50 {
        let mut optimizer = Optimizer::new(random_permutation(SEQ_LEN, &mut rng));
        loop {
            let floor = optimizer.min_window_sum();
            let Some(mv) = optimizer.step() else { break };

            for e in [mv.e1, mv.e2] {
                for offset in [SEQ_LEN - 1, 0, 1] {
                    let center = (e + offset) % SEQ_LEN;
                    assert!(optimizer.window_sum(center) > floor);
                }
            }
        }
    }
}

#[test]
fn test_natural_order_terminates() {
    let mut optimizer = Optimizer::new((1..=SEQ_LEN as i32).collect());
    let result = optimizer.run_to_local_optimum();

    assert!(result <= TARGET_MIN_SUM);
    assert!(is_permutation(optimizer.sequence()));
}

#[test]
fn test_other_ring_lengths_terminate_below_their_bound() {
    let mut rng = StdRng::seed_from_u64(3);
    for len in [4, 5, 7, 10, 25, 31] {
        let bound = upper_bound(len).unwrap();
        for _ in 0..20 {
            let mut optimizer = Optimizer::new(random_permutation(len, &mut rng));
            assert!(optimizer.run_to_local_optimum() <= bound);
            assert!(is_permutation(optimizer.sequence()));
        }
    }
}
