// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// ```bash
// $ cargo r --release --features=parallel --example par_eval_all7
// ...
// High Card:       23294460
// One Pair:        58627800
// Two Pairs:       31433400
// Three of a Kind: 6461620
// Straight:        6180020
// Flush:           4047644
// Full House:      3473184
// Four of a Kind:  224848
// Straight Flush:  37260
// Royal Flush:     4324
// ```

use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Instant,
};

use pokerhands_eval::*;

fn main() {
    // Evaluate all 133M hands with 4 parallel tasks.
    const NUM_TASKS: usize = 4;

    // Create per task counters to avoid contention and boost performance.
    let task_counters = (0..NUM_TASKS)
        .map(|_| {
            (0..HandCategory::COUNT)
                .map(|_| AtomicU64::new(0))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    let now = Instant::now();

    Deck::default().par_for_each(NUM_TASKS, 7, |task_id, hand| {
        let code = evaluate(hand).code();
        let counters = &task_counters[task_id];
        counters[code as usize].fetch_add(1, Ordering::Relaxed);
    });

    let elapsed = now.elapsed().as_secs_f64();

    // Aggregate counters.
    let agg = (0..HandCategory::COUNT)
        .map(|c| {
            task_counters
                .iter()
                .map(|counts| counts[c].load(Ordering::Relaxed))
                .sum()
        })
        .collect::<Vec<u64>>();

    let total = agg.iter().sum::<u64>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for category in HandCategory::categories() {
        let label = format!("{category}:");
        println!("{label:<17}{}", agg[category as usize]);
    }
}
