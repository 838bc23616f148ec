// This file is part of cow-containers.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Thread-chunked parallel iteration helpers (`parallel` feature).
//!
//! Each helper splits its input into contiguous chunks, runs one scoped
//! thread per chunk, and joins them all before returning. The thread count
//! is the number of logical CPUs capped at [`MAX_THREADS`]; inputs smaller
//! than the thread count use fewer threads.
//!
//! There is no load balancing, no work stealing, and no ordering guarantee
//! between chunks while they run. A panic in any worker propagates to the
//! caller after the remaining workers finish.

// Std imports
use std::{ops::Range, thread, vec::Vec};

/// Upper bound on worker threads, regardless of hardware concurrency.
pub const MAX_THREADS: usize = 16;

/// Number of threads to use for `work_items` units of work.
fn utilized_threads(work_items: usize) -> usize {
    num_cpus::get().min(MAX_THREADS).min(work_items).max(1)
}

/// Chunk length that spreads `total` items over the utilized threads.
fn chunk_len(total: usize) -> usize {
    total.div_ceil(utilized_threads(total))
}

/// Calls `f(i)` for every `i` in `range`, split across threads.
///
/// Returns after every index has been processed.
pub fn par_for<F>(range: Range<usize>, f: F)
where
    F: Fn(usize) + Sync,
{
    let total = range.end.saturating_sub(range.start);
    if total == 0 {
        return;
    }
    let chunk = chunk_len(total);
    let f = &f;
    thread::scope(|scope| {
        let mut start = range.start;
        while start < range.end {
            let stop = range.end.min(start + chunk);
            scope.spawn(move || {
                for i in start..stop {
                    f(i);
                }
            });
            start = stop;
        }
    });
}

/// Calls `f(&item)` for every element of `items`, split across threads.
pub fn par_for_each<T, F>(items: &[T], f: F)
where
    T: Sync,
    F: Fn(&T) + Sync,
{
    if items.is_empty() {
        return;
    }
    let chunk = chunk_len(items.len());
    let f = &f;
    thread::scope(|scope| {
        for chunk_items in items.chunks(chunk) {
            scope.spawn(move || chunk_items.iter().for_each(f));
        }
    });
}

/// Calls `f(&mut item)` for every element of `items`, split across threads.
pub fn par_for_each_mut<T, F>(items: &mut [T], f: F)
where
    T: Send,
    F: Fn(&mut T) + Sync,
{
    if items.is_empty() {
        return;
    }
    let chunk = chunk_len(items.len());
    let f = &f;
    thread::scope(|scope| {
        for chunk_items in items.chunks_mut(chunk) {
            scope.spawn(move || chunk_items.iter_mut().for_each(f));
        }
    });
}

/// Runs `f` once per contiguous chunk of `items` and returns the results
/// in chunk order.
///
/// This is the merge point for per-thread partial results: each worker
/// computes over its chunk independently and the caller combines the
/// returned values.
pub fn par_chunks<T, R, F>(items: &[T], f: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&[T]) -> R + Sync,
{
    if items.is_empty() {
        return Vec::new();
    }
    let chunk = chunk_len(items.len());
    let f = &f;
    thread::scope(|scope| {
        let handles: Vec<_> = items
            .chunks(chunk)
            .map(|chunk_items| scope.spawn(move || f(chunk_items)))
            .collect();
        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(result) => result,
                Err(payload) => std::panic::resume_unwind(payload),
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    // Imports
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_par_for_visits_every_index_once() {
        let hits: Vec<AtomicUsize> = (0..100).map(|_| AtomicUsize::new(0)).collect();
        par_for(0..100, |i| {
            hits[i].fetch_add(1, Ordering::Relaxed);
        });
        assert!(hits.iter().all(|h| h.load(Ordering::Relaxed) == 1));
    }

    #[test]
    fn test_par_for_empty_range() {
        let calls = AtomicUsize::new(0);
        par_for(5..5, |_| {
            calls.fetch_add(1, Ordering::Relaxed);
        });
        assert_eq!(calls.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn test_par_for_each_sums() {
        let items: Vec<usize> = (1..=100).collect();
        let sum = AtomicUsize::new(0);
        par_for_each(&items, |x| {
            sum.fetch_add(*x, Ordering::Relaxed);
        });
        assert_eq!(sum.load(Ordering::Relaxed), 5050);
    }

    #[test]
    fn test_par_for_each_mut_updates_in_place() {
        let mut items: Vec<i64> = (0..1000).collect();
        par_for_each_mut(&mut items, |x| *x *= 2);
        assert!(items.iter().enumerate().all(|(i, &x)| x == 2 * i as i64));
    }

    #[test]
    fn test_par_for_each_mut_empty() {
        let mut items: Vec<i32> = Vec::new();
        par_for_each_mut(&mut items, |x| *x += 1);
        assert!(items.is_empty());
    }

    #[test]
    fn test_par_chunks_preserves_chunk_order() {
        let items: Vec<i32> = (0..237).collect();
        let pieces = par_chunks(&items, |chunk| chunk.to_vec());
        let merged: Vec<i32> = pieces.into_iter().flatten().collect();
        assert_eq!(merged, items);
    }

    #[test]
    fn test_par_chunks_partial_sums() {
        let items: Vec<usize> = (1..=100).collect();
        let partial = par_chunks(&items, |chunk| chunk.iter().sum::<usize>());
        assert!(partial.len() <= MAX_THREADS);
        assert_eq!(partial.into_iter().sum::<usize>(), 5050);
    }

    #[test]
    fn test_par_chunks_empty() {
        let pieces: Vec<i32> = par_chunks(&[] as &[i32], |chunk| chunk.len() as i32);
        assert!(pieces.is_empty());
    }

    #[test]
    fn test_single_item_input() {
        let sum = AtomicUsize::new(0);
        par_for_each(&[7usize], |x| {
            sum.fetch_add(*x, Ordering::Relaxed);
        });
        assert_eq!(sum.load(Ordering::Relaxed), 7);
    }
}
