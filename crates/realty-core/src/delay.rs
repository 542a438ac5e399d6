//! Inter-request delay schedules.
//!
//! The batch helpers sleep between sequential detail fetches to reduce the
//! request burst rate against the origin site. This is the only
//! concurrency-adjacent behavior in the workspace: a fixed sleep, not a
//! scheduler.

use std::time::Duration;

use rand::Rng;

/// Builds the per-item delay schedule for a batch of `count` fetches.
///
/// Each entry is `delay_secs × uniform(0, 1) × jitter`. The final entry is
/// forced to zero: after the last fetch there is nothing left to wait for.
/// A `count` of zero yields an empty schedule.
#[must_use]
pub fn jittered_delays(
    count: usize,
    delay_secs: f64,
    jitter: f64,
    rng: &mut impl Rng,
) -> Vec<Duration> {
    let mut delays: Vec<Duration> = (0..count)
        .map(|_| Duration::from_secs_f64((delay_secs * rng.random::<f64>() * jitter).max(0.0)))
        .collect();

    if let Some(last) = delays.last_mut() {
        *last = Duration::ZERO;
    }

    delays
}

/// [`jittered_delays`] seeded from the thread-local generator.
#[must_use]
pub fn jittered_delays_default(count: usize, delay_secs: f64, jitter: f64) -> Vec<Duration> {
    jittered_delays(count, delay_secs, jitter, &mut rand::rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn final_delay_is_always_zero() {
        let mut rng = StdRng::seed_from_u64(7);
        let delays = jittered_delays(3, 10.0, 1.0, &mut rng);
        assert_eq!(delays.len(), 3);
        assert_eq!(delays[2], Duration::ZERO);
    }

    #[test]
    fn single_item_batch_never_sleeps() {
        let mut rng = StdRng::seed_from_u64(7);
        let delays = jittered_delays(1, 60.0, 2.0, &mut rng);
        assert_eq!(delays, vec![Duration::ZERO]);
    }

    #[test]
    fn empty_batch_yields_empty_schedule() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(jittered_delays(0, 5.0, 1.0, &mut rng).is_empty());
    }

    #[test]
    fn delays_are_bounded_by_delay_times_jitter() {
        let mut rng = StdRng::seed_from_u64(42);
        let delays = jittered_delays(100, 2.0, 1.5, &mut rng);
        for d in &delays {
            assert!(d.as_secs_f64() < 2.0 * 1.5);
        }
    }

    #[test]
    fn zero_delay_produces_all_zero_schedule() {
        let mut rng = StdRng::seed_from_u64(1);
        let delays = jittered_delays(4, 0.0, 3.0, &mut rng);
        assert!(delays.iter().all(|d| *d == Duration::ZERO));
    }
}
