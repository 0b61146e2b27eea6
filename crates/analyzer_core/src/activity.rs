use chrono::{Duration, NaiveDate};
use rand::Rng;

/// Number of samples in the synthetic trend: today plus the preceding 30 days.
pub const SERIES_LEN: usize = 31;

/// Upper bound (inclusive) for a single day's synthetic commit count.
pub const MAX_DAILY_COMMITS: u32 = 11;

/// One (date, commit-count) sample in the synthetic trend series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityPoint {
    pub date: NaiveDate,
    pub commits: u32,
}

/// Capabilities the update loop needs for series generation: the current
/// date and a uniform draw in `0..=MAX_DAILY_COMMITS`. Injected so tests can
/// pin both the calendar and the random sequence.
pub trait ActivityEnv {
    fn today(&self) -> NaiveDate;
    fn draw_commits(&mut self) -> u32;
}

/// Production environment: wall-clock date and the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl ActivityEnv for SystemEnv {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }

    fn draw_commits(&mut self) -> u32 {
        rand::thread_rng().gen_range(0..=MAX_DAILY_COMMITS)
    }
}

/// Produces the 31-point series ending at `env.today()`, oldest first.
pub fn generate_series(env: &mut dyn ActivityEnv) -> Vec<ActivityPoint> {
    let today = env.today();
    (0..SERIES_LEN as i64)
        .map(|offset| ActivityPoint {
            date: today - Duration::days(SERIES_LEN as i64 - 1 - offset),
            commits: env.draw_commits(),
        })
        .collect()
}
