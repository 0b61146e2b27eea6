use analyzer_core::{
    generate_series, update, ActivityEnv, ActivityPoint, AppState, Msg, MAX_DAILY_COMMITS,
    SERIES_LEN,
};
use chrono::{Duration, NaiveDate};

struct FixedEnv {
    today: NaiveDate,
    draws: Vec<u32>,
    next: usize,
}

impl FixedEnv {
    fn new(today: NaiveDate, draws: Vec<u32>) -> Self {
        Self {
            today,
            draws,
            next: 0,
        }
    }
}

impl ActivityEnv for FixedEnv {
    fn today(&self) -> NaiveDate {
        self.today
    }

    fn draw_commits(&mut self) -> u32 {
        let value = self.draws[self.next % self.draws.len()];
        self.next += 1;
        value
    }
}

#[test]
fn series_spans_today_and_preceding_thirty_days_oldest_first() {
    let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let mut env = FixedEnv::new(today, vec![0]);

    let series = generate_series(&mut env);

    assert_eq!(series.len(), SERIES_LEN);
    assert_eq!(series.first().unwrap().date, today - Duration::days(30));
    assert_eq!(series.last().unwrap().date, today);
    for window in series.windows(2) {
        assert_eq!(window[1].date - window[0].date, Duration::days(1));
    }
}

#[test]
fn series_counts_stay_within_bounds() {
    let today = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
    let mut env = FixedEnv::new(today, vec![0, MAX_DAILY_COMMITS, 3, 7, 11, 2]);

    let series = generate_series(&mut env);

    assert!(series.iter().all(|point| point.commits <= MAX_DAILY_COMMITS));
}

#[test]
fn fixed_draws_give_exact_series() {
    let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let mut env = FixedEnv::new(today, vec![4, 9]);

    let series = generate_series(&mut env);

    let expected: Vec<ActivityPoint> = (0..SERIES_LEN as i64)
        .map(|offset| ActivityPoint {
            date: today - Duration::days(30 - offset),
            commits: if offset % 2 == 0 { 4 } else { 9 },
        })
        .collect();
    assert_eq!(series, expected);
}

#[test]
fn successful_fetch_regenerates_the_series_wholesale() {
    let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let mut env = FixedEnv::new(today, vec![1]);

    let (state, _) = update(
        AppState::new(),
        Msg::InputChanged("octocat".to_string()),
        &mut env,
    );
    let (state, _) = update(state, Msg::Submitted, &mut env);
    let (state, _) = update(state, Msg::FetchSucceeded(Vec::new()), &mut env);
    let first = state.view().activity;
    assert_eq!(first.len(), SERIES_LEN);
    assert!(first.iter().all(|point| point.commits == 1));

    let mut env = FixedEnv::new(today, vec![2]);
    let (state, _) = update(state, Msg::Submitted, &mut env);
    let (state, _) = update(state, Msg::FetchSucceeded(Vec::new()), &mut env);
    let second = state.view().activity;
    assert_eq!(second.len(), SERIES_LEN);
    assert!(second.iter().all(|point| point.commits == 2));
}

#[test]
fn failed_fetch_never_generates_a_series() {
    let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let mut env = FixedEnv::new(today, vec![5]);

    let (state, _) = update(
        AppState::new(),
        Msg::InputChanged("octocat".to_string()),
        &mut env,
    );
    let (state, _) = update(state, Msg::Submitted, &mut env);
    let (state, _) = update(
        state,
        Msg::FetchFailed {
            message: "GitHub API Error: 500".to_string(),
        },
        &mut env,
    );

    assert!(state.view().activity.is_empty());
    assert_eq!(env.next, 0);
}
