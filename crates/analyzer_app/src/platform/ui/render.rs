use analyzer_core::{ActivityPoint, AppViewModel, Repository, SessionState, MAX_DAILY_COMMITS};

use super::constants::{DISPLAY_REPO_LIMIT, SPARKLINE_LEVELS};

pub fn print_welcome() {
    println!("GitHub Profile Analyzer");
    println!("Enter a GitHub username and press Enter (Ctrl-D to quit).");
}

pub fn render(view: &AppViewModel) {
    match view.session {
        SessionState::Idle => {}
        SessionState::Loading => {
            println!("Analyzing {} ...", view.identifier.trim());
        }
        SessionState::Failed => {
            if let Some(error) = &view.error {
                println!();
                println!("Error: {error}");
            }
        }
        SessionState::Success => {
            render_repositories(&view.repositories);
            render_activity(&view.activity);
        }
    }
}

fn render_repositories(repos: &[Repository]) {
    println!();
    println!("Repositories ({})", repos.len());
    for repo in repos.iter().take(DISPLAY_REPO_LIMIT) {
        let description = repo
            .description
            .as_deref()
            .unwrap_or("No description provided");
        println!("  {} - {}", repo.name, description);
        match &repo.language {
            Some(language) => {
                println!("    stars {}  forks {}  {}", repo.stars, repo.forks, language)
            }
            None => println!("    stars {}  forks {}", repo.stars, repo.forks),
        }
        println!("    {}", repo.url);
    }
    if repos.len() > DISPLAY_REPO_LIMIT {
        println!("  + {} more repositories", repos.len() - DISPLAY_REPO_LIMIT);
    }
}

fn render_activity(series: &[ActivityPoint]) {
    println!();
    println!("Daily commits (last 30 days)");
    if let (Some(first), Some(last)) = (series.first(), series.last()) {
        let bars: String = series.iter().map(|point| spark(point.commits)).collect();
        println!("  {}  {} .. {}", bars, first.date, last.date);
    }
    println!("  Note: synthetic sample data, not real commit history.");
}

/// Maps a commit count in `0..=MAX_DAILY_COMMITS` onto the glyph ramp.
fn spark(commits: u32) -> char {
    let top = (SPARKLINE_LEVELS.len() - 1) as u32;
    let index = commits.min(MAX_DAILY_COMMITS) * top / MAX_DAILY_COMMITS;
    SPARKLINE_LEVELS[index as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spark_covers_the_whole_ramp() {
        assert_eq!(spark(0), SPARKLINE_LEVELS[0]);
        assert_eq!(spark(MAX_DAILY_COMMITS), *SPARKLINE_LEVELS.last().unwrap());
        // Out-of-range counts clamp instead of panicking.
        assert_eq!(spark(999), *SPARKLINE_LEVELS.last().unwrap());
    }

    #[test]
    fn spark_is_monotonic() {
        let glyphs: Vec<char> = (0..=MAX_DAILY_COMMITS).map(spark).collect();
        let mut indices = glyphs.iter().map(|glyph| {
            SPARKLINE_LEVELS.iter().position(|level| level == glyph).unwrap()
        });
        let mut prev = indices.next().unwrap();
        for index in indices {
            assert!(index >= prev);
            prev = index;
        }
    }
}
