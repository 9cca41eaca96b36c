//! Platform-neutral reply views.
//!
//! Every function here is pure: it takes aggregated data and returns the
//! [`View`] a transport renders. Nothing in this module makes decisions
//! about what to fetch.

use crate::aggregator::{BestScore, Leaderboard, RecentPlay, SearchHit};
use crate::format::{self, colours};
use crate::outcome::{CommandFailure, LinkTarget, Missing, ScoreScope};
use derive_getters::Getters;
use osulink_core::{Beatmap, GameMode, Score, User};

/// A titled field inside a view.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ViewField {
    name: String,
    value: String,
    inline: bool,
}

/// One rich reply message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct View {
    title: Option<String>,
    url: Option<String>,
    description: Option<String>,
    thumbnail: Option<String>,
    image: Option<String>,
    colour: u32,
    fields: Vec<ViewField>,
    footer: Option<String>,
}

impl View {
    /// Empty view in `colour`.
    pub fn new(colour: u32) -> Self {
        Self {
            colour,
            ..Self::default()
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the title link.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the body text.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the small image; empty strings are ignored.
    pub fn with_thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail = Some(url.into()).filter(|u| !u.is_empty());
        self
    }

    /// Set the large image; empty strings are ignored.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(url.into()).filter(|u| !u.is_empty());
        self
    }

    /// Append a field.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(ViewField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    /// Set the footer.
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Field by name.
    pub fn field(&self, name: &str) -> Option<&ViewField> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Red error view.
pub fn error_view(message: impl Into<String>) -> View {
    View::new(colours::RED)
        .with_title("Error")
        .with_description(message)
}

/// Green confirmation view.
pub fn success_view(message: impl Into<String>) -> View {
    View::new(colours::GREEN)
        .with_title("Success")
        .with_description(message)
}

/// User-facing message for an expected failure. `action` completes
/// "An error occurred while ..." for internal failures.
pub fn failure_message(failure: &CommandFailure, action: &str) -> String {
    match failure {
        CommandFailure::NotFound(Missing::User) => {
            "User not found. Please check the username and try again.".to_string()
        }
        CommandFailure::NotFound(Missing::Beatmap) => {
            "Beatmap not found. Please check the ID and try again.".to_string()
        }
        CommandFailure::Unlinked(LinkTarget::Invoker) => {
            "You have not linked an osu! account. Use `/link` first.".to_string()
        }
        CommandFailure::Unlinked(LinkTarget::Other(id)) => {
            format!("<@{id}> has not linked an osu! account. Use `/link` first.")
        }
        CommandFailure::NoScores(ScoreScope::Top) => "No top plays found for this user.".to_string(),
        CommandFailure::NoScores(ScoreScope::Recent) => {
            "No recent plays found for this user.".to_string()
        }
        CommandFailure::NoScores(ScoreScope::Leaderboard) => {
            "No scores found for this beatmap.".to_string()
        }
        CommandFailure::NoScores(ScoreScope::Beatmap { player }) => format!(
            "{} has no scores on this beatmap.",
            player.as_deref().unwrap_or("User")
        ),
        CommandFailure::NoResults => "No beatmaps found for your search query.".to_string(),
        CommandFailure::IndexOutOfRange { available, .. } => format!(
            "This user only has {available} recent play{}.",
            plural(*available)
        ),
        CommandFailure::Usage(message) => message.clone(),
        CommandFailure::Internal(_) => format!("An error occurred while {action}."),
    }
}

/// Error view for a failure.
pub fn failure_view(failure: &CommandFailure, action: &str) -> View {
    error_view(failure_message(failure, action))
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Profile view.
pub fn user_view(user: &User) -> View {
    let mut view = View::new(colours::BLUE)
        .with_title(&user.username)
        .with_url(user.url())
        .with_thumbnail(&user.avatar_url);
    if let Some(cover) = &user.cover_url {
        view = view.with_image(cover);
    }

    if let Some(stats) = &user.statistics {
        let rank = |r: Option<u32>| r.map_or_else(|| "-".to_string(), |r| format!("#{}", format::number(r)));
        view = view
            .with_field(
                "Rank",
                format!(
                    "Global: {}\nCountry ({}): {}",
                    rank(stats.global_rank),
                    user.country_code,
                    rank(stats.country_rank)
                ),
                true,
            )
            .with_field(
                "Performance",
                format!(
                    "PP: {:.0}\nAccuracy: {}",
                    stats.pp,
                    format::percent(stats.hit_accuracy)
                ),
                true,
            )
            .with_field(
                "Level",
                format!("{} ({:.1}%)", stats.level.current, stats.level.progress),
                true,
            )
            .with_field(
                "Play Stats",
                format!(
                    "Playcount: {}\nPlay Time: {}",
                    format::number(stats.play_count),
                    format::play_time(stats.play_time)
                ),
                true,
            )
            .with_field(
                "Scores",
                format!(
                    "Total Score: {}\nMax Combo: {}",
                    format::number(stats.total_score),
                    format::number(stats.maximum_combo)
                ),
                true,
            )
            .with_field(
                "Grades",
                format!(
                    "SS: {} | S: {}\nA: {}",
                    stats.grade_counts.ss + stats.grade_counts.ssh,
                    stats.grade_counts.s + stats.grade_counts.sh,
                    stats.grade_counts.a
                ),
                true,
            );
    }

    view.with_footer(format!("Mode: {} | ID: {}", user.mode.display_name(), user.id))
}

fn score_title(score: &Score) -> String {
    match (score.beatmapset(), score.beatmap.as_ref()) {
        (Some(set), Some(map)) => format!("{} [{}]", set.display_title(), map.version),
        (Some(set), None) => set.display_title(),
        (None, Some(map)) => format!("Beatmap {} [{}]", map.id, map.version),
        (None, None) => format!("Score {}", score.id),
    }
}

/// Detailed view of one play.
pub fn score_view(score: &Score) -> View {
    let mut view = View::new(format::grade_colour(score.rank)).with_title(score_title(score));
    if let Some(map) = &score.beatmap {
        view = view.with_url(map.url());
    }
    if let Some(set) = score.beatmapset() {
        view = view.with_thumbnail(&set.covers.list);
    }

    let combo = match &score.beatmap {
        Some(map) => format!(
            "{}x/{}x",
            format::number(score.max_combo),
            format::number(map.combo_ceiling())
        ),
        None => format!("{}x", format::number(score.max_combo)),
    };
    view = view.with_field(
        "Score Info",
        format!(
            "Score: {}\nCombo: {}\nAccuracy: {}\nGrade: {}",
            format::number(score.score),
            combo,
            format::accuracy(score.accuracy),
            score.rank
        ),
        true,
    );

    let hits = &score.statistics;
    view = view.with_field(
        "Hit Statistics",
        format!(
            "300: {}\n100: {}\n50: {}\nMiss: {}",
            format::number(hits.count_300),
            format::number(hits.count_100),
            format::number(hits.count_50),
            format::number(hits.count_miss)
        ),
        true,
    );

    if let Some(map) = &score.beatmap {
        view = view.with_field(
            "Beatmap Info",
            format!(
                "Length: {}\nBPM: {}\nStars: {:.2}\nAR: {} | OD: {} | CS: {}",
                format::length(map.total_length),
                map.bpm,
                map.difficulty_rating,
                map.ar,
                map.accuracy,
                map.cs
            ),
            true,
        );
    }

    if let Some(pp) = score.pp {
        let weighted = score
            .weight
            .map(|w| format!(" ({:.2}pp weighted)", w.pp))
            .unwrap_or_default();
        view = view.with_field("Performance", format!("**{pp:.2}pp**{weighted}"), false);
    }

    if !score.mods.is_empty() {
        view = view.with_field("Mods", format::mods(&score.mods), true);
    }

    view.with_footer(format!("Played {}", score.created_at.format("%Y-%m-%d")))
}

fn score_line(score: &Score) -> String {
    let pp = score.pp.map(|pp| format!(" **{pp:.2}pp**")).unwrap_or_default();
    format!(
        "{} **{}** ({}, {}x) {}{}",
        score.rank,
        format::number(score.score),
        format::accuracy(score.accuracy),
        score.max_combo,
        format::mods(&score.mods),
        pp
    )
}

/// Top plays: the first in detail, the rest as a list.
pub fn top_plays_views(user: &User, scores: &[Score]) -> Vec<View> {
    let Some((first, rest)) = scores.split_first() else {
        return vec![failure_view(
            &CommandFailure::NoScores(ScoreScope::Top),
            "fetching top plays",
        )];
    };

    let mut views = vec![score_view(first).with_description(format!(
        "**#1** top play for **{}** ({})",
        user.username,
        user.mode.display_name()
    ))];

    if !rest.is_empty() {
        let lines: Vec<String> = rest
            .iter()
            .enumerate()
            .map(|(i, score)| {
                let title = match &score.beatmap {
                    Some(map) => format!("[{}]({})", score_title(score), map.url()),
                    None => score_title(score),
                };
                format!("**#{}** {}\n{}", i + 2, title, score_line(score))
            })
            .collect();
        views.push(
            View::new(colours::BLUE)
                .with_title(format!("More top plays for {}", user.username))
                .with_url(user.url())
                .with_thumbnail(&user.avatar_url)
                .with_description(lines.join("\n\n")),
        );
    }
    views
}

/// A recent play with its pass status.
pub fn recent_view(user: &User, play: &RecentPlay) -> View {
    score_view(play.score())
        .with_description(format!(
            "**Recent play #{}** for **{}**",
            play.index(),
            user.username
        ))
        .with_field("Status", play.status().to_string(), true)
}

/// Best score on a beatmap with its leaderboard context.
pub fn compare_view(best: &BestScore, player: &str) -> View {
    let mut view = score_view(best.score())
        .with_description(format!("**Best score** on this beatmap by **{player}**"));
    if let Some(position) = best.position() {
        view = view.with_field("Leaderboard Position", format!("#{position}"), true);
    }
    if *best.play_count() > 1 {
        view = view.with_field(
            "Total Plays",
            format!("{} plays on this map", best.play_count()),
            true,
        );
    }
    view
}

/// Beatmap leaderboard.
pub fn leaderboard_view(board: &Leaderboard) -> View {
    let map = board.beatmap();
    let heading = match &map.beatmapset {
        Some(set) => format!(
            "**Leaderboard for:** [{} [{}]]({})",
            set.display_title(),
            map.version,
            map.url()
        ),
        None => format!("**Leaderboard for:** [{}]({})", map.version, map.url()),
    };

    let lines: Vec<String> = board
        .entries()
        .iter()
        .map(|entry| {
            let score = entry.score();
            let player = match &score.user {
                Some(user) => format!("[{}](https://osu.ppy.sh/users/{})", user.username, user.id),
                None => format!("User {}", score.user_id),
            };
            format!(
                "**#{}** {} {}\n*{}*",
                entry.rank(),
                player,
                score_line(score),
                score.created_at.format("%Y-%m-%d")
            )
        })
        .collect();

    let mut view = View::new(colours::GREEN)
        .with_title(format!("{} Leaderboard", board.mode().display_name()))
        .with_description(format!("{heading}\n\n{}", lines.join("\n\n")))
        .with_footer(format!(
            "{:.2}★ | {} | {} BPM",
            map.difficulty_rating,
            format::length(map.total_length),
            map.bpm
        ));
    if let Some(set) = &map.beatmapset {
        view = view.with_thumbnail(&set.covers.list);
    }
    view
}

/// Beatmap details.
pub fn beatmap_view(map: &Beatmap) -> View {
    let pass_rate = map
        .pass_rate()
        .map_or_else(|| "-".to_string(), |r| format!("{r:.1}%"));
    let (title, creator, status) = match &map.beatmapset {
        Some(set) => (set.display_title(), set.creator.as_str(), set.status.as_str()),
        None => (format!("Beatmap {}", map.id), "unknown", "unknown"),
    };

    let mut view = View::new(colours::PURPLE)
        .with_title(title)
        .with_description(format!("**[{}]** mapped by **{creator}**", map.version))
        .with_url(map.url())
        .with_field(
            "Difficulty",
            format!(
                "Stars: {:.2}\nAR: {} | OD: {}\nCS: {} | HP: {}",
                map.difficulty_rating, map.ar, map.accuracy, map.cs, map.drain
            ),
            true,
        )
        .with_field(
            "Timing",
            format!(
                "Length: {}\nBPM: {}\nObjects: {}",
                format::length(map.total_length),
                map.bpm,
                format::number(map.object_count())
            ),
            true,
        )
        .with_field(
            "Statistics",
            format!(
                "Playcount: {}\nPass Rate: {pass_rate}\nStatus: {status}",
                format::number(map.playcount)
            ),
            true,
        )
        .with_footer(format!(
            "Beatmap ID: {} | Beatmapset ID: {}",
            map.id, map.beatmapset_id
        ));

    if let Some(set) = &map.beatmapset {
        view = view
            .with_thumbnail(&set.covers.list)
            .with_image(&set.covers.cover);
    }
    view
}

/// Beatmap search results.
pub fn search_view(query: &str, mode: GameMode, hits: &[SearchHit]) -> View {
    let mut description = format!("**Search results for:** `{query}`\n\n");
    for (i, hit) in hits.iter().enumerate() {
        let set = hit.beatmapset();
        description.push_str(&format!(
            "**{}.** [{}]({})\nMapped by **{}** | Status: {}\n",
            i + 1,
            set.display_title(),
            set.url(),
            set.creator,
            set.status
        ));
        if let Some(range) = hit.difficulty() {
            description.push_str(&format!(
                "Difficulties: {:.2}★ - {:.2}★ ({} diffs)\n",
                range.min(),
                range.max(),
                range.count()
            ));
        }
        description.push('\n');
    }

    success_view(description)
        .with_title("Beatmap Search Results")
        .with_footer(format!(
            "Mode: {} | Use /map id:<id> for detailed info",
            mode.display_name()
        ))
}

/// Confirmation after linking.
pub fn linked_view(user: &User, mode: GameMode) -> View {
    success_view(format!(
        "Successfully linked your account to **{}** (ID: {})\nDefault mode set to: {}",
        user.username,
        user.id,
        mode.display_name()
    ))
}

/// Confirmation after unlinking.
pub fn unlinked_view() -> View {
    success_view("Your osu! account has been unlinked.")
}

/// Confirmation after a mode change.
pub fn mode_view(mode: GameMode) -> View {
    success_view(format!(
        "Successfully updated your default mode to **{}**",
        mode.display_name()
    ))
}

/// Static command reference.
pub fn help_view() -> View {
    success_view("Here are all available commands:")
        .with_title("osu! Bot Commands")
        .with_field(
            "Account Management",
            [
                "`/link <username> [mode]` - Link your osu! account",
                "`/unlink` - Remove your linked account",
                "`/mode <gamemode>` - Change your default game mode",
            ]
            .join("\n"),
            false,
        )
        .with_field(
            "User Information",
            [
                "`/profile [user] [username] [mode]` - View user profile",
                "`/top [user] [username] [mode] [limit]` - View top plays",
                "`/recent [user] [username] [mode] [index]` - View recent plays",
            ]
            .join("\n"),
            false,
        )
        .with_field(
            "Beatmap Information",
            [
                "`/map [id] [search] [mode]` - Get beatmap info or search",
                "`/leaderboard <beatmap> [mode] [limit]` - View beatmap leaderboard",
                "`/compare <beatmap> [user] [username] [mode]` - Compare scores on beatmap",
            ]
            .join("\n"),
            false,
        )
        .with_field(
            "Game Modes",
            GameMode::ALL
                .iter()
                .map(|m| format!("{} (`{}`)", m.display_name(), m.as_str()))
                .collect::<Vec<_>>()
                .join("\n"),
            false,
        )
        .with_footer("Parameters in [] are optional, <> are required.")
}
