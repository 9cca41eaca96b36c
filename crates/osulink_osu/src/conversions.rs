//! Wire-to-domain conversions.
//!
//! Unknown grades and ruleset names are rejected instead of guessed; the
//! caller turns them into [`OsuApiErrorKind::Parse`].

use crate::dto::{
    BeatmapDto, BeatmapsetDto, CoversDto, ScoreDto, ScoreStatisticsDto, UserDto,
    UserStatisticsDto,
};
use osulink_core::{
    Beatmap, Beatmapset, Covers, GameMode, Grade, GradeCounts, HitCounts, Level, Score,
    ScoreUser, ScoreWeight, User, UserStatistics,
};
use osulink_error::{OsuApiError, OsuApiErrorKind};

#[track_caller]
fn parse_error(message: String) -> OsuApiError {
    OsuApiError::new(OsuApiErrorKind::Parse(message))
}

fn parse_mode(raw: &str) -> Result<GameMode, OsuApiError> {
    raw.parse::<GameMode>()
        .map_err(|e| parse_error(e.to_string()))
}

/// Convert a user response. `requested` wins over the user's preferred mode,
/// since the statistics belong to the mode that was asked for.
pub(crate) fn user_from_dto(dto: UserDto, requested: Option<GameMode>) -> Result<User, OsuApiError> {
    let mode = match (requested, dto.playmode.as_deref()) {
        (Some(mode), _) => mode,
        (None, Some(raw)) => parse_mode(raw)?,
        (None, None) => GameMode::default(),
    };
    Ok(User {
        id: dto.id,
        username: dto.username,
        avatar_url: dto.avatar_url,
        country_code: dto.country_code,
        cover_url: dto.cover_url,
        is_online: dto.is_online,
        mode,
        statistics: dto.statistics.map(statistics_from_dto),
    })
}

fn statistics_from_dto(dto: UserStatisticsDto) -> UserStatistics {
    UserStatistics {
        level: Level {
            current: dto.level.current,
            progress: dto.level.progress,
        },
        global_rank: dto.global_rank,
        country_rank: dto.country_rank,
        pp: dto.pp,
        hit_accuracy: dto.hit_accuracy,
        play_count: dto.play_count,
        play_time: dto.play_time.unwrap_or_default(),
        total_score: dto.total_score,
        total_hits: dto.total_hits,
        maximum_combo: dto.maximum_combo,
        grade_counts: GradeCounts {
            ss: dto.grade_counts.ss,
            ssh: dto.grade_counts.ssh,
            s: dto.grade_counts.s,
            sh: dto.grade_counts.sh,
            a: dto.grade_counts.a,
        },
    }
}

fn hits_from_dto(dto: ScoreStatisticsDto) -> HitCounts {
    HitCounts {
        count_300: dto.count_300.unwrap_or_default(),
        count_100: dto.count_100.unwrap_or_default(),
        count_50: dto.count_50.unwrap_or_default(),
        count_geki: dto.count_geki.unwrap_or_default(),
        count_katu: dto.count_katu.unwrap_or_default(),
        count_miss: dto.count_miss.unwrap_or_default(),
    }
}

fn covers_from_dto(dto: CoversDto) -> Covers {
    Covers {
        cover: dto.cover,
        card: dto.card,
        list: dto.list,
    }
}

/// Convert a score.
pub(crate) fn score_from_dto(dto: ScoreDto) -> Result<Score, OsuApiError> {
    let id = dto
        .id
        .ok_or_else(|| parse_error("score without id".to_string()))?;
    let rank = dto
        .rank
        .parse::<Grade>()
        .map_err(|e| parse_error(e.to_string()))?;
    Ok(Score {
        id,
        user_id: dto.user_id,
        score: dto.score,
        accuracy: dto.accuracy,
        max_combo: dto.max_combo,
        mods: dto.mods,
        passed: dto.passed,
        perfect: dto.perfect,
        pp: dto.pp,
        rank,
        created_at: dto.created_at,
        mode: parse_mode(&dto.mode)?,
        statistics: hits_from_dto(dto.statistics),
        weight: dto.weight.map(|w| ScoreWeight {
            percentage: w.percentage,
            pp: w.pp,
        }),
        beatmap: dto.beatmap.map(beatmap_from_dto).transpose()?,
        beatmapset: dto.beatmapset.map(beatmapset_from_dto).transpose()?,
        user: dto.user.map(|u| ScoreUser {
            id: u.id,
            username: u.username,
            country_code: u.country_code,
            avatar_url: u.avatar_url,
        }),
    })
}

/// Convert a list of scores, failing on the first malformed entry.
pub(crate) fn scores_from_dtos(dtos: Vec<ScoreDto>) -> Result<Vec<Score>, OsuApiError> {
    dtos.into_iter().map(score_from_dto).collect()
}

/// Convert a beatmap.
pub(crate) fn beatmap_from_dto(dto: BeatmapDto) -> Result<Beatmap, OsuApiError> {
    Ok(Beatmap {
        id: dto.id,
        beatmapset_id: dto.beatmapset_id,
        mode: parse_mode(&dto.mode)?,
        difficulty_rating: dto.difficulty_rating,
        version: dto.version,
        total_length: dto.total_length,
        hit_length: dto.hit_length,
        bpm: dto.bpm.unwrap_or_default(),
        cs: dto.cs,
        drain: dto.drain,
        accuracy: dto.accuracy,
        ar: dto.ar,
        playcount: dto.playcount,
        passcount: dto.passcount,
        count_circles: dto.count_circles,
        count_sliders: dto.count_sliders,
        count_spinners: dto.count_spinners,
        beatmapset: dto.beatmapset.map(beatmapset_from_dto).transpose()?,
    })
}

/// Convert a beatmapset along with any child difficulties.
pub(crate) fn beatmapset_from_dto(dto: BeatmapsetDto) -> Result<Beatmapset, OsuApiError> {
    Ok(Beatmapset {
        id: dto.id,
        artist: dto.artist,
        title: dto.title,
        creator: dto.creator,
        status: dto.status,
        covers: covers_from_dto(dto.covers),
        ranked_date: dto.ranked_date,
        beatmaps: dto
            .beatmaps
            .into_iter()
            .map(beatmap_from_dto)
            .collect::<Result<_, _>>()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn score_json() -> serde_json::Value {
        json!({
            "id": 4242,
            "user_id": 2,
            "accuracy": 0.9871,
            "mods": ["HD", "DT"],
            "score": 12345678,
            "max_combo": 812,
            "perfect": false,
            "statistics": {
                "count_300": 700, "count_100": 12, "count_50": 1,
                "count_geki": 150, "count_katu": 9, "count_miss": 2
            },
            "passed": true,
            "pp": 301.5,
            "rank": "SH",
            "created_at": "2024-03-01T12:00:00Z",
            "mode": "osu",
            "beatmap": {
                "id": 100, "beatmapset_id": 10, "mode": "osu",
                "difficulty_rating": 5.42, "version": "Insane",
                "total_length": 125, "hit_length": 120, "bpm": 180.0,
                "cs": 4.0, "drain": 6.0, "accuracy": 8.0, "ar": 9.3,
                "count_circles": 400, "count_sliders": 300, "count_spinners": 2
            },
            "beatmapset": {
                "id": 10, "artist": "xi", "title": "Blue Zenith",
                "creator": "Asphyxia", "status": "ranked",
                "covers": { "cover": "c", "card": "k", "list": "l" }
            },
            "user": { "id": 2, "username": "peppy", "country_code": "AU", "avatar_url": "a" }
        })
    }

    #[test]
    fn score_converts_with_embedded_beatmap() {
        let dto: ScoreDto = serde_json::from_value(score_json()).unwrap();
        let score = score_from_dto(dto).unwrap();

        assert_eq!(score.id, 4242);
        assert_eq!(score.rank, Grade::SH);
        assert_eq!(score.mods, vec!["HD", "DT"]);
        assert_eq!(score.statistics.count_miss, 2);
        let beatmap = score.beatmap.as_ref().unwrap();
        assert_eq!(beatmap.combo_ceiling(), 700);
        assert_eq!(score.beatmapset().unwrap().title, "Blue Zenith");
        assert_eq!(score.username(), Some("peppy"));
    }

    #[test]
    fn unknown_grade_is_a_parse_error() {
        let mut raw = score_json();
        raw["rank"] = json!("Z");
        let dto: ScoreDto = serde_json::from_value(raw).unwrap();
        let err = score_from_dto(dto).unwrap_err();
        assert!(matches!(err.kind(), OsuApiErrorKind::Parse(_)));
    }

    #[test]
    fn unknown_mode_is_a_parse_error() {
        let mut raw = score_json();
        raw["beatmap"]["mode"] = json!("catch");
        let dto: ScoreDto = serde_json::from_value(raw).unwrap();
        assert!(score_from_dto(dto).is_err());
    }

    #[test]
    fn missing_hit_counters_default_to_zero() {
        let mut raw = score_json();
        raw["statistics"] = json!({ "count_300": 5, "count_geki": null });
        let dto: ScoreDto = serde_json::from_value(raw).unwrap();
        let score = score_from_dto(dto).unwrap();
        assert_eq!(score.statistics.count_300, 5);
        assert_eq!(score.statistics.count_geki, 0);
        assert_eq!(score.statistics.count_miss, 0);
    }

    #[test]
    fn requested_mode_overrides_playmode() {
        let dto: UserDto = serde_json::from_value(json!({
            "id": 2,
            "username": "peppy",
            "avatar_url": "a",
            "country_code": "AU",
            "is_online": true,
            "playmode": "osu",
            "statistics": {
                "level": { "current": 100, "progress": 12.0 },
                "global_rank": null,
                "country_rank": null,
                "pp": 0.0,
                "hit_accuracy": 96.5,
                "play_count": 10,
                "play_time": null,
                "total_score": 1,
                "total_hits": 2,
                "maximum_combo": 3,
                "grade_counts": { "ss": 1, "ssh": 0, "s": 2, "sh": 0, "a": 3 }
            }
        }))
        .unwrap();

        let user = user_from_dto(dto, Some(GameMode::Mania)).unwrap();
        assert_eq!(user.mode, GameMode::Mania);
        let stats = user.statistics.unwrap();
        assert_eq!(stats.global_rank, None);
        assert_eq!(stats.play_time, 0);
        assert_eq!(stats.grade_counts.a, 3);
    }

    #[test]
    fn search_result_keeps_child_difficulties() {
        let dto: BeatmapsetDto = serde_json::from_value(json!({
            "id": 7, "artist": "a", "title": "t", "creator": "c", "status": "loved",
            "beatmaps": [
                { "id": 1, "beatmapset_id": 7, "mode": "taiko", "difficulty_rating": 3.1, "version": "Oni" },
                { "id": 2, "beatmapset_id": 7, "mode": "osu", "difficulty_rating": 2.0, "version": "Normal" }
            ]
        }))
        .unwrap();
        let set = beatmapset_from_dto(dto).unwrap();
        assert_eq!(set.beatmaps.len(), 2);
        assert_eq!(set.beatmaps[0].mode, GameMode::Taiko);
        assert_eq!(set.ranked_date, None);
    }
}
