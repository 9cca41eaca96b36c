//! Doubles shared by the command tests.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use osulink_core::{
    Beatmap, Beatmapset, GameMode, LinkRecord, Score, ScoreKind, ScoreUser, User, UserRef,
};
use osulink_database::InMemoryLinkStore;
use osulink_error::{DatabaseError, DatabaseErrorKind, DatabaseResult};
use osulink_interface::{LinkStore, StatsGateway};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Gateway answering from fixed data and recording every call.
#[derive(Default)]
pub struct MockGateway {
    users: Vec<User>,
    best: HashMap<u32, Vec<Score>>,
    recent: HashMap<u32, Vec<Score>>,
    beatmaps: HashMap<u32, Beatmap>,
    leaderboards: HashMap<u32, Vec<Score>>,
    search: Vec<Beatmapset>,
    calls: Mutex<Vec<String>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.users.push(user);
        self
    }

    pub fn with_best(mut self, user_id: u32, scores: Vec<Score>) -> Self {
        self.best.insert(user_id, scores);
        self
    }

    pub fn with_recent(mut self, user_id: u32, scores: Vec<Score>) -> Self {
        self.recent.insert(user_id, scores);
        self
    }

    pub fn with_beatmap(mut self, beatmap: Beatmap, leaderboard: Vec<Score>) -> Self {
        self.leaderboards.insert(beatmap.id, leaderboard);
        self.beatmaps.insert(beatmap.id, beatmap);
        self
    }

    pub fn with_search(mut self, sets: Vec<Beatmapset>) -> Self {
        self.search = sets;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl StatsGateway for MockGateway {
    async fn fetch_user(&self, user: &UserRef, mode: Option<GameMode>) -> Option<User> {
        self.record(format!("fetch_user {user} {mode:?}"));
        self.users
            .iter()
            .find(|u| match user {
                UserRef::Id(id) => u.id == *id,
                UserRef::Username(name) => u.username.eq_ignore_ascii_case(name),
            })
            .map(|u| User {
                mode: mode.unwrap_or(u.mode),
                ..u.clone()
            })
    }

    async fn fetch_user_scores(
        &self,
        user_id: u32,
        kind: ScoreKind,
        mode: Option<GameMode>,
        limit: u8,
    ) -> Vec<Score> {
        self.record(format!("fetch_user_scores {user_id} {kind:?} {mode:?} {limit}"));
        let source = match kind {
            ScoreKind::Best => &self.best,
            ScoreKind::Recent => &self.recent,
        };
        source
            .get(&user_id)
            .map(|s| s.iter().take(usize::from(limit)).cloned().collect())
            .unwrap_or_default()
    }

    async fn fetch_beatmap(&self, beatmap_id: u32) -> Option<Beatmap> {
        self.record(format!("fetch_beatmap {beatmap_id}"));
        self.beatmaps.get(&beatmap_id).cloned()
    }

    async fn fetch_beatmap_scores(
        &self,
        beatmap_id: u32,
        mode: Option<GameMode>,
        limit: u8,
    ) -> Vec<Score> {
        self.record(format!("fetch_beatmap_scores {beatmap_id} {mode:?} {limit}"));
        self.leaderboards
            .get(&beatmap_id)
            .map(|s| s.iter().take(usize::from(limit)).cloned().collect())
            .unwrap_or_default()
    }

    async fn search_beatmapsets(
        &self,
        query: &str,
        mode: Option<GameMode>,
        limit: u8,
    ) -> Vec<Beatmapset> {
        self.record(format!("search_beatmapsets {query} {mode:?} {limit}"));
        self.search.iter().take(usize::from(limit)).cloned().collect()
    }
}

/// Store whose every call fails.
pub struct BrokenStore;

fn broken<T>() -> DatabaseResult<T> {
    Err(DatabaseError::new(DatabaseErrorKind::Connection(
        "database is locked".into(),
    )))
}

#[async_trait]
impl LinkStore for BrokenStore {
    async fn get(&self, _: &str) -> DatabaseResult<Option<LinkRecord>> {
        broken()
    }
    async fn set(&self, _: &str, _: u32, _: &str, _: GameMode) -> DatabaseResult<()> {
        broken()
    }
    async fn update_mode(&self, _: &str, _: GameMode) -> DatabaseResult<bool> {
        broken()
    }
    async fn delete(&self, _: &str) -> DatabaseResult<bool> {
        broken()
    }
    async fn list(&self) -> DatabaseResult<Vec<LinkRecord>> {
        broken()
    }
    async fn count(&self) -> DatabaseResult<u64> {
        broken()
    }
}

pub fn user(id: u32, name: &str) -> User {
    User {
        id,
        username: name.to_string(),
        ..User::default()
    }
}

pub fn score(id: u64, user_id: u32, value: u64) -> Score {
    Score {
        id,
        user_id,
        score: value,
        passed: true,
        accuracy: 0.97,
        created_at: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
        user: Some(ScoreUser {
            id: user_id,
            username: format!("player{user_id}"),
            ..ScoreUser::default()
        }),
        ..Score::default()
    }
}

pub fn beatmap(id: u32) -> Beatmap {
    Beatmap {
        id,
        beatmapset_id: id / 10,
        version: "Insane".into(),
        difficulty_rating: 5.5,
        total_length: 125,
        beatmapset: Some(Beatmapset {
            id: id / 10,
            artist: "xi".into(),
            title: "Blue Zenith".into(),
            creator: "Asphyxia".into(),
            status: "ranked".into(),
            ..Beatmapset::default()
        }),
        ..Beatmap::default()
    }
}

pub fn link(chat_user_id: &str, osu_user_id: u32, mode: GameMode) -> LinkRecord {
    LinkRecord::new(
        chat_user_id,
        osu_user_id,
        format!("player{osu_user_id}"),
        mode,
        Utc::now(),
    )
}

pub fn store(records: impl IntoIterator<Item = LinkRecord>) -> Arc<dyn LinkStore> {
    Arc::new(InMemoryLinkStore::with_links(records))
}

pub fn empty_store() -> Arc<dyn LinkStore> {
    Arc::new(InMemoryLinkStore::new())
}
