//! End-to-end command execution over doubles.

mod test_helpers;

use osulink_core::GameMode;
use osulink_interface::LinkStore;
use osulink_social::{
    CommandOptions, Invocation, OptionValue, OsuCommand, OsuCommandExecutor, TargetArgs,
    parse_command,
};
use std::sync::Arc;
use test_helpers::{BrokenStore, MockGateway, beatmap, empty_store, link, score, store, user};

fn description(views: &[osulink_social::View]) -> String {
    views[0].description().clone().unwrap_or_default()
}

#[tokio::test]
async fn top_plays_without_link_reply_unlinked() {
    let executor = OsuCommandExecutor::new(empty_store(), Arc::new(MockGateway::new()));
    let views = executor
        .execute(&Invocation::new(
            "1",
            OsuCommand::Top {
                target: TargetArgs::invoker(),
                limit: 5,
            },
        ))
        .await;

    assert_eq!(views.len(), 1);
    assert_eq!(views[0].title().as_deref(), Some("Error"));
    assert!(description(&views).starts_with("You have not linked"));
}

#[tokio::test]
async fn top_plays_reply_with_detail_and_list() {
    let gateway = MockGateway::new()
        .with_user(user(7, "player7"))
        .with_best(7, vec![score(1, 7, 3), score(2, 7, 2), score(3, 7, 1)]);
    let executor = OsuCommandExecutor::new(
        store([link("1", 7, GameMode::Standard)]),
        Arc::new(gateway),
    );

    let views = executor
        .execute(&Invocation::new(
            "1",
            OsuCommand::Top {
                target: TargetArgs::invoker(),
                limit: 3,
            },
        ))
        .await;

    assert_eq!(views.len(), 2);
    assert!(description(&views).contains("**#1** top play for **player7**"));
    let list = views[1].description().clone().unwrap();
    assert!(list.contains("**#2**"));
    assert!(list.contains("**#3**"));
}

#[tokio::test]
async fn single_top_play_has_one_view() {
    let gateway = MockGateway::new()
        .with_user(user(7, "player7"))
        .with_best(7, vec![score(1, 7, 3)]);
    let executor = OsuCommandExecutor::new(
        store([link("1", 7, GameMode::Standard)]),
        Arc::new(gateway),
    );
    let views = executor
        .execute(&Invocation::new(
            "1",
            OsuCommand::Top {
                target: TargetArgs::invoker(),
                limit: 5,
            },
        ))
        .await;
    assert_eq!(views.len(), 1);
}

#[tokio::test]
async fn compare_shows_position_and_plays() {
    let gateway = MockGateway::new()
        .with_user(user(7, "player7"))
        .with_beatmap(
            beatmap(100),
            vec![score(1, 7, 900_000), score(2, 7, 950_000)],
        );
    let executor = OsuCommandExecutor::new(
        store([link("1", 7, GameMode::Standard)]),
        Arc::new(gateway),
    );

    let views = executor
        .execute(&Invocation::new(
            "1",
            OsuCommand::Compare {
                beatmap_id: 100,
                target: TargetArgs::invoker(),
            },
        ))
        .await;

    assert_eq!(views.len(), 1);
    let view = &views[0];
    assert_eq!(
        view.field("Leaderboard Position").map(|f| f.value().as_str()),
        Some("#2")
    );
    assert_eq!(
        view.field("Total Plays").map(|f| f.value().as_str()),
        Some("2 plays on this map")
    );
    assert!(description(&views).contains("**player7**"));
}

#[tokio::test]
async fn compare_without_scores_names_the_player() {
    let gateway = MockGateway::new()
        .with_user(user(7, "player7"))
        .with_beatmap(beatmap(100), vec![score(1, 3, 10)]);
    let executor = OsuCommandExecutor::new(empty_store(), Arc::new(gateway));

    let views = executor
        .execute(&Invocation::new(
            "1",
            OsuCommand::Compare {
                beatmap_id: 100,
                target: TargetArgs::username("7"),
            },
        ))
        .await;
    assert_eq!(description(&views), "player7 has no scores on this beatmap.");
}

#[tokio::test]
async fn recent_out_of_range_message() {
    let gateway = MockGateway::new()
        .with_user(user(7, "player7"))
        .with_recent(7, vec![score(1, 7, 1), score(2, 7, 2)]);
    let executor = OsuCommandExecutor::new(
        store([link("1", 7, GameMode::Standard)]),
        Arc::new(gateway),
    );
    let views = executor
        .execute(&Invocation::new(
            "1",
            OsuCommand::Recent {
                target: TargetArgs::invoker(),
                index: 3,
            },
        ))
        .await;
    assert_eq!(description(&views), "This user only has 2 recent plays.");
}

#[tokio::test]
async fn recent_play_shows_status() {
    let gateway = MockGateway::new()
        .with_user(user(7, "player7"))
        .with_recent(7, vec![score(1, 7, 1)]);
    let executor = OsuCommandExecutor::new(
        store([link("1", 7, GameMode::Standard)]),
        Arc::new(gateway),
    );
    let views = executor
        .execute(&Invocation::new(
            "1",
            OsuCommand::Recent {
                target: TargetArgs::invoker(),
                index: 1,
            },
        ))
        .await;
    assert_eq!(
        views[0].field("Status").map(|f| f.value().as_str()),
        Some("Completed")
    );
}

#[tokio::test]
async fn link_then_mode_then_unlink() {
    let links = empty_store();
    let gateway = MockGateway::new().with_user(user(7, "player7"));
    let executor = OsuCommandExecutor::new(links.clone(), Arc::new(gateway));

    let views = executor
        .execute(&Invocation::new(
            "1",
            OsuCommand::Link {
                username: "Player7".into(),
                mode: Some(GameMode::Taiko),
            },
        ))
        .await;
    assert_eq!(views[0].title().as_deref(), Some("Success"));
    let record = links.get("1").await.unwrap().unwrap();
    assert_eq!(*record.osu_user_id(), 7);
    assert_eq!(record.osu_username(), "player7");
    assert_eq!(*record.default_mode(), GameMode::Taiko);

    executor
        .execute(&Invocation::new(
            "1",
            OsuCommand::Mode {
                mode: GameMode::Mania,
            },
        ))
        .await;
    let record = links.get("1").await.unwrap().unwrap();
    assert_eq!(*record.default_mode(), GameMode::Mania);

    let views = executor
        .execute(&Invocation::new("1", OsuCommand::Unlink))
        .await;
    assert_eq!(views[0].title().as_deref(), Some("Success"));
    assert!(links.get("1").await.unwrap().is_none());

    let views = executor
        .execute(&Invocation::new("1", OsuCommand::Unlink))
        .await;
    assert!(description(&views).starts_with("You have not linked"));
}

#[tokio::test]
async fn mode_change_without_link_creates_nothing() {
    let links = empty_store();
    let executor = OsuCommandExecutor::new(links.clone(), Arc::new(MockGateway::new()));
    let views = executor
        .execute(&Invocation::new(
            "1",
            OsuCommand::Mode {
                mode: GameMode::Catch,
            },
        ))
        .await;
    assert!(description(&views).starts_with("You have not linked"));
    assert_eq!(links.count().await.unwrap(), 0);
}

#[tokio::test]
async fn link_to_unknown_user_stores_nothing() {
    let links = empty_store();
    let executor = OsuCommandExecutor::new(links.clone(), Arc::new(MockGateway::new()));
    let views = executor
        .execute(&Invocation::new(
            "1",
            OsuCommand::Link {
                username: "ghost".into(),
                mode: None,
            },
        ))
        .await;
    assert!(description(&views).starts_with("User not found"));
    assert_eq!(links.count().await.unwrap(), 0);
}

#[tokio::test]
async fn map_requires_id_or_query() {
    let executor = OsuCommandExecutor::new(empty_store(), Arc::new(MockGateway::new()));
    let views = executor
        .execute(&Invocation::new(
            "1",
            OsuCommand::Map {
                id: None,
                search: Some("  ".into()),
                mode: None,
            },
        ))
        .await;
    assert_eq!(
        description(&views),
        "Please provide either a beatmap ID or search query."
    );
}

#[tokio::test]
async fn map_search_without_results() {
    let executor = OsuCommandExecutor::new(empty_store(), Arc::new(MockGateway::new()));
    let views = executor
        .execute(&Invocation::new(
            "1",
            OsuCommand::Map {
                id: None,
                search: Some("abc".into()),
                mode: None,
            },
        ))
        .await;
    assert_eq!(description(&views), "No beatmaps found for your search query.");
}

#[tokio::test]
async fn map_by_id() {
    let gateway = MockGateway::new().with_beatmap(beatmap(100), Vec::new());
    let executor = OsuCommandExecutor::new(empty_store(), Arc::new(gateway));
    let views = executor
        .execute(&Invocation::new(
            "1",
            OsuCommand::Map {
                id: Some(100),
                search: Some("ignored".into()),
                mode: None,
            },
        ))
        .await;
    assert_eq!(views[0].title().as_deref(), Some("xi - Blue Zenith"));
    assert_eq!(
        views[0].footer().as_deref(),
        Some("Beatmap ID: 100 | Beatmapset ID: 10")
    );
}

#[tokio::test]
async fn store_failure_replies_generically() {
    let executor = OsuCommandExecutor::new(Arc::new(BrokenStore), Arc::new(MockGateway::new()));
    let views = executor
        .execute(&Invocation::new(
            "1",
            OsuCommand::Profile(TargetArgs::invoker()),
        ))
        .await;
    assert_eq!(
        description(&views),
        "An error occurred while fetching the profile."
    );
}

#[tokio::test]
async fn parsed_profile_command_runs() {
    let gateway = MockGateway::new().with_user(user(9, "someone"));
    let executor = OsuCommandExecutor::new(
        store([link("42", 9, GameMode::Catch)]),
        Arc::new(gateway),
    );
    let options = CommandOptions::new().with("user", OptionValue::User("42".into()));
    let command = parse_command("profile", &options).unwrap();

    let views = executor.execute(&Invocation::new("1", command)).await;
    assert_eq!(views[0].title().as_deref(), Some("someone"));
    assert_eq!(
        views[0].footer().as_deref(),
        Some("Mode: osu!catch | ID: 9")
    );
}

#[tokio::test]
async fn help_always_answers() {
    let executor = OsuCommandExecutor::new(Arc::new(BrokenStore), Arc::new(MockGateway::new()));
    let views = executor
        .execute(&Invocation::new("1", OsuCommand::Help))
        .await;
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].title().as_deref(), Some("osu! Bot Commands"));
}
