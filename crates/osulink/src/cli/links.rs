//! Link listing.

use crate::OsuLinkConfig;
use osulink_database::DatabaseLinkStore;
use osulink_error::OsuLinkResult;
use osulink_interface::LinkStore;

/// Handle the `links` command.
pub async fn handle_links_command(config: &OsuLinkConfig, count_only: bool) -> OsuLinkResult<()> {
    let store = DatabaseLinkStore::open(config.database_url(), *config.database_pool_size())?;
    print!("{}", render_links(&store, count_only).await?);
    Ok(())
}

async fn render_links(store: &dyn LinkStore, count_only: bool) -> OsuLinkResult<String> {
    if count_only {
        return Ok(format!("{}\n", store.count().await?));
    }

    let mut out = String::new();
    for record in store.list().await? {
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\n",
            record.chat_user_id(),
            record.osu_user_id(),
            record.osu_username(),
            record.default_mode(),
            record.created_at().format("%Y-%m-%d %H:%M:%S")
        ));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use osulink_core::GameMode;
    use osulink_database::InMemoryLinkStore;

    #[tokio::test]
    async fn lists_one_line_per_link() {
        let store = InMemoryLinkStore::new();
        store.set("1", 7, "player7", GameMode::Taiko).await.unwrap();
        store.set("2", 9, "player9", GameMode::Standard).await.unwrap();

        let out = render_links(&store, false).await.unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().any(|l| l.starts_with("1\t7\tplayer7\ttaiko\t")));

        assert_eq!(render_links(&store, true).await.unwrap(), "2\n");
    }
}
