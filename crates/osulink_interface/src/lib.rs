//! Trait seams for osulink.
//!
//! Command logic depends only on these two traits:
//! - [`LinkStore`] - persistent chat-user → osu!-account links
//! - [`StatsGateway`] - read-only access to osu! users, scores and beatmaps
//!
//! Concrete implementations live in `osulink_database` and `osulink_osu`.

#![warn(missing_docs)]

mod gateway;
mod link_store;

pub use gateway::StatsGateway;
pub use link_store::LinkStore;
