//! osu! API v2 access for osulink.
//!
//! [`OsuClient`] speaks the wire protocol (client-credentials OAuth, JSON
//! endpoints) and reports every failure as an [`osulink_error::OsuApiError`].
//! [`OsuGateway`] wraps it behind [`osulink_interface::StatsGateway`],
//! logging failures and collapsing them into absent or empty results.

#![warn(missing_docs)]

mod client;
mod config;
mod conversions;
mod dto;
mod gateway;
mod token;

pub use client::OsuClient;
pub use config::{OsuClientConfig, OsuClientConfigBuilder};
pub use dto::{
    BeatmapDto, BeatmapScoresDto, BeatmapsetDto, BeatmapsetSearchDto, ScoreDto, TokenResponse,
    UserDto,
};
pub use gateway::OsuGateway;
