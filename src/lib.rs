// ClusterTalk moderation service
//
// This is the library root. The moderation module holds the classification
// logic and scorer implementations; web exposes it over HTTP.

pub mod config;
pub mod models;
pub mod moderation;
pub mod output;
pub mod web;
