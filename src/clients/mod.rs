pub mod match_client;

pub use match_client::{HttpMatchClient, MatchService, RawResponse, MATCH_ENDPOINT};
