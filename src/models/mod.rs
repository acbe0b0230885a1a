//! Content records rendered by a card.

pub mod tweet;

pub use tweet::{format_tweet_date, Tweet};
