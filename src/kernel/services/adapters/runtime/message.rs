use crate::kernel::fetch::FetchCompletion;
use crate::models::Tweet;

#[derive(Debug)]
pub enum AppMessage {
    TweetLoaded(FetchCompletion<Tweet>),
    TextLoaded(FetchCompletion<String>),
}
