// Service exports
pub mod appwrite;
pub mod cache;
pub mod postgres;
pub mod sentiment;

pub use appwrite::{AppwriteClient, AppwriteCollections, AppwriteError};
pub use cache::{CacheManager, CacheKey, CacheError};
pub use postgres::{PostgresClient, PostgresError, ViolationStats};
pub use self::sentiment::SentimentAnalyzer;
