pub mod gemini;
pub mod tmdb;

pub use gemini::GeminiClient;
pub use tmdb::TmdbClient;
