pub mod api_version;
pub mod limit;
pub mod score_path;
pub mod validated_json;

pub use api_version::ApiVersion;
pub use limit::Limit;
pub use score_path::{GamePath, ScorePath};
pub use validated_json::ValidatedJson;
