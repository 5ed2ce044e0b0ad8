use serde::{Deserialize, Serialize};

/// Request payload for recording a search
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub player_name: String,
    pub platform: String,
    pub region: String,
}

/// Request payload for toggling a favorite; platform defaults to steam
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRequest {
    pub player_name: String,
    #[serde(default)]
    pub platform: Option<String>,
    pub favorite: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FavoriteResponse {
    pub success: bool,
    pub favorite: bool,
}
