use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize, FromRow)]
pub struct SiteStats {
    pub projects_completed: i32,
    pub happy_clients: i32,
    pub years_experience: i32,
    pub team_size: i32,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteStatsData {
    pub projects_completed: i32,
    pub happy_clients: i32,
    pub years_experience: i32,
    pub team_size: i32,
}
