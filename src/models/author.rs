//! Author model

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Author as stored in `Authors.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Author {
    pub id: i32,
    pub name: String,
}
