use serde::{Deserialize, Serialize};

use crate::model::User;
use crate::util::Sensitive;

/// **ROUTE**: `POST /api/auth/login`
#[derive(Debug, Deserialize, Serialize)]
pub struct Request {
    pub email: String,
    pub password: Sensitive<String>,
}

#[derive(Debug, Serialize)]
pub struct Response {
    pub user: User,
    /// Always empty until a real identity backend issues tokens.
    pub token: Option<Sensitive<String>>,
}
