use serde::{Deserialize, Serialize};

use crate::application::dtos::LoginStreakDto;

/// Record a daily login for the authenticated caller.
///
/// `principal` is the identity the external auth layer already
/// validated (None when the request carried no session).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordLoginCommand {
    pub principal: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordLoginResult {
    pub streak: LoginStreakDto,
    pub message: String,
}
