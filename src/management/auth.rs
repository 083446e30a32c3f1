use std::path::PathBuf;

use chrono::Utc;

use crate::{config, error::Result, spotify, types::Token, warning};

/// Seconds before expiry at which a token is refreshed.
const EXPIRY_MARGIN_SECS: u64 = 240;

pub struct TokenManager {
    token: Token,
}

impl TokenManager {
    pub fn new(token: Token) -> Self {
        TokenManager { token }
    }

    pub async fn load() -> Result<Self> {
        let content = async_fs::read_to_string(Self::token_path()).await?;
        let token: Token = serde_json::from_str(&content)?;
        Ok(Self { token })
    }

    pub async fn persist(&self) -> Result<()> {
        let path = Self::token_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(&self.token)?;
        async_fs::write(&path, json).await?;
        Ok(())
    }

    /// Returns an access token, refreshing and persisting it first when it
    /// is about to expire. A failed refresh keeps the old token; the next
    /// API call then fails with 401.
    pub async fn get_valid_token(&mut self) -> String {
        if self.is_expired() {
            match spotify::auth::refresh_token(&self.token.refresh_token).await {
                Ok(new_token) => {
                    self.token = new_token;
                    if let Err(e) = self.persist().await {
                        warning!("Failed to save refreshed token: {}", e);
                    }
                }
                Err(e) => warning!("Failed to refresh token: {}", e),
            }
        }

        self.token.access_token.clone()
    }

    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        now >= (self.token.obtained_at + self.token.expires_in).saturating_sub(EXPIRY_MARGIN_SECS)
    }

    fn token_path() -> PathBuf {
        let mut path = config::data_dir();
        path.push("cache/token.json");
        path
    }

    pub fn current_token(&self) -> &Token {
        &self.token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(expires_in: u64, age: u64) -> Token {
        Token {
            access_token: "access".to_string(),
            refresh_token: "refresh".to_string(),
            scope: "user-top-read".to_string(),
            expires_in,
            obtained_at: Utc::now().timestamp() as u64 - age,
        }
    }

    #[test]
    fn test_fresh_token_is_valid() {
        assert!(!TokenManager::new(token(3600, 0)).is_expired());
    }

    #[test]
    fn test_token_inside_margin_is_expired() {
        assert!(TokenManager::new(token(3600, 3600 - 100)).is_expired());
    }

    #[test]
    fn test_short_lived_token_does_not_underflow() {
        assert!(TokenManager::new(token(60, 0)).is_expired());
    }
}
