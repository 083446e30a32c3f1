use crate::{
    management::TokenManager,
    types::{PkceToken, SessionState},
};

/// Access token for the current session.
///
/// Uses the token in the session slot, falling back to the persisted one.
/// Expired tokens are refreshed and written back to the slot.
pub async fn access_token(shared_state: &SessionState) -> Option<String> {
    let mut state = shared_state.lock().await;

    let token = match state.as_ref().and_then(|s| s.token.clone()) {
        Some(token) => token,
        None => TokenManager::load().await.ok()?.current_token().clone(),
    };

    let mut token_mgr = TokenManager::new(token);
    let access_token = token_mgr.get_valid_token().await;

    let code_verifier = state
        .as_ref()
        .map(|s| s.code_verifier.clone())
        .unwrap_or_default();
    *state = Some(PkceToken {
        code_verifier,
        token: Some(token_mgr.current_token().clone()),
    });

    Some(access_token)
}
