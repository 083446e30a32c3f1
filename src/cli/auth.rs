use crate::{error, spotify, success, types::SessionState};

pub async fn auth(shared_state: SessionState) {
    match spotify::auth::auth(shared_state).await {
        Ok(_) => success!("Authentication successful!"),
        Err(e) => error!("{}", e),
    }
}
