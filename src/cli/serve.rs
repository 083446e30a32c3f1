use crate::{error, server::start_api_server, types::SessionState};

pub async fn serve(shared_state: SessionState) {
    if let Err(e) = start_api_server(shared_state).await {
        error!("Server stopped: {}", e);
    }
}
