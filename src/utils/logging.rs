use tracing::{debug, error, info, warn};

pub fn log_request_received(endpoint: &str, method: &str) {
    info!("Request received: {} {}", method, endpoint);
}

pub fn log_graph_api_error(operation: &str, status: Option<u16>, error: &str) {
    error!("Graph API error: {} - Status: {:?} - Error: {}", operation, status, error);
}

pub fn log_oauth_error(stage: &str, error: &str) {
    error!("OAuth2 error: {} - Error: {}", stage, error);
}

pub fn log_missing_session_token(endpoint: &str) {
    info!("No session token for {} - redirecting to login", endpoint);
}

pub fn log_config_loaded(env: &str) {
    info!("Configuration loaded successfully for environment: {}", env);
}

pub fn log_server_startup(port: u16) {
    info!("🚀 Teams channel middleware starting on port {}", port);
}

pub fn log_server_ready(port: u16) {
    info!("✅ App rodando em http://localhost:{}", port);
}

pub fn log_health_check() {
    debug!("Health check requested");
}

pub fn log_info(message: &str) {
    info!("{}", message);
}

pub fn log_error(message: &str) {
    error!("{}", message);
}

pub fn log_warning(message: &str) {
    warn!("{}", message);
}
