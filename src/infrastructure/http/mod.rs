//! HTTP client for the authentication endpoint.

mod http_login_gateway;

pub use http_login_gateway::HttpLoginGateway;
