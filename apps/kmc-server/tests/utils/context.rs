use kmc_server::router::start_server;
use tokio::task::JoinHandle;

use super::api_clients::Client;
use crate::fixtures;

pub struct TestContext {
    pub api: Client,
    _handle: JoinHandle<()>,
}

impl TestContext {
    pub async fn new() -> Self {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let config = fixtures::create_config(&base_url);
        let _handle = tokio::spawn(async move { start_server(listener, config).await });

        Self {
            api: Client::new(base_url),
            _handle,
        }
    }
}
