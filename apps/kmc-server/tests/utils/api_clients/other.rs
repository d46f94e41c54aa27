use crate::utils::api_clients::{HttpClient, Response};

pub struct OtherApi {
    client: HttpClient,
}

impl OtherApi {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn health(&self) -> Response {
        self.client.get("/health").await
    }
}
