use std::sync::OnceLock;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use self::other::OtherApi;
use self::verification::VerificationApi;

pub mod other;
pub mod verification;

pub fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(|| reqwest::ClientBuilder::new().build().unwrap())
}

#[derive(Clone)]
pub struct HttpClient {
    base_url: String,
}

impl HttpClient {
    pub async fn get(&self, url: &str) -> Response {
        let url = format!("{}{url}", self.base_url);

        let resp = http_client().get(url).send().await.unwrap();

        Response { resp }
    }

    pub async fn post(&self, url: &str, body: impl Into<Option<Value>>) -> Response {
        let url = format!("{}{url}", self.base_url);

        let resp = http_client()
            .post(url)
            .json(&body.into())
            .send()
            .await
            .unwrap();

        Response { resp }
    }

    pub async fn post_form(&self, url: &str, form: &impl Serialize) -> Response {
        let url = format!("{}{url}", self.base_url);

        let resp = http_client().post(url).form(form).send().await.unwrap();

        Response { resp }
    }
}

pub struct Response {
    resp: reqwest::Response,
}

impl Response {
    pub fn status(&self) -> u16 {
        self.resp.status().into()
    }

    pub async fn json<T: DeserializeOwned>(self) -> T {
        let full = self.resp.bytes().await.unwrap();
        serde_json::from_slice(&full).unwrap()
    }

    pub async fn json_value(self) -> Value {
        self.json().await
    }
}

pub struct Client {
    pub verification: VerificationApi,
    pub other: OtherApi,
}

impl Client {
    pub fn new(base_url: String) -> Self {
        let client = HttpClient { base_url };

        Self {
            verification: VerificationApi::new(client.clone()),
            other: OtherApi::new(client),
        }
    }
}
