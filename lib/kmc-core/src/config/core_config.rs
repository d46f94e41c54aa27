use std::path::Path;

use figment::Figment;
#[cfg(feature = "config_env")]
use figment::providers::Env;
#[cfg(feature = "config_json")]
use figment::providers::Json;
#[cfg(feature = "config_yaml")]
use figment::providers::Yaml;
use figment::providers::{Data, Format};
use kmc_crypto::BlockPadding;
use secrecy::SecretString;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_with::{DurationSeconds, serde_as};
use strum::{Display, EnumString};

use super::ConfigParsingError;

/// Lifetime of a verification token on the gateway side.
pub const DEFAULT_SESSION_LIFETIME: time::Duration = time::Duration::minutes(30);

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoCustomConfig;

#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppCustomConfigSerdeDTO<Custom> {
    #[serde(default)]
    pub(super) app: Custom,
}

#[derive(Debug, Clone)]
pub struct AppConfig<Custom> {
    pub core: CoreConfig,
    pub app: Custom,
}

#[serde_as]
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreConfig {
    #[serde(default)]
    pub cp_id: String,
    #[serde(default)]
    pub url_code: String,
    #[serde(default = "empty_secret")]
    pub secret_key: SecretString,
    #[serde(default = "empty_secret")]
    pub iv: SecretString,
    #[serde(default)]
    pub callback_url: String,
    #[serde(default)]
    pub auth_url: String,
    pub tr_ver: Option<String>,
    pub tr_add: Option<String>,
    /// Empty lets the user pick the method on the gateway page.
    pub cert_method: Option<String>,
    #[serde(default)]
    pub envelope: TokenEnvelopeType,
    #[serde(default)]
    pub padding: PaddingType,
    pub header_prefix: Option<String>,
    #[serde_as(as = "DurationSeconds<i64>")]
    #[serde(default = "default_session_lifetime")]
    pub session_lifetime: time::Duration,
}

fn empty_secret() -> SecretString {
    SecretString::from("")
}

fn default_session_lifetime() -> time::Duration {
    DEFAULT_SESSION_LIFETIME
}

/// Framing of `tr_cert` around the encrypted record.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenEnvelopeType {
    /// `tr_cert` is the encrypted record itself.
    #[default]
    Plain,
    /// The encrypted record is hashed and wrapped in a second encryption.
    Integrity,
}

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PaddingType {
    #[default]
    Zero,
    Pkcs7,
}

impl From<PaddingType> for BlockPadding {
    fn from(value: PaddingType) -> Self {
        match value {
            PaddingType::Zero => BlockPadding::Zero,
            PaddingType::Pkcs7 => BlockPadding::Pkcs7,
        }
    }
}

pub enum InputFormat {
    #[cfg(feature = "config_yaml")]
    Yaml(Data<Yaml>),
    #[cfg(feature = "config_json")]
    Json(Data<Json>),
}

impl InputFormat {
    #[cfg(feature = "config_yaml")]
    pub fn yaml_file(p: impl AsRef<Path>) -> InputFormat {
        InputFormat::Yaml(Yaml::file(p))
    }

    #[cfg(feature = "config_yaml")]
    pub fn yaml_str(s: impl AsRef<str>) -> InputFormat {
        InputFormat::Yaml(Yaml::string(s.as_ref()))
    }

    #[cfg(feature = "config_json")]
    pub fn json_file(p: impl AsRef<Path>) -> InputFormat {
        InputFormat::Json(Json::file(p))
    }

    #[cfg(feature = "config_json")]
    pub fn json_str(s: impl AsRef<str>) -> InputFormat {
        InputFormat::Json(Json::string(s.as_ref()))
    }
}

impl<Custom> AppConfig<Custom>
where
    Custom: DeserializeOwned + Default,
{
    pub fn from_files(files: &[impl AsRef<Path>]) -> Result<Self, ConfigParsingError> {
        let mut inputs: Vec<InputFormat> = Vec::with_capacity(files.len());

        for path in files {
            #[cfg(feature = "config_yaml")]
            if path
                .as_ref()
                .extension()
                .is_some_and(|ext| ext == "yml" || ext == "yaml")
            {
                inputs.push(InputFormat::yaml_file(path));
                continue;
            }

            #[cfg(feature = "config_json")]
            if path.as_ref().extension() == Some("json".as_ref()) {
                inputs.push(InputFormat::json_file(path));
                continue;
            }

            return Err(ConfigParsingError::GeneralParsingError(format!(
                "Unsupported file or missing file extension: {:?}",
                path.as_ref().to_str()
            )));
        }

        AppConfig::parse(inputs)
    }

    #[cfg(feature = "config_yaml")]
    pub fn from_yaml(
        configs: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Result<Self, ConfigParsingError> {
        let inputs = configs.into_iter().map(InputFormat::yaml_str);

        AppConfig::parse(inputs)
    }

    pub fn parse(
        inputs: impl IntoIterator<Item = InputFormat>,
    ) -> Result<Self, ConfigParsingError> {
        let mut figment = Figment::new();

        for data in inputs {
            figment = match data {
                #[cfg(feature = "config_yaml")]
                InputFormat::Yaml(content) => figment.merge(content),
                #[cfg(feature = "config_json")]
                InputFormat::Json(content) => figment.merge(content),
            };
        }

        #[cfg(feature = "config_env")]
        {
            figment = figment.merge(Env::prefixed("KMC_").split("__").lowercase(false));
        }

        let core = figment
            .extract_inner::<CoreConfig>("core")
            .map_err(|e| ConfigParsingError::GeneralParsingError(e.to_string()))?;
        let custom = figment
            .extract::<AppCustomConfigSerdeDTO<Custom>>()
            .map_err(|e| ConfigParsingError::GeneralParsingError(e.to_string()))?;
        Ok(Self {
            core,
            app: custom.app,
        })
    }
}
