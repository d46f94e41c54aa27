use kmc_core::config::core_config::AppConfig;
use kmc_crypto::hash::kmc_hash_hex;
use kmc_crypto::{BlockPadding, EucKrEncoder, RecordEncoder, SeedCbc, codec};
use kmc_server::ServerConfig;

pub const SECRET_KEY: &str = "4261358467855134";
pub const IV: &str = "3AD8D3E22F132AC7";

pub fn create_config(base_url: &str) -> AppConfig<ServerConfig> {
    let config = indoc::formatdoc! {"
        core:
          cpId: MMST1001
          urlCode: \"015001\"
          secretKey: \"{SECRET_KEY}\"
          iv: {IV}
          callbackUrl: {base_url}/api/kmc/v1/callback
          authUrl: https://www.kmcert.com/kmcis/web/kmcisReq.jsp
          trVer: V2
        app:
          traceLevel: debug
          hideErrorResponseCause: false
    "};

    AppConfig::from_yaml([config]).unwrap()
}

pub fn encrypt(text: &str) -> String {
    let cipher = SeedCbc::new(SECRET_KEY.as_bytes(), IV.as_bytes()).unwrap();
    let encoded = EucKrEncoder.encode(text).unwrap();
    codec::encode_upper(&cipher.encrypt_padded(&encoded, BlockPadding::Zero))
}

/// Identity record as the gateway returns it, CI and DI encrypted.
pub fn result_record(cert_num: &str, result: &str) -> String {
    [
        cert_num,
        "20251224120312",
        &encrypt("CI-VALUE-0123456789"),
        "01012345678",
        "KTF",
        "19900101",
        "1",
        "0",
        "홍길동",
        result,
        "M",
        "10.0.0.1",
        "",
        "",
        "",
        "",
        "extra",
        &encrypt("DI-VALUE-0123456789"),
    ]
    .join("/")
}

pub fn rec_cert(record: &str) -> String {
    let payload = encrypt(record);
    let digest = kmc_hash_hex(payload.as_bytes());
    encrypt(&format!("{payload}/{digest}/0000000000000000"))
}
