use std::ops::Range;
use std::time::{SystemTime, SystemTimeError, UNIX_EPOCH};

use rand::Rng;
use serde::Serialize;
use sha2::{Digest, Sha256};
use url::Url;

use crate::domain::{AppId, AppKey, MobileNumber};

/// Nonces are drawn from this range; the upper bound is exclusive.
pub const NONCE_RANGE: Range<u64> = 100_000..999_999;

#[derive(Debug, thiserror::Error)]
/// Why a request envelope could not be derived.
pub enum AuthError {
    #[error("system clock is before the Unix epoch: {0}")]
    Clock(#[from] SystemTimeError),

    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Authentication fields shared by every provider call.
///
/// `sig` and `time` are flattened into the JSON body of the request that owns
/// the envelope. The endpoint URL carries the nonce and app id as query
/// parameters and is never serialized.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope {
    sig: String,
    time: i64,
    #[serde(skip)]
    url: Url,
}

impl Envelope {
    /// Derive a fresh envelope from the current clock and a random nonce.
    pub fn initialize(
        app_id: &AppId,
        app_key: &AppKey,
        base_url: &str,
        path: &str,
        mobile: Option<&MobileNumber>,
    ) -> Result<Self, AuthError> {
        let time = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() as i64;
        let random = rand::thread_rng().gen_range(NONCE_RANGE);
        Self::from_parts(app_id, app_key, base_url, path, mobile, random, time)
    }

    pub fn from_parts(
        app_id: &AppId,
        app_key: &AppKey,
        base_url: &str,
        path: &str,
        mobile: Option<&MobileNumber>,
        random: u64,
        time: i64,
    ) -> Result<Self, AuthError> {
        let random_param = random.to_string();
        let mut url = Url::parse(base_url)?.join(path)?;
        url.query_pairs_mut()
            .append_pair(AppId::FIELD, app_id.as_str())
            .append_pair("random", &random_param);

        Ok(Self {
            sig: signature(app_key, random, time, mobile),
            time,
            url,
        })
    }

    pub fn time(&self) -> i64 {
        self.time
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

/// Lowercase hex SHA-256 of `appkey=..&random=..&time=..[&mobile=..]`.
pub fn signature(
    app_key: &AppKey,
    random: u64,
    time: i64,
    mobile: Option<&MobileNumber>,
) -> String {
    let mut canonical = format!(
        "{}={}&random={random}&time={time}",
        AppKey::FIELD,
        app_key.as_str()
    );
    if let Some(mobile) = mobile {
        canonical.push('&');
        canonical.push_str(MobileNumber::FIELD);
        canonical.push('=');
        canonical.push_str(mobile.as_str());
    }
    hex::encode(Sha256::digest(canonical.as_bytes()))
}

/// A wire request that carries its own [`Envelope`].
///
/// The dispatcher reads the destination URL through this accessor, so it can
/// post any request shape without knowing its fields.
pub trait Authenticated: Serialize {
    fn envelope(&self) -> &Envelope;
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://yun.tim.qq.com/v5/tlssmssvr/";

    fn query_random(url: &Url) -> Option<String> {
        url.query_pairs()
            .find(|(key, _)| key == "random")
            .map(|(_, value)| value.into_owned())
    }

    #[test]
    fn signature_matches_known_digest() {
        let key = AppKey::new("secret").unwrap();
        assert_eq!(
            signature(&key, 123456, 1_700_000_000, None),
            "13dc35a7bfa38eec867df297915fbb24718a87ec523929277e4cb77aaf8643d3"
        );

        let mobile = MobileNumber::new("13800138000").unwrap();
        assert_eq!(
            signature(&key, 123456, 1_700_000_000, Some(&mobile)),
            "b79104bc5ea12341ed5a92e8466bb1b663f95e3b0a6002abbf5b065cdcc118c1"
        );
    }

    #[test]
    fn signature_matches_provider_documentation_sample() {
        let key = AppKey::new("5f03a35d00ee52a21327ab048186a2c4").unwrap();
        let mobile = MobileNumber::new("13788888888").unwrap();
        assert_eq!(
            signature(&key, 7226249334, 1457336869, Some(&mobile)),
            "ecab4881ee80ad3d76bb1da68387428ca752eb885e52621a3129dcf4d9bc4fd4"
        );
    }

    #[test]
    fn from_parts_builds_endpoint_url() {
        let envelope = Envelope::from_parts(
            &AppId::new("1400000000").unwrap(),
            &AppKey::new("secret").unwrap(),
            BASE,
            "sendsms",
            None,
            123456,
            1_700_000_000,
        )
        .unwrap();

        assert_eq!(
            envelope.url().as_str(),
            "https://yun.tim.qq.com/v5/tlssmssvr/sendsms?sdkappid=1400000000&random=123456"
        );
        assert_eq!(envelope.time(), 1_700_000_000);
        assert_eq!(
            envelope.sig,
            "13dc35a7bfa38eec867df297915fbb24718a87ec523929277e4cb77aaf8643d3"
        );
    }

    #[test]
    fn initialize_pairs_url_nonce_with_signed_nonce() {
        let app_id = AppId::new("1400000000").unwrap();
        let key = AppKey::new("secret").unwrap();
        let mobile = MobileNumber::new("13800138000").unwrap();

        for _ in 0..32 {
            let envelope =
                Envelope::initialize(&app_id, &key, BASE, "sendsms", Some(&mobile)).unwrap();
            let random: u64 = query_random(envelope.url()).unwrap().parse().unwrap();
            assert!(NONCE_RANGE.contains(&random));
            assert_eq!(
                envelope.sig,
                signature(&key, random, envelope.time(), Some(&mobile))
            );
        }
    }

    #[test]
    fn initialize_draws_fresh_nonces() {
        let app_id = AppId::new("1400000000").unwrap();
        let key = AppKey::new("secret").unwrap();

        let sigs = (0..16)
            .map(|_| {
                Envelope::initialize(&app_id, &key, BASE, "get_sign", None)
                    .unwrap()
                    .sig
            })
            .collect::<std::collections::HashSet<_>>();
        assert!(sigs.len() > 1);
    }

    #[test]
    fn serialized_envelope_has_no_url() {
        let envelope = Envelope::from_parts(
            &AppId::new("1400000000").unwrap(),
            &AppKey::new("secret").unwrap(),
            BASE,
            "get_sign",
            None,
            123456,
            1_700_000_000,
        )
        .unwrap();

        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "sig": "13dc35a7bfa38eec867df297915fbb24718a87ec523929277e4cb77aaf8643d3",
                "time": 1_700_000_000
            })
        );
    }
}
