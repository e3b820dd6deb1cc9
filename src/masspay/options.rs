//! Per-call request options and the parameter merge policy.

use serde_json::Value;

use crate::transport::{Params, ResponseFormat};

/// The wire key the API uses for its response-format selector.
///
/// The key may arrive embedded in a parameter map; it is always extracted
/// before dispatch and never sent to the server.
const FORMAT_KEY: &str = "dwollaparse";

/// Optional parameters for a single MassPay call.
///
/// Replaces the API's open-ended keyword bag with enumerated recognized
/// fields:
///
/// - [`alternate_token`](Self::alternate_token) / [`alternate_pin`](Self::alternate_pin):
///   per-call credential overrides
/// - [`param`](Self::param): one individually named optional API parameter
/// - [`params`](Self::params): a bulk replacement map
/// - [`parse`](Self::parse): the response-format selector
///
/// # Precedence
///
/// When a bulk [`params`](Self::params) map is present it fully replaces
/// all individually named optional parameters — the two are never merged.
/// Credentials and the operation's required fields always remain in the
/// payload, though a bulk key of the same name wins on collision.
///
/// # Examples
///
/// ```
/// use dwolla_masspay::RequestOptions;
///
/// let options = RequestOptions::new()
///     .alternate_token("per-call-token")
///     .param("assumeCosts", true)
///     .param("userJobId", "batch-7");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    alternate_token: Option<String>,
    alternate_pin: Option<String>,
    params: Option<Params>,
    extra: Params,
    parse: Option<ResponseFormat>,
}

impl RequestOptions {
    /// Creates an empty options set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the OAuth access token for this call only.
    #[must_use]
    pub fn alternate_token(mut self, token: impl Into<String>) -> Self {
        self.alternate_token = Some(token.into());
        self
    }

    /// Overrides the account PIN for this call only.
    ///
    /// Only job creation sends a PIN; the override is ignored elsewhere.
    #[must_use]
    pub fn alternate_pin(mut self, pin: impl Into<String>) -> Self {
        self.alternate_pin = Some(pin.into());
        self
    }

    /// Adds one individually named optional API parameter.
    ///
    /// Dropped entirely if a bulk [`params`](Self::params) map is also
    /// supplied.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Supplies the bulk replacement map.
    ///
    /// All individually named optional parameters are discarded and only
    /// the values in this map are used.
    #[must_use]
    pub fn params(mut self, params: impl IntoIterator<Item = (String, Value)>) -> Self {
        self.params = Some(params.into_iter().collect());
        self
    }

    /// Selects the response format for this call.
    ///
    /// Takes precedence over a `dwollaparse` key embedded in a parameter
    /// map.
    #[must_use]
    pub fn parse(mut self, format: ResponseFormat) -> Self {
        self.parse = Some(format);
        self
    }

    /// Returns the effective access token given the configured default.
    pub(crate) fn token_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.alternate_token.as_deref().unwrap_or(default)
    }

    /// Returns the effective PIN given the configured default.
    pub(crate) fn pin_or<'a>(&'a self, default: &'a str) -> &'a str {
        self.alternate_pin.as_deref().unwrap_or(default)
    }

    /// Merges these options over `base` and resolves the response format.
    ///
    /// `base` carries the credential fields and the operation's required
    /// fields. The bulk map, when present, is unioned over the base with
    /// bulk values winning on key collision and every individual option
    /// discarded; otherwise the individual options are unioned over the
    /// base the same way. A format-selector key found in the merged map is
    /// extracted and never reaches the wire.
    pub(crate) fn merge_into(&self, base: Params) -> (Params, ResponseFormat) {
        let mut payload = base;

        let overrides = match &self.params {
            Some(bulk) => bulk,
            None => &self.extra,
        };
        for (key, value) in overrides {
            payload.insert(key.clone(), value.clone());
        }

        let embedded = payload
            .remove(FORMAT_KEY)
            .as_ref()
            .and_then(Value::as_str)
            .map(ResponseFormat::from_key);

        (payload, self.parse.or(embedded).unwrap_or_default())
    }

    /// Resolves the response format for operations that send credentials
    /// only and ignore the rest of the options.
    pub(crate) fn format_override(&self) -> ResponseFormat {
        let embedded = self
            .extra
            .get(FORMAT_KEY)
            .and_then(Value::as_str)
            .map(ResponseFormat::from_key);
        self.parse.or(embedded).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use serde_json::json;

    use super::*;

    fn base_credentials() -> Params {
        let mut base = Params::new();
        base.insert("oauth_token".to_owned(), "T".into());
        base.insert("pin".to_owned(), "P".into());
        base
    }

    #[test]
    fn test_individual_options_union_over_base() {
        let options = RequestOptions::new().param("a", 1).param("b", 2);
        let (payload, format) = options.merge_into(base_credentials());

        assert_eq!(payload["oauth_token"], "T");
        assert_eq!(payload["pin"], "P");
        assert_eq!(payload["a"], 1);
        assert_eq!(payload["b"], 2);
        assert_eq!(format, ResponseFormat::Dwolla);
    }

    #[test]
    fn test_bulk_params_replace_individual_options() {
        let options = RequestOptions::new()
            .params([("a".to_owned(), json!(1))])
            .param("b", 2);
        let (payload, _) = options.merge_into(base_credentials());

        assert_eq!(payload["a"], 1);
        assert!(!payload.contains_key("b"));
        assert_eq!(payload["oauth_token"], "T");
        assert_eq!(payload["pin"], "P");
    }

    #[test]
    fn test_bulk_params_win_on_key_collision() {
        let options = RequestOptions::new().params([("pin".to_owned(), json!("override"))]);
        let (payload, _) = options.merge_into(base_credentials());
        assert_eq!(payload["pin"], "override");
    }

    #[test]
    fn test_individual_options_win_on_key_collision() {
        let options = RequestOptions::new().param("pin", "override");
        let (payload, _) = options.merge_into(base_credentials());
        assert_eq!(payload["pin"], "override");
    }

    #[test]
    fn test_empty_bulk_params_still_discard_individual_options() {
        let options = RequestOptions::new().params(Params::new()).param("b", 2);
        let (payload, _) = options.merge_into(base_credentials());
        assert!(!payload.contains_key("b"));
    }

    #[test]
    fn test_embedded_format_key_extracted() {
        let options = RequestOptions::new().param("dwollaparse", "raw");
        let (payload, format) = options.merge_into(base_credentials());

        assert!(!payload.contains_key("dwollaparse"));
        assert_eq!(format, ResponseFormat::Raw);
    }

    #[test]
    fn test_embedded_format_key_in_bulk_params_extracted() {
        let options =
            RequestOptions::new().params([("dwollaparse".to_owned(), json!("json"))]);
        let (payload, format) = options.merge_into(base_credentials());

        assert!(!payload.contains_key("dwollaparse"));
        assert_eq!(format, ResponseFormat::Json);
    }

    #[test]
    fn test_explicit_parse_wins_over_embedded_key() {
        let options = RequestOptions::new()
            .param("dwollaparse", "raw")
            .parse(ResponseFormat::Json);
        let (payload, format) = options.merge_into(base_credentials());

        assert!(!payload.contains_key("dwollaparse"));
        assert_eq!(format, ResponseFormat::Json);
    }

    #[test]
    fn test_default_format_when_unset() {
        let (_, format) = RequestOptions::new().merge_into(base_credentials());
        assert_eq!(format, ResponseFormat::Dwolla);
    }

    #[test]
    fn test_format_override_reads_parse_field() {
        let options = RequestOptions::new().parse(ResponseFormat::Raw);
        assert_eq!(options.format_override(), ResponseFormat::Raw);
    }

    #[test]
    fn test_format_override_reads_embedded_key() {
        let options = RequestOptions::new().param("dwollaparse", "json");
        assert_eq!(options.format_override(), ResponseFormat::Json);
    }

    #[test]
    fn test_format_override_default() {
        assert_eq!(RequestOptions::new().format_override(), ResponseFormat::Dwolla);
    }

    #[test]
    fn test_token_and_pin_overrides() {
        let options = RequestOptions::new().alternate_token("AT").alternate_pin("AP");
        assert_eq!(options.token_or("default"), "AT");
        assert_eq!(options.pin_or("default"), "AP");

        let options = RequestOptions::new();
        assert_eq!(options.token_or("default"), "default");
        assert_eq!(options.pin_or("default"), "default");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_bulk_params_discard_every_individual_option(
            bulk_keys in prop::collection::vec("[a-z]{1,8}", 0..5),
            extra_keys in prop::collection::vec("[A-Z]{1,8}", 1..5),
        ) {
            let mut options = RequestOptions::new()
                .params(bulk_keys.iter().map(|k| (k.clone(), json!(1))));
            for key in &extra_keys {
                options = options.param(key.clone(), 2);
            }

            let (payload, _) = options.merge_into(base_credentials());

            // Uppercase individual keys never survive a bulk merge.
            for key in &extra_keys {
                prop_assert!(!payload.contains_key(key));
            }
            for key in &bulk_keys {
                prop_assert!(payload.contains_key(key));
            }
        }

        #[test]
        fn prop_merge_preserves_base_fields_absent_collision(
            // 4+ chars so generated keys can never collide with "pin".
            keys in prop::collection::vec("[a-z]{4,8}", 0..5),
        ) {
            let mut options = RequestOptions::new();
            for key in &keys {
                options = options.param(key.clone(), json!("x"));
            }

            let (payload, _) = options.merge_into(base_credentials());

            prop_assert_eq!(payload.get("oauth_token"), Some(&json!("T")));
            prop_assert_eq!(payload.get("pin"), Some(&json!("P")));
        }
    }
}
