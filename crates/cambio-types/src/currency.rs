//! Supported-currency set.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::CurrencyError;

/// The set of currency codes the API supports, with display names.
///
/// Fetched once per invocation from the currencies endpoint and passed
/// explicitly into validation; it is never cached across invocations.
/// Codes are matched exactly, without case folding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currencies(BTreeMap<String, String>);

impl Currencies {
    /// Returns true if the code is a supported currency.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.0.contains_key(code)
    }

    /// Checks that a code is a supported currency.
    ///
    /// # Errors
    ///
    /// Returns an error if the code is not in the set.
    pub fn validate(&self, code: &str) -> Result<(), CurrencyError> {
        if self.contains(code) {
            Ok(())
        } else {
            Err(CurrencyError::Unsupported {
                code: code.to_string(),
            })
        }
    }

    /// Returns the display name for a code, if supported.
    #[must_use]
    pub fn name(&self, code: &str) -> Option<&str> {
        self.0.get(code).map(String::as_str)
    }

    /// Iterates over (code, name) pairs in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(code, name)| (code.as_str(), name.as_str()))
    }

    /// Returns the number of supported currencies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for Currencies {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Currencies {
        [("USD", "United States Dollar"), ("EUR", "Euro")]
            .into_iter()
            .map(|(code, name)| (code.to_string(), name.to_string()))
            .collect()
    }

    #[test]
    fn test_validate_supported() {
        let currencies = sample();
        assert!(currencies.validate("EUR").is_ok());
        assert!(currencies.validate("USD").is_ok());
    }

    #[test]
    fn test_validate_unsupported() {
        let currencies = sample();
        assert_eq!(
            currencies.validate("ZZZ"),
            Err(CurrencyError::Unsupported {
                code: "ZZZ".to_string(),
            })
        );
    }

    #[test]
    fn test_codes_match_exactly() {
        let currencies = sample();
        assert!(!currencies.contains("eur"));
    }

    #[test]
    fn test_deserialize_from_listing() {
        let currencies: Currencies =
            serde_json::from_str(r#"{"EUR":"Euro","USD":"United States Dollar"}"#).unwrap();
        assert_eq!(currencies.len(), 2);
        assert_eq!(currencies.name("EUR"), Some("Euro"));
    }
}
