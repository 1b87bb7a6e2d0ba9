//! Response shapes decoded from the upstream provider.
//!
//! Both structs declare only the documented fields; anything else the
//! upstream includes is dropped on decode, so re-serialization towards the
//! client carries exactly these fields.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Rates payload returned by the latest and historical endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatesResponse {
    /// Quote date, `YYYY-MM-DD`.
    pub date: String,
    /// Base currency the rates are relative to.
    pub base: String,
    /// Multiplier per target currency code.
    pub rates: HashMap<String, Decimal>,
}

/// Conversion payload returned by the convert endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResponse {
    /// Quote date, `YYYY-MM-DD`.
    pub date: String,
    pub from: String,
    pub to: String,
    /// Amount that was converted.
    pub amount: Decimal,
    /// Converted value in the target currency.
    pub value: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rates_response_drops_unknown_fields() {
        let body = json!({
            "date": "2024-05-01",
            "base": "USD",
            "rates": { "EUR": 0.92, "GBP": 0.79 },
            "foo": 1,
            "motd": "have a nice day"
        });

        let decoded: RatesResponse = serde_json::from_value(body).unwrap();
        let reencoded = serde_json::to_value(&decoded).unwrap();

        assert_eq!(
            reencoded,
            json!({
                "date": "2024-05-01",
                "base": "USD",
                "rates": { "EUR": 0.92, "GBP": 0.79 }
            })
        );
    }

    #[test]
    fn test_conversion_response_drops_unknown_fields() {
        let body = json!({
            "date": "2024-05-01",
            "from": "USD",
            "to": "EUR",
            "amount": 10.0,
            "value": 9.2,
            "info": { "rate": 0.92 }
        });

        let decoded: ConversionResponse = serde_json::from_value(body).unwrap();
        let reencoded = serde_json::to_value(&decoded).unwrap();

        assert_eq!(
            reencoded,
            json!({
                "date": "2024-05-01",
                "from": "USD",
                "to": "EUR",
                "amount": 10.0,
                "value": 9.2
            })
        );
    }

    #[test]
    fn test_missing_documented_field_is_an_error() {
        let body = json!({ "date": "2024-05-01", "base": "USD" });
        assert!(serde_json::from_value::<RatesResponse>(body).is_err());
    }
}
