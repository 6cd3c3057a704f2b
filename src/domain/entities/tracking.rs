//! Tracking record returned by the shipping provider.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// Placeholder shown for optional fields the provider left empty.
pub const NOT_AVAILABLE: &str = "N/A";

/// Status snapshot of a shipment, as reported by the tracking provider.
///
/// The record is owned by the provider: it is decoded from the provider's
/// snake_case wire format and re-emitted in camelCase without local
/// validation. Only the fields this service reads are typed; everything else
/// the provider sends is kept in [`ProviderFields`] and re-emitted unchanged
/// apart from the key casing. Nothing here is persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase", deserialize = "snake_case"))]
pub struct TrackingRecord {
    #[serde(default)]
    pub tracking_number: String,
    #[serde(default)]
    pub status_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carrier_status_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_delivery_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_delivery_date: Option<String>,
    #[serde(default)]
    pub events: Vec<TrackingEvent>,

    #[serde(flatten)]
    pub extra: ProviderFields,
}

/// A single scan or status change in the shipment's history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase", deserialize = "snake_case"))]
pub struct TrackingEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occurred_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_locality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_province: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,

    #[serde(flatten)]
    pub extra: ProviderFields,
}

/// Provider fields carried through without interpretation.
///
/// Keys are stored as received (snake_case) and serialized in camelCase,
/// recursively through nested objects and arrays.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ProviderFields(Map<String, Value>);

impl ProviderFields {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for ProviderFields {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(&camel_case(key), &camel_case_keys(value))?;
        }
        map.end()
    }
}

fn camel_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper = false;

    for c in key.chars() {
        if c == '_' {
            upper = !out.is_empty();
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }

    out
}

fn camel_case_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, value)| (camel_case(key), camel_case_keys(value)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(camel_case_keys).collect()),
        other => other.clone(),
    }
}

/// The five display fields of a [`TrackingRecord`], ready for rendering.
///
/// Missing or empty optional fields are replaced with [`NOT_AVAILABLE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingSummary {
    pub tracking_number: String,
    pub status: String,
    pub carrier_status: String,
    pub estimated_delivery: String,
    pub actual_delivery: String,
}

impl TrackingRecord {
    /// Builds the display summary for this record.
    pub fn summary(&self) -> TrackingSummary {
        TrackingSummary {
            tracking_number: self.tracking_number.clone(),
            status: self.status_description.clone(),
            carrier_status: or_not_available(self.carrier_status_description.as_deref()),
            estimated_delivery: or_not_available(self.estimated_delivery_date.as_deref()),
            actual_delivery: or_not_available(self.actual_delivery_date.as_deref()),
        }
    }
}

fn or_not_available(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decodes_provider_wire_format() {
        let wire = json!({
            "tracking_number": "1Z932R800392060079",
            "status_code": "DE",
            "status_description": "Delivered",
            "carrier_status_description": "Delivered, Front Door",
            "carrier_id": 1,
            "estimated_delivery_date": "2024-03-01T00:00:00Z",
            "actual_delivery_date": null,
            "events": [
                {
                    "occurred_at": "2024-02-28T14:02:00Z",
                    "description": "Arrived at facility",
                    "city_locality": "Austin",
                    "latitude": 30.26,
                    "longitude": -97.74
                }
            ]
        });

        let record: TrackingRecord = serde_json::from_value(wire).unwrap();

        assert_eq!(record.tracking_number, "1Z932R800392060079");
        assert_eq!(record.extra.get("status_code"), Some(&json!("DE")));
        assert_eq!(record.extra.get("carrier_id"), Some(&json!(1)));
        assert_eq!(record.actual_delivery_date, None);
        assert_eq!(record.events.len(), 1);
        assert_eq!(record.events[0].city_locality.as_deref(), Some("Austin"));
        assert_eq!(record.events[0].extra.get("latitude"), Some(&json!(30.26)));
    }

    #[test]
    fn test_serializes_in_camel_case() {
        let record = TrackingRecord {
            tracking_number: "9400".to_string(),
            status_description: "In Transit".to_string(),
            carrier_status_description: Some("Departed".to_string()),
            ..Default::default()
        };

        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["trackingNumber"], "9400");
        assert_eq!(value["statusDescription"], "In Transit");
        assert_eq!(value["carrierStatusDescription"], "Departed");
        assert!(value.get("tracking_number").is_none());
    }

    #[test]
    fn test_omits_fields_the_provider_did_not_send() {
        let record: TrackingRecord = serde_json::from_value(json!({
            "tracking_number": "9400",
            "status_description": "Accepted",
            "events": [{ "description": "Label created" }]
        }))
        .unwrap();

        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(
            value,
            json!({
                "trackingNumber": "9400",
                "statusDescription": "Accepted",
                "events": [{ "description": "Label created" }]
            })
        );
    }

    #[test]
    fn test_carries_unknown_fields_through() {
        let record: TrackingRecord = serde_json::from_value(json!({
            "tracking_number": "1Z",
            "status_description": "Delivered",
            "carrier_id": "se-123",
            "carrier_detail_code": "X1",
            "label_details": { "ship_to_name": "A", "package_ids": [1, 2] },
            "events": [{ "description": "d", "status_detail_code": "SD" }]
        }))
        .unwrap();

        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["carrierId"], "se-123");
        assert_eq!(value["carrierDetailCode"], "X1");
        assert_eq!(
            value["labelDetails"],
            json!({ "shipToName": "A", "packageIds": [1, 2] })
        );
        assert_eq!(value["events"][0]["statusDetailCode"], "SD");
        assert!(value.get("carrier_detail_code").is_none());
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("carrier_detail_code"), "carrierDetailCode");
        assert_eq!(camel_case("signer"), "signer");
        assert_eq!(camel_case("_private"), "private");
        assert_eq!(camel_case("already_camelCase"), "alreadyCamelCase");
    }

    #[test]
    fn test_summary_uses_placeholder_for_missing_fields() {
        let record = TrackingRecord {
            tracking_number: "9400".to_string(),
            status_description: "Accepted".to_string(),
            carrier_status_description: Some(String::new()),
            ..Default::default()
        };

        let summary = record.summary();

        assert_eq!(summary.tracking_number, "9400");
        assert_eq!(summary.status, "Accepted");
        assert_eq!(summary.carrier_status, NOT_AVAILABLE);
        assert_eq!(summary.estimated_delivery, NOT_AVAILABLE);
        assert_eq!(summary.actual_delivery, NOT_AVAILABLE);
    }

    #[test]
    fn test_summary_keeps_dates_as_reported() {
        let record = TrackingRecord {
            estimated_delivery_date: Some("2024-03-01T17:30:00-05:00".to_string()),
            actual_delivery_date: Some("next Tuesday".to_string()),
            ..Default::default()
        };

        let summary = record.summary();

        assert_eq!(summary.estimated_delivery, "2024-03-01T17:30:00-05:00");
        assert_eq!(summary.actual_delivery, "next Tuesday");
    }
}
