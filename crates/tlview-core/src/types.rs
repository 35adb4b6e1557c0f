//! Domain types for the timeline feed
//!
//! The endpoint is loosely typed: the same field can arrive as a string, a
//! number, a boolean or `null`, and any field may be missing. Everything is
//! normalized to display strings on the way in so a malformed record shows
//! up as blank cells instead of failing the whole payload.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::html::TrustedHtml;

/// Decoded response body of the timeline endpoint.
///
/// The two top-level collections are required; a body without them is a
/// shape error.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TimelinePayload {
    #[serde(rename = "Body")]
    pub body: Vec<BodyRecord>,

    #[serde(rename = "Timeline")]
    pub timeline: Vec<TimelineRecord>,
}

/// One full-width background/about panel shown above the table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BodyRecord {
    #[serde(default, deserialize_with = "loose_string")]
    pub id: String,

    /// Relative asset path of the background image
    #[serde(default, deserialize_with = "loose_string")]
    pub background: String,

    #[serde(default)]
    pub background_opacity: Opacity,

    #[serde(default)]
    pub about: TrustedHtml,
}

/// One row of media-episode metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TimelineRecord {
    #[serde(default, deserialize_with = "loose_string")]
    pub id: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub episode: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub title: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub media_name: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub media_number: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub image: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub icon: String,
    /// Empty when the episode has no audio
    #[serde(default, deserialize_with = "loose_string")]
    pub audio: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub audio_size: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub status: String,
    #[serde(rename = "isActive", default, deserialize_with = "loose_string")]
    pub is_active: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub create_date: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub category: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub description: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub remote_id: String,
    #[serde(rename = "inId", default, deserialize_with = "loose_string")]
    pub in_id: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub epoch: String,
}

impl TimelineRecord {
    /// `Epoch` as a UTC timestamp when it parses as Unix seconds.
    pub fn epoch_display(&self) -> Option<String> {
        let secs: i64 = self.epoch.trim().parse().ok()?;
        let utc = chrono::DateTime::from_timestamp(secs, 0)?;
        Some(utc.format("%Y-%m-%d %H:%M:%S UTC").to_string())
    }
}

// ─────────────────────────────────────────────────────────────────
// Opacity
// ─────────────────────────────────────────────────────────────────

/// Background opacity as an integer percentage (0–100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Opacity(u8);

impl Opacity {
    pub const OPAQUE: Opacity = Opacity(100);

    /// Build from any integer, clamping into 0–100.
    pub fn from_percent(percent: i64) -> Self {
        Self(percent.clamp(0, 100) as u8)
    }

    pub fn percent(self) -> u8 {
        self.0
    }

    /// Opacity scaled to a 0.0–1.0 fraction.
    pub fn fraction(self) -> f32 {
        f32::from(self.0) / 100.0
    }
}

impl Default for Opacity {
    fn default() -> Self {
        Self::OPAQUE
    }
}

impl<'de> Deserialize<'de> for Opacity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<Value>::deserialize(deserializer)?;
        let percent = match value {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        // An unusable value leaves the background fully opaque.
        Ok(percent
            .filter(|p| p.is_finite())
            .map(|p| Self::from_percent(p.round() as i64))
            .unwrap_or_default())
    }
}

// ─────────────────────────────────────────────────────────────────
// Loose field decoding
// ─────────────────────────────────────────────────────────────────

/// Accept a string, number, boolean or null and normalize it to a string.
pub(crate) fn loose_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_decodes_mixed_field_types() {
        let json = r#"{
            "Body": [{"Id": 1, "Background": "bg/hero.jpg", "BackgroundOpacity": "40", "About": "<p>Hi</p>"}],
            "Timeline": [{
                "Id": 7, "Episode": "E-01", "Title": "Pilot", "MediaName": "pilot.mp3",
                "MediaNumber": 3, "Image": "img/a.png", "Icon": "ico/a.png", "Audio": "",
                "AudioSize": 1024, "Status": null, "isActive": true, "CreateDate": "2023-04-01",
                "Category": "Comedy", "Description": "First", "RemoteId": "r-1", "inId": 9,
                "Epoch": 1680307200
            }]
        }"#;

        let payload: TimelinePayload = serde_json::from_str(json).unwrap();

        assert_eq!(payload.body.len(), 1);
        assert_eq!(payload.body[0].id, "1");
        assert_eq!(payload.body[0].background_opacity.percent(), 40);
        assert_eq!(payload.body[0].about.as_str(), "<p>Hi</p>");

        let record = &payload.timeline[0];
        assert_eq!(record.id, "7");
        assert_eq!(record.media_number, "3");
        assert_eq!(record.audio_size, "1024");
        assert_eq!(record.status, "");
        assert_eq!(record.is_active, "true");
        assert_eq!(record.in_id, "9");
        assert_eq!(record.audio, "");
    }

    #[test]
    fn test_missing_fields_become_blank() {
        let record: TimelineRecord = serde_json::from_str(r#"{"Id": "5"}"#).unwrap();
        assert_eq!(record.id, "5");
        assert_eq!(record.title, "");
        assert_eq!(record.category, "");
    }

    #[test]
    fn test_payload_requires_top_level_collections() {
        let result = serde_json::from_str::<TimelinePayload>(r#"{"Body": []}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_opacity_clamps_and_defaults() {
        let body: BodyRecord = serde_json::from_str(r#"{"BackgroundOpacity": 250}"#).unwrap();
        assert_eq!(body.background_opacity.percent(), 100);

        let body: BodyRecord = serde_json::from_str(r#"{"BackgroundOpacity": -3}"#).unwrap();
        assert_eq!(body.background_opacity.percent(), 0);

        let body: BodyRecord = serde_json::from_str(r#"{"BackgroundOpacity": "n/a"}"#).unwrap();
        assert_eq!(body.background_opacity, Opacity::OPAQUE);

        let body: BodyRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(body.background_opacity, Opacity::OPAQUE);
    }

    #[test]
    fn test_opacity_fraction() {
        assert_eq!(Opacity::from_percent(50).fraction(), 0.5);
        assert_eq!(Opacity::from_percent(0).fraction(), 0.0);
        assert_eq!(Opacity::OPAQUE.fraction(), 1.0);
    }

    #[test]
    fn test_epoch_display() {
        let record = TimelineRecord {
            epoch: "1680307200".to_string(),
            ..Default::default()
        };
        assert_eq!(
            record.epoch_display().as_deref(),
            Some("2023-04-01 00:00:00 UTC")
        );

        let record = TimelineRecord {
            epoch: "yesterday".to_string(),
            ..Default::default()
        };
        assert!(record.epoch_display().is_none());
    }

    #[test]
    fn test_record_serializes_with_wire_names() {
        let record = TimelineRecord {
            id: "1".to_string(),
            is_active: "1".to_string(),
            in_id: "2".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["Id"], "1");
        assert_eq!(json["isActive"], "1");
        assert_eq!(json["inId"], "2");
        assert!(json.get("MediaName").is_some());
    }
}
