use serde::{Deserialize, Deserializer, Serialize};

/// Endpoint answering the modal availability check.
pub const SEARCH_AVAILABILITY_MODAL_PATH: &str = "/search-availability-modal";

/// Page that starts a reservation for a room and date range.
pub const RESERVE_ROOM_PATH: &str = "/reserve-room";

/// Dates travel as `dd/mm/yyyy` in both directions.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Form body sent to the availability endpoint.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AvailabilityRequest {
    pub start_date: String,
    pub end_date: String,
    pub csrf_token: String,
    pub room_id: String,
}

impl AvailabilityRequest {
    /// Multipart field names paired with their values, in submission order.
    pub fn form_fields(&self) -> [(&'static str, &str); 4] {
        [
            ("start_date", self.start_date.as_str()),
            ("end_date", self.end_date.as_str()),
            ("csrf_token", self.csrf_token.as_str()),
            ("room_id", self.room_id.as_str()),
        ]
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AvailabilityResponse {
    pub ok: bool,
    #[serde(default, deserialize_with = "string_or_number")]
    pub room_id: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AvailabilityResponse {
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// Link to the reservation page for the room and dates in this response.
    pub fn reserve_link(&self) -> String {
        reserve_room_link(&self.room_id, &self.start_date, &self.end_date)
    }
}

/// `/reserve-room?id=<room>&sd=<start>&ed=<end>`; dates keep their slashes.
pub fn reserve_room_link(room_id: &str, start_date: &str, end_date: &str) -> String {
    format!(
        "{}?id={}&sd={}&ed={}",
        RESERVE_ROOM_PATH, room_id, start_date, end_date
    )
}

// Room ids come back as strings from some handlers and as numbers from others.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RoomId {
        Text(String),
        Number(i64),
        Missing(Option<()>),
    }

    Ok(match RoomId::deserialize(deserializer)? {
        RoomId::Text(text) => text,
        RoomId::Number(number) => number.to_string(),
        RoomId::Missing(_) => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserve_link_keeps_dates_verbatim() {
        let response = AvailabilityResponse::from_json(
            r#"{"ok":true,"room_id":"7","start_date":"01/06/2024","end_date":"05/06/2024"}"#,
        )
        .unwrap();

        assert!(response.ok);
        assert_eq!(
            response.reserve_link(),
            "/reserve-room?id=7&sd=01/06/2024&ed=05/06/2024"
        );
    }

    #[test]
    fn numeric_room_id_is_accepted() {
        let response = AvailabilityResponse::from_json(
            r#"{"ok":true,"room_id":2,"start_date":"01/06/2024","end_date":"02/06/2024"}"#,
        )
        .unwrap();
        assert_eq!(response.room_id, "2");
    }

    #[test]
    fn sparse_negative_response_decodes() {
        let response =
            AvailabilityResponse::from_json(r#"{"ok":false,"message":"Available !"}"#).unwrap();
        assert!(!response.ok);
        assert!(response.room_id.is_empty());
        assert_eq!(response.message.as_deref(), Some("Available !"));
    }

    #[test]
    fn malformed_body_is_an_error() {
        assert!(AvailabilityResponse::from_json("<html>502</html>").is_err());
    }

    #[test]
    fn form_fields_follow_the_endpoint_contract() {
        let request = AvailabilityRequest {
            start_date: "01/06/2024".into(),
            end_date: "05/06/2024".into(),
            csrf_token: "tok".into(),
            room_id: "1".into(),
        };
        let names: Vec<_> = request.form_fields().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["start_date", "end_date", "csrf_token", "room_id"]);
    }
}
