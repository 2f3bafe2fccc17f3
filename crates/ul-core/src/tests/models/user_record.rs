use crate::UserRecord;

use serde_json::json;

#[test]
fn given_api_payload_when_deserialized_then_accessors_return_fields() {
    // Given
    let payload = json!({
        "gender": "female",
        "name": { "title": "Ms", "first": "Ana", "last": "Ruiz" },
        "location": {
            "street": { "number": 5, "name": "Calle Mayor" },
            "city": "Sevilla",
            "country": "Spain"
        },
        "email": "ana.ruiz@example.com",
        "login": { "uuid": "9f1c6a52-6e1d-4b0e-8d0a-0c0d8f6f1f11", "username": "ana" },
        "picture": {
            "large": "https://randomuser.me/api/portraits/women/1.jpg",
            "medium": "https://randomuser.me/api/portraits/med/women/1.jpg",
            "thumbnail": "https://randomuser.me/api/portraits/thumb/women/1.jpg"
        },
        "nat": "ES"
    });

    // When
    let record: UserRecord = serde_json::from_value(payload).unwrap();

    // Then
    assert_eq!(record.id(), "9f1c6a52-6e1d-4b0e-8d0a-0c0d8f6f1f11");
    assert_eq!(record.first_name(), "Ana");
    assert_eq!(record.last_name(), "Ruiz");
    assert_eq!(record.country(), "Spain");
    assert_eq!(
        record.thumbnail(),
        "https://randomuser.me/api/portraits/thumb/women/1.jpg"
    );
    assert_eq!(record.location.city.as_deref(), Some("Sevilla"));
    assert_eq!(record.nat.as_deref(), Some("ES"));
}

#[test]
fn given_minimal_payload_when_deserialized_then_optional_fields_are_none() {
    let payload = json!({
        "name": { "first": "Leo", "last": "Dupont" },
        "location": { "country": "France" },
        "login": { "uuid": "2" },
        "picture": { "thumbnail": "t.jpg" }
    });

    let record: UserRecord = serde_json::from_value(payload).unwrap();

    assert_eq!(record, UserRecord::new("2", "Leo", "Dupont", "France", "t.jpg"));
}

#[test]
fn given_payload_without_uuid_when_deserialized_then_error() {
    let payload = json!({
        "name": { "first": "Leo", "last": "Dupont" },
        "location": { "country": "France" },
        "login": {},
        "picture": { "thumbnail": "t.jpg" }
    });

    assert!(serde_json::from_value::<UserRecord>(payload).is_err());
}
