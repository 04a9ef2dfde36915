use chrono::NaiveDate;
use mailprep_model::{FIELDS, Field, PrepError, Record};

#[test]
fn record_serializes_with_published_names() {
    let record = Record {
        firstname: "Buck".to_string(),
        lastname: "Ulmer".to_string(),
        delivery_date: NaiveDate::from_ymd_opt(2003, 12, 31),
        ..Record::default()
    };
    let json = serde_json::to_value(&record).expect("serialize record");
    assert_eq!(json["First_name"], "Buck");
    assert_eq!(json["Last_name"], "Ulmer");
    assert_eq!(json["Delivery_date"], "12/31/2003");
    assert!(json["Last_service_date"].is_null());
    assert_eq!(json["Veh_Year"], "");
}

#[test]
fn every_field_has_a_json_name() {
    let record = Record::default();
    let json = serde_json::to_value(&record).expect("serialize record");
    let object = json.as_object().expect("object");
    assert_eq!(object.len(), FIELDS.len());
    for field in FIELDS {
        assert!(
            object.contains_key(field.json_name()),
            "missing key {}",
            field.json_name()
        );
    }
}

#[test]
fn errors_render_descriptive_messages() {
    assert_eq!(
        PrepError::DuplicateHeader("Zip".to_string()).to_string(),
        "duplicate header column: Zip"
    );
    assert_eq!(
        PrepError::MissingRequiredField(Field::City).to_string(),
        "missing required field: city"
    );
    assert_eq!(
        PrepError::MalformedRow {
            row: 3,
            expected: 8,
            actual: 5
        }
        .to_string(),
        "row 3: 5 columns, mapped fields need 8"
    );
}
