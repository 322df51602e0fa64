use kintree_core::{Gender, Person, PersonId, PersonValidationError};
use serde_json::json;

#[test]
fn numeric_and_string_ids_decode_to_same_id() {
    let from_number: Person = serde_json::from_value(json!({
        "id": 7,
        "name": "Petr",
        "surname": "Sidorov",
        "gender": "M",
        "fatherId": 3,
        "motherId": "4"
    }))
    .unwrap();
    let from_text: Person = serde_json::from_value(json!({
        "id": " 7 ",
        "name": "Petr",
        "surname": "Sidorov",
        "gender": "M",
        "fatherId": "3",
        "motherId": 4
    }))
    .unwrap();

    assert_eq!(from_number.id, PersonId::from(7));
    assert_eq!(from_number, from_text);
    assert_eq!(from_number.father_id, Some(PersonId::from(3)));
}

#[test]
fn blank_parent_refs_and_dates_decode_as_none() {
    let person: Person = serde_json::from_value(json!({
        "id": "1",
        "name": "Ivan",
        "surname": "Ivanov",
        "gender": "M",
        "birthDate": "1950-01-01",
        "deathDate": "",
        "fatherId": "",
        "motherId": null
    }))
    .unwrap();

    assert_eq!(person.birth_date.as_deref(), Some("1950-01-01"));
    assert_eq!(person.death_date, None);
    assert_eq!(person.father_id, None);
    assert_eq!(person.mother_id, None);
    assert!(person.is_root_candidate());
}

#[test]
fn missing_optional_fields_default_to_none() {
    let person: Person = serde_json::from_value(json!({
        "id": "9",
        "name": "Olga",
        "surname": "Orlova",
        "gender": "female"
    }))
    .unwrap();

    assert_eq!(person.gender, Gender::Female);
    assert_eq!(person.birth_date, None);
    assert!(person.is_root_candidate());
}

#[test]
fn blank_person_id_is_rejected() {
    let err = serde_json::from_value::<Person>(json!({
        "id": "  ",
        "name": "Nobody",
        "surname": "Blank",
        "gender": "F"
    }))
    .unwrap_err();

    assert!(
        err.to_string().contains("person id must not be blank"),
        "unexpected error: {err}"
    );
}

#[test]
fn serialization_uses_contract_field_names() {
    let person = Person::new(PersonId::from(3), "Alex", "Ivanov", Gender::Male)
        .with_parents(Some(PersonId::from(1)), Some(PersonId::from(2)));

    let json = serde_json::to_value(&person).unwrap();
    assert_eq!(json["id"], "3");
    assert_eq!(json["gender"], "M");
    assert_eq!(json["fatherId"], "1");
    assert_eq!(json["motherId"], "2");
    assert!(json["birthDate"].is_null());

    let decoded: Person = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, person);
}

#[test]
fn validate_requires_name_and_surname() {
    let mut person = Person::new(PersonId::from(1), "  ", "Ivanov", Gender::Male);
    assert_eq!(person.validate().unwrap_err(), PersonValidationError::EmptyName);

    person.name = "Ivan".to_string();
    person.surname = String::new();
    assert_eq!(
        person.validate().unwrap_err(),
        PersonValidationError::EmptySurname
    );

    person.surname = "Ivanov".to_string();
    assert!(person.validate().is_ok());
}

#[test]
fn display_name_joins_name_and_surname() {
    let person = Person::new(PersonId::from(2), "Maria", "Ivanova", Gender::Female);
    assert_eq!(person.display_name(), "Maria Ivanova");
    assert!(!person.has_parent(&PersonId::from(1)));
}
