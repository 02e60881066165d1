use pretty_assertions::assert_eq;
use tests::{
    assert_err, assert_ok,
    models::{Advert, Customer},
    setup, setup_logged,
};
use tinyorm::Model;

#[test]
fn value_shorter_than_min_length_inserts_nothing() {
    let (mut db, ops_log) = setup_logged();
    assert_ok!(Customer::create_table(&mut db));

    let err = assert_err!(Customer::create()
        .set("name", "A")
        .set("age", 30)
        .exec(&mut db));

    assert!(err.is_validation());
    assert_eq!(err.validation_field(), Some("name"));
    assert_eq!(
        err.to_string(),
        "invalid value for field `name`: value length 1 is too short (minimum: 2)"
    );

    assert!(!ops_log.lock().unwrap().iter().any(|op| op.is_insert()));
    assert!(assert_ok!(Customer::select().exec(&mut db)).is_empty());
}

#[test]
fn value_longer_than_max_length_fails() {
    let mut db = setup();
    assert_ok!(Customer::create_table(&mut db));

    let err = assert_err!(Customer::create()
        .set("name", "x".repeat(21))
        .exec(&mut db));

    assert!(err.is_validation());
    assert_eq!(err.validation_field(), Some("name"));
}

#[test]
fn negative_value_below_min_value_fails() {
    let mut db = setup();
    assert_ok!(Advert::create_table(&mut db));

    let err = assert_err!(Advert::create()
        .set("title", "broken phone")
        .set("price", -1)
        .exec(&mut db));

    assert!(err.is_validation());
    assert_eq!(err.validation_field(), Some("price"));
    assert!(assert_ok!(Advert::select().exec(&mut db)).is_empty());
}

#[test]
fn explicit_values_are_not_coerced() {
    let mut db = setup();
    assert_ok!(Customer::create_table(&mut db));

    // The default for `age` is clamped to 18, an explicit 17 is not.
    let err = assert_err!(Customer::create()
        .set("name", "Ann")
        .set("age", 17)
        .exec(&mut db));
    assert_eq!(err.validation_field(), Some("age"));
}

#[test]
fn wrong_value_type_fails() {
    let mut db = setup();
    assert_ok!(Advert::create_table(&mut db));

    let err = assert_err!(Advert::create()
        .set("title", "lamp")
        .set("price", "cheap")
        .exec(&mut db));

    assert!(err.is_validation());
    assert_eq!(
        err.to_string(),
        "invalid value for field `price`: expected integer value, got text"
    );
}

#[test]
fn null_values_fail() {
    let mut db = setup();
    assert_ok!(Advert::create_table(&mut db));

    let err = assert_err!(Advert::create()
        .set("title", None::<String>)
        .exec(&mut db));

    assert!(err.is_validation());
    assert_eq!(err.validation_field(), Some("title"));
}

#[test]
fn first_failing_field_aborts() {
    let mut db = setup();
    assert_ok!(Customer::create_table(&mut db));

    let err = assert_err!(Customer::create()
        .set("email", "e".repeat(60))
        .set("name", "B")
        .exec(&mut db));

    // Fields are checked in declaration order, not in the order they were set
    assert_eq!(err.validation_field(), Some("name"));
}

#[test]
fn unknown_fields_are_rejected() {
    let (mut db, ops_log) = setup_logged();
    assert_ok!(Advert::create_table(&mut db));

    let err = assert_err!(Advert::create()
        .set("title", "lamp")
        .set("colour", "red")
        .exec(&mut db));

    assert!(err.is_unknown_field());
    assert_eq!(err.to_string(), "model `Advert` has no field `colour`");
    assert_eq!(ops_log.lock().unwrap().len(), 1);
}
