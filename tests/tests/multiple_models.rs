use pretty_assertions::assert_eq;
use tests::{
    assert_ok,
    models::{Customer, Item},
    setup,
};
use tinyorm::Model;

#[test]
fn models_keep_independent_schemas() {
    let mut db = setup();

    assert_ok!(Customer::create_table(&mut db));
    assert_ok!(Item::create_table(&mut db));

    assert_ok!(Customer::create()
        .set("name", "Ann")
        .set("age", 30)
        .set("email", "ann@example.com")
        .exec(&mut db));
    assert_ok!(Item::create().set("sku", "AB-12").set("stock", 3).exec(&mut db));

    assert_eq!(
        assert_ok!(Customer::select().exec(&mut db)),
        vec!["Ann | 30 | ann@example.com"]
    );
    assert_eq!(assert_ok!(Item::select().exec(&mut db)), vec!["AB-12 | 3"]);

    let customer = assert_ok!(db.registry().lookup("Customer"));
    assert_eq!(
        customer.columns().collect::<Vec<_>>(),
        vec!["name", "age", "email"]
    );

    let item = assert_ok!(db.registry().lookup("Item"));
    assert_eq!(item.columns().collect::<Vec<_>>(), vec!["sku", "stock"]);
}

#[test]
fn defaults_are_coerced_per_model() {
    let mut db = setup();

    assert_ok!(Customer::create_table(&mut db));
    assert_ok!(Item::create_table(&mut db));

    assert_ok!(Customer::create().exec(&mut db));
    assert_ok!(Item::create().exec(&mut db));

    // `name` pads " " to two spaces and `age` clamps 0 up to 18
    assert_eq!(
        assert_ok!(Customer::select().exec(&mut db)),
        vec!["   | 18 | "]
    );

    // `sku` pads "x" to four characters and `stock` clamps -5 up to 0
    assert_eq!(assert_ok!(Item::select().exec(&mut db)), vec!["x    | 0"]);
}

#[test]
fn separate_handles_have_separate_registries() {
    let mut first = setup();
    let second = setup();

    assert_ok!(Item::create_table(&mut first));

    assert!(first.registry().contains("Item"));
    assert!(second.registry().is_empty());
}
