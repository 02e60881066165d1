use pretty_assertions::assert_eq;
use tests::{
    assert_err, assert_ok, init_logging,
    models::{Advert, Empty, Item},
    setup, setup_logged, LoggingDriver, IN_MEMORY,
};
use tinyorm::{
    schema::{CharField, ModelBuilder},
    Db, Model,
};

#[test]
fn create_table_twice_fails_in_the_store() {
    let mut db = setup();

    assert_ok!(Advert::create_table(&mut db));
    let err = assert_err!(Advert::create_table(&mut db));
    assert!(err.is_driver_operation_failed());

    // The existing table is untouched
    assert_ok!(Advert::create().set("title", "lamp").exec(&mut db));
    assert_eq!(assert_ok!(Advert::select().exec(&mut db)), vec!["lamp | 0"]);
}

#[test]
fn dropped_table_keeps_its_registration() {
    let mut db = setup();

    assert_ok!(Advert::create_table(&mut db));
    assert_ok!(Advert::drop_table(&mut db));

    let err = assert_err!(Advert::select().exec(&mut db));
    assert!(err.is_driver_operation_failed());

    let err = assert_err!(Advert::create().set("title", "lamp").exec(&mut db));
    assert!(err.is_driver_operation_failed());

    assert_ok!(db.registry().lookup("Advert"));
}

#[test]
fn table_can_be_created_again_after_drop() {
    let mut db = setup();

    assert_ok!(Advert::create_table(&mut db));
    assert_ok!(Advert::create().set("title", "lamp").exec(&mut db));
    assert_ok!(Advert::drop_table(&mut db));
    assert_ok!(Advert::create_table(&mut db));

    assert!(assert_ok!(Advert::select().exec(&mut db)).is_empty());
}

#[test]
fn unregistered_models_are_unknown() {
    let (mut db, ops_log) = setup_logged();

    let err = assert_err!(Advert::drop_table(&mut db));
    assert!(err.is_unknown_model());
    assert_eq!(err.to_string(), "unknown model `Advert`");

    assert!(assert_err!(Advert::select().exec(&mut db)).is_unknown_model());
    assert!(assert_err!(Advert::create().exec(&mut db)).is_unknown_model());

    assert!(ops_log.lock().unwrap().is_empty());
}

#[test]
fn model_without_fields_is_rejected() {
    let (mut db, ops_log) = setup_logged();

    let err = assert_err!(Empty::create_table(&mut db));
    assert!(err.is_invalid_configuration());
    assert!(!db.registry().contains("Empty"));
    assert!(ops_log.lock().unwrap().is_empty());
}

#[test]
fn unknown_select_column_is_rejected() {
    let (mut db, ops_log) = setup_logged();
    assert_ok!(Advert::create_table(&mut db));

    let err = assert_err!(Advert::select().column("colour").exec(&mut db));
    assert!(err.is_unknown_field());
    assert_eq!(ops_log.lock().unwrap().len(), 1);
}

#[test]
fn statements_reach_the_store_in_order() {
    let (mut db, ops_log) = setup_logged();

    assert_ok!(Advert::create_table(&mut db));
    assert_ok!(Advert::create()
        .set("title", "iPhone X")
        .set("price", 100)
        .exec(&mut db));
    assert_ok!(Advert::select().exec(&mut db));
    assert_ok!(Advert::drop_table(&mut db));

    let ops = ops_log.lock().unwrap();
    let tables = ops.iter().map(|op| op.statement.table()).collect::<Vec<_>>();
    assert_eq!(tables, vec!["Advert"; 4]);

    assert!(ops[1].is_insert());
    assert!(ops.iter().all(|op| !op.failed()));
}

#[test]
fn operations_require_a_connection() {
    init_logging();
    let driver = assert_ok!(tinyorm::driver::from_url(IN_MEMORY));
    let mut db = Db::new(LoggingDriver::new(driver));
    assert!(!db.is_connected());

    let err = assert_err!(Advert::create_table(&mut db));
    assert!(err.is_invalid_configuration());
    assert!(!db.registry().contains("Advert"));
}

#[test]
fn close_and_reconnect() {
    let mut db = setup();
    assert!(db.is_connected());

    let err = assert_err!(db.connect());
    assert!(err.is_invalid_configuration());

    assert_ok!(db.close());
    assert!(!db.is_connected());
    assert_ok!(db.close());

    assert!(assert_err!(Advert::select().exec(&mut db)).is_invalid_configuration());

    assert_ok!(db.connect());
    assert_ok!(Advert::create_table(&mut db));
    assert!(assert_ok!(Advert::select().exec(&mut db)).is_empty());
}

#[test]
fn builder_creates_declared_tables() {
    init_logging();

    let mut db = assert_ok!(Db::builder()
        .register::<Advert>()
        .register::<Item>()
        .connect(IN_MEMORY));

    // Declared models are only registered once their tables exist
    assert!(db.registry().is_empty());

    assert_ok!(db.create_tables());
    assert_eq!(db.registry().len(), 2);

    assert_ok!(Item::create().set("sku", "AB-12").exec(&mut db));
    assert_eq!(assert_ok!(Item::select().exec(&mut db)), vec!["AB-12 | 0"]);
}

#[test]
fn builder_rejects_invalid_models() {
    init_logging();

    let err = assert_err!(Db::builder()
        .register::<Advert>()
        .register::<Empty>()
        .connect(IN_MEMORY)
        .and_then(|mut db| db.create_tables()));
    assert!(err.is_invalid_configuration());
}

#[test]
fn invalid_urls_are_rejected() {
    init_logging();

    let err = assert_err!(Db::builder().connect("postgresql://localhost/shop"));
    assert!(err.is_invalid_connection_url());

    let err = assert_err!(Db::builder().connect("sqlite:"));
    assert!(err.is_invalid_configuration());
}

#[test]
fn file_database_outlives_the_handle() {
    init_logging();

    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite:{}", dir.path().join("shop.db").display());

    let mut db = assert_ok!(Db::builder().connect(&url));
    assert_ok!(Advert::create_table(&mut db));
    assert_ok!(Advert::create()
        .set("title", "lamp")
        .set("price", 12)
        .exec(&mut db));
    assert_ok!(db.close());

    let mut db = assert_ok!(Db::builder().connect(&url));
    let err = assert_err!(Advert::create_table(&mut db));
    assert!(err.is_driver_operation_failed());

    assert_eq!(assert_ok!(Advert::select().exec(&mut db)), vec!["lamp | 12"]);
}

#[test]
fn file_path_may_contain_spaces() {
    init_logging();

    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("my shop")).unwrap();
    let path = dir.path().join("my shop").join("shop.db");

    let mut db = assert_ok!(Db::builder().connect(&format!("sqlite:{}", path.display())));
    assert_ok!(Advert::create_table(&mut db));
    assert_ok!(db.close());

    assert!(path.exists());
}

/// Declares `Advert` again with a different column set.
struct RenamedAdvert;

impl Model for RenamedAdvert {
    const NAME: &'static str = "Advert";

    fn fields(model: ModelBuilder) -> ModelBuilder {
        model.field("sku", CharField::builder())
    }
}

#[test]
fn failed_redeclaration_replaces_the_registered_columns() {
    let mut db = setup();
    assert_ok!(Advert::create_table(&mut db));

    let err = assert_err!(RenamedAdvert::create_table(&mut db));
    assert!(err.is_driver_operation_failed());

    let advert = assert_ok!(db.registry().lookup("Advert"));
    assert_eq!(advert.columns().collect::<Vec<_>>(), vec!["sku"]);

    let err = assert_err!(Advert::create().set("title", "lamp").exec(&mut db));
    assert!(err.is_unknown_field());
}
