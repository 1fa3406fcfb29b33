mod common;

use expense_tracker::{init, Ledger, LoadPolicy, Record};

#[test]
fn ledger_smoke() {
    init();

    let path = common::fresh_storage_path();
    let mut ledger =
        Ledger::open_with_policy(&path, LoadPolicy::Strict).expect("open missing file");
    ledger
        .append(Record::new(9.99, "Books", "paperback"))
        .expect("append");

    assert_eq!(ledger.path(), path.as_path());
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.list()[0].description(), "paperback");
}
