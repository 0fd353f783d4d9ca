use style_lab::{AppState, Field, FieldValue, Mutation, Store};

fn sample_writes() -> Vec<Mutation> {
    vec![
        Mutation::ChangeEffect("sepia".to_string()),
        Mutation::ChangeCurFile("edited.png".to_string()),
        Mutation::ChangeInitFile("original.png".to_string()),
        Mutation::ChangeStatus(true),
        Mutation::ChangeModalStatus(true),
        Mutation::ChangeUrlInitFile("blob:original".to_string()),
        Mutation::ChangeUrlCurFile("blob:edited".to_string()),
        Mutation::ChangeResWidth(-1280),
        Mutation::ChangeResHeight(720),
        Mutation::ChangeActFilter("starry-night".to_string()),
        Mutation::ChangeCurFileId(42),
    ]
}

fn expected_value(mutation: &Mutation) -> FieldValue {
    match mutation.clone() {
        Mutation::ChangeEffect(v)
        | Mutation::ChangeCurFile(v)
        | Mutation::ChangeInitFile(v)
        | Mutation::ChangeUrlInitFile(v)
        | Mutation::ChangeUrlCurFile(v)
        | Mutation::ChangeActFilter(v) => FieldValue::Text(v),
        Mutation::ChangeStatus(v) | Mutation::ChangeModalStatus(v) => FieldValue::Flag(v),
        Mutation::ChangeResWidth(v) | Mutation::ChangeResHeight(v) | Mutation::ChangeCurFileId(v) => {
            FieldValue::Number(v)
        }
    }
}

#[test]
fn fresh_store_exposes_startup_defaults() {
    let store = Store::new();
    assert_eq!(store.cur_effect(), "отсутствует");
    assert_eq!(store.cur_file(), "");
    assert_eq!(store.init_file(), "");
    assert!(!store.cur_status());
    assert!(!store.modal_status());
    assert_eq!(store.url_init_file(), "");
    assert_eq!(store.url_cur_file(), "");
    assert_eq!(store.cur_resolution_width(), 0);
    assert_eq!(store.cur_resolution_height(), 0);
    assert_eq!(store.act_filter(), "");
    assert_eq!(store.cur_file_id(), -1);
}

#[test]
fn every_write_is_read_back_exactly() {
    for mutation in sample_writes() {
        let store = Store::new();
        let field = mutation.field();
        let expected = expected_value(&mutation);
        store.commit(mutation);
        assert_eq!(store.get(field), expected, "field {field}");
    }
}

#[test]
fn writing_one_field_leaves_the_others_untouched() {
    let defaults = AppState::default();
    for mutation in sample_writes() {
        let store = Store::new();
        let written = mutation.field();
        store.commit(mutation);
        let after = store.snapshot();
        for field in Field::ALL.into_iter().filter(|field| *field != written) {
            assert_eq!(
                field.read(&after),
                field.read(&defaults),
                "{written} changed {field}"
            );
        }
    }
}

#[test]
fn changing_current_file_does_not_touch_its_url_or_id() {
    let store = Store::new();
    store.change_cur_file("a.png");
    assert_eq!(store.cur_file(), "a.png");
    assert_eq!(store.url_cur_file(), "");
    assert_eq!(store.cur_file_id(), -1);
}

#[test]
fn repeating_a_write_is_idempotent() {
    let once = Store::new();
    once.change_active_filter("mosaic");

    let twice = Store::new();
    twice.change_active_filter("mosaic");
    twice.change_active_filter("mosaic");

    assert_eq!(once.snapshot(), twice.snapshot());
}

#[test]
fn last_write_wins() {
    let store = Store::new();
    store.change_resolution_width(100);
    store.change_resolution_width(200);
    assert_eq!(store.cur_resolution_width(), 200);
}

#[test]
fn modal_status_toggles_back_to_closed() {
    let store = Store::new();
    store.change_modal_status(true);
    assert!(store.modal_status());
    store.change_modal_status(false);
    assert!(!store.modal_status());
}

#[test]
fn out_of_domain_values_are_stored_verbatim() {
    let store = Store::new();
    store.change_resolution_width(-5);
    store.change_resolution_height(i64::MIN);
    store.change_cur_file_id(-99);
    store.change_effect("");
    assert_eq!(store.cur_resolution_width(), -5);
    assert_eq!(store.cur_resolution_height(), i64::MIN);
    assert_eq!(store.cur_file_id(), -99);
    assert_eq!(store.cur_effect(), "");
}

#[test]
fn writes_are_visible_to_other_handles_immediately() {
    let writer = Store::new();
    let reader = writer.clone();
    writer.change_init_file("upload-7.jpg");
    writer.change_url_init_file("http://localhost:5000/tmp/upload-7.jpg");
    writer.change_status(true);
    assert_eq!(reader.init_file(), "upload-7.jpg");
    assert_eq!(reader.url_init_file(), "http://localhost:5000/tmp/upload-7.jpg");
    assert!(reader.cur_status());
}
