use crate::LoadableDataEvent;
use serde_json::json;

type ListEvent = LoadableDataEvent<Vec<String>, String>;

#[test]
fn serialize_loading_event() {
    assert_eq!(
        serde_json::to_value(ListEvent::loading(true)).unwrap(),
        json!({ "state": "isLoading", "storeDate": true })
    );
    assert_eq!(
        serde_json::to_value(ListEvent::loading(false)).unwrap(),
        json!({ "state": "isLoading", "storeDate": false })
    );
}

#[test]
fn serialize_success_event() {
    assert_eq!(
        serde_json::to_value(ListEvent::success(vec!["Message".to_owned()])).unwrap(),
        json!({ "state": "success", "data": ["Message"] })
    );
}

#[test]
fn serialize_failed_event() {
    assert_eq!(
        serde_json::to_value(ListEvent::failed("error".to_owned(), false)).unwrap(),
        json!({ "state": "failed", "storeDate": false, "failure": "error" })
    );
}

#[test]
fn deserialize_failed_event() {
    let event: ListEvent = serde_json::from_value(json!({
        "state": "failed",
        "storeDate": true,
        "failure": "error"
    }))
    .unwrap();
    assert_eq!(event, ListEvent::failed("error".to_owned(), true));
}
