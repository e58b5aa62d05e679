#![cfg(test)]

use std::{
    collections::BTreeMap,
    sync::{Mutex, MutexGuard},
};

use near_sdk::serde_json;

use crate::event::EventKind;

type ThreadId = String;
type ValueKey = String;
type Value = String;

type Map = BTreeMap<ThreadId, BTreeMap<ValueKey, Value>>;

/// This structure can store arbitrary data and link it to a particular thread.
/// It allows the data to not be mixed in multithreaded test environment.
struct TestDataStorage {
    data: Mutex<Map>,
}

static DATA: TestDataStorage = TestDataStorage {
    data: Mutex::new(BTreeMap::new()),
};

const FUTURE_SUCCESS_KEY: &str = "FUTURE_SUCCESS_KEY";
const EVENTS_KEY: &str = "EVENTS_KEY";

fn data() -> MutexGuard<'static, Map> {
    DATA.data.lock().unwrap()
}

pub(crate) fn set_test_future_success(success: bool) {
    let mut data = data();
    let map = data.entry(thread_name()).or_default();
    map.insert(FUTURE_SUCCESS_KEY.to_owned(), success.to_string());
}

pub(crate) fn get_test_future_success() -> bool {
    let data = data();

    let Some(map) = data.get(&thread_name()) else {
        return true;
    };

    let Some(value) = map.get(FUTURE_SUCCESS_KEY) else {
        return true;
    };

    value.parse().unwrap()
}

pub(crate) fn store_event(event: &EventKind) {
    let mut data = data();
    let map = data.entry(thread_name()).or_default();

    let mut events: Vec<EventKind> = map
        .get(EVENTS_KEY)
        .map(|value| serde_json::from_str(value).unwrap())
        .unwrap_or_default();
    events.push(event.clone());

    map.insert(EVENTS_KEY.to_owned(), serde_json::to_string(&events).unwrap());
}

pub(crate) fn get_events() -> Vec<EventKind> {
    let data = data();

    let Some(map) = data.get(&thread_name()) else {
        return vec![];
    };

    let Some(value) = map.get(EVENTS_KEY) else {
        return vec![];
    };

    serde_json::from_str(value).unwrap()
}

fn thread_name() -> String {
    std::thread::current().name().unwrap().to_owned()
}

#[test]
fn thread_name_test() {
    assert_eq!(thread_name(), "common::test_data::thread_name_test");
}

#[test]
fn test_data_storage() {
    assert_eq!(get_test_future_success(), true);
    set_test_future_success(false);
    assert_eq!(get_test_future_success(), false);
    set_test_future_success(true);
    assert_eq!(get_test_future_success(), true)
}

#[test]
fn event_storage() {
    use near_sdk::AccountId;
    use penny_jar_model::DonationEvent;

    assert!(get_events().is_empty());

    let by: AccountId = "donor.near".parse().unwrap();
    let event = EventKind::Donation(DonationEvent::new(by, 42, "thanks".to_string()));
    store_event(&event);

    assert_eq!(get_events(), vec![event]);
}
