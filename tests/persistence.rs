use deskmate::api::AssistantApi;
use deskmate::commands::address::AddressAction;
use deskmate::store::fs::FileStore;
use deskmate::store::DataStore;
use tempfile::TempDir;

fn open(dir: &TempDir) -> AssistantApi<FileStore> {
    AssistantApi::open(FileStore::new(dir.path().to_path_buf())).unwrap()
}

#[test]
fn test_full_state_round_trip() {
    let dir = TempDir::new().unwrap();

    let mut api = open(&dir);
    api.add_contact("alice", "1234567890").unwrap();
    api.add_contact("alice", "0987654321").unwrap();
    api.add_birthday("alice", "29.02.2000").unwrap();
    api.add_email("alice", "alice@example.com").unwrap();
    api.address("alice", AddressAction::Add("12 Baker street")).unwrap();
    api.add_note("groceries", "milk, eggs", "home, weekly").unwrap();
    api.add_note("ideas", "write more tests", "").unwrap();
    api.save().unwrap();

    let reopened = open(&dir);
    assert_eq!(reopened.contacts(), api.contacts());
    assert_eq!(reopened.notes(), api.notes());

    let alice = reopened.contacts().find("Alice").unwrap();
    assert_eq!(alice.phones().len(), 2);
    assert_eq!(
        alice.address().map(|a| a.as_str()),
        Some("12 Baker street")
    );

    let titles: Vec<&str> = reopened
        .notes()
        .iter()
        .map(|n| n.title().as_str())
        .collect();
    assert_eq!(titles, vec!["groceries", "ideas"]);
}

#[test]
fn test_empty_dir_loads_empty_state() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("not-created-yet"));
    let snapshot = store.load().unwrap();
    assert!(snapshot.contacts.is_empty());
    assert!(snapshot.notes.is_empty());
}
