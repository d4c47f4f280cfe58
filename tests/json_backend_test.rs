use std::fs;
use stockroom::error::ErrorKind;
use stockroom::model::Item;
use stockroom::store::backend::CollectionBackend;
use stockroom::store::json_backend::JsonBackend;
use tempfile::TempDir;

fn item(id: u64, name: &str, photo: Option<&str>) -> Item {
    Item {
        id,
        name: name.to_string(),
        description: format!("{} description", name),
        photo: photo.map(str::to_string),
    }
}

#[test]
fn missing_file_is_an_empty_collection() {
    let dir = TempDir::new().unwrap();
    let backend = JsonBackend::new(dir.path().join("items.json"));
    assert!(backend.load_items().unwrap().is_empty());
}

#[test]
fn empty_file_is_an_empty_collection() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("items.json");
    fs::write(&path, "").unwrap();
    assert!(JsonBackend::new(&path).load_items().unwrap().is_empty());
}

#[test]
fn save_and_reload() {
    let dir = TempDir::new().unwrap();
    let backend = JsonBackend::new(dir.path().join("items.json"));
    let items = vec![item(1, "Drill", Some("a.png")), item(2, "Saw", None)];

    backend.save_items(&items).unwrap();

    assert_eq!(backend.load_items().unwrap(), items);
}

#[test]
fn save_leaves_no_temporary_files() {
    let dir = TempDir::new().unwrap();
    let backend = JsonBackend::new(dir.path().join("items.json"));

    backend.save_items(&[item(1, "Drill", None)]).unwrap();
    backend.save_items(&[item(1, "Hammer", None)]).unwrap();

    let names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["items.json".to_string()]);
}

#[test]
fn document_is_a_readable_json_array() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("items.json");
    JsonBackend::new(&path)
        .save_items(&[item(1, "Drill", None)])
        .unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value[0]["id"], 1);
    assert_eq!(value[0]["name"], "Drill");
    assert!(value[0]["photo"].is_null());
}

#[test]
fn records_without_optional_fields_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("items.json");
    fs::write(&path, r#"[{"id": 3, "name": "Clamp"}]"#).unwrap();

    let items = JsonBackend::new(&path).load_items().unwrap();
    assert_eq!(items[0].description, "");
    assert_eq!(items[0].photo, None);
}

#[test]
fn corrupt_file_is_store_unavailable() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("items.json");
    fs::write(&path, "[{ broken").unwrap();

    let err = JsonBackend::new(&path).load_items().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::StoreUnavailable);
}

#[test]
fn save_creates_the_parent_directory() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("items.json");
    let backend = JsonBackend::new(&path);

    backend.save_items(&[item(1, "Drill", None)]).unwrap();

    assert!(path.is_file());
    assert_eq!(backend.load_items().unwrap().len(), 1);
}

#[test]
fn directory_in_place_of_file_is_store_unavailable() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("items.json");
    fs::create_dir(&path).unwrap();

    let err = JsonBackend::new(&path).load_items().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::StoreUnavailable);
}
