use std::fs;
use tempfile::TempDir;

use tagrec_catalog::loader::{load_items_from_path, load_users_from_path};
use tagrec_catalog::{sample, CatalogStore, InMemoryUserDirectory};
use tagrec_core::error::Error;
use tagrec_core::normalize::parse_tags;
use tagrec_core::traits::UserDirectory;
use tagrec_core::types::Item;

fn item(id: u32, tags: &str) -> Item {
    Item {
        id,
        name: format!("item-{}", id),
        category: "Misc".to_string(),
        tags: parse_tags(tags),
        price: 1.0,
        rating: 4.0,
    }
}

#[test]
fn load_preserves_insertion_order() {
    let store = CatalogStore::load(vec![item(3, "c"), item(1, "a"), item(2, "b")]).expect("load");
    let ids: Vec<u32> = store.all_items().iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
    assert_eq!(store.len(), 3);
}

#[test]
fn load_rejects_duplicate_id() {
    let err = CatalogStore::load(vec![item(1, "a"), item(1, "b")]).unwrap_err();
    assert!(matches!(err, Error::Validation(_)), "got {err:?}");
}

#[test]
fn load_rejects_empty_tag_set() {
    // Whitespace-only tags normalize away to nothing
    let err = CatalogStore::load(vec![item(1, " , , ")]).unwrap_err();
    assert!(matches!(err, Error::Validation(_)), "got {err:?}");
}

#[test]
fn load_rejects_out_of_range_fields() {
    let mut bad_price = item(1, "a");
    bad_price.price = -0.01;
    assert!(matches!(CatalogStore::load(vec![bad_price]), Err(Error::Validation(_))));

    let mut bad_rating = item(2, "b");
    bad_rating.rating = 5.5;
    assert!(matches!(CatalogStore::load(vec![bad_rating]), Err(Error::Validation(_))));
}

#[test]
fn get_by_id_hit_and_miss() {
    let store = CatalogStore::load(vec![item(7, "x")]).expect("load");
    assert_eq!(store.get_by_id(7).expect("present").id, 7);
    let err = store.get_by_id(8).unwrap_err();
    assert!(matches!(err, Error::NotFound(_)), "a miss is an internal consistency error");
}

#[test]
fn directory_lookup_hit_and_miss() {
    let dir = sample::sample_directory().expect("directory");
    assert_eq!(dir.len(), 5);
    let user = dir.lookup_user("Kishore").expect("known user");
    assert_eq!(user.preferences, "electronics,clothing");

    let err = dir.lookup_user("nobody").unwrap_err();
    assert!(matches!(err, Error::UserNotFound(_)), "got {err:?}");
}

#[test]
fn directory_rejects_duplicate_usernames() {
    let mut users = sample::sample_users();
    users.push(users[0].clone());
    let err = InMemoryUserDirectory::load(users).unwrap_err();
    assert!(matches!(err, Error::Validation(_)), "got {err:?}");
}

#[test]
fn sample_catalog_matches_reference_data() {
    let store = sample::sample_catalog().expect("sample catalog");
    assert_eq!(store.len(), 8);
    let phone = store.get_by_id(101).expect("item 101");
    assert_eq!(phone.name, "Smartphone");
    assert!(phone.tags.contains("electronics") && phone.tags.contains("mobile"));
}

#[test]
fn json_loader_normalizes_comma_separated_tags() {
    let tmp = TempDir::new().expect("tempdir");
    let items_path = tmp.path().join("items.json");
    fs::write(
        &items_path,
        r#"[{"id": 1, "name": "Phone", "category": "Electronics",
             "tags": " Electronics , Mobile ", "price": 10.0, "rating": 4.0}]"#,
    )
    .expect("write items");

    let items = load_items_from_path(&items_path).expect("load items");
    assert_eq!(items.len(), 1);
    let tags: Vec<&str> = items[0].tags.iter().map(String::as_str).collect();
    assert_eq!(tags, vec!["electronics", "mobile"]);
}

#[test]
fn json_loader_reads_user_records() {
    let tmp = TempDir::new().expect("tempdir");
    let users_path = tmp.path().join("users.json");
    fs::write(
        &users_path,
        r#"[{"username": "Ann", "age": 31, "gender": "F", "location": "Pune",
             "preferences": "books,toys"}]"#,
    )
    .expect("write users");

    let users = load_users_from_path(&users_path).expect("load users");
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].username, "Ann");
    // purchase_history is optional in the wire form
    assert!(users[0].purchase_history.is_empty());
}
