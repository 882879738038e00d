use tempfile::NamedTempFile;
use todolist_core::{Database, MoveDirection, TodoError};

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn positions(db: &Database, list_id: u64) -> Vec<(u64, u32)> {
    db.get_items(list_id)
        .expect("Failed to get items")
        .iter()
        .map(|item| (item.id, item.position))
        .collect()
}

#[test]
fn test_database_initialization() {
    let (_temp_file, _db) = create_test_db();

    assert!(_temp_file.path().exists());
}

#[test]
fn test_create_list() {
    let (_temp_file, mut db) = create_test_db();

    let list = db.create_list("Groceries").expect("Failed to create list");

    assert_eq!(list.title, "Groceries");
    assert!(list.id > 0);
    assert!(list.items.is_empty());
}

#[test]
fn test_get_list() {
    let (_temp_file, mut db) = create_test_db();

    let created = db.create_list("Chores").expect("Failed to create list");

    let retrieved = db
        .get_list(created.id)
        .expect("Failed to get list")
        .expect("List should exist");

    assert_eq!(retrieved.id, created.id);
    assert_eq!(retrieved.title, "Chores");
    assert!(retrieved.items.is_empty());
}

#[test]
fn test_get_missing_list_returns_none() {
    let (_temp_file, db) = create_test_db();

    assert!(db.get_list(999).expect("Query should succeed").is_none());
}

#[test]
fn test_all_lists() {
    let (_temp_file, mut db) = create_test_db();

    db.create_list("One").expect("Failed to create list 1");
    db.create_list("Two").expect("Failed to create list 2");
    db.create_list("Three").expect("Failed to create list 3");

    let lists = db.all_lists().expect("Failed to list");
    assert_eq!(lists.len(), 3);
}

#[test]
fn test_duplicate_title_constraint_backstop() {
    let (_temp_file, mut db) = create_test_db();

    db.create_list("Unique").expect("Failed to create list");
    let err = db.create_list("Unique").unwrap_err();

    assert!(matches!(err, TodoError::DuplicateTitle { .. }));
}

#[test]
fn test_rename_list() {
    let (_temp_file, mut db) = create_test_db();

    let list = db.create_list("Before").expect("Failed to create list");
    db.rename_list(list.id, "After").expect("Failed to rename");

    let renamed = db
        .get_list(list.id)
        .expect("Failed to get list")
        .expect("List should exist");
    assert_eq!(renamed.title, "After");
}

#[test]
fn test_rename_missing_list_fails() {
    let (_temp_file, mut db) = create_test_db();

    let err = db.rename_list(123, "Ghost").unwrap_err();
    assert!(matches!(err, TodoError::ListNotFound { id: 123 }));
}

#[test]
fn test_delete_list_cascades_to_items() {
    let (_temp_file, mut db) = create_test_db();

    let list = db.create_list("Doomed").expect("Failed to create list");
    db.create_item(list.id, "Item 1").expect("Failed to add item");
    db.create_item(list.id, "Item 2").expect("Failed to add item");

    db.delete_list(list.id).expect("Failed to delete list");

    assert!(db.get_list(list.id).expect("Query should succeed").is_none());
    assert!(db.get_items(list.id).expect("Query should succeed").is_empty());
}

#[test]
fn test_delete_missing_list_fails() {
    let (_temp_file, mut db) = create_test_db();

    assert!(matches!(
        db.delete_list(77).unwrap_err(),
        TodoError::ListNotFound { id: 77 }
    ));
}

#[test]
fn test_create_item_appends_at_next_position() {
    let (_temp_file, mut db) = create_test_db();

    let list = db.create_list("Groceries").expect("Failed to create list");

    let first = db.create_item(list.id, "Milk").expect("Failed to add item");
    let second = db.create_item(list.id, "Bread").expect("Failed to add item");

    assert_eq!(first.position, 1);
    assert_eq!(second.position, 2);
    assert_eq!(first.list_id, list.id);
    assert!(!first.completed);
}

#[test]
fn test_create_item_in_missing_list_fails() {
    let (_temp_file, mut db) = create_test_db();

    let err = db.create_item(404, "Orphan").unwrap_err();
    assert!(matches!(err, TodoError::ListNotFound { id: 404 }));
}

#[test]
fn test_get_items_ordered_by_position() {
    let (_temp_file, mut db) = create_test_db();

    let list = db.create_list("Ordered").expect("Failed to create list");
    let a = db.create_item(list.id, "A").expect("Failed to add item");
    let b = db.create_item(list.id, "B").expect("Failed to add item");

    // Swap, then verify read order follows positions, not insert order.
    db.move_item(list.id, b.id, MoveDirection::Up)
        .expect("Failed to move item");

    assert_eq!(positions(&db, list.id), vec![(b.id, 1), (a.id, 2)]);
}

#[test]
fn test_delete_item_recontracts_positions() {
    let (_temp_file, mut db) = create_test_db();

    let list = db.create_list("Groceries").expect("Failed to create list");
    let a = db.create_item(list.id, "A").expect("Failed to add item");
    let b = db.create_item(list.id, "B").expect("Failed to add item");
    let c = db.create_item(list.id, "C").expect("Failed to add item");
    let d = db.create_item(list.id, "D").expect("Failed to add item");

    db.delete_item(list.id, b.id).expect("Failed to delete item");

    assert_eq!(
        positions(&db, list.id),
        vec![(a.id, 1), (c.id, 2), (d.id, 3)]
    );
}

#[test]
fn test_delete_missing_item_fails() {
    let (_temp_file, mut db) = create_test_db();

    let list = db.create_list("Groceries").expect("Failed to create list");
    let err = db.delete_item(list.id, 555).unwrap_err();

    assert!(matches!(err, TodoError::ItemNotFound { id: 555 }));
}

#[test]
fn test_set_item_completion() {
    let (_temp_file, mut db) = create_test_db();

    let list = db.create_list("Groceries").expect("Failed to create list");
    let item = db.create_item(list.id, "Milk").expect("Failed to add item");

    db.set_item_completion(list.id, item.id, true)
        .expect("Failed to set completion");

    let items = db.get_items(list.id).expect("Failed to get items");
    assert!(items[0].completed);

    db.set_item_completion(list.id, item.id, false)
        .expect("Failed to clear completion");

    let items = db.get_items(list.id).expect("Failed to get items");
    assert!(!items[0].completed);
}

#[test]
fn test_set_completion_checks_list_scope() {
    let (_temp_file, mut db) = create_test_db();

    let first = db.create_list("First").expect("Failed to create list");
    let second = db.create_list("Second").expect("Failed to create list");
    let item = db.create_item(first.id, "Milk").expect("Failed to add item");

    // The item exists, but not in the addressed list.
    let err = db.set_item_completion(second.id, item.id, true).unwrap_err();
    assert!(matches!(err, TodoError::ItemNotFound { .. }));
}

#[test]
fn test_toggle_all_completes_then_clears() {
    let (_temp_file, mut db) = create_test_db();

    let list = db.create_list("Groceries").expect("Failed to create list");
    let milk = db.create_item(list.id, "Milk").expect("Failed to add item");
    db.create_item(list.id, "Bread").expect("Failed to add item");

    // Mixed state: one completed, one not -> everything becomes completed.
    db.set_item_completion(list.id, milk.id, true)
        .expect("Failed to set completion");
    db.toggle_all_completion(list.id)
        .expect("Failed to toggle all");

    let items = db.get_items(list.id).expect("Failed to get items");
    assert!(items.iter().all(|item| item.completed));

    // All completed -> everything becomes incomplete.
    db.toggle_all_completion(list.id)
        .expect("Failed to toggle all");

    let items = db.get_items(list.id).expect("Failed to get items");
    assert!(items.iter().all(|item| !item.completed));
}

#[test]
fn test_toggle_all_on_empty_list_is_noop() {
    let (_temp_file, mut db) = create_test_db();

    let list = db.create_list("Empty").expect("Failed to create list");
    db.toggle_all_completion(list.id)
        .expect("Toggle on empty list should succeed");

    assert!(db.get_items(list.id).expect("Failed to get items").is_empty());
}

#[test]
fn test_toggle_all_on_missing_list_fails() {
    let (_temp_file, mut db) = create_test_db();

    assert!(matches!(
        db.toggle_all_completion(31).unwrap_err(),
        TodoError::ListNotFound { id: 31 }
    ));
}

#[test]
fn test_move_item_down_swaps_neighbors() {
    let (_temp_file, mut db) = create_test_db();

    let list = db.create_list("Groceries").expect("Failed to create list");
    let a = db.create_item(list.id, "A").expect("Failed to add item");
    let b = db.create_item(list.id, "B").expect("Failed to add item");
    let c = db.create_item(list.id, "C").expect("Failed to add item");

    db.move_item(list.id, a.id, MoveDirection::Down)
        .expect("Failed to move item");

    assert_eq!(
        positions(&db, list.id),
        vec![(b.id, 1), (a.id, 2), (c.id, 3)]
    );
}

#[test]
fn test_move_item_at_boundary_is_noop() {
    let (_temp_file, mut db) = create_test_db();

    let list = db.create_list("Groceries").expect("Failed to create list");
    let a = db.create_item(list.id, "A").expect("Failed to add item");
    let b = db.create_item(list.id, "B").expect("Failed to add item");

    db.move_item(list.id, a.id, MoveDirection::Up)
        .expect("Boundary move should succeed");
    db.move_item(list.id, b.id, MoveDirection::Down)
        .expect("Boundary move should succeed");

    assert_eq!(positions(&db, list.id), vec![(a.id, 1), (b.id, 2)]);
}

#[test]
fn test_move_missing_item_fails() {
    let (_temp_file, mut db) = create_test_db();

    let list = db.create_list("Groceries").expect("Failed to create list");
    let err = db.move_item(list.id, 900, MoveDirection::Up).unwrap_err();

    assert!(matches!(err, TodoError::ItemNotFound { id: 900 }));
}

#[test]
fn test_move_sequence_keeps_positions_contiguous() {
    let (_temp_file, mut db) = create_test_db();

    let list = db.create_list("Groceries").expect("Failed to create list");
    let mut ids = Vec::new();
    for title in ["A", "B", "C", "D", "E"] {
        ids.push(db.create_item(list.id, title).expect("Failed to add item").id);
    }

    let moves = [
        (ids[4], MoveDirection::Up),
        (ids[4], MoveDirection::Up),
        (ids[0], MoveDirection::Down),
        (ids[2], MoveDirection::Down),
        (ids[1], MoveDirection::Up),
        (ids[3], MoveDirection::Down),
    ];

    for (id, direction) in moves {
        db.move_item(list.id, id, direction).expect("Failed to move item");

        let mut current: Vec<u32> = db
            .get_items(list.id)
            .expect("Failed to get items")
            .iter()
            .map(|item| item.position)
            .collect();
        current.sort_unstable();
        assert_eq!(current, vec![1, 2, 3, 4, 5]);
    }
}

#[test]
fn test_list_summaries_counts() {
    let (_temp_file, mut db) = create_test_db();

    let list = db.create_list("Groceries").expect("Failed to create list");
    let milk = db.create_item(list.id, "Milk").expect("Failed to add item");
    db.create_item(list.id, "Bread").expect("Failed to add item");
    db.set_item_completion(list.id, milk.id, true)
        .expect("Failed to set completion");

    db.create_list("Empty").expect("Failed to create list");

    let summaries = db.list_summaries().expect("Failed to get summaries");
    assert_eq!(summaries.len(), 2);

    let groceries = summaries
        .iter()
        .find(|s| s.title == "Groceries")
        .expect("Summary should exist");
    assert_eq!(groceries.todos_count, 2);
    assert_eq!(groceries.todos_remaining, 1);
    assert!(!groceries.is_complete());

    let empty = summaries
        .iter()
        .find(|s| s.title == "Empty")
        .expect("Summary should exist");
    assert_eq!(empty.todos_count, 0);
    assert!(!empty.is_complete());
}
