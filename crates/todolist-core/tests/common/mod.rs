use tempfile::TempDir;
use todolist_core::TodoManagerBuilder;

/// Helper function to create a test manager over a temporary database
pub async fn create_test_manager() -> (TempDir, todolist_core::TodoManager) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let manager = TodoManagerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create manager");
    (temp_dir, manager)
}
