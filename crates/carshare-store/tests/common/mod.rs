use rusqlite::Connection;

/// Fresh in-memory database with the schema applied
#[allow(dead_code)]
pub fn setup_test_db() -> Connection {
    carshare_store::db::bootstrap_in_memory().expect("in-memory database should bootstrap")
}

/// Sorted names, since storage order is unspecified
#[allow(dead_code)]
pub fn sorted_names<T>(items: &[T], name: impl Fn(&T) -> &str) -> Vec<String> {
    let mut names: Vec<String> = items.iter().map(|i| name(i).to_string()).collect();
    names.sort();
    names
}
