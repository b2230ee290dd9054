//! SQL migrations compiled into the binary

/// One schema step, identified by its file stem
pub struct Migration {
    pub id: &'static str,
    pub sql: &'static str,
}

/// Schema steps, oldest first
pub const MIGRATIONS: &[Migration] = &[Migration {
    id: "001_initial_schema",
    sql: include_str!("../../migrations/001_initial_schema.sql"),
}];
