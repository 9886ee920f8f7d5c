// Job Store: the `jobs` table, its status flags and stored drafts.

pub mod handlers;
pub mod schema;
pub mod store;

#[cfg(test)]
pub mod fixtures;
