use ks_db_postgresql::db::PostgresDb;
use ks_db_sqlite::db::SqliteDb;

pub mod access;
pub mod project;
pub mod session;
pub mod user;

pub enum Db {
    PostgresqlDb(PostgresDb),
    SqliteDb(SqliteDb),
}
