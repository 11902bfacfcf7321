use std::str::FromStr;

use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use ks_db_postgresql::model::user::UserModel as UserPostgresModel;
use ks_db_sqlite::model::user::UserModel as UserSqliteModel;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumString};
use uuid::Uuid;

use crate::Db;

#[derive(AsRefStr, EnumString, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum UserRole {
    Admin,
    User,
}

pub struct UserDao {
    id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    email: String,
    password_hash: String,
    role: UserRole,
}

impl UserDao {
    pub fn new(email: &str, password_hash: &str, role: &UserRole) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            created_at: now,
            updated_at: now,
            email: email.to_owned(),
            password_hash: password_hash.to_owned(),
            role: *role,
        }
    }

    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn created_at(&self) -> &DateTime<Utc> {
        &self.created_at
    }

    pub fn updated_at(&self) -> &DateTime<Utc> {
        &self.updated_at
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn role(&self) -> &UserRole {
        &self.role
    }

    pub fn set_password_hash(&mut self, password_hash: &str) {
        self.password_hash = password_hash.to_owned();
    }

    pub fn set_role(&mut self, role: &UserRole) {
        self.role = *role;
    }

    pub async fn db_insert(&self, db: &Db) -> Result<()> {
        match db {
            Db::PostgresqlDb(db) => db.insert_user(&self.to_postgresdb_model()).await,
            Db::SqliteDb(db) => db.insert_user(&self.to_sqlitedb_model()).await,
        }
    }

    pub async fn db_select(db: &Db, id: &Uuid) -> Result<Option<Self>> {
        match db {
            Db::PostgresqlDb(db) => db
                .select_user(id)
                .await?
                .map(|model| Self::from_postgresdb_model(&model))
                .transpose(),
            Db::SqliteDb(db) => db
                .select_user(id)
                .await?
                .map(|model| Self::from_sqlitedb_model(&model))
                .transpose(),
        }
    }

    pub async fn db_select_by_email(db: &Db, email: &str) -> Result<Option<Self>> {
        match db {
            Db::PostgresqlDb(db) => db
                .select_user_by_email(email)
                .await?
                .map(|model| Self::from_postgresdb_model(&model))
                .transpose(),
            Db::SqliteDb(db) => db
                .select_user_by_email(email)
                .await?
                .map(|model| Self::from_sqlitedb_model(&model))
                .transpose(),
        }
    }

    pub async fn db_update(&mut self, db: &Db) -> Result<()> {
        self.updated_at = Utc::now();
        match db {
            Db::PostgresqlDb(db) => db.update_user(&self.to_postgresdb_model()).await,
            Db::SqliteDb(db) => db.update_user(&self.to_sqlitedb_model()).await,
        }
    }

    fn parse_role(role: &str) -> Result<UserRole> {
        UserRole::from_str(role).map_err(|_| anyhow!("Unknown user role '{role}'"))
    }

    fn from_postgresdb_model(model: &UserPostgresModel) -> Result<Self> {
        Ok(Self {
            id: *model.id(),
            created_at: *model.created_at(),
            updated_at: *model.updated_at(),
            email: model.email().to_owned(),
            password_hash: model.password_hash().to_owned(),
            role: Self::parse_role(model.role())?,
        })
    }

    fn to_postgresdb_model(&self) -> UserPostgresModel {
        UserPostgresModel::new(
            &self.id,
            &self.created_at,
            &self.updated_at,
            &self.email,
            &self.password_hash,
            self.role.as_ref(),
        )
    }

    fn from_sqlitedb_model(model: &UserSqliteModel) -> Result<Self> {
        Ok(Self {
            id: *model.id(),
            created_at: *model.created_at(),
            updated_at: *model.updated_at(),
            email: model.email().to_owned(),
            password_hash: model.password_hash().to_owned(),
            role: Self::parse_role(model.role())?,
        })
    }

    fn to_sqlitedb_model(&self) -> UserSqliteModel {
        UserSqliteModel::new(
            &self.id,
            &self.created_at,
            &self.updated_at,
            &self.email,
            &self.password_hash,
            self.role.as_ref(),
        )
    }
}
