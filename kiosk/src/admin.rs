use anyhow::Result;
use ks_config::auth::AuthAdminConfig;
use ks_dao::{
    user::{UserDao, UserRole},
    Db,
};
use ks_hash_argon2::argon2::Argon2Hash;

/// Makes sure the configured account exists, is an admin and signs in with
/// the configured password.
pub async fn seed(db: &Db, argon2: &Argon2Hash, admin: &AuthAdminConfig) -> Result<()> {
    match UserDao::db_select_by_email(db, admin.email()).await? {
        Some(mut user) => {
            let mut changed = false;
            if user.role() != &UserRole::Admin {
                user.set_role(&UserRole::Admin);
                changed = true;
            }
            if argon2
                .verify_password(admin.password(), user.password_hash())
                .is_err()
            {
                user.set_password_hash(&argon2.hash_password(admin.password())?);
                changed = true;
            }
            if changed {
                user.db_update(db).await?;
                ks_log::info(
                    Some("🔑"),
                    format!("[Kiosk] Updated admin account {}", admin.email()),
                );
            }
        }
        None => {
            let password_hash = argon2.hash_password(admin.password())?;
            UserDao::new(admin.email(), &password_hash, &UserRole::Admin)
                .db_insert(db)
                .await?;
            ks_log::info(
                Some("🔑"),
                format!("[Kiosk] Created admin account {}", admin.email()),
            );
        }
    }

    Ok(())
}
