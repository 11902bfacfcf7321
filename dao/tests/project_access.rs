use ks_dao::{
    access::{fetch_project, ProjectFetch},
    project::{ProjectDao, ProjectFields, ProjectScope, ProjectStatus},
    session::Session,
    user::{UserDao, UserRole},
    Db,
};
use ks_db_sqlite::db::SqliteDb;
use tempfile::TempDir;
use uuid::Uuid;

async fn create_test_db() -> (TempDir, Db) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("kiosk.db");

    let db = SqliteDb::new(db_path.to_str().unwrap(), &2).await.unwrap();

    (temp_dir, Db::SqliteDb(db))
}

fn fields(name: &str) -> ProjectFields {
    ProjectFields {
        name: name.to_owned(),
        description: "A marketplace\nfor everything".to_owned(),
        banner_image: "https://cdn.example.com/banner.png".to_owned(),
        logo_url: "https://cdn.example.com/logo.png".to_owned(),
        preview_images: vec![
            "https://cdn.example.com/1.png".to_owned(),
            "https://cdn.example.com/2.png".to_owned(),
        ],
        categories: vec!["NFT".to_owned(), "DeFi".to_owned()],
        blockchain: "Ethereum".to_owned(),
        project_stage: "Mainnet".to_owned(),
        website: None,
        discord: Some("https://discord.gg/x".to_owned()),
        twitter: None,
    }
}

async fn insert_project(db: &Db, owner: &Uuid, name: &str) -> ProjectDao {
    let project = ProjectDao::new(owner, fields(name)).unwrap();
    project.db_insert(db).await.unwrap();
    project
}

#[tokio::test]
async fn owner_fetches_own_project() {
    let (_temp_dir, db) = create_test_db().await;
    let owner = Session::new(&Uuid::now_v7(), &UserRole::User);
    let project = insert_project(&db, owner.user_id(), "Kiosk").await;

    let fetched = fetch_project(&db, Some(&project.id().to_string()), Some(&owner))
        .await
        .unwrap();

    match fetched {
        ProjectFetch::Found(fetched) => {
            assert_eq!(fetched.id(), project.id());
            assert_eq!(fetched.name(), "Kiosk");
            assert_eq!(fetched.categories(), ["NFT", "DeFi"]);
            assert_eq!(fetched.preview_images().len(), 2);
            assert_eq!(fetched.discord().as_deref(), Some("https://discord.gg/x"));
            assert!(fetched.website().is_none());
            assert_eq!(fetched.status(), &ProjectStatus::Draft);
        }
        other => panic!("expected the project, got {other:?}"),
    }
}

#[tokio::test]
async fn foreign_project_is_not_found_for_users() {
    let (_temp_dir, db) = create_test_db().await;
    let project = insert_project(&db, &Uuid::now_v7(), "Kiosk").await;
    let stranger = Session::new(&Uuid::now_v7(), &UserRole::User);

    let fetched = fetch_project(&db, Some(&project.id().to_string()), Some(&stranger))
        .await
        .unwrap();
    let missing = fetch_project(&db, Some(&Uuid::now_v7().to_string()), Some(&stranger))
        .await
        .unwrap();

    assert!(matches!(fetched, ProjectFetch::NotFound));
    assert!(matches!(missing, ProjectFetch::NotFound));
}

#[tokio::test]
async fn admin_fetches_any_project() {
    let (_temp_dir, db) = create_test_db().await;
    let project = insert_project(&db, &Uuid::now_v7(), "Kiosk").await;
    let admin = Session::new(&Uuid::now_v7(), &UserRole::Admin);

    let fetched = fetch_project(&db, Some(&project.id().to_string()), Some(&admin))
        .await
        .unwrap();

    assert!(matches!(fetched, ProjectFetch::Found(p) if p.id() == project.id()));
}

#[tokio::test]
async fn anonymous_and_malformed_requests() {
    let (_temp_dir, db) = create_test_db().await;
    let project = insert_project(&db, &Uuid::now_v7(), "Kiosk").await;
    let admin = Session::new(&Uuid::now_v7(), &UserRole::Admin);

    let anonymous = fetch_project(&db, Some(&project.id().to_string()), None)
        .await
        .unwrap();
    let malformed = fetch_project(&db, Some("42"), Some(&admin)).await.unwrap();

    assert!(matches!(anonymous, ProjectFetch::RedirectHome));
    assert!(matches!(malformed, ProjectFetch::NotFound));
}

#[tokio::test]
async fn moderation_is_persisted() {
    let (_temp_dir, db) = create_test_db().await;
    let mut project = insert_project(&db, &Uuid::now_v7(), "Kiosk").await;

    project.submit().unwrap();
    project.reject("Logo is missing").unwrap();
    project.db_update(&db).await.unwrap();

    let stored = ProjectDao::db_select(&db, project.id(), &ProjectScope::Any)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(stored.status(), &ProjectStatus::Rejected);
    assert_eq!(stored.rejected_reason().as_deref(), Some("Logo is missing"));
}

#[tokio::test]
async fn lists_by_owner_and_status() {
    let (_temp_dir, db) = create_test_db().await;
    let owner = Uuid::now_v7();
    let mut pending = insert_project(&db, &owner, "Pending one").await;
    insert_project(&db, &owner, "Draft one").await;
    insert_project(&db, &Uuid::now_v7(), "Someone else's").await;

    pending.submit().unwrap();
    pending.db_update(&db).await.unwrap();

    let owned = ProjectDao::db_select_many_by_user_id(&db, &owner)
        .await
        .unwrap();
    let all = ProjectDao::db_select_many(&db, &None).await.unwrap();
    let pending_only = ProjectDao::db_select_many(&db, &Some(ProjectStatus::Pending))
        .await
        .unwrap();

    assert_eq!(owned.len(), 2);
    assert!(owned.iter().all(|p| p.user_id() == &owner));
    assert_eq!(all.len(), 3);
    assert_eq!(pending_only.len(), 1);
    assert_eq!(pending_only[0].id(), pending.id());
}

#[tokio::test]
async fn delete_removes_project() {
    let (_temp_dir, db) = create_test_db().await;
    let project = insert_project(&db, &Uuid::now_v7(), "Kiosk").await;

    ProjectDao::db_delete(&db, project.id()).await.unwrap();

    assert!(ProjectDao::db_select(&db, project.id(), &ProjectScope::Any)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn users_round_trip_with_role() {
    let (_temp_dir, db) = create_test_db().await;
    let mut user = UserDao::new("admin@example.com", "hash", &UserRole::User);
    user.db_insert(&db).await.unwrap();

    user.set_role(&UserRole::Admin);
    user.db_update(&db).await.unwrap();

    let stored = UserDao::db_select_by_email(&db, "admin@example.com")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(stored.id(), user.id());
    assert_eq!(stored.role(), &UserRole::Admin);
    assert!(UserDao::db_select(&db, &Uuid::now_v7())
        .await
        .unwrap()
        .is_none());
}
