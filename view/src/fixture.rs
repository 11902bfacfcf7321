use ks_dao::project::{ProjectDao, ProjectFields, ProjectStatus};
use uuid::Uuid;

pub fn fields() -> ProjectFields {
    ProjectFields {
        name: "Kiosk".to_owned(),
        description: "Line one\nLine two\nLine three\nLine four".to_owned(),
        banner_image: "https://cdn.example.com/banner.png".to_owned(),
        logo_url: "https://cdn.example.com/logo.png".to_owned(),
        preview_images: vec![
            "https://cdn.example.com/1.png".to_owned(),
            "https://cdn.example.com/2.png".to_owned(),
        ],
        categories: vec!["NFT".to_owned(), "DeFi".to_owned()],
        blockchain: "Ethereum".to_owned(),
        project_stage: "Mainnet".to_owned(),
        website: Some("https://kiosk.example.com".to_owned()),
        discord: Some("https://discord.gg/x".to_owned()),
        twitter: Some("https://twitter.com/kiosk".to_owned()),
    }
}

pub fn project(fields: ProjectFields, status: ProjectStatus) -> ProjectDao {
    let mut project = ProjectDao::new(&Uuid::now_v7(), fields).unwrap();
    match status {
        ProjectStatus::Draft => {}
        ProjectStatus::Pending => project.submit().unwrap(),
        ProjectStatus::Approved => {
            project.submit().unwrap();
            project.approve().unwrap();
        }
        ProjectStatus::Rejected => {
            project.submit().unwrap();
            project.reject("Banner is blurry").unwrap();
        }
    }
    project
}
