//! Fixed sample records written on startup when a collection is empty.
//! Contact messages are never seeded.

use tracing::info;

use crate::{
    models::{Education, NewEducation, NewPhoto, NewProject, NewSkill, Photo, Project, Skill},
    store::{Collection, Store, StoreError},
};

pub async fn seed_sample_data(store: &Store) -> Result<(), StoreError> {
    if store.seed_if_empty(Collection::Skills, &sample_skills()).await? {
        info!("seeded sample skills");
    }
    if store.seed_if_empty(Collection::Projects, &sample_projects()).await? {
        info!("seeded sample projects");
    }
    if store.seed_if_empty(Collection::Education, &sample_education()).await? {
        info!("seeded sample education entries");
    }
    if store.seed_if_empty(Collection::Photography, &sample_photography()).await? {
        info!("seeded sample photography entries");
    }
    Ok(())
}

fn skill(name: &str, level: u8, category: &str, icon: &str) -> Skill {
    Skill::new(NewSkill {
        name: name.to_owned(),
        level,
        category: category.to_owned(),
        icon: Some(icon.to_owned()),
    })
}

fn sample_skills() -> Vec<Skill> {
    vec![
        skill("JavaScript", 95, "Frontend", "🟨"),
        skill("Rust", 90, "Backend", "🦀"),
        skill("React", 92, "Frontend", "⚛️"),
        skill("Axum", 88, "Backend", "🚀"),
        skill("SQLite", 85, "Database", "💾"),
        skill("Photography", 88, "Creative", "📸"),
    ]
}

fn sample_projects() -> Vec<Project> {
    vec![
        Project::new(NewProject {
            title: "Neural Network Portfolio".to_owned(),
            description: "Interactive portfolio with neural network background animations and particle effects".to_owned(),
            technologies: vec![
                "React".to_owned(),
                "Canvas".to_owned(),
                "Neural Networks".to_owned(),
                "Rust".to_owned(),
            ],
            github_url: Some("https://github.com/johndoe/neural-portfolio".to_owned()),
            demo_url: Some("https://johndoe-portfolio.com".to_owned()),
            created_at: None,
        }),
        Project::new(NewProject {
            title: "Photography Gallery".to_owned(),
            description: "Dynamic photography gallery with advanced slideshow and metadata display".to_owned(),
            technologies: vec![
                "React".to_owned(),
                "Node.js".to_owned(),
                "Express".to_owned(),
                "MongoDB".to_owned(),
            ],
            github_url: Some("https://github.com/johndoe/photo-gallery".to_owned()),
            demo_url: Some("https://gallery.johndoe.com".to_owned()),
            created_at: None,
        }),
    ]
}

fn sample_education() -> Vec<Education> {
    vec![
        Education::new(NewEducation {
            degree: "Bachelor of Science in Computer Science".to_owned(),
            school: "Tech University".to_owned(),
            year: "2018 - 2022".to_owned(),
            description: "Focused on software engineering, algorithms, and web development".to_owned(),
            kind: "education".to_owned(),
            icon: Some("🎓".to_owned()),
            certificate_url: None,
        }),
        Education::new(NewEducation {
            degree: "Master of Science in Software Engineering".to_owned(),
            school: "Advanced Tech Institute".to_owned(),
            year: "2022 - 2024".to_owned(),
            description: "Specialized in full-stack development and system architecture".to_owned(),
            kind: "education".to_owned(),
            icon: Some("📚".to_owned()),
            certificate_url: None,
        }),
        Education::new(NewEducation {
            degree: "AWS Certified Developer".to_owned(),
            school: "Amazon Web Services".to_owned(),
            year: "2023".to_owned(),
            description: "Cloud development and deployment certification".to_owned(),
            kind: "certification".to_owned(),
            icon: Some("☁️".to_owned()),
            certificate_url: None,
        }),
        Education::new(NewEducation {
            degree: "Professional Photography Certificate".to_owned(),
            school: "Photography Academy".to_owned(),
            year: "2021".to_owned(),
            description: "Advanced photography techniques and portfolio development".to_owned(),
            kind: "certification".to_owned(),
            icon: Some("📸".to_owned()),
            certificate_url: None,
        }),
    ]
}

fn sample_photography() -> Vec<Photo> {
    vec![
        Photo::new(NewPhoto {
            title: "Coastal Majesty".to_owned(),
            description: "Dramatic cliff formations meet the endless ocean in this breathtaking coastal landscape. Shot during golden hour to capture the warm light dancing on the rock formations.".to_owned(),
            camera: "Canon EOS R5".to_owned(),
            settings: "f/11, 1/60s, ISO 100".to_owned(),
            location: "Big Sur, California".to_owned(),
            image_url: "https://images.pexels.com/photos/3558637/pexels-photo-3558637.jpeg".to_owned(),
            created_at: None,
        }),
        Photo::new(NewPhoto {
            title: "Mountain Reflection".to_owned(),
            description: "Perfect symmetry captured in this serene mountain lake reflection. The stillness of the water creates a mirror-like surface that doubles the beauty of the landscape.".to_owned(),
            camera: "Sony A7R IV".to_owned(),
            settings: "f/8, 1/125s, ISO 200".to_owned(),
            location: "Lake Louise, Canada".to_owned(),
            image_url: "https://images.pexels.com/photos/2613946/pexels-photo-2613946.jpeg".to_owned(),
            created_at: None,
        }),
    ]
}
