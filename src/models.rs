use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Collision-resistant, time-ordered id. Assigned once at construction,
/// never reassigned.
fn generate_id() -> String {
    Uuid::now_v7().to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn new(new: NewContactMessage) -> Self {
        Self {
            id: generate_id(),
            name: new.name,
            email: new.email,
            message: new.message,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Project {
    pub fn new(new: NewProject) -> Self {
        Self {
            id: generate_id(),
            title: new.title,
            description: new.description,
            technologies: new.technologies,
            github_url: new.github_url,
            demo_url: new.demo_url,
            created_at: new.created_at.unwrap_or_else(Utc::now),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
    /// 0-100, by convention.
    pub level: u8,
    pub category: String,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewSkill {
    pub name: String,
    pub level: u8,
    pub category: String,
    pub icon: Option<String>,
}

impl Skill {
    pub fn new(new: NewSkill) -> Self {
        Self {
            id: generate_id(),
            name: new.name,
            level: new.level,
            category: new.category,
            icon: new.icon,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub id: String,
    pub degree: String,
    pub school: String,
    pub year: String,
    pub description: String,
    /// "education" or "certification"; a documented convention, not enforced.
    #[serde(rename = "type")]
    pub kind: String,
    pub icon: Option<String>,
    pub certificate_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewEducation {
    pub degree: String,
    pub school: String,
    pub year: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub icon: Option<String>,
    pub certificate_url: Option<String>,
}

impl Education {
    pub fn new(new: NewEducation) -> Self {
        Self {
            id: generate_id(),
            degree: new.degree,
            school: new.school,
            year: new.year,
            description: new.description,
            kind: new.kind,
            icon: new.icon,
            certificate_url: new.certificate_url,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    pub id: String,
    pub title: String,
    pub description: String,
    pub camera: String,
    pub settings: String,
    pub location: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewPhoto {
    pub title: String,
    pub description: String,
    pub camera: String,
    pub settings: String,
    pub location: String,
    pub image_url: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl Photo {
    pub fn new(new: NewPhoto) -> Self {
        Self {
            id: generate_id(),
            title: new.title,
            description: new.description,
            camera: new.camera,
            settings: new.settings,
            location: new.location,
            image_url: new.image_url,
            created_at: new.created_at.unwrap_or_else(Utc::now),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Weather {
    pub location: String,
    pub temperature: String,
    pub description: String,
    pub icon: String,
}

/// Simplified repo shape returned by the GitHub proxy.
#[derive(Debug, Clone, Serialize)]
pub struct GithubRepo {
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub language: Option<String>,
    pub stars: u64,
    pub forks: u64,
}

/// Counts plus the timestamp of the last-appended record of selected
/// collections. "Most recent" means append order, not timestamp order.
#[derive(Debug, Clone, Serialize)]
pub struct Analytics {
    pub total_contacts: usize,
    pub total_projects: usize,
    pub total_photos: usize,
    pub total_education: usize,
    pub last_contact: Option<DateTime<Utc>>,
    pub most_recent_project: Option<DateTime<Utc>>,
    pub most_recent_photo: Option<DateTime<Utc>>,
}
