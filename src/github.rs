use axum::{Json, Router, debug_handler, extract::{Path, State}, routing::get};
use serde::Deserialize;
use tracing::warn;

use crate::{AppState, models::GithubRepo};

pub fn router() -> Router<AppState> {
    Router::new().route("/github/{username}", get(get_github_repos))
}

#[debug_handler]
pub(crate) async fn get_github_repos(
    State(github): State<GithubClient>,
    Path(username): Path<String>,
) -> Json<Vec<GithubRepo>> {
    Json(github.repos_for(&username).await)
}

/// Thin proxy over the GitHub users API. Any upstream problem degrades to an
/// empty list; the caller never sees the failure.
#[derive(Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    api_base: String,
}

#[derive(Debug, Deserialize)]
struct UpstreamRepo {
    name: String,
    description: Option<String>,
    html_url: String,
    language: Option<String>,
    stargazers_count: u64,
    forks_count: u64,
}

impl GithubClient {
    pub fn new(http: reqwest::Client, api_base: String) -> Self {
        Self { http, api_base }
    }

    pub async fn repos_for(&self, username: &str) -> Vec<GithubRepo> {
        match self.fetch(username).await {
            Ok(repos) => repos,
            Err(e) => {
                warn!("github lookup for {username} failed: {e}");
                Vec::new()
            }
        }
    }

    async fn fetch(&self, username: &str) -> Result<Vec<GithubRepo>, reqwest::Error> {
        let url = format!("{}/users/{username}/repos", self.api_base);
        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Ok(Vec::new());
        }

        let repos: Vec<UpstreamRepo> = response.json().await?;
        Ok(repos
            .into_iter()
            .take(10)
            .map(|repo| GithubRepo {
                name: repo.name,
                description: repo.description,
                html_url: repo.html_url,
                language: repo.language,
                stars: repo.stargazers_count,
                forks: repo.forks_count,
            })
            .collect())
    }
}
