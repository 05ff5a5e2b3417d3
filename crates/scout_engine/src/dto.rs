use scout_core::Repository;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub items: Vec<RepositoryDto>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RepositoryDto {
    id: u64,
    full_name: String,
    html_url: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    stargazers_count: u64,
    #[serde(default)]
    forks_count: u64,
    // Absent or null topics still yield a result, just no vocabulary entries.
    #[serde(default)]
    topics: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub message: String,
}

impl From<RepositoryDto> for Repository {
    fn from(dto: RepositoryDto) -> Self {
        Repository {
            id: dto.id,
            full_name: dto.full_name,
            url: dto.html_url,
            description: dto.description.filter(|d| !d.is_empty()),
            star_count: dto.stargazers_count,
            fork_count: dto.forks_count,
            topics: dto.topics.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_fields_map_to_empty_values() {
        let raw = r#"{"items":[{"id":1,"full_name":"a/b","html_url":"https://github.com/a/b",
            "description":null,"stargazers_count":3,"forks_count":0,"topics":null}]}"#;
        let response: SearchResponse = serde_json::from_str(raw).unwrap();
        let repo = Repository::from(response.items.into_iter().next().unwrap());
        assert_eq!(repo.description, None);
        assert!(repo.topics.is_empty());
        assert_eq!(repo.star_count, 3);
    }

    #[test]
    fn missing_items_is_an_empty_page() {
        let response: SearchResponse = serde_json::from_str(r#"{"total_count":0}"#).unwrap();
        assert!(response.items.is_empty());
    }
}
