pub type RepositoryId = u64;

/// Identifies one fetch trigger; only the latest generation is ever applied.
pub type Generation = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub id: RepositoryId,
    pub full_name: String,
    pub url: String,
    pub description: Option<String>,
    pub star_count: u64,
    pub fork_count: u64,
    pub topics: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    Success(Vec<Repository>),
    /// `status` is `None` when no response was received at all.
    Failure {
        status: Option<u16>,
        message: String,
    },
}
