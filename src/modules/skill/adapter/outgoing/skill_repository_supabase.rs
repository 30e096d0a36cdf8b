use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::skill::application::domain::entities::{Skill, SkillInput};
use crate::modules::skill::application::ports::outgoing::SkillRepository;
use crate::shared::content::RepositoryError;
use crate::shared::supabase::SupabaseClient;

pub const SKILLS_TABLE: &str = "skills";

#[derive(Clone)]
pub struct SupabaseSkillRepository {
    client: SupabaseClient,
}

impl SupabaseSkillRepository {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SkillRepository for SupabaseSkillRepository {
    async fn list(&self) -> Result<Vec<Skill>, RepositoryError> {
        Ok(self
            .client
            .table(SKILLS_TABLE)
            .order("category", true)
            .order("name", true)
            .fetch()
            .await?)
    }

    async fn create(&self, input: &SkillInput) -> Result<Skill, RepositoryError> {
        Ok(self.client.table(SKILLS_TABLE).insert(input).await?)
    }

    async fn update(&self, id: Uuid, input: &SkillInput) -> Result<Option<Skill>, RepositoryError> {
        let rows: Vec<Skill> = self
            .client
            .table(SKILLS_TABLE)
            .eq("id", id)
            .update(input)
            .await?;
        Ok(rows.into_iter().next())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.client.table(SKILLS_TABLE).eq("id", id).delete().await?;
        Ok(())
    }
}
