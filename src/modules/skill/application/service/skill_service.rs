use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::skill::application::domain::entities::{Skill, SkillInput};
use crate::modules::skill::application::ports::incoming::{
    CreateSkillUseCase, DeleteSkillUseCase, ListSkillsUseCase, UpdateSkillUseCase,
};
use crate::modules::skill::application::ports::outgoing::SkillRepository;
use crate::shared::content::ContentError;

pub struct SkillService<R>
where
    R: SkillRepository,
{
    repository: R,
}

impl<R> SkillService<R>
where
    R: SkillRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListSkillsUseCase for SkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Skill>, ContentError> {
        Ok(self.repository.list().await?)
    }
}

#[async_trait]
impl<R> CreateSkillUseCase for SkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self, input: SkillInput) -> Result<Skill, ContentError> {
        let input = input.normalized()?;
        let skill = self.repository.create(&input).await?;
        info!(id = %skill.id, name = %skill.name, "Skill created");
        Ok(skill)
    }
}

#[async_trait]
impl<R> UpdateSkillUseCase for SkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid, input: SkillInput) -> Result<Skill, ContentError> {
        let input = input.normalized()?;
        self.repository
            .update(id, &input)
            .await?
            .ok_or(ContentError::not_found("Skill"))
    }
}

#[async_trait]
impl<R> DeleteSkillUseCase for SkillService<R>
where
    R: SkillRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), ContentError> {
        self.repository.delete(id).await?;
        info!(id = %id, "Skill deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::skill::application::domain::entities::DEFAULT_SKILL_COLOR;
    use crate::shared::content::RepositoryError;
    use mockall::mock;

    mock! {
        pub Repo {}

        #[async_trait]
        impl SkillRepository for Repo {
            async fn list(&self) -> Result<Vec<Skill>, RepositoryError>;
            async fn create(&self, input: &SkillInput) -> Result<Skill, RepositoryError>;
            async fn update(&self, id: Uuid, input: &SkillInput) -> Result<Option<Skill>, RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
        }
    }

    fn input(name: &str, level: i32) -> SkillInput {
        SkillInput {
            name: name.into(),
            category: "Soft Skills".into(),
            level,
            icon: None,
            color: DEFAULT_SKILL_COLOR.into(),
        }
    }

    fn from_input(id: Uuid, input: &SkillInput) -> Skill {
        Skill {
            id,
            name: input.name.clone(),
            category: input.category.clone(),
            level: input.level,
            icon: input.icon.clone(),
            color: input.color.clone(),
            created_at: None,
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn create_sends_normalized_input() {
        let mut repo = MockRepo::new();
        repo.expect_create()
            .withf(|input| input.name == "Mentoring")
            .times(1)
            .returning(|input| Ok(from_input(Uuid::new_v4(), input)));

        let skill = CreateSkillUseCase::execute(&SkillService::new(repo), input("  Mentoring ", 70))
            .await
            .unwrap();

        assert_eq!(skill.name, "Mentoring");
    }

    #[tokio::test]
    async fn out_of_range_level_is_rejected_locally() {
        let mut repo = MockRepo::new();
        repo.expect_create().never();

        let err = CreateSkillUseCase::execute(&SkillService::new(repo), input("X", 150))
            .await
            .unwrap_err();

        assert!(matches!(err, ContentError::Validation(_)));
    }

    #[tokio::test]
    async fn update_of_missing_row_is_not_found() {
        let mut repo = MockRepo::new();
        repo.expect_update().returning(|_, _| Ok(None));

        let err = UpdateSkillUseCase::execute(&SkillService::new(repo), Uuid::new_v4(), input("X", 10))
            .await
            .unwrap_err();

        assert_eq!(err, ContentError::not_found("Skill"));
    }

    #[tokio::test]
    async fn list_passes_backend_errors_through() {
        let mut repo = MockRepo::new();
        repo.expect_list()
            .returning(|| Err(RepositoryError::Backend("permission denied for table skills".into())));

        let err = ListSkillsUseCase::execute(&SkillService::new(repo))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ContentError::Backend("permission denied for table skills".into())
        );
    }

    #[tokio::test]
    async fn delete_forwards_id() {
        let id = Uuid::new_v4();
        let mut repo = MockRepo::new();
        repo.expect_delete()
            .with(mockall::predicate::eq(id))
            .times(1)
            .returning(|_| Ok(()));

        DeleteSkillUseCase::execute(&SkillService::new(repo), id)
            .await
            .unwrap();
    }
}
