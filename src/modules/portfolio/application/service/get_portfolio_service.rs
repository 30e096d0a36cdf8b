use async_trait::async_trait;

use crate::modules::cv::application::CvUseCases;
use crate::modules::education::application::EducationUseCases;
use crate::modules::portfolio::application::domain::entities::Portfolio;
use crate::modules::portfolio::application::ports::incoming::GetPortfolioUseCase;
use crate::modules::profile::application::ProfileUseCases;
use crate::modules::profile_image::application::ProfileImageUseCases;
use crate::modules::project::application::ProjectUseCases;
use crate::modules::skill::application::domain::entities::group_by_category;
use crate::modules::skill::application::SkillUseCases;
use crate::shared::content::ContentError;

/// Reads through the admin managers' use cases so the public page sees
/// exactly what the admin edits.
pub struct GetPortfolioService {
    profile: ProfileUseCases,
    skills: SkillUseCases,
    projects: ProjectUseCases,
    education: EducationUseCases,
    cv: CvUseCases,
    profile_images: ProfileImageUseCases,
}

impl GetPortfolioService {
    pub fn new(
        profile: ProfileUseCases,
        skills: SkillUseCases,
        projects: ProjectUseCases,
        education: EducationUseCases,
        cv: CvUseCases,
        profile_images: ProfileImageUseCases,
    ) -> Self {
        Self {
            profile,
            skills,
            projects,
            education,
            cv,
            profile_images,
        }
    }
}

#[async_trait]
impl GetPortfolioUseCase for GetPortfolioService {
    async fn execute(&self) -> Result<Portfolio, ContentError> {
        let (personal_info, skills, projects, education, cv, profile_image) = futures::try_join!(
            self.profile.get.execute(),
            self.skills.list.execute(),
            self.projects.list.execute(),
            self.education.list.execute(),
            self.cv.get_active.execute(),
            self.profile_images.get_active.execute(),
        )?;

        Ok(Portfolio {
            personal_info,
            skills: group_by_category(skills),
            projects,
            education,
            cv,
            profile_image,
        })
    }
}
