use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::cv::application::domain::entities::CvFile;
use crate::modules::education::application::domain::entities::Education;
use crate::modules::profile::application::domain::entities::PersonalInfo;
use crate::modules::profile_image::application::domain::entities::ProfileImage;
use crate::modules::project::application::domain::entities::Project;
use crate::modules::skill::application::domain::entities::SkillGroup;

/// Everything the public site renders, in one read.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Portfolio {
    pub personal_info: Option<PersonalInfo>,
    pub skills: Vec<SkillGroup>,
    pub projects: Vec<Project>,
    pub education: Vec<Education>,
    pub cv: Option<CvFile>,
    pub profile_image: Option<ProfileImage>,
}
