use std::sync::Arc;

use crate::modules::auth::application::services::AdminSessionGate;
use crate::modules::auth::application::use_cases::{
    check_session::CheckSessionUseCase, login_admin::LoginAdminUseCase,
    logout_admin::LogoutAdminUseCase,
};

#[derive(Clone)]
pub struct AdminAuthUseCases {
    pub login: Arc<dyn LoginAdminUseCase + Send + Sync>,
    pub logout: Arc<dyn LogoutAdminUseCase + Send + Sync>,
    pub check_session: Arc<dyn CheckSessionUseCase + Send + Sync>,
    pub gate: Arc<AdminSessionGate>,
}
