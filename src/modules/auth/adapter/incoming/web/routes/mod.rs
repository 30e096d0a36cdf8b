mod admin_login;
mod admin_logout;
mod admin_session;

pub use admin_login::{__path_admin_login_handler, admin_login_handler, AdminLoginRequestDto, AdminLoginResponse};
pub use admin_logout::{__path_admin_logout_handler, admin_logout_handler};
pub use admin_session::{__path_admin_session_handler, admin_session_handler, SessionView};
