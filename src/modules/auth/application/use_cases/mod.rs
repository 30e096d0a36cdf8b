pub mod check_session;
pub mod login_admin;
pub mod logout_admin;
