mod app;
mod chat_response;
mod chat_screen;
mod login_screen;
mod password_strength_bar;
mod profile_screen;
mod searchable_select;
mod signup_screen;
mod verify_email_screen;

pub use app::App;
pub use chat_response::ChatResponse;
pub use chat_screen::ChatScreen;
pub use login_screen::LoginScreen;
pub use password_strength_bar::PasswordStrengthBar;
pub use profile_screen::ProfileScreen;
pub use searchable_select::SearchableSelect;
pub use signup_screen::SignupScreen;
pub use verify_email_screen::VerifyEmailScreen;
