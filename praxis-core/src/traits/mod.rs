mod redactor;
mod validator;

pub use redactor::IRedactor;
pub use validator::IValidator;
