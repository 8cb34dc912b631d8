pub mod directory;
pub mod risk;
pub mod validator;
