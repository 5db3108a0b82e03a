mod common;
mod validator;
