use dotenvy::{dotenv, var};

/// Process environment, falling back to a `.env` file in the working directory.
pub fn get_env_variable(variable_to_get: &str) -> Option<String> {
    dotenv().ok();
    var(variable_to_get).ok()
}
