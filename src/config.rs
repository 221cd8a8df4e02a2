use std::path::PathBuf;

pub const DEFAULT_INPUT_PATH: &str = "assets/logo.png";
pub const DEFAULT_OUTPUT_PATH: &str = "assets/logo-trimmed.png";

#[derive(Clone, Debug)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}
