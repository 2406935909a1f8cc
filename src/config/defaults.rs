use crate::config::Config;

pub const DEFAULT_THEME: &str = "dark";

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            warm_color: None,
            cool_color: None,
            plain_color: None,
            darkness: None,
            desaturation: None,
            left: None,
            right: None,
        }
    }
}
