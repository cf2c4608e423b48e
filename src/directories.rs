use std::env;
use std::path::{Path, PathBuf};

use lazy_static::lazy_static;

pub struct FactorialProjectDirs {
    config_dir: PathBuf,
}

impl FactorialProjectDirs {
    fn new() -> Option<Self> {
        let config_dir = env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .filter(|p| p.is_absolute())
            .or_else(dirs::config_dir)?
            .join("factorial");

        Some(Self { config_dir })
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}

lazy_static! {
    pub static ref PROJECT_DIRS: FactorialProjectDirs = FactorialProjectDirs::new()
        .unwrap_or_else(|| FactorialProjectDirs {
            config_dir: PathBuf::from(".factorial"),
        });
}
