use platform_dirs::AppDirs;
use serde::{Serialize, Deserialize};
use ron::ser::{to_string_pretty, PrettyConfig};
use ron::de::from_reader;
use std::fs;
use std::path::{Path, PathBuf};
use crate::error::Result;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// Degree at which a report is written without `--out`.
    #[serde(default = "defaults::report_degree")]
    pub report_degree: u32,
    #[serde(default = "defaults::report_path")]
    pub report_path: String,
    #[serde(default = "defaults::show_trace")]
    pub show_trace: bool,
    #[serde(default = "defaults::show_polynomial")]
    pub show_polynomial: bool,
}

macro_rules! default_ {
    ($name:ident, $type:ident) => {
        pub fn $name() -> $type {
            Config::default().$name
        }
    };
}

mod defaults {
    use super::Config;
    default_!(report_degree, u32);
    default_!(report_path, String);
    default_!(show_trace, bool);
    default_!(show_polynomial, bool);
}

impl Default for Config {
    fn default() -> Self {
        Self {
            report_degree: 100,
            report_path: "resultados_n100.txt".to_owned(),
            show_trace: true,
            show_polynomial: true,
        }
    }
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        let dirs = AppDirs::new(Some("binocalc"), false)?;
        Some(dirs.config_dir.join("binocalc.cfg"))
    }

    /// Loads the per-user config, falling back to defaults when it can't be read.
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            log::warn!("no config directory on this platform, using defaults");
            return Self::default();
        };
        match Self::load_from(&path) {
            Ok(conf) => conf,
            Err(err) => {
                log::warn!("could not load {}: {err}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Reads `path`, creating it with defaults if missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let conf = match fs::File::open(path) {
            Ok(file) => from_reader::<fs::File, Self>(file)?,
            Err(_) => Self::default(),
        };
        // write back default values of any fields not present
        fs::write(path, to_string_pretty(&conf, PrettyConfig::default())?)?;
        Ok(conf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("binocalc-config-{}-{name}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir.join("binocalc.cfg")
    }

    #[test]
    fn missing_file_is_created_with_defaults() {
        let path = scratch("missing");
        let conf = Config::load_from(&path).unwrap();
        assert_eq!(conf, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn partial_file_is_completed() {
        let path = scratch("partial");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "(report_degree: 12)").unwrap();

        let conf = Config::load_from(&path).unwrap();
        assert_eq!(conf.report_degree, 12);
        assert_eq!(conf.report_path, "resultados_n100.txt");

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("show_trace"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = scratch("malformed");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "(report_degree: \"many\")").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
