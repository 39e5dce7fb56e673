use clap::ValueEnum;
use kiln_config::BuildMode;

/// Build mode selectable on the command line
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum ModeArg {
    /// Stable names, eval source maps, injected styles
    #[value(name = "development")]
    Development,

    /// Hashed names, standalone source maps, extracted styles
    #[value(name = "production")]
    Production,
}

impl From<ModeArg> for BuildMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Development => BuildMode::Development,
            ModeArg::Production => BuildMode::Production,
        }
    }
}
