//! Help target and usage text

use anyhow::Result;

use crate::commands::DispatchOptions;
use crate::config::RmakeConfig;

/// Print the fixed usage text. Shared by `help`, the stock default target
/// and unrecognized target names, so all three produce identical output.
pub fn execute(config: &RmakeConfig, _opts: DispatchOptions) -> Result<()> {
    print!("{}", usage(config));
    Ok(())
}

/// Render the usage text for a configuration
pub fn usage(config: &RmakeConfig) -> String {
    format!(
        "{name} {version}\n\
         \n\
         Usage: rmake [OPTIONS] [TARGET]\n\
         \n\
         Targets:\n\
         \x20 all      Run the chain: {chain}\n\
         \x20 build    Build the project ({build})\n\
         \x20 compile  Alias for build\n\
         \x20 check    Statically check the project ({check})\n\
         \x20 clean    Remove {build_dir} and clean toolchain state\n\
         \x20 run      Build and run {executable}\n\
         \x20 help     Show this message\n",
        name = config.project_name(),
        version = config.version(),
        chain = config.targets.all.join(", "),
        build = config.toolchain.build,
        check = config.toolchain.check,
        build_dir = config.targets.build_dir.display(),
        executable = config.executable(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_names_every_target() {
        let config = RmakeConfig::default();
        let text = usage(&config);
        for target in ["all", "build", "compile", "check", "clean", "run", "help"] {
            assert!(text.contains(target), "usage is missing '{}'", target);
        }
    }

    #[test]
    fn usage_reflects_the_configured_chain() {
        let mut config = RmakeConfig::default();
        config.project.name = Some("rlox".to_string());
        config.targets.all = vec!["check".to_string(), "clean".to_string(), "run".to_string()];

        let text = usage(&config);
        assert!(text.starts_with("rlox 0.1.0\n"));
        assert!(text.contains("check, clean, run"));
    }
}
