//! Static target table and chain resolution
//!
//! Targets form a two-level graph: `all` is a composite chain over leaf
//! toolchain targets, every other target maps to a single command
//! descriptor. Resolution is pure so chain ordering can be tested without
//! spawning anything.

use crate::config::RmakeConfig;

/// A named unit of work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    All,
    Build,
    Clean,
    Check,
    Run,
    Help,
}

impl Target {
    /// Parse a target name from the command line or configuration.
    ///
    /// `compile` is an alias for `build`. The pseudo-name `default` is not
    /// accepted here; the CLI resolves it against the configuration before
    /// parsing.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "all" => Some(Target::All),
            "build" | "compile" => Some(Target::Build),
            "clean" => Some(Target::Clean),
            "check" => Some(Target::Check),
            "run" => Some(Target::Run),
            "help" => Some(Target::Help),
            _ => None,
        }
    }

    /// Canonical target name
    pub fn name(self) -> &'static str {
        match self {
            Target::All => "all",
            Target::Build => "build",
            Target::Clean => "clean",
            Target::Check => "check",
            Target::Run => "run",
            Target::Help => "help",
        }
    }

    /// Whether the target maps to a single toolchain command
    pub fn is_leaf(self) -> bool {
        !matches!(self, Target::All | Target::Help)
    }
}

/// Command descriptor for one target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetKind<'a> {
    /// Composite chain of child targets, executed in order
    Chain(Vec<Target>),
    /// Single external toolchain command line
    Invoke(&'a str),
    /// Built-in usage text
    Usage,
}

/// The static target table for one configuration
pub struct TargetGraph<'a> {
    config: &'a RmakeConfig,
}

impl<'a> TargetGraph<'a> {
    pub fn new(config: &'a RmakeConfig) -> Self {
        Self { config }
    }

    /// Look up the command descriptor for a target
    pub fn kind(&self, target: Target) -> TargetKind<'a> {
        match target {
            Target::All => TargetKind::Chain(self.all_chain()),
            Target::Build => TargetKind::Invoke(self.config.toolchain.build.as_str()),
            Target::Clean => TargetKind::Invoke(self.config.toolchain.clean.as_str()),
            Target::Check => TargetKind::Invoke(self.config.toolchain.check.as_str()),
            Target::Run => TargetKind::Invoke(self.config.toolchain.run.as_str()),
            Target::Help => TargetKind::Usage,
        }
    }

    /// Resolve a target to the ordered sequence of targets to execute.
    ///
    /// A composite target expands to its configured chain with each child
    /// kept at its first position; anything else resolves to itself.
    pub fn resolve(&self, target: Target) -> Vec<Target> {
        match self.kind(target) {
            TargetKind::Chain(children) => {
                let mut sequence: Vec<Target> = Vec::new();
                for child in children {
                    if !sequence.contains(&child) {
                        sequence.push(child);
                    }
                }
                sequence
            }
            _ => vec![target],
        }
    }

    fn all_chain(&self) -> Vec<Target> {
        self.config
            .targets
            .all
            .iter()
            .filter_map(|name| Target::from_name(name))
            .filter(|target| target.is_leaf())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_chain(chain: &[&str]) -> RmakeConfig {
        let mut config = RmakeConfig::default();
        config.targets.all = chain.iter().map(|s| s.to_string()).collect();
        config
    }

    #[test]
    fn compile_is_an_alias_for_build() {
        assert_eq!(Target::from_name("compile"), Some(Target::Build));
        assert_eq!(Target::from_name("build"), Some(Target::Build));
    }

    #[test]
    fn unknown_names_do_not_parse() {
        assert_eq!(Target::from_name("install"), None);
        assert_eq!(Target::from_name("default"), None);
        assert_eq!(Target::from_name(""), None);
    }

    #[test]
    fn all_resolves_to_the_configured_chain_in_order() {
        let config = RmakeConfig::default();
        let graph = TargetGraph::new(&config);
        assert_eq!(
            graph.resolve(Target::All),
            vec![Target::Check, Target::Clean, Target::Build, Target::Run]
        );
    }

    #[test]
    fn all_chain_variant_without_build_is_honored() {
        let config = config_with_chain(&["check", "clean", "run"]);
        let graph = TargetGraph::new(&config);
        assert_eq!(
            graph.resolve(Target::All),
            vec![Target::Check, Target::Clean, Target::Run]
        );
    }

    #[test]
    fn repeated_chain_entries_keep_their_first_position() {
        let config = config_with_chain(&["check", "build", "check", "run"]);
        let graph = TargetGraph::new(&config);
        assert_eq!(
            graph.resolve(Target::All),
            vec![Target::Check, Target::Build, Target::Run]
        );
    }

    #[test]
    fn leaf_targets_resolve_to_themselves() {
        let config = RmakeConfig::default();
        let graph = TargetGraph::new(&config);
        assert_eq!(graph.resolve(Target::Build), vec![Target::Build]);
        assert_eq!(graph.resolve(Target::Help), vec![Target::Help]);
    }

    #[test]
    fn descriptors_carry_the_configured_command_lines() {
        let mut config = RmakeConfig::default();
        config.toolchain.check = "cargo clippy".to_string();
        let graph = TargetGraph::new(&config);

        assert_eq!(graph.kind(Target::Check), TargetKind::Invoke("cargo clippy"));
        assert_eq!(graph.kind(Target::Help), TargetKind::Usage);
        assert!(matches!(graph.kind(Target::All), TargetKind::Chain(_)));
    }
}
