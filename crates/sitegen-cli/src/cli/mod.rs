//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "sitegen",
    bin_name = "sitegen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Site project scaffolding with layered configuration",
    long_about = "Sitegen generates components and script modules inside an \
                  existing project, driven by configuration files resolved \
                  upward through the directory tree.",
    after_help = "EXAMPLES:\n\
        \x20 sitegen init\n\
        \x20 sitegen component NavBar --styles\n\
        \x20 sitegen script carousel --styles --js\n\
        \x20 sitegen config resolved\n\
        \x20 sitegen completions bash > /usr/share/bash-completion/completions/sitegen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Set up or update project settings.
    #[command(
        about = "Set up project settings",
        after_help = "EXAMPLES:\n\
            \x20 sitegen init                       # interactive prompts\n\
            \x20 sitegen init --yes                 # accept defaults\n\
            \x20 sitegen init --yes --type webapp   # non-interactive with overrides"
    )]
    Init(InitArgs),

    /// Generate a component inside the current project.
    #[command(
        visible_alias = "comp",
        about = "Generate a component",
        after_help = "EXAMPLES:\n\
            \x20 sitegen component NavBar\n\
            \x20 sitegen component \"nav bar\" --styles\n\
            \x20 sitegen comp Button --force"
    )]
    Component(ComponentArgs),

    /// Generate a script module inside the current project.
    #[command(
        visible_alias = "sm",
        about = "Generate a script module",
        after_help = "EXAMPLES:\n\
            \x20 sitegen script carousel\n\
            \x20 sitegen script carousel --styles --js\n\
            \x20 sitegen sm teaser --vars \"meta,items\""
    )]
    Script(ScriptArgs),

    /// Inspect the configuration layers.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 sitegen config resolved\n\
            \x20 sitegen config resolved --dir sub/module\n\
            \x20 sitegen config list\n\
            \x20 sitegen config path"
    )]
    Config(ConfigCommands),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 sitegen completions bash > ~/.local/share/bash-completion/completions/sitegen\n\
            \x20 sitegen completions zsh  > ~/.zfunc/_sitegen\n\
            \x20 sitegen completions fish > ~/.config/fish/completions/sitegen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `sitegen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Skip all prompts and use flags/defaults.
    #[arg(short = 'y', long = "yes", help = "Skip prompts and accept defaults")]
    pub yes: bool,

    /// Project type to record in the settings.
    #[arg(
        short = 't',
        long = "type",
        value_name = "TYPE",
        value_enum,
        help = "Project type"
    )]
    pub project_type: Option<ProjectTypeArg>,

    /// Author name to record in the settings.
    #[arg(long = "author-name", value_name = "NAME", help = "Author name")]
    pub author_name: Option<String>,

    /// Author email to record in the settings.
    #[arg(long = "author-email", value_name = "EMAIL", help = "Author email")]
    pub author_email: Option<String>,

    /// Record TypeScript use (webapp and restapp projects). Without the
    /// flag it is detected from `tsconfig.json` at the project root.
    #[arg(
        long = "typescript",
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true",
        help = "Record TypeScript use (webapp/restapp)"
    )]
    pub typescript: Option<bool>,
}

/// Project types accepted by `--type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ProjectTypeArg {
    #[value(alias = "app")]
    Webapp,
    #[value(alias = "api")]
    Restapp,
    #[value(alias = "site")]
    Website,
    Other,
}

impl ProjectTypeArg {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Webapp => "webapp",
            Self::Restapp => "restapp",
            Self::Website => "website",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for ProjectTypeArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── component ─────────────────────────────────────────────────────────────────

/// Arguments for `sitegen component`.
#[derive(Debug, Args)]
pub struct ComponentArgs {
    /// Component name.  Converted to PascalCase for file names, so
    /// `nav bar` and `NavBar` produce the same component.
    #[arg(value_name = "NAME", help = "Component name")]
    pub name: String,

    /// Also generate a stylesheet next to the component.
    #[arg(short = 's', long = "styles", help = "Also generate a stylesheet")]
    pub styles: bool,

    /// Overwrite files that already exist.
    #[arg(long = "force", help = "Overwrite existing files")]
    pub force: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── script ────────────────────────────────────────────────────────────────────

/// Arguments for `sitegen script`.
#[derive(Debug, Args)]
pub struct ScriptArgs {
    /// Script module name.  Lower-cased and hyphenated for file names.
    #[arg(value_name = "NAME", help = "Script module name")]
    pub name: String,

    /// Also generate a stylesheet inside the module directory.
    #[arg(short = 's', long = "styles", help = "Also generate a stylesheet")]
    pub styles: bool,

    /// Also generate a client-side script.
    #[arg(short = 'j', long = "js", help = "Also generate a client script")]
    pub js: bool,

    /// Comma-separated variables for the settings constant.  Pass `false`
    /// to omit the constant entirely.
    #[arg(
        long = "vars",
        value_name = "VARS",
        help = "Script variables for the settings constant (or 'false' to disable)"
    )]
    pub vars: Option<String>,

    /// Overwrite files that already exist.
    #[arg(long = "force", help = "Overwrite existing files")]
    pub force: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `sitegen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the merged project configuration resolved from the directory
    /// tree (config files only, no tool defaults).
    Resolved {
        /// Directory to start the upward resolution from.
        #[arg(long = "dir", value_name = "DIR", help = "Start directory")]
        dir: Option<PathBuf>,
    },
    /// Print all tool configuration values.
    List,
    /// Print the path to the active tool configuration file.
    Path,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `sitegen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn project_type_arg_display() {
        assert_eq!(ProjectTypeArg::Webapp.to_string(), "webapp");
        assert_eq!(ProjectTypeArg::Restapp.to_string(), "restapp");
        assert_eq!(ProjectTypeArg::Website.to_string(), "website");
        assert_eq!(ProjectTypeArg::Other.to_string(), "other");
    }

    #[test]
    fn parse_component_command() {
        let cli = Cli::parse_from(["sitegen", "component", "NavBar", "--styles"]);
        if let Commands::Component(args) = cli.command {
            assert_eq!(args.name, "NavBar");
            assert!(args.styles);
            assert!(!args.force);
        } else {
            panic!("expected Component command");
        }
    }

    #[test]
    fn comp_alias_parses() {
        let cli = Cli::parse_from(["sitegen", "comp", "Button"]);
        assert!(matches!(cli.command, Commands::Component(_)));
    }

    #[test]
    fn sm_alias_parses() {
        let cli = Cli::parse_from(["sitegen", "sm", "teaser", "-j"]);
        if let Commands::Script(args) = cli.command {
            assert_eq!(args.name, "teaser");
            assert!(args.js);
        } else {
            panic!("expected Script command");
        }
    }

    #[test]
    fn script_vars_value() {
        let cli = Cli::parse_from(["sitegen", "script", "teaser", "--vars", "meta,items"]);
        if let Commands::Script(args) = cli.command {
            assert_eq!(args.vars.as_deref(), Some("meta,items"));
        } else {
            panic!("expected Script command");
        }
    }

    #[test]
    fn init_type_alias() {
        let cli = Cli::parse_from(["sitegen", "init", "--yes", "--type", "app"]);
        if let Commands::Init(args) = cli.command {
            assert_eq!(args.project_type, Some(ProjectTypeArg::Webapp));
            assert!(args.yes);
        } else {
            panic!("expected Init command");
        }
    }

    #[test]
    fn init_typescript_flag_forms() {
        let cli = Cli::parse_from(["sitegen", "init", "--yes", "--typescript"]);
        if let Commands::Init(args) = cli.command {
            assert_eq!(args.typescript, Some(true));
        } else {
            panic!("expected Init command");
        }

        let cli = Cli::parse_from(["sitegen", "init", "--yes", "--typescript", "false"]);
        if let Commands::Init(args) = cli.command {
            assert_eq!(args.typescript, Some(false));
        } else {
            panic!("expected Init command");
        }

        let cli = Cli::parse_from(["sitegen", "init", "--yes"]);
        if let Commands::Init(args) = cli.command {
            assert_eq!(args.typescript, None);
        } else {
            panic!("expected Init command");
        }
    }

    #[test]
    fn config_resolved_with_dir() {
        let cli = Cli::parse_from(["sitegen", "config", "resolved", "--dir", "sub/module"]);
        if let Commands::Config(ConfigCommands::Resolved { dir }) = cli.command {
            assert_eq!(dir, Some(PathBuf::from("sub/module")));
        } else {
            panic!("expected Config Resolved command");
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["sitegen", "--quiet", "--verbose", "config", "path"]);
        assert!(result.is_err());
    }
}
