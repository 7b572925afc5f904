use campus_core::AppError;
use campus_domain::{ModuleKey, StatusFilter};
use clap::{Parser, Subcommand, ValueEnum};

/// Campus console - school administration for roles, grades and subjects
#[derive(Debug, Parser)]
#[command(name = "campus-console")]
#[command(about = "Manage school roles, grades and subjects from the terminal")]
#[command(version)]
pub struct Cli {
    /// Use seeded in-memory data instead of the REST backend.
    ///
    /// Changes made offline only live for the current invocation.
    #[arg(long, global = true)]
    pub offline: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the workspace landing page
    Workspace,
    /// List the records of a module
    List {
        /// Module to open (roles, grades or subjects)
        #[arg(value_parser = parse_module)]
        module: ModuleKey,
        /// Status filter (all, active or inactive)
        #[arg(short, long, default_value = "active", value_parser = parse_filter)]
        filter: StatusFilter,
    },
    /// Create a record
    Create {
        /// Module to create the record in
        #[arg(value_parser = parse_module)]
        module: ModuleKey,
        /// Name (or grade level) of the new record
        #[arg(short, long)]
        name: String,
        /// Description of the new record
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Edit a record
    Edit {
        /// Module the record belongs to
        #[arg(value_parser = parse_module)]
        module: ModuleKey,
        /// Record identifier
        id: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// New status
        #[arg(short, long, value_enum)]
        status: Option<RecordStatus>,
    },
    /// Delete a record
    Delete {
        /// Module the record belongs to
        #[arg(value_parser = parse_module)]
        module: ModuleKey,
        /// Record identifier
        id: String,
    },
}

/// Status a record can be switched to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RecordStatus {
    Active,
    Inactive,
}

impl RecordStatus {
    pub fn is_active(self) -> bool {
        self == Self::Active
    }
}

fn parse_module(value: &str) -> Result<ModuleKey, AppError> {
    value.parse()
}

fn parse_filter(value: &str) -> Result<StatusFilter, AppError> {
    value.parse()
}

#[cfg(test)]
mod tests {
    use campus_domain::{ModuleKey, StatusFilter};
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, RecordStatus};

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn list_defaults_to_active_filter() {
        let cli = Cli::try_parse_from(["campus-console", "list", "grades"])
            .unwrap_or_else(|_| unreachable!());
        assert!(matches!(
            cli.command,
            Commands::List {
                module: ModuleKey::Grades,
                filter: StatusFilter::Active,
            }
        ));
        assert!(!cli.offline);
    }

    #[test]
    fn edit_accepts_singular_module_and_status() {
        let cli = Cli::try_parse_from([
            "campus-console",
            "edit",
            "subject",
            "3",
            "--status",
            "inactive",
            "--offline",
        ])
        .unwrap_or_else(|_| unreachable!());

        assert!(cli.offline);
        let Commands::Edit {
            module, id, status, ..
        } = cli.command
        else {
            unreachable!()
        };
        assert_eq!(module, ModuleKey::Subjects);
        assert_eq!(id, "3");
        assert_eq!(status, Some(RecordStatus::Inactive));
    }

    #[test]
    fn unknown_module_is_rejected() {
        assert!(Cli::try_parse_from(["campus-console", "list", "teachers"]).is_err());
        assert!(Cli::try_parse_from(["campus-console", "create", "roles"]).is_err());
    }
}
