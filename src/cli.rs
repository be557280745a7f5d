use crate::model::DEFAULT_EMAIL;
use anyhow::Result;
use clap::{ArgAction, Args, Parser};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "localcontrib")]
#[command(about = "Contribution heatmap for the git repositories on this machine")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[arg(
        long,
        value_name = "FOLDER",
        conflicts_with = "email",
        help = "Add a new folder to scan for Git repositories"
    )]
    pub add: Option<PathBuf>,

    #[arg(
        long,
        value_name = "ADDRESS",
        default_value = DEFAULT_EMAIL,
        help = "Author email whose commits are counted"
    )]
    pub email: String,
}

#[derive(Args, Clone, Debug)]
pub struct CommonArgs {
    #[arg(
        long,
        env = "LOCALCONTRIB_REGISTRY",
        value_name = "FILE",
        help = "Path to the repository registry (default: ~/.localcontribs)"
    )]
    pub registry: Option<PathBuf>,

    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,

    #[arg(short, long, action = ArgAction::Count, help = "Increase log verbosity")]
    pub verbose: u8,
}

impl CommonArgs {
    pub fn use_color(&self) -> bool {
        !self.no_color && console::colors_enabled()
    }
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        crate::logging::init(self.common.verbose);

        match self.add {
            Some(folder) => crate::scan::exec(&self.common, &folder),
            None => crate::heat::exec(&self.common, &self.email),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn email_defaults_to_placeholder() {
        let cli = Cli::try_parse_from(["localcontrib"]).unwrap();
        assert_eq!(cli.email, DEFAULT_EMAIL);
        assert!(cli.add.is_none());
    }

    #[test]
    fn add_and_email_conflict() {
        let result = Cli::try_parse_from(["localcontrib", "--add", "/src", "--email", "me@example.com"]);
        assert!(result.is_err());
    }

    #[test]
    fn add_alone_is_accepted() {
        let cli = Cli::try_parse_from(["localcontrib", "--add", "/src", "-vv"]).unwrap();
        assert_eq!(cli.add, Some(PathBuf::from("/src")));
        assert_eq!(cli.common.verbose, 2);
    }
}
