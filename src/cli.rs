use crate::calendar::Date;
use crate::config::RunConfig;
use crate::content::ContentGenerator;
use crate::git::GitRepo;
use crate::orchestrator::{self, Orchestrator};
use crate::report;
use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;

#[derive(Parser, Debug)]
#[command(name = "cyclops")]
#[command(about = "Fill a contribution graph with backdated commits to show how little it proves")]
#[command(version)]
#[command(before_help = report::banner())]
#[command(after_help = "Example:\n  cyclops 2024-01-01 2024-12-31 5\n\n\
Remember: This tool exists to highlight broken hiring practices.\n\
The goal is to expose the system, not to encourage deception.")]
pub struct Cli {
    #[arg(help = "Start date in YYYY-MM-DD format")]
    pub start_date: String,

    #[arg(help = "End date in YYYY-MM-DD format")]
    pub end_date: String,

    #[arg(help = "Maximum commits per day (1-50, 1-20 recommended)")]
    pub max_commits_per_day: u32,
}

impl Cli {
    pub fn execute(self) -> Result<()> {
        let start = Date::parse(&self.start_date).context("Invalid start date")?;
        let end = Date::parse(&self.end_date).context("Invalid end date")?;
        orchestrator::validate(start, end, self.max_commits_per_day)?;

        let repo = GitRepo::open(None::<&str>).context("Failed to open working directory")?;
        let config = RunConfig::new(repo.path())
            .with_progress(std::io::stderr().is_terminal());
        let mut runner = Orchestrator::new(repo, ContentGenerator::from_clock(), config);

        runner
            .ensure_repository_initialized()
            .context("Failed to prepare repository")?;

        report::print_banner();
        report::print_header(start, end, self.max_commits_per_day);

        let summary = runner
            .run(start, end, self.max_commits_per_day)
            .context("Run aborted")?;

        report::print_summary(&summary);
        Ok(())
    }
}
