use crate::calendar::Date;
use crate::model::RunSummary;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

const BANNER: &str = r"
   ██████╗██╗   ██╗ ██████╗██╗      ██████╗ ██████╗ ███████╗
  ██╔════╝╚██╗ ██╔╝██╔════╝██║     ██╔═══██╗██╔══██╗██╔════╝
  ██║      ╚████╔╝ ██║     ██║     ██║   ██║██████╔╝███████╗
  ██║       ╚██╔╝  ██║     ██║     ██║   ██║██╔═══╝ ╚════██║
  ╚██████╗   ██║   ╚██████╗███████╗╚██████╔╝██║     ███████║
   ╚═════╝   ╚═╝    ╚═════╝╚══════╝ ╚═════╝ ╚═╝     ╚══════╝
";

pub const TAGLINE: &str = "  Exposing the absurdity of GitHub-based hiring decisions\n  \
                           Your coding ability shouldn't be judged by commit frequency";

pub fn banner() -> String {
    format!("{BANNER}\n{TAGLINE}\n")
}

pub fn print_banner() {
    println!("{}", style(banner()).green());
}

pub fn print_header(start: Date, end: Date, max_per_day: u32) {
    println!("Generating GitHub activity to expose hiring algorithm flaws...");
    println!("Date range: {} to {}", style(start).bold(), style(end).bold());
    println!("Max commits per day: {}\n", style(max_per_day).bold());
    println!("If this can fool hiring algorithms, maybe the problem isn't");
    println!("the candidates - it's the evaluation criteria.\n");
}

pub fn day_line(date: Date, commits: u32) -> String {
    format!("Processing {date}: {commits} commits")
}

/// Progress over the days of a run; hidden when `visible` is false.
pub fn day_progress(total_days: u64, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(total_days);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} days {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-"),
    );
    pb
}

pub fn summary_lines(summary: &RunSummary) -> Vec<String> {
    let mut lines = vec![
        format!("Days processed: {}", summary.days_processed),
        format!("Total commits created: {}", summary.total_commits),
    ];
    if let Some(avg) = summary.average_per_active_day() {
        lines.push(format!("Average commits per active day: {avg:.2}"));
    }
    lines
}

pub fn print_summary(summary: &RunSummary) {
    println!("\n{}", style("Cyclops has exposed the system!").bold());
    println!("{}", "━".repeat(62));
    for line in summary_lines(summary) {
        println!("{line}");
    }

    println!("\nYour GitHub graph is now green. Does this make you a better developer?");
    println!("Of course not. That's exactly the point.\n");

    println!("{}", style("Next steps:").bold());
    println!("1. Push to GitHub: git push -u origin main");
    println!("2. Watch your contribution graph fill up");
    println!("3. Remember: Green squares ≠ Coding ability");
    println!("4. Help fix the hiring process, don't just game it\n");

    println!("The real solution is for the industry to evaluate developers based on:");
    for point in [
        "Problem-solving skills",
        "Code quality and architecture",
        "Collaboration and communication",
        "Learning ability and adaptability",
        "NOT GitHub activity patterns",
    ] {
        println!("• {point}");
    }
    println!();
}
