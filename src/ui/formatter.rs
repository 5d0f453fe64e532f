//! Pure formatting functions for UI output.
//!
//! `format_*` functions build strings and are unit tested; `display_*`
//! functions print them.

use console::style;

use crate::cli::orchestration::{AliasPlan, WorkflowResult};
use crate::report::ReportBuilder;
use crate::warning::PublishWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a workflow warning to the user.
pub fn display_warning(warning: &PublishWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Render an alias plan as a sectioned report.
pub fn format_plan(plan: &AliasPlan) -> String {
    let mut report = ReportBuilder::new("");
    report
        .add("Release:", format!("  {}", plan.release_tag))
        .add_list("Existing releases:", &plan.releases, "  (none)")
        .add_list("Alias tags:", &plan.aliases, "  (none)");
    report.render()
}

pub fn display_plan(plan: &AliasPlan) {
    println!();
    print!("{}", format_plan(plan));
}

/// One line summarizing what a workflow run did.
pub fn format_result(result: &WorkflowResult) -> String {
    let tags = std::iter::once(result.plan.release_tag.as_str())
        .chain(result.plan.aliases.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(", ");

    match (&result.commit, result.pushed) {
        (None, _) => format!("Dry run: would tag {}", tags),
        (Some(commit), true) => format!("Tagged {} at {} and pushed", tags, short_hash(commit)),
        (Some(commit), false) => format!("Tagged {} at {}", tags, short_hash(commit)),
    }
}

/// Shows the git command needed to push the tags later.
pub fn format_manual_push_instruction(plan: &AliasPlan, remote: &str) -> String {
    let mut command = format!("git push {} {}", remote, plan.release_tag);
    if !plan.aliases.is_empty() {
        command.push_str(&format!(
            " && git push --force {} {}",
            remote,
            plan.aliases.join(" ")
        ));
    }
    command
}

pub fn display_manual_push_instruction(plan: &AliasPlan, remote: &str) {
    println!(
        "\n{} To push these tags later, run:\n  {}",
        style("→").yellow(),
        style(format_manual_push_instruction(plan, remote)).cyan()
    );
}

fn short_hash(hash: &str) -> &str {
    hash.get(..7).unwrap_or(hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(aliases: &[&str]) -> AliasPlan {
        AliasPlan {
            release_tag: "v1.2.0".to_string(),
            aliases: aliases.iter().map(|s| s.to_string()).collect(),
            releases: vec!["v1.1.0".to_string()],
            ignored: Vec::new(),
            warnings: Vec::new(),
        }
    }

    #[test]
    fn test_format_plan() {
        let text = format_plan(&plan(&["v1.2", "v1"]));
        assert!(text.starts_with("Release:\n  v1.2.0\n"));
        assert!(text.contains("Existing releases:\n  v1.1.0\n"));
        assert!(text.contains("Alias tags:\n  v1.2\n  v1\n"));
    }

    #[test]
    fn test_format_plan_without_aliases() {
        assert!(format_plan(&plan(&[])).contains("Alias tags:\n  (none)\n"));
    }

    #[test]
    fn test_format_result() {
        let mut result = WorkflowResult {
            plan: plan(&["v1.2"]),
            commit: None,
            pushed: false,
        };
        assert_eq!(format_result(&result), "Dry run: would tag v1.2.0, v1.2");

        result.commit = Some("abc1234def5678".to_string());
        assert_eq!(format_result(&result), "Tagged v1.2.0, v1.2 at abc1234");

        result.pushed = true;
        assert!(format_result(&result).ends_with("and pushed"));
    }

    #[test]
    fn test_manual_push_instruction() {
        assert_eq!(
            format_manual_push_instruction(&plan(&["v1.2", "v1"]), "origin"),
            "git push origin v1.2.0 && git push --force origin v1.2 v1"
        );
        assert_eq!(
            format_manual_push_instruction(&plan(&[]), "upstream"),
            "git push upstream v1.2.0"
        );
    }
}
