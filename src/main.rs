mod cli;
mod logging;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_export, print_plain, print_summary, print_view_json};
use workflow::DirectoryWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in cafedir_tui::style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;
	logging::initialize(resolved.log_level, resolved.log_file.as_deref())?;

	if cli.print_config {
		resolved.print_summary();
	}

	let json_output = cli.output == OutputFormat::Json;
	let workflow = DirectoryWorkflow::from_config(resolved)?;

	if cli.list {
		let view = workflow.view();
		return match cli.output {
			OutputFormat::Plain => {
				print_plain(&view);
				Ok(())
			}
			OutputFormat::Json => print_view_json(&view, workflow.query(), workflow.provider()),
		};
	}

	if cli.export {
		let (path, rows) = workflow.export()?;
		return print_export(&path, rows, json_output);
	}

	let summary = workflow.run_interactive()?;
	print_summary(&summary, json_output)
}
