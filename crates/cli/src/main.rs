use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};

use comment_rules_cli::cli_args::{Args, RunMode};
use comment_rules_cli::output;
use comment_rules_cli::wizard::{run_wizard, TerminalPrompter};
use comment_rules_core::config::{self, Config};
use comment_rules_core::editors::{partition_editor_keys, Editor, EDITORS};
use comment_rules_core::error::Result;
use comment_rules_core::file_handling;
use comment_rules_core::installer::{EditorReport, Installer};
use comment_rules_core::rules::{Rule, Scope};

fn load_config(args: &Args) -> Result<Config> {
    let config_path = config::get_config_path(&args.config_path);
    debug!("Config path: `{}`", config_path);

    file_handling::get_config(&config_path)
}

fn build_installer(args: &Args, scope: Scope) -> Result<Installer> {
    let base_dir = config::resolve_base_dir(scope, &args.directory)?;
    info!("Installing into `{}`", base_dir.display());

    Ok(Installer::new(base_dir).dry_run(args.dry_run))
}

/// Installs for each editor in turn, printing a line as each one finishes.
fn install_with_progress(
    installer: &Installer,
    editors: &[&'static Editor],
    rules: &[Rule],
    dry_run: bool,
) -> Result<()> {
    for &editor in editors {
        let files = installer.install(editor, rules)?;
        println!("{}", output::editor_done(&EditorReport { editor, files }, dry_run));
    }

    println!("{}", output::install_complete(dry_run));
    Ok(())
}

fn install_everywhere(args: &Args, config: &Config) -> Result<ExitCode> {
    let scope = args.scope(config);
    let rules = args.rule_choice(config).rules();
    let installer = build_installer(args, scope)?;
    let editors: Vec<&'static Editor> = EDITORS.iter().collect();

    println!("{}", output::install_all_header(&rules, scope));
    install_with_progress(&installer, &editors, &rules, args.dry_run)?;

    Ok(ExitCode::SUCCESS)
}

fn install_named(args: &Args, config: &Config, keys: &[String]) -> Result<ExitCode> {
    let (editors, unknown) = partition_editor_keys(keys);

    if !unknown.is_empty() {
        println!("{}", output::unknown_editors(&unknown));
    }

    if editors.is_empty() {
        print!("{}", output::editor_list());
        return Ok(ExitCode::FAILURE);
    }

    let scope = args.scope(config);
    let rules = args.rule_choice(config).rules();
    let installer = build_installer(args, scope)?;

    println!("{}", output::install_header(&rules, editors.len()));
    install_with_progress(&installer, &editors, &rules, args.dry_run)?;

    Ok(ExitCode::SUCCESS)
}

fn install_interactively(args: &Args) -> Result<ExitCode> {
    let Some(selection) = run_wizard(&mut TerminalPrompter, args.presets())? else {
        println!("\n[i] Install cancelled.\n");
        return Ok(ExitCode::SUCCESS);
    };

    let rules = selection.rule.rules();
    let installer = build_installer(args, selection.scope)?;

    println!("{}", output::install_header(&rules, selection.editors.len()));
    install_with_progress(&installer, &selection.editors, &rules, args.dry_run)?;

    Ok(ExitCode::SUCCESS)
}

fn execute() -> Result<ExitCode> {
    let args = Args::parse();
    let config = load_config(&args)?;

    match args.run_mode() {
        RunMode::List => {
            print!("{}", output::editor_list());
            Ok(ExitCode::SUCCESS)
        }
        RunMode::All => install_everywhere(&args, &config),
        RunMode::Editors(keys) => install_named(&args, &config, &keys),
        RunMode::Wizard => {
            if config.scope.is_some() || config.rule.is_some() {
                debug!("Configured defaults are not applied to the interactive wizard");
            }
            install_interactively(&args)
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
