use botscaffold::{preview, vfs::VirtualFS, BOT_STRUCTURE};
use clap::{crate_description, crate_name, crate_version, Arg, ArgAction, Command};

// The CLI layer should only parse inputs and forward them to library code.
fn main() -> miette::Result<()> {
    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .version(crate_version!())
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .get_matches();

    let is_verbose = matches.get_flag("verbose");

    let default_filter = if is_verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let report = botscaffold::scaffold_current_dir()?;

    log::debug!("{} entries applied", report.applied.len());

    preview::print_tree(&VirtualFS::plan(&BOT_STRUCTURE), &report.base);

    println!("\n✅ folder and file structure created");

    Ok(())
}
