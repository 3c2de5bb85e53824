use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use modver::config::FileConfigSource;
use modver::repo;
use modver::ui;
use modver::ModuleVersioning;

#[derive(clap::Parser)]
#[command(
    name = "modver",
    version,
    about = "Compute release tags for the module sets of a multi-module repository"
)]
struct Args {
    #[arg(
        short = 'f',
        long,
        help = "Versioning file path (default: versions.yaml at the repository root)"
    )]
    versioning_file: Option<PathBuf>,

    #[arg(
        short,
        long,
        help = "Repository root (default: the git repository enclosing the current directory)"
    )]
    repo_root: Option<PathBuf>,

    #[arg(short, long, help = "Module set to compute tags for")]
    module_set: Option<String>,

    #[arg(long, help = "Show configured module sets and exit")]
    list: bool,

    #[arg(long, help = "Print the module info and module path indices")]
    show_indices: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

fn run(args: Args) -> Result<()> {
    let repo_root = match args.repo_root {
        Some(root) => root,
        None => repo::find_repo_root_from_cwd()?,
    };

    let source = FileConfigSource::discover(args.versioning_file.as_deref(), &repo_root)?;
    ui::display_status(&format!(
        "Reading versioning file {}",
        source.path().display()
    ));

    let versioning = ModuleVersioning::new(&source, &repo_root)?;
    for warning in versioning.walk_warnings() {
        ui::display_walk_warning(warning);
    }

    if args.list {
        ui::display_module_sets(versioning.module_sets());
        return Ok(());
    }

    if args.show_indices {
        ui::display_indices(&versioning);
    }

    let set_name = match args.module_set {
        Some(name) => name,
        None => {
            let available: Vec<String> = versioning.module_sets().keys().cloned().collect();
            ui::select_module_set(&available)?
        }
    };

    let module_set = versioning.get_module_set(&set_name)?;
    let tags = versioning.tags_for_set(&set_name)?;
    ui::display_set_tags(&set_name, module_set, &tags);

    if !module_set.is_stable() {
        ui::display_status(&format!(
            "Module set '{}' is pre-v1 ({}); its API is not yet stable",
            set_name, module_set.version
        ));
    }
    ui::display_success(&format!("Computed {} tags", tags.len()));

    Ok(())
}
