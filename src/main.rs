use std::{fs::read_to_string, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use frontend::{
    display_error,
    parser::parser::parse_source,
    tree::rewrite::NormalizeConfig,
};
use tracing::{debug, error};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[derive(clap::Parser)]
#[command(about = "Parses a program and prints its syntax tree")]
struct Frontend {
    /// Program to parse
    file: PathBuf,
    /// Print the syntax tree
    #[arg(long)]
    tree: bool,
    /// Skip the normalization passes
    #[arg(long)]
    raw: bool,
    /// Strip the legacy epsilon marker instead of the current one
    #[arg(long)]
    legacy_epsilon: bool,
}

fn main() -> ExitCode {
    initialize_logging();

    let frontend = Frontend::parse();

    let file_name = frontend
        .file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| frontend.file.to_string_lossy().into_owned());

    let file_contents = match read_to_string(&frontend.file) {
        Ok(contents) => contents,
        Err(err) => {
            error!(file = %frontend.file.display(), "Failed to read file: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();
    let mut tree = match parse_source(file_contents.clone(), Some(file_name)) {
        Ok(tree) => tree,
        Err(err) => {
            eprint!("{}", display_error(&err, &file_contents));
            return ExitCode::FAILURE;
        }
    };
    debug!("Parsed in {:?}", start.elapsed());

    if !frontend.raw {
        let config = if frontend.legacy_epsilon {
            NormalizeConfig::legacy()
        } else {
            NormalizeConfig::default()
        };
        tree.normalize(&config);
    }

    if frontend.tree {
        print!("{}", tree.print_tree());
    } else {
        println!("{}: {} nodes", frontend.file.display(), tree.node_count());
    }

    ExitCode::SUCCESS
}

fn initialize_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_filter(env_filter))
        .init();
}
