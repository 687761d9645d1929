use clap::{CommandFactory, Parser};
use colored::*;
use env_logger::{Builder, Env, Target};
use is_terminal::IsTerminal;
use log::info;
use scopegrep::cli::{Cli, Commands, MarkerStyle, SearchArgs};
use scopegrep::config::Config;
use scopegrep::error::{Result as ScopeGrepResult, ScopeGrepError};
use scopegrep::output::{OutputFormat, render_json, render_text};
use scopegrep::{
    FileHandle, Finder, FsSource, Marker, NoProgress, Opener, ProgressReporter, ProgressSink,
    Scanner, SearchConfiguration,
};
use std::fs;
use std::time::Instant;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{}", format!("Error: {e}").red());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> ScopeGrepResult<()> {
    setup_logging(&cli)?;

    let start_time = Instant::now();
    info!("Application started with command: {:?}", cli.command);

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Search(args) => run_search(&config, args)?,
        Commands::Open { file, line } => {
            config.opener().open(&FileHandle::new(file), line as usize)?;
        }
        Commands::Extensions => {
            for toggle in config.search_configuration().extensions.iter() {
                let mark = if toggle.enabled { "x" } else { " " };
                println!("[{mark}] {}", toggle.ext);
            }
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "scopegrep", &mut std::io::stdout());
        }
    }

    info!(
        "Application finished. Total elapsed time: {:.2?}",
        start_time.elapsed()
    );
    Ok(())
}

fn run_search(config: &Config, args: SearchArgs) -> ScopeGrepResult<()> {
    let mut layout = config.layout();
    if let Some(root) = &args.root {
        layout.default_root = root.clone();
    }
    if let Some(secondary) = &args.secondary_root {
        layout.secondary_root = secondary.clone();
    }

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let theme = args.theme.unwrap_or(config.display.theme);
    let marker = match args.marker {
        MarkerStyle::Auto if args.format == OutputFormat::Text && std::io::stdout().is_terminal() => {
            Marker::ansi()
        }
        MarkerStyle::Auto | MarkerStyle::Plain => Marker::plain(),
        MarkerStyle::Ansi => Marker::ansi(),
        MarkerStyle::Rich => Marker::rich_text(theme),
    };

    let source = FsSource::new().respect_ignore(config.scope.respect_ignore || args.respect_ignore);
    let scanner = Scanner::new(source, layout).with_marker(marker);

    let mut search = config.search_configuration();
    apply_overrides(&mut search, &args);
    let mut finder = Finder::new(scanner, search);
    for dir in &args.include {
        finder.add_include_folder(dir)?;
    }
    for dir in &args.exclude {
        finder.add_exclude_folder(dir)?;
    }

    let show_progress =
        config.display.progress && !args.no_progress && std::io::stderr().is_terminal();
    let mut progress: Box<dyn ProgressSink> = if show_progress {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(NoProgress)
    };

    let session = finder.submit(progress.as_mut())?;
    if let Some(err) = &session.pattern_error {
        eprintln!("{}", format!("Invalid search pattern: {err}").red());
    }

    match args.format {
        OutputFormat::Text => {
            let query = finder.config().query.clone();
            let (session, view) = finder.session_and_view();
            if args.collapse {
                for result in session.results() {
                    view.set_expanded(&result.file_path, false);
                }
            }
            print!("{}", render_text(session, &query, view));
        }
        OutputFormat::Json => {
            println!("{}", render_json(finder.session(), finder.config())?);
        }
    }

    if let Some(n) = args.open {
        finder.open_match(n as usize - 1, &config.opener())?;
    }
    Ok(())
}

fn apply_overrides(search: &mut SearchConfiguration, args: &SearchArgs) {
    search.query = args.query.clone();
    if let Some(mode) = args.mode {
        search.mode = mode;
    }
    search.case_sensitive |= args.case_sensitive;
    search.whole_word |= args.whole_word;
    search.include_secondary_root |= args.secondary;
    if !args.extensions.is_empty() {
        search.extensions.enable_only(&args.extensions);
    }
    for ext in &args.disabled_extensions {
        search.extensions.set(ext, false);
    }
}

fn setup_logging(cli: &Cli) -> ScopeGrepResult<()> {
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_filter));

    builder.format(|buf, record| {
        use std::io::Write;
        writeln!(
            buf,
            "{} [{}] [{}] {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.module_path().unwrap_or("unknown"),
            record.args()
        )
    });

    if let Some(log_path) = &cli.log {
        if let Some(parent_dir) = log_path.parent()
            && !parent_dir.as_os_str().is_empty()
            && !parent_dir.exists()
        {
            fs::create_dir_all(parent_dir).map_err(ScopeGrepError::Io)?;
        }
        let log_file = fs::File::create(log_path).map_err(ScopeGrepError::Io)?;
        builder.target(Target::Pipe(Box::new(log_file)));
    } else {
        builder.target(Target::Stderr);
    }

    builder
        .try_init()
        .map_err(|e| ScopeGrepError::Other(e.to_string()))?;
    Ok(())
}
