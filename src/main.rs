use std::process;

use quill::cli::Cli;
use quill::config::Config;
use quill::run;

fn main() {
    let cli = match Cli::parse() {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let mut config = Config::default();
    cli.apply_to_config(&mut config);

    if let Err(e) = run::run(&cli.files, &config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
