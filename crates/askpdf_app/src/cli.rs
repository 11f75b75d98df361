use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("askpdf")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Ask a question about one or more PDF files")
        .long_about("Select PDF files and type a question; askpdf uploads both to the configured backend and shows the markdown answer. Without a subcommand an interactive terminal form is opened.")
        .arg(
            Arg::new("backend-url")
                .long("backend-url")
                .short('b')
                .help("Backend endpoint (overrides ASKPDF_BACKEND_URL)")
                .global(true),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Log file used by the interactive form")
                .value_parser(value_parser!(PathBuf))
                .default_value("askpdf.log")
                .global(true),
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .help("Give up on the backend after this many seconds (default: wait indefinitely)")
                .value_parser(value_parser!(u64).range(1..))
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log at debug level")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("ask")
                .about("Submit once and print the answer to stdout")
                .arg(
                    Arg::new("query")
                        .long("query")
                        .short('q')
                        .help("The question to ask")
                        .required(true),
                )
                .arg(
                    Arg::new("files")
                        .help("PDF files to upload")
                        .value_parser(value_parser!(PathBuf))
                        .num_args(1..)
                        .required(true),
                ),
        )
}
