use clap::builder::EnumValueParser;
use clap::{Arg, ArgAction, Command};

use crate::cli::{Configuration, DEFAULT_DIRECTORY, DEFAULT_FILE_NAME};
use crate::template::TemplateKind;

fn flag(id: &'static str, short: char, help: &'static str) -> Arg {
    Arg::new(id)
        .short(short)
        .long(id)
        .action(ArgAction::SetTrue)
        .help(help)
        .help_heading("Flags")
}

fn option(id: &'static str, short: char, value_name: &'static str) -> Arg {
    Arg::new(id)
        .short(short)
        .long(id)
        .value_name(value_name)
        .action(ArgAction::Set)
        .help_heading("Options")
}

fn template_listing() -> String {
    let mut listing = String::from("Available template types:");
    for kind in TemplateKind::ALL {
        listing.push_str(&format!("\n  {}, {}", kind.long_name(), kind.short_name()));
    }
    listing
}

/// Describes the command line for help rendering only; parsing is done by
/// [`crate::cli::Invocation::parse_from`].
pub fn command() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about("Create a C++ source file from a built-in template")
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(flag("help", 'h', "Print this help message"))
        .arg(flag("quiet", 'q', "Suppress all output"))
        .arg(flag("error", 'e', "Only print error messages"))
        .arg(flag("warning", 'w', "Only print error and warning messages"))
        .arg(flag("normal", 'n', "Print error, warning and info messages (default)"))
        .arg(flag("debug", 'b', "Print debug messages as well"))
        .arg(flag("development", 'v', "Print development messages as well"))
        .arg(
            option("file", 'f', "FILE_NAME")
                .default_value(DEFAULT_FILE_NAME)
                .help("Set file name"),
        )
        .arg(
            option("directory", 'd', "DIRECTORY_NAME")
                .default_value(DEFAULT_DIRECTORY)
                .help("Set destination directory"),
        )
        .arg(
            option("template-type", 't', "TEMPLATE_TYPE")
                .value_parser(EnumValueParser::<TemplateKind>::new())
                .default_value(TemplateKind::default().long_name())
                .help("Set template type"),
        )
        .after_help(template_listing())
}

pub fn help_text() -> String {
    command().render_help().to_string()
}

pub fn print_help() {
    println!("[INFO] Help Message:");
    println!("{}", help_text());
}

/// Field dump shown at the debug tier.
pub fn describe(config: &Configuration) -> String {
    format!(
        "CLI:\n  verbosity: {}\n  file_name: {}\n  destination_directory_name: {}\n  template_type: {}",
        config.verbosity.name(),
        config.file_name.to_string_lossy(),
        config.destination_directory.to_string_lossy(),
        config.template_kind.long_name()
    )
}
