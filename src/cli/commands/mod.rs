pub mod logging;
pub mod products;

use clap::{
    Arg, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

pub const ARG_API_URL: &str = "api-url";
pub const ARG_USER: &str = "user";
pub const ARG_TOKEN: &str = "token";
pub const ARG_TIMEOUT: &str = "timeout";
pub const ARG_USERNAME: &str = "username";
pub const ARG_PASSWORD: &str = "password";

pub const CMD_LOGIN: &str = "login";
pub const CMD_DASHBOARD: &str = "dashboard";
pub const CMD_ALERTS: &str = "alerts";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("stockroom")
        .about("Stock management client")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new(ARG_API_URL)
                .long("api-url")
                .help("Base URL of the stock API")
                .default_value("http://localhost:8000")
                .env("STOCKROOM_API_URL")
                .global(true),
        )
        .arg(
            Arg::new(ARG_USER)
                .long("user")
                .help("Identity of an existing session")
                .env("STOCKROOM_USER")
                .global(true),
        )
        .arg(
            Arg::new(ARG_TOKEN)
                .long("token")
                .help("Bearer token of an existing session")
                .env("STOCKROOM_TOKEN")
                .hide_env_values(true)
                .global(true),
        )
        .arg(
            Arg::new(ARG_TIMEOUT)
                .long("timeout")
                .help("Request timeout in milliseconds")
                .default_value("10000")
                .env("STOCKROOM_TIMEOUT_MS")
                .global(true)
                .value_parser(clap::value_parser!(u32).range(1..)),
        )
        .subcommand(
            Command::new(CMD_LOGIN)
                .about("Sign in and print the session to export")
                .arg(
                    Arg::new(ARG_USERNAME)
                        .short('u')
                        .long("username")
                        .help("Account name")
                        .env("STOCKROOM_USERNAME")
                        .required(true),
                )
                .arg(
                    Arg::new(ARG_PASSWORD)
                        .short('p')
                        .long("password")
                        .help("Account password")
                        .env("STOCKROOM_PASSWORD")
                        .hide_env_values(true)
                        .required(true),
                ),
        )
        .subcommand(products::subcommand())
        .subcommand(Command::new(CMD_DASHBOARD).about("Show stock KPIs"))
        .subcommand(
            Command::new(CMD_ALERTS).about("List products at or below their alert minimum"),
        );

    logging::with_args(command)
}
