use clap::{
    Arg, ArgAction, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

fn mysql_args() -> [Arg; 6] {
    [
        Arg::new("mysql-host")
            .env("DB_HOST")
            .help("MySQL host name")
            .long("mysql-host")
            .value_name("HOST"),
        Arg::new("mysql-user")
            .env("DB_USER")
            .help("MySQL user name")
            .long("mysql-user")
            .value_name("USER"),
        Arg::new("mysql-password")
            .env("DB_PASS")
            .help("MySQL password")
            .hide_env_values(true)
            .long("mysql-password")
            .value_name("PASSWORD"),
        Arg::new("mysql-port")
            .default_value("3306")
            .env("DB_PORT")
            .help("MySQL port")
            .long("mysql-port")
            .value_name("PORT")
            .value_parser(clap::value_parser!(u16)),
        Arg::new("mysql-database")
            .env("DB_NAME")
            .help("MySQL database to select (default: none)")
            .long("mysql-database")
            .value_name("NAME"),
        Arg::new("mysql-ssl-ca")
            .env("DB_SSL_CA")
            .help("Path to CA certificate file used to verify the MySQL server")
            .long("mysql-ssl-ca")
            .value_name("PATH"),
    ]
}

fn postgres_args() -> [Arg; 6] {
    [
        Arg::new("pg-host")
            .env("DB_HOST_PG")
            .help("PostgreSQL host name")
            .long("pg-host")
            .value_name("HOST"),
        Arg::new("pg-user")
            .env("DB_USER_PG")
            .help("PostgreSQL user name")
            .long("pg-user")
            .value_name("USER"),
        Arg::new("pg-password")
            .env("DB_PASS_PG")
            .help("PostgreSQL password")
            .hide_env_values(true)
            .long("pg-password")
            .value_name("PASSWORD"),
        Arg::new("pg-port")
            .default_value("5432")
            .env("DB_PORT_PG")
            .help("PostgreSQL port")
            .long("pg-port")
            .value_name("PORT")
            .value_parser(clap::value_parser!(u16)),
        Arg::new("pg-database")
            .default_value("postgres")
            .env("DB_NAME_PG")
            .help("PostgreSQL database to connect to")
            .long("pg-database")
            .value_name("NAME"),
        Arg::new("pg-ssl-ca")
            .env("DB_SSL_CA_PG")
            .help("Path to CA certificate file used to verify the PostgreSQL server")
            .long("pg-ssl-ca")
            .value_name("PATH"),
    ]
}

/// Pure clap command definitions with zero business logic
#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new(env!("CARGO_PKG_NAME"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new("listen")
                .env("LISTEN")
                .help("IP address to bind to (default: [::]:port, accepts both IPv6 and IPv4)")
                .long("listen")
                .long_help(
                    "IP address to bind to:\n\
                    Not specified (default) binds to [::]:port which accepts both IPv6 and IPv4 connections.\n\
                    Falls back to 0.0.0.0:port if IPv6 is unavailable.\n\n\
                    Specific IPv4 examples: '0.0.0.0', '127.0.0.1'\n\
                    Specific IPv6: '::', '::1'"
                )
                .short('l')
                .value_name("IP"),
        )
        .arg(
            Arg::new("port")
                .default_value("3000")
                .env("PORT")
                .help("listening port for the status page")
                .long("port")
                .short('p')
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new("verbose")
                .action(ArgAction::Count)
                .help("Increase log verbosity (-v debug, -vv trace)")
                .long("verbose")
                .short('v'),
        )
        .args(mysql_args())
        .args(postgres_args())
}
