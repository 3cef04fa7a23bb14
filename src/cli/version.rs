//! `--version` and `--help` output.

/// The current version of folio, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_text() -> String {
    format!("folio {}", VERSION)
}

pub fn help_text() -> String {
    format!(
        "{}
A terminal portfolio and blog.

USAGE:
    folio [OPTIONS] [ROUTE]

ARGS:
    [ROUTE]    Page to start on: /, /#projects, /#work, /#about, /#contact,
               /blog, /blog?tag=<tag>, /blog/<slug>

OPTIONS:
    -h, --help       Print help
    -V, --version    Print version

ENVIRONMENT:
    FOLIO_DATA_DIR          Settings, log and resume directory (default ~/.folio)
    FOLIO_EFFECT_DELAY_MS   Delay before navigation and external opens (default 500)
    FOLIO_NO_PERSIST        Do not save the theme
    FOLIO_LOG               Log filter when RUST_LOG is unset (default info)
    FOLIO_COLOR_SCHEME      Preferred theme when none is saved (light|dark)",
        version_text()
    )
}
