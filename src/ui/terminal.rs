use is_terminal::IsTerminal;

/// What stdout can display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub is_tty: bool,
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
}

/// CI services whose logs are kept as plain text
const CI_MARKERS: [&str; 6] = [
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "JENKINS_HOME",
    "BUILDKITE",
    "TEAMCITY_VERSION",
];

pub fn detect_capabilities() -> TerminalCapabilities {
    probe(|key| std::env::var(key).ok(), std::io::stdout().is_terminal())
}

fn probe(env: impl Fn(&str) -> Option<String>, is_tty: bool) -> TerminalCapabilities {
    let dumb = env("TERM").is_some_and(|term| term.eq_ignore_ascii_case("dumb"));
    let forced_ascii = env("DOE_ASCII").is_some();

    TerminalCapabilities {
        is_tty,
        supports_color: is_tty && !dumb && env("NO_COLOR").is_none(),
        supports_unicode: !dumb && !forced_ascii && locale_allows_unicode(locale(&env)),
        is_ci: CI_MARKERS.iter().any(|key| env(key).is_some()),
    }
}

/// First non-empty locale variable, in POSIX precedence order
fn locale(env: &impl Fn(&str) -> Option<String>) -> Option<String> {
    ["LC_ALL", "LC_CTYPE", "LANG"]
        .into_iter()
        .filter_map(env)
        .find(|value| !value.is_empty())
}

/// The plain C locale cannot show the log markers; anything else
/// (or no locale at all, as on Windows) can.
fn locale_allows_unicode(locale: Option<String>) -> bool {
    match locale {
        Some(value) => !matches!(value.to_lowercase().as_str(), "c" | "posix"),
        None => true,
    }
}
