/// Git commit recorded by `build.rs`, or `unknown` outside a checkout.
pub const fn git_commit_hash() -> &'static str {
    match option_env!("STOCKROOM_GIT_SHA") {
        Some(value) if !value.is_empty() => value,
        _ => "unknown",
    }
}
