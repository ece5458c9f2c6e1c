use std::{env, env::VarError};

/// There's no real CLI for the server, so just do quick 'n dirty
pub fn handle_command_line_args() -> bool {
    let has_cli_args = env::args().count() > 1;
    if has_cli_args {
        // We don't expect any CLI args, so always print the help
        display_readme();
        display_envs();
    }
    has_cli_args
}

fn display_readme() {
    const README: &str = include_str!("./cli-help.txt");
    println!("\n{README}\n");
}

fn display_envs() {
    // SFS_STRIPE_SECRET_KEY and SK_TEST_KEY are deliberately absent from this list
    const DISPLAY_ENVS: [&str; 9] = [
        "RUST_LOG",
        "SFS_HOST",
        "SFS_PORT",
        "SFS_CURRENCY",
        "SFS_CATALOG_CATEGORY",
        "SFS_PLACEHOLDER_IMAGE",
        "SFS_PRICE_LOOKUP_CONCURRENCY",
        "SFS_STRIPE_API_URL",
        "SFS_STRIPE_TIMEOUT_SECS",
    ];

    println!("Current environment values (EXCLUDING variables that contain secrets):");
    DISPLAY_ENVS.iter().for_each(|&name| {
        let val = match env::var(name) {
            Ok(s) => s,
            Err(VarError::NotPresent) => "Not set".into(),
            Err(VarError::NotUnicode(s)) => format!("Invalid value: {}", s.to_string_lossy()),
        };
        println!("  {name:<35} {val:<15}");
    });
    let key_status = match env::var("SFS_STRIPE_SECRET_KEY").or_else(|_| env::var("SK_TEST_KEY")) {
        Ok(s) if !s.is_empty() => "Set",
        _ => "Not set",
    };
    println!("  {:<35} {key_status:<15}", "SFS_STRIPE_SECRET_KEY");
}
