use crate::output;
use anyhow::Result;
use colored::Colorize;
use figma_mcp::config::{ENV_FILE_KEYS, ENV_TOKEN};
use figma_mcp::{Config, FigmaClient};

pub fn run(config: &Config) -> Result<()> {
    let status = FigmaClient::new(config)?.environment_status();

    if output::is_json() {
        output::print_json(&status)?;
        return Ok(());
    }

    output::print_raw(&"Figma Integration Status:".bold().to_string());
    output::print_raw(&format!("  File key:     {}", mark(status.has_file_key, "set", "missing")));
    output::print_raw(&format!("  Token:        {}", mark(status.has_token, "set", "missing")));
    output::print_raw(&format!(
        "  Integrated:   {}",
        mark(status.transport_available, "available", "unavailable (using REST fallback)")
    ));
    output::print_raw(&format!("  API base URL: {}", status.api_base_url.cyan()));

    if !status.has_file_key {
        output::print_warning(&format!(
            "{} is not set. Add it to your environment or config file.",
            ENV_FILE_KEYS
        ));
    }
    if !status.has_token {
        output::print_warning(&format!("{} is not set. REST API requests will fail.", ENV_TOKEN));
    }

    Ok(())
}

fn mark(ok: bool, yes: &str, no: &str) -> String {
    if ok {
        format!("{} {}", "✓".green(), yes)
    } else {
        format!("{} {}", "✗".red(), no)
    }
}
