use anyhow::Context;

fn token_from_env() -> Option<String> {
    for key in ["GH_TOKEN", "GITHUB_TOKEN"] {
        if let Ok(token) = std::env::var(key) {
            let token = token.trim();
            if !token.is_empty() {
                return Some(token.to_string());
            }
        }
    }

    None
}

fn token_from_gh() -> anyhow::Result<Option<String>> {
    let output = match std::process::Command::new("gh")
        .args(["auth", "token", "--secure-storage", "--hostname", "github.com"])
        .output()
    {
        Ok(output) => output,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e).context("failed to execute `gh auth token`"),
    };

    if !output.status.success() {
        return Ok(None);
    }
    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    Ok(if token.is_empty() { None } else { Some(token) })
}

pub(super) fn fetch_token() -> anyhow::Result<String> {
    if let Some(token) = token_from_env() {
        return Ok(token);
    }
    if let Some(token) = token_from_gh()? {
        return Ok(token);
    }

    anyhow::bail!("GitHub token not found. Please set `GH_TOKEN` or log in with `gh auth login`.");
}
