use anyhow::Context;
use serde::Deserialize;

/// The domain crate stays synchronous and silent: no runtime, no logging, no env.
const DOMAIN_CRATE: &str = "clubroster-domain";
const DOMAIN_FORBIDDEN: &[&str] = &[
    "clubroster-engine",
    "tokio",
    "tracing",
    "tracing-subscriber",
    "dotenvy",
    "anyhow",
];

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

#[derive(Debug, Deserialize)]
struct Metadata {
    packages: Vec<Package>,
}

#[derive(Debug, Deserialize)]
struct Package {
    name: String,
    dependencies: Vec<Dependency>,
}

#[derive(Debug, Deserialize)]
struct Dependency {
    name: String,
    /// `null` for normal dependencies, `"dev"` or `"build"` otherwise.
    kind: Option<String>,
}

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;
    let violations = domain_violations(&metadata)?;
    if !violations.is_empty() {
        anyhow::bail!(
            "{DOMAIN_CRATE} must not depend on: {}",
            violations.join(", ")
        );
    }

    println!("arch-check: ok");
    Ok(())
}

/// Forbidden non-dev dependencies of the domain crate.
fn domain_violations(metadata: &Metadata) -> anyhow::Result<Vec<String>> {
    let domain = metadata
        .packages
        .iter()
        .find(|p| p.name == DOMAIN_CRATE)
        .with_context(|| format!("{DOMAIN_CRATE} not found in workspace"))?;

    Ok(domain
        .dependencies
        .iter()
        .filter(|d| d.kind.as_deref() != Some("dev"))
        .filter(|d| DOMAIN_FORBIDDEN.contains(&d.name.as_str()))
        .map(|d| d.name.clone())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(json: &str) -> Metadata {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn clean_domain_passes() {
        let m = metadata(
            r#"{"packages":[{"name":"clubroster-domain","dependencies":[
                {"name":"chrono","kind":null},
                {"name":"tokio","kind":"dev"}
            ]}]}"#,
        );
        assert!(domain_violations(&m).unwrap().is_empty());
    }

    #[test]
    fn runtime_dependency_is_reported() {
        let m = metadata(
            r#"{"packages":[{"name":"clubroster-domain","dependencies":[
                {"name":"tracing","kind":null},
                {"name":"serde","kind":null}
            ]}]}"#,
        );
        assert_eq!(domain_violations(&m).unwrap(), vec!["tracing"]);
    }

    #[test]
    fn missing_domain_crate_is_an_error() {
        let m = metadata(r#"{"packages":[]}"#);
        assert!(domain_violations(&m).is_err());
    }
}
