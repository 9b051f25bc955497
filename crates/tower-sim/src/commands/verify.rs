use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use tower_core::errors::{ErrorInfo, TowerError};
use tower_thy::{run_laws, to_canonical_json_bytes, LawReport, Policy, WitnessPlan};
use tracing::info;

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Witness plan (YAML, or JSON when the extension is `.json`).
    #[arg(long)]
    pub plan: Option<PathBuf>,
    /// Policy YAML; omitted fields take their defaults.
    #[arg(long)]
    pub policy: Option<PathBuf>,
    /// Abort on the first failing law.
    #[arg(long)]
    pub strict: bool,
    /// Write the report here as well as to stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

fn load_policy(path: Option<&Path>, strict: bool) -> Result<Policy, TowerError> {
    let mut policy = match path {
        Some(path) => Policy::load(path)?,
        None => Policy::default(),
    };
    policy.strict |= strict;
    Ok(policy)
}

fn build_report(args: &VerifyArgs) -> Result<LawReport, Box<dyn Error>> {
    let policy = load_policy(args.policy.as_deref(), args.strict)?;
    let plan = args.plan.as_deref().map(WitnessPlan::load).transpose()?;
    if let (Some(plan), Some(path)) = (&plan, &args.plan) {
        info!(path = %path.display(), rows = plan.len(), "loaded witness plan");
    }
    Ok(run_laws(plan.as_ref(), &policy)?)
}

/// Runs the law report and fails when any check did not hold.
pub fn run(args: &VerifyArgs) -> Result<(), Box<dyn Error>> {
    let report = build_report(args)?;
    let json = to_canonical_json_bytes(&report)?;
    if let Some(out) = &args.out {
        if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(out, &json)?;
    }
    println!("{}", String::from_utf8(json)?);

    if !report.all_passed() {
        let info = ErrorInfo::new(
            "law-violation",
            format!("{} of {} laws failed", report.failed, report.checks.len()),
        )
        .with_context("analysis_hash", report.analysis_hash.clone());
        return Err(Box::new(TowerError::Law(info)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(plan: Option<PathBuf>, policy: Option<PathBuf>) -> VerifyArgs {
        VerifyArgs {
            plan,
            policy,
            strict: false,
            out: None,
        }
    }

    #[test]
    fn registry_only_report_passes() {
        let report = build_report(&args(None, None)).unwrap();
        assert!(report.all_passed());
        assert_eq!(report.checks.len(), tower_thy::WITNESS_LAWS.len());
    }

    #[test]
    fn policy_file_is_merged_with_flag() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("policy.yaml");
        fs::write(&path, "include_witness_laws: false\n").unwrap();

        let policy = load_policy(Some(&path), true).unwrap();
        assert!(policy.strict);
        assert!(!policy.include_witness_laws);
        assert!(policy.require_nonempty);

        let err = build_report(&args(None, Some(path))).unwrap_err();
        assert!(err.to_string().contains("at least one law"));
    }

    #[test]
    fn malformed_policy_surfaces_as_serde_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("policy.yaml");
        fs::write(&path, "strict: maybe\n").unwrap();

        let err = load_policy(Some(&path), false).unwrap_err();
        assert!(matches!(err, TowerError::Serde(_)));

        let boxed = build_report(&args(None, Some(path))).unwrap_err();
        assert!(matches!(
            boxed.downcast_ref::<TowerError>(),
            Some(TowerError::Serde(_))
        ));
    }

    #[test]
    fn missing_policy_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_policy(Some(&dir.path().join("absent.yaml")), true).unwrap_err();
        assert_eq!(err.info().code, "policy-read");
    }
}
