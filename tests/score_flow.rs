// End-to-end scoring flows driven through temporary assessment files.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn ecoscore() -> Command {
    Command::cargo_bin("ecoscore").expect("binary should exist")
}

fn write_assessment(dir: &TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("assessment.toml");
    fs::write(&path, body).expect("assessment should write");
    path
}

const FULLY_MATURE: &str = r#"
[assessment]
title = "Fully mature ecosystem"

[dimensions.enabling_environment]
mode = "manual"
answers = [true, true, true, true]

[dimensions.ecosystem_infrastructure]
mode = "manual"
answers = [true, true, true, true]

[dimensions.finance_providers]
mode = "manual"
answers = [true, true, true, true]

[dimensions.finance_seekers]
mode = "manual"
answers = [true, true, true, true]
"#;

#[test]
fn manual_scoring_all_true_yields_high_tier() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = write_assessment(&dir, FULLY_MATURE);

    ecoscore()
        .arg("score")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Enabling Environment: 4.00/4"))
        .stdout(predicate::str::contains(
            "Combined score: 4.00/4 (tier: High)",
        ));
}

#[test]
fn manual_scoring_all_false_yields_low_tier() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = write_assessment(
        &dir,
        r#"
[assessment]
title = "No maturity"

[dimensions.enabling_environment]
mode = "manual"
answers = [false, false, false, false]

[dimensions.ecosystem_infrastructure]
mode = "manual"
answers = [false, false, false, false]

[dimensions.finance_providers]
mode = "manual"
answers = [false, false, false, false]

[dimensions.finance_seekers]
mode = "manual"
answers = [false, false, false, false]
"#,
    );

    ecoscore()
        .arg("score")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Combined score: 0.00/4 (tier: Low)",
        ));
}

#[test]
fn omitted_dimension_defaults_to_zero_with_warning() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = write_assessment(
        &dir,
        r#"
[assessment]
title = "Partial"

[dimensions.enabling_environment]
mode = "manual"
answers = [true, true, true, false]

[dimensions.ecosystem_infrastructure]
mode = "manual"
answers = [true, true, false, false]

[dimensions.finance_providers]
mode = "manual"
answers = [true, true, true, true]
"#,
    );

    ecoscore()
        .arg("score")
        .arg(&path)
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Combined score: 2.25/4 (tier: Medium)",
        ))
        .stdout(predicate::str::contains(
            "Finance Seekers: unavailable (no evidence supplied)",
        ))
        .stderr(predicate::str::contains("no evidence supplied"));
}

#[test]
fn csv_format_emits_score_table() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = write_assessment(&dir, FULLY_MATURE);

    ecoscore()
        .args(["score", path.to_str().unwrap(), "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dimension,score,status"))
        .stdout(predicate::str::contains("Finance Seekers,4.00,scored"))
        .stdout(predicate::str::contains("Combined,4.00,High"));
}

#[test]
fn json_format_emits_tagged_outcomes() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = write_assessment(&dir, FULLY_MATURE);

    ecoscore()
        .args(["score", path.to_str().unwrap(), "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"scored\""))
        .stdout(predicate::str::contains("\"tier\": \"high\""));
}

#[test]
fn report_can_be_written_to_a_file() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = write_assessment(&dir, FULLY_MATURE);
    let out = dir.path().join("report.md");

    ecoscore()
        .arg("score")
        .arg(&path)
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let rendered = fs::read_to_string(&out).expect("report should exist");
    assert!(rendered.contains("Fully mature ecosystem"));
}

#[test]
fn narrative_scoring_without_credential_fails_at_startup() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = write_assessment(
        &dir,
        r#"
[assessment]
title = "Narrative"

[dimensions.enabling_environment]
mode = "narrative"
narrative = "A national strategy was adopted in 2024."
"#,
    );

    ecoscore()
        .arg("score")
        .arg(&path)
        .env_remove("OPENAI_API_KEY")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("oracle credential missing"));
}

#[test]
fn recommend_without_credential_fails_even_for_manual_evidence() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = write_assessment(&dir, FULLY_MATURE);

    ecoscore()
        .arg("recommend")
        .arg(&path)
        .env_remove("OPENAI_API_KEY")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("oracle credential missing"));
}

#[test]
fn config_can_rename_the_credential_variable() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = write_assessment(
        &dir,
        r#"
[assessment]
title = "Narrative"

[dimensions.finance_providers]
mode = "narrative"
narrative = "Banks are piloting green credit lines."
"#,
    );
    fs::write(
        dir.path().join("ecoscore.toml"),
        r#"
[oracle]
api_key_env = "ECOSCORE_ORACLE_KEY"
"#,
    )
    .expect("config should write");

    ecoscore()
        .arg("score")
        .arg(&path)
        .env_remove("ECOSCORE_ORACLE_KEY")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("ECOSCORE_ORACLE_KEY"));
}

#[test]
fn invalid_config_is_a_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = write_assessment(&dir, FULLY_MATURE);
    fs::write(
        dir.path().join("ecoscore.toml"),
        r#"
[oracle]
timeout_secs = 0
"#,
    )
    .expect("config should write");

    ecoscore()
        .arg("score")
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("timeout_secs"));
}

#[test]
fn answer_count_mismatch_is_rejected() {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = write_assessment(
        &dir,
        r#"
[assessment]
title = "Mismatch"

[dimensions.finance_seekers]
mode = "manual"
answers = [true, false, true]
"#,
    );

    ecoscore()
        .arg("score")
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("expected 4 answers"));
}

#[test]
fn unsupported_document_degrades_but_does_not_require_oracle_access() {
    // The skipped-document warning is raised at intake, before any oracle
    // call, so the run still fails on the missing credential rather than
    // on the document.
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(dir.path().join("evidence.docx"), b"PK").expect("document should write");
    let path = write_assessment(
        &dir,
        r#"
[assessment]
title = "Upload"

[dimensions.finance_providers]
mode = "narrative"
narrative = "Narrative text."
documents = ["evidence.docx"]
"#,
    );

    ecoscore()
        .arg("score")
        .arg(&path)
        .env_remove("OPENAI_API_KEY")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("oracle credential missing"));
}
