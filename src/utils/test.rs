use std::{fs, path::Path};

use crate::{PipelineOrder, compile, error::ErrorKind};

/// One entry of a fixture suite's `global.json`.
#[derive(Debug, serde::Deserialize, serde::Serialize)]
pub struct TestCaseInfo {
    pub name: String,
    pub compileexitcode: i32,
    /// Expected error category when `compileexitcode` is non-zero.
    #[serde(default)]
    pub error: Option<ErrorKind>,
    /// File holding the expected TAC text, relative to the suite directory.
    #[serde(default)]
    pub tac: Option<String>,
}

pub fn load_cases(case_path: &Path) -> Result<Vec<TestCaseInfo>, String> {
    let infos_path = case_path.join("global.json");
    let text = fs::read_to_string(&infos_path)
        .map_err(|e| format!("cannot read {}: {e}", infos_path.display()))?;
    serde_json::from_str(&text).map_err(|e| format!("bad {}: {e}", infos_path.display()))
}

/// Compiles `<case_path>/<name>.mc` and checks the outcome against `info`.
pub fn run(case_path: &Path, info: &TestCaseInfo) -> Result<(), String> {
    let src_path = case_path.join(format!("{}.mc", info.name));
    let src = fs::read_to_string(&src_path)
        .map_err(|e| format!("cannot read {}: {e}", src_path.display()))?;

    let should_pass = info.compileexitcode == 0;
    match (should_pass, compile(&src, PipelineOrder::default())) {
        (true, Ok(compilation)) => match &info.tac {
            Some(tac_file) => {
                let expected = fs::read_to_string(case_path.join(tac_file))
                    .map_err(|e| format!("cannot read {tac_file}: {e}"))?;
                let actual = compilation.tac.to_string();
                if actual.trim_end() == expected.trim_end() {
                    Ok(())
                } else {
                    Err(format!(
                        "{}: TAC differs\n--- expected\n{expected}\n--- actual\n{actual}",
                        info.name
                    ))
                }
            }
            None => Ok(()),
        },
        (false, Err(err)) => match info.error {
            Some(kind) if kind != err.kind() => Err(format!(
                "{}: expected {kind} error, got {}: {err}",
                info.name,
                err.kind()
            )),
            _ => Ok(()),
        },
        (true, Err(err)) => Err(format!("{} check failed, expect pass!\n{err}", info.name)),
        (false, Ok(_)) => Err(format!("{} check passed, expect fail!", info.name)),
    }
}
