use std::path::Path;

use minic::utils::test::{load_cases, run};

fn run_test_cases(escape_list: &[&str], case_path: &str, stop_at_fault: bool) {
    let path = Path::new(case_path);
    let infos = load_cases(path).unwrap();

    let mut total: usize = 0;
    let mut failures = Vec::new();
    for info in infos.iter().filter(|x| !escape_list.iter().any(|e| *e == x.name)) {
        total += 1;
        match run(path, info) {
            Ok(()) => println!("{} passed!", info.name),
            Err(e) if stop_at_fault => panic!("{e}"),
            Err(e) => failures.push(e),
        }
    }

    assert!(total > 0, "no test cases found in {case_path}");
    assert!(
        failures.is_empty(),
        "{} of {total} cases failed:\n{}",
        failures.len(),
        failures.join("\n")
    );
}

#[test]
fn programs() {
    let escape_list: [&str; 0] = [];
    let case_path = "testcases/programs";

    run_test_cases(&escape_list, case_path, false);
}
