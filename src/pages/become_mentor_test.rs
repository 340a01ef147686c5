use super::*;

#[test]
fn progress_grows_with_each_step() {
    let widths: Vec<usize> = Step::ALL.into_iter().map(progress_percent).collect();
    assert_eq!(widths, vec![20, 40, 60, 80, 100]);
}

#[test]
fn same_value_options_mirrors_each_entry() {
    let options = same_value_options(&["Go", "Rust"]);
    assert_eq!(options, vec![("Go", "Go"), ("Rust", "Rust")]);
}
