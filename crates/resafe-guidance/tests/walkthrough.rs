//! Walkthrough of the Step 1 guidance flow, end to end.

use resafe_guidance::{content, GuidanceNavigator};

#[test]
fn step_one_drill_down_and_back_out() {
    let mut nav = GuidanceNavigator::new();

    nav.open_key("Step 1");
    assert_eq!(nav.current().unwrap().title, "Step 1");
    assert_eq!(nav.depth(), 0);

    assert!(nav.drill_into("1.1 - Define General Concerns"));
    assert_eq!(nav.current().unwrap().title, "1.1 - Define General Concerns");
    assert_eq!(nav.depth(), 1);

    // Leaf content inside 1.1: drilling is a no-op.
    assert!(!nav.drill_into("Identify Key Concepts"));
    assert_eq!(nav.depth(), 1);

    // One back per stack entry, then the view closes.
    assert_eq!(nav.back().unwrap().title, "Step 1");
    assert_eq!(nav.depth(), 0);
    assert!(nav.back().is_none());
    assert!(!nav.is_open());
}

#[test]
fn full_depth_walk_decrements_stack_per_back() {
    let mut nav = GuidanceNavigator::new();
    nav.open_key("Step 1");
    nav.drill_into("1.2 - Identify Accidents and Hazards");
    assert_eq!(nav.depth(), 1);

    let depths_walked: Vec<usize> = std::iter::from_fn(|| {
        nav.back();
        nav.is_open().then(|| nav.depth())
    })
    .collect();
    assert_eq!(depths_walked, [0]);
}

#[test]
fn backdrop_dismiss_bypasses_the_stack() {
    let mut nav = GuidanceNavigator::new();
    nav.open_key("Step 6");
    nav.drill_into("6.3 - Plan Mitigations (Optional)");
    assert_eq!(nav.current().unwrap().title, "6.3 - Plan Mitigations");
    assert_eq!(nav.depth(), 1);

    nav.close_all();
    assert!(!nav.is_open());
    assert_eq!(nav.depth(), 0);
}

#[test]
fn every_step_substep_entry_opens_or_is_leaf() {
    // Drilling any authored entry either opens a detail (pushing exactly
    // one stack frame) or leaves the navigator untouched.
    for step in content::steps() {
        let mut nav = GuidanceNavigator::new();
        nav.open(step);
        for substep in &step.substeps {
            let before = nav.depth();
            let drilled = nav.drill_into(substep);
            if drilled {
                assert_eq!(nav.depth(), before + 1);
                nav.back();
            } else {
                assert_eq!(nav.depth(), before);
            }
        }
    }
}
