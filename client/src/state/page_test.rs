use super::*;
use records::Student;

#[test]
fn drivers_on_unmounted_page_change_nothing() {
    let state: PageState<Student> = RwSignal::new(Workflow::new());
    state.dispose();

    load(state);
    apply_filter(state);
    submit(state);
    assert!(state.try_get_untracked().is_none());
}

#[test]
fn load_on_mounted_page_marks_loading() {
    let state: PageState<Student> = RwSignal::new(Workflow::new());
    load(state);
    assert!(state.with_untracked(|wf| wf.loading));
}
