//! Grades page: filterable grade list with create, score edit, delete.
//!
//! DESIGN
//! ======
//! The grade list, students, and courses load together; the latter two fill
//! the filter/dialog selects and resolve names in the table. Filter inputs
//! only edit `Workflow::filter`; nothing is sent until Apply or Clear.
//! Once a grade exists only its score is editable.

use leptos::prelude::*;
use records::types::{MAX_SCORE, MIN_SCORE};
use records::{Grade, GradeLookups, Workflow};

use crate::components::notice_bar::NoticeBar;
use crate::components::record_dialog::RecordDialog;
use crate::state::page::{self, PageState};
use crate::util::format::{date_label, parse_score, score_label, short_id};

#[component]
pub fn GradesPage() -> impl IntoView {
    let state: PageState<Grade> = RwSignal::new(Workflow::new());

    Effect::new(move || page::load(state));

    let on_create = move |_| state.update(Workflow::open_create);
    let on_cancel = Callback::new(move |()| state.update(Workflow::close_dialog));
    let on_submit = Callback::new(move |()| page::submit(state));

    view! {
        <div class="records-page">
            <NoticeBar notice=page::notice(state) on_dismiss=page::dismiss_notice(state)/>

            <header class="records-page__header">
                <h1>"Grades"</h1>
                <button class="btn btn--primary" on:click=on_create>
                    "+ Add Grade"
                </button>
            </header>

            <FilterBar state=state/>

            <table class="records-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Student"</th>
                        <th>"Course"</th>
                        <th>"Score"</th>
                        <th>"Grade"</th>
                        <th>"Date"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let wf = state.get();
                        if wf.loading {
                            return view! {
                                <tr>
                                    <td class="records-table__status" colspan="7">"Loading..."</td>
                                </tr>
                            }
                                .into_any();
                        }
                        if wf.items.is_empty() {
                            return view! {
                                <tr>
                                    <td class="records-table__status" colspan="7">"No grades found"</td>
                                </tr>
                            }
                                .into_any();
                        }
                        let lookups = wf.lookups;
                        wf.items
                            .into_iter()
                            .map(|grade| {
                                let student = lookups.student_name(&grade.student_id);
                                let course = lookups.course_label(&grade.course_id);
                                view! { <GradeRow state=state grade=grade student=student course=course/> }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }}
                </tbody>
            </table>

            <Show when=move || state.with(|wf| wf.dialog.is_open())>
                <GradeDialog state=state on_cancel=on_cancel on_submit=on_submit/>
            </Show>
        </div>
    }
}

/// Student/course selects and score bounds. Apply and Clear trigger a load.
#[component]
fn FilterBar(state: PageState<Grade>) -> impl IntoView {
    let lookups = Signal::derive(move || state.with(|wf| wf.lookups.clone()));

    view! {
        <div class="filter-bar">
            <select
                class="filter-bar__select"
                prop:value=move || state.with(|wf| wf.filter.student_id.clone())
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|wf| wf.filter.student_id = value);
                }
            >
                <option value="">"All students"</option>
                {move || student_options(&lookups.get())}
            </select>
            <select
                class="filter-bar__select"
                prop:value=move || state.with(|wf| wf.filter.course_id.clone())
                on:change=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|wf| wf.filter.course_id = value);
                }
            >
                <option value="">"All courses"</option>
                {move || course_options(&lookups.get())}
            </select>
            <input
                class="filter-bar__input"
                type="number"
                placeholder="Min score"
                prop:value=move || state.with(|wf| wf.filter.min_score.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|wf| wf.filter.min_score = value);
                }
            />
            <input
                class="filter-bar__input"
                type="number"
                placeholder="Max score"
                prop:value=move || state.with(|wf| wf.filter.max_score.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|wf| wf.filter.max_score = value);
                }
            />
            <button class="btn btn--primary" on:click=move |_| page::apply_filter(state)>
                "Apply"
            </button>
            <button class="btn" on:click=move |_| page::clear_filter(state)>
                "Clear"
            </button>
        </div>
    }
}

fn student_options(lookups: &GradeLookups) -> Vec<AnyView> {
    lookups
        .students
        .iter()
        .map(|s| {
            let value = s.student_id.clone();
            let label = s.name.clone();
            view! { <option value=value>{label}</option> }.into_any()
        })
        .collect()
}

fn course_options(lookups: &GradeLookups) -> Vec<AnyView> {
    lookups
        .courses
        .iter()
        .map(|c| {
            let value = c.course_id.clone();
            let label = format!("{} ({})", c.name, c.code);
            view! { <option value=value>{label}</option> }.into_any()
        })
        .collect()
}

#[component]
fn GradeRow(state: PageState<Grade>, grade: Grade, student: String, course: String) -> impl IntoView {
    let id = grade.grade_id.clone();
    let deleting = {
        let id = id.clone();
        move || state.with(|wf| wf.is_deleting(&id))
    };
    let score = score_label(grade.score);
    let date = date_label(&grade.date).to_owned();
    let edit_target = grade.clone();

    view! {
        <tr>
            <td class="records-table__id" title=id.clone()>{short_id(&id)}</td>
            <td>{student}</td>
            <td>{course}</td>
            <td>{score}</td>
            <td class="records-table__letter">{grade.letter_grade}</td>
            <td>{date}</td>
            <td class="records-table__actions">
                <button class="btn btn--small" on:click=move |_| state.update(|wf| wf.open_edit(&edit_target))>
                    "Edit"
                </button>
                <button
                    class="btn btn--small btn--danger"
                    disabled=deleting
                    on:click=move |_| page::delete(state, id.clone())
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

#[component]
fn GradeDialog(state: PageState<Grade>, on_cancel: Callback<()>, on_submit: Callback<()>) -> impl IntoView {
    let editing = state.with_untracked(|wf| wf.dialog.is_editing());
    let title = if editing { "Edit Grade" } else { "Add Grade" };
    let busy = Signal::derive(move || state.with(Workflow::is_submitting));
    let lookups = Signal::derive(move || state.with(|wf| wf.lookups.clone()));
    let draft = move || state.with(|wf| wf.dialog.draft().cloned().unwrap_or_default());
    // Raw text so partial input like "8." is not reformatted while typing.
    let score_text = RwSignal::new(state.with_untracked(|wf| {
        wf.dialog.draft().map_or_else(String::new, |d| score_label(d.score))
    }));

    view! {
        <RecordDialog title=title.to_owned() busy=busy on_cancel=on_cancel on_submit=on_submit>
            <label class="dialog__label">
                "Student"
                <select
                    class="dialog__input"
                    disabled=editing
                    prop:value=move || draft().student_id
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|wf| wf.dialog.update_draft(|d| d.student_id = value));
                    }
                >
                    <option value="">"Select a student"</option>
                    {move || student_options(&lookups.get())}
                </select>
            </label>
            <label class="dialog__label">
                "Course"
                <select
                    class="dialog__input"
                    disabled=editing
                    prop:value=move || draft().course_id
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|wf| wf.dialog.update_draft(|d| d.course_id = value));
                    }
                >
                    <option value="">"Select a course"</option>
                    {move || course_options(&lookups.get())}
                </select>
            </label>
            <label class="dialog__label">
                "Score"
                <input
                    class="dialog__input"
                    type="number"
                    step="0.1"
                    min=MIN_SCORE.to_string()
                    max=MAX_SCORE.to_string()
                    prop:value=move || score_text.get()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        let score = parse_score(&value);
                        score_text.set(value);
                        state.update(|wf| wf.dialog.update_draft(|d| d.score = score));
                    }
                />
            </label>
        </RecordDialog>
    }
}
