//! Courses page: course catalogue with create and delete.
//!
//! The backend has no course update endpoint. The edit dialog still opens so
//! the record can be inspected, and saving reports that updates are not
//! supported without sending anything.

use leptos::prelude::*;
use records::types::{MAX_CREDITS, MIN_CREDITS};
use records::{Course, Workflow};

use crate::components::notice_bar::NoticeBar;
use crate::components::record_dialog::RecordDialog;
use crate::state::page::{self, PageState};
use crate::util::format::{parse_credits, short_id};

#[component]
pub fn CoursesPage() -> impl IntoView {
    let state: PageState<Course> = RwSignal::new(Workflow::new());

    Effect::new(move || page::load(state));

    let on_create = move |_| state.update(Workflow::open_create);
    let on_cancel = Callback::new(move |()| state.update(Workflow::close_dialog));
    let on_submit = Callback::new(move |()| page::submit(state));

    view! {
        <div class="records-page">
            <NoticeBar notice=page::notice(state) on_dismiss=page::dismiss_notice(state)/>

            <header class="records-page__header">
                <h1>"Courses"</h1>
                <button class="btn btn--primary" on:click=on_create>
                    "+ Add Course"
                </button>
            </header>

            <table class="records-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Code"</th>
                        <th>"Name"</th>
                        <th>"Credits"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let wf = state.get();
                        if wf.loading {
                            return view! {
                                <tr>
                                    <td class="records-table__status" colspan="5">"Loading..."</td>
                                </tr>
                            }
                                .into_any();
                        }
                        if wf.items.is_empty() {
                            return view! {
                                <tr>
                                    <td class="records-table__status" colspan="5">"No courses yet"</td>
                                </tr>
                            }
                                .into_any();
                        }
                        wf.items
                            .into_iter()
                            .map(|course| view! { <CourseRow state=state course=course/> })
                            .collect::<Vec<_>>()
                            .into_any()
                    }}
                </tbody>
            </table>

            <Show when=move || state.with(|wf| wf.dialog.is_open())>
                <CourseDialog state=state on_cancel=on_cancel on_submit=on_submit/>
            </Show>
        </div>
    }
}

#[component]
fn CourseRow(state: PageState<Course>, course: Course) -> impl IntoView {
    let id = course.course_id.clone();
    let deleting = {
        let id = id.clone();
        move || state.with(|wf| wf.is_deleting(&id))
    };
    let edit_target = course.clone();

    view! {
        <tr>
            <td class="records-table__id" title=id.clone()>{short_id(&id)}</td>
            <td class="records-table__code">{course.code}</td>
            <td>{course.name}</td>
            <td>{course.credits}</td>
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
fn CourseDialog(state: PageState<Course>, on_cancel: Callback<()>, on_submit: Callback<()>) -> impl IntoView {
    let editing = state.with_untracked(|wf| wf.dialog.is_editing());
    let title = if editing { "Edit Course" } else { "Add Course" };
    let busy = Signal::derive(move || state.with(Workflow::is_submitting));
    let draft = move || state.with(|wf| wf.dialog.draft().cloned().unwrap_or_default());
    // Raw text so partial input is not reformatted while typing.
    let credits_text = RwSignal::new(state.with_untracked(|wf| {
        wf.dialog.draft().map_or_else(String::new, |d| d.credits.to_string())
    }));

    view! {
        <RecordDialog title=title.to_owned() busy=busy on_cancel=on_cancel on_submit=on_submit>
            <label class="dialog__label">
                "Code"
                <input
                    class="dialog__input"
                    type="text"
                    placeholder="CS101"
                    prop:value=move || draft().code
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|wf| wf.dialog.update_draft(|d| d.code = value));
                    }
                />
            </label>
            <label class="dialog__label">
                "Name"
                <input
                    class="dialog__input"
                    type="text"
                    prop:value=move || draft().name
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|wf| wf.dialog.update_draft(|d| d.name = value));
                    }
                />
            </label>
            <label class="dialog__label">
                "Credits"
                <input
                    class="dialog__input"
                    type="number"
                    min=MIN_CREDITS.to_string()
                    max=MAX_CREDITS.to_string()
                    prop:value=move || credits_text.get()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        let credits = parse_credits(&value);
                        credits_text.set(value);
                        state.update(|wf| wf.dialog.update_draft(|d| d.credits = credits));
                    }
                />
            </label>
        </RecordDialog>
    }
}
