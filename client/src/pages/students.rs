//! Students page: table of registered students with create, edit, delete.

use leptos::prelude::*;
use records::{Student, Workflow};

use crate::components::notice_bar::NoticeBar;
use crate::components::record_dialog::RecordDialog;
use crate::state::page::{self, PageState};
use crate::util::format::{date_label, gpa_label, short_id};

#[component]
pub fn StudentsPage() -> impl IntoView {
    let state: PageState<Student> = RwSignal::new(Workflow::new());

    // Load once on mount.
    Effect::new(move || page::load(state));

    let on_create = move |_| state.update(Workflow::open_create);
    let on_cancel = Callback::new(move |()| state.update(Workflow::close_dialog));
    let on_submit = Callback::new(move |()| page::submit(state));

    view! {
        <div class="records-page">
            <NoticeBar notice=page::notice(state) on_dismiss=page::dismiss_notice(state)/>

            <header class="records-page__header">
                <h1>"Students"</h1>
                <button class="btn btn--primary" on:click=on_create>
                    "+ Add Student"
                </button>
            </header>

            <table class="records-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"GPA"</th>
                        <th>"Registered"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let wf = state.get();
                        if wf.loading {
                            return view! {
                                <tr>
                                    <td class="records-table__status" colspan="6">"Loading..."</td>
                                </tr>
                            }
                                .into_any();
                        }
                        if wf.items.is_empty() {
                            return view! {
                                <tr>
                                    <td class="records-table__status" colspan="6">"No students yet"</td>
                                </tr>
                            }
                                .into_any();
                        }
                        wf.items
                            .into_iter()
                            .map(|student| view! { <StudentRow state=state student=student/> })
                            .collect::<Vec<_>>()
                            .into_any()
                    }}
                </tbody>
            </table>

            <Show when=move || state.with(|wf| wf.dialog.is_open())>
                <StudentDialog state=state on_cancel=on_cancel on_submit=on_submit/>
            </Show>
        </div>
    }
}

#[component]
fn StudentRow(state: PageState<Student>, student: Student) -> impl IntoView {
    let id = student.student_id.clone();
    let deleting = {
        let id = id.clone();
        move || state.with(|wf| wf.is_deleting(&id))
    };
    let gpa = gpa_label(student.gpa);
    let registered = date_label(&student.created_at).to_owned();
    let edit_target = student.clone();

    view! {
        <tr>
            <td class="records-table__id" title=id.clone()>{short_id(&id)}</td>
            <td>{student.name}</td>
            <td>{student.email}</td>
            <td>{gpa}</td>
            <td>{registered}</td>
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
fn StudentDialog(state: PageState<Student>, on_cancel: Callback<()>, on_submit: Callback<()>) -> impl IntoView {
    let title = Signal::derive(move || {
        if state.with(|wf| wf.dialog.is_editing()) {
            "Edit Student".to_owned()
        } else {
            "Add Student".to_owned()
        }
    });
    let busy = Signal::derive(move || state.with(Workflow::is_submitting));
    let draft = move || state.with(|wf| wf.dialog.draft().cloned().unwrap_or_default());

    view! {
        <RecordDialog title=title busy=busy on_cancel=on_cancel on_submit=on_submit>
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
                "Email"
                <input
                    class="dialog__input"
                    type="email"
                    prop:value=move || draft().email
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|wf| wf.dialog.update_draft(|d| d.email = value));
                    }
                />
            </label>
        </RecordDialog>
    }
}
