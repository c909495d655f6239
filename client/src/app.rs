//! Root application component with routing and the top navigation bar.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{A, Route, Router, Routes},
};

use crate::pages::{courses::CoursesPage, grades::GradesPage, students::StudentsPage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Pages hold their own state; nothing is provided through context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/gradebook.css"/>
        <Title text="Student Records"/>

        <Router>
            <header class="app-nav">
                <span class="app-nav__brand">"Student Records"</span>
                <nav class="app-nav__links">
                    <A href="/students">"Students"</A>
                    <A href="/courses">"Courses"</A>
                    <A href="/grades">"Grades"</A>
                </nav>
            </header>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=StudentsPage/>
                    <Route path=StaticSegment("students") view=StudentsPage/>
                    <Route path=StaticSegment("courses") view=CoursesPage/>
                    <Route path=StaticSegment("grades") view=GradesPage/>
                </Routes>
            </main>
        </Router>
    }
}
