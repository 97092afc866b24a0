use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{
    ChatView, ExamView, HomeView, PlannerView, PracticeView, StreakView, SubjectDetailView,
    SubjectsView,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/subjects", SubjectsView)] Subjects {},
        #[route("/subjects/:subject_id", SubjectDetailView)] SubjectDetail { subject_id: String },
        #[route("/practice/:unit_id", PracticeView)] Practice { unit_id: String },
        #[route("/exam/:unit_id", ExamView)] Exam { unit_id: String },
        #[route("/streak", StreakView)] Streak {},
        #[route("/planner", PlannerView)] Planner {},
        #[route("/ai-tutor", ChatView)] Chat {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "AP Prep" }
            ul {
                li { Link { to: Route::Home {}, "Dashboard" } }
                li { Link { to: Route::Subjects {}, "Subjects" } }
                li { Link { to: Route::Planner {}, "Study Planner" } }
                li { Link { to: Route::Streak {}, "Streak" } }
                li { Link { to: Route::Chat {}, "AI Tutor" } }
            }
        }
    }
}
