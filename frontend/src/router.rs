use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    components::guard::RequireSession,
    pages::{
        auth::AuthPage, calendar::CalendarPage, dashboard::DashboardPage, manager::ManagerPage,
        requests::RequestsPage,
    },
    state::session::SessionProvider,
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/dashboard",
    "/dashboard/calendar",
    "/dashboard/requests",
    "/dashboard/manager",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    "/dashboard",
    "/dashboard/calendar",
    "/dashboard/requests",
    "/dashboard/manager",
];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(crate::api::ApiClient::new());
    view! {
        <Title text="LeaveHub" />
        <SessionProvider>
            <Router>
                <Routes>
                    <Route path="/" view=AuthPage/>
                    <Route path="/dashboard" view=ProtectedDashboard/>
                    <Route path="/dashboard/calendar" view=ProtectedCalendar/>
                    <Route path="/dashboard/requests" view=ProtectedRequests/>
                    <Route path="/dashboard/manager" view=ProtectedManager/>
                </Routes>
            </Router>
        </SessionProvider>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireSession><DashboardPage/></RequireSession> }
}

#[component]
fn ProtectedCalendar() -> impl IntoView {
    view! { <RequireSession><CalendarPage/></RequireSession> }
}

#[component]
fn ProtectedRequests() -> impl IntoView {
    view! { <RequireSession><RequestsPage/></RequireSession> }
}

#[component]
fn ProtectedManager() -> impl IntoView {
    view! { <RequireSession><ManagerPage/></RequireSession> }
}
