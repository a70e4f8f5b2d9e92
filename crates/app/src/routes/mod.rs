pub mod announcements;
pub mod classes;
pub mod dashboard;
pub mod employees;
pub mod expenses;
pub mod guardians;
pub mod home;
pub mod login;
pub mod not_found;
pub mod payments;
pub mod students;
pub mod teachers;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBriefcase, LdGraduationCap, LdLayoutDashboard, LdMegaphone, LdMenu, LdReceipt, LdSchool,
    LdUsers, LdWallet,
};
use dioxus_free_icons::Icon;
use shared_ui::locale::set_lang;
use shared_ui::{
    DropdownMenu, DropdownMenuContent, DropdownMenuItem, DropdownMenuTrigger, Sidebar,
    SidebarContent, SidebarFooter, SidebarGroup, SidebarGroupLabel, SidebarHeader, SidebarInset,
    SidebarMenu, SidebarMenuButton, SidebarMenuItem, SidebarProvider, SidebarSeparator,
    SidebarTrigger,
};

use crate::auth::{use_auth, use_sidebar_visibility};
use crate::i18n::{tr, use_lang, LocaleState};

use announcements::AnnouncementsPage as Announcements;
use classes::ClassesPage as Classes;
use dashboard::Dashboard;
use employees::EmployeesPage as Employees;
use expenses::ExpensesPage as Expenses;
use guardians::GuardiansPage as Guardians;
use home::Home;
use login::Login;
use not_found::NotFound;
use payments::PaymentsPage as Payments;
use students::StudentsPage as Students;
use teachers::TeachersPage as Teachers;

/// Application routes. The homepage and login are public; everything
/// under the guard requires a session (the server middleware enforces the
/// same split for full page loads).
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/login?:redirect")]
    Login { redirect: Option<String> },
    #[layout(AuthGuard)]
    #[layout(AppLayout)]
    #[route("/dashboard")]
    Dashboard {},
    #[route("/students")]
    Students {},
    #[route("/teachers")]
    Teachers {},
    #[route("/classes")]
    Classes {},
    #[route("/guardians")]
    Guardians {},
    #[route("/employees")]
    Employees {},
    #[route("/expenses")]
    Expenses {},
    #[route("/payments")]
    Payments {},
    #[route("/announcements")]
    Announcements {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Auth guard layout. Resolves the session on first render and redirects
/// to /login (carrying the current path) when there is none.
///
/// `use_server_future` embeds the result during SSR, so hydration sees the
/// user immediately; the `SuspenseBoundary` in `App` covers the gap.
#[component]
fn AuthGuard() -> Element {
    let mut auth = use_auth();
    let lang = use_lang();
    let route: Route = use_route();

    let resource = use_server_future(move || async move { server::api::current_user().await })?;
    let result = resource.read().as_ref().cloned();

    match result {
        Some(Ok(Some(user))) => {
            if !auth.is_authenticated() {
                auth.set_user(user);
            }
            rsx! { Outlet::<Route> {} }
        }
        Some(Ok(None)) | Some(Err(_)) => {
            tracing::debug!("no active session, redirecting to login");
            auth.clear_auth();
            let return_path = route.to_string();
            navigator().push(Route::Login {
                redirect: Some(return_path),
            });
            rsx! {
                div { class: "auth-guard-loading",
                    p { {tr(lang, "common.loading")} }
                }
            }
        }
        None => {
            rsx! {
                div { class: "auth-guard-loading",
                    p { {tr(lang, "common.loading")} }
                }
            }
        }
    }
}

/// Admin shell: role-scoped sidebar plus a topbar with the language
/// switcher and the user menu.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let lang = use_lang();
    let mut locale = use_context::<LocaleState>();
    let mut auth = use_auth();
    let vis = use_sidebar_visibility();

    let page_title_key = match &route {
        Route::Dashboard {} => "nav.dashboard",
        Route::Students {} => "nav.students",
        Route::Teachers {} => "nav.teachers",
        Route::Classes {} => "nav.classes",
        Route::Guardians {} => "nav.guardians",
        Route::Employees {} => "nav.employees",
        Route::Expenses {} => "nav.expenses",
        Route::Payments {} => "nav.payments",
        Route::Announcements {} => "nav.announcements",
        _ => "",
    };

    let user_name = auth
        .current_user
        .read()
        .as_ref()
        .map(|u| u.name.clone())
        .unwrap_or_default();
    let other_lang = lang.toggled();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider { default_open: false,
            Sidebar {
                SidebarHeader {
                    div { class: "sidebar-brand",
                        span { class: "sidebar-brand-name", "Madaris" }
                    }
                }

                SidebarSeparator {}

                SidebarContent {
                    SidebarGroup {
                        SidebarGroupLabel { {tr(lang, "group.overview")} }
                        SidebarMenu {
                            SidebarMenuItem {
                                Link { to: Route::Dashboard {},
                                    SidebarMenuButton { active: matches!(route, Route::Dashboard {}),
                                        Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
                                        {tr(lang, "nav.dashboard")}
                                    }
                                }
                            }
                        }
                    }

                    if vis.academics {
                        SidebarGroup {
                            SidebarGroupLabel { {tr(lang, "group.academics")} }
                            SidebarMenu {
                                SidebarMenuItem {
                                    Link { to: Route::Students {},
                                        SidebarMenuButton { active: matches!(route, Route::Students {}),
                                            Icon::<LdGraduationCap> { icon: LdGraduationCap, width: 18, height: 18 }
                                            {tr(lang, "nav.students")}
                                        }
                                    }
                                }
                                SidebarMenuItem {
                                    Link { to: Route::Teachers {},
                                        SidebarMenuButton { active: matches!(route, Route::Teachers {}),
                                            Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
                                            {tr(lang, "nav.teachers")}
                                        }
                                    }
                                }
                                SidebarMenuItem {
                                    Link { to: Route::Classes {},
                                        SidebarMenuButton { active: matches!(route, Route::Classes {}),
                                            Icon::<LdSchool> { icon: LdSchool, width: 18, height: 18 }
                                            {tr(lang, "nav.classes")}
                                        }
                                    }
                                }
                            }
                        }
                    }

                    if vis.people {
                        SidebarGroup {
                            SidebarGroupLabel { {tr(lang, "group.people")} }
                            SidebarMenu {
                                SidebarMenuItem {
                                    Link { to: Route::Guardians {},
                                        SidebarMenuButton { active: matches!(route, Route::Guardians {}),
                                            Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
                                            {tr(lang, "nav.guardians")}
                                        }
                                    }
                                }
                                SidebarMenuItem {
                                    Link { to: Route::Employees {},
                                        SidebarMenuButton { active: matches!(route, Route::Employees {}),
                                            Icon::<LdBriefcase> { icon: LdBriefcase, width: 18, height: 18 }
                                            {tr(lang, "nav.employees")}
                                        }
                                    }
                                }
                            }
                        }
                    }

                    if vis.finance {
                        SidebarGroup {
                            SidebarGroupLabel { {tr(lang, "group.finance")} }
                            SidebarMenu {
                                SidebarMenuItem {
                                    Link { to: Route::Expenses {},
                                        SidebarMenuButton { active: matches!(route, Route::Expenses {}),
                                            Icon::<LdReceipt> { icon: LdReceipt, width: 18, height: 18 }
                                            {tr(lang, "nav.expenses")}
                                        }
                                    }
                                }
                                SidebarMenuItem {
                                    Link { to: Route::Payments {},
                                        SidebarMenuButton { active: matches!(route, Route::Payments {}),
                                            Icon::<LdWallet> { icon: LdWallet, width: 18, height: 18 }
                                            {tr(lang, "nav.payments")}
                                        }
                                    }
                                }
                            }
                        }
                    }

                    if vis.communication {
                        SidebarGroup {
                            SidebarGroupLabel { {tr(lang, "group.communication")} }
                            SidebarMenu {
                                SidebarMenuItem {
                                    Link { to: Route::Announcements {},
                                        SidebarMenuButton { active: matches!(route, Route::Announcements {}),
                                            Icon::<LdMegaphone> { icon: LdMegaphone, width: 18, height: 18 }
                                            {tr(lang, "nav.announcements")}
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                SidebarFooter {
                    span { class: "sidebar-user", "{user_name}" }
                }
            }

            SidebarInset {
                header { class: "topbar",
                    SidebarTrigger {
                        Icon::<LdMenu> { icon: LdMenu, width: 20, height: 20 }
                    }
                    h2 { class: "topbar-title", {tr(lang, page_title_key)} }
                    div { class: "topbar-actions",
                        button {
                            class: "lang-switch",
                            onclick: move |_| {
                                locale.lang.set(other_lang);
                                set_lang(other_lang);
                            },
                            "{other_lang.native_name()}"
                        }
                        DropdownMenu {
                            DropdownMenuTrigger {
                                span { class: "topbar-user", "{user_name}" }
                            }
                            DropdownMenuContent {
                                DropdownMenuItem::<String> {
                                    value: "logout".to_string(),
                                    index: 0usize,
                                    on_select: move |_: String| {
                                        spawn(async move {
                                            let _ = server::api::logout().await;
                                        });
                                        auth.clear_auth();
                                        navigator().push(Route::Home {});
                                    },
                                    {tr(lang, "common.logout")}
                                }
                            }
                        }
                    }
                }
                div { class: "page-body",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
