//! Taskpad Frontend App
//!
//! Top-level component wiring one of the two deployment variants:
//! local (browser-storage persistence) or synced (hosted per-user
//! collection behind the identity provider).

use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Toast stack shared by every view
    provide_context(crate::context::ToastContext::new());

    #[cfg(not(feature = "sync"))]
    let shell = view! { <local::LocalShell /> }.into_any();
    #[cfg(feature = "sync")]
    let shell = view! { <sync::SyncShell /> }.into_any();

    shell
}

#[cfg(not(feature = "sync"))]
mod local {
    use chrono::Local;
    use leptos::prelude::*;
    use reactive_stores::Store;

    use crate::components::{ProgressBar, TaskForm, TaskList, ThemeToggle, Toasts};
    use crate::context::use_toasts;
    use crate::models::Task;
    use crate::notify;
    use crate::storage;
    use crate::store::{self, AppState, AppStateStoreFields, AppStore};

    /// Local variant: the task list and theme live in browser storage
    #[component]
    pub fn LocalShell() -> impl IntoView {
        let store: AppStore = Store::new(AppState {
            tasks: storage::load_tasks(),
            editing: None,
            dark_mode: storage::load_dark_mode(),
        });
        let toasts = use_toasts();

        let text = RwSignal::new(String::new());
        let due_date = RwSignal::new(String::new());
        let notified = RwSignal::new(storage::load_due_notified());

        // Persist tasks & theme whenever they change
        Effect::new(move |_| storage::save_tasks(&store.tasks().get()));
        Effect::new(move |_| storage::save_dark_mode(store.dark_mode().get()));

        // Due-date warnings piggyback on list changes
        Effect::new(move |_| {
            let tasks = store.tasks().get();
            let today = Local::now().date_naive();
            let entries: Vec<(String, &Task)> = tasks
                .iter()
                .map(|task| (notify::warning_key(task), task))
                .collect();
            let mut registry = notified.get_untracked();
            let warnings = notify::due_warnings(&entries, today, &mut registry);
            storage::save_due_notified(&registry);
            notified.set(registry);
            for message in warnings {
                toasts.warn(message);
            }
        });

        let clear_inputs = move || {
            text.set(String::new());
            due_date.set(String::new());
        };

        let on_submit = Callback::new(move |()| {
            if store::store_submit(&store, &text.get_untracked(), &due_date.get_untracked()) {
                clear_inputs();
            }
        });

        let on_cancel = Callback::new(move |()| {
            store::store_cancel_edit(&store);
            clear_inputs();
        });

        let on_edit = Callback::new(move |index: usize| {
            if let Some(task) = store::store_begin_edit(&store, index) {
                text.set(task.text);
                due_date.set(task.due_date);
            }
        });

        let on_toggle = Callback::new(move |index: usize| store::store_toggle(&store, index));
        let on_remove = Callback::new(move |index: usize| store::store_remove(&store, index));
        let on_reorder = Callback::new(move |(source, dest): (usize, usize)| {
            store::store_reorder(&store, source, dest);
        });

        let percent = Signal::derive(move || {
            let tasks = store.tasks().get();
            store::progress_percent(tasks.iter())
        });

        view! {
            <div class=move || if store.dark_mode().get() { "app dark" } else { "app light" }>
                <ThemeToggle
                    dark_mode=Signal::derive(move || store.dark_mode().get())
                    on_toggle=Callback::new(move |()| {
                        store.dark_mode().update(|dark| *dark = !*dark);
                    })
                />

                <h1>"To-Do App"</h1>

                <TaskForm
                    text=text
                    due_date=due_date
                    editing=Signal::derive(move || store.editing().get().is_some())
                    on_submit=on_submit
                    on_cancel=on_cancel
                />

                <ProgressBar percent=percent />

                <TaskList
                    tasks=Signal::derive(move || store.tasks().get())
                    on_toggle=on_toggle
                    on_edit=on_edit
                    on_remove=on_remove
                    on_reorder=on_reorder
                />

                <Toasts />
            </div>
        }
    }
}

#[cfg(feature = "sync")]
mod sync {
    use std::collections::BTreeSet;

    use chrono::Local;
    use leptos::prelude::*;
    use leptos::task::spawn_local;

    use crate::components::{
        LoginView, ProgressBar, SignupView, TaskForm, TaskList, ThemeToggle, Toasts,
    };
    use crate::context::use_toasts;
    use crate::models::{Session, Task, TaskDoc};
    use crate::notify;
    use crate::remote::documents::{self, NewTask, TaskPatch};
    use crate::remote::{auth, ApiClient, RemoteConfig};
    use crate::store;

    #[derive(Clone, Copy, PartialEq)]
    enum AuthRoute {
        Login,
        Signup,
    }

    /// Synced variant: identity-gated task view over the hosted collection
    #[component]
    pub fn SyncShell() -> impl IntoView {
        let Some(config) = RemoteConfig::from_env() else {
            return view! {
                <div class="app dark">
                    <p class="config-missing">
                        "Backend endpoint not configured. Set TASKPAD_API_BASE and TASKPAD_API_KEY at build time."
                    </p>
                </div>
            }
            .into_any();
        };

        let client = ApiClient::new(config);
        provide_context(client);

        let session = RwSignal::new(None::<Session>);
        let route = RwSignal::new(AuthRoute::Login);
        let (dark_mode, set_dark_mode) = signal(true);

        view! {
            <div class=move || if dark_mode.get() { "app dark" } else { "app light" }>
                <ThemeToggle
                    dark_mode=dark_mode
                    on_toggle=Callback::new(move |()| set_dark_mode.update(|dark| *dark = !*dark))
                />

                {move || match session.get() {
                    Some(active) => {
                        view! {
                            <SyncedTasks
                                session=active
                                on_logout=Callback::new(move |()| {
                                    session.set(None);
                                    route.set(AuthRoute::Login);
                                })
                            />
                        }
                            .into_any()
                    }
                    None => match route.get() {
                        AuthRoute::Login => {
                            view! {
                                <LoginView
                                    on_authenticated=Callback::new(move |active| {
                                        session.set(Some(active));
                                    })
                                    on_goto_signup=Callback::new(move |()| {
                                        route.set(AuthRoute::Signup);
                                    })
                                />
                            }
                                .into_any()
                        }
                        AuthRoute::Signup => {
                            view! {
                                <SignupView on_goto_login=Callback::new(move |()| {
                                    route.set(AuthRoute::Login);
                                }) />
                            }
                                .into_any()
                        }
                    },
                }}

                <Toasts />
            </div>
        }
        .into_any()
    }

    /// Task view over the per-user document cache.
    ///
    /// Mutations apply to the cache first and issue minimal remote
    /// writes; a failed write surfaces a toast and re-fetches the
    /// collection to reconcile.
    #[component]
    fn SyncedTasks(session: Session, #[prop(into)] on_logout: Callback<()>) -> impl IntoView {
        let client = StoredValue::new(expect_context::<ApiClient>());
        let toasts = use_toasts();

        let session_email = session.email.clone();
        let session = StoredValue::new(session);

        let docs = RwSignal::new(Vec::<TaskDoc>::new());
        let editing = RwSignal::new(None::<String>);
        let text = RwSignal::new(String::new());
        let due_date = RwSignal::new(String::new());
        let notified = RwSignal::new(BTreeSet::<String>::new());

        let refetch = Callback::new(move |()| {
            spawn_local(async move {
                let client = client.get_value();
                let session = session.get_value();
                match documents::list_tasks(&client, &session).await {
                    Ok(all) => docs.set(store::owned_sorted(all, &session.user_id)),
                    Err(error) => {
                        tracing::error!(%error, "failed loading tasks");
                        toasts.error(error.to_string());
                    }
                }
            });
        });

        // Initial fetch
        Effect::new(move |_| refetch.run(()));

        // Due-date warnings piggyback on cache changes (session-scoped registry)
        Effect::new(move |_| {
            let list = docs.get();
            let today = Local::now().date_naive();
            let entries: Vec<(String, &Task)> = list
                .iter()
                .map(|doc| (doc.id.clone(), &doc.task))
                .collect();
            let mut registry = notified.get_untracked();
            let warnings = notify::due_warnings(&entries, today, &mut registry);
            notified.set(registry);
            for message in warnings {
                toasts.warn(message);
            }
        });

        let clear_inputs = move || {
            text.set(String::new());
            due_date.set(String::new());
        };

        let on_submit = Callback::new(move |()| {
            let input_text = text.get_untracked();
            if input_text.trim().is_empty() {
                return;
            }
            let input_due = due_date.get_untracked();

            match editing.get_untracked() {
                Some(id) => {
                    docs.update(|list| {
                        if let Some(doc) = list.iter_mut().find(|doc| doc.id == id) {
                            doc.task.text = input_text.clone();
                            doc.task.due_date = input_due.clone();
                        }
                    });
                    editing.set(None);
                    clear_inputs();
                    spawn_local(async move {
                        let client = client.get_value();
                        let session = session.get_value();
                        let patch = TaskPatch {
                            text: Some(&input_text),
                            due_date: Some(&input_due),
                            ..TaskPatch::default()
                        };
                        if let Err(error) =
                            documents::update_task(&client, &session, &id, &patch).await
                        {
                            tracing::error!(%error, "failed updating task");
                            toasts.error(error.to_string());
                            refetch.run(());
                        }
                    });
                }
                None => {
                    let position = docs.with_untracked(|list| list.len()) as i32;
                    clear_inputs();
                    spawn_local(async move {
                        let client = client.get_value();
                        let session = session.get_value();
                        let fields = NewTask {
                            owner: &session.user_id,
                            text: &input_text,
                            completed: false,
                            due_date: &input_due,
                            position,
                        };
                        match documents::create_task(&client, &session, &fields).await {
                            Ok(doc) => docs.update(|list| list.push(doc)),
                            Err(error) => {
                                tracing::error!(%error, "failed creating task");
                                toasts.error(error.to_string());
                                refetch.run(());
                            }
                        }
                    });
                }
            }
        });

        let on_cancel = Callback::new(move |()| {
            editing.set(None);
            clear_inputs();
        });

        let on_edit = Callback::new(move |index: usize| {
            let target = docs.with_untracked(|list| list.get(index).cloned());
            if let Some(doc) = target {
                text.set(doc.task.text);
                due_date.set(doc.task.due_date);
                editing.set(Some(doc.id));
            }
        });

        let on_toggle = Callback::new(move |index: usize| {
            let target = docs.with_untracked(|list| {
                list.get(index).map(|doc| (doc.id.clone(), !doc.task.completed))
            });
            let Some((id, completed)) = target else {
                return;
            };
            docs.update(|list| {
                if let Some(doc) = list.get_mut(index) {
                    doc.task.completed = completed;
                }
            });
            spawn_local(async move {
                let client = client.get_value();
                let session = session.get_value();
                let patch = TaskPatch {
                    completed: Some(completed),
                    ..TaskPatch::default()
                };
                if let Err(error) = documents::update_task(&client, &session, &id, &patch).await {
                    tracing::error!(%error, "failed toggling task");
                    toasts.error(error.to_string());
                    refetch.run(());
                }
            });
        });

        let on_remove = Callback::new(move |index: usize| {
            let removed = docs
                .try_update(|list| {
                    if index < list.len() {
                        Some(list.remove(index))
                    } else {
                        None
                    }
                })
                .flatten();
            let Some(doc) = removed else {
                return;
            };
            spawn_local(async move {
                let client = client.get_value();
                let session = session.get_value();
                if let Err(error) = documents::delete_task(&client, &session, &doc.id).await {
                    tracing::error!(%error, "failed deleting task");
                    toasts.error(error.to_string());
                    refetch.run(());
                }
            });
        });

        let on_reorder = Callback::new(move |(source, dest): (usize, usize)| {
            let patches = docs
                .try_update(|list| {
                    store::reorder(list, source, dest);
                    store::position_patches(list)
                })
                .unwrap_or_default();
            if patches.is_empty() {
                return;
            }
            spawn_local(async move {
                let client = client.get_value();
                let session = session.get_value();
                for (id, position) in patches {
                    let patch = TaskPatch {
                        position: Some(position),
                        ..TaskPatch::default()
                    };
                    if let Err(error) =
                        documents::update_task(&client, &session, &id, &patch).await
                    {
                        tracing::error!(%error, "failed persisting reorder");
                        toasts.error(error.to_string());
                        refetch.run(());
                        break;
                    }
                }
            });
        });

        let handle_logout = move |_| {
            spawn_local(async move {
                auth::log_out(&client.get_value()).await;
                on_logout.run(());
            });
        };

        view! {
            <header class="session-bar">
                <span class="session-email">{session_email}</span>
                <button class="logout-btn" on:click=handle_logout>"Log Out"</button>
            </header>

            <h1>"To-Do App"</h1>

            <TaskForm
                text=text
                due_date=due_date
                editing=Signal::derive(move || editing.get().is_some())
                on_submit=on_submit
                on_cancel=on_cancel
            />

            <ProgressBar percent=Signal::derive(move || {
                let list = docs.get();
                store::progress_percent(list.iter().map(|doc| &doc.task))
            }) />

            <TaskList
                tasks=Signal::derive(move || {
                    docs.get().into_iter().map(|doc| doc.task).collect::<Vec<_>>()
                })
                on_toggle=on_toggle
                on_edit=on_edit
                on_remove=on_remove
                on_reorder=on_reorder
            />
        }
    }
}
