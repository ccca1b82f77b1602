//! Admin user-management table with activate/deactivate actions.

#[cfg(test)]
#[path = "user_table_test.rs"]
mod user_table_test;

use leptos::prelude::*;

use crate::net::types::UserProfile;
use crate::state::users::can_toggle;

pub fn action_label(user: &UserProfile) -> &'static str {
    if user.is_active { "Deactivate" } else { "Activate" }
}

/// CSS modifier for the row action button.
pub fn action_modifier(user: &UserProfile) -> &'static str {
    if !can_toggle(user) {
        "disabled"
    } else if user.is_active {
        "deactivate"
    } else {
        "activate"
    }
}

pub fn status_label(is_active: bool) -> &'static str {
    if is_active { "Active" } else { "Inactive" }
}

/// User rows. `on_toggle` receives `(user id, requested active state)`.
#[component]
pub fn UserTable(
    #[prop(into)] users: Signal<Vec<UserProfile>>,
    #[prop(into)] pending: Signal<Option<String>>,
    on_toggle: Callback<(String, bool)>,
) -> impl IntoView {
    let rows = move || {
        users
            .get()
            .into_iter()
            .map(|user| {
                let id = user.key().to_owned();
                let requested = !user.is_active;
                let locked = !can_toggle(&user);
                let row_id = id.clone();
                let busy = move || pending.with(|p| p.as_deref() == Some(row_id.as_str()));
                let role = user.role.as_str();
                view! {
                    <tr class="user-table__tr">
                        <td class="user-table__td user-table__td--user">
                            <div class="user-table__name">{user.display_name().to_owned()}</div>
                            <div class="user-table__email">{user.email.clone()}</div>
                        </td>
                        <td class="user-table__td">
                            <span class=format!("badge badge--{role}")>{role}</span>
                        </td>
                        <td class="user-table__td">
                            <span
                                class="badge"
                                class:badge--active=user.is_active
                                class:badge--inactive=!user.is_active
                            >
                                {status_label(user.is_active)}
                            </span>
                        </td>
                        <td class="user-table__td">
                            <button
                                class=format!("user-table__action user-table__action--{}", action_modifier(&user))
                                disabled=move || locked || busy()
                                on:click=move |_| on_toggle.run((id.clone(), requested))
                            >
                                {action_label(&user)}
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <Show
            when=move || users.with(|u| !u.is_empty())
            fallback=|| view! { <p class="empty-state">"No users found in the system."</p> }
        >
            <table class="user-table">
                <thead>
                    <tr>
                        <th class="user-table__th">"User"</th>
                        <th class="user-table__th">"Role"</th>
                        <th class="user-table__th">"Status"</th>
                        <th class="user-table__th">"Actions"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </Show>
    }
}
