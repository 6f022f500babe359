//! # Application State Types
//!
//! All state-related types for the application: screens, the login form,
//! the user list with its derived filtered view, and the edit form.

use crate::services::api::ApiClient;
use crate::services::session::SessionStore;
use shared::User;
use std::sync::Arc;

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Login form
    Login,
    /// Paginated, searchable user list
    Users,
    /// Edit form for the user with the carried identifier
    Edit(i64),
}

impl Screen {
    /// Whether this screen may only render with a stored session token.
    pub fn requires_auth(self) -> bool {
        matches!(self, Screen::Users | Screen::Edit(_))
    }

    /// Screen title for header display
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Login => "Sign In",
            Screen::Users => "User Management",
            Screen::Edit(_) => "Edit User",
        }
    }
}

/// Login form state
#[derive(Debug, Clone, PartialEq)]
pub struct LoginState {
    pub email: String,
    pub password: String,
    /// Inline form error from local validation
    pub error: Option<String>,
    /// Submit control is disabled while a login request is outstanding
    pub in_flight: bool,
}

impl Default for LoginState {
    fn default() -> Self {
        // Pre-populated with the example credentials the demo service accepts
        Self {
            email: "eve.holt@reqres.in".to_string(),
            password: "cityslicka".to_string(),
            error: None,
            in_flight: false,
        }
    }
}

/// Delete confirmation dialog, holding the targeted user
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteDialog {
    pub user: User,
    /// Confirm control is disabled while the delete request is outstanding
    pub in_flight: bool,
}

/// User list screen state
#[derive(Debug, Clone, PartialEq)]
pub struct UserListState {
    /// Last successfully fetched page of users
    pub users: Vec<User>,
    /// Total page count as reported by the remote service
    pub total_pages: u32,
    /// Current 1-based page index
    pub page: u32,
    /// Ephemeral client-side search string
    pub search: String,
    /// A page fetch is outstanding
    pub loading: bool,
    /// Open delete confirmation dialog, if any
    pub delete_dialog: Option<DeleteDialog>,
    /// Monotonically increasing fetch sequence; only the response matching
    /// the latest dispatched fetch is applied to state
    pub fetch_seq: u64,
}

impl Default for UserListState {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            total_pages: 1,
            page: 1,
            search: String::new(),
            loading: false,
            delete_dialog: None,
            fetch_seq: 0,
        }
    }
}

impl UserListState {
    /// Derived filtered view: case-insensitive substring match of the search
    /// string against first name, last name, or email. Never fetches.
    pub fn filtered(&self) -> Vec<&User> {
        let q = self.search.to_lowercase();
        if q.is_empty() {
            return self.users.iter().collect();
        }
        self.users
            .iter()
            .filter(|u| {
                u.first_name.to_lowercase().contains(&q)
                    || u.last_name.to_lowercase().contains(&q)
                    || u.email.to_lowercase().contains(&q)
            })
            .collect()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Editable field set, bound one-to-one to the form inputs
#[derive(Debug, Clone, PartialEq)]
pub struct EditForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<User> for EditForm {
    fn from(user: User) -> Self {
        Self {
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
        }
    }
}

/// Edit screen state
#[derive(Debug, Clone, PartialEq)]
pub struct EditState {
    /// Identifier taken from the route
    pub id: i64,
    /// `None` while the fetch is outstanding; the form never renders
    /// against a failed fetch
    pub form: Option<EditForm>,
    /// Inline form error from local validation
    pub error: Option<String>,
    /// Save control is disabled while an update request is outstanding
    pub saving: bool,
}

impl EditState {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            form: None,
            error: None,
            saving: false,
        }
    }
}

/// Global application state
#[derive(Clone)]
pub struct AppState {
    /// Current active screen
    pub current_screen: Screen,
    /// Login form state
    pub login: LoginState,
    /// User list screen state
    pub users: UserListState,
    /// Edit screen state (present while an edit is open)
    pub edit: Option<EditState>,
    /// Injected session object; the single holder of the credential token
    pub session: SessionStore,
    /// API client (shares the same session store)
    pub api_client: Arc<ApiClient>,
    /// Pending notifications to display (level, message)
    pub pending_notifications: Vec<(String, String)>,
}

impl AppState {
    /// Check if the user is authenticated (has a stored session token)
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mk_user(id: i64, first: &str, last: &str, email: &str) -> User {
        User {
            id,
            email: email.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            avatar: format!("https://reqres.in/img/faces/{id}-image.jpg"),
        }
    }

    fn mk_list(users: Vec<User>) -> UserListState {
        UserListState {
            users,
            total_pages: 2,
            page: 1,
            ..UserListState::default()
        }
    }

    #[test]
    fn filtered_matches_any_of_the_three_fields_case_insensitively() {
        let mut list = mk_list(vec![
            mk_user(1, "George", "Bluth", "george.bluth@reqres.in"),
            mk_user(2, "Janet", "Weaver", "janet.weaver@reqres.in"),
            mk_user(3, "Emma", "Wong", "emma.wong@reqres.in"),
        ]);

        list.search = "WEAV".to_string();
        let hits = list.filtered();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 2);

        list.search = "emma.wong@".to_string();
        let hits = list.filtered();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].first_name, "Emma");

        list.search = "geor".to_string();
        assert_eq!(list.filtered().len(), 1);
    }

    #[test]
    fn empty_search_returns_the_whole_page_in_order() {
        let list = mk_list(vec![
            mk_user(1, "George", "Bluth", "george.bluth@reqres.in"),
            mk_user(2, "Janet", "Weaver", "janet.weaver@reqres.in"),
        ]);

        let all = list.filtered();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, 1);
        assert_eq!(all[1].id, 2);
    }

    #[test]
    fn filtered_preserves_page_order() {
        let mut list = mk_list(vec![
            mk_user(1, "Anna", "Reed", "anna@reqres.in"),
            mk_user(2, "Brian", "Ann", "brian@reqres.in"),
            mk_user(3, "Cara", "Stone", "cara@reqres.in"),
        ]);

        list.search = "an".to_string();
        let hits = list.filtered();
        // "an" matches Anna (first), Ann (last), and Cara's email does not match
        assert_eq!(hits.iter().map(|u| u.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn no_match_yields_empty_view_without_touching_state() {
        let mut list = mk_list(vec![mk_user(1, "George", "Bluth", "george@reqres.in")]);
        list.search = "zzz".to_string();

        assert!(list.filtered().is_empty());
        assert_eq!(list.users.len(), 1);
    }

    #[test]
    fn pagination_boundaries() {
        let mut list = mk_list(vec![]);
        list.page = 1;
        list.total_pages = 2;
        assert!(!list.has_previous());
        assert!(list.has_next());

        list.page = 2;
        assert!(list.has_previous());
        assert!(!list.has_next());
    }

    #[test]
    fn screen_guard_classification() {
        assert!(!Screen::Login.requires_auth());
        assert!(Screen::Users.requires_auth());
        assert!(Screen::Edit(7).requires_auth());
    }

    #[test]
    fn edit_form_from_user_carries_the_editable_fields() {
        let form = EditForm::from(mk_user(3, "Eve", "Holt", "eve.holt@reqres.in"));
        assert_eq!(form.first_name, "Eve");
        assert_eq!(form.last_name, "Holt");
        assert_eq!(form.email, "eve.holt@reqres.in");
    }
}
