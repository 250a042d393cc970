use crate::{
    client::{router::Route, session::state::SessionState},
    model::user::UserRole,
};

/// Button styling of a navbar action
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionStyle {
    Ghost,
    Primary,
    Outline,
}

impl ActionStyle {
    pub fn class(&self) -> &'static str {
        match self {
            Self::Ghost => "btn btn-ghost",
            Self::Primary => "btn btn-primary",
            Self::Outline => "btn btn-outline",
        }
    }
}

/// An entry rendered in the navbar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    Home,
    MarkAttendance,
    Dashboard(UserRole),
    Login,
    GetStarted,
    Logout,
}

impl NavAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::MarkAttendance => "Mark Attendance",
            Self::Dashboard(_) => "Dashboard",
            Self::Login => "Login",
            Self::GetStarted => "Get Started",
            Self::Logout => "Logout",
        }
    }

    /// Route the action links to, `None` for [`NavAction::Logout`] which runs the logout handler
    pub fn target(&self) -> Option<Route> {
        match self {
            Self::Home => Some(Route::Home {}),
            Self::MarkAttendance => Some(Route::Attendance {}),
            Self::Dashboard(role) => Some(dashboard_route(*role)),
            Self::Login | Self::GetStarted => Some(Route::Login {}),
            Self::Logout => None,
        }
    }

    pub fn style(&self) -> ActionStyle {
        match self {
            Self::GetStarted => ActionStyle::Primary,
            Self::Logout => ActionStyle::Outline,
            _ => ActionStyle::Ghost,
        }
    }
}

/// Dashboard a role lands on
pub fn dashboard_route(role: UserRole) -> Route {
    match role {
        UserRole::Admin => Route::AdminDashboard {},
        UserRole::Employee => Route::EmployeeDashboard {},
    }
}

/// Everything the navbar renders from, derived fresh on every render
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionView {
    pub logged_in: bool,
    pub role: Option<UserRole>,
    pub checking: bool,
    pub menu_open: bool,
}

impl SessionView {
    pub fn new(session: &SessionState, menu_open: bool) -> Self {
        Self {
            logged_in: session.logged_in(),
            role: session.role(),
            checking: session.checking(),
            menu_open,
        }
    }

    /// Ordered actions shown in both the horizontal bar and the mobile panel.
    ///
    /// Home and Mark Attendance are always present. While the session is being checked
    /// only Login and Get Started can appear alongside them; Dashboard needs a known role.
    pub fn actions(&self) -> Vec<NavAction> {
        let mut actions = vec![NavAction::Home, NavAction::MarkAttendance];

        if let Some(role) = self.role.filter(|_| self.logged_in && !self.checking) {
            actions.push(NavAction::Dashboard(role));
        }

        if !self.logged_in {
            actions.push(NavAction::Login);
            actions.push(NavAction::GetStarted);
        }

        if self.logged_in && !self.checking {
            actions.push(NavAction::Logout);
        }

        actions
    }

    /// Role shown next to the mobile menu toggle
    pub fn role_badge(&self) -> Option<UserRole> {
        self.role.filter(|_| self.logged_in && !self.checking)
    }

    /// Actions of the mobile panel, `None` while the panel is closed.
    ///
    /// The panel repeats the horizontal bar rather than keeping its own list.
    pub fn panel_actions(&self) -> Option<Vec<NavAction>> {
        self.menu_open.then(|| self.actions())
    }

    /// View after the menu toggle is pressed
    pub fn toggled(mut self) -> Self {
        self.menu_open = !self.menu_open;
        self
    }

    /// View after an action or the brand is selected. Any selection closes the panel.
    pub fn after_select(mut self) -> Self {
        self.menu_open = false;
        self
    }

    pub fn menu_icon(&self) -> &'static str {
        if self.menu_open {
            "✕"
        } else {
            "☰"
        }
    }
}
