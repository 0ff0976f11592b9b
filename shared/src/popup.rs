use serde::{Deserialize, Serialize};

/// Which account popup is currently visible.
///
/// Login and registration are a single value rather than two independent
/// flags, so opening one popup closes the other and both can never be
/// visible at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ActivePopup {
    /// No popup visible.
    #[default]
    None,
    /// The sign-in popup.
    Login,
    /// The registration popup.
    Register,
}

impl ActivePopup {
    pub fn open_login(&mut self) {
        *self = ActivePopup::Login;
    }

    pub fn open_register(&mut self) {
        *self = ActivePopup::Register;
    }

    pub fn close(&mut self) {
        *self = ActivePopup::None;
    }

    pub fn is_open(self) -> bool {
        self != ActivePopup::None
    }

    pub fn login_visible(self) -> bool {
        matches!(self, ActivePopup::Login)
    }

    pub fn register_visible(self) -> bool {
        matches!(self, ActivePopup::Register)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_popup_visible_by_default() {
        let popup = ActivePopup::default();
        assert!(!popup.is_open());
        assert!(!popup.login_visible());
        assert!(!popup.register_visible());
    }

    #[test]
    fn test_opening_register_closes_login() {
        // The registration link inside the login popup
        let mut popup = ActivePopup::default();
        popup.open_login();
        assert!(popup.login_visible());

        popup.open_register();
        assert!(popup.register_visible());
        assert!(!popup.login_visible());
    }

    #[test]
    fn test_opening_login_closes_register() {
        let mut popup = ActivePopup::Register;
        popup.open_login();
        assert!(popup.login_visible());
        assert!(!popup.register_visible());
    }

    #[test]
    fn test_close_hides_everything() {
        let mut popup = ActivePopup::Login;
        popup.close();
        assert!(!popup.is_open());
    }
}
