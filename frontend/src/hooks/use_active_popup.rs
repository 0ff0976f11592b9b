use shared::ActivePopup;
use web_sys::MouseEvent;
use yew::prelude::*;

pub struct UseActivePopupResult {
    pub active: ActivePopup,
    pub actions: UseActivePopupActions,
}

#[derive(Clone, PartialEq)]
pub struct UseActivePopupActions {
    pub open_login: Callback<MouseEvent>,
    pub open_register: Callback<MouseEvent>,
    pub close: Callback<MouseEvent>,
}

/// Owns the account-popup visibility for the whole app.
#[hook]
pub fn use_active_popup() -> UseActivePopupResult {
    let active = use_state(ActivePopup::default);

    let open_login = {
        let active = active.clone();
        use_callback(*active, move |_: MouseEvent, current: &ActivePopup| {
            let mut next = *current;
            next.open_login();
            active.set(next);
        })
    };

    let open_register = {
        let active = active.clone();
        use_callback(*active, move |_: MouseEvent, current: &ActivePopup| {
            let mut next = *current;
            next.open_register();
            active.set(next);
        })
    };

    let close = {
        let active = active.clone();
        use_callback(*active, move |_: MouseEvent, current: &ActivePopup| {
            let mut next = *current;
            next.close();
            active.set(next);
        })
    };

    UseActivePopupResult {
        active: *active,
        actions: UseActivePopupActions {
            open_login,
            open_register,
            close,
        },
    }
}
