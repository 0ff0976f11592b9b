use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RegisterPopupProps {
    pub on_switch_to_login: Callback<MouseEvent>,
    pub on_close: Callback<MouseEvent>,
}

#[function_component(RegisterPopup)]
pub fn register_popup(props: &RegisterPopupProps) -> Html {
    let login = use_state(String::new);
    let password = use_state(String::new);
    let password_repeat = use_state(String::new);

    let on_login_change = {
        let login = login.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            login.set(input.value());
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_password_repeat_change = {
        let password_repeat = password_repeat.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password_repeat.set(input.value());
        })
    };

    let on_submit = {
        let login = login.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            gloo::console::log!(format!("registration requested for {}", *login));
        })
    };

    html! {
        <div class="popup-overlay">
            <div class="popup">
                <button type="button" class="popup-close" onclick={props.on_close.clone()}>
                    {"×"}
                </button>
                <h2>{"Register"}</h2>
                <form class="form" onsubmit={on_submit}>
                    <div class="form__input-block">
                        <label class="form__input-label" for="register-popup-login">
                            {"Login"}
                            <input
                                class="form__input"
                                type="text"
                                id="register-popup-login"
                                placeholder="Ivan Petrov"
                                required=true
                                minlength="2"
                                maxlength="25"
                                value={(*login).clone()}
                                onchange={on_login_change}
                            />
                        </label>
                    </div>

                    <div class="form__input-block">
                        <label class="form__input-label" for="register-popup-password">
                            {"Password"}
                            <input
                                class="form__input"
                                type="password"
                                id="register-popup-password"
                                placeholder="*******"
                                required=true
                                minlength="8"
                                maxlength="40"
                                value={(*password).clone()}
                                onchange={on_password_change}
                            />
                        </label>
                    </div>

                    <div class="form__input-block">
                        <label class="form__input-label" for="register-popup-password-repeat">
                            {"Repeat password"}
                            <input
                                class="form__input"
                                type="password"
                                id="register-popup-password-repeat"
                                placeholder="*******"
                                required=true
                                minlength="8"
                                maxlength="40"
                                value={(*password_repeat).clone()}
                                onchange={on_password_repeat_change}
                            />
                        </label>
                    </div>

                    <button type="submit" class="btn btn-primary">{"Register"}</button>
                </form>

                <p>
                    {"Already have an account? "}
                    <button
                        type="button"
                        class="link-button"
                        onclick={props.on_switch_to_login.clone()}
                    >
                        {"Sign in"}
                    </button>
                </p>
            </div>
        </div>
    }
}
