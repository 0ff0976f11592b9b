use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub on_sign_in: Callback<MouseEvent>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="header">
            <div class="container">
                <h1>{"Family Budget"}</h1>
                <button
                    type="button"
                    class="sign-in-button"
                    onclick={props.on_sign_in.clone()}
                >
                    {"Sign in"}
                </button>
            </div>
        </header>
    }
}
