use shared::ActivePopup;
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::{Header, LoginPopup, RegisterPopup, SidePanel, Statistics};
use hooks::use_active_popup::use_active_popup;

#[function_component(App)]
fn app() -> Html {
    let popup = use_active_popup();

    html! {
        <>
            <Header on_sign_in={popup.actions.open_login.clone()} />

            <main class="main">
                <div class="container">
                    <Statistics />
                    <SidePanel />
                </div>
            </main>

            {match popup.active {
                ActivePopup::None => html! {},
                ActivePopup::Login => html! {
                    <LoginPopup
                        on_switch_to_register={popup.actions.open_register.clone()}
                        on_close={popup.actions.close.clone()}
                    />
                },
                ActivePopup::Register => html! {
                    <RegisterPopup
                        on_switch_to_login={popup.actions.open_login.clone()}
                        on_close={popup.actions.close.clone()}
                    />
                },
            }}
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
