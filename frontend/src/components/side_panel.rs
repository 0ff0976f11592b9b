use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TitledSectionProps {
    pub title: String,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(TitledSection)]
pub fn titled_section(props: &TitledSectionProps) -> Html {
    html! {
        <section class="panel-section">
            <h3 class="panel-section__title">{&props.title}</h3>
            <div class="panel-section__body">
                { for props.children.iter() }
            </div>
        </section>
    }
}

/// Right-hand dashboard panel: titled sections composed from a shared
/// template.
#[function_component(SidePanel)]
pub fn side_panel() -> Html {
    html! {
        <aside class="side-panel">
            <TitledSection title="Recurring expenses">
                <p>{"Nothing recurring yet."}</p>
            </TitledSection>
            <TitledSection title="Savings envelopes">
                <p>{"No envelopes yet."}</p>
            </TitledSection>
        </aside>
    }
}
