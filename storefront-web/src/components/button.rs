use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub label: AttrValue,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    /// Extra classes after `btn`, e.g. `primary` or `ghost`.
    #[prop_or(AttrValue::from("primary"))]
    pub variant: AttrValue,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

#[function_component(Button)]
pub fn button(p: &Props) -> Html {
    let onclick = p.onclick.clone();
    html! {
        <button type="button" id={p.id.clone()} class={classes!("btn", p.variant.to_string())} {onclick}>
            { p.label.clone() }
        </button>
    }
}
