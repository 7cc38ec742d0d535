use crate::i18n::tr1;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub year: i32,
}

#[function_component(Footer)]
pub fn footer(p: &Props) -> Html {
    html! {
        <footer class="site-footer">
            { tr1("footer.copyright", "year", &p.year.to_string()) }
        </footer>
    }
}
