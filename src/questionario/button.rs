use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    Next,
    Prev,
    Submit,
}

#[derive(Properties, PartialEq)]
pub struct QuestionarioButtonProps {
    pub children: Children,
    #[prop_or(ButtonVariant::Next)]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or(false)]
    pub disabled: bool,
}

#[function_component(QuestionarioButton)]
pub fn questionario_button(props: &QuestionarioButtonProps) -> Html {
    let class = match props.variant {
        ButtonVariant::Next => "questionario-btn btn-next",
        ButtonVariant::Prev => "questionario-btn btn-prev",
        ButtonVariant::Submit => "questionario-btn btn-submit",
    };

    let arrow_left = html! {
        <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <line x1="19" y1="12" x2="5" y2="12"></line>
            <polyline points="12 19 5 12 12 5"></polyline>
        </svg>
    };
    let arrow_right = html! {
        <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <line x1="5" y1="12" x2="19" y2="12"></line>
            <polyline points="12 5 19 12 12 19"></polyline>
        </svg>
    };

    html! {
        <button
            type="button"
            {class}
            onclick={props.onclick.clone()}
            disabled={props.disabled}
        >
            { if props.variant == ButtonVariant::Prev { arrow_left } else { html! {} } }
            { for props.children.iter() }
            { if props.variant == ButtonVariant::Prev { html! {} } else { arrow_right } }
        </button>
    }
}
