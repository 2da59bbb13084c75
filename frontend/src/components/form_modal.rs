use yew::prelude::*;

/// Shared modal shell for the store and user edit dialogs: backdrop click
/// closes, clicks inside the panel stay inside, header and footer are
/// uniform. The entity-specific fields come in as children.
#[derive(Properties, PartialEq)]
pub struct FormModalProps {
    pub is_open: bool,
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<String>,
    pub on_close: Callback<()>,
    pub on_save: Callback<()>,
    #[prop_or(AttrValue::Static("Simpan Perubahan"))]
    pub save_label: AttrValue,
    #[prop_or_default]
    pub busy: bool,
    pub children: Html,
}

#[function_component(FormModal)]
pub fn form_modal(props: &FormModalProps) -> Html {
    if !props.is_open {
        return html! {};
    }

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_panel_click = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_save_click = {
        let on_save = props.on_save.clone();
        Callback::from(move |_: MouseEvent| on_save.emit(()))
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal-panel" onclick={on_panel_click}>
                <div class="modal-header">
                    <div>
                        <h3 class="modal-title">{&props.title}</h3>
                        {if let Some(subtitle) = &props.subtitle {
                            html! { <p class="modal-subtitle">{subtitle}</p> }
                        } else { html! {} }}
                    </div>
                    <button type="button" class="modal-close" aria-label="Close" onclick={on_close_click.clone()}>
                        {"×"}
                    </button>
                </div>

                <div class="modal-body">
                    {props.children.clone()}
                </div>

                <div class="modal-footer">
                    <button type="button" class="btn btn-secondary" onclick={on_close_click} disabled={props.busy}>
                        {"Batal"}
                    </button>
                    <button type="button" class="btn btn-primary" onclick={on_save_click} disabled={props.busy}>
                        {if props.busy { "Menyimpan...".to_string() } else { props.save_label.to_string() }}
                    </button>
                </div>
            </div>
        </div>
    }
}
