use shared::forms::{violation_for, FieldViolation, StoreField, StoreForm};
use shared::{Region, SaveStoreRequest, Store, StoreStatus};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::form_modal::FormModal;

#[derive(Properties, PartialEq)]
pub struct StoreEditModalProps {
    pub is_open: bool,
    /// `None` means "add new store"
    pub store: Option<Store>,
    pub regions: Vec<Region>,
    pub on_close: Callback<()>,
    /// Validated request plus the store id when editing
    pub on_save: Callback<(SaveStoreRequest, Option<i64>)>,
    #[prop_or_default]
    pub busy: bool,
}

#[function_component(StoreEditModal)]
pub fn store_edit_modal(props: &StoreEditModalProps) -> Html {
    let form = use_state(StoreForm::default);
    let violations = use_state(Vec::<FieldViolation<StoreField>>::new);

    // Re-seed the form whenever the modal opens or targets another store.
    {
        let form = form.clone();
        let violations = violations.clone();
        use_effect_with((props.is_open, props.store.clone()), move |(is_open, store)| {
            if *is_open {
                form.set(match store {
                    Some(store) => StoreForm::from_store(store),
                    None => StoreForm::default(),
                });
                violations.set(Vec::new());
            }
            || ()
        });
    }

    let is_editing = props.store.is_some();

    let on_name_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(StoreForm { name: input.value(), ..(*form).clone() });
        })
    };
    let on_region_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let region_id = select.value().parse::<i64>().ok();
            form.set(StoreForm { region_id, ..(*form).clone() });
        })
    };
    let on_address_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            form.set(StoreForm { address: area.value(), ..(*form).clone() });
        })
    };
    let on_phone_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(StoreForm { phone: input.value(), ..(*form).clone() });
        })
    };
    let on_status_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let status = if select.value() == "inactive" {
                StoreStatus::Inactive
            } else {
                StoreStatus::Active
            };
            form.set(StoreForm { status, ..(*form).clone() });
        })
    };

    let on_save = {
        let form = form.clone();
        let violations = violations.clone();
        let on_save = props.on_save.clone();
        let store_id = props.store.as_ref().map(|s| s.id);
        Callback::from(move |_| {
            let found = form.validate();
            if found.is_empty() {
                on_save.emit((form.to_request(), store_id));
            } else {
                violations.set(found);
            }
        })
    };

    let title = if is_editing { "Edit Toko" } else { "Tambah Toko Baru" };
    let save_label = if is_editing { "Simpan Perubahan" } else { "Tambah Toko" };

    html! {
        <FormModal
            is_open={props.is_open}
            title={title}
            on_close={props.on_close.clone()}
            {on_save}
            save_label={save_label}
            busy={props.busy}
        >
            <div class="form-group">
                <label class="form-label">{"Nama Toko"}</label>
                <input type="text" class="form-input" value={form.name.clone()} onchange={on_name_change} />
                {field_error(&violations, StoreField::Name)}
            </div>

            <div class="form-group">
                <label class="form-label">{"Regional"}</label>
                <select class="form-input" onchange={on_region_change}>
                    <option value="" selected={form.region_id.is_none()}>{"-- Pilih Regional --"}</option>
                    {for props.regions.iter().map(|region| html! {
                        <option value={region.id.to_string()} selected={form.region_id == Some(region.id)}>
                            {&region.name}
                        </option>
                    })}
                </select>
                {field_error(&violations, StoreField::Region)}
            </div>

            <div class="form-group">
                <label class="form-label">{"Alamat"}</label>
                <textarea class="form-input" rows="3" value={form.address.clone()} onchange={on_address_change} />
                {field_error(&violations, StoreField::Address)}
            </div>

            <div class="form-group">
                <label class="form-label">{"No. Telepon"}</label>
                <input type="text" class="form-input" value={form.phone.clone()} onchange={on_phone_change} />
                {field_error(&violations, StoreField::Phone)}
            </div>

            <div class="form-group">
                <label class="form-label">{"Status"}</label>
                <select class="form-input" onchange={on_status_change}>
                    <option value="active" selected={form.status == StoreStatus::Active}>{"Active"}</option>
                    <option value="inactive" selected={form.status == StoreStatus::Inactive}>{"Inactive"}</option>
                </select>
            </div>
        </FormModal>
    }
}

fn field_error(violations: &[FieldViolation<StoreField>], field: StoreField) -> Html {
    match violation_for(violations, field) {
        Some(violation) => html! { <p class="field-error">{violation.message()}</p> },
        None => html! {},
    }
}
