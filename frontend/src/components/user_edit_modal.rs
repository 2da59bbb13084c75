use shared::forms::{violation_for, FieldViolation, UserField, UserForm};
use shared::{Region, Role, StoreRef, UpdateUserRequest, User, UserStatus};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use super::form_modal::FormModal;

#[derive(Properties, PartialEq)]
pub struct UserEditModalProps {
    pub is_open: bool,
    pub user: Option<User>,
    pub roles: Vec<Role>,
    pub stores: Vec<StoreRef>,
    pub regions: Vec<Region>,
    pub on_close: Callback<()>,
    pub on_save: Callback<UpdateUserRequest>,
    #[prop_or_default]
    pub busy: bool,
}

#[function_component(UserEditModal)]
pub fn user_edit_modal(props: &UserEditModalProps) -> Html {
    let form = use_state(UserForm::default);
    let violations = use_state(Vec::<FieldViolation<UserField>>::new);

    {
        let form = form.clone();
        let violations = violations.clone();
        let roles = props.roles.clone();
        let stores = props.stores.clone();
        let regions = props.regions.clone();
        use_effect_with((props.is_open, props.user.clone()), move |(is_open, user)| {
            if *is_open {
                form.set(match user {
                    Some(user) => UserForm::from_user(user, &roles, &stores, &regions),
                    None => UserForm::default(),
                });
                violations.set(Vec::new());
            }
            || ()
        });
    }

    let Some(user) = props.user.clone() else {
        return html! {};
    };

    let on_role_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let role_id = select.value().parse::<i64>().ok();
            form.set(UserForm { role_id, ..(*form).clone() });
        })
    };
    let on_store_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let store_id = select.value().parse::<i64>().ok();
            form.set(UserForm { store_id, ..(*form).clone() });
        })
    };
    let on_region_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let region_id = select.value().parse::<i64>().ok();
            form.set(UserForm { region_id, ..(*form).clone() });
        })
    };
    let on_status_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let status = match select.value().as_str() {
                "active" => UserStatus::Active,
                "inactive" => UserStatus::Inactive,
                _ => UserStatus::Pending,
            };
            form.set(UserForm { status, ..(*form).clone() });
        })
    };

    let on_save = {
        let form = form.clone();
        let violations = violations.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |_| {
            let found = form.validate();
            if found.is_empty() {
                on_save.emit(form.to_request());
            } else {
                violations.set(found);
            }
        })
    };

    html! {
        <FormModal
            is_open={props.is_open}
            title={"Kelola User"}
            subtitle={Some(user.full_name.clone())}
            on_close={props.on_close.clone()}
            {on_save}
            busy={props.busy}
        >
            <div class="form-group">
                <label class="form-label">{"Role"}</label>
                <select class="form-input" onchange={on_role_change}>
                    <option value="" selected={form.role_id.is_none()}>{"-- Pilih Role --"}</option>
                    {for props.roles.iter().map(|role| html! {
                        <option value={role.id.to_string()} selected={form.role_id == Some(role.id)}>
                            {&role.name}
                        </option>
                    })}
                </select>
                {field_error(&violations, UserField::Role)}
            </div>

            <div class="form-group">
                <label class="form-label">{"Toko"}</label>
                <select class="form-input" onchange={on_store_change}>
                    <option value="" selected={form.store_id.is_none()}>
                        {"-- Pilih Toko (Kosongkan untuk Super Admin) --"}
                    </option>
                    {for props.stores.iter().map(|store| html! {
                        <option value={store.id.to_string()} selected={form.store_id == Some(store.id)}>
                            {&store.name}
                        </option>
                    })}
                </select>
                {field_error(&violations, UserField::Store)}
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
                {field_error(&violations, UserField::Region)}
            </div>

            <div class="form-group">
                <label class="form-label">{"Status"}</label>
                <select class="form-input" onchange={on_status_change}>
                    <option value="pending" selected={form.status == UserStatus::Pending}>{"Pending"}</option>
                    <option value="active" selected={form.status == UserStatus::Active}>{"Active"}</option>
                    <option value="inactive" selected={form.status == UserStatus::Inactive}>{"Inactive"}</option>
                </select>
            </div>
        </FormModal>
    }
}

fn field_error(violations: &[FieldViolation<UserField>], field: UserField) -> Html {
    match violation_for(violations, field) {
        Some(violation) => html! { <p class="field-error">{violation.message()}</p> },
        None => html! {},
    }
}
