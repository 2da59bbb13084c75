pub mod date_picker;
pub mod form_modal;
pub mod layout;
pub mod pagination;
pub mod sales_chart;
pub mod searchable_select;
pub mod stat_card;
pub mod store_edit_modal;
pub mod user_edit_modal;
